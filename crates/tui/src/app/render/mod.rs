mod dashboard;
mod search;

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Margin};
use ratatui::widgets::Paragraph;

use super::App;
use super::state::Tab;
use crate::components::{Popup, TabBar, render_popup, render_tab_bar};

impl App<'_> {
	pub fn draw(&mut self, frame: &mut Frame) {
		let area = frame.area().inner(Margin {
			vertical: 0,
			horizontal: 1,
		});
		let [tabs_area, body_area, hint_area] = Layout::vertical([
			Constraint::Length(1),
			Constraint::Min(1),
			Constraint::Length(1),
		])
		.areas(area);

		let bar = TabBar {
			titles: self.ui.tab_titles(),
			selected: self.tab.index(),
			in_flight: self.worker.in_flight(),
			throbber_state: &self.throbber_state,
		};
		render_tab_bar(frame, tabs_area, bar, &self.style.theme);

		let hint = match self.tab {
			Tab::Dashboard => {
				self.draw_dashboard(frame, body_area);
				self.ui.dashboard.pane.hint.as_str()
			}
			Tab::Search => {
				self.draw_search(frame, body_area);
				self.ui.search.pane.hint.as_str()
			}
		};
		frame.render_widget(
			Paragraph::new(hint.to_string()).style(self.style.theme.empty_style()),
			hint_area,
		);

		self.draw_popups(frame);
	}

	fn draw_popups(&self, frame: &mut Frame) {
		let area = frame.area();
		if let Some(alert) = self.dashboard.alert() {
			let mut lines = vec![alert.message.clone()];
			if let Some(detail) = &alert.detail {
				lines.push(String::new());
				lines.push(detail.clone());
			}
			let popup = Popup {
				title: &self.ui.alert_title,
				lines,
				footer: "Enter close",
				is_error: true,
			};
			render_popup(frame, area, popup, &self.style.theme);
		} else if let Some(record) = self.dashboard.pending_delete() {
			let popup = Popup {
				title: &self.ui.confirm_delete_title,
				lines: vec![format!(
					"Delete {} at {}?",
					record.position, record.company
				)],
				footer: "y delete · n cancel",
				is_error: false,
			};
			render_popup(frame, area, popup, &self.style.theme);
		}
	}
}
