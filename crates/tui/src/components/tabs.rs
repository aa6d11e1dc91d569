use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Tabs};
use throbber_widgets_tui::{Throbber, ThrobberState};

use crate::style::Theme;

/// Argument bundle for the tab bar.
pub struct TabBar<'a> {
	pub titles: [&'a str; 2],
	pub selected: usize,
	/// Requests still in flight; the throbber animates while non-zero.
	pub in_flight: usize,
	pub throbber_state: &'a ThrobberState,
}

/// Render the tab selector with the activity indicator on the right.
pub fn render_tab_bar(frame: &mut Frame, area: Rect, bar: TabBar<'_>, theme: &Theme) {
	let [tabs_area, status_area] =
		Layout::horizontal([Constraint::Min(1), Constraint::Length(14)]).areas(area);

	let titles = bar
		.titles
		.iter()
		.enumerate()
		.map(|(index, title)| Line::from(format!(" F{} {title} ", index + 1)));
	let tabs = Tabs::new(titles)
		.select(bar.selected)
		.style(theme.tab_inactive_style())
		.highlight_style(theme.tab_highlight_style())
		.divider("")
		.padding("", " ");
	frame.render_widget(tabs, tabs_area);

	if bar.in_flight == 0 {
		return;
	}
	let muted = theme.empty_style();
	let spinner = Throbber::default()
		.style(muted)
		.throbber_style(muted)
		.to_symbol_span(bar.throbber_state);
	let line = Line::from(vec![spinner, Span::styled("working", muted)]);
	frame.render_widget(Paragraph::new(line).right_aligned(), status_area);
}

#[cfg(test)]
mod tests {
	use ratatui::Terminal;
	use ratatui::backend::TestBackend;

	use super::*;
	use crate::test_util::buffer_text;

	fn draw(in_flight: usize) -> String {
		let mut terminal = Terminal::new(TestBackend::new(60, 1)).unwrap();
		let state = ThrobberState::default();
		terminal
			.draw(|frame| {
				let bar = TabBar {
					titles: ["Dashboard", "Job Search"],
					selected: 1,
					in_flight,
					throbber_state: &state,
				};
				render_tab_bar(frame, frame.area(), bar, &Theme::default());
			})
			.unwrap();
		buffer_text(terminal.backend().buffer())
	}

	#[test]
	fn shows_both_tabs_with_function_keys() {
		let text = draw(0);
		assert!(text.contains("F1 Dashboard"));
		assert!(text.contains("F2 Job Search"));
		assert!(!text.contains("working"));
	}

	#[test]
	fn indicator_only_while_busy() {
		assert!(draw(1).contains("working"));
	}
}
