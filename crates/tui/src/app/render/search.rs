use jobtrack_core::search::{SearchMessage, SearchPhase};
use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Row};

use super::super::App;
use super::super::state::SearchFocus;
use crate::components::{TableSpec, render_table};

impl App<'_> {
	pub(super) fn draw_search(&mut self, frame: &mut Frame, area: Rect) {
		let [inputs_area, status_area, table_area, detail_area] = Layout::vertical([
			Constraint::Length(3),
			Constraint::Length(1),
			Constraint::Min(3),
			Constraint::Length(1),
		])
		.areas(area);

		self.draw_search_inputs(frame, inputs_area);
		frame.render_widget(self.status_line(), status_area);
		self.draw_results(frame, table_area);

		let detail = self
			.selected_listing()
			.map(|listing| listing.url.clone())
			.unwrap_or_default();
		frame.render_widget(
			Paragraph::new(detail).style(self.style.theme.empty_style()),
			detail_area,
		);
	}

	fn draw_search_inputs(&mut self, frame: &mut Frame, area: Rect) {
		let [keyword_area, location_area, button_area] = Layout::horizontal([
			Constraint::Fill(1),
			Constraint::Fill(1),
			Constraint::Length(14),
		])
		.areas(area);

		let theme = self.style.theme;
		let focus = self.search_focus;
		self.keyword_input.render(
			frame,
			keyword_area,
			&self.ui.fields.keyword,
			focus == SearchFocus::Keyword,
			&theme,
		);
		self.location_input.render(
			frame,
			location_area,
			&self.ui.fields.location,
			focus == SearchFocus::Location,
			&theme,
		);

		let (label, style) = if self.search.can_search() {
			(self.ui.fields.search.clone(), theme.highlight)
		} else {
			(self.ui.fields.searching.clone(), theme.empty_style())
		};
		let button = Paragraph::new(label)
			.style(style)
			.alignment(Alignment::Center)
			.block(
				Block::default()
					.borders(Borders::ALL)
					.border_set(ratatui::symbols::border::ROUNDED)
					.border_style(theme.border_style()),
			);
		frame.render_widget(button, button_area);
	}

	fn status_line(&self) -> Paragraph<'static> {
		let theme = &self.style.theme;
		let line = match (self.search.phase(), self.search.message()) {
			(SearchPhase::Loading, _) => Line::from(Span::styled("Searching…", theme.empty_style())),
			(_, Some(message @ SearchMessage::RequestFailed(_))) => {
				Line::from(Span::styled(message.to_string(), theme.error))
			}
			(_, Some(message)) => Line::from(Span::styled(message.to_string(), theme.empty_style())),
			(SearchPhase::Ready, None) => {
				let count = self.search.count();
				let noun = if count == 1 { "job" } else { "jobs" };
				Line::from(format!("{count} {noun} found"))
			}
			_ => Line::default(),
		};
		Paragraph::new(line)
	}

	fn draw_results(&mut self, frame: &mut Frame, area: Rect) {
		let rows = self
			.search
			.results()
			.iter()
			.map(|listing| {
				Row::new(vec![
					listing.title.clone(),
					listing.company_name.clone(),
					listing.location.clone(),
					listing.job_type_label(),
				])
			})
			.collect::<Vec<_>>();

		let pane = &self.ui.search.pane;
		let empty_message = (self.search.message() == Some(SearchMessage::NoResults))
			.then(|| pane.empty_message.clone());
		let spec = TableSpec {
			headers: pane.columns.clone(),
			widths: vec![
				Constraint::Fill(3),
				Constraint::Fill(2),
				Constraint::Fill(2),
				Constraint::Length(12),
			],
			rows,
			title: Some(pane.table_title.clone()),
			empty_message,
			focused: self.search_focus == SearchFocus::Results,
		};
		render_table(
			frame,
			area,
			&mut self.results_table,
			spec,
			&self.style.theme,
		);
	}
}
