use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::Modifier;
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, Cell, Paragraph, Row};

use super::super::App;
use super::super::state::DashboardFocus;
use crate::components::{TableSpec, render_stats, render_table};

impl App<'_> {
	pub(super) fn draw_dashboard(&mut self, frame: &mut Frame, area: Rect) {
		let [form_area, stats_area, table_area] = Layout::vertical([
			Constraint::Length(3),
			Constraint::Length(3),
			Constraint::Min(3),
		])
		.areas(area);

		self.draw_form(frame, form_area);
		render_stats(
			frame,
			stats_area,
			&self.dashboard.stats(),
			&self.ui.stats,
			&self.style.theme,
		);
		self.draw_applications(frame, table_area);
	}

	fn draw_form(&mut self, frame: &mut Frame, area: Rect) {
		let [company_area, position_area, status_area, add_area] = Layout::horizontal([
			Constraint::Fill(2),
			Constraint::Fill(2),
			Constraint::Length(18),
			Constraint::Length(9),
		])
		.areas(area);

		let theme = self.style.theme;
		let focus = self.dashboard_focus;
		self.company_input.render(
			frame,
			company_area,
			&self.ui.fields.company,
			focus == DashboardFocus::Company,
			&theme,
		);
		self.position_input.render(
			frame,
			position_area,
			&self.ui.fields.position,
			focus == DashboardFocus::Position,
			&theme,
		);

		let status_border = if focus == DashboardFocus::Status {
			theme.focus_style()
		} else {
			theme.border_style()
		};
		let status = Paragraph::new(format!("◀ {} ▶", self.dashboard.form.status))
			.alignment(Alignment::Center)
			.block(
				Block::default()
					.borders(Borders::ALL)
					.border_set(ratatui::symbols::border::ROUNDED)
					.border_style(status_border)
					.title(self.ui.fields.status.clone()),
			);
		frame.render_widget(status, status_area);

		let add = Paragraph::new(Line::from(self.ui.fields.add.clone()))
			.style(theme.highlight)
			.alignment(Alignment::Center)
			.block(
				Block::default()
					.borders(Borders::ALL)
					.border_set(ratatui::symbols::border::ROUNDED)
					.border_style(theme.border_style()),
			);
		frame.render_widget(add, add_area);
	}

	fn draw_applications(&mut self, frame: &mut Frame, area: Rect) {
		let status_style = self.style.theme.highlight.remove_modifier(Modifier::BOLD);
		let rows = self
			.dashboard
			.applications()
			.iter()
			.map(|record| {
				Row::new(vec![
					Cell::from(record.company.clone()),
					Cell::from(record.position.clone()),
					Cell::from(record.status.to_string()).style(status_style),
				])
			})
			.collect::<Vec<_>>();

		let pane = &self.ui.dashboard.pane;
		let spec = TableSpec {
			headers: pane.columns.clone(),
			widths: vec![
				Constraint::Fill(2),
				Constraint::Fill(2),
				Constraint::Length(14),
			],
			rows,
			title: Some(format!(
				"{} ({})",
				pane.table_title,
				self.dashboard.applications().len()
			)),
			empty_message: Some(pane.empty_message.clone()),
			focused: self.dashboard_focus == DashboardFocus::Table,
		};
		render_table(
			frame,
			area,
			&mut self.applications_table,
			spec,
			&self.style.theme,
		);
	}
}
