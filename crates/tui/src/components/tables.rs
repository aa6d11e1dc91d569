use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Rect};
use ratatui::style::Style;
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::{
	Block, Borders, Cell, HighlightSpacing, Paragraph, Row, Table, TableState,
};

use crate::style::Theme;

pub(crate) const HIGHLIGHT_SYMBOL: &str = "▶ ";
pub(crate) const TABLE_COLUMN_SPACING: u16 = 1;
pub(crate) const TABLE_HIGHLIGHT_SPACING: HighlightSpacing = HighlightSpacing::WhenSelected;
/// Header row + separator height inside the table's viewport.
pub(crate) const TABLE_HEADER_ROWS: u16 = 2;

/// Fully materialized table configuration.
pub struct TableSpec<'a> {
	pub headers: Vec<String>,
	pub widths: Vec<Constraint>,
	pub rows: Vec<Row<'a>>,
	pub title: Option<String>,
	/// Shown centered below the header when there are no rows.
	pub empty_message: Option<String>,
	pub focused: bool,
}

/// Render a bordered table with a header separator.
pub fn render_table(
	frame: &mut Frame,
	area: Rect,
	table_state: &mut TableState,
	spec: TableSpec<'_>,
	theme: &Theme,
) {
	let border_style = if spec.focused {
		theme.focus_style()
	} else {
		theme.border_style()
	};
	let mut block = Block::default()
		.borders(Borders::ALL)
		.border_set(ratatui::symbols::border::ROUNDED)
		.border_style(border_style);
	if let Some(title) = spec.title.clone() {
		block = block.title(title);
	}

	let inner = block.inner(area);
	frame.render_widget(block, area);

	let is_empty = spec.rows.is_empty();
	let empty_message = spec.empty_message.clone();
	render_configured_table(frame, inner, table_state, theme, spec);

	if is_empty
		&& let Some(message) = empty_message
	{
		render_empty_message(frame, inner, &message, theme);
	}
}

fn render_configured_table(
	frame: &mut Frame,
	area: Rect,
	table_state: &mut TableState,
	theme: &Theme,
	spec: TableSpec<'_>,
) {
	let header_cells = spec.headers.into_iter().map(Cell::from).collect::<Vec<_>>();
	let header = Row::new(header_cells)
		.style(Style::default().fg(theme.header_fg()))
		.height(1)
		.bottom_margin(1);

	let mut widths = spec.widths;
	if widths.is_empty() {
		widths = vec![Constraint::Fill(1)];
	}

	let table = Table::new(spec.rows, widths)
		.header(header)
		.column_spacing(TABLE_COLUMN_SPACING)
		.highlight_spacing(TABLE_HIGHLIGHT_SPACING)
		.row_highlight_style(theme.row_highlight)
		.highlight_symbol(HIGHLIGHT_SYMBOL);
	frame.render_stateful_widget(table, area, table_state);

	render_header_separator(frame, area, theme);
}

fn render_header_separator(frame: &mut Frame, area: Rect, theme: &Theme) {
	if area.height <= 1 {
		return;
	}
	let width = area.width as usize;
	if width == 0 {
		return;
	}

	let sep_rect = Rect {
		x: area.x,
		y: area.y + 1,
		width: area.width,
		height: 1,
	};
	if width <= 2 {
		frame.render_widget(Paragraph::new(" ".repeat(width)), sep_rect);
		return;
	}

	let middle = Span::styled("─".repeat(width - 2), theme.border_style());
	let spans = vec![Span::raw(" "), middle, Span::raw(" ")];
	frame.render_widget(Paragraph::new(Text::from(Line::from(spans))), sep_rect);
}

fn render_empty_message(frame: &mut Frame, area: Rect, message: &str, theme: &Theme) {
	if area.height <= TABLE_HEADER_ROWS {
		return;
	}
	let message_area = Rect {
		x: area.x,
		y: area.y + TABLE_HEADER_ROWS,
		width: area.width,
		height: 1,
	};
	let empty = Paragraph::new(message.to_string())
		.style(theme.empty_style())
		.alignment(Alignment::Center);
	frame.render_widget(empty, message_area);
}

/// Keep the selection inside `len` rows, selecting the first row when there
/// was none.
pub(crate) fn clamp_selection(state: &mut TableState, len: usize) {
	match (state.selected(), len) {
		(_, 0) => state.select(None),
		(None, _) => state.select(Some(0)),
		(Some(selected), len) if selected >= len => state.select(Some(len - 1)),
		_ => {}
	}
}

pub(crate) fn move_up(state: &mut TableState) {
	if let Some(selected) = state.selected()
		&& selected > 0
	{
		state.select(Some(selected - 1));
	}
}

pub(crate) fn move_down(state: &mut TableState, len: usize) {
	match state.selected() {
		Some(selected) if selected + 1 < len => state.select(Some(selected + 1)),
		None if len > 0 => state.select(Some(0)),
		_ => {}
	}
}
