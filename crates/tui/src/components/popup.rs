use ratatui::Frame;
use ratatui::layout::{Constraint, Flex, Layout, Rect};
use ratatui::text::{Line, Text};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};
use unicode_width::UnicodeWidthStr;

use crate::style::Theme;

const MIN_WIDTH: u16 = 30;
const MAX_WIDTH: u16 = 70;

/// Modal message box drawn over the active pane.
pub struct Popup<'a> {
	pub title: &'a str,
	pub lines: Vec<String>,
	pub footer: &'a str,
	/// Use the error style for the border.
	pub is_error: bool,
}

pub fn render_popup(frame: &mut Frame, area: Rect, popup: Popup<'_>, theme: &Theme) {
	let content_width = popup
		.lines
		.iter()
		.map(|line| line.width())
		.chain([popup.title.width(), popup.footer.width()])
		.max()
		.unwrap_or(0);
	let wanted = u16::try_from(content_width).unwrap_or(u16::MAX).saturating_add(4);
	let width = wanted.clamp(MIN_WIDTH, MAX_WIDTH).min(area.width);
	let inner_width = usize::from(width.saturating_sub(2)).max(1);
	let body_rows: usize = popup
		.lines
		.iter()
		.map(|line| line.width().div_ceil(inner_width).max(1))
		.sum();
	let body_height = u16::try_from(body_rows).unwrap_or(u16::MAX);
	let height = body_height.saturating_add(3).min(area.height);
	let rect = centered(area, width, height);

	let border = if popup.is_error {
		theme.error
	} else {
		theme.focus_style()
	};
	let block = Block::default()
		.borders(Borders::ALL)
		.border_set(ratatui::symbols::border::ROUNDED)
		.border_style(border)
		.title(popup.title.to_string())
		.title_bottom(Line::from(popup.footer.to_string()).right_aligned());

	let mut text = Text::default();
	for line in popup.lines {
		text.lines.push(Line::from(line));
	}
	let body = Paragraph::new(text).wrap(Wrap { trim: true }).block(block);

	frame.render_widget(Clear, rect);
	frame.render_widget(body, rect);
}

fn centered(area: Rect, width: u16, height: u16) -> Rect {
	let [row] = Layout::vertical([Constraint::Length(height)])
		.flex(Flex::Center)
		.areas(area);
	let [rect] = Layout::horizontal([Constraint::Length(width)])
		.flex(Flex::Center)
		.areas(row);
	rect
}

#[cfg(test)]
mod tests {
	use ratatui::Terminal;
	use ratatui::backend::TestBackend;

	use super::*;
	use crate::test_util::buffer_text;

	#[test]
	fn popup_draws_title_body_and_footer() {
		let mut terminal = Terminal::new(TestBackend::new(70, 12)).unwrap();
		terminal
			.draw(|frame| {
				let popup = Popup {
					title: "Error",
					lines: vec!["Please fill in all fields".into()],
					footer: "Enter close",
					is_error: true,
				};
				render_popup(frame, frame.area(), popup, &Theme::default());
			})
			.unwrap();

		let text = buffer_text(terminal.backend().buffer());
		assert!(text.contains("Error"));
		assert!(text.contains("Please fill in all fields"));
		assert!(text.contains("Enter close"));
	}
}
