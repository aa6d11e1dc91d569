//! Single-line text field backed by `tui-textarea`.

use ratatui::Frame;
use ratatui::crossterm::event::{KeyCode, KeyEvent};
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::widgets::{Block, Borders};
use tui_textarea::{CursorMove, TextArea};

use crate::style::Theme;

/// A bordered one-line input.
#[derive(Debug, Clone)]
pub struct FieldInput<'a> {
	textarea: TextArea<'a>,
	placeholder: String,
}

impl<'a> FieldInput<'a> {
	#[must_use]
	pub fn new(text: impl Into<String>) -> Self {
		let mut input = Self {
			textarea: TextArea::default(),
			placeholder: String::new(),
		};
		input.set_text(&text.into());
		input
	}

	#[must_use]
	pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
		self.placeholder = placeholder.into();
		self.textarea.set_placeholder_text(self.placeholder.clone());
		self
	}

	#[must_use]
	pub fn text(&self) -> &str {
		self.textarea
			.lines()
			.first()
			.map(String::as_str)
			.unwrap_or("")
	}

	/// Replace the contents and move the cursor to the end.
	pub fn set_text(&mut self, text: &str) {
		let line = text.replace(['\n', '\r'], " ");
		self.textarea = TextArea::new(vec![line]);
		self.textarea.set_cursor_line_style(Style::default());
		if !self.placeholder.is_empty() {
			self.textarea.set_placeholder_text(self.placeholder.clone());
		}
		self.textarea.move_cursor(CursorMove::End);
	}

	/// Feed a key to the field. Returns `true` if the text changed.
	///
	/// Keys that would break the single line (`Enter`, `Tab`) are ignored.
	pub fn input(&mut self, key: KeyEvent) -> bool {
		if matches!(key.code, KeyCode::Enter | KeyCode::Tab | KeyCode::BackTab) {
			return false;
		}
		let before = self.text().to_string();
		self.textarea.input(key);
		self.text() != before
	}

	pub fn render(&mut self, frame: &mut Frame, area: Rect, title: &str, focused: bool, theme: &Theme) {
		let border = if focused {
			theme.focus_style()
		} else {
			theme.border_style()
		};
		let block = Block::default()
			.borders(Borders::ALL)
			.border_set(ratatui::symbols::border::ROUNDED)
			.border_style(border)
			.title(title.to_string());
		let inner = block.inner(area);
		frame.render_widget(block, area);

		let cursor = if focused {
			Style::default().add_modifier(Modifier::REVERSED)
		} else {
			Style::default()
		};
		self.textarea.set_cursor_style(cursor);
		self.textarea.set_placeholder_style(theme.empty_style());
		frame.render_widget(&self.textarea, inner);
	}
}

impl Default for FieldInput<'_> {
	fn default() -> Self {
		Self::new("")
	}
}
