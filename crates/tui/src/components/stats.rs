use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::Modifier;
use ratatui::widgets::{Block, Borders, Paragraph};

use jobtrack_core::records::ApplicationStats;

use crate::config::StatsLabels;
use crate::style::Theme;

/// Three summary cards: total, rejections and success rate.
pub fn render_stats(
	frame: &mut Frame,
	area: Rect,
	stats: &ApplicationStats,
	labels: &StatsLabels,
	theme: &Theme,
) {
	let cards: [Rect; 3] = Layout::horizontal([Constraint::Ratio(1, 3); 3])
		.spacing(1)
		.areas(area);
	let values = [
		(labels.total.as_str(), stats.total.to_string()),
		(labels.rejected.as_str(), stats.rejected.to_string()),
		(labels.success_rate.as_str(), format!("{}%", stats.success_rate)),
	];

	for (card, (title, value)) in cards.into_iter().zip(values) {
		let block = Block::default()
			.borders(Borders::ALL)
			.border_set(ratatui::symbols::border::ROUNDED)
			.border_style(theme.border_style())
			.title(title.to_string());
		let paragraph = Paragraph::new(value)
			.style(theme.highlight.add_modifier(Modifier::BOLD))
			.alignment(Alignment::Center)
			.block(block);
		frame.render_widget(paragraph, card);
	}
}
