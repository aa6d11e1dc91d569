use ratatui::buffer::Buffer;

/// Flatten a rendered buffer into newline-separated rows.
pub(crate) fn buffer_text(buffer: &Buffer) -> String {
	let width = usize::from(buffer.area.width).max(1);
	buffer
		.content()
		.chunks(width)
		.map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
		.collect::<Vec<_>>()
		.join("\n")
}
