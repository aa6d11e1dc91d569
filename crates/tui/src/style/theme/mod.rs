mod builtins;
mod types;

use thiserror::Error;

pub use builtins::{LIGHT, SLATE, SOLARIZED};
pub use types::{Theme, ThemeDefinition};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown theme `{name}` (available: {available})")]
pub struct ThemeError {
	pub name: String,
	pub available: String,
}

/// Name of the theme used when none is configured.
pub const DEFAULT_THEME: &str = "slate";

/// Theme used when none is configured.
#[must_use]
pub fn default_theme() -> Theme {
	SLATE
}

/// Built-in themes in display order.
#[must_use]
pub fn definitions() -> &'static [ThemeDefinition] {
	builtins::DEFINITIONS
}

/// Canonical theme names.
#[must_use]
pub fn names() -> Vec<&'static str> {
	definitions().iter().map(|definition| definition.name).collect()
}

/// Look up a theme by name or alias, ignoring case.
///
/// # Errors
///
/// Returns [`ThemeError`] listing the valid names when nothing matches.
pub fn by_name(name: &str) -> Result<Theme, ThemeError> {
	definitions()
		.iter()
		.find(|definition| definition.matches(name))
		.map(|definition| definition.theme)
		.ok_or_else(|| ThemeError {
			name: name.to_string(),
			available: names().join(", "),
		})
}

impl Default for Theme {
	fn default() -> Self {
		default_theme()
	}
}
