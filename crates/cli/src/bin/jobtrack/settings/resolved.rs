use std::io::{self, Write};
use std::path::PathBuf;

use jobtrack_core::api::ClientOptions;
use jobtrack_tui::{AppOptions, Tab, Theme};

/// Application-ready configuration derived from flags, config files and
/// defaults.
#[derive(Debug, Clone)]
pub(crate) struct ResolvedConfig {
	pub(crate) records_url: String,
	pub(crate) search_url: String,
	pub(crate) client: ClientOptions,
	pub(crate) theme_name: String,
	pub(crate) theme: Theme,
	pub(crate) start_tab: Tab,
	pub(crate) initial_keyword: String,
	pub(crate) initial_location: String,
	pub(crate) auto_search: bool,
	pub(crate) guard_search: bool,
	/// Explicit filter; each front-end applies its own default when unset.
	pub(crate) log_level: Option<String>,
	pub(crate) log_file: PathBuf,
}

impl ResolvedConfig {
	/// Options for the terminal UI.
	pub(crate) fn app_options(&self) -> AppOptions {
		AppOptions {
			start_tab: self.start_tab,
			initial_keyword: self.initial_keyword.clone(),
			initial_location: self.initial_location.clone(),
			auto_search: self.auto_search,
			guard_search: self.guard_search,
			theme: self.theme,
			..AppOptions::default()
		}
	}

	/// Print a human readable summary of the effective configuration.
	pub(crate) fn print_summary(&self) -> io::Result<()> {
		self.write_summary(&mut io::stdout().lock())
	}

	fn write_summary(&self, out: &mut impl Write) -> io::Result<()> {
		writeln!(out, "Effective configuration:")?;
		writeln!(out, "  Record API: {}", self.records_url)?;
		writeln!(out, "  Job search: {}", self.search_url)?;
		match self.client.timeout {
			Some(timeout) => writeln!(out, "  Timeout: {}s", timeout.as_secs())?,
			None => writeln!(out, "  Timeout: none")?,
		}
		writeln!(out, "  User agent: {}", self.client.user_agent)?;
		writeln!(out, "  UI theme: {}", self.theme_name)?;
		writeln!(out, "  Start tab: {}", self.start_tab)?;
		if !self.initial_keyword.is_empty() {
			writeln!(out, "  Initial keyword: {}", self.initial_keyword)?;
		}
		if !self.initial_location.is_empty() {
			writeln!(out, "  Initial location: {}", self.initial_location)?;
		}
		writeln!(out, "  Auto search: {}", bool_to_word(self.auto_search))?;
		writeln!(out, "  Guard search: {}", bool_to_word(self.guard_search))?;
		writeln!(
			out,
			"  Log level: {}",
			self.log_level.as_deref().unwrap_or("(default)")
		)?;
		writeln!(out, "  Log file: {}", self.log_file.display())?;
		Ok(())
	}
}

fn bool_to_word(value: bool) -> &'static str {
	if value { "yes" } else { "no" }
}
