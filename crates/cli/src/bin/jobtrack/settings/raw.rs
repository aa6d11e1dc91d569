use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use jobtrack_core::api::{ClientOptions, DEFAULT_BASE_URL};
use jobtrack_core::app_dirs;
use jobtrack_tui::{Tab, style};
use serde::Deserialize;
use thiserror::Error;

use super::resolved::ResolvedConfig;
use crate::cli::CliArgs;

/// Mirror of the configuration file before CLI overrides and validation.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct RawConfig {
	api: ApiSection,
	ui: UiSection,
	logging: LoggingSection,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct ApiSection {
	records_url: Option<String>,
	search_url: Option<String>,
	timeout_secs: Option<u64>,
	user_agent: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct UiSection {
	theme: Option<String>,
	start_tab: Option<String>,
	initial_keyword: Option<String>,
	initial_location: Option<String>,
	auto_search: Option<bool>,
	guard_search: Option<bool>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct LoggingSection {
	level: Option<String>,
	file: Option<PathBuf>,
}

/// A configuration value that cannot be used.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub(super) enum ValidationError {
	#[error("{field} must not be empty")]
	EmptyUrl { field: &'static str },
	#[error("{field} must be an http or https URL, got '{value}'")]
	UnsupportedScheme { field: &'static str, value: String },
	#[error("api.timeout_secs must be greater than zero")]
	ZeroTimeout,
}

fn validate_url(field: &'static str, value: String) -> Result<String, ValidationError> {
	let trimmed = value.trim();
	if trimmed.is_empty() {
		return Err(ValidationError::EmptyUrl { field });
	}
	let lower = trimmed.to_ascii_lowercase();
	if !(lower.starts_with("http://") || lower.starts_with("https://")) {
		return Err(ValidationError::UnsupportedScheme {
			field,
			value: trimmed.to_string(),
		});
	}
	Ok(trimmed.to_string())
}

impl RawConfig {
	/// Apply CLI overrides on top of the raw configuration values.
	pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
		if let Some(url) = cli.api_url.clone() {
			self.api.records_url = Some(url);
		}
		if let Some(url) = cli.search_url.clone() {
			self.api.search_url = Some(url);
		}
		if let Some(secs) = cli.timeout {
			self.api.timeout_secs = Some(secs);
		}

		if let Some(theme) = cli.theme.clone() {
			self.ui.theme = Some(theme);
		}
		if let Some(tab) = cli.start_tab {
			self.ui.start_tab = Some(tab.as_str().to_string());
		}
		if let Some(keyword) = cli.initial_keyword.clone() {
			self.ui.initial_keyword = Some(keyword);
		}
		if let Some(location) = cli.initial_location.clone() {
			self.ui.initial_location = Some(location);
		}
		if let Some(value) = cli.auto_search {
			self.ui.auto_search = Some(value);
		}
		if let Some(value) = cli.guard_search {
			self.ui.guard_search = Some(value);
		}

		if let Some(level) = cli.log_level.clone() {
			self.logging.level = Some(level);
		}
		if let Some(file) = cli.log_file.clone() {
			self.logging.file = Some(file);
		}
	}

	/// Validate the merged values and fill in defaults.
	pub(super) fn resolve(self) -> Result<ResolvedConfig> {
		let records_url = validate_url(
			"api.records_url",
			self.api
				.records_url
				.unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
		)
		.context("invalid record API URL")?;
		// The feed lives next to the record API unless configured separately.
		let search_url = match self.api.search_url {
			Some(url) => validate_url("api.search_url", url).context("invalid job search URL")?,
			None => records_url.clone(),
		};

		let mut client = ClientOptions::default();
		if let Some(secs) = self.api.timeout_secs {
			if secs == 0 {
				return Err(ValidationError::ZeroTimeout).context("invalid request timeout");
			}
			client.timeout = Some(Duration::from_secs(secs));
		}
		if let Some(agent) = self.api.user_agent.filter(|agent| !agent.trim().is_empty()) {
			client.user_agent = agent;
		}

		let theme_name = self
			.ui
			.theme
			.unwrap_or_else(|| style::DEFAULT_THEME.to_string());
		let theme = style::by_name(&theme_name).context("invalid ui.theme")?;

		let start_tab = match self.ui.start_tab {
			Some(tab) => tab.parse::<Tab>().context("invalid ui.start_tab")?,
			None => Tab::default(),
		};

		let log_file = match self.logging.file {
			Some(path) => path,
			None => app_dirs::default_log_file()?,
		};

		Ok(ResolvedConfig {
			records_url,
			search_url,
			client,
			theme_name,
			theme,
			start_tab,
			initial_keyword: self.ui.initial_keyword.unwrap_or_default(),
			initial_location: self.ui.initial_location.unwrap_or_default(),
			auto_search: self.ui.auto_search.unwrap_or(true),
			guard_search: self.ui.guard_search.unwrap_or(true),
			log_level: self.logging.level,
			log_file,
		})
	}
}

#[cfg(test)]
mod tests {
	use clap::Parser;
	use pretty_assertions::assert_eq;

	use super::*;

	fn resolve(raw: RawConfig) -> ResolvedConfig {
		let mut raw = raw;
		raw.logging.file = Some(PathBuf::from("/tmp/jobtrack-test.log"));
		raw.resolve().unwrap()
	}

	#[test]
	fn defaults_point_both_clients_at_the_local_api() {
		let resolved = resolve(RawConfig::default());
		assert_eq!(resolved.records_url, DEFAULT_BASE_URL);
		assert_eq!(resolved.search_url, DEFAULT_BASE_URL);
		assert_eq!(resolved.client.timeout, None);
		assert_eq!(resolved.start_tab, Tab::Dashboard);
		assert!(resolved.auto_search);
		assert!(resolved.guard_search);
		assert_eq!(resolved.log_level, None);
	}

	#[test]
	fn cli_overrides_take_precedence() {
		let cli = CliArgs::try_parse_from([
			"jobtrack",
			"--api-url",
			"http://cli.test",
			"--timeout",
			"3",
			"--theme",
			"solarized",
			"--start-tab",
			"search",
			"--initial-location",
			"Berlin",
			"--guard-search",
			"false",
			"--log-level",
			"debug",
		])
		.unwrap();

		let mut raw = RawConfig::default();
		raw.api.records_url = Some("http://file.test".into());
		raw.ui.theme = Some("light".into());
		raw.apply_cli_overrides(&cli);

		assert_eq!(raw.api.records_url.as_deref(), Some("http://cli.test"));
		assert_eq!(raw.api.timeout_secs, Some(3));
		assert_eq!(raw.ui.theme.as_deref(), Some("solarized"));
		assert_eq!(raw.ui.start_tab.as_deref(), Some("search"));
		assert_eq!(raw.ui.initial_location.as_deref(), Some("Berlin"));
		assert_eq!(raw.ui.guard_search, Some(false));
		assert_eq!(raw.logging.level.as_deref(), Some("debug"));
	}

	#[test]
	fn rejects_unusable_values() {
		let mut raw = RawConfig::default();
		raw.api.records_url = Some("   ".into());
		assert!(raw.resolve().is_err());

		let mut raw = RawConfig::default();
		raw.api.timeout_secs = Some(0);
		let err = raw.resolve().unwrap_err();
		assert!(format!("{err:#}").contains("greater than zero"));

		let mut raw = RawConfig::default();
		raw.ui.start_tab = Some("settings".into());
		assert!(raw.resolve().is_err());

		let mut raw = RawConfig::default();
		raw.ui.theme = Some("neon".into());
		assert!(raw.resolve().is_err());
	}

	#[test]
	fn url_validation_keeps_scheme_case_insensitive() {
		assert_eq!(
			validate_url("api.records_url", " HTTPS://api.test ".into()),
			Ok("HTTPS://api.test".to_string())
		);
		assert_eq!(
			validate_url("api.records_url", "localhost:8001".into()),
			Err(ValidationError::UnsupportedScheme {
				field: "api.records_url",
				value: "localhost:8001".into(),
			})
		);
	}
}
