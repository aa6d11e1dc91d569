use anyhow::{Result, anyhow};

use super::raw::RawConfig;
use super::resolved::ResolvedConfig;
use super::sources::build_config;
use crate::cli::CliArgs;

/// Load configuration by combining config files, environment variables and
/// CLI arguments.
pub(crate) fn load(cli: &CliArgs) -> Result<ResolvedConfig> {
	let builder = build_config(cli)?;
	let mut raw: RawConfig = builder
		.try_deserialize()
		.map_err(|err| anyhow!("failed to deserialize configuration: {err}"))?;
	raw.apply_cli_overrides(cli);
	raw.resolve()
}

#[cfg(test)]
mod tests {
	use std::io::Write;

	use clap::Parser;
	use jobtrack_tui::Tab;
	use pretty_assertions::assert_eq;
	use tempfile::NamedTempFile;

	use super::*;

	fn config_file(contents: &str) -> NamedTempFile {
		let mut file = tempfile::Builder::new()
			.suffix(".toml")
			.tempfile()
			.unwrap();
		file.write_all(contents.as_bytes()).unwrap();
		file
	}

	#[test]
	fn file_values_are_used_and_flags_win() {
		let file = config_file(
			r#"
			[api]
			records_url = "http://records.test:9000/"
			search_url = "https://search.test"
			timeout_secs = 5

			[ui]
			theme = "light"
			start_tab = "search"
			initial_keyword = "rust"
			"#,
		);
		let path = file.path().to_str().unwrap();
		let cli = CliArgs::try_parse_from([
			"jobtrack",
			"--no-config",
			"-c",
			path,
			"--initial-keyword",
			"go",
		])
		.unwrap();

		let resolved = load(&cli).unwrap();
		assert_eq!(resolved.records_url, "http://records.test:9000/");
		assert_eq!(resolved.search_url, "https://search.test");
		assert_eq!(resolved.client.timeout, Some(std::time::Duration::from_secs(5)));
		assert_eq!(resolved.theme_name, "light");
		assert_eq!(resolved.start_tab, Tab::Search);
		assert_eq!(resolved.initial_keyword, "go");
	}

	#[test]
	fn invalid_file_values_are_reported() {
		let file = config_file(
			r#"
			[api]
			records_url = "ftp://records.test"
			"#,
		);
		let path = file.path().to_str().unwrap();
		let cli = CliArgs::try_parse_from(["jobtrack", "--no-config", "-c", path]).unwrap();

		let err = load(&cli).unwrap_err();
		assert!(format!("{err:#}").contains("http"));
	}

	#[test]
	fn missing_explicit_file_is_an_error() {
		let cli = CliArgs::try_parse_from([
			"jobtrack",
			"--no-config",
			"-c",
			"/nonexistent/jobtrack-test.toml",
		])
		.unwrap();
		assert!(load(&cli).is_err());
	}
}
