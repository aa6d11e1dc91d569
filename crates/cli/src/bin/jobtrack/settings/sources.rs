use std::env;
use std::path::PathBuf;

use anyhow::Result;
use config::{Config, File};
use jobtrack_core::app_dirs;

use crate::cli::CliArgs;

/// Prefix of nested overrides such as `JOBTRACK__API__RECORDS_URL`.
const ENV_PREFIX: &str = "JOBTRACK";

/// Merge jobtrack's settings layers. Later layers override earlier ones:
///
/// 1. `config.toml` in the per-user config directory
/// 2. `./.jobtrack.toml`, then `./jobtrack.toml`
/// 3. each `--config` file, in the order given
/// 4. `JOBTRACK__<SECTION>__<KEY>` environment variables
///
/// `--no-config` drops the first two layers. Missing default files are
/// skipped; a missing `--config` file is an error. Command-line flags are
/// not read here; they are applied to the merged result afterwards.
pub(super) fn build_config(cli: &CliArgs) -> Result<Config> {
	let mut builder = Config::builder();

	if !cli.no_config {
		for path in default_config_files() {
			builder = builder.add_source(File::from(path).required(false));
		}
	}

	for path in &cli.config {
		builder = builder.add_source(File::from(path.clone()).required(true));
	}

	builder = builder.add_source(
		config::Environment::with_prefix(ENV_PREFIX)
			.separator("__")
			.try_parsing(true),
	);

	Ok(builder.build()?)
}

/// Locations read unless `--no-config` is given, user directory first.
pub(super) fn default_config_files() -> Vec<PathBuf> {
	let mut files = Vec::new();

	if let Ok(dir) = app_dirs::get_config_dir() {
		files.push(dir.join("config.toml"));
	}

	if let Ok(current_dir) = env::current_dir() {
		files.push(current_dir.join(".jobtrack.toml"));
		files.push(current_dir.join("jobtrack.toml"));
	}

	files
}

#[cfg(test)]
mod tests {
	use super::*;

	use std::io::Write;

	use clap::Parser;
	use tempfile::NamedTempFile;

	fn config_file(contents: &str) -> NamedTempFile {
		let mut file = tempfile::Builder::new()
			.suffix(".toml")
			.tempfile()
			.unwrap();
		file.write_all(contents.as_bytes()).unwrap();
		file
	}

	#[test]
	fn project_files_follow_the_user_file_and_plain_name_wins() {
		let files = default_config_files();
		let position = |name: &str| {
			files
				.iter()
				.position(|path| path.file_name().is_some_and(|file| file == name))
		};
		let hidden = position(".jobtrack.toml").unwrap();
		let plain = position("jobtrack.toml").unwrap();
		assert!(hidden < plain);
		assert_eq!(plain, files.len() - 1);
		if let Some(user) = position("config.toml") {
			assert!(user < hidden);
		}
	}

	#[test]
	fn later_config_files_override_earlier_ones() {
		let first = config_file("[ui]\ntheme = \"light\"\ninitial_keyword = \"rust\"\n");
		let second = config_file("[ui]\ntheme = \"mono\"\n");
		let cli = CliArgs::try_parse_from([
			"jobtrack",
			"--no-config",
			"-c",
			first.path().to_str().unwrap(),
			"-c",
			second.path().to_str().unwrap(),
		])
		.unwrap();

		let config = build_config(&cli).unwrap();
		assert_eq!(config.get_string("ui.theme").unwrap(), "mono");
		assert_eq!(config.get_string("ui.initial_keyword").unwrap(), "rust");
	}

	#[test]
	fn no_config_reads_only_explicit_files() {
		let cli = CliArgs::try_parse_from(["jobtrack", "--no-config"]).unwrap();
		let config = build_config(&cli).unwrap();
		assert!(config.get_string("ui.theme").is_err());
	}
}
