//! Subscriber setup.
//!
//! The terminal UI owns stdout, so interactive runs write to a log file.
//! Headless commands log to stderr. `JOBTRACK_LOG` takes precedence over the
//! configured level in both cases.

use std::fs::{self, OpenOptions};
use std::path::Path;
use std::sync::Mutex;

use anyhow::{Context, Result, anyhow};
use tracing_subscriber::EnvFilter;

pub const LOG_ENV: &str = "JOBTRACK_LOG";
pub const DEFAULT_LEVEL: &str = "info";

/// Build the filter from `JOBTRACK_LOG`, falling back to `level`.
///
/// # Errors
///
/// Fails when neither the environment nor `level` is a valid directive.
pub fn env_filter(level: &str) -> Result<EnvFilter> {
	if let Ok(filter) = EnvFilter::try_from_env(LOG_ENV) {
		return Ok(filter);
	}
	EnvFilter::try_new(level).map_err(|err| anyhow!("invalid log level '{level}': {err}"))
}

/// Append log lines to `path`, creating parent directories as needed.
///
/// # Errors
///
/// Fails if the file cannot be opened or a subscriber is already installed.
pub fn init_file(path: &Path, level: &str) -> Result<()> {
	if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
		fs::create_dir_all(parent)
			.with_context(|| format!("failed to create log directory {}", parent.display()))?;
	}
	let file = OpenOptions::new()
		.create(true)
		.append(true)
		.open(path)
		.with_context(|| format!("failed to open log file {}", path.display()))?;

	tracing_subscriber::fmt()
		.with_env_filter(env_filter(level)?)
		.with_ansi(false)
		.with_target(true)
		.with_writer(Mutex::new(file))
		.try_init()
		.map_err(|err| anyhow!("failed to initialize tracing subscriber: {err}"))
}

/// Log to stderr, as headless commands do.
///
/// # Errors
///
/// Fails if a subscriber is already installed.
pub fn init_stderr(level: &str) -> Result<()> {
	tracing_subscriber::fmt()
		.with_env_filter(env_filter(level)?)
		.with_writer(std::io::stderr)
		.without_time()
		.try_init()
		.map_err(|err| anyhow!("failed to initialize tracing subscriber: {err}"))
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn rejects_malformed_level() {
		if std::env::var_os(LOG_ENV).is_some() {
			return;
		}
		assert!(env_filter("info").is_ok());
		assert!(env_filter("debug,jobtrack_core=trace").is_ok());
		assert!(env_filter("jobtrack=loud").is_err());
	}
}
