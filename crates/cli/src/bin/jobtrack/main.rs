mod cli;
mod commands;
mod settings;

use std::io::{self, BufRead, Write};
use std::sync::Arc;

use anyhow::{Context, Result};
use cli::{CommandArg, OutputFormat, Printer, parse_cli};
use jobtrack_core::api::{HttpListingFeed, HttpRecordApi};
use jobtrack_core::records::JobApplication;
use jobtrack_core::{Session, logging};
use settings::ResolvedConfig;
use tracing::info;

/// Headless commands stay quiet unless asked otherwise.
const HEADLESS_LEVEL: &str = "warn";

fn main() -> Result<()> {
	let cli = parse_cli();

	if cli.list_themes {
		for name in jobtrack_tui::style::names() {
			println!("{name}");
		}
		return Ok(());
	}

	let resolved = settings::load(&cli)?;

	if cli.print_config {
		resolved.print_summary()?;
		return Ok(());
	}

	match cli.command {
		Some(command) => run_headless(command, cli.output, &resolved),
		None => run_interactive(&resolved),
	}
}

fn clients(settings: &ResolvedConfig) -> Result<(Arc<HttpRecordApi>, Arc<HttpListingFeed>)> {
	let records = HttpRecordApi::new(&settings.records_url, &settings.client)
		.context("failed to build the record API client")?;
	let listings = HttpListingFeed::new(&settings.search_url, &settings.client)
		.context("failed to build the job search client")?;
	Ok((Arc::new(records), Arc::new(listings)))
}

/// Launch the terminal UI, logging to a file.
fn run_interactive(settings: &ResolvedConfig) -> Result<()> {
	let level = settings
		.log_level
		.as_deref()
		.unwrap_or(logging::DEFAULT_LEVEL);
	logging::init_file(&settings.log_file, level)?;
	info!(
		records = %settings.records_url,
		search = %settings.search_url,
		"starting jobtrack"
	);

	let (records, listings) = clients(settings)?;
	jobtrack_tui::run(records, listings, settings.app_options())
}

/// Run one subcommand, logging to stderr.
fn run_headless(command: CommandArg, format: OutputFormat, settings: &ResolvedConfig) -> Result<()> {
	let level = settings.log_level.as_deref().unwrap_or(HEADLESS_LEVEL);
	logging::init_stderr(level)?;

	let (records, listings) = clients(settings)?;
	let mut session = Session::new(records, listings).context("failed to start the async runtime")?;
	let stdout = io::stdout();
	let mut printer = Printer::new(stdout.lock(), format);
	commands::run(
		&mut session,
		command,
		&mut printer,
		&settings.records_url,
		confirm_on_stdin,
	)
}

/// Ask `y/N` on stderr and read the answer from stdin.
fn confirm_on_stdin(application: &JobApplication) -> bool {
	eprint!(
		"Delete {} at {}? [y/N] ",
		application.position, application.company
	);
	let _ = io::stderr().flush();
	let mut answer = String::new();
	if io::stdin().lock().read_line(&mut answer).is_err() {
		return false;
	}
	matches!(answer.trim(), "y" | "Y" | "yes" | "Yes")
}
