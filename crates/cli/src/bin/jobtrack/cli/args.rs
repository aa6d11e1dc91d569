use std::fmt::Write;
use std::path::PathBuf;

use clap::builder::styling::{AnsiColor, Effects};
use clap::builder::{BoolishValueParser, Styles};
use clap::{
	ArgAction, ColorChoice, Command, CommandFactory, FromArgMatches, Parser, Subcommand, ValueEnum,
};
use jobtrack_core::app_dirs;
use jobtrack_core::records::ApplicationStatus;

/// Produce the full version banner including config and data directories.
fn long_version() -> &'static str {
	let config_dir = match app_dirs::get_config_dir() {
		Ok(path) => path.display().to_string(),
		Err(err) => format!("unavailable ({err})"),
	};
	let data_dir = match app_dirs::get_data_dir() {
		Ok(path) => path.display().to_string(),
		Err(err) => format!("unavailable ({err})"),
	};

	let mut details = format!("jobtrack {}", env!("CARGO_PKG_VERSION"));
	let _ = writeln!(details);
	let _ = writeln!(details, "config directory: {config_dir}");
	let _ = writeln!(details, "data directory: {data_dir}");

	Box::leak(details.into_boxed_str())
}

fn cli_styles() -> Styles {
	Styles::styled()
		.header(AnsiColor::Green.on_default().effects(Effects::BOLD))
		.usage(AnsiColor::Green.on_default().effects(Effects::BOLD))
		.literal(AnsiColor::Cyan.on_default())
		.placeholder(AnsiColor::Yellow.on_default())
}

/// Parse command line arguments into [`CliArgs`].
pub(crate) fn parse_cli() -> CliArgs {
	let mut matches = cli_command().get_matches();
	CliArgs::from_arg_matches_mut(&mut matches).unwrap_or_else(|err| err.exit())
}

fn cli_command() -> Command {
	CliArgs::command()
}

fn parse_status(value: &str) -> Result<ApplicationStatus, String> {
	value.parse().map_err(|err| format!("{err}"))
}

#[derive(Parser, Debug)]
#[command(
	name = "jobtrack",
	version,
	long_version = long_version(),
	about = "Track job applications and browse job listings from the terminal",
	color = ColorChoice::Auto,
	styles = cli_styles()
)]
pub(crate) struct CliArgs {
	#[arg(
		short,
		long = "config",
		value_name = "FILE",
		env = "JOBTRACK_CONFIG",
		action = ArgAction::Append,
		help = "Additional configuration file to merge (default: none)"
	)]
	pub(crate) config: Vec<PathBuf>,
	#[arg(
		short = 'n',
		long = "no-config",
		help = "Skip loading default configuration files (default: disabled)"
	)]
	pub(crate) no_config: bool,
	#[arg(
		long = "api-url",
		value_name = "URL",
		env = "JOBTRACK_API_URL",
		help = "Base URL of the job record API (default: http://127.0.0.1:8001)"
	)]
	pub(crate) api_url: Option<String>,
	#[arg(
		long = "search-url",
		value_name = "URL",
		env = "JOBTRACK_SEARCH_URL",
		help = "Base URL of the job listing feed (default: same as --api-url)"
	)]
	pub(crate) search_url: Option<String>,
	#[arg(
		long,
		value_name = "SECS",
		help = "Per-request timeout in seconds (default: none)"
	)]
	pub(crate) timeout: Option<u64>,
	#[arg(
		long,
		value_name = "THEME",
		help = "Select a theme by name (default: slate)"
	)]
	pub(crate) theme: Option<String>,
	#[arg(
		short = 't',
		long = "start-tab",
		value_enum,
		help = "Tab shown on start-up (default: dashboard)"
	)]
	pub(crate) start_tab: Option<TabArg>,
	#[arg(
		long = "initial-keyword",
		value_name = "TEXT",
		help = "Pre-fill the search keyword (default: empty)"
	)]
	pub(crate) initial_keyword: Option<String>,
	#[arg(
		long = "initial-location",
		value_name = "TEXT",
		help = "Pre-fill the search location (default: empty)"
	)]
	pub(crate) initial_location: Option<String>,
	#[arg(
		long = "auto-search",
		value_parser = BoolishValueParser::new(),
		help = "Search automatically when the search tab first opens (default: enabled)"
	)]
	pub(crate) auto_search: Option<bool>,
	#[arg(
		long = "guard-search",
		value_parser = BoolishValueParser::new(),
		help = "Ignore search triggers while a search is running (default: enabled)"
	)]
	pub(crate) guard_search: Option<bool>,
	#[arg(
		long = "log-level",
		value_name = "FILTER",
		help = "Log filter such as info or jobtrack_core=debug (default: info, warn for subcommands)"
	)]
	pub(crate) log_level: Option<String>,
	#[arg(
		long = "log-file",
		value_name = "FILE",
		help = "Write interactive logs to this file (default: jobtrack.log in the data directory)"
	)]
	pub(crate) log_file: Option<PathBuf>,
	#[arg(
		short = 'o',
		long,
		value_enum,
		default_value_t = OutputFormat::Plain,
		help = "Output format for subcommands"
	)]
	pub(crate) output: OutputFormat,
	#[arg(long = "print-config", help = "Print the effective configuration and exit")]
	pub(crate) print_config: bool,
	#[arg(long = "list-themes", help = "List available themes and exit")]
	pub(crate) list_themes: bool,
	#[command(subcommand)]
	pub(crate) command: Option<CommandArg>,
}

/// Headless operations. Without one, the terminal UI starts.
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub(crate) enum CommandArg {
	/// List tracked applications with summary stats.
	List,
	/// Record a new application.
	Add {
		#[arg(long)]
		company: String,
		#[arg(long)]
		position: String,
		#[arg(long, value_parser = parse_status, default_value = "Applied")]
		status: ApplicationStatus,
	},
	/// Change the status of an application.
	Status {
		id: String,
		#[arg(value_parser = parse_status)]
		status: ApplicationStatus,
	},
	/// Delete an application after confirmation.
	Delete {
		id: String,
		#[arg(short = 'y', long, help = "Skip the confirmation prompt")]
		yes: bool,
	},
	/// Query the job listing feed.
	Search {
		#[arg(short, long, default_value = "")]
		keyword: String,
		#[arg(short, long, default_value = "")]
		location: String,
		#[arg(short, long)]
		page: Option<u32>,
	},
	/// Check that the record API is reachable.
	Health,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub(crate) enum TabArg {
	Dashboard,
	Search,
}

impl TabArg {
	pub(crate) const fn as_str(self) -> &'static str {
		match self {
			Self::Dashboard => "dashboard",
			Self::Search => "search",
		}
	}
}

/// Output formats supported by the subcommands.
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub(crate) enum OutputFormat {
	Plain,
	Json,
}
