mod args;
mod output;

pub(crate) use args::{CliArgs, CommandArg, OutputFormat, parse_cli};
pub(crate) use output::Printer;
