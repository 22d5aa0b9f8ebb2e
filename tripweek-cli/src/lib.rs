//! Command-line host for the Tripweek planning engine.
//!
//! The engine crates perform no I/O. This crate reads a JSON planning
//! snapshot, layers command options from defaults, configuration files,
//! `TRIPWEEK_*` environment variables and flags, and prints results as JSON.
#![forbid(unsafe_code)]

use clap::{Parser, Subcommand};
use env_logger::Env;

mod error;
mod plan;
mod snapshot;
mod suggest;

pub use error::CliError;

use plan::{PlanArgs, run_plan};
use suggest::{SuggestArgs, run_suggest};

pub(crate) const ARG_SNAPSHOT: &str = "snapshot";
pub(crate) const ARG_YEAR: &str = "year";
pub(crate) const ARG_QUARTER: &str = "quarter";
pub(crate) const ARG_LOCATION: &str = "location";
pub(crate) const ARG_TOP_N: &str = "top-n";
pub(crate) const ARG_EXCLUDE: &str = "exclude";
pub(crate) const ENV_SUGGEST_SNAPSHOT: &str = "TRIPWEEK_CMDS_SUGGEST_SNAPSHOT_PATH";
pub(crate) const ENV_SUGGEST_YEAR: &str = "TRIPWEEK_CMDS_SUGGEST_YEAR";
pub(crate) const ENV_SUGGEST_QUARTER: &str = "TRIPWEEK_CMDS_SUGGEST_QUARTER";
pub(crate) const ENV_SUGGEST_LOCATION: &str = "TRIPWEEK_CMDS_SUGGEST_LOCATION";
pub(crate) const ENV_PLAN_SNAPSHOT: &str = "TRIPWEEK_CMDS_PLAN_SNAPSHOT_PATH";
pub(crate) const ENV_PLAN_YEAR: &str = "TRIPWEEK_CMDS_PLAN_YEAR";

/// Run the Tripweek CLI with the current process arguments and environment.
///
/// # Errors
/// Returns [`CliError`] when arguments, configuration, the snapshot, or the
/// planning request are invalid, or when output cannot be written.
pub fn run() -> Result<(), CliError> {
    let cli = Cli::try_parse().map_err(CliError::ArgumentParsing)?;
    init_logging(cli.verbose);
    let mut stdout = std::io::stdout().lock();
    match cli.command {
        Command::Suggest(args) => run_suggest(args, &mut stdout),
        Command::Plan(args) => run_plan(args, &mut stdout),
    }
}

fn init_logging(verbose: bool) {
    let env = if verbose {
        Env::default().default_filter_or("debug")
    } else {
        Env::default().default_filter_or("warn")
    };
    if env_logger::Builder::from_env(env).try_init().is_err() {
        log::debug!("logger already installed");
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "tripweek",
    about = "Suggest business weeks for flexible trips",
    version
)]
pub(crate) struct Cli {
    /// Log planning decisions at debug level (RUST_LOG takes precedence).
    #[arg(short, long, global = true)]
    pub(crate) verbose: bool,
    #[command(subcommand)]
    pub(crate) command: Command,
}

#[derive(Debug, Subcommand)]
pub(crate) enum Command {
    /// Rank the weeks of one quarter for a single trip.
    Suggest(SuggestArgs),
    /// Place every queued trip of a snapshot on distinct weeks.
    Plan(PlanArgs),
}

/// Serialise `value` as pretty JSON followed by a newline.
pub(crate) fn write_json<T>(writer: &mut dyn std::io::Write, value: &T) -> Result<(), CliError>
where
    T: serde::Serialize + ?Sized,
{
    let payload = serde_json::to_string_pretty(value).map_err(CliError::SerialiseOutput)?;
    writer
        .write_all(payload.as_bytes())
        .map_err(CliError::WriteOutput)?;
    writer.write_all(b"\n").map_err(CliError::WriteOutput)?;
    Ok(())
}

#[cfg(test)]
mod tests;
