//! Command-line interface for the Oasis cool-island engine.
//!
//! `oasis refresh` runs the engine once and publishes the dataset as JSON;
//! `oasis top` reads a published dataset and prints the coolest spots.
#![forbid(unsafe_code)]

use clap::{Parser, Subcommand};

mod error;
mod refresh;
mod top;

pub use error::CliError;

use refresh::RefreshArgs;
use top::TopArgs;

/// Dataset path shared by `refresh` (output) and `top` (input).
pub(crate) const DEFAULT_DATASET_PATH: &str = "current_status.json";

pub(crate) const ARG_REFRESH_OUTPUT: &str = "output";
pub(crate) const ARG_REFRESH_SYNTHETIC_COUNT: &str = "synthetic-count";
pub(crate) const ARG_REFRESH_SEED: &str = "seed";
pub(crate) const ARG_REFRESH_OFFLINE: &str = "offline";
pub(crate) const ARG_REFRESH_WEATHER_URL: &str = "weather-url";
pub(crate) const ARG_REFRESH_AIR_QUALITY_URL: &str = "air-quality-url";
pub(crate) const ARG_REFRESH_TIMEOUT_SECS: &str = "timeout-secs";
pub(crate) const ARG_TOP_INPUT: &str = "input";
pub(crate) const ARG_TOP_CATEGORY: &str = "category";
pub(crate) const ARG_TOP_MIN_COMFORT: &str = "min-comfort";
pub(crate) const ARG_TOP_LIMIT: &str = "limit";

/// Run the Oasis CLI with the current process arguments and environment.
///
/// # Errors
/// Returns [`CliError`] when parsing, configuration, the engine run or any
/// file or terminal I/O fails.
pub fn run() -> Result<(), CliError> {
    let cli = Cli::try_parse().map_err(CliError::ArgumentParsing)?;
    match cli.command {
        Command::Refresh(args) => refresh::run_refresh(args),
        Command::Top(args) => top::run_top(args),
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "oasis",
    about = "Locate and rank cool islands during heat episodes",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Fetch ambient conditions, run the engine and write the dataset.
    Refresh(RefreshArgs),
    /// Print the coolest spots from a published dataset.
    Top(TopArgs),
}

#[cfg(test)]
mod tests;
