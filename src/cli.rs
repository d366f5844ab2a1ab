//! CLI command implementations for Shapeguess.

pub(crate) mod countdown;
pub(crate) mod countries;
pub(crate) mod daily;
pub(crate) mod play;
pub(crate) mod simulate;
pub(crate) mod suggest;

mod output;

use chrono::{NaiveDate, Utc};
use clap::{Args, ValueEnum};
use shapeguess::{ContinentFilter, DifficultyFilter, GameConfig, GameFilter, TypeFilter};
use std::error::Error;
use std::fmt;
use std::path::Path;

/// Output format for listing commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub(crate) enum OutputFormat {
    /// Human-readable text output.
    Text,
    /// Machine-readable JSON output.
    Json,
}

/// Output format for the `schedule` command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub(crate) enum ScheduleFormat {
    /// Human-readable text output.
    Text,
    /// Machine-readable JSON output.
    Json,
    /// CSV format.
    Csv,
}

/// Mode selector for commands that evaluate eligibility.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub(crate) enum ModeArg {
    /// Daily rules: sovereign states only, filter ignored.
    Daily,
    /// Infinite rules: filter applies.
    Infinite,
}

/// Filter flags shared by several commands.
#[derive(Debug, Clone, Copy, Args)]
pub(crate) struct FilterArgs {
    /// Continent: All, Africa, Americas, Asia, Europe, Oceania
    #[arg(long, default_value = "All")]
    pub(crate) continent: ContinentFilter,

    /// Region type: All, Sovereign, Territory
    #[arg(long = "type", default_value = "All")]
    pub(crate) kind: TypeFilter,

    /// Difficulty: Mixed, Easy, Normal, Hard
    #[arg(long, default_value = "Mixed")]
    pub(crate) difficulty: DifficultyFilter,
}

impl FilterArgs {
    /// Build the engine filter.
    pub(crate) fn filter(self) -> GameFilter {
        GameFilter::new(self.continent, self.difficulty, self.kind)
    }
}

/// CLI error type.
#[derive(Debug)]
pub(crate) struct CliError {
    message: String,
}

impl CliError {
    /// Create a new CLI error.
    pub(crate) fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl Error for CliError {}

impl From<std::io::Error> for CliError {
    fn from(e: std::io::Error) -> Self {
        Self::new(e.to_string())
    }
}

impl From<shapeguess::GameError> for CliError {
    fn from(e: shapeguess::GameError) -> Self {
        Self::new(e.to_string())
    }
}

impl From<serde_json::Error> for CliError {
    fn from(e: serde_json::Error) -> Self {
        Self::new(format!("JSON serialization failed: {e}"))
    }
}

/// Load the configuration file if one was given.
pub(crate) fn load_config(path: Option<&Path>) -> Result<GameConfig, CliError> {
    Ok(GameConfig::load_or_default(path)?)
}

/// Date given on the command line, or today in the configured zone.
pub(crate) fn resolve_date(date: Option<NaiveDate>, config: &GameConfig) -> Result<NaiveDate, CliError> {
    match date {
        Some(d) => Ok(d),
        None => Ok(shapeguess::countdown::today_in(config.tz()?, Utc::now())),
    }
}

/// Seed given on the command line, or one derived from the wall clock.
#[allow(clippy::cast_possible_truncation)]
pub(crate) fn resolve_seed(seed: Option<u64>) -> u64 {
    seed.unwrap_or_else(|| {
        use std::time::{SystemTime, UNIX_EPOCH};
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_nanos() as u64)
            .unwrap_or(42)
    })
}
