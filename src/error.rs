//! Error types for the game engine.
//!
//! Invalid guesses are deliberately absent here: a guess that does not resolve
//! is a silent no-op (see [`crate::round::GuessOutcome::Rejected`]).

use std::path::PathBuf;

use thiserror::Error;

use crate::filter::{GameFilter, GameMode};

/// Errors surfaced by engine operations.
#[derive(Debug, Error)]
pub enum GameError {
    /// The mode + filter combination (after exclusions) admits no country.
    #[error("no eligible country for {mode:?} mode with filter {filter} ({excluded} excluded)")]
    EmptyEligibleSet {
        /// Mode the selection ran in.
        mode: GameMode,
        /// Filter in effect.
        filter: GameFilter,
        /// Number of names that were excluded from the draw.
        excluded: usize,
    },

    /// A result summary was requested while the round is still in progress.
    #[error("round is still in progress; result summary is not available")]
    StaleResultQuery,

    /// The configured reference time zone is not a known IANA name.
    #[error("unknown time zone: {0}")]
    UnknownTimezone(String),

    /// Configuration was readable but semantically invalid.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// Reading a configuration file failed.
    #[error("failed to read {}: {source}", path.display())]
    Io {
        /// File that could not be read.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Parsing a configuration file failed.
    #[error("failed to parse {}: {source}", path.display())]
    Json {
        /// File that could not be parsed.
        path: PathBuf,
        /// Underlying JSON error.
        #[source]
        source: serde_json::Error,
    },
}

/// Result alias for engine operations.
pub type GameResult<T> = Result<T, GameError>;
