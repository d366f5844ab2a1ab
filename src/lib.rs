// Allow unwrap and unreadable literals in tests (test code is not production)
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::unreadable_literal))]
#![cfg_attr(test, allow(clippy::cast_possible_truncation))]
//! Shapeguess: game logic engine for a country-shape guessing game.
//!
//! The player sees a progressively de-obscured outline of a country and has
//! six guesses to name it, with distance and direction feedback after each
//! wrong guess.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────┐
//! │   Session (mode switch, next shape) │
//! ├─────────────────────────────────────┤
//! │   Round (guess log, status, result) │
//! ├──────────┬──────────┬───────────────┤
//! │ Selector │  Guess   │ Reveal / Geo  │
//! ├──────────┴──────────┴───────────────┤
//! │      Catalog + Eligibility rule     │
//! └─────────────────────────────────────┘
//! ```
//!
//! Rendering, flags and animations are left to the caller; the engine only
//! produces the values they need (tier, suggestions, feedback, result).

pub mod autoplay;
pub mod catalog;
pub mod config;
pub mod countdown;
pub mod error;
pub mod filter;
pub mod geo;
pub mod guess;
pub mod reveal;
pub mod round;
pub mod selector;
pub mod session;

pub use error::{GameError, GameResult};

// Re-export key types at crate root for convenience
pub use catalog::{Catalog, Continent, Country, CountryType, Difficulty};
pub use config::GameConfig;
pub use filter::{
    ContinentFilter, DifficultyFilter, DifficultyRule, Eligibility, GameFilter, GameMode,
    TypeFilter,
};
pub use geo::{Direction, GeoPoint, bearing_arrow, distance_km};
pub use guess::GuessEngine;
pub use reveal::RevealTier;
pub use round::{
    AcceptedGuess, Feedback, GuessEntry, GuessOutcome, MAX_GUESSES, RejectReason, ResultSummary,
    Round, RoundStatus,
};
pub use selector::{InfiniteSelector, select_daily};
pub use session::Session;
