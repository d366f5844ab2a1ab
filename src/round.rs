//! A single puzzle attempt.
//!
//! [`Round`] owns the guess log and drives the status machine:
//!
//! ```text
//!   InProgress ──(guess == target)──────────────▶ Won
//!       │
//!       └──(6th guess != target)────────────────▶ Lost
//! ```
//!
//! Both terminal states are final; late submissions are rejected as no-ops.

use chrono::{DateTime, NaiveDate, Utc};
use chrono_tz::Tz;
use serde::Serialize;
use std::fmt;
use tracing::{debug, info};

use crate::catalog::{Catalog, Country};
use crate::countdown::countdown_string;
use crate::error::{GameError, GameResult};
use crate::filter::{Eligibility, GameMode};
use crate::geo::{Direction, bearing_arrow, distance_km};
use crate::guess::{GuessEngine, SUGGESTION_LIMIT, input_hint, normalize};
use crate::reveal::RevealTier;
use crate::selector::select_daily;

/// Guesses allowed per round.
pub const MAX_GUESSES: usize = 6;

/// Round lifecycle state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum RoundStatus {
    /// Still accepting guesses.
    InProgress,
    /// Target guessed.
    Won,
    /// Guesses exhausted without a match.
    Lost,
}

impl RoundStatus {
    /// Whether no further guesses are accepted.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        !matches!(self, Self::InProgress)
    }
}

/// Distance and direction from a wrong guess to the target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Feedback {
    /// Great-circle distance, whole kilometres.
    pub distance_km: u32,
    /// Octant of the bearing from the guess towards the target.
    pub direction: Direction,
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} km {}", self.distance_km, self.direction)
    }
}

/// One row of the guess log as shown to the player.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GuessEntry<'a> {
    /// Guessed country.
    pub country: &'a Country,
    /// Whether this guess was the target.
    pub correct: bool,
    /// Feedback for wrong guesses; `None` for the correct one.
    pub feedback: Option<Feedback>,
}

/// Why a submission changed nothing. Diagnostic only; never shown as an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RejectReason {
    /// Input was empty after trimming.
    Blank,
    /// The round is already over.
    RoundOver,
    /// The text names a country that was already guessed.
    AlreadyGuessed,
    /// The text names a country outside the eligible set.
    Ineligible,
    /// Nothing matched.
    NoMatch,
}

/// State after an accepted guess.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AcceptedGuess<'a> {
    /// Country the submission resolved to.
    pub country: &'a Country,
    /// Round status after this guess.
    pub status: RoundStatus,
    /// Number of guesses made so far, including this one.
    pub guess_count: usize,
    /// Reveal tier after this guess.
    pub tier: RevealTier,
    /// Distance/direction to the target when the guess was wrong.
    pub feedback: Option<Feedback>,
}

/// Result of [`Round::submit_guess`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GuessOutcome<'a> {
    /// The guess was appended to the log.
    Accepted(AcceptedGuess<'a>),
    /// Nothing changed.
    Rejected(RejectReason),
}

impl<'a> GuessOutcome<'a> {
    /// The accepted guess, if any.
    #[must_use]
    pub const fn accepted(&self) -> Option<&AcceptedGuess<'a>> {
        match self {
            Self::Accepted(guess) => Some(guess),
            Self::Rejected(_) => None,
        }
    }

    /// Whether the round state changed.
    #[must_use]
    pub const fn is_accepted(&self) -> bool {
        matches!(self, Self::Accepted(_))
    }
}

/// End-of-round payload for the result view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResultSummary {
    /// Whether the player found the target.
    pub won: bool,
    /// Mode the round was played in.
    pub mode: GameMode,
    /// Guesses used.
    pub guess_count: usize,
    /// Target display name.
    pub country_name: String,
    /// Target code (flag/shape asset key).
    pub country_code: String,
    /// Target capital.
    pub capital: String,
    /// Puzzle date (daily only).
    pub date: Option<NaiveDate>,
    /// `HH:MM:SS` until the next daily puzzle (daily only).
    pub countdown: Option<String>,
}

impl ResultSummary {
    /// Recompute the countdown for a new instant. No-op for infinite rounds.
    pub fn refresh_countdown(&mut self, tz: Tz, now: DateTime<Utc>) {
        if self.mode == GameMode::Daily {
            self.countdown = Some(countdown_string(tz, now));
        }
    }
}

/// One puzzle attempt.
#[derive(Debug, Clone)]
pub struct Round<'a> {
    catalog: Catalog<'a>,
    target: &'a Country,
    rule: Eligibility,
    date: Option<NaiveDate>,
    guesses: Vec<&'a Country>,
    status: RoundStatus,
    suggestion_limit: usize,
}

impl<'a> Round<'a> {
    /// Start a round for `target` under `rule`.
    ///
    /// `target` should be admitted by `rule`; otherwise it can never be guessed.
    #[must_use]
    pub fn new(catalog: Catalog<'a>, target: &'a Country, rule: Eligibility, date: Option<NaiveDate>) -> Self {
        info!(mode = %rule.mode, filter = %rule.filter, "round started");
        Self {
            catalog,
            target,
            rule,
            date,
            guesses: Vec::with_capacity(MAX_GUESSES),
            status: RoundStatus::InProgress,
            suggestion_limit: SUGGESTION_LIMIT,
        }
    }

    /// Start the daily round for `date`.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::EmptyEligibleSet`] if the catalog has no sovereign state.
    pub fn daily(catalog: Catalog<'a>, date: NaiveDate) -> GameResult<Self> {
        let target = select_daily(catalog, date)?;
        Ok(Self::new(catalog, target, Eligibility::daily(), Some(date)))
    }

    /// Override the autocomplete cap.
    #[must_use]
    pub const fn with_suggestion_limit(mut self, limit: usize) -> Self {
        self.suggestion_limit = limit;
        self
    }

    /// Catalog the round draws from.
    #[must_use]
    pub const fn catalog(&self) -> Catalog<'a> {
        self.catalog
    }

    /// Country to guess.
    #[must_use]
    pub const fn target(&self) -> &'a Country {
        self.target
    }

    /// Mode of this round.
    #[must_use]
    pub const fn mode(&self) -> GameMode {
        self.rule.mode
    }

    /// Eligibility rule in effect.
    #[must_use]
    pub const fn rule(&self) -> Eligibility {
        self.rule
    }

    /// Puzzle date for daily rounds.
    #[must_use]
    pub const fn date(&self) -> Option<NaiveDate> {
        self.date
    }

    /// Current status.
    #[must_use]
    pub const fn status(&self) -> RoundStatus {
        self.status
    }

    /// Whether the round is over.
    #[must_use]
    pub const fn is_finished(&self) -> bool {
        self.status.is_terminal()
    }

    /// Accepted guesses in order.
    #[must_use]
    pub fn guesses(&self) -> &[&'a Country] {
        &self.guesses
    }

    /// Accepted guess names in order.
    #[must_use]
    pub fn guess_names(&self) -> Vec<&'a str> {
        self.guesses.iter().map(|c| c.name).collect()
    }

    /// Number of accepted guesses that were not the target.
    #[must_use]
    pub fn wrong_guess_count(&self) -> usize {
        self.guesses.iter().filter(|c| !self.is_target(c)).count()
    }

    /// Current reveal tier.
    #[must_use]
    pub fn tier(&self) -> RevealTier {
        RevealTier::for_round(self.wrong_guess_count(), self.is_finished())
    }

    /// Placeholder text for the guess box.
    #[must_use]
    pub fn input_hint(&self) -> String {
        input_hint(&self.rule, self.is_finished())
    }

    /// Autocomplete and acceptance engine for this round.
    #[must_use]
    pub fn engine(&self) -> GuessEngine<'a> {
        GuessEngine::new(self.catalog, self.rule).with_limit(self.suggestion_limit)
    }

    /// Suggestions for `query`, excluding countries already guessed.
    #[must_use]
    pub fn suggest(&self, query: &str) -> Vec<&'a Country> {
        self.engine().suggest(query, &self.guess_names())
    }

    /// Guess log with per-entry correctness and feedback.
    #[must_use]
    pub fn entries(&self) -> Vec<GuessEntry<'a>> {
        self.guesses
            .iter()
            .map(|&country| {
                let correct = self.is_target(country);
                GuessEntry {
                    country,
                    correct,
                    feedback: (!correct).then(|| self.feedback_for(country)),
                }
            })
            .collect()
    }

    fn is_target(&self, country: &Country) -> bool {
        country.has_name(self.target.name)
    }

    fn feedback_for(&self, guess: &Country) -> Feedback {
        Feedback {
            distance_km: distance_km(guess.position(), self.target.position()),
            direction: bearing_arrow(guess.position(), self.target.position()),
        }
    }

    /// Submit raw guess text.
    ///
    /// Accepted when it resolves (top suggestion, else exact match) to an
    /// eligible, not-yet-guessed country. Anything else is a silent no-op.
    pub fn submit_guess(&mut self, text: &str) -> GuessOutcome<'a> {
        if self.is_finished() {
            debug!(text, "guess after round end ignored");
            return GuessOutcome::Rejected(RejectReason::RoundOver);
        }

        let previous = self.guess_names();
        let Some(country) = self.engine().resolve_submission(text, &previous) else {
            let reason = self.classify_rejection(text, &previous);
            debug!(text, ?reason, "guess rejected");
            return GuessOutcome::Rejected(reason);
        };

        self.guesses.push(country);
        let correct = self.is_target(country);
        if correct {
            self.status = RoundStatus::Won;
        } else if self.guesses.len() >= MAX_GUESSES {
            self.status = RoundStatus::Lost;
        }

        let feedback = (!correct).then(|| self.feedback_for(country));
        debug!(guess = country.name, correct, count = self.guesses.len(), "guess accepted");
        if self.is_finished() {
            info!(status = ?self.status, guesses = self.guesses.len(), target = self.target.name, "round finished");
        }

        GuessOutcome::Accepted(AcceptedGuess {
            country,
            status: self.status,
            guess_count: self.guesses.len(),
            tier: self.tier(),
            feedback,
        })
    }

    fn classify_rejection(&self, text: &str, previous: &[&str]) -> RejectReason {
        if normalize(text).is_empty() {
            return RejectReason::Blank;
        }
        match self.catalog.find_by_name(text) {
            Some(c) if previous.iter().any(|p| c.has_name(p)) => RejectReason::AlreadyGuessed,
            Some(c) if !self.rule.admits(c) => RejectReason::Ineligible,
            _ => RejectReason::NoMatch,
        }
    }

    /// End-of-round payload.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::StaleResultQuery`] while the round is in progress.
    pub fn build_result_summary(&self, tz: Tz, now: DateTime<Utc>) -> GameResult<ResultSummary> {
        if !self.is_finished() {
            return Err(GameError::StaleResultQuery);
        }

        let mut summary = ResultSummary {
            won: self.status == RoundStatus::Won,
            mode: self.mode(),
            guess_count: self.guesses.len(),
            country_name: self.target.name.to_string(),
            country_code: self.target.code.to_string(),
            capital: self.target.capital.to_string(),
            date: self.date,
            countdown: None,
        };
        summary.refresh_countdown(tz, now);
        Ok(summary)
    }

    /// Copyable text summary of a finished round.
    ///
    /// ```text
    /// Shape Guess Daily 2025-03-14 3/6
    /// 🟥🟥🟩
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`GameError::StaleResultQuery`] while the round is in progress.
    pub fn build_share_text(&self) -> GameResult<String> {
        if !self.is_finished() {
            return Err(GameError::StaleResultQuery);
        }

        let score = if self.status == RoundStatus::Won {
            self.guesses.len().to_string()
        } else {
            "X".to_string()
        };

        let header = match (self.mode(), self.date) {
            (GameMode::Daily, Some(date)) => format!("Shape Guess Daily {date} {score}/{MAX_GUESSES}"),
            (GameMode::Daily, None) => format!("Shape Guess Daily {score}/{MAX_GUESSES}"),
            (GameMode::Infinite, _) => format!(
                "Shape Guess Infinite {score}/{MAX_GUESSES} ({})",
                self.rule.filter
            ),
        };

        let squares: String = self
            .guesses
            .iter()
            .map(|c| if self.is_target(c) { "🟩" } else { "🟥" })
            .collect();

        Ok(format!("{header}\n{squares}"))
    }
}
