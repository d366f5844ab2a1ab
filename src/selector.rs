//! Target selection for daily and infinite rounds.
//!
//! Daily selection is a pure function of the calendar date. Infinite selection
//! draws from a seeded generator, so a session replays identically from its seed.

// Index derivation casts u64 hashes into slice indices
#![allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]

use chrono::NaiveDate;
use tracing::debug;

use crate::catalog::{Catalog, Country};
use crate::error::{GameError, GameResult};
use crate::filter::{DifficultyRule, Eligibility, GameFilter, GameMode};

/// Deterministic PRNG using xorshift64.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Rng {
    state: u64,
}

impl Rng {
    /// Create a new RNG with the given seed.
    pub(crate) const fn new(seed: u64) -> Self {
        // Ensure non-zero state
        let state = if seed == 0 { 0x5555_5555_5555_5555 } else { seed };
        Self { state }
    }

    /// Generate next random u64.
    pub(crate) fn next_u64(&mut self) -> u64 {
        let mut x = self.state;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.state = x;
        x
    }

    /// Uniform index in `[0, len)`. `len` must be non-zero.
    pub(crate) fn next_index(&mut self, len: usize) -> usize {
        let len = len as u64;
        // Reject the biased tail so every index is equally likely
        let zone = u64::MAX - (u64::MAX % len);
        loop {
            let x = self.next_u64();
            if x < zone {
                return (x % len) as usize;
            }
        }
    }
}

/// splitmix64 finalizer: spreads consecutive day numbers across the catalog.
const fn mix64(mut z: u64) -> u64 {
    z = z.wrapping_add(0x9E37_79B9_7F4A_7C15);
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    z ^ (z >> 31)
}

/// Days elapsed since 1970-01-01 (negative before the epoch).
#[must_use]
pub fn day_number(date: NaiveDate) -> i64 {
    let epoch = NaiveDate::from_ymd_opt(1970, 1, 1).unwrap_or(NaiveDate::MIN);
    (date - epoch).num_days()
}

/// The daily target for `date`.
///
/// Only sovereign states are eligible, in catalog order; the index is
/// `mix64(day_number) % eligible.len()`.
///
/// # Errors
///
/// Returns [`GameError::EmptyEligibleSet`] if the catalog has no sovereign state.
pub fn select_daily<'a>(catalog: Catalog<'a>, date: NaiveDate) -> GameResult<&'a Country> {
    let rule = Eligibility::daily();
    let eligible: Vec<&Country> = rule.eligible(catalog).collect();
    if eligible.is_empty() {
        return Err(GameError::EmptyEligibleSet {
            mode: GameMode::Daily,
            filter: rule.filter,
            excluded: 0,
        });
    }

    let day = day_number(date);
    let index = (mix64(day as u64) % eligible.len() as u64) as usize;
    let country = eligible[index];
    debug!(%date, day, index, country = country.name, "selected daily target");
    Ok(country)
}

/// Random target source for infinite rounds.
#[derive(Debug, Clone, Copy)]
pub struct InfiniteSelector {
    rng: Rng,
    difficulty_rule: DifficultyRule,
}

impl InfiniteSelector {
    /// Create a selector seeded for one session.
    #[must_use]
    pub const fn new(seed: u64) -> Self {
        Self {
            rng: Rng::new(seed),
            difficulty_rule: DifficultyRule::Ignore,
        }
    }

    /// Replace the difficulty policy applied to filters.
    #[must_use]
    pub const fn with_difficulty_rule(mut self, rule: DifficultyRule) -> Self {
        self.difficulty_rule = rule;
        self
    }

    /// Eligibility rule this selector applies for `filter`.
    #[must_use]
    pub fn rule(&self, filter: GameFilter) -> Eligibility {
        Eligibility::new(GameMode::Infinite, filter).with_difficulty_rule(self.difficulty_rule)
    }

    /// Draw a uniformly random eligible country whose name is not in `exclude`.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::EmptyEligibleSet`] when nothing survives the filter
    /// and exclusions. Never substitutes an ineligible country.
    pub fn select<'a, S: AsRef<str>>(
        &mut self,
        catalog: Catalog<'a>,
        filter: GameFilter,
        exclude: &[S],
    ) -> GameResult<&'a Country> {
        let rule = self.rule(filter);
        let candidates: Vec<&Country> = rule
            .eligible(catalog)
            .filter(|c| !exclude.iter().any(|name| c.has_name(name.as_ref().trim())))
            .collect();

        if candidates.is_empty() {
            return Err(GameError::EmptyEligibleSet {
                mode: GameMode::Infinite,
                filter,
                excluded: exclude.len(),
            });
        }

        let country = candidates[self.rng.next_index(candidates.len())];
        debug!(%filter, pool = candidates.len(), country = country.name, "selected infinite target");
        Ok(country)
    }
}
