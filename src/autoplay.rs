//! Feedback-driven autoplayer.
//!
//! Plays a [`Round`] through its public API the way a careful player would:
//! after each wrong guess it keeps only candidates consistent with the reported
//! distance (within a tolerance) and direction, then guesses one at random.
//! `simulate` uses it to measure how hard a filter is.

use crate::catalog::Country;
use crate::geo::{bearing_arrow, distance_km};
use crate::round::{Feedback, GuessOutcome, Round, RoundStatus};
use crate::selector::Rng;

/// Default slack on reported distances, in kilometres.
pub const DEFAULT_TOLERANCE_KM: u32 = 250;

/// Candidate tracker for one round.
#[derive(Debug, Clone)]
pub struct AutoPlayer<'a> {
    candidates: Vec<&'a Country>,
    tolerance_km: u32,
}

impl<'a> AutoPlayer<'a> {
    /// Start with every country eligible in `round` that has not been guessed yet.
    #[must_use]
    pub fn new(round: &Round<'a>, tolerance_km: u32) -> Self {
        let guessed = round.guess_names();
        let candidates = round
            .rule()
            .eligible(round.catalog())
            .filter(|c| !guessed.iter().any(|g| c.has_name(g)))
            .collect();
        Self {
            candidates,
            tolerance_km,
        }
    }

    /// Countries still consistent with all feedback so far.
    #[must_use]
    pub fn candidates(&self) -> &[&'a Country] {
        &self.candidates
    }

    /// Narrow the candidate set with feedback for `guess`.
    pub fn observe(&mut self, guess: &Country, feedback: Feedback) {
        let tolerance = self.tolerance_km;
        self.candidates.retain(|c| {
            !c.has_name(guess.name)
                && distance_km(guess.position(), c.position()).abs_diff(feedback.distance_km) <= tolerance
                && bearing_arrow(guess.position(), c.position()) == feedback.direction
        });
    }

    fn pick(&self, rng: &mut Rng) -> Option<&'a Country> {
        if self.candidates.is_empty() {
            return None;
        }
        Some(self.candidates[rng.next_index(self.candidates.len())])
    }
}

/// Play `round` to completion and return its final status.
///
/// Deterministic for a given `seed`. Stops early (leaving the round in
/// progress) only if every candidate has been ruled out.
pub fn play_round(round: &mut Round<'_>, tolerance_km: u32, seed: u64) -> RoundStatus {
    let mut rng = Rng::new(seed);
    let mut player = AutoPlayer::new(round, tolerance_km);

    while !round.is_finished() {
        let Some(guess) = player.pick(&mut rng) else {
            break;
        };
        match round.submit_guess(guess.name) {
            GuessOutcome::Accepted(accepted) => match accepted.feedback {
                Some(feedback) => player.observe(accepted.country, feedback),
                None => break,
            },
            GuessOutcome::Rejected(_) => {
                // Drop it so the loop always makes progress
                player.candidates.retain(|c| !c.has_name(guess.name));
            }
        }
    }

    round.status()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Catalog, Continent};
    use crate::filter::{ContinentFilter, DifficultyFilter, Eligibility, GameFilter, GameMode, TypeFilter};

    fn europe_round(target: &str) -> Round<'static> {
        let catalog = Catalog::builtin();
        let rule = Eligibility::new(
            GameMode::Infinite,
            GameFilter::new(
                ContinentFilter::Only(Continent::Europe),
                DifficultyFilter::Mixed,
                TypeFilter::Sovereign,
            ),
        );
        Round::new(catalog, catalog.find_by_name(target).unwrap(), rule, None)
    }

    #[test]
    fn test_target_survives_exact_feedback() {
        let mut round = europe_round("France");
        let mut player = AutoPlayer::new(&round, 0);
        let accepted = *round.submit_guess("Germany").accepted().unwrap();
        player.observe(accepted.country, accepted.feedback.unwrap());
        let names: Vec<&str> = player.candidates().iter().map(|c| c.name).collect();
        assert!(names.contains(&"France"));
        assert!(!names.contains(&"Germany"));
        assert!(!names.contains(&"Poland"));
    }

    #[test]
    fn test_play_round_exact_always_wins() {
        for seed in 1..20 {
            let mut round = europe_round("Portugal");
            assert_eq!(play_round(&mut round, 0, seed), RoundStatus::Won);
        }
    }

    #[test]
    fn test_play_round_is_deterministic() {
        let mut a = europe_round("Hungary");
        let mut b = europe_round("Hungary");
        play_round(&mut a, DEFAULT_TOLERANCE_KM, 77);
        play_round(&mut b, DEFAULT_TOLERANCE_KM, 77);
        assert_eq!(a.guess_names(), b.guess_names());
        assert!(a.is_finished());
    }
}
