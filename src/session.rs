//! Player session: mode switching and consecutive rounds.
//!
//! A session owns exactly one active [`Round`]. Starting a new round replaces
//! it; nothing is persisted across sessions.

use chrono::{DateTime, NaiveDate, Utc};
use chrono_tz::Tz;
use std::collections::VecDeque;
use tracing::warn;

use crate::catalog::Catalog;
use crate::config::GameConfig;
use crate::countdown::{CountdownTicker, today_in};
use crate::error::{GameError, GameResult};
use crate::filter::{GameFilter, GameMode};
use crate::round::{GuessOutcome, ResultSummary, Round};
use crate::selector::InfiniteSelector;

/// One player's game session.
#[derive(Debug)]
pub struct Session<'a> {
    catalog: Catalog<'a>,
    tz: Tz,
    suggestion_limit: usize,
    recent_limit: usize,
    selector: InfiniteSelector,
    filter: GameFilter,
    recent: VecDeque<&'a str>,
    round: Round<'a>,
}

impl<'a> Session<'a> {
    /// Open a session on today's daily puzzle.
    ///
    /// `seed` drives infinite-mode selection for the whole session.
    ///
    /// # Errors
    ///
    /// Returns an error for an invalid configuration or a catalog without
    /// sovereign states.
    pub fn open(catalog: Catalog<'a>, config: &GameConfig, seed: u64, now: DateTime<Utc>) -> GameResult<Self> {
        config.validate()?;
        let tz = config.tz()?;
        let round = Round::daily(catalog, today_in(tz, now))?.with_suggestion_limit(config.suggestion_limit);

        let mut session = Self {
            catalog,
            tz,
            suggestion_limit: config.suggestion_limit,
            recent_limit: config.recent_history,
            selector: InfiniteSelector::new(seed).with_difficulty_rule(config.difficulty_rule),
            filter: GameFilter::default(),
            recent: VecDeque::new(),
            round,
        };
        session.remember(session.round.target().name);
        Ok(session)
    }

    /// Reference time zone.
    #[must_use]
    pub const fn timezone(&self) -> Tz {
        self.tz
    }

    /// Filter applied to the next infinite round.
    #[must_use]
    pub const fn filter(&self) -> GameFilter {
        self.filter
    }

    /// Change the infinite-mode filter. Takes effect on the next infinite round.
    pub fn set_filter(&mut self, filter: GameFilter) {
        self.filter = filter;
    }

    /// Active round.
    #[must_use]
    pub const fn round(&self) -> &Round<'a> {
        &self.round
    }

    /// Mode of the active round.
    #[must_use]
    pub const fn mode(&self) -> GameMode {
        self.round.mode()
    }

    /// Recently played target names, oldest first.
    #[must_use]
    pub fn recent_targets(&self) -> Vec<&'a str> {
        self.recent.iter().copied().collect()
    }

    /// Switch to the daily puzzle for `date`.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::EmptyEligibleSet`] if the catalog has no sovereign state.
    pub fn start_daily(&mut self, date: NaiveDate) -> GameResult<&Round<'a>> {
        self.round = Round::daily(self.catalog, date)?.with_suggestion_limit(self.suggestion_limit);
        self.remember(self.round.target().name);
        Ok(&self.round)
    }

    /// Start the next infinite round ("play infinite" / "next shape").
    ///
    /// Recently played targets are avoided. If that leaves nothing, the
    /// exclusion is dropped before giving up.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::EmptyEligibleSet`] if the filter itself admits no
    /// country.
    pub fn start_infinite(&mut self) -> GameResult<&Round<'a>> {
        let recent: Vec<&str> = self.recent.iter().copied().collect();
        let target = match self.selector.select(self.catalog, self.filter, &recent) {
            Ok(target) => target,
            Err(GameError::EmptyEligibleSet { .. }) if !recent.is_empty() => {
                warn!(filter = %self.filter, excluded = recent.len(), "no fresh target; allowing repeats");
                self.selector.select(self.catalog, self.filter, &[] as &[&str])?
            }
            Err(e) => return Err(e),
        };

        let rule = self.selector.rule(self.filter);
        self.round = Round::new(self.catalog, target, rule, None).with_suggestion_limit(self.suggestion_limit);
        self.remember(target.name);
        Ok(&self.round)
    }

    /// Submit raw guess text to the active round.
    pub fn submit_guess(&mut self, text: &str) -> GuessOutcome<'a> {
        self.round.submit_guess(text)
    }

    /// Result payload for the finished round at instant `now`.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::StaleResultQuery`] while the round is in progress.
    pub fn result_summary(&self, now: DateTime<Utc>) -> GameResult<ResultSummary> {
        self.round.build_result_summary(self.tz, now)
    }

    /// Start a 1 s countdown ticker when it applies: a finished daily round.
    ///
    /// Returns `None` in infinite mode or while the round is in progress; the
    /// caller cancels the ticker when the result view goes away.
    pub fn countdown_ticker<F>(&self, on_tick: F) -> Option<CountdownTicker>
    where
        F: FnMut(String) + Send + 'static,
    {
        (self.round.mode() == GameMode::Daily && self.round.is_finished())
            .then(|| CountdownTicker::start(self.tz, on_tick))
    }

    fn remember(&mut self, name: &'a str) {
        if self.recent_limit == 0 {
            return;
        }
        self.recent.push_back(name);
        while self.recent.len() > self.recent_limit {
            self.recent.pop_front();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Continent, Country, CountryType, Difficulty};
    use crate::filter::{ContinentFilter, DifficultyFilter, TypeFilter};
    use crate::round::RoundStatus;
    use chrono::TimeZone;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 0).unwrap()
    }

    #[test]
    fn test_open_starts_today_daily() {
        let session = Session::open(Catalog::builtin(), &GameConfig::default(), 1, now()).unwrap();
        assert_eq!(session.mode(), GameMode::Daily);
        assert_eq!(session.round().date(), NaiveDate::from_ymd_opt(2025, 6, 1));
        assert_eq!(session.recent_targets(), vec![session.round().target().name]);
    }

    #[test]
    fn test_infinite_does_not_repeat_previous() {
        let mut session = Session::open(Catalog::builtin(), &GameConfig::default(), 9, now()).unwrap();
        session.set_filter(GameFilter::new(
            ContinentFilter::Only(Continent::Europe),
            DifficultyFilter::Mixed,
            TypeFilter::Sovereign,
        ));

        let mut previous = session.round().target().name;
        for _ in 0..50 {
            let round = session.start_infinite().unwrap();
            assert_eq!(round.mode(), GameMode::Infinite);
            assert_eq!(round.target().continent, Continent::Europe);
            assert_ne!(round.target().name, previous);
            previous = round.target().name;
        }
    }

    #[test]
    fn test_single_candidate_relaxes_exclusion() {
        static TINY: [Country; 2] = [
            Country::new("fr", "France", Continent::Europe, CountryType::Sovereign, Difficulty::Easy, "Paris", 46.2, 2.2),
            Country::new("nc", "New Caledonia", Continent::Oceania, CountryType::Territory, Difficulty::Normal, "Nouméa", -20.9, 165.6),
        ];
        let mut session = Session::open(Catalog::new(&TINY), &GameConfig::default(), 3, now()).unwrap();
        session.set_filter(GameFilter::new(
            ContinentFilter::Only(Continent::Oceania),
            DifficultyFilter::Mixed,
            TypeFilter::Territory,
        ));

        assert_eq!(session.start_infinite().unwrap().target().name, "New Caledonia");
        // Only candidate was just played; repeat instead of failing
        assert_eq!(session.start_infinite().unwrap().target().name, "New Caledonia");
    }

    #[test]
    fn test_unsatisfiable_filter_errors() {
        static TINY: [Country; 1] = [Country::new(
            "fr", "France", Continent::Europe, CountryType::Sovereign, Difficulty::Easy, "Paris", 46.2, 2.2,
        )];
        let mut session = Session::open(Catalog::new(&TINY), &GameConfig::default(), 3, now()).unwrap();
        session.set_filter(GameFilter::new(
            ContinentFilter::Only(Continent::Asia),
            DifficultyFilter::Mixed,
            TypeFilter::All,
        ));
        assert!(matches!(
            session.start_infinite(),
            Err(GameError::EmptyEligibleSet { .. })
        ));
        // Active round is untouched
        assert_eq!(session.mode(), GameMode::Daily);
    }

    #[test]
    fn test_back_to_daily() {
        let mut session = Session::open(Catalog::builtin(), &GameConfig::default(), 4, now()).unwrap();
        session.start_infinite().unwrap();
        let date = NaiveDate::from_ymd_opt(2025, 6, 2).unwrap();
        let round = session.start_daily(date).unwrap();
        assert_eq!(round.mode(), GameMode::Daily);
        assert_eq!(round.date(), Some(date));
    }

    #[test]
    fn test_countdown_ticker_only_for_finished_daily() {
        let mut session = Session::open(Catalog::builtin(), &GameConfig::default(), 4, now()).unwrap();
        assert!(session.countdown_ticker(|_| {}).is_none());

        let target = session.round().target().name;
        assert_eq!(
            session.submit_guess(target).accepted().map(|g| g.status),
            Some(RoundStatus::Won)
        );
        let ticker = session.countdown_ticker(|_| {});
        assert!(ticker.is_some());
        if let Some(t) = ticker {
            t.cancel();
        }

        session.start_infinite().unwrap();
        let target = session.round().target().name;
        session.submit_guess(target);
        assert!(session.countdown_ticker(|_| {}).is_none());
    }

    #[test]
    fn test_result_summary_countdown() {
        let mut session = Session::open(Catalog::builtin(), &GameConfig::default(), 4, now()).unwrap();
        let target = session.round().target().name;
        session.submit_guess(target);
        let summary = session.result_summary(now()).unwrap();
        // 12:00 UTC is 13:00 BST in June
        assert_eq!(summary.countdown.as_deref(), Some("11:00:00"));
    }
}
