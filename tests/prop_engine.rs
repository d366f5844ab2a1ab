//! Property-based tests for the guessing engine.
//!
//! Run with: cargo test --release prop_engine

#![allow(missing_docs)]
#![allow(clippy::unwrap_used)]

use chrono::{NaiveDate, TimeDelta};
use proptest::prelude::*;

use shapeguess::guess::SUGGESTION_LIMIT;
use shapeguess::{
    Catalog, Continent, ContinentFilter, Direction, DifficultyFilter, Eligibility, GameFilter, GameMode,
    GeoPoint, GuessEngine, InfiniteSelector, MAX_GUESSES, RevealTier, Round, TypeFilter, bearing_arrow,
    distance_km, select_daily,
};

fn any_point() -> impl Strategy<Value = GeoPoint> {
    (-89.9f64..89.9, -180.0f64..180.0).prop_map(|(lat, lng)| GeoPoint::new(lat, lng))
}

fn any_filter() -> impl Strategy<Value = GameFilter> {
    let continent = prop_oneof![
        Just(ContinentFilter::All),
        proptest::sample::select(Continent::ALL.to_vec()).prop_map(ContinentFilter::Only),
    ];
    let kind = prop_oneof![Just(TypeFilter::All), Just(TypeFilter::Sovereign), Just(TypeFilter::Territory)];
    (continent, kind).prop_map(|(continent, kind)| GameFilter::new(continent, DifficultyFilter::Mixed, kind))
}

fn any_date() -> impl Strategy<Value = NaiveDate> {
    let base = NaiveDate::from_ymd_opt(2000, 1, 1).unwrap();
    (0i64..40_000).prop_map(move |offset| base + TimeDelta::days(offset))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(2000))]

    /// Distance does not depend on argument order.
    #[test]
    fn prop_distance_symmetric(a in any_point(), b in any_point()) {
        prop_assert_eq!(distance_km(a, b), distance_km(b, a));
    }

    /// A point is zero kilometres from itself and no further than half the globe from anything.
    #[test]
    fn prop_distance_bounded(a in any_point(), b in any_point()) {
        prop_assert_eq!(distance_km(a, a), 0);
        prop_assert!(distance_km(a, b) <= 20_016);
    }

    /// Every bearing maps to one of the eight glyphs.
    #[test]
    fn prop_arrow_is_one_of_eight(a in any_point(), b in any_point()) {
        let arrow = bearing_arrow(a, b);
        prop_assert!(Direction::ALL.contains(&arrow));
        prop_assert!(Direction::ALL.iter().any(|d| d.glyph() == arrow.glyph()));
    }

    /// The daily pick is a deterministic sovereign state.
    #[test]
    fn prop_daily_deterministic_sovereign(date in any_date()) {
        let catalog = Catalog::builtin();
        let first = select_daily(catalog, date).unwrap();
        let second = select_daily(catalog, date).unwrap();
        prop_assert_eq!(first.code, second.code);
        prop_assert!(first.is_sovereign());
    }

    /// Infinite picks always satisfy the filter.
    #[test]
    fn prop_infinite_respects_filter(filter in any_filter(), seed in any::<u64>()) {
        let catalog = Catalog::builtin();
        let rule = Eligibility::new(GameMode::Infinite, filter);
        let mut selector = InfiniteSelector::new(seed);
        match selector.select(catalog, filter, &[] as &[&str]) {
            Ok(country) => prop_assert!(rule.admits(country)),
            Err(_) => prop_assert_eq!(rule.eligible(catalog).count(), 0),
        }
    }

    /// Suggestions are bounded, eligible, unguessed, and contain the query.
    #[test]
    fn prop_suggestions_bounded(query in "[a-zA-Z ]{0,6}", filter in any_filter()) {
        let catalog = Catalog::builtin();
        let rule = Eligibility::new(GameMode::Infinite, filter);
        let engine = GuessEngine::new(catalog, rule);
        let previous = ["France", "Japan"];
        let suggestions = engine.suggest(&query, &previous);

        prop_assert!(suggestions.len() <= SUGGESTION_LIMIT);
        let needle = query.trim().to_lowercase();
        for country in suggestions {
            prop_assert!(rule.admits(country));
            prop_assert!(country.name.to_lowercase().contains(&needle));
            prop_assert!(!previous.contains(&country.name));
        }
    }

    /// The reveal tier never goes back to a blurrier state within a round.
    #[test]
    fn prop_tier_monotonic(guesses in proptest::collection::vec("[A-Za-z ]{1,12}", 0..12), date in any_date()) {
        let catalog = Catalog::builtin();
        let mut round = Round::daily(catalog, date).unwrap();
        let mut tier = round.tier();
        for text in &guesses {
            round.submit_guess(text);
            let next = round.tier();
            prop_assert!(next >= tier);
            prop_assert!(next.blur_px() <= tier.blur_px());
            tier = next;
        }
        prop_assert!(round.guesses().len() <= MAX_GUESSES);
        prop_assert_eq!(round.is_finished(), tier == RevealTier::Revealed);
    }
}
