//! End-to-end round scenarios through the public API.

#![allow(missing_docs)]
#![allow(clippy::unwrap_used)]

use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use shapeguess::{
    Catalog, Continent, ContinentFilter, Country, CountryType, Difficulty, DifficultyFilter, Direction,
    Eligibility, GameConfig, GameError, GameFilter, GameMode, GuessOutcome, InfiniteSelector, RejectReason,
    RevealTier, Round, RoundStatus, Session, TypeFilter,
};

fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 3, 14, 18, 30, 0).unwrap()
}

fn europe_sovereign() -> GameFilter {
    GameFilter::new(
        ContinentFilter::Only(Continent::Europe),
        DifficultyFilter::Mixed,
        TypeFilter::Sovereign,
    )
}

fn round_for(target: &str, rule: Eligibility) -> Round<'static> {
    let catalog = Catalog::builtin();
    Round::new(catalog, catalog.find_by_name(target).unwrap(), rule, None)
}

#[test]
fn test_germany_then_france() {
    let mut round = round_for("France", Eligibility::new(GameMode::Infinite, europe_sovereign()));

    let first = *round.submit_guess("Germany").accepted().unwrap();
    assert_eq!(first.status, RoundStatus::InProgress);
    assert_eq!(first.guess_count, 1);
    assert_eq!(first.tier, RevealTier::Obscured(1));
    let feedback = first.feedback.unwrap();
    assert!((750..=950).contains(&feedback.distance_km), "{}", feedback.distance_km);
    // Bearing runs from the guess towards the target
    assert_eq!(feedback.direction, Direction::SW);

    let second = *round.submit_guess("france").accepted().unwrap();
    assert_eq!(second.status, RoundStatus::Won);
    assert_eq!(second.tier, RevealTier::Revealed);
    assert!(second.feedback.is_none());
    assert_eq!(round.build_share_text().unwrap().lines().nth(1), Some("🟥🟩"));
}

#[test]
fn test_confirmed_prefix_resolves_to_accented_name() {
    let africa = GameFilter::new(
        ContinentFilter::Only(Continent::Africa),
        DifficultyFilter::Mixed,
        TypeFilter::All,
    );
    let mut round = round_for("Kenya", Eligibility::new(GameMode::Infinite, africa));

    let names: Vec<&str> = round.suggest("r").iter().map(|c| c.name).collect();
    assert_eq!(&names[..2], &["Réunion", "Rwanda"]);
    assert_eq!(round.submit_guess("r").accepted().map(|g| g.country.name), Some("Réunion"));
    assert_eq!(round.submit_guess("r").accepted().map(|g| g.country.name), Some("Rwanda"));
}

#[test]
fn test_daily_rejects_exact_territory_name() {
    let mut round = round_for("Japan", Eligibility::daily());

    assert_eq!(round.submit_guess("Taiwan"), GuessOutcome::Rejected(RejectReason::Ineligible));
    assert!(round.guesses().is_empty());
    assert!(round.suggest("taiw").is_empty());
    assert_eq!(round.tier(), RevealTier::Obscured(0));
}

#[test]
fn test_six_wrong_guesses_lose() {
    let mut round = round_for("Japan", Eligibility::daily());

    for (i, name) in ["France", "Germany", "Spain", "Italy", "Brazil", "Chile"].iter().enumerate() {
        let accepted = *round.submit_guess(name).accepted().unwrap();
        assert_eq!(accepted.guess_count, i + 1);
    }

    assert_eq!(round.status(), RoundStatus::Lost);
    assert_eq!(round.tier(), RevealTier::Revealed);
    assert_eq!(round.submit_guess("Japan"), GuessOutcome::Rejected(RejectReason::RoundOver));

    let tz = chrono_tz::Europe::London;
    let summary = round.build_result_summary(tz, now()).unwrap();
    assert!(!summary.won);
    assert_eq!(summary.guess_count, 6);
    assert_eq!(summary.country_name, "Japan");
    assert_eq!(round.build_share_text().unwrap(), "Shape Guess Daily X/6\n🟥🟥🟥🟥🟥🟥");
}

#[test]
fn test_won_after_wrong_guesses_case_insensitive() {
    let mut round = round_for("Japan", Eligibility::daily());
    for name in ["France", "Germany", "Spain", "Italy", "Brazil"] {
        round.submit_guess(name);
    }
    assert_eq!(round.tier(), RevealTier::Obscured(5));

    let last = *round.submit_guess("  JAPAN ").accepted().unwrap();
    assert_eq!(last.status, RoundStatus::Won);
    assert_eq!(last.guess_count, 6);
}

#[test]
fn test_summary_before_end_is_stale() {
    let round = round_for("Japan", Eligibility::daily());
    let tz = chrono_tz::Europe::London;
    assert!(matches!(round.build_result_summary(tz, now()), Err(GameError::StaleResultQuery)));
    assert!(matches!(round.build_share_text(), Err(GameError::StaleResultQuery)));
}

#[test]
fn test_single_oceania_territory_excluded() {
    static CATALOG: [Country; 3] = [
        Country::new("au", "Australia", Continent::Oceania, CountryType::Sovereign, Difficulty::Easy, "Canberra", -25.3, 133.8),
        Country::new("fj", "Fiji", Continent::Oceania, CountryType::Sovereign, Difficulty::Hard, "Suva", -17.7, 178.1),
        Country::new("gu", "Guam", Continent::Oceania, CountryType::Territory, Difficulty::Hard, "Hagåtña", 13.4, 144.8),
    ];
    let filter = GameFilter::new(
        ContinentFilter::Only(Continent::Oceania),
        DifficultyFilter::Mixed,
        TypeFilter::Territory,
    );
    let mut selector = InfiniteSelector::new(3);

    let result = selector.select(Catalog::new(&CATALOG), filter, &["Guam"]);
    assert!(matches!(result, Err(GameError::EmptyEligibleSet { mode: GameMode::Infinite, .. })));
}

#[test]
fn test_builtin_oceania_territories_exhausted() {
    let catalog = Catalog::builtin();
    let filter = GameFilter::new(
        ContinentFilter::Only(Continent::Oceania),
        DifficultyFilter::Mixed,
        TypeFilter::Territory,
    );
    let all: Vec<&str> = Eligibility::new(GameMode::Infinite, filter)
        .eligible(catalog)
        .map(|c| c.name)
        .collect();
    assert!(!all.is_empty());

    let mut selector = InfiniteSelector::new(11);
    assert!(selector.select(catalog, filter, all.as_slice()).is_err());
}

#[test]
fn test_daily_date_pins_target() {
    let catalog = Catalog::builtin();
    let date = NaiveDate::from_ymd_opt(2025, 3, 14).unwrap();
    let a = Round::daily(catalog, date).unwrap();
    let b = Round::daily(catalog, date).unwrap();
    assert_eq!(a.target().code, b.target().code);
    assert!(a.target().is_sovereign());
    assert_eq!(a.date(), Some(date));
}

#[test]
fn test_session_daily_then_infinite() {
    let config = GameConfig::default();
    let mut session = Session::open(Catalog::builtin(), &config, 2024, now()).unwrap();
    assert_eq!(session.mode(), GameMode::Daily);

    let daily_target = session.round().target().name;
    session.submit_guess(daily_target);
    assert!(session.round().is_finished());
    let summary = session.result_summary(now()).unwrap();
    assert!(summary.won);
    assert_eq!(summary.countdown.as_deref(), Some("05:30:00"));

    session.set_filter(europe_sovereign());
    let mut previous = session.start_infinite().unwrap().target().name;
    for _ in 0..30 {
        let next = session.start_infinite().unwrap().target();
        assert_eq!(next.continent, Continent::Europe);
        assert_ne!(next.name, previous);
        previous = next.name;
    }
    assert_eq!(session.mode(), GameMode::Infinite);
    assert!(session.result_summary(now()).is_err());
}
