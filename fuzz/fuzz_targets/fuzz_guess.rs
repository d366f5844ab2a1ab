#![no_main]

//! Round fuzzer.
//!
//! Drives a round with arbitrary filters and guess text, then checks the
//! round invariants after every submission:
//! 1. At most six guesses, no duplicates
//! 2. Every accepted guess is eligible under the round's rule
//! 3. Status and reveal tier agree
//! 4. Result queries succeed exactly when the round is over

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use shapeguess::{
    Catalog, Continent, ContinentFilter, DifficultyFilter, GameFilter, InfiniteSelector, MAX_GUESSES,
    RevealTier, Round, TypeFilter,
};

/// Structured input for round fuzzing.
#[derive(Arbitrary, Debug)]
struct RoundInput {
    seed: u64,
    continent: Option<u8>,
    kind: u8,
    guesses: Vec<String>,
}

fuzz_target!(|input: RoundInput| {
    let catalog = Catalog::builtin();
    let continent = match input.continent {
        Some(i) => ContinentFilter::Only(Continent::ALL[usize::from(i) % Continent::ALL.len()]),
        None => ContinentFilter::All,
    };
    let kind = match input.kind % 3 {
        0 => TypeFilter::All,
        1 => TypeFilter::Sovereign,
        _ => TypeFilter::Territory,
    };
    let filter = GameFilter::new(continent, DifficultyFilter::Mixed, kind);

    let mut selector = InfiniteSelector::new(input.seed);
    let Ok(target) = selector.select(catalog, filter, &[] as &[&str]) else {
        return;
    };
    let rule = selector.rule(filter);
    let mut round = Round::new(catalog, target, rule, None);

    for text in input.guesses.iter().take(32) {
        round.submit_guess(text);

        let names = round.guess_names();
        assert!(names.len() <= MAX_GUESSES);
        for (i, name) in names.iter().enumerate() {
            assert!(!names[..i].contains(name), "duplicate guess {name}");
        }
        assert!(round.guesses().iter().all(|c| rule.admits(c)));
        assert_eq!(round.is_finished(), round.tier() == RevealTier::Revealed);
        assert_eq!(round.is_finished(), round.build_share_text().is_ok());
    }
});
