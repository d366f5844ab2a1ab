//! Game modes, player-chosen filters and the eligibility rule.
//!
//! [`Eligibility`] is the single rule shared by target selection, autocomplete
//! and exact-match validation, so the three can never disagree about which
//! countries are in play.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::catalog::{Catalog, Continent, Country, CountryType, Difficulty};

/// Which puzzle stream a round belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum GameMode {
    /// One deterministic puzzle per calendar date, sovereign states only.
    Daily,
    /// Repeatable random puzzles drawn from the filtered set.
    Infinite,
}

impl fmt::Display for GameMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Daily => f.write_str("Daily"),
            Self::Infinite => f.write_str("Infinite"),
        }
    }
}

/// Continent restriction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ContinentFilter {
    /// No restriction.
    #[default]
    All,
    /// Only countries on this continent.
    Only(Continent),
}

/// Difficulty selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DifficultyFilter {
    /// Any difficulty.
    #[default]
    Mixed,
    /// A single tier.
    Only(Difficulty),
}

/// Sovereignty restriction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TypeFilter {
    /// Sovereign states and territories.
    #[default]
    All,
    /// Sovereign states only.
    Sovereign,
    /// Territories only.
    Territory,
}

/// Filter selection made by the player. Any combination is legal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct GameFilter {
    /// Continent restriction.
    pub continent: ContinentFilter,
    /// Difficulty selection.
    pub difficulty: DifficultyFilter,
    /// Sovereignty restriction.
    pub kind: TypeFilter,
}

impl GameFilter {
    /// Construct a filter from its three fields.
    #[must_use]
    pub const fn new(continent: ContinentFilter, difficulty: DifficultyFilter, kind: TypeFilter) -> Self {
        Self {
            continent,
            difficulty,
            kind,
        }
    }
}

/// How [`GameFilter::difficulty`] participates in eligibility.
///
/// The filter always carries a difficulty, but whether it gates the eligible
/// set is a policy decision kept out of the rule's signature.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DifficultyRule {
    /// Difficulty is accepted but never consulted.
    #[default]
    Ignore,
    /// In infinite mode, a non-`Mixed` difficulty must match exactly.
    Exact,
}

/// Mode + filter eligibility rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Eligibility {
    /// Active mode.
    pub mode: GameMode,
    /// Active filter. Ignored in daily mode.
    pub filter: GameFilter,
    /// Difficulty policy.
    pub difficulty_rule: DifficultyRule,
}

impl Eligibility {
    /// Rule with the default difficulty policy.
    #[must_use]
    pub fn new(mode: GameMode, filter: GameFilter) -> Self {
        Self {
            mode,
            filter,
            difficulty_rule: DifficultyRule::default(),
        }
    }

    /// Daily-mode rule: sovereign states only, filter not consulted.
    #[must_use]
    pub fn daily() -> Self {
        Self::new(GameMode::Daily, GameFilter::default())
    }

    /// Replace the difficulty policy.
    #[must_use]
    pub const fn with_difficulty_rule(mut self, rule: DifficultyRule) -> Self {
        self.difficulty_rule = rule;
        self
    }

    /// Whether `country` is in play under this rule.
    #[must_use]
    pub fn admits(&self, country: &Country) -> bool {
        match self.mode {
            GameMode::Daily => country.kind == CountryType::Sovereign,
            GameMode::Infinite => {
                let continent_ok = match self.filter.continent {
                    ContinentFilter::All => true,
                    ContinentFilter::Only(continent) => country.continent == continent,
                };
                if !continent_ok {
                    return false;
                }

                let type_ok = match self.filter.kind {
                    TypeFilter::All => true,
                    TypeFilter::Sovereign => country.kind == CountryType::Sovereign,
                    TypeFilter::Territory => country.kind == CountryType::Territory,
                };
                if !type_ok {
                    return false;
                }

                match (self.difficulty_rule, self.filter.difficulty) {
                    (DifficultyRule::Exact, DifficultyFilter::Only(tier)) => {
                        country.difficulty == tier
                    }
                    _ => true,
                }
            }
        }
    }

    /// Eligible countries in catalog order.
    pub fn eligible<'a>(&self, catalog: Catalog<'a>) -> impl Iterator<Item = &'a Country> + use<'a> {
        let rule = *self;
        catalog.all().iter().filter(move |c| rule.admits(c))
    }
}

// --- Parsing and display (CLI / logs) ---

impl fmt::Display for ContinentFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => f.write_str("All"),
            Self::Only(c) => write!(f, "{c}"),
        }
    }
}

impl fmt::Display for DifficultyFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Mixed => f.write_str("Mixed"),
            Self::Only(d) => write!(f, "{d}"),
        }
    }
}

impl fmt::Display for TypeFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => f.write_str("All"),
            Self::Sovereign => f.write_str("Sovereign"),
            Self::Territory => f.write_str("Territory"),
        }
    }
}

impl fmt::Display for GameFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "continent={} type={} difficulty={}",
            self.continent, self.kind, self.difficulty
        )
    }
}

impl FromStr for ContinentFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.eq_ignore_ascii_case("all") {
            return Ok(Self::All);
        }
        Continent::ALL
            .into_iter()
            .find(|c| c.name().eq_ignore_ascii_case(s))
            .map(Self::Only)
            .ok_or_else(|| format!("unknown continent '{s}' (expected All, Africa, Americas, Asia, Europe or Oceania)"))
    }
}

impl FromStr for DifficultyFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "mixed" => Ok(Self::Mixed),
            "easy" => Ok(Self::Only(Difficulty::Easy)),
            "normal" => Ok(Self::Only(Difficulty::Normal)),
            "hard" => Ok(Self::Only(Difficulty::Hard)),
            other => Err(format!("unknown difficulty '{other}' (expected Mixed, Easy, Normal or Hard)")),
        }
    }
}

impl FromStr for TypeFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "all" => Ok(Self::All),
            "sovereign" => Ok(Self::Sovereign),
            "territory" => Ok(Self::Territory),
            other => Err(format!("unknown type '{other}' (expected All, Sovereign or Territory)")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn europe_sovereign() -> GameFilter {
        GameFilter::new(
            ContinentFilter::Only(Continent::Europe),
            DifficultyFilter::Mixed,
            TypeFilter::Sovereign,
        )
    }

    #[test]
    fn test_daily_excludes_territories_regardless_of_filter() {
        let catalog = Catalog::builtin();
        let taiwan = catalog.find_by_name("Taiwan").unwrap();
        let japan = catalog.find_by_name("Japan").unwrap();

        let daily = Eligibility::new(GameMode::Daily, GameFilter::new(
            ContinentFilter::Only(Continent::Europe),
            DifficultyFilter::Mixed,
            TypeFilter::Territory,
        ));
        assert!(!daily.admits(taiwan));
        // Filter is not consulted in daily mode
        assert!(daily.admits(japan));
    }

    #[test]
    fn test_infinite_continent_and_type() {
        let catalog = Catalog::builtin();
        let rule = Eligibility::new(GameMode::Infinite, europe_sovereign());
        assert!(rule.admits(catalog.find_by_name("France").unwrap()));
        assert!(!rule.admits(catalog.find_by_name("Japan").unwrap()));
        assert!(!rule.admits(catalog.find_by_name("Gibraltar").unwrap()));
    }

    #[test]
    fn test_infinite_territory_only() {
        let catalog = Catalog::builtin();
        let filter = GameFilter::new(ContinentFilter::All, DifficultyFilter::Mixed, TypeFilter::Territory);
        let rule = Eligibility::new(GameMode::Infinite, filter);
        assert!(rule.eligible(catalog).all(|c| c.kind == CountryType::Territory));
        assert!(rule.admits(catalog.find_by_name("Taiwan").unwrap()));
    }

    #[test]
    fn test_difficulty_ignored_by_default() {
        let catalog = Catalog::builtin();
        let filter = GameFilter::new(
            ContinentFilter::All,
            DifficultyFilter::Only(Difficulty::Hard),
            TypeFilter::All,
        );
        let rule = Eligibility::new(GameMode::Infinite, filter);
        assert_eq!(rule.eligible(catalog).count(), catalog.len());
    }

    #[test]
    fn test_difficulty_exact_rule() {
        let catalog = Catalog::builtin();
        let filter = GameFilter::new(
            ContinentFilter::All,
            DifficultyFilter::Only(Difficulty::Easy),
            TypeFilter::All,
        );
        let rule = Eligibility::new(GameMode::Infinite, filter).with_difficulty_rule(DifficultyRule::Exact);
        assert!(rule.eligible(catalog).all(|c| c.difficulty == Difficulty::Easy));
        assert!(rule.admits(catalog.find_by_name("France").unwrap()));
        assert!(!rule.admits(catalog.find_by_name("Andorra").unwrap()));
    }

    #[test]
    fn test_parse_filters() {
        assert_eq!("europe".parse::<ContinentFilter>().unwrap(), ContinentFilter::Only(Continent::Europe));
        assert_eq!("ALL".parse::<ContinentFilter>().unwrap(), ContinentFilter::All);
        assert_eq!("Territory".parse::<TypeFilter>().unwrap(), TypeFilter::Territory);
        assert_eq!("hard".parse::<DifficultyFilter>().unwrap(), DifficultyFilter::Only(Difficulty::Hard));
        assert!("Antarctica".parse::<ContinentFilter>().is_err());
        assert!("brutal".parse::<DifficultyFilter>().is_err());
    }

    #[test]
    fn test_filter_display() {
        assert_eq!(
            europe_sovereign().to_string(),
            "continent=Europe type=Sovereign difficulty=Mixed"
        );
    }
}
