//! Static country catalog and read-only queries.
//!
//! The built-in dataset is [`COUNTRIES`]; a [`Catalog`] is a thin borrowed view
//! over any slice of countries so tests can supply their own.

mod data;

pub use data::COUNTRIES;

use serde::Serialize;
use std::fmt;

use crate::geo::GeoPoint;

/// Continent a country belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum Continent {
    /// Africa.
    Africa,
    /// North, Central and South America.
    Americas,
    /// Asia.
    Asia,
    /// Europe.
    Europe,
    /// Oceania.
    Oceania,
}

impl Continent {
    /// All continents in display order.
    pub const ALL: [Self; 5] = [
        Self::Africa,
        Self::Americas,
        Self::Asia,
        Self::Europe,
        Self::Oceania,
    ];

    /// Display name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Africa => "Africa",
            Self::Americas => "Americas",
            Self::Asia => "Asia",
            Self::Europe => "Europe",
            Self::Oceania => "Oceania",
        }
    }
}

impl fmt::Display for Continent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

/// Sovereignty classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum CountryType {
    /// Recognized sovereign state.
    Sovereign,
    /// Dependent territory or partially recognized region.
    Territory,
}

impl fmt::Display for CountryType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Sovereign => f.pad("Sovereign"),
            Self::Territory => f.pad("Territory"),
        }
    }
}

/// Difficulty tier. Used for filtering only, never for scoring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum Difficulty {
    /// Widely known shapes.
    Easy,
    /// Average.
    Normal,
    /// Small or obscure shapes.
    Hard,
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Easy => f.pad("Easy"),
            Self::Normal => f.pad("Normal"),
            Self::Hard => f.pad("Hard"),
        }
    }
}

/// A single catalog entry.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Country {
    /// Lower-case ISO-style code, used by collaborators for asset lookup.
    pub code: &'static str,
    /// Unique display name; compared case-insensitively.
    pub name: &'static str,
    /// Continent.
    pub continent: Continent,
    /// Sovereignty classification.
    #[serde(rename = "type")]
    pub kind: CountryType,
    /// Difficulty tier.
    pub difficulty: Difficulty,
    /// Capital city.
    pub capital: &'static str,
    /// Latitude in degrees.
    pub lat: f64,
    /// Longitude in degrees.
    pub lng: f64,
}

impl Country {
    /// Build a catalog entry.
    #[must_use]
    #[allow(clippy::too_many_arguments)]
    pub const fn new(
        code: &'static str,
        name: &'static str,
        continent: Continent,
        kind: CountryType,
        difficulty: Difficulty,
        capital: &'static str,
        lat: f64,
        lng: f64,
    ) -> Self {
        Self {
            code,
            name,
            continent,
            kind,
            difficulty,
            capital,
            lat,
            lng,
        }
    }

    /// Representative coordinate of the country.
    #[must_use]
    pub const fn position(&self) -> GeoPoint {
        GeoPoint::new(self.lat, self.lng)
    }

    /// Whether this is a sovereign state.
    #[must_use]
    pub fn is_sovereign(&self) -> bool {
        self.kind == CountryType::Sovereign
    }

    /// Case-insensitive name equality.
    #[must_use]
    pub fn has_name(&self, name: &str) -> bool {
        self.name.eq_ignore_ascii_case(name) || self.name.to_lowercase() == name.to_lowercase()
    }
}

/// Read-only view over an ordered set of countries.
#[derive(Debug, Clone, Copy)]
pub struct Catalog<'a> {
    countries: &'a [Country],
}

impl Catalog<'static> {
    /// The built-in dataset.
    #[must_use]
    pub const fn builtin() -> Self {
        Self {
            countries: COUNTRIES,
        }
    }
}

impl Default for Catalog<'static> {
    fn default() -> Self {
        Self::builtin()
    }
}

impl<'a> Catalog<'a> {
    /// Wrap an arbitrary slice of countries.
    ///
    /// Names and codes are expected to be unique; lookups return the first match.
    #[must_use]
    pub const fn new(countries: &'a [Country]) -> Self {
        Self { countries }
    }

    /// Full listing in stable catalog order.
    #[must_use]
    pub const fn all(&self) -> &'a [Country] {
        self.countries
    }

    /// Number of entries.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.countries.len()
    }

    /// Whether the catalog has no entries.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.countries.is_empty()
    }

    /// Case-insensitive exact lookup by name. Surrounding whitespace is ignored.
    #[must_use]
    pub fn find_by_name(&self, name: &str) -> Option<&'a Country> {
        let name = name.trim();
        self.countries.iter().find(|c| c.has_name(name))
    }

    /// Case-insensitive lookup by code.
    #[must_use]
    pub fn find_by_code(&self, code: &str) -> Option<&'a Country> {
        let code = code.trim();
        self.countries
            .iter()
            .find(|c| c.code.eq_ignore_ascii_case(code))
    }

    /// Iterate over entries.
    pub fn iter(&self) -> std::slice::Iter<'a, Country> {
        self.countries.iter()
    }
}

impl<'a> IntoIterator for &Catalog<'a> {
    type Item = &'a Country;
    type IntoIter = std::slice::Iter<'a, Country>;

    fn into_iter(self) -> Self::IntoIter {
        self.countries.iter()
    }
}
