//! Guess validation and autocomplete ranking.
//!
//! Raw guess text is untrusted: it is trimmed and lower-cased before any
//! comparison. All lookups go through the same [`Eligibility`] rule used for
//! target selection.

use deunicode::deunicode;

use crate::catalog::{Catalog, Country};
use crate::filter::{ContinentFilter, Eligibility, GameMode, TypeFilter};

/// Maximum number of autocomplete suggestions.
pub const SUGGESTION_LIMIT: usize = 10;

/// Canonical form used for comparisons.
#[must_use]
pub fn normalize(text: &str) -> String {
    text.trim().to_lowercase()
}

/// Accent-folded, lower-cased sort key: "Réunion" orders as "reunion".
fn collation_key(name: &str) -> String {
    deunicode(name).to_lowercase()
}

/// Autocomplete and acceptance for one mode + filter.
#[derive(Debug, Clone, Copy)]
pub struct GuessEngine<'a> {
    catalog: Catalog<'a>,
    rule: Eligibility,
    limit: usize,
}

impl<'a> GuessEngine<'a> {
    /// Create an engine over `catalog` applying `rule`.
    #[must_use]
    pub const fn new(catalog: Catalog<'a>, rule: Eligibility) -> Self {
        Self {
            catalog,
            rule,
            limit: SUGGESTION_LIMIT,
        }
    }

    /// Override the suggestion cap.
    #[must_use]
    pub const fn with_limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }

    /// Eligibility rule in effect.
    #[must_use]
    pub const fn rule(&self) -> Eligibility {
        self.rule
    }

    /// Whether `country` is eligible and not among `previous`.
    fn is_candidate<S: AsRef<str>>(&self, country: &Country, previous: &[S]) -> bool {
        self.rule.admits(country) && !previous.iter().any(|p| country.has_name(p.as_ref().trim()))
    }

    /// Ranked autocomplete candidates for `query`.
    ///
    /// Substring match on name, excluding ineligible and already-guessed
    /// countries. Prefix matches come first, then alphabetical by name with
    /// accents folded.
    /// A blank query yields nothing.
    #[must_use]
    pub fn suggest<S: AsRef<str>>(&self, query: &str, previous: &[S]) -> Vec<&'a Country> {
        let needle = normalize(query);
        if needle.is_empty() {
            return Vec::new();
        }

        let mut matches: Vec<(bool, String, &'a Country)> = self
            .catalog
            .iter()
            .filter(|c| self.is_candidate(c, previous))
            .filter_map(|c| {
                let lower = c.name.to_lowercase();
                lower
                    .contains(&needle)
                    .then(|| (!lower.starts_with(&needle), collation_key(c.name), c))
            })
            .collect();

        matches.sort_by(|a, b| {
            a.0.cmp(&b.0)
                .then_with(|| a.1.cmp(&b.1))
                .then_with(|| a.2.name.cmp(b.2.name))
        });
        matches.into_iter().take(self.limit).map(|(_, _, c)| c).collect()
    }

    /// Exact (case-insensitive) name match under the same rules as [`suggest`](Self::suggest).
    #[must_use]
    pub fn resolve_exact<S: AsRef<str>>(&self, query: &str, previous: &[S]) -> Option<&'a Country> {
        let needle = normalize(query);
        if needle.is_empty() {
            return None;
        }
        self.catalog
            .iter()
            .find(|c| c.has_name(&needle) && self.is_candidate(c, previous))
    }

    /// The country a confirmed submission resolves to, if any.
    ///
    /// With an open suggestion list the top-ranked suggestion wins; otherwise
    /// only an exact match is accepted.
    #[must_use]
    pub fn resolve_submission<S: AsRef<str>>(&self, query: &str, previous: &[S]) -> Option<&'a Country> {
        self.suggest(query, previous)
            .first()
            .copied()
            .or_else(|| self.resolve_exact(query, previous))
    }
}

/// Placeholder text for the guess box.
#[must_use]
pub fn input_hint(rule: &Eligibility, finished: bool) -> String {
    if finished {
        return "Game finished".to_string();
    }

    match rule.mode {
        GameMode::Daily => "Guess a sovereign country...".to_string(),
        GameMode::Infinite => {
            let region = match rule.filter.continent {
                ContinentFilter::All => "global".to_string(),
                ContinentFilter::Only(c) => c.name().to_lowercase(),
            };
            match rule.filter.kind {
                TypeFilter::Territory => format!("Guess {region} territories..."),
                TypeFilter::Sovereign => format!("Guess {region} countries..."),
                TypeFilter::All => format!("Guess any {region} country..."),
            }
        }
    }
}
