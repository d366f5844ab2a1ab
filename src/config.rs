//! Engine configuration.
//!
//! Every field has a default, so an absent or partial JSON file is fine.

use chrono_tz::Tz;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::countdown::{DEFAULT_TIMEZONE, parse_timezone};
use crate::error::{GameError, GameResult};
use crate::filter::DifficultyRule;
use crate::guess::SUGGESTION_LIMIT;

/// Tunable engine settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GameConfig {
    /// IANA zone whose midnight rolls the daily puzzle over.
    pub timezone: String,
    /// Maximum number of autocomplete suggestions.
    pub suggestion_limit: usize,
    /// Whether the difficulty filter gates infinite-mode eligibility.
    pub difficulty_rule: DifficultyRule,
    /// How many recent targets infinite mode avoids repeating.
    pub recent_history: usize,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            timezone: DEFAULT_TIMEZONE.to_string(),
            suggestion_limit: SUGGESTION_LIMIT,
            difficulty_rule: DifficultyRule::Ignore,
            recent_history: 1,
        }
    }
}

impl GameConfig {
    /// Load from a JSON file and validate.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, is not valid JSON for this
    /// schema, or fails [`validate`](Self::validate).
    pub fn load(path: &Path) -> GameResult<Self> {
        let content = fs::read_to_string(path).map_err(|source| GameError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Self = serde_json::from_str(&content).map_err(|source| GameError::Json {
            path: path.to_path_buf(),
            source,
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Load from `path` if given, otherwise use defaults.
    ///
    /// # Errors
    ///
    /// See [`load`](Self::load).
    pub fn load_or_default(path: Option<&Path>) -> GameResult<Self> {
        path.map_or_else(|| Ok(Self::default()), Self::load)
    }

    /// Check semantic constraints.
    ///
    /// # Errors
    ///
    /// Returns an error for an unknown time zone or a zero suggestion limit.
    pub fn validate(&self) -> GameResult<()> {
        self.tz()?;
        if self.suggestion_limit == 0 {
            return Err(GameError::InvalidConfig(
                "suggestion_limit must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    /// Parsed reference time zone.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::UnknownTimezone`] if the name is not recognized.
    pub fn tz(&self) -> GameResult<Tz> {
        parse_timezone(&self.timezone)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_config(json: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(json.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_defaults_are_valid() {
        let config = GameConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.suggestion_limit, 10);
        assert_eq!(config.tz().unwrap(), chrono_tz::Europe::London);
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let file = write_config(r#"{ "difficulty_rule": "exact" }"#);
        let config = GameConfig::load(file.path()).unwrap();
        assert_eq!(config.difficulty_rule, DifficultyRule::Exact);
        assert_eq!(config.timezone, "Europe/London");
        assert_eq!(config.recent_history, 1);
    }

    #[test]
    fn test_unknown_field_rejected() {
        let file = write_config(r#"{ "max_guesses": 8 }"#);
        assert!(matches!(GameConfig::load(file.path()), Err(GameError::Json { .. })));
    }

    #[test]
    fn test_bad_timezone_rejected() {
        let file = write_config(r#"{ "timezone": "Nowhere/Land" }"#);
        assert!(matches!(
            GameConfig::load(file.path()),
            Err(GameError::UnknownTimezone(_))
        ));
    }

    #[test]
    fn test_zero_limit_rejected() {
        let file = write_config(r#"{ "suggestion_limit": 0 }"#);
        assert!(matches!(
            GameConfig::load(file.path()),
            Err(GameError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let result = GameConfig::load(&dir.path().join("absent.json"));
        assert!(matches!(result, Err(GameError::Io { .. })));
    }

    #[test]
    fn test_load_or_default_none() {
        assert_eq!(GameConfig::load_or_default(None).unwrap(), GameConfig::default());
    }
}
