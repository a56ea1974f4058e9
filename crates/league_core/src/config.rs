//! League format configuration.
//!
//! Loaded from TOML:
//!
//! ```toml
//! courts_count = 3
//! matches_per_pair = 2
//! number_of_sets = 3
//! allow_draws = false
//! seed = "autumn-2026"
//! ```

use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

use crate::pairing::MatchesPerPair;
use crate::scoring::{ScoringRules, SetFormat, DEFAULT_MAX_GAMES_PER_SET};

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("invalid config: {0}")]
    Invalid(String),
}

/// Format settings shared by scheduling, scoring and the roster.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormatConfig {
    /// Matches that can run at the same time.
    pub courts_count: u32,
    pub matches_per_pair: MatchesPerPair,
    pub number_of_sets: SetFormat,
    pub allow_draws: bool,
    pub max_games_per_set: u8,
    /// Players per team.
    pub team_size: u8,
    /// Fixes the order rounds are played in.
    pub seed: Option<String>,
}

impl Default for FormatConfig {
    fn default() -> Self {
        Self {
            courts_count: 2,
            matches_per_pair: MatchesPerPair::Single,
            number_of_sets: SetFormat::BestOfThree,
            allow_draws: false,
            max_games_per_set: DEFAULT_MAX_GAMES_PER_SET,
            team_size: 2,
            seed: None,
        }
    }
}

impl FormatConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.courts_count == 0 {
            return Err(ConfigError::Invalid("courts_count must be at least 1".into()));
        }
        if self.team_size == 0 {
            return Err(ConfigError::Invalid("team_size must be at least 1".into()));
        }
        if self.max_games_per_set == 0 {
            return Err(ConfigError::Invalid(
                "max_games_per_set must be at least 1".into(),
            ));
        }
        Ok(())
    }

    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    pub fn to_toml_string(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::Invalid(e.to_string()))
    }

    pub fn scoring_rules(&self) -> ScoringRules {
        ScoringRules {
            number_of_sets: self.number_of_sets,
            allow_draws: self.allow_draws,
            max_games_per_set: self.max_games_per_set,
        }
    }

    /// Active seats on the roster: two teams per court.
    pub fn max_titulars(&self) -> usize {
        self.courts_count as usize * 2 * usize::from(self.team_size)
    }

    pub fn seed(&self) -> Option<&str> {
        self.seed.as_deref()
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod config_tests;
