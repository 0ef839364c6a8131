//! Configuration system for LineupForge.
//!
//! Load optimizer configuration from TOML or YAML files to control the
//! budget ceiling, position rules, the flex slot, and the
//! diversification targets without code changes.
//!
//! # Examples
//!
//! Load configuration from a TOML string:
//!
//! ```
//! use lineupforge_config::OptimizerConfig;
//!
//! let config = OptimizerConfig::from_toml_str(r#"
//!     budget = 50000
//!     lineup_count = 5
//!     uniques = 1
//!
//!     [[positions]]
//!     label = "QB"
//!     min = 1
//!     max = 1
//!
//!     [[positions]]
//!     label = "RB"
//!     min = 2
//!     max = 3
//!
//!     [flex]
//!     positions = ["RB"]
//!     count = 3
//! "#).unwrap();
//!
//! assert_eq!(config.budget, 50_000);
//! assert_eq!(config.positions.len(), 2);
//! ```
//!
//! Use the built-in slate when no file is present:
//!
//! ```
//! use lineupforge_config::OptimizerConfig;
//!
//! let config = OptimizerConfig::load("optimizer.toml")
//!     .unwrap_or_else(|_| OptimizerConfig::classic_football());
//! # let _ = config;
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration error
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Main optimizer configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct OptimizerConfig {
    /// Spending ceiling across one lineup.
    #[serde(default)]
    pub budget: u64,

    /// Number of distinct lineups to produce (K).
    #[serde(default = "default_lineup_count")]
    pub lineup_count: usize,

    /// Uniqueness threshold (U): how many candidates each later lineup
    /// must change relative to every earlier one.
    #[serde(default = "default_uniques")]
    pub uniques: u32,

    /// Candidates projected below this value are dropped at pool load.
    #[serde(default)]
    pub min_value: f64,

    /// Position rules, in slot display order.
    #[serde(default)]
    pub positions: Vec<PositionConfig>,

    /// The shared flex slot.
    #[serde(default)]
    pub flex: FlexConfig,
}

impl Default for OptimizerConfig {
    fn default() -> Self {
        Self {
            budget: 0,
            lineup_count: default_lineup_count(),
            uniques: default_uniques(),
            min_value: 0.0,
            positions: Vec::new(),
            flex: FlexConfig::default(),
        }
    }
}

fn default_lineup_count() -> usize {
    1
}

fn default_uniques() -> u32 {
    1
}

/// Count bounds for one position.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct PositionConfig {
    /// Position label.
    pub label: String,

    /// Minimum required count.
    pub min: u32,

    /// Maximum allowed count.
    pub max: u32,

    /// Dedicated slots filled before the flex slot (defaults to `min`).
    #[serde(default)]
    pub fixed_slots: Option<u32>,
}

/// The shared flex slot configuration.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct FlexConfig {
    /// Contributing position labels.
    #[serde(default)]
    pub positions: Vec<String>,

    /// Total selections required across the contributing positions.
    #[serde(default)]
    pub count: u32,
}

impl OptimizerConfig {
    /// Creates a new default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns error if the file doesn't exist or contains invalid TOML.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        Self::from_toml_file(path)
    }

    /// Loads configuration from a TOML file.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Parses configuration from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(s)?)
    }

    /// Loads configuration from a YAML file.
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&contents)
    }

    /// Parses configuration from a YAML string.
    pub fn from_yaml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(s)?)
    }

    /// Sets the budget ceiling.
    pub fn with_budget(mut self, budget: u64) -> Self {
        self.budget = budget;
        self
    }

    /// Sets the target lineup count.
    pub fn with_lineup_count(mut self, lineup_count: usize) -> Self {
        self.lineup_count = lineup_count;
        self
    }

    /// Sets the uniqueness threshold.
    pub fn with_uniques(mut self, uniques: u32) -> Self {
        self.uniques = uniques;
        self
    }

    /// Adds a position rule.
    pub fn with_position(mut self, label: impl Into<String>, min: u32, max: u32) -> Self {
        self.positions.push(PositionConfig {
            label: label.into(),
            min,
            max,
            fixed_slots: None,
        });
        self
    }

    /// Sets the flex slot.
    pub fn with_flex<L: Into<String>>(
        mut self,
        positions: impl IntoIterator<Item = L>,
        count: u32,
    ) -> Self {
        self.flex = FlexConfig {
            positions: positions.into_iter().map(Into::into).collect(),
            count,
        };
        self
    }

    /// The classic football slate the original tool hardcoded: one QB,
    /// two to three RBs, three to four WRs, one to two TEs, one defense,
    /// a seven-deep flex total over RB/WR/TE, and a 50,000 budget.
    pub fn classic_football() -> Self {
        Self::new()
            .with_budget(50_000)
            .with_position("QB", 1, 1)
            .with_position("RB", 2, 3)
            .with_position("WR", 3, 4)
            .with_position("TE", 1, 2)
            .with_position("DST", 1, 1)
            .with_flex(["RB", "WR", "TE"], 7)
    }

    /// Checks field-level invariants.
    ///
    /// Cross-field validation (duplicate labels, flex coverage) happens
    /// when the rule set is constructed from this configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.budget == 0 {
            return Err(ConfigError::Invalid("budget must be positive".into()));
        }
        if self.lineup_count == 0 {
            return Err(ConfigError::Invalid(
                "lineup_count must be at least 1".into(),
            ));
        }
        if self.uniques == 0 {
            return Err(ConfigError::Invalid("uniques must be at least 1".into()));
        }
        if !self.min_value.is_finite() || self.min_value < 0.0 {
            return Err(ConfigError::Invalid(
                "min_value must be finite and non-negative".into(),
            ));
        }
        if self.positions.is_empty() {
            return Err(ConfigError::Invalid(
                "at least one position rule is required".into(),
            ));
        }
        for position in &self.positions {
            if position.min > position.max {
                return Err(ConfigError::Invalid(format!(
                    "position {}: min {} > max {}",
                    position.label, position.min, position.max
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toml_parsing() {
        let toml = r#"
            budget = 50000
            lineup_count = 3
            uniques = 2
            min_value = 5.0

            [[positions]]
            label = "QB"
            min = 1
            max = 1

            [[positions]]
            label = "RB"
            min = 2
            max = 3
            fixed_slots = 2

            [flex]
            positions = ["RB"]
            count = 3
        "#;

        let config = OptimizerConfig::from_toml_str(toml).unwrap();
        assert_eq!(config.budget, 50_000);
        assert_eq!(config.lineup_count, 3);
        assert_eq!(config.uniques, 2);
        assert_eq!(config.min_value, 5.0);
        assert_eq!(config.positions.len(), 2);
        assert_eq!(config.positions[1].fixed_slots, Some(2));
        assert_eq!(config.flex.count, 3);
    }

    #[test]
    fn test_yaml_parsing() {
        let yaml = r#"
            budget: 50000
            lineup_count: 3
            positions:
              - label: QB
                min: 1
                max: 1
            flex:
              positions: []
              count: 0
        "#;

        let config = OptimizerConfig::from_yaml_str(yaml).unwrap();
        assert_eq!(config.budget, 50_000);
        assert_eq!(config.lineup_count, 3);
        assert_eq!(config.uniques, 1);
    }

    #[test]
    fn test_defaults() {
        let config = OptimizerConfig::from_toml_str("budget = 1000\n[[positions]]\nlabel = \"QB\"\nmin = 1\nmax = 1\n").unwrap();
        assert_eq!(config.lineup_count, 1);
        assert_eq!(config.uniques, 1);
        assert_eq!(config.min_value, 0.0);
        assert!(config.flex.positions.is_empty());
    }

    #[test]
    fn test_builder() {
        let config = OptimizerConfig::new()
            .with_budget(40_000)
            .with_lineup_count(5)
            .with_uniques(2)
            .with_position("QB", 1, 1)
            .with_flex(["RB", "WR"], 5);

        assert_eq!(config.budget, 40_000);
        assert_eq!(config.lineup_count, 5);
        assert_eq!(config.uniques, 2);
        assert_eq!(config.flex.positions, ["RB", "WR"]);
    }

    #[test]
    fn test_classic_football_preset() {
        let config = OptimizerConfig::classic_football();
        config.validate().unwrap();
        assert_eq!(config.budget, 50_000);
        assert_eq!(config.positions.len(), 5);
        assert_eq!(config.flex.count, 7);
    }

    #[test]
    fn test_validate_rejects_bad_fields() {
        let no_budget = OptimizerConfig::new().with_position("QB", 1, 1);
        assert!(matches!(
            no_budget.validate(),
            Err(ConfigError::Invalid(_))
        ));

        let zero_uniques = OptimizerConfig::classic_football().with_uniques(0);
        assert!(zero_uniques.validate().is_err());

        let inverted = OptimizerConfig::new().with_budget(1000).with_position("RB", 3, 2);
        assert!(inverted.validate().is_err());
    }
}
