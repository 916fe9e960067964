//! Configuration loading for the Frontpage editor.
//!
//! The canonical configuration lives in `frontpage-config.yaml` at the
//! project root. Every section is optional; an empty file yields the
//! shipped game balance.

use std::path::Path;

use rust_decimal::Decimal;
use serde::Deserialize;

use frontpage_scoring::ScoringConfig;
use frontpage_types::EditionBaseline;

/// Environment variable that overrides `logging.level`.
pub const LOG_LEVEL_ENV: &str = "FRONTPAGE_LOG_LEVEL";

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Failed to read the configuration file from disk.
    #[error("failed to read config file: {source}")]
    Io {
        /// The underlying I/O error.
        #[from]
        source: std::io::Error,
    },

    /// Failed to parse YAML content.
    #[error("failed to parse config YAML: {source}")]
    Yaml {
        /// The underlying YAML parse error.
        source: serde_yml::Error,
    },
}

impl From<serde_yml::Error> for ConfigError {
    fn from(source: serde_yml::Error) -> Self {
        Self::Yaml { source }
    }
}

/// Top-level editor configuration.
///
/// Mirrors the structure of `frontpage-config.yaml`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct EditorConfig {
    /// Scoring tunables.
    #[serde(default)]
    pub scoring: ScoringConfig,

    /// Starting point when no edition has been published yet.
    #[serde(default)]
    pub baseline: BaselineConfig,

    /// Logging configuration.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl EditorConfig {
    /// Load configuration from a YAML file at the given path.
    ///
    /// `FRONTPAGE_LOG_LEVEL` overrides `logging.level`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] if the file cannot be read, or
    /// [`ConfigError::Yaml`] if the content is not valid YAML.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::parse(&contents)
    }

    /// Parse configuration from a YAML string.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Yaml`] if the string is not valid YAML.
    pub fn parse(yaml: &str) -> Result<Self, ConfigError> {
        // serde_yml reads an empty document as null rather than an empty map.
        let mut config: Self = if yaml.trim().is_empty() {
            Self::default()
        } else {
            serde_yml::from_str(yaml)?
        };
        config.logging.apply_env_overrides();
        Ok(config)
    }
}

/// Baseline used for the first edition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct BaselineConfig {
    /// Starting credibility (default: 50).
    pub credibility: Decimal,
    /// Starting readership (default: 10000).
    pub readers: Decimal,
}

impl BaselineConfig {
    /// The configured values as a scoring baseline.
    pub const fn to_baseline(self) -> EditionBaseline {
        EditionBaseline {
            credibility: self.credibility,
            readers: self.readers,
        }
    }
}

impl Default for BaselineConfig {
    fn default() -> Self {
        let baseline = EditionBaseline::default();
        Self {
            credibility: baseline.credibility,
            readers: baseline.readers,
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl LoggingConfig {
    /// Apply `FRONTPAGE_LOG_LEVEL` if it is set and non-empty.
    pub fn apply_env_overrides(&mut self) {
        if let Some(val) = std::env::var(LOG_LEVEL_ENV)
            .ok()
            .map(|v| v.trim().to_owned())
            .filter(|v| !v.is_empty())
        {
            self.level = val;
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_owned()
}

#[cfg(test)]
mod tests {
    use frontpage_types::RowId;
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn default_config_matches_shipped_balance() {
        let config = EditorConfig::default();
        assert_eq!(config.baseline.to_baseline(), EditionBaseline::default());
        assert_eq!(config.scoring, ScoringConfig::default());
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn parse_full_yaml() {
        let yaml = r"
scoring:
  row_multipliers:
    row1: 2
    row2: 1.5
    row3: 1
  ad_impacts:
    war:
      cash_delta: 2500
      credibility_delta: -8
  variants:
    propaganda_readers: -1000
  adjacency:
    synergy_ratio: 0.25
    conflict_credibility_penalty: 20
  credibility_bounds:
    min: 10
    max: 90

baseline:
  credibility: 60
  readers: 25000
";
        let config = EditorConfig::parse(yaml);
        assert!(config.is_ok(), "{config:?}");
        let config = config.unwrap_or_default();

        assert_eq!(config.scoring.row_multipliers.for_row(RowId::Row1), dec!(2));
        assert_eq!(config.scoring.row_multipliers.for_row(RowId::Row2), dec!(1.5));
        assert_eq!(config.scoring.ad_impacts.war.cash_delta, dec!(2500));
        assert_eq!(config.scoring.ad_impacts.war.credibility_delta, dec!(-8));
        // Unlisted classes keep their defaults.
        assert_eq!(config.scoring.ad_impacts.pharma.cash_delta, dec!(1500));
        assert_eq!(config.scoring.variants.propaganda_readers, dec!(-1000));
        assert_eq!(config.scoring.variants.propaganda_cash, dec!(200));
        assert_eq!(config.scoring.adjacency.synergy_ratio, dec!(0.25));
        assert_eq!(config.scoring.adjacency.conflict_credibility_penalty, dec!(20));
        assert_eq!(config.scoring.credibility_bounds.min, dec!(10));
        assert_eq!(config.baseline.credibility, dec!(60));
        assert_eq!(config.baseline.readers, dec!(25000));
    }

    #[test]
    fn parse_minimal_yaml() {
        let config = EditorConfig::parse("baseline:\n  readers: 500\n");
        assert!(config.is_ok());
        let config = config.unwrap_or_default();
        assert_eq!(config.baseline.readers, dec!(500));
        assert_eq!(config.baseline.credibility, dec!(50));
        assert_eq!(config.scoring, ScoringConfig::default());
    }

    #[test]
    fn parse_empty_yaml() {
        let config = EditorConfig::parse("");
        assert!(config.is_ok());
        let config = config.unwrap_or_default();
        assert_eq!(config.scoring, ScoringConfig::default());
    }

    #[test]
    fn invalid_yaml_is_an_error() {
        let config = EditorConfig::parse("scoring: [not, a, map]");
        assert!(matches!(config, Err(ConfigError::Yaml { .. })));
    }

    #[test]
    fn load_project_config_file() {
        let path = Path::new(env!("CARGO_MANIFEST_DIR"))
            .join("..")
            .join("..")
            .join("frontpage-config.yaml");
        if path.exists() {
            let config = EditorConfig::from_file(&path);
            assert!(config.is_ok(), "Failed to load project config: {config:?}");
            let config = config.unwrap_or_default();
            assert_eq!(config.scoring, ScoringConfig::default());
        }
    }
}
