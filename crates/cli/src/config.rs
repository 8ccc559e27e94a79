//! Scenario configuration loaded from an optional TOML file.
//!
//! Every key is optional; missing keys fall back to the defaults of the
//! demonstration (A1001 / S2001).

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::Deserialize;
use std::path::Path;
use thiserror::Error;

/// Configuration loading errors
#[derive(Error, Debug)]
pub enum ConfigError {
    /// File not found
    #[error("config file not found: {0}")]
    NotFound(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Parse error
    #[error("parse error: {0}")]
    Parse(#[from] toml::de::Error),

    /// Validation error
    #[error("validation error: {0}")]
    Validation(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ScenarioConfig {
    pub checking: CheckingConfig,
    pub savings: SavingsConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CheckingConfig {
    pub id: String,
    pub opening_balance: Decimal,
    pub deposit: Decimal,
    pub withdraw: Decimal,
}

impl Default for CheckingConfig {
    fn default() -> Self {
        Self {
            id: "A1001".to_string(),
            opening_balance: dec!(1000),
            deposit: dec!(500),
            withdraw: dec!(300),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SavingsConfig {
    pub id: String,
    pub opening_balance: Decimal,
    pub rate: Decimal,
    pub deposit: Decimal,
}

impl Default for SavingsConfig {
    fn default() -> Self {
        Self {
            id: "S2001".to_string(),
            opening_balance: dec!(2000),
            rate: dec!(0.05),
            deposit: dec!(500),
        }
    }
}

impl ScenarioConfig {
    /// Load from `path`, or use the defaults when no path is given.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::load_file(path),
            None => Ok(Self::default()),
        }
    }

    pub fn load_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();

        if !path.exists() {
            return Err(ConfigError::NotFound(path.display().to_string()));
        }

        let content = std::fs::read_to_string(path)?;
        let config = Self::load_str(&content)?;

        tracing::info!(path = %path.display(), "Configuration loaded");
        Ok(config)
    }

    pub fn load_str(content: &str) -> Result<Self, ConfigError> {
        let config: ScenarioConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        for id in [&self.checking.id, &self.savings.id] {
            if id.trim().is_empty() {
                return Err(ConfigError::Validation("account id must not be empty".to_string()));
            }
        }

        if self.checking.id == self.savings.id {
            return Err(ConfigError::Validation(format!(
                "account ids must be distinct: '{}'",
                self.checking.id
            )));
        }

        if self.savings.rate < Decimal::ZERO {
            return Err(ConfigError::Validation(format!(
                "savings rate must be >= 0: {}",
                self.savings.rate
            )));
        }

        let amounts = [
            ("checking.opening_balance", self.checking.opening_balance),
            ("checking.deposit", self.checking.deposit),
            ("checking.withdraw", self.checking.withdraw),
            ("savings.opening_balance", self.savings.opening_balance),
            ("savings.deposit", self.savings.deposit),
        ];
        for (key, amount) in amounts {
            if amount < Decimal::ZERO {
                return Err(ConfigError::Validation(format!(
                    "{key} must be >= 0: {amount}"
                )));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config() {
        let config = ScenarioConfig::load(None).unwrap();
        assert_eq!(config.checking.id, "A1001");
        assert_eq!(config.checking.opening_balance, dec!(1000));
        assert_eq!(config.savings.id, "S2001");
        assert_eq!(config.savings.rate, dec!(0.05));
    }

    #[test]
    fn test_empty_string_is_default() {
        let config = ScenarioConfig::load_str("").unwrap();
        assert_eq!(config, ScenarioConfig::default());
    }

    #[test]
    fn test_shipped_config_matches_defaults() {
        let config = ScenarioConfig::load_str(include_str!("../scenario.toml")).unwrap();
        assert_eq!(config, ScenarioConfig::default());
    }

    #[test]
    fn test_parse_partial_config() {
        let toml = r#"
            [checking]
            id = "C-1"
            deposit = "75.25"

            [savings]
            rate = "0.1"
        "#;

        let config = ScenarioConfig::load_str(toml).unwrap();
        assert_eq!(config.checking.id, "C-1");
        assert_eq!(config.checking.deposit, dec!(75.25));
        assert_eq!(config.checking.withdraw, dec!(300));
        assert_eq!(config.savings.rate, dec!(0.1));
        assert_eq!(config.savings.id, "S2001");
    }

    #[test]
    fn test_unknown_key_rejected() {
        let result = ScenarioConfig::load_str("[checking]\nbalance = \"1\"\n");
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_negative_rate_rejected() {
        let result = ScenarioConfig::load_str("[savings]\nrate = \"-0.01\"\n");
        assert!(matches!(result, Err(ConfigError::Validation(_))));
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let toml = "[checking]\nid = \"X\"\n[savings]\nid = \"X\"\n";
        let result = ScenarioConfig::load_str(toml);
        assert!(matches!(result, Err(ConfigError::Validation(_))));
    }

    #[test]
    fn test_empty_id_rejected() {
        let result = ScenarioConfig::load_str("[checking]\nid = \"  \"\n");
        assert!(matches!(result, Err(ConfigError::Validation(_))));
    }

    #[test]
    fn test_negative_amount_rejected() {
        let result = ScenarioConfig::load_str("[checking]\nwithdraw = \"-1\"\n");
        match result {
            Err(ConfigError::Validation(msg)) => assert!(msg.contains("checking.withdraw")),
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn test_load_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[savings]\nopening_balance = \"10\"").unwrap();

        let config = ScenarioConfig::load(Some(file.path())).unwrap();
        assert_eq!(config.savings.opening_balance, dec!(10));
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let result = ScenarioConfig::load_file(dir.path().join("missing.toml"));
        assert!(matches!(result, Err(ConfigError::NotFound(_))));
    }
}
