use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use shopseed_generate::GenerateOptions;
use shopseed_generate::model::{DEFAULT_MAX_ATTEMPTS, DEFAULT_PURCHASE_COUNT, DEFAULT_USER_COUNT};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("toml error: {0}")]
    Toml(#[from] toml::de::Error),
}

/// Settings for a seeding run, read from TOML and overridden by flags.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SeedConfig {
    /// Connection descriptor; the default SQLite file when absent.
    pub target: Option<String>,
    pub user_count: u64,
    pub purchase_count: u64,
    pub seed: Option<u64>,
    pub max_attempts: u32,
}

impl Default for SeedConfig {
    fn default() -> Self {
        Self {
            target: None,
            user_count: DEFAULT_USER_COUNT,
            purchase_count: DEFAULT_PURCHASE_COUNT,
            seed: None,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
        }
    }
}

/// Flag values that take precedence over the file.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub target: Option<String>,
    pub user_count: Option<u64>,
    pub purchase_count: Option<u64>,
    pub seed: Option<u64>,
}

impl SeedConfig {
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Read `path` when given, otherwise start from defaults.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::from_toml(&std::fs::read_to_string(path)?),
            None => Ok(Self::default()),
        }
    }

    pub fn apply(mut self, overrides: Overrides) -> Self {
        if overrides.target.is_some() {
            self.target = overrides.target;
        }
        if let Some(value) = overrides.user_count {
            self.user_count = value;
        }
        if let Some(value) = overrides.purchase_count {
            self.purchase_count = value;
        }
        if overrides.seed.is_some() {
            self.seed = overrides.seed;
        }
        self
    }

    pub fn generate_options(&self) -> GenerateOptions {
        GenerateOptions {
            user_count: self.user_count,
            purchase_count: self.purchase_count,
            max_attempts: self.max_attempts,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_uses_defaults() {
        let config = SeedConfig::from_toml("").expect("parse");
        assert_eq!(config, SeedConfig::default());
        assert_eq!(config.user_count, 100);
        assert_eq!(config.purchase_count, 1000);
    }

    #[test]
    fn parses_all_fields() {
        let config = SeedConfig::from_toml(
            r#"
            target = "postgres://shop@localhost/testdb"
            user_count = 5
            purchase_count = 10
            seed = 42
            max_attempts = 50
            "#,
        )
        .expect("parse");
        assert_eq!(config.target.as_deref(), Some("postgres://shop@localhost/testdb"));
        assert_eq!(config.generate_options().user_count, 5);
        assert_eq!(config.generate_options().max_attempts, 50);
        assert_eq!(config.seed, Some(42));
    }

    #[test]
    fn unknown_keys_are_rejected() {
        assert!(SeedConfig::from_toml("users = 5").is_err());
    }

    #[test]
    fn flags_override_file() {
        let config = SeedConfig {
            seed: Some(1),
            ..SeedConfig::default()
        }
        .apply(Overrides {
            user_count: Some(7),
            ..Overrides::default()
        });
        assert_eq!(config.user_count, 7);
        assert_eq!(config.purchase_count, 1000);
        assert_eq!(config.seed, Some(1));
    }
}
