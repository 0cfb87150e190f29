use std::fmt;

use shopseed_core::{Dialect, redact_connection_string};

use crate::error::LoadError;

/// File database used when no target is configured.
pub const DEFAULT_TARGET: &str = "sqlite://shopseed.sqlite?mode=rwc";

/// Storage backend and connection string.
#[derive(Clone, PartialEq, Eq)]
pub struct Target {
    dialect: Dialect,
    url: String,
}

impl Target {
    /// Parse a connection descriptor.
    ///
    /// `postgres://` and `postgresql://` select Postgres, `sqlite:` selects
    /// SQLite. A value without a scheme is treated as a SQLite file path,
    /// created when missing.
    pub fn parse(value: &str) -> Result<Self, LoadError> {
        let value = value.trim();
        if value.is_empty() {
            return Err(LoadError::UnsupportedTarget("empty target".to_string()));
        }

        if value.starts_with("postgres://") || value.starts_with("postgresql://") {
            return Ok(Self {
                dialect: Dialect::Postgres,
                url: value.to_string(),
            });
        }

        if value.starts_with("sqlite:") {
            return Ok(Self {
                dialect: Dialect::Sqlite,
                url: value.to_string(),
            });
        }

        if value.contains("://") {
            return Err(LoadError::UnsupportedTarget(
                redact_connection_string(value).redacted,
            ));
        }

        Ok(Self {
            dialect: Dialect::Sqlite,
            url: format!("sqlite://{value}?mode=rwc"),
        })
    }

    pub fn dialect(&self) -> Dialect {
        self.dialect
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// Connection string safe to log.
    pub fn redacted(&self) -> String {
        redact_connection_string(&self.url).redacted
    }
}

impl Default for Target {
    fn default() -> Self {
        Self {
            dialect: Dialect::Sqlite,
            url: DEFAULT_TARGET.to_string(),
        }
    }
}

impl fmt::Debug for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Target")
            .field("dialect", &self.dialect)
            .field("url", &self.redacted())
            .finish()
    }
}
