use sqlx::{Connection, SqliteConnection};

use shopseed_core::Dialect;

use crate::backend::impl_loader;
use crate::error::LoadError;

/// Loader over a single SQLite connection.
#[derive(Debug)]
pub struct SqliteLoader {
    conn: SqliteConnection,
}

impl SqliteLoader {
    pub async fn connect(url: &str) -> Result<Self, LoadError> {
        Ok(Self::new(SqliteConnection::connect(url).await?))
    }
}

impl_loader!(SqliteLoader, sqlx::Sqlite, SqliteConnection, Dialect::Sqlite);
