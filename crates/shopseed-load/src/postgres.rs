use sqlx::{Connection, PgConnection};

use shopseed_core::Dialect;

use crate::backend::impl_loader;
use crate::error::LoadError;

/// Loader over a single Postgres connection.
#[derive(Debug)]
pub struct PostgresLoader {
    conn: PgConnection,
}

impl PostgresLoader {
    pub async fn connect(url: &str) -> Result<Self, LoadError> {
        Ok(Self::new(PgConnection::connect(url).await?))
    }
}

impl_loader!(PostgresLoader, sqlx::Postgres, PgConnection, Dialect::Postgres);
