//! Storage loaders for shopseed.
//!
//! A load opens one connection, creates the tables if absent, writes all
//! users as a batch and then every purchase individually inside a single
//! transaction, commits, and closes the connection.

pub mod adapter;
mod backend;
pub mod error;
pub mod postgres;
pub mod report;
pub mod sql;
pub mod sqlite;
pub mod target;

use chrono::{NaiveDateTime, Utc};
use tracing::info;

use shopseed_core::{Dialect, default_catalog};
use shopseed_generate::{GenerateOptions, GeneratedRecords, generate_records, seeded_rng};

pub use adapter::Loader;
pub use error::LoadError;
pub use postgres::PostgresLoader;
pub use report::LoadReport;
pub use sqlite::SqliteLoader;
pub use target::{DEFAULT_TARGET, Target};

/// What to generate for a load.
#[derive(Debug, Clone, Default)]
pub struct LoadRequest {
    pub options: GenerateOptions,
    /// Seed for the random source; drawn from OS entropy when absent.
    pub seed: Option<u64>,
    /// Reference time for purchase dates; the current UTC time when absent.
    pub now: Option<NaiveDateTime>,
}

/// Open a loader for `target`.
pub async fn connect(target: &Target) -> Result<Box<dyn Loader>, LoadError> {
    let loader: Box<dyn Loader> = match target.dialect() {
        Dialect::Postgres => Box::new(PostgresLoader::connect(target.url()).await?),
        Dialect::Sqlite => Box::new(SqliteLoader::connect(target.url()).await?),
    };
    info!(event = "connected", dialect = %target.dialect(), target = %target.redacted());
    Ok(loader)
}

/// Generate records and load them into `target`.
pub async fn seed_database(target: &Target, request: &LoadRequest) -> Result<LoadReport, LoadError> {
    let catalog = default_catalog()?;
    let mut seeded = seeded_rng(request.seed);
    let now = request.now.unwrap_or_else(|| Utc::now().naive_utc());
    let options = request.options;

    info!(
        event = "run_started",
        target = %target.redacted(),
        seed = seeded.seed,
        users = options.user_count,
        purchases = options.purchase_count
    );

    let GeneratedRecords {
        users,
        mut purchases,
    } = generate_records(&options, now, &mut seeded.rng)?;

    let mut loader = connect(target).await?;
    loader.create_tables(&catalog).await?;
    let report = loader.load(&catalog, &users, &mut purchases).await?;
    loader.close().await?;

    info!(
        event = "run_finished",
        users = report.users_inserted,
        purchases = report.purchases_inserted,
        duration_ms = report.duration_ms
    );
    Ok(report)
}

/// Load the default 100 users and 1000 purchases into the database at `url`.
pub async fn load_from_url(url: &str) -> Result<LoadReport, LoadError> {
    let target = Target::parse(url)?;
    seed_database(&target, &LoadRequest::default()).await
}
