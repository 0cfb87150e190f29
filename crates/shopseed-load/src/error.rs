use thiserror::Error;

/// Errors raised while loading records into storage.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
    #[error("schema error: {0}")]
    Schema(#[from] shopseed_core::Error),
    #[error("generation error: {0}")]
    Generation(#[from] shopseed_generate::GenerationError),
    #[error("unsupported target: {0}")]
    UnsupportedTarget(String),
}
