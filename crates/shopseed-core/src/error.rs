use thiserror::Error;

/// Core error type shared across shopseed crates.
#[derive(Debug, Error)]
pub enum Error {
    /// The catalog violates internal invariants.
    #[error("invalid schema: {0}")]
    InvalidSchema(String),
}

/// Convenience alias for results returned by shopseed crates.
pub type Result<T> = std::result::Result<T, Error>;
