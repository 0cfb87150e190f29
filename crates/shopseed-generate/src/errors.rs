use thiserror::Error;

/// Errors emitted by the record generators.
#[derive(Debug, Error)]
pub enum GenerationError {
    #[error(
        "insufficient distinct name combinations: requested {requested} users, only {available} available"
    )]
    InsufficientNames { requested: u64, available: u64 },
    #[error(
        "insufficient distinct name combinations: no unused name after {attempts} attempts ({generated} users generated)"
    )]
    RetriesExhausted { attempts: u32, generated: u64 },
    #[error("purchases need at least 2 users to reference, got {user_count}")]
    NoReferencableUsers { user_count: u64 },
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),
}
