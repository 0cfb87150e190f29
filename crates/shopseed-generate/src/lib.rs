//! Synthetic record generation for shopseed.
//!
//! Generators are lazy iterators driven by an explicit random source, so a
//! fixed seed always reproduces the same customers and purchases.

pub mod errors;
pub mod model;
pub mod output;
pub mod pools;
pub mod purchases;
pub mod rng;
pub mod users;

pub use errors::GenerationError;
pub use model::{GenerateOptions, GeneratedRecords, PurchaseRecord, UserRecord, generate_records};
pub use purchases::PurchaseGenerator;
pub use rng::{SeededRng, seeded_rng};
pub use users::UserGenerator;
