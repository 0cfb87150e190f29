use serde::{Deserialize, Serialize};
use shopseed_core::Dialect;

/// Outcome of a committed load.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoadReport {
    pub dialect: Dialect,
    pub users_inserted: u64,
    pub purchases_inserted: u64,
    /// Added to generated user ids; non-zero when the table already had rows.
    pub user_id_offset: i64,
    /// Added to generated purchase ids.
    pub purchase_id_offset: i64,
    pub duration_ms: u64,
}
