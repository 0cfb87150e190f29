use chrono::NaiveDateTime;
use rand::RngCore;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::errors::GenerationError;
use crate::purchases::PurchaseGenerator;
use crate::users::UserGenerator;

pub const DEFAULT_USER_COUNT: u64 = 100;
pub const DEFAULT_PURCHASE_COUNT: u64 = 1000;
pub const DEFAULT_MAX_ATTEMPTS: u32 = 1000;

/// A synthetic customer.
///
/// `gender` and `contact_number` are generated alongside the stored columns
/// and appear in CSV exports only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRecord {
    #[serde(rename = "id_user")]
    pub id: i64,
    pub title: String,
    pub first_name: String,
    pub surname: String,
    pub gender: String,
    pub contact_number: String,
}

/// A synthetic purchase. `price` is in minor units (pence).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PurchaseRecord {
    #[serde(rename = "id_purchase")]
    pub id: i64,
    #[serde(rename = "id_user")]
    pub user_id: i64,
    pub category: String,
    pub item: String,
    pub date: NaiveDateTime,
    pub price: i64,
}

/// Options for a generation run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerateOptions {
    /// Number of users to produce.
    pub user_count: u64,
    /// Number of purchases to produce.
    pub purchase_count: u64,
    /// Maximum rejected samples before a single user fails.
    pub max_attempts: u32,
}

impl Default for GenerateOptions {
    fn default() -> Self {
        Self {
            user_count: DEFAULT_USER_COUNT,
            purchase_count: DEFAULT_PURCHASE_COUNT,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
        }
    }
}

/// Users collected up front plus a lazy source of purchases.
///
/// Users are needed as one batch and must exist before any purchase is
/// generated; purchases stream on demand.
#[derive(Debug)]
pub struct GeneratedRecords<R> {
    pub users: Vec<UserRecord>,
    pub purchases: PurchaseGenerator<R>,
}

/// Generate every user, then set up the purchase generator on the same
/// random source.
pub fn generate_records<R: RngCore>(
    options: &GenerateOptions,
    now: NaiveDateTime,
    mut rng: R,
) -> Result<GeneratedRecords<R>, GenerationError> {
    let users = UserGenerator::new(options.user_count, options.max_attempts, &mut rng)?
        .collect::<Result<Vec<_>, _>>()?;
    let purchases = PurchaseGenerator::new(options.purchase_count, options.user_count, now, rng)?;

    info!(
        users = users.len(),
        purchases = purchases.len(),
        "records generated"
    );

    Ok(GeneratedRecords { users, purchases })
}
