use async_trait::async_trait;

use shopseed_core::Catalog;
use shopseed_generate::{PurchaseRecord, UserRecord};

use crate::error::LoadError;
use crate::report::LoadReport;

/// A single open connection that records can be loaded through.
#[async_trait]
pub trait Loader: Send {
    /// Create every catalog table that does not exist yet.
    async fn create_tables(&mut self, catalog: &Catalog) -> Result<(), LoadError>;

    /// Insert all users as a batch, then each purchase individually, inside
    /// one transaction. Nothing is committed unless every insert succeeds.
    async fn load(
        &mut self,
        catalog: &Catalog,
        users: &[UserRecord],
        purchases: &mut (dyn Iterator<Item = PurchaseRecord> + Send),
    ) -> Result<LoadReport, LoadError>;

    async fn close(self: Box<Self>) -> Result<(), LoadError>;
}
