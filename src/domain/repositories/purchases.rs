use anyhow::Result;
use async_trait::async_trait;
use mockall::automock;

use crate::domain::entities::purchases::{InsertPurchaseEntity, PurchaseEntity};

/// Append-only purchase ledger. Inserts are keyed by the Stripe event id, so
/// redelivered webhook events never produce a second row.
#[automock]
#[async_trait]
pub trait PurchaseRepository {
    /// Returns the new row id, or `None` when the event id was already
    /// recorded (duplicate delivery).
    async fn record_purchase(
        &self,
        insert_purchase_entity: InsertPurchaseEntity,
    ) -> Result<Option<i64>>;

    async fn list_recent_succeeded(&self, limit: i64) -> Result<Vec<PurchaseEntity>>;
}
