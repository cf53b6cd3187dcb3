use anyhow::Result;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use mockall::automock;

use crate::domain::entities::vouchers::VoucherEntity;

#[automock]
#[async_trait]
pub trait VoucherRepository {
    /// Claims the code for `nick` with a single conditional update
    /// (`claimed_by = nick WHERE code = ? AND claimed_by IS NULL`) and returns
    /// the affected-row count. Concurrent claims on one code cannot both
    /// return 1.
    async fn claim(&self, code: &str, nick: &str, claimed_at: DateTime<Utc>) -> Result<usize>;

    async fn find_by_code(&self, code: &str) -> Result<Option<VoucherEntity>>;
}
