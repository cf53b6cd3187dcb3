use std::sync::Arc;

use anyhow::Result;
use chrono::Utc;
use tracing::{info, warn};

use crate::domain::{
    repositories::vouchers::VoucherRepository, value_objects::vouchers::RedeemOutcome,
};


pub struct VoucherUseCase<T>
where
    T: VoucherRepository + Send + Sync + 'static,
{
    voucher_repository: Arc<T>,
}

impl<T> VoucherUseCase<T>
where
    T: VoucherRepository + Send + Sync + 'static,
{
    pub fn new(voucher_repository: Arc<T>) -> Self {
        Self { voucher_repository }
    }

    /// The claim is decided entirely by the conditional update's affected-row
    /// count; the follow-up read only labels a failed attempt. A lost race
    /// therefore reads as `AlreadyClaimed`, never as a second success.
    pub async fn redeem(&self, code: &str, nick: &str) -> Result<RedeemOutcome> {
        let claimed_rows = self.voucher_repository.claim(code, nick, Utc::now()).await?;

        if claimed_rows > 0 {
            info!(nick, "voucher: code claimed");
            return Ok(RedeemOutcome::Success);
        }

        match self.voucher_repository.find_by_code(code).await? {
            Some(_) => {
                warn!(nick, "voucher: code already claimed");
                Ok(RedeemOutcome::AlreadyClaimed)
            }
            None => {
                warn!(nick, "voucher: unknown code");
                Ok(RedeemOutcome::NotFound)
            }
        }
    }
}
