use serde::{Deserialize, Serialize};

use crate::domain::entities::purchases::PurchaseEntity;

/// Public projection of a successful purchase, served by `GET /api/zakupy`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RecentPurchaseModel {
    pub nick: String,
    pub product: String,
}

impl From<PurchaseEntity> for RecentPurchaseModel {
    fn from(entity: PurchaseEntity) -> Self {
        Self {
            nick: entity.nick,
            product: entity.product,
        }
    }
}
