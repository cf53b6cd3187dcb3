use std::sync::Arc;

use anyhow::Result;

use crate::domain::{
    repositories::purchases::PurchaseRepository, value_objects::purchases::RecentPurchaseModel,
};

pub struct RecentPurchasesUseCase<T>
where
    T: PurchaseRepository + Send + Sync + 'static,
{
    purchase_repository: Arc<T>,
    page_limit: i64,
}

impl<T> RecentPurchasesUseCase<T>
where
    T: PurchaseRepository + Send + Sync + 'static,
{
    pub fn new(purchase_repository: Arc<T>, page_limit: i64) -> Self {
        Self {
            purchase_repository,
            page_limit,
        }
    }

    pub async fn list_recent(&self) -> Result<Vec<RecentPurchaseModel>> {
        let purchases = self
            .purchase_repository
            .list_recent_succeeded(self.page_limit)
            .await?;

        Ok(purchases.into_iter().map(RecentPurchaseModel::from).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{
        entities::purchases::PurchaseEntity, repositories::purchases::MockPurchaseRepository,
    };
    use chrono::Utc;

    fn succeeded(id: i64, nick: &str, product: &str) -> PurchaseEntity {
        PurchaseEntity {
            id,
            nick: nick.to_string(),
            email: None,
            product: product.to_string(),
            quantity: 1,
            payment_status: "succeeded".to_string(),
            processed: false,
            stripe_event_id: format!("evt_{id}"),
            created_at: Utc::now(),
        }
    }

    #[tokio::test]
    async fn list_recent_projects_nick_and_product_with_configured_limit() {
        let mut repository = MockPurchaseRepository::new();
        repository
            .expect_list_recent_succeeded()
            .withf(|limit| *limit == 10)
            .returning(|_| {
                Ok(vec![
                    succeeded(2, "Gracz2", "PREMIUM_CASE"),
                    succeeded(1, "Gracz1", "VIP_7D"),
                ])
            });

        let usecase = RecentPurchasesUseCase::new(Arc::new(repository), 10);
        let recent = usecase.list_recent().await.unwrap();

        assert_eq!(recent.len(), 2);
        assert_eq!(recent[0].nick, "Gracz2");
        assert_eq!(recent[0].product, "PREMIUM_CASE");
        assert_eq!(recent[1].nick, "Gracz1");
    }
}
