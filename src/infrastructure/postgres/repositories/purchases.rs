use std::sync::Arc;

use anyhow::Result;
use async_trait::async_trait;
use diesel::{OptionalExtension, insert_into, prelude::*};

use crate::{
    domain::{
        entities::purchases::{InsertPurchaseEntity, PurchaseEntity},
        repositories::purchases::PurchaseRepository,
        value_objects::enums::payment_statuses::PaymentStatus,
    },
    infrastructure::postgres::{postgres_connection::PgPoolSquad, schema::purchases},
};

pub struct PurchasePostgres {
    db_pool: Arc<PgPoolSquad>,
}

impl PurchasePostgres {
    pub fn new(db_pool: Arc<PgPoolSquad>) -> Self {
        Self { db_pool }
    }
}

#[async_trait]
impl PurchaseRepository for PurchasePostgres {
    async fn record_purchase(
        &self,
        insert_purchase_entity: InsertPurchaseEntity,
    ) -> Result<Option<i64>> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        // DO NOTHING on the event-id unique index makes webhook redelivery a
        // no-op insert; `None` tells the caller the delivery was a duplicate.
        let purchase_id = insert_into(purchases::table)
            .values(&insert_purchase_entity)
            .on_conflict(purchases::stripe_event_id)
            .do_nothing()
            .returning(purchases::id)
            .get_result::<i64>(&mut conn)
            .optional()?;

        Ok(purchase_id)
    }

    async fn list_recent_succeeded(&self, limit: i64) -> Result<Vec<PurchaseEntity>> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        let results = purchases::table
            .filter(purchases::payment_status.eq(PaymentStatus::Succeeded.to_string()))
            .order(purchases::created_at.desc())
            .limit(limit)
            .select(PurchaseEntity::as_select())
            .load::<PurchaseEntity>(&mut conn)?;

        Ok(results)
    }
}
