use std::sync::Arc;

use anyhow::Result;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use diesel::{OptionalExtension, prelude::*, update};

use crate::{
    domain::{entities::vouchers::VoucherEntity, repositories::vouchers::VoucherRepository},
    infrastructure::postgres::{postgres_connection::PgPoolSquad, schema::vouchers},
};

pub struct VoucherPostgres {
    db_pool: Arc<PgPoolSquad>,
}

impl VoucherPostgres {
    pub fn new(db_pool: Arc<PgPoolSquad>) -> Self {
        Self { db_pool }
    }
}

#[async_trait]
impl VoucherRepository for VoucherPostgres {
    async fn claim(&self, code: &str, nick: &str, claimed_at: DateTime<Utc>) -> Result<usize> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        // Check and claim in one statement; row isolation in Postgres makes
        // concurrent claims on the same code resolve to a single winner.
        let affected_rows = update(vouchers::table)
            .filter(vouchers::code.eq(code))
            .filter(vouchers::claimed_by.is_null())
            .set((
                vouchers::claimed_by.eq(nick),
                vouchers::claimed_at.eq(claimed_at),
            ))
            .execute(&mut conn)?;

        Ok(affected_rows)
    }

    async fn find_by_code(&self, code: &str) -> Result<Option<VoucherEntity>> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        let voucher = vouchers::table
            .filter(vouchers::code.eq(code))
            .select(VoucherEntity::as_select())
            .first::<VoucherEntity>(&mut conn)
            .optional()?;

        Ok(voucher)
    }
}
