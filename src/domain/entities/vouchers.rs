use chrono::{DateTime, Utc};
use diesel::prelude::*;

use crate::infrastructure::postgres::schema::vouchers;

/// Voucher codes are bulk-loaded out of band; this service only ever claims them.
#[derive(Debug, Clone, Identifiable, Selectable, Queryable)]
#[diesel(table_name = vouchers)]
pub struct VoucherEntity {
    pub id: i64,
    pub code: String,
    pub claimed_by: Option<String>,
    pub claimed_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}
