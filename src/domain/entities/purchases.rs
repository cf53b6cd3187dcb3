use chrono::{DateTime, Utc};
use diesel::prelude::*;

use crate::infrastructure::postgres::schema::purchases;

#[derive(Debug, Clone, Identifiable, Selectable, Queryable)]
#[diesel(table_name = purchases)]
pub struct PurchaseEntity {
    pub id: i64,
    pub nick: String,
    pub email: Option<String>,
    pub product: String,
    pub quantity: i32,
    pub payment_status: String,
    pub processed: bool,
    pub stripe_event_id: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = purchases)]
pub struct InsertPurchaseEntity {
    pub nick: String,
    pub email: Option<String>,
    pub product: String,
    pub quantity: i32,
    pub payment_status: String,
    pub processed: bool,
    pub stripe_event_id: String,
    pub created_at: DateTime<Utc>,
}
