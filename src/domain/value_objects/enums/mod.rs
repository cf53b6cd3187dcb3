pub mod payment_statuses;
pub mod products;
