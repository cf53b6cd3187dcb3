use std::collections::HashMap;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize)]
pub struct CreateCheckoutSessionRequest {
    pub nick: String,
    pub email: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct CreateCheckoutSessionResponse {
    pub url: String,
}

/// Everything the gateway needs to open a hosted checkout. The metadata is
/// echoed back on webhook events and correlates them with the buyer.
#[derive(Debug, Clone, PartialEq)]
pub struct CreateCheckoutSessionModel {
    pub product_name: String,
    pub amount_minor: i64,
    pub currency: String,
    pub customer_email: String,
    pub metadata: HashMap<String, String>,
}
