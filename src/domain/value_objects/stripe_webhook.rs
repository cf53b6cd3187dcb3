use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// A verified Stripe webhook event. Deserialized from the raw payload only
/// after its signature has been checked.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StripeEvent {
    pub id: String,
    #[serde(rename = "type")]
    pub type_: String,
    pub data: StripeEventData,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StripeEventData {
    pub object: serde_json::Value,
}

/// The slice of a Checkout Session this service cares about: the buyer email
/// and the `{nick, product}` metadata attached at session creation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CheckoutSessionObject {
    pub id: Option<String>,
    pub customer_email: Option<String>,
    pub payment_intent: Option<String>,
    #[serde(default)]
    pub metadata: HashMap<String, String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PaymentIntentObject {
    pub id: String,
}

impl StripeEvent {
    pub fn checkout_session(&self) -> Option<CheckoutSessionObject> {
        serde_json::from_value(self.data.object.clone()).ok()
    }

    pub fn payment_intent(&self) -> Option<PaymentIntentObject> {
        serde_json::from_value(self.data.object.clone()).ok()
    }
}
