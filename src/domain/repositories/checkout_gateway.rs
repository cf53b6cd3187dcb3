use anyhow::Result;
use async_trait::async_trait;
use mockall::automock;

use crate::domain::value_objects::{
    checkout::CreateCheckoutSessionModel,
    stripe_webhook::{CheckoutSessionObject, StripeEvent},
};

/// Payment gateway operations the core consumes as opaque collaborators.
#[automock]
#[async_trait]
pub trait CheckoutGateway {
    /// Validates the signature header against the exact raw payload bytes and
    /// parses the event. Must not be handed a re-serialized body.
    fn verify_webhook_signature(
        &self,
        payload: &[u8],
        signature_header: &str,
    ) -> Result<StripeEvent>;

    /// Opens a hosted checkout session and returns its URL.
    async fn create_checkout_session(&self, session: CreateCheckoutSessionModel) -> Result<String>;

    /// Looks up the checkout session associated with a payment intent, if any.
    async fn find_session_by_payment_intent(
        &self,
        payment_intent_id: &str,
    ) -> Result<Option<CheckoutSessionObject>>;
}
