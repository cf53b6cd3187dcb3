use std::sync::Arc;

use chrono::Utc;
use thiserror::Error;
use tracing::{info, warn};

use crate::domain::{
    entities::purchases::InsertPurchaseEntity,
    repositories::{checkout_gateway::CheckoutGateway, purchases::PurchaseRepository},
    value_objects::{
        enums::payment_statuses::PaymentStatus,
        stripe_webhook::{CheckoutSessionObject, StripeEvent},
    },
};

#[cfg(test)]
mod tests;

pub const CHECKOUT_COMPLETED: &str = "checkout.session.completed";
pub const ASYNC_PAYMENT_FAILED: &str = "checkout.session.async_payment_failed";
pub const PAYMENT_INTENT_FAILED: &str = "payment_intent.payment_failed";

#[derive(Debug, Error)]
pub enum WebhookError {
    #[error("invalid webhook signature")]
    InvalidSignature(#[source] anyhow::Error),

    #[error("event metadata is missing required key: {0}")]
    MissingMetadata(&'static str),

    #[error("no checkout session found for payment intent {0}")]
    UpstreamLookupFailure(String),

    #[error("internal error while handling webhook")]
    Internal(#[source] anyhow::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WebhookOutcome {
    Recorded(i64),
    DuplicateDelivery,
    Ignored,
}

pub struct StripeWebhookUseCase<T>
where
    T: PurchaseRepository + Send + Sync + 'static,
{
    purchase_repository: Arc<T>,
    checkout_gateway: Arc<dyn CheckoutGateway + Send + Sync>,
}

impl<T> StripeWebhookUseCase<T>
where
    T: PurchaseRepository + Send + Sync + 'static,
{
    pub fn new(
        purchase_repository: Arc<T>,
        checkout_gateway: Arc<dyn CheckoutGateway + Send + Sync>,
    ) -> Self {
        Self {
            purchase_repository,
            checkout_gateway,
        }
    }

    /// Verifies the signature over the exact raw payload bytes, then
    /// dispatches the event. Verification failure leaves no side effects.
    pub async fn verify_and_process(
        &self,
        payload: &[u8],
        signature_header: &str,
    ) -> Result<WebhookOutcome, WebhookError> {
        let event = self
            .checkout_gateway
            .verify_webhook_signature(payload, signature_header)
            .map_err(WebhookError::InvalidSignature)?;

        self.process_event(event).await
    }

    pub async fn process_event(&self, event: StripeEvent) -> Result<WebhookOutcome, WebhookError> {
        match event.type_.as_str() {
            CHECKOUT_COMPLETED => {
                let session = self.extract_session(&event)?;
                self.record_session(&event.id, session, PaymentStatus::Succeeded)
                    .await
            }
            ASYNC_PAYMENT_FAILED => {
                let session = self.extract_session(&event)?;
                self.record_session(&event.id, session, PaymentStatus::Failed)
                    .await
            }
            PAYMENT_INTENT_FAILED => {
                let session = self.recover_session(&event).await?;
                self.record_session(&event.id, session, PaymentStatus::Failed)
                    .await
            }
            other => {
                info!(
                    event_id = %event.id,
                    event_type = other,
                    "stripe_webhook: unhandled event type acknowledged"
                );
                Ok(WebhookOutcome::Ignored)
            }
        }
    }

    fn extract_session(&self, event: &StripeEvent) -> Result<CheckoutSessionObject, WebhookError> {
        event.checkout_session().ok_or_else(|| {
            warn!(event_id = %event.id, "stripe_webhook: event object is not a checkout session");
            WebhookError::MissingMetadata("checkout session")
        })
    }

    /// The failed-payment-intent event carries no session; recover it with a
    /// "list sessions by payment intent, limit 1" gateway lookup.
    async fn recover_session(
        &self,
        event: &StripeEvent,
    ) -> Result<CheckoutSessionObject, WebhookError> {
        let payment_intent = event.payment_intent().ok_or_else(|| {
            warn!(event_id = %event.id, "stripe_webhook: event object is not a payment intent");
            WebhookError::MissingMetadata("payment intent")
        })?;

        info!(
            event_id = %event.id,
            payment_intent_id = %payment_intent.id,
            "stripe_webhook: recovering checkout session for failed payment intent"
        );

        self.checkout_gateway
            .find_session_by_payment_intent(&payment_intent.id)
            .await
            .map_err(WebhookError::Internal)?
            .ok_or_else(|| {
                warn!(
                    event_id = %event.id,
                    payment_intent_id = %payment_intent.id,
                    "stripe_webhook: no checkout session matches the payment intent"
                );
                WebhookError::UpstreamLookupFailure(payment_intent.id.clone())
            })
    }

    async fn record_session(
        &self,
        event_id: &str,
        session: CheckoutSessionObject,
        payment_status: PaymentStatus,
    ) -> Result<WebhookOutcome, WebhookError> {
        let nick = require_metadata(event_id, &session, "nick")?;
        let product = require_metadata(event_id, &session, "product")?;

        let insert_purchase_entity = InsertPurchaseEntity {
            nick: nick.to_string(),
            email: session.customer_email.clone(),
            product: product.to_string(),
            quantity: 1,
            payment_status: payment_status.to_string(),
            processed: false,
            stripe_event_id: event_id.to_string(),
            created_at: Utc::now(),
        };

        match self
            .purchase_repository
            .record_purchase(insert_purchase_entity)
            .await
        {
            Ok(Some(purchase_id)) => {
                info!(
                    event_id,
                    purchase_id,
                    nick,
                    product,
                    payment_status = %payment_status,
                    "stripe_webhook: purchase recorded"
                );
                Ok(WebhookOutcome::Recorded(purchase_id))
            }
            Ok(None) => {
                warn!(event_id, "stripe_webhook: duplicate delivery ignored");
                Ok(WebhookOutcome::DuplicateDelivery)
            }
            Err(err) => Err(WebhookError::Internal(err)),
        }
    }
}

fn require_metadata<'a>(
    event_id: &str,
    session: &'a CheckoutSessionObject,
    key: &'static str,
) -> Result<&'a str, WebhookError> {
    match session.metadata.get(key) {
        Some(value) if !value.trim().is_empty() => Ok(value.as_str()),
        _ => {
            warn!(
                event_id,
                key, "stripe_webhook: session metadata is missing a required key"
            );
            Err(WebhookError::MissingMetadata(key))
        }
    }
}
