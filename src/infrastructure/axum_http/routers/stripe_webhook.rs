use std::sync::Arc;

use axum::{
    Router,
    body::Bytes,
    extract::State,
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing::post,
};
use tracing::{error, info, warn};

use crate::{
    application::usecases::stripe_webhook::{StripeWebhookUseCase, WebhookError, WebhookOutcome},
    domain::repositories::{checkout_gateway::CheckoutGateway, purchases::PurchaseRepository},
    infrastructure::{
        axum_http::error_responses::AppError,
        postgres::{postgres_connection::PgPoolSquad, repositories::purchases::PurchasePostgres},
    },
};

pub fn routes(
    db_pool: Arc<PgPoolSquad>,
    checkout_gateway: Arc<dyn CheckoutGateway + Send + Sync>,
) -> Router {
    let purchase_repository = PurchasePostgres::new(Arc::clone(&db_pool));
    let stripe_webhook_usecase =
        StripeWebhookUseCase::new(Arc::new(purchase_repository), checkout_gateway);

    Router::new()
        .route("/webhook", post(webhook))
        .with_state(Arc::new(stripe_webhook_usecase))
}

/// The body must stay raw here: the signature is computed over the exact
/// bytes Stripe sent, so parsing happens only after verification.
pub async fn webhook<T>(
    State(stripe_webhook_usecase): State<Arc<StripeWebhookUseCase<T>>>,
    headers: HeaderMap,
    body: Bytes,
) -> Response
where
    T: PurchaseRepository + Send + Sync + 'static,
{
    let signature_header = match headers
        .get("stripe-signature")
        .and_then(|value| value.to_str().ok())
    {
        Some(value) => value,
        None => {
            warn!("stripe_webhook: request without stripe-signature header");
            return AppError::BadRequest("missing stripe-signature header".to_string())
                .into_response();
        }
    };

    match stripe_webhook_usecase
        .verify_and_process(&body, signature_header)
        .await
    {
        Ok(outcome) => {
            match outcome {
                WebhookOutcome::Recorded(purchase_id) => {
                    info!(purchase_id, "stripe_webhook: event processed");
                }
                WebhookOutcome::DuplicateDelivery => {
                    info!("stripe_webhook: duplicate delivery acknowledged");
                }
                WebhookOutcome::Ignored => {}
            }
            StatusCode::OK.into_response()
        }
        Err(err) => map_error(err),
    }
}

fn map_error(err: WebhookError) -> Response {
    match err {
        WebhookError::InvalidSignature(_)
        | WebhookError::MissingMetadata(_)
        | WebhookError::UpstreamLookupFailure(_) => {
            warn!(error = %err, "stripe_webhook: event rejected");
            AppError::BadRequest(err.to_string()).into_response()
        }
        WebhookError::Internal(source) => {
            error!(error = ?source, "stripe_webhook: processing failed");
            AppError::Internal(source).into_response()
        }
    }
}
