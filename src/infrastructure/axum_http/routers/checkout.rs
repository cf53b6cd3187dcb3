use std::sync::Arc;

use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
};
use serde_json::json;
use tracing::error;

use crate::{
    application::usecases::checkout::CheckoutUseCase,
    domain::{
        repositories::checkout_gateway::CheckoutGateway,
        value_objects::{
            checkout::{CreateCheckoutSessionRequest, CreateCheckoutSessionResponse},
            enums::products::Product,
        },
    },
};

pub fn routes(checkout_gateway: Arc<dyn CheckoutGateway + Send + Sync>) -> Router {
    let checkout_usecase = CheckoutUseCase::new(checkout_gateway);

    Router::new()
        .route("/create-checkout-session", post(create_vip_session))
        .route("/create-checkout-session-svip", post(create_svip_session))
        .route(
            "/create-checkout-session-premiumcase",
            post(create_premium_case_session),
        )
        .with_state(Arc::new(checkout_usecase))
}

pub async fn create_vip_session(
    State(checkout_usecase): State<Arc<CheckoutUseCase>>,
    Json(payload): Json<CreateCheckoutSessionRequest>,
) -> Response {
    create_session(checkout_usecase, Product::Vip7d, payload).await
}

pub async fn create_svip_session(
    State(checkout_usecase): State<Arc<CheckoutUseCase>>,
    Json(payload): Json<CreateCheckoutSessionRequest>,
) -> Response {
    create_session(checkout_usecase, Product::Svip7d, payload).await
}

pub async fn create_premium_case_session(
    State(checkout_usecase): State<Arc<CheckoutUseCase>>,
    Json(payload): Json<CreateCheckoutSessionRequest>,
) -> Response {
    create_session(checkout_usecase, Product::PremiumCase, payload).await
}

async fn create_session(
    checkout_usecase: Arc<CheckoutUseCase>,
    product: Product,
    payload: CreateCheckoutSessionRequest,
) -> Response {
    let nick = payload.nick.trim();
    let email = payload.email.trim();

    if nick.is_empty() || email.is_empty() {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({ "error": "Brak wymaganych pól: nick i email" })),
        )
            .into_response();
    }

    match checkout_usecase.create_session(product, nick, email).await {
        Ok(url) => (
            StatusCode::OK,
            Json(CreateCheckoutSessionResponse { url }),
        )
            .into_response(),
        Err(err) => {
            error!(
                error = ?err,
                product = product.key(),
                "checkout: failed to create session"
            );
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "error": "Błąd przy tworzeniu sesji płatności" })),
            )
                .into_response()
        }
    }
}
