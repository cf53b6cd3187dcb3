use std::sync::Arc;

use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
};
use tracing::error;

use crate::{
    application::usecases::purchases::RecentPurchasesUseCase,
    domain::repositories::purchases::PurchaseRepository,
    infrastructure::{
        axum_http::error_responses::AppError,
        postgres::{postgres_connection::PgPoolSquad, repositories::purchases::PurchasePostgres},
    },
};

pub fn routes(db_pool: Arc<PgPoolSquad>, page_limit: i64) -> Router {
    let purchase_repository = PurchasePostgres::new(Arc::clone(&db_pool));
    let recent_purchases_usecase =
        RecentPurchasesUseCase::new(Arc::new(purchase_repository), page_limit);

    Router::new()
        .route("/api/zakupy", get(list_recent))
        .with_state(Arc::new(recent_purchases_usecase))
}

pub async fn list_recent<T>(
    State(recent_purchases_usecase): State<Arc<RecentPurchasesUseCase<T>>>,
) -> Response
where
    T: PurchaseRepository + Send + Sync + 'static,
{
    match recent_purchases_usecase.list_recent().await {
        Ok(purchases) => (StatusCode::OK, Json(purchases)).into_response(),
        Err(err) => {
            error!(error = ?err, "purchases: failed to list recent purchases");
            AppError::Internal(err).into_response()
        }
    }
}
