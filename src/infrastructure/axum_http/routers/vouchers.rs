use std::sync::Arc;

use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
};
use tracing::error;

use crate::{
    application::usecases::vouchers::VoucherUseCase,
    domain::{
        repositories::vouchers::VoucherRepository,
        value_objects::vouchers::{RedeemOutcome, RedeemVoucherRequest, RedeemVoucherResponse},
    },
    infrastructure::postgres::{
        postgres_connection::PgPoolSquad, repositories::vouchers::VoucherPostgres,
    },
};

pub fn routes(db_pool: Arc<PgPoolSquad>) -> Router {
    let voucher_repository = VoucherPostgres::new(Arc::clone(&db_pool));
    let voucher_usecase = VoucherUseCase::new(Arc::new(voucher_repository));

    Router::new()
        .route("/sprawdz-voucher", post(redeem))
        .with_state(Arc::new(voucher_usecase))
}

pub async fn redeem<T>(
    State(voucher_usecase): State<Arc<VoucherUseCase<T>>>,
    Json(payload): Json<RedeemVoucherRequest>,
) -> Response
where
    T: VoucherRepository + Send + Sync + 'static,
{
    let nick = payload.nick.trim();
    let code = payload.kod.trim();

    if nick.is_empty() || code.is_empty() {
        return (
            StatusCode::BAD_REQUEST,
            Json(RedeemVoucherResponse {
                success: false,
                message: "Brak wymaganych pól: nick i kod".to_string(),
            }),
        )
            .into_response();
    }

    match voucher_usecase.redeem(code, nick).await {
        Ok(outcome) => {
            let (success, message) = match outcome {
                RedeemOutcome::Success => (true, "Voucher aktywowany pomyślnie"),
                RedeemOutcome::NotFound => (false, "Podany voucher nie istnieje"),
                RedeemOutcome::AlreadyClaimed => (false, "Ten voucher został już wykorzystany"),
            };

            (
                StatusCode::OK,
                Json(RedeemVoucherResponse {
                    success,
                    message: message.to_string(),
                }),
            )
                .into_response()
        }
        Err(err) => {
            error!(error = ?err, "voucher: redemption failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(RedeemVoucherResponse {
                    success: false,
                    message: "Wystąpił błąd serwera, spróbuj ponownie".to_string(),
                }),
            )
                .into_response()
        }
    }
}
