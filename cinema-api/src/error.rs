use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use cinema_core::PurchaseError;
use serde_json::json;

#[derive(Debug)]
pub enum AppError {
    InvalidPurchase(String),
    Upstream(PurchaseError),
}

impl From<PurchaseError> for AppError {
    fn from(err: PurchaseError) -> Self {
        match err {
            PurchaseError::InvalidPurchase(reason) => AppError::InvalidPurchase(reason),
            other => AppError::Upstream(other),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            AppError::InvalidPurchase(reason) => (StatusCode::BAD_REQUEST, reason),
            AppError::Upstream(err) => {
                tracing::error!("Purchase failed upstream: {}", err);
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error".to_string())
            }
        };

        let body = Json(json!({
            "error": error_message,
        }));

        (status, body).into_response()
    }
}
