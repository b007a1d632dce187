use axum::{
    extract::{Json, State},
    routing::post,
    Router,
};
use cinema_core::PurchaseRequest;
use cinema_order::PurchaseSummary;
use tracing::info;

use crate::error::AppError;
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new().route("/v1/purchases", post(purchase_tickets))
}

/// POST /v1/purchases
async fn purchase_tickets(
    State(state): State<AppState>,
    Json(req): Json<PurchaseRequest>,
) -> Result<Json<PurchaseSummary>, AppError> {
    info!(account_id = req.account_id(), lines = req.lines().len(), "Purchase requested");

    let summary = state.coordinator.purchase(&req).await?;

    Ok(Json(summary))
}
