use axum::{
    extract::{Path, State},
    Json,
};

use super::{require_param, AppState};
use crate::{
    error::Result,
    models::{ApiResponse, TransactionDetails},
    services::TransactionHistoryService,
};

/// GET /api/v1/transactions/{tx_hash}
pub async fn get_details(
    State(state): State<AppState>,
    Path(tx_hash): Path<String>,
) -> Result<Json<ApiResponse<TransactionDetails>>> {
    let tx_hash = require_param(&tx_hash, "tx_hash")?;

    let service = TransactionHistoryService::new(state.explorer.clone());
    let details = service.get_transaction_details(tx_hash).await?;

    Ok(Json(ApiResponse::success(details)))
}
