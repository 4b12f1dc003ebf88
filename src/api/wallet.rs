use axum::{
    extract::{Path, State},
    Json,
};

use super::{require_param, AppState};
use crate::{
    error::Result,
    models::{blockfrost::AddressInfo, ApiResponse, WalletData},
    services::WalletService,
};

/// GET /api/v1/wallet/{address}
pub async fn get_wallet(
    State(state): State<AppState>,
    Path(address): Path<String>,
) -> Result<Json<ApiResponse<WalletData>>> {
    let address = require_param(&address, "address")?;

    let service = WalletService::new(state.explorer.clone(), &state.config);
    let wallet = service.get_wallet(address).await?;

    Ok(Json(ApiResponse::success(wallet)))
}

/// GET /api/v1/address/{address}
///
/// Address info as decoded into `AddressInfo`: lovelace and token amounts,
/// stake address, address type and script flag.
pub async fn get_address(
    State(state): State<AppState>,
    Path(address): Path<String>,
) -> Result<Json<ApiResponse<AddressInfo>>> {
    let address = require_param(&address, "address")?;
    let info = state.explorer.address_info(address).await?;
    Ok(Json(ApiResponse::success(info)))
}
