use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::Deserialize;

use super::{require_param, AppState};
use crate::{
    constants::FEATURED_MAX_LIMIT,
    error::{AppError, Result},
    models::{ApiResponse, Nft},
    services::NftService,
};

#[derive(Debug, Deserialize)]
pub struct FeaturedQuery {
    pub limit: Option<u32>,
}

fn featured_limit(requested: Option<u32>, default: u32) -> Result<u32> {
    let limit = requested.unwrap_or(default);
    if limit == 0 || limit > FEATURED_MAX_LIMIT {
        return Err(AppError::BadRequest(format!(
            "limit must be between 1 and {}",
            FEATURED_MAX_LIMIT
        )));
    }
    Ok(limit)
}

/// GET /api/v1/nft/{asset}
pub async fn get_nft(
    State(state): State<AppState>,
    Path(asset): Path<String>,
) -> Result<Json<ApiResponse<Nft>>> {
    let asset = require_param(&asset, "asset")?;

    let service = NftService::new(state.explorer.clone(), &state.config);
    let nft = service
        .get_nft(asset)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("NFT {} not found", asset)))?;

    Ok(Json(ApiResponse::success(nft)))
}

/// GET /api/v1/nfts/featured?limit=N
pub async fn get_featured(
    State(state): State<AppState>,
    Query(query): Query<FeaturedQuery>,
) -> Result<Json<ApiResponse<Vec<Nft>>>> {
    let limit = featured_limit(query.limit, state.config.featured_default_limit)?;

    let service = NftService::new(state.explorer.clone(), &state.config);
    let featured = service.get_featured(limit).await;

    Ok(Json(ApiResponse::success(featured)))
}
