use axum::{extract::State, Json};
use serde::Serialize;
use super::AppState;

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub network: String,
}

pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let network = if state.config.is_testnet() {
        "testnet"
    } else {
        "mainnet"
    };

    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        network: network.to_string(),
    })
}
