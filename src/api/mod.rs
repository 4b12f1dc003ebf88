// src/api/mod.rs

pub mod health;
pub mod nft;
pub mod transactions;
pub mod wallet;

use std::sync::Arc;

use crate::config::Config;
use crate::error::{AppError, Result};
use crate::integrations::BlockExplorer;

#[derive(Clone)]
pub struct AppState {
    pub explorer: Arc<dyn BlockExplorer>,
    pub config: Config,
}

/// Trims a path parameter and rejects it when empty.
pub fn require_param<'a>(value: &'a str, name: &str) -> Result<&'a str> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(AppError::BadRequest(format!("{} is required", name)));
    }
    Ok(trimmed)
}
