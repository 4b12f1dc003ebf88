use serde::Deserialize;
use std::env;

use crate::constants::{
    BLOCKFROST_MAX_PAGE_SIZE, DEFAULT_BLOCKFROST_TIMEOUT_SECS, DEFAULT_FEATURED_LIMIT,
    DEFAULT_FEATURED_MIN_RESULTS, DEFAULT_FEATURED_SCAN_MULTIPLIER, DEFAULT_IPFS_GATEWAY,
    DEFAULT_WALLET_NFT_CAP, DEFAULT_WALLET_TX_PAGE_SIZE,
};

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    // Server
    pub host: String,
    pub port: u16,
    pub environment: String,

    // Blockfrost
    pub blockfrost_api_url: String,
    pub blockfrost_api_key: String,
    pub blockfrost_timeout_secs: u64,

    // Media
    pub ipfs_gateway_url: String,

    // Request volume caps
    pub wallet_tx_page_size: u32,
    pub wallet_nft_cap: usize,
    pub featured_default_limit: u32,
    pub featured_scan_multiplier: u32,
    pub featured_min_results: usize,

    // CORS
    pub cors_allowed_origins: String,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenv::dotenv().ok();

        Ok(Config {
            host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: env::var("PORT")
                .unwrap_or_else(|_| "3000".to_string())
                .parse()?,
            environment: env::var("ENVIRONMENT").unwrap_or_else(|_| "development".to_string()),

            blockfrost_api_url: env::var("BLOCKFROST_API_URL")?,
            blockfrost_api_key: env::var("BLOCKFROST_API_KEY")?,
            blockfrost_timeout_secs: parse_or("BLOCKFROST_TIMEOUT_SECS", DEFAULT_BLOCKFROST_TIMEOUT_SECS)?,

            ipfs_gateway_url: env::var("IPFS_GATEWAY_URL")
                .unwrap_or_else(|_| DEFAULT_IPFS_GATEWAY.to_string()),

            wallet_tx_page_size: parse_or("WALLET_TX_PAGE_SIZE", DEFAULT_WALLET_TX_PAGE_SIZE)?,
            wallet_nft_cap: parse_or("WALLET_NFT_CAP", DEFAULT_WALLET_NFT_CAP)?,
            featured_default_limit: parse_or("FEATURED_DEFAULT_LIMIT", DEFAULT_FEATURED_LIMIT)?,
            featured_scan_multiplier: parse_or(
                "FEATURED_SCAN_MULTIPLIER",
                DEFAULT_FEATURED_SCAN_MULTIPLIER,
            )?,
            featured_min_results: parse_or("FEATURED_MIN_RESULTS", DEFAULT_FEATURED_MIN_RESULTS)?,

            cors_allowed_origins: env::var("CORS_ALLOWED_ORIGINS")
                .unwrap_or_else(|_| "*".to_string()),
        })
    }

    pub fn validate(&self) -> anyhow::Result<()> {
        if self.blockfrost_api_url.trim().is_empty() {
            anyhow::bail!("BLOCKFROST_API_URL is empty");
        }
        if url::Url::parse(self.blockfrost_api_url.trim()).is_err() {
            anyhow::bail!("BLOCKFROST_API_URL is not a valid URL");
        }
        if self.blockfrost_api_key.trim().is_empty() {
            anyhow::bail!("BLOCKFROST_API_KEY is empty");
        }
        if self.ipfs_gateway_url.trim().is_empty() {
            anyhow::bail!("IPFS_GATEWAY_URL is empty");
        }

        if self.is_testnet() && self.blockfrost_api_key.starts_with("mainnet") {
            tracing::warn!("Mainnet project key used against a testnet Blockfrost URL");
        }
        if self.wallet_tx_page_size == 0 || self.wallet_nft_cap == 0 {
            tracing::warn!("Wallet caps should be > 0; wallet snapshots will be empty");
        }
        if self.wallet_tx_page_size > BLOCKFROST_MAX_PAGE_SIZE {
            tracing::warn!(
                "WALLET_TX_PAGE_SIZE {} exceeds the Blockfrost page size; using {}",
                self.wallet_tx_page_size,
                BLOCKFROST_MAX_PAGE_SIZE
            );
        }
        if self.featured_scan_multiplier == 0 {
            tracing::warn!("FEATURED_SCAN_MULTIPLIER is 0; featured listing will be empty");
        }
        if self.blockfrost_timeout_secs == 0 {
            tracing::warn!("BLOCKFROST_TIMEOUT_SECS is 0; falling back to client default");
        }

        if self.cors_allowed_origins.trim().is_empty() {
            tracing::warn!("CORS_ALLOWED_ORIGINS is empty; requests may be blocked");
        }

        Ok(())
    }

    pub fn is_testnet(&self) -> bool {
        if self.environment == "testnet" {
            return true;
        }
        let url = self.blockfrost_api_url.to_ascii_lowercase();
        url.contains("preprod") || url.contains("preview") || url.contains("testnet")
    }
}

// Reads an optional numeric variable, keeping the default when it is unset.
fn parse_or<T>(name: &str, default: T) -> anyhow::Result<T>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match env::var(name) {
        Ok(raw) if !raw.trim().is_empty() => Ok(raw.trim().parse()?),
        _ => Ok(default),
    }
}

#[cfg(test)]
pub(crate) fn test_config(api_url: &str) -> Config {
    Config {
        host: "127.0.0.1".to_string(),
        port: 3000,
        environment: "test".to_string(),
        blockfrost_api_url: api_url.to_string(),
        blockfrost_api_key: "preprodTestKey".to_string(),
        blockfrost_timeout_secs: 5,
        ipfs_gateway_url: DEFAULT_IPFS_GATEWAY.to_string(),
        wallet_tx_page_size: DEFAULT_WALLET_TX_PAGE_SIZE,
        wallet_nft_cap: DEFAULT_WALLET_NFT_CAP,
        featured_default_limit: DEFAULT_FEATURED_LIMIT,
        featured_scan_multiplier: DEFAULT_FEATURED_SCAN_MULTIPLIER,
        featured_min_results: DEFAULT_FEATURED_MIN_RESULTS,
        cors_allowed_origins: "*".to_string(),
    }
}
