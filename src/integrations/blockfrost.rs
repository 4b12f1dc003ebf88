use std::time::Duration;

use reqwest::Client;
use serde::de::DeserializeOwned;
use url::Url;

use crate::{
    config::Config,
    constants::{BLOCKFROST_AUTH_HEADER, BLOCKFROST_CONNECT_TIMEOUT_SECS},
    error::{AppError, Result},
    models::blockfrost::{
        AccountInfo, AddressExtended, AddressInfo, AddressTransaction, AssetAddress, AssetInfo,
        AssetListItem, ErrorBody, PoolInfo, PoolMetadata, TxContent, TxUtxos,
    },
};

// ==================== EXPLORER TRAIT ====================

/// Read-only view of the block-explorer endpoints the services depend on.
#[async_trait::async_trait]
pub trait BlockExplorer: Send + Sync {
    async fn address_info(&self, address: &str) -> Result<AddressInfo>;

    async fn address_extended(&self, address: &str) -> Result<AddressExtended>;

    /// Most recent first.
    async fn address_transactions(&self, address: &str, count: u32)
        -> Result<Vec<AddressTransaction>>;

    async fn transaction(&self, tx_hash: &str) -> Result<TxContent>;

    async fn transaction_utxos(&self, tx_hash: &str) -> Result<TxUtxos>;

    async fn asset_info(&self, unit: &str) -> Result<AssetInfo>;

    async fn asset_addresses(&self, unit: &str) -> Result<Vec<AssetAddress>>;

    async fn account(&self, stake_address: &str) -> Result<AccountInfo>;

    async fn pool(&self, pool_id: &str) -> Result<PoolInfo>;

    async fn pool_metadata(&self, pool_id: &str) -> Result<PoolMetadata>;

    /// Most recently indexed assets first.
    async fn recent_assets(&self, count: u32) -> Result<Vec<AssetListItem>>;
}

// ==================== BLOCKFROST ====================

#[derive(Clone, Debug)]
pub struct BlockfrostClient {
    base_url: String,
    api_key: String,
    client: Client,
}

impl BlockfrostClient {
    pub fn new(base_url: String, api_key: String, timeout_secs: u64) -> Result<Self> {
        let mut builder =
            Client::builder().connect_timeout(Duration::from_secs(BLOCKFROST_CONNECT_TIMEOUT_SECS));
        if timeout_secs > 0 {
            builder = builder.timeout(Duration::from_secs(timeout_secs));
        }
        let client = builder.build().map_err(|e| {
            AppError::Internal(format!("Blockfrost HTTP client init failed: {}", e))
        })?;

        Ok(Self {
            base_url,
            api_key,
            client,
        })
    }

    pub fn from_config(config: &Config) -> Result<Self> {
        Self::new(
            config.blockfrost_api_url.clone(),
            config.blockfrost_api_key.clone(),
            config.blockfrost_timeout_secs,
        )
    }

    fn endpoint(&self, segments: &[&str], query: &[(&str, String)]) -> Result<Url> {
        let mut url = Url::parse(self.base_url.trim().trim_end_matches('/'))
            .map_err(|e| AppError::Internal(format!("Invalid Blockfrost URL: {}", e)))?;
        {
            let mut path = url
                .path_segments_mut()
                .map_err(|_| AppError::Internal("Blockfrost URL cannot be a base".to_string()))?;
            path.pop_if_empty();
            path.extend(segments.iter().map(|s| s.trim()));
        }
        if !query.is_empty() {
            let mut pairs = url.query_pairs_mut();
            for (key, value) in query {
                pairs.append_pair(key, value);
            }
        }
        Ok(url)
    }

    async fn get<T: DeserializeOwned>(
        &self,
        segments: &[&str],
        query: &[(&str, String)],
    ) -> Result<T> {
        let url = self.endpoint(segments, query)?;
        tracing::debug!("Blockfrost GET {}", url.path());

        let response = self
            .client
            .get(url)
            .header(BLOCKFROST_AUTH_HEADER, self.api_key.trim())
            .header("Content-Type", "application/json")
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            return Err(upstream_error(status, &body));
        }

        Ok(response.json::<T>().await?)
    }
}

// Builds the caller-facing error from a non-2xx Blockfrost response.
fn upstream_error(status: u16, body: &str) -> AppError {
    let message = serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|b| b.message)
        .map(|m| m.trim().to_string())
        .filter(|m| !m.is_empty())
        .unwrap_or_else(|| format!("API request failed with status {}", status));
    AppError::Upstream { status, message }
}

#[async_trait::async_trait]
impl BlockExplorer for BlockfrostClient {
    async fn address_info(&self, address: &str) -> Result<AddressInfo> {
        self.get(&["addresses", address], &[]).await
    }

    async fn address_extended(&self, address: &str) -> Result<AddressExtended> {
        self.get(&["addresses", address, "extended"], &[]).await
    }

    async fn address_transactions(
        &self,
        address: &str,
        count: u32,
    ) -> Result<Vec<AddressTransaction>> {
        self.get(
            &["addresses", address, "transactions"],
            &[("count", count.to_string()), ("order", "desc".to_string())],
        )
        .await
    }

    async fn transaction(&self, tx_hash: &str) -> Result<TxContent> {
        self.get(&["txs", tx_hash], &[]).await
    }

    async fn transaction_utxos(&self, tx_hash: &str) -> Result<TxUtxos> {
        self.get(&["txs", tx_hash, "utxos"], &[]).await
    }

    async fn asset_info(&self, unit: &str) -> Result<AssetInfo> {
        self.get(&["assets", unit], &[]).await
    }

    async fn asset_addresses(&self, unit: &str) -> Result<Vec<AssetAddress>> {
        self.get(&["assets", unit, "addresses"], &[]).await
    }

    async fn account(&self, stake_address: &str) -> Result<AccountInfo> {
        self.get(&["accounts", stake_address], &[]).await
    }

    async fn pool(&self, pool_id: &str) -> Result<PoolInfo> {
        self.get(&["pools", pool_id], &[]).await
    }

    async fn pool_metadata(&self, pool_id: &str) -> Result<PoolMetadata> {
        self.get(&["pools", pool_id, "metadata"], &[]).await
    }

    async fn recent_assets(&self, count: u32) -> Result<Vec<AssetListItem>> {
        self.get(
            &["assets"],
            &[("order", "desc".to_string()), ("count", count.to_string())],
        )
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{header, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn client_for(server: &MockServer) -> BlockfrostClient {
        BlockfrostClient::new(format!("{}/api/v0/", server.uri()), "testkey".to_string(), 5)
            .expect("client should build")
    }

    #[tokio::test]
    async fn sends_project_id_header_and_decodes_payload() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/v0/addresses/addr_test1xyz"))
            .and(header("project_id", "testkey"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "address": "addr_test1xyz",
                "amount": [{"unit": "lovelace", "quantity": "42000000"}],
                "stake_address": "stake_test1abc",
                "type": "shelley",
                "script": false
            })))
            .expect(1)
            .mount(&server)
            .await;

        let info = client_for(&server)
            .address_info("addr_test1xyz")
            .await
            .expect("address info should decode");

        assert_eq!(info.amount[0].quantity, "42000000");
        assert_eq!(info.stake_address.as_deref(), Some("stake_test1abc"));
    }

    #[tokio::test]
    async fn transaction_list_requests_recent_page() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/v0/addresses/addr1/transactions"))
            .and(query_param("count", "20"))
            .and(query_param("order", "desc"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                {"tx_hash": "aa", "tx_index": 0, "block_height": 10, "block_time": 1700000000}
            ])))
            .mount(&server)
            .await;

        let txs = client_for(&server)
            .address_transactions("addr1", 20)
            .await
            .expect("transactions should decode");

        assert_eq!(txs.len(), 1);
        assert_eq!(txs[0].block_height, 10);
    }

    #[tokio::test]
    async fn non_success_status_carries_upstream_message() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/v0/assets/deadbeef"))
            .respond_with(ResponseTemplate::new(404).set_body_json(json!({
                "status_code": 404,
                "error": "Not Found",
                "message": "The requested component has not been found."
            })))
            .mount(&server)
            .await;

        let err = client_for(&server).asset_info("deadbeef").await.unwrap_err();
        match err {
            AppError::Upstream { status, message } => {
                assert_eq!(status, 404);
                assert_eq!(message, "The requested component has not been found.");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn non_json_error_body_falls_back_to_status_message() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/v0/txs/ff"))
            .respond_with(ResponseTemplate::new(500).set_body_string("gateway exploded"))
            .mount(&server)
            .await;

        let err = client_for(&server).transaction("ff").await.unwrap_err();
        assert_eq!(err.upstream_status(), Some(500));
        assert!(err.to_string().contains("API request failed with status 500"));
    }

    #[test]
    fn endpoint_escapes_path_segments() {
        let client =
            BlockfrostClient::new("https://example.org/api/v0".to_string(), "k".to_string(), 1)
                .unwrap();
        let url = client.endpoint(&["addresses", "a/b?c"], &[]).unwrap();
        assert_eq!(url.path(), "/api/v0/addresses/a%2Fb%3Fc");
        assert!(url.query().is_none());
    }
}
