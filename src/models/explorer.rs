use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::Value;

// ==================== ASSET ====================
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Asset {
    pub unit: String,
    pub quantity: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fingerprint: Option<String>,
}

// ==================== NFT ====================
/// `image` is always an absolute URL or `null`, never `ipfs://` or `data:`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Nft {
    pub asset: String,
    pub name: String,
    pub image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub collection: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub policy_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub asset_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fingerprint: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub initial_mint_tx_hash: Option<String>,
    pub metadata: Value,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub owner: Option<String>,
}

// ==================== TRANSACTION ====================
/// `amount` is the signed lovelace delta for the queried address; negative
/// when the address spent more than it received.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    pub tx_hash: String,
    pub timestamp: i64,
    pub block: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fee: Option<i64>,
}

#[derive(Debug, Clone, Serialize)]
pub struct OutputAmount {
    pub unit: String,
    pub quantity: String,
    pub label: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ada: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct TransactionDetails {
    pub hash: String,
    pub block: String,
    pub block_height: u64,
    pub block_time: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub block_time_utc: Option<DateTime<Utc>>,
    pub slot: u64,
    pub index: u32,
    pub output_amount: Vec<OutputAmount>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fees: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fees_ada: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deposit: Option<String>,
    pub size: u64,
    pub utxo_count: u32,
    pub withdrawal_count: u32,
    pub asset_mint_or_burn_count: u32,
    pub valid_contract: bool,
}

// ==================== WALLET ====================
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Balance {
    pub lovelace: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Delegation {
    pub active: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stake_address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pool_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pool_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pool_ticker: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rewards_sum: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub withdrawable_amount: Option<String>,
}

impl Delegation {
    pub fn inactive() -> Self {
        Self::default()
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct WalletData {
    pub address: String,
    pub balance: Balance,
    pub assets: Vec<Asset>,
    pub nfts: Vec<Nft>,
    pub transactions: Vec<Transaction>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delegation: Option<Delegation>,
}

// ==================== API RESPONSE ====================
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub data: T,
}

impl<T> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            data,
        }
    }
}
