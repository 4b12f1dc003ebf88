//! Raw Blockfrost payloads. Every field the upstream may omit is defaulted so a
//! sparse response still decodes.

use serde::{Deserialize, Serialize};
use serde_json::Value;

// ==================== AMOUNTS ====================
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Amount {
    pub unit: String,
    pub quantity: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtendedAmount {
    pub unit: String,
    pub quantity: String,
    pub decimals: Option<u32>,
    pub has_nft_onchain_metadata: bool,
}

// ==================== ADDRESSES ====================
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AddressInfo {
    pub address: String,
    pub amount: Vec<Amount>,
    pub stake_address: Option<String>,
    #[serde(rename = "type")]
    pub address_type: Option<String>,
    pub script: bool,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AddressExtended {
    pub address: String,
    pub amount: Vec<ExtendedAmount>,
    pub stake_address: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AddressTransaction {
    pub tx_hash: String,
    pub tx_index: u32,
    pub block_height: u64,
    pub block_time: i64,
}

// ==================== TRANSACTIONS ====================
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TxContent {
    pub hash: String,
    pub block: String,
    pub block_height: u64,
    pub block_time: i64,
    pub slot: u64,
    pub index: u32,
    pub output_amount: Vec<Amount>,
    pub fees: Option<String>,
    pub deposit: Option<String>,
    pub size: u64,
    pub invalid_before: Option<String>,
    pub invalid_hereafter: Option<String>,
    pub utxo_count: u32,
    pub withdrawal_count: u32,
    pub delegation_count: u32,
    pub stake_cert_count: u32,
    pub asset_mint_or_burn_count: u32,
    pub redeemer_count: u32,
    pub valid_contract: bool,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct UtxoEntry {
    pub address: String,
    pub amount: Vec<Amount>,
    pub tx_hash: Option<String>,
    pub output_index: Option<u32>,
    pub collateral: bool,
    pub reference: bool,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TxUtxos {
    pub hash: String,
    pub inputs: Vec<UtxoEntry>,
    pub outputs: Vec<UtxoEntry>,
}

// ==================== ASSETS ====================
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AssetInfo {
    pub asset: String,
    pub policy_id: Option<String>,
    pub asset_name: Option<String>,
    pub fingerprint: Option<String>,
    pub quantity: String,
    pub initial_mint_tx_hash: Option<String>,
    pub mint_or_burn_count: Option<u64>,
    pub onchain_metadata: Option<Value>,
    pub metadata: Option<Value>,
}

impl AssetInfo {
    /// Metadata to build an NFT from: on-chain (CIP-25) first, then the
    /// off-chain token registry record.
    pub fn preferred_metadata(&self) -> Option<&Value> {
        self.onchain_metadata
            .as_ref()
            .filter(|v| !v.is_null())
            .or_else(|| self.metadata.as_ref().filter(|v| !v.is_null()))
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AssetAddress {
    pub address: String,
    pub quantity: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AssetListItem {
    pub asset: String,
    pub quantity: String,
}

// ==================== STAKING ====================
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AccountInfo {
    pub stake_address: String,
    pub active: bool,
    pub pool_id: Option<String>,
    pub controlled_amount: Option<String>,
    pub rewards_sum: Option<String>,
    pub withdrawals_sum: Option<String>,
    pub withdrawable_amount: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PoolMetadata {
    pub pool_id: Option<String>,
    pub url: Option<String>,
    pub hash: Option<String>,
    pub ticker: Option<String>,
    pub name: Option<String>,
    pub description: Option<String>,
    pub homepage: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PoolInfo {
    pub pool_id: String,
    pub hex: Option<String>,
    pub live_stake: Option<String>,
    pub active_stake: Option<String>,
    pub live_delegators: Option<u64>,
    pub metadata: Option<PoolMetadata>,
}

// ==================== ERRORS ====================
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ErrorBody {
    pub status_code: Option<u16>,
    pub error: Option<String>,
    pub message: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn sparse_asset_info_decodes() {
        let info: AssetInfo = serde_json::from_value(json!({
            "asset": "abc",
            "quantity": "1",
            "onchain_metadata": null
        }))
        .unwrap();
        assert_eq!(info.quantity, "1");
        assert!(info.preferred_metadata().is_none());
    }

    #[test]
    fn preferred_metadata_falls_back_to_registry() {
        let info = AssetInfo {
            metadata: Some(json!({"name": "Registry"})),
            ..Default::default()
        };
        assert_eq!(info.preferred_metadata().unwrap()["name"], "Registry");

        let both = AssetInfo {
            onchain_metadata: Some(json!({"name": "Onchain"})),
            metadata: Some(json!({"name": "Registry"})),
            ..Default::default()
        };
        assert_eq!(both.preferred_metadata().unwrap()["name"], "Onchain");
    }
}
