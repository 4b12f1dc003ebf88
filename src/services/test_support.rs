//! In-memory `BlockExplorer` for service tests.

use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicU32, AtomicUsize, Ordering};

use crate::{
    error::{AppError, Result},
    integrations::BlockExplorer,
    models::blockfrost::{
        AccountInfo, AddressExtended, AddressInfo, AddressTransaction, Amount, AssetAddress,
        AssetInfo, AssetListItem, ExtendedAmount, PoolInfo, PoolMetadata, TxContent, TxUtxos,
    },
};

pub fn lovelace(quantity: i64) -> Vec<Amount> {
    vec![Amount {
        unit: "lovelace".to_string(),
        quantity: quantity.to_string(),
    }]
}

pub fn holding(unit: &str, quantity: &str) -> ExtendedAmount {
    ExtendedAmount {
        unit: unit.to_string(),
        quantity: quantity.to_string(),
        ..Default::default()
    }
}

fn missing(what: &str, key: &str) -> AppError {
    AppError::Upstream {
        status: 404,
        message: format!("{} {} not found", what, key),
    }
}

fn lookup<T: Clone>(map: &HashMap<String, T>, key: &str, what: &str) -> Result<T> {
    map.get(key).cloned().ok_or_else(|| missing(what, key))
}

#[derive(Default)]
pub struct FakeExplorer {
    pub address_infos: HashMap<String, AddressInfo>,
    pub extended: HashMap<String, AddressExtended>,
    pub transactions: HashMap<String, Vec<AddressTransaction>>,
    pub tx_contents: HashMap<String, TxContent>,
    pub tx_utxos: HashMap<String, TxUtxos>,
    pub failing_utxos: HashSet<String>,
    pub assets: HashMap<String, AssetInfo>,
    pub asset_holders: HashMap<String, Vec<AssetAddress>>,
    pub accounts: HashMap<String, AccountInfo>,
    pub pools: HashMap<String, PoolInfo>,
    pub pool_metadata: HashMap<String, PoolMetadata>,
    pub recent: Option<Vec<AssetListItem>>,
    pub asset_info_calls: AtomicUsize,
    pub requested_recent_count: AtomicU32,
    pub requested_tx_count: AtomicU32,
}

impl FakeExplorer {
    /// Registers a transaction for `address` with its detail record.
    pub fn add_transaction(
        &mut self,
        address: &str,
        tx_hash: &str,
        block_height: u64,
        block_time: i64,
        fees: &str,
    ) {
        self.transactions
            .entry(address.to_string())
            .or_default()
            .push(AddressTransaction {
                tx_hash: tx_hash.to_string(),
                tx_index: 0,
                block_height,
                block_time,
            });
        self.tx_contents.insert(
            tx_hash.to_string(),
            TxContent {
                hash: tx_hash.to_string(),
                block_height,
                block_time,
                fees: Some(fees.to_string()),
                valid_contract: true,
                ..Default::default()
            },
        );
    }

    pub fn asset_info_calls(&self) -> usize {
        self.asset_info_calls.load(Ordering::SeqCst)
    }
}

#[async_trait::async_trait]
impl BlockExplorer for FakeExplorer {
    async fn address_info(&self, address: &str) -> Result<AddressInfo> {
        lookup(&self.address_infos, address, "address")
    }

    async fn address_extended(&self, address: &str) -> Result<AddressExtended> {
        lookup(&self.extended, address, "address")
    }

    async fn address_transactions(
        &self,
        address: &str,
        count: u32,
    ) -> Result<Vec<AddressTransaction>> {
        self.requested_tx_count.store(count, Ordering::SeqCst);
        let mut txs = lookup(&self.transactions, address, "address")?;
        txs.truncate(count as usize);
        Ok(txs)
    }

    async fn transaction(&self, tx_hash: &str) -> Result<TxContent> {
        lookup(&self.tx_contents, tx_hash, "transaction")
    }

    async fn transaction_utxos(&self, tx_hash: &str) -> Result<TxUtxos> {
        if self.failing_utxos.contains(tx_hash) {
            return Err(AppError::Upstream {
                status: 502,
                message: "connection reset by peer".to_string(),
            });
        }
        lookup(&self.tx_utxos, tx_hash, "transaction")
    }

    async fn asset_info(&self, unit: &str) -> Result<AssetInfo> {
        self.asset_info_calls.fetch_add(1, Ordering::SeqCst);
        lookup(&self.assets, unit, "asset")
    }

    async fn asset_addresses(&self, unit: &str) -> Result<Vec<AssetAddress>> {
        lookup(&self.asset_holders, unit, "asset")
    }

    async fn account(&self, stake_address: &str) -> Result<AccountInfo> {
        lookup(&self.accounts, stake_address, "account")
    }

    async fn pool(&self, pool_id: &str) -> Result<PoolInfo> {
        lookup(&self.pools, pool_id, "pool")
    }

    async fn pool_metadata(&self, pool_id: &str) -> Result<PoolMetadata> {
        lookup(&self.pool_metadata, pool_id, "pool")
    }

    async fn recent_assets(&self, count: u32) -> Result<Vec<AssetListItem>> {
        self.requested_recent_count.store(count, Ordering::SeqCst);
        match &self.recent {
            Some(items) => Ok(items.iter().take(count as usize).cloned().collect()),
            None => Err(AppError::Upstream {
                status: 503,
                message: "upstream unavailable".to_string(),
            }),
        }
    }
}
