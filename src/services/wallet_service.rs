use std::sync::Arc;

use crate::{
    config::Config,
    constants::{BLOCKFROST_MAX_PAGE_SIZE, LOVELACE_UNIT, NFT_QUANTITY, UNKNOWN_POOL_NAME},
    error::Result,
    integrations::BlockExplorer,
    models::{
        blockfrost::{AddressInfo, ExtendedAmount},
        Asset, Balance, Delegation, Nft, WalletData,
    },
    services::{
        asset_name::decode_asset_name,
        image_resolver::ImageResolver,
        nft_classifier::{build_nft, classify},
        transaction_history::TransactionHistoryService,
    },
    utils::shorten,
};

// ==================== AGGREGATOR ====================

pub struct WalletService {
    explorer: Arc<dyn BlockExplorer>,
    history: TransactionHistoryService,
    resolver: ImageResolver,
    tx_page_size: u32,
    nft_cap: usize,
}

impl WalletService {
    pub fn new(explorer: Arc<dyn BlockExplorer>, config: &Config) -> Self {
        Self {
            history: TransactionHistoryService::new(explorer.clone()),
            explorer,
            resolver: ImageResolver::new(&config.ipfs_gateway_url),
            tx_page_size: config.wallet_tx_page_size.min(BLOCKFROST_MAX_PAGE_SIZE),
            nft_cap: config.wallet_nft_cap,
        }
    }

    /// Builds a fresh snapshot of `address`.
    ///
    /// Balance, holdings and the transaction list are required; per-item
    /// enrichment (transaction amounts, NFT metadata, delegation) degrades
    /// instead of failing the snapshot.
    pub async fn get_wallet(&self, address: &str) -> Result<WalletData> {
        let address = address.trim();
        let info = self.explorer.address_info(address).await?;
        let holdings = self.explorer.address_extended(address).await?;
        let transactions = self
            .history
            .recent_for_address(address, self.tx_page_size)
            .await?;

        let nfts = self.collect_nfts(&holdings.amount).await;
        let delegation = self.load_delegation(info.stake_address.as_deref()).await;

        tracing::info!(
            "Wallet {}: {} assets, {} nfts, {} txs, delegated={}",
            shorten(address, 12, 6),
            holdings.amount.len(),
            nfts.len(),
            transactions.len(),
            delegation.active
        );

        Ok(WalletData {
            address: address.to_string(),
            balance: balance_of(&info),
            assets: holdings.amount.iter().map(asset_from_holding).collect(),
            nfts,
            transactions,
            delegation: Some(delegation),
        })
    }

    /// Sequential scan of the holdings; stops once `nft_cap` NFTs are found.
    async fn collect_nfts(&self, holdings: &[ExtendedAmount]) -> Vec<Nft> {
        let mut nfts = Vec::new();
        if self.nft_cap == 0 {
            return nfts;
        }

        for holding in holdings.iter().filter(|h| h.unit != LOVELACE_UNIT) {
            // Only single-unit holdings can classify, skip the lookup for the rest.
            if holding.quantity.trim() != NFT_QUANTITY {
                continue;
            }

            match self.explorer.asset_info(&holding.unit).await {
                Ok(info) => {
                    if let Some(metadata) = classify(&holding.quantity, &info) {
                        nfts.push(build_nft(&holding.unit, &info, metadata, &self.resolver));
                    }
                }
                Err(e) => {
                    tracing::warn!("Failed to fetch metadata for asset {}: {}", holding.unit, e);
                }
            }

            if nfts.len() >= self.nft_cap {
                break;
            }
        }

        nfts
    }

    async fn load_delegation(&self, stake_address: Option<&str>) -> Delegation {
        let Some(stake_address) = stake_address.map(str::trim).filter(|s| !s.is_empty()) else {
            return Delegation::inactive();
        };

        match self.fetch_delegation(stake_address).await {
            Ok(delegation) => delegation,
            Err(e) => {
                tracing::warn!("Error fetching delegation info for {}: {}", stake_address, e);
                Delegation::inactive()
            }
        }
    }

    async fn fetch_delegation(&self, stake_address: &str) -> Result<Delegation> {
        let account = self.explorer.account(stake_address).await?;

        let Some(pool_id) = account.pool_id.clone().filter(|_| account.active) else {
            return Ok(Delegation {
                active: account.active,
                stake_address: Some(stake_address.to_string()),
                ..Default::default()
            });
        };

        let pool = self.explorer.pool(&pool_id).await?;
        let metadata = match pool.metadata {
            Some(metadata) => Some(metadata),
            None => match self.explorer.pool_metadata(&pool_id).await {
                Ok(metadata) => Some(metadata),
                Err(e) => {
                    tracing::warn!("Could not fetch pool metadata for {}: {}", pool_id, e);
                    None
                }
            },
        };

        let pool_name = metadata
            .as_ref()
            .and_then(|m| m.name.clone())
            .filter(|n| !n.trim().is_empty())
            .unwrap_or_else(|| UNKNOWN_POOL_NAME.to_string());
        let pool_ticker = metadata.and_then(|m| m.ticker);

        Ok(Delegation {
            active: true,
            stake_address: Some(stake_address.to_string()),
            pool_id: Some(pool_id),
            pool_name: Some(pool_name),
            pool_ticker,
            rewards_sum: account.rewards_sum,
            withdrawable_amount: account.withdrawable_amount,
        })
    }
}

fn balance_of(info: &AddressInfo) -> Balance {
    let lovelace = info
        .amount
        .iter()
        .find(|a| a.unit == LOVELACE_UNIT)
        .and_then(|a| a.quantity.trim().parse::<u64>().ok())
        .unwrap_or(0);
    Balance { lovelace }
}

fn asset_from_holding(holding: &ExtendedAmount) -> Asset {
    Asset {
        unit: holding.unit.clone(),
        quantity: holding.quantity.clone(),
        name: Some(decode_asset_name(&holding.unit)),
        fingerprint: None,
    }
}
