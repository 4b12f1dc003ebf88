use std::sync::Arc;

use chrono::{DateTime, Utc};
use futures_util::future::join_all;

use crate::{
    constants::LOVELACE_UNIT,
    error::Result,
    integrations::BlockExplorer,
    models::{
        blockfrost::{AddressTransaction, Amount, TxContent, TxUtxos},
        OutputAmount, Transaction, TransactionDetails,
    },
    services::asset_name::decode_asset_name,
    utils::{format_ada_str, parse_quantity, shorten},
};

/// Lovelace carried by a list of amounts. `None` when a quantity is not a
/// number or the sum overflows.
pub fn lovelace_of(amounts: &[Amount]) -> Option<i64> {
    amounts
        .iter()
        .filter(|a| a.unit == LOVELACE_UNIT)
        .try_fold(0_i64, |acc, a| acc.checked_add(parse_quantity(&a.quantity)?))
}

/// Net lovelace change for `address`: outputs paid to it minus inputs it
/// spent. Reference inputs are read, not spent, so they are skipped.
pub fn net_lovelace(utxos: &TxUtxos, address: &str) -> Option<i64> {
    let received = utxos
        .outputs
        .iter()
        .filter(|o| o.address == address)
        .try_fold(0_i64, |acc, o| acc.checked_add(lovelace_of(&o.amount)?))?;
    let spent = utxos
        .inputs
        .iter()
        .filter(|i| i.address == address && !i.reference)
        .try_fold(0_i64, |acc, i| acc.checked_add(lovelace_of(&i.amount)?))?;
    received.checked_sub(spent)
}

fn details_from(content: TxContent) -> TransactionDetails {
    let output_amount = content
        .output_amount
        .into_iter()
        .map(|a| OutputAmount {
            label: decode_asset_name(&a.unit),
            ada: if a.unit == LOVELACE_UNIT {
                format_ada_str(&a.quantity)
            } else {
                None
            },
            unit: a.unit,
            quantity: a.quantity,
        })
        .collect();

    TransactionDetails {
        block_time_utc: DateTime::<Utc>::from_timestamp(content.block_time, 0),
        fees_ada: content.fees.as_deref().and_then(format_ada_str),
        hash: content.hash,
        block: content.block,
        block_height: content.block_height,
        block_time: content.block_time,
        slot: content.slot,
        index: content.index,
        output_amount,
        fees: content.fees,
        deposit: content.deposit,
        size: content.size,
        utxo_count: content.utxo_count,
        withdrawal_count: content.withdrawal_count,
        asset_mint_or_burn_count: content.asset_mint_or_burn_count,
        valid_contract: content.valid_contract,
    }
}

pub struct TransactionHistoryService {
    explorer: Arc<dyn BlockExplorer>,
}

impl TransactionHistoryService {
    pub fn new(explorer: Arc<dyn BlockExplorer>) -> Self {
        Self { explorer }
    }

    /// Recent transactions of `address` with the address's net lovelace change.
    ///
    /// The list fetch is fatal. Detail and UTXO lookups run as one joined
    /// batch; a failed lookup only blanks the field it feeds (`fee` or
    /// `amount`), the transaction itself is always kept.
    pub async fn recent_for_address(&self, address: &str, count: u32) -> Result<Vec<Transaction>> {
        if count == 0 {
            return Ok(Vec::new());
        }
        let refs = self.explorer.address_transactions(address, count).await?;
        tracing::debug!(
            "Loaded {} transaction refs for {}",
            refs.len(),
            shorten(address, 12, 6)
        );

        let futures = refs.iter().map(|tx| self.summarize(tx, address));
        Ok(join_all(futures).await)
    }

    async fn summarize(&self, tx: &AddressTransaction, address: &str) -> Transaction {
        let (content, utxos) = futures_util::future::join(
            self.explorer.transaction(&tx.tx_hash),
            self.explorer.transaction_utxos(&tx.tx_hash),
        )
        .await;

        let (timestamp, fee) = match content {
            Ok(content) => (
                content.block_time,
                content.fees.as_deref().and_then(parse_quantity),
            ),
            Err(e) => {
                tracing::warn!("Transaction detail fetch failed for {}: {}", tx.tx_hash, e);
                (tx.block_time, None)
            }
        };

        let amount = match utxos {
            Ok(utxos) => {
                let net = net_lovelace(&utxos, address);
                if net.is_none() {
                    tracing::warn!("Unparseable or overflowing lovelace quantity in {}", tx.tx_hash);
                }
                net
            }
            Err(e) => {
                tracing::warn!("UTXO fetch failed for {}: {}", tx.tx_hash, e);
                None
            }
        };

        Transaction {
            tx_hash: tx.tx_hash.clone(),
            timestamp,
            block: tx.block_height,
            amount,
            fee,
        }
    }

    /// Full detail of one transaction; upstream failures propagate.
    pub async fn get_transaction_details(&self, tx_hash: &str) -> Result<TransactionDetails> {
        let content = self.explorer.transaction(tx_hash.trim()).await?;
        Ok(details_from(content))
    }
}
