// All service modules
pub mod asset_name;
pub mod image_resolver;
pub mod nft_classifier;
pub mod nft_service;
pub mod transaction_history;
pub mod wallet_service;

#[cfg(test)]
pub mod test_support;

// Re-export for convenience
pub use nft_service::NftService;
pub use transaction_history::TransactionHistoryService;
pub use wallet_service::WalletService;
