// src/models/mod.rs
pub mod blockfrost;
pub mod explorer;

// Re-export the normalized entities so other modules can use `crate::models::X`
pub use explorer::{
    ApiResponse, Asset, Balance, Delegation, Nft, OutputAmount, Transaction, TransactionDetails,
    WalletData,
};
