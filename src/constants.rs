/// Application constants

// Native token
pub const LOVELACE_UNIT: &str = "lovelace";
pub const ADA_SYMBOL: &str = "ADA";
pub const LOVELACE_PER_ADA: f64 = 1_000_000.0;

// Native asset units are policy id (28 bytes, hex) followed by the asset name
pub const POLICY_ID_HEX_LEN: usize = 56;
pub const ASSET_FALLBACK_PREFIX_LEN: usize = 8;
pub const COLLECTION_FROM_POLICY_LEN: usize = 10;

// NFT record defaults
pub const UNKNOWN_ASSET_NAME: &str = "Unknown Asset";
pub const UNKNOWN_POOL_NAME: &str = "Unknown Pool";
pub const NFT_QUANTITY: &str = "1";

// Image resolution
pub const DEFAULT_IPFS_GATEWAY: &str = "https://ipfs.io/ipfs";
pub const IPFS_SCHEME: &str = "ipfs://";
pub const DATA_URI_SCHEME: &str = "data:";
pub const IMAGE_OBJECT_KEYS: [&str; 4] = ["src", "uri", "url", "link"];

// Blockfrost
pub const BLOCKFROST_AUTH_HEADER: &str = "project_id";
pub const BLOCKFROST_MAX_PAGE_SIZE: u32 = 100;

// Request volume caps (defaults, overridable through Config)
pub const DEFAULT_WALLET_TX_PAGE_SIZE: u32 = 20;
pub const DEFAULT_WALLET_NFT_CAP: usize = 50;
pub const DEFAULT_FEATURED_LIMIT: u32 = 16;
pub const DEFAULT_FEATURED_SCAN_MULTIPLIER: u32 = 3;
pub const DEFAULT_FEATURED_MIN_RESULTS: usize = 12;
pub const FEATURED_MAX_LIMIT: u32 = 33;
pub const DEFAULT_BLOCKFROST_TIMEOUT_SECS: u64 = 15;
pub const BLOCKFROST_CONNECT_TIMEOUT_SECS: u64 = 4;

// API version
pub const API_VERSION: &str = "v1";
