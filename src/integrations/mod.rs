pub mod blockfrost;

pub use blockfrost::{BlockExplorer, BlockfrostClient};
