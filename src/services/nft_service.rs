use std::sync::Arc;

use crate::{
    config::Config,
    constants::BLOCKFROST_MAX_PAGE_SIZE,
    error::Result,
    integrations::BlockExplorer,
    models::Nft,
    services::{
        image_resolver::ImageResolver,
        nft_classifier::{build_nft, classify},
    },
};

pub struct NftService {
    explorer: Arc<dyn BlockExplorer>,
    resolver: ImageResolver,
    scan_multiplier: u32,
    min_results: usize,
}

impl NftService {
    pub fn new(explorer: Arc<dyn BlockExplorer>, config: &Config) -> Self {
        Self {
            explorer,
            resolver: ImageResolver::new(&config.ipfs_gateway_url),
            scan_multiplier: config.featured_scan_multiplier,
            min_results: config.featured_min_results,
        }
    }

    /// Looks up one asset by unit. `Ok(None)` when the asset is unknown or
    /// has no metadata to build an NFT from.
    pub async fn get_nft(&self, asset: &str) -> Result<Option<Nft>> {
        let asset = asset.trim();
        let info = match self.explorer.asset_info(asset).await {
            Ok(info) => info,
            Err(e) if e.is_not_found() => return Ok(None),
            Err(e) => return Err(e),
        };

        let Some(metadata) = info.preferred_metadata() else {
            tracing::debug!("Asset {} has no metadata", asset);
            return Ok(None);
        };
        let mut nft = build_nft(asset, &info, metadata, &self.resolver);

        nft.owner = match self.explorer.asset_addresses(asset).await {
            Ok(holders) => holders.into_iter().next().map(|h| h.address),
            Err(e) => {
                tracing::warn!("Owner lookup failed for {}: {}", asset, e);
                None
            }
        };

        Ok(Some(nft))
    }

    /// Best-effort listing of recently minted NFTs with a displayable image.
    ///
    /// Scans `limit * scan_multiplier` candidates (capped at one upstream
    /// page) one at a time and stops once `max(min_results, limit)` qualify.
    /// May return fewer than `limit`; an unreachable upstream yields an empty
    /// list.
    pub async fn get_featured(&self, limit: u32) -> Vec<Nft> {
        let scan = limit
            .saturating_mul(self.scan_multiplier)
            .min(BLOCKFROST_MAX_PAGE_SIZE);
        if scan == 0 {
            return Vec::new();
        }
        let target = self.min_results.max(limit as usize);

        let candidates = match self.explorer.recent_assets(scan).await {
            Ok(candidates) => candidates,
            Err(e) => {
                tracing::error!("Failed to list recent assets: {}", e);
                return Vec::new();
            }
        };

        let mut featured = Vec::new();
        for candidate in &candidates {
            let info = match self.explorer.asset_info(&candidate.asset).await {
                Ok(info) => info,
                Err(e) => {
                    tracing::warn!("Skipping featured candidate {}: {}", candidate.asset, e);
                    continue;
                }
            };

            let Some(metadata) = classify(&info.quantity, &info) else {
                continue;
            };
            let nft = build_nft(&candidate.asset, &info, metadata, &self.resolver);
            if nft.image.is_some() {
                featured.push(nft);
            }

            if featured.len() >= target {
                break;
            }
        }

        tracing::debug!(
            "Featured scan kept {} of {} candidates (limit {})",
            featured.len(),
            candidates.len(),
            limit
        );
        featured
    }
}
