//! NFT heuristic: a holding is treated as an NFT when its quantity is exactly
//! one and the asset carries metadata. Semi-fungible tokens held one at a time
//! pass, multi-edition NFTs held in bulk do not.

use serde_json::Value;

use crate::{
    constants::{COLLECTION_FROM_POLICY_LEN, NFT_QUANTITY, UNKNOWN_ASSET_NAME},
    models::{blockfrost::AssetInfo, Nft},
    services::{asset_name::decode_asset_name, image_resolver::ImageResolver},
};

/// Metadata to build the NFT from, or `None` when the asset is not a candidate.
pub fn classify<'a>(quantity: &str, info: &'a AssetInfo) -> Option<&'a Value> {
    if quantity.trim() != NFT_QUANTITY {
        return None;
    }
    info.preferred_metadata()
}

pub fn build_nft(unit: &str, info: &AssetInfo, metadata: &Value, resolver: &ImageResolver) -> Nft {
    let name = metadata_text(metadata, "name")
        .or_else(|| {
            info.asset_name
                .as_deref()
                .filter(|n| !n.is_empty())
                .map(|_| decode_asset_name(unit))
        })
        .unwrap_or_else(|| UNKNOWN_ASSET_NAME.to_string());

    let collection = metadata_text(metadata, "collection").or_else(|| {
        info.policy_id
            .as_deref()
            .filter(|p| !p.is_empty())
            .map(|p| p.chars().take(COLLECTION_FROM_POLICY_LEN).collect())
    });

    Nft {
        asset: unit.to_string(),
        name,
        image: resolver.resolve_metadata(metadata),
        collection,
        policy_id: info.policy_id.clone(),
        asset_name: info.asset_name.clone(),
        fingerprint: info.fingerprint.clone(),
        description: metadata_text(metadata, "description"),
        initial_mint_tx_hash: info.initial_mint_tx_hash.clone(),
        metadata: metadata.clone(),
        owner: None,
    }
}

/// String metadata value; chunked arrays of strings are joined.
fn metadata_text(metadata: &Value, key: &str) -> Option<String> {
    let text = match metadata.get(key)? {
        Value::String(s) => s.clone(),
        Value::Array(parts) => parts.iter().filter_map(Value::as_str).collect::<String>(),
        _ => return None,
    };
    let trimmed = text.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    const POLICY: &str = "d5e6bf0500378d4f0da4e8dde6becec7621cd8cbf5cbb9b87013d4cc";

    fn info_with(onchain: Option<Value>, offchain: Option<Value>) -> AssetInfo {
        AssetInfo {
            asset: format!("{}{}", POLICY, hex::encode("Bud42")),
            policy_id: Some(POLICY.to_string()),
            asset_name: Some(hex::encode("Bud42")),
            fingerprint: Some("asset1xyz".to_string()),
            quantity: "1".to_string(),
            initial_mint_tx_hash: Some("mint".to_string()),
            onchain_metadata: onchain,
            metadata: offchain,
            ..Default::default()
        }
    }

    #[test]
    fn quantity_other_than_one_is_excluded() {
        let info = info_with(Some(json!({"name": "Bud"})), Some(json!({"name": "Reg"})));
        assert!(classify("2", &info).is_none());
        assert!(classify("0", &info).is_none());
        assert!(classify("1000000", &info).is_none());
        assert!(classify("1", &info).is_some());
    }

    #[test]
    fn missing_metadata_is_excluded() {
        let info = info_with(None, None);
        assert!(classify("1", &info).is_none());
    }

    #[test]
    fn onchain_metadata_wins() {
        let info = info_with(Some(json!({"name": "Onchain"})), Some(json!({"name": "Registry"})));
        assert_eq!(classify("1", &info).unwrap()["name"], "Onchain");
        let offchain_only = info_with(None, Some(json!({"name": "Registry"})));
        assert_eq!(classify("1", &offchain_only).unwrap()["name"], "Registry");
    }

    #[test]
    fn build_nft_fills_fields_from_metadata() {
        let metadata = json!({
            "name": "SpaceBud #42",
            "image": "ipfs://QmRhTTbUrPYEw3mJGGhQqQST9k86v1DPBiTTWJGKDJsVFw",
            "collection": "SpaceBudz",
            "description": ["A bud ", "in space"]
        });
        let info = info_with(Some(metadata.clone()), None);
        let nft = build_nft(&info.asset, &info, &metadata, &ImageResolver::new("https://ipfs.io/ipfs"));

        assert_eq!(nft.name, "SpaceBud #42");
        assert_eq!(nft.collection.as_deref(), Some("SpaceBudz"));
        assert_eq!(nft.description.as_deref(), Some("A bud in space"));
        assert_eq!(
            nft.image.as_deref(),
            Some("https://ipfs.io/ipfs/QmRhTTbUrPYEw3mJGGhQqQST9k86v1DPBiTTWJGKDJsVFw")
        );
        assert_eq!(nft.fingerprint.as_deref(), Some("asset1xyz"));
        assert!(nft.owner.is_none());
    }

    #[test]
    fn build_nft_falls_back_to_decoded_name_and_policy_collection() {
        let metadata = json!({"image": {"src": "data:image/png;base64,AAAA"}});
        let info = info_with(Some(metadata.clone()), None);
        let nft = build_nft(&info.asset, &info, &metadata, &ImageResolver::new("https://ipfs.io/ipfs"));

        assert_eq!(nft.name, "Bud42");
        assert_eq!(nft.collection.as_deref(), Some("d5e6bf0500"));
        assert!(nft.image.is_none());
    }

    #[test]
    fn build_nft_without_any_name_uses_placeholder() {
        let metadata = json!({"name": 12});
        let mut info = info_with(Some(metadata.clone()), None);
        info.asset_name = None;
        let nft = build_nft("unit", &info, &metadata, &ImageResolver::new("https://ipfs.io/ipfs"));
        assert_eq!(nft.name, "Unknown Asset");
    }
}
