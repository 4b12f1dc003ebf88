use crate::constants::{ADA_SYMBOL, ASSET_FALLBACK_PREFIX_LEN, LOVELACE_UNIT, POLICY_ID_HEX_LEN};

/// Human label for an asset unit (policy id + hex asset name).
///
/// The hex tail is shown as text when it decodes to printable ASCII; anything
/// else, including malformed hex, becomes `Asset (<first 8 chars>...)`.
pub fn decode_asset_name(unit: &str) -> String {
    if unit == LOVELACE_UNIT {
        return ADA_SYMBOL.to_string();
    }
    if unit.len() <= POLICY_ID_HEX_LEN {
        return unit.to_string();
    }
    if !unit.is_char_boundary(POLICY_ID_HEX_LEN) {
        return fallback_label(unit);
    }

    decode_printable(&unit[POLICY_ID_HEX_LEN..]).unwrap_or_else(|| fallback_label(unit))
}

/// Decodes a bare hex asset name (no policy prefix) when it is printable.
pub fn decode_printable(hex_name: &str) -> Option<String> {
    let bytes = hex::decode(hex_name).ok()?;
    if bytes.is_empty() || !bytes.iter().all(|b| (0x20..=0x7e).contains(b)) {
        return None;
    }
    String::from_utf8(bytes).ok()
}

fn fallback_label(unit: &str) -> String {
    let prefix: String = unit.chars().take(ASSET_FALLBACK_PREFIX_LEN).collect();
    format!("Asset ({}...)", prefix)
}
