use serde_json::{Map, Value};

use crate::constants::{DATA_URI_SCHEME, IMAGE_OBJECT_KEYS, IPFS_SCHEME};

// ==================== IMAGE FIELD ====================

/// Shapes a CIP-25 `image` entry shows up in.
#[derive(Debug, Clone, PartialEq)]
pub enum ImageField {
    Absent,
    /// Single string, URL or URI.
    Text(String),
    /// URI split into chunks (on-chain strings are capped at 64 bytes).
    Parts(Vec<String>),
    /// Object carrying the URI under one of a few keys.
    Keyed(Map<String, Value>),
    /// Numbers, booleans.
    Unsupported,
}

impl ImageField {
    pub fn from_value(value: Option<&Value>) -> Self {
        match value {
            None | Some(Value::Null) => ImageField::Absent,
            Some(Value::String(s)) => ImageField::Text(s.clone()),
            Some(Value::Array(items)) => ImageField::Parts(
                items
                    .iter()
                    .filter_map(|item| match item {
                        Value::String(s) => Some(s.clone()),
                        Value::Number(n) => Some(n.to_string()),
                        _ => None,
                    })
                    .collect(),
            ),
            Some(Value::Object(map)) => ImageField::Keyed(map.clone()),
            Some(Value::Bool(_)) | Some(Value::Number(_)) => ImageField::Unsupported,
        }
    }

    pub fn from_metadata(metadata: &Value) -> Self {
        Self::from_value(metadata.get("image"))
    }
}

// ==================== RESOLVER ====================

/// Turns an image field into a URL a browser can fetch. Returns `None` rather
/// than a broken link.
#[derive(Debug, Clone)]
pub struct ImageResolver {
    gateway: String,
}

impl ImageResolver {
    pub fn new(gateway: &str) -> Self {
        Self {
            gateway: gateway.trim().trim_end_matches('/').to_string(),
        }
    }

    pub fn resolve_metadata(&self, metadata: &Value) -> Option<String> {
        self.resolve(&ImageField::from_metadata(metadata))
    }

    pub fn resolve(&self, field: &ImageField) -> Option<String> {
        match field {
            ImageField::Absent | ImageField::Unsupported => None,
            ImageField::Text(text) => self.resolve_text(text),
            ImageField::Parts(parts) => self.resolve_joined(&parts.concat()),
            ImageField::Keyed(map) => IMAGE_OBJECT_KEYS
                .iter()
                .find_map(|key| {
                    map.get(*key)
                        .and_then(Value::as_str)
                        .map(str::trim)
                        .filter(|s| !s.is_empty())
                })
                .and_then(|text| self.resolve_text(text)),
        }
    }

    fn resolve_text(&self, raw: &str) -> Option<String> {
        let text = raw.trim();
        if is_blank_or_inline(text) {
            return None;
        }
        if let Some(rest) = strip_prefix_ignore_case(text, IPFS_SCHEME) {
            return self.gateway_url(rest);
        }
        if starts_with_ignore_case(text, "http://") || starts_with_ignore_case(text, "https://") {
            return Some(text.to_string());
        }
        if looks_like_cid(text) {
            return self.gateway_url(text);
        }
        Some(text.to_string())
    }

    fn resolve_joined(&self, joined: &str) -> Option<String> {
        let text = joined.trim();
        if is_blank_or_inline(text) {
            return None;
        }
        if let Some(pos) = text.find(IPFS_SCHEME) {
            return self.gateway_url(&text[pos + IPFS_SCHEME.len()..]);
        }
        if starts_with_ignore_case(text, "http") {
            return Some(text.to_string());
        }
        self.resolve_text(text)
    }

    fn gateway_url(&self, path: &str) -> Option<String> {
        let path = path.trim().trim_start_matches('/');
        let path = strip_prefix_ignore_case(path, "ipfs/").unwrap_or(path);
        if path.is_empty() {
            return None;
        }
        Some(format!("{}/{}", self.gateway, path))
    }
}

fn is_blank_or_inline(text: &str) -> bool {
    text.is_empty() || starts_with_ignore_case(text, DATA_URI_SCHEME)
}

fn starts_with_ignore_case(text: &str, prefix: &str) -> bool {
    text.len() >= prefix.len()
        && text.is_char_boundary(prefix.len())
        && text[..prefix.len()].eq_ignore_ascii_case(prefix)
}

fn strip_prefix_ignore_case<'a>(text: &'a str, prefix: &str) -> Option<&'a str> {
    if starts_with_ignore_case(text, prefix) {
        Some(&text[prefix.len()..])
    } else {
        None
    }
}

// Bare content identifiers, optionally followed by a path.
fn looks_like_cid(text: &str) -> bool {
    let cid = text.split('/').next().unwrap_or_default();
    let v0 = cid.len() == 46 && cid.starts_with("Qm") && cid.chars().all(|c| c.is_ascii_alphanumeric());
    let v1 = cid.len() >= 50
        && cid.starts_with("baf")
        && cid
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit());
    v0 || v1
}
