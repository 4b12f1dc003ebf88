// Utility modules

use crate::constants::LOVELACE_PER_ADA;

/// Formats a lovelace amount as ADA with six decimals, sign preserved.
pub fn format_ada(lovelace: i64) -> String {
    format!("{:.6}", lovelace as f64 / LOVELACE_PER_ADA)
}

/// Same as `format_ada` for the string quantities Blockfrost returns.
pub fn format_ada_str(quantity: &str) -> Option<String> {
    quantity.trim().parse::<i64>().ok().map(format_ada)
}

/// Shortens long identifiers for display and log lines (`addr1qx...k3j9`).
pub fn shorten(value: &str, head: usize, tail: usize) -> String {
    let chars: Vec<char> = value.chars().collect();
    if chars.len() <= head + tail {
        return value.to_string();
    }
    let start: String = chars[..head].iter().collect();
    let end: String = chars[chars.len() - tail..].iter().collect();
    format!("{}...{}", start, end)
}

/// Parses a Blockfrost quantity string; anything non-numeric is `None`.
pub fn parse_quantity(quantity: &str) -> Option<i64> {
    quantity.trim().parse::<i64>().ok()
}
