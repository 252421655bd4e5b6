//! Hex and JSON encoding used by ICON call parameters.
//!
//! Integers travel as minimal-width `0x`-prefixed lowercase hex. Auxiliary
//! transfer data is serialized to JSON first and the resulting UTF-8 string
//! is hex-encoded on top of that.

use alloy::{hex, primitives::U256};
use serde_json::Value;

use crate::error::{AppError, Result};

/// Encode an amount as minimal-width hex (`100` -> `0x64`).
pub fn to_hex_amount(value: U256) -> String {
    format!("0x{value:x}")
}

/// Encode a small integer as minimal-width hex.
pub fn to_hex_u64(value: u64) -> String {
    format!("0x{value:x}")
}

/// Whether `s` is a `0x`-prefixed hex string.
pub fn is_hex(s: &str) -> bool {
    match s.strip_prefix("0x") {
        Some(digits) => !digits.is_empty() && digits.chars().all(|c| c.is_ascii_hexdigit()),
        None => false,
    }
}

/// Hex-encode a string's UTF-8 bytes.
///
/// Input that is already `0x`-prefixed hex is returned unchanged.
pub fn to_hex_str(s: &str) -> String {
    if is_hex(s) {
        return s.to_string();
    }
    hex::encode_prefixed(s.as_bytes())
}

/// Serialize structured data to JSON, then hex-encode the JSON text.
pub fn encode_data(data: &Value) -> Result<String> {
    let json = serde_json::to_string(data)?;
    Ok(hex::encode_prefixed(json.as_bytes()))
}

/// Decode hex-encoded UTF-8 text.
pub fn decode_utf8(encoded: &str) -> Result<String> {
    let bytes = hex::decode(encoded.strip_prefix("0x").unwrap_or(encoded))?;
    String::from_utf8(bytes).map_err(|e| AppError::Parse(format!("Invalid UTF-8 in data: {}", e)))
}

/// Inverse of [`encode_data`].
pub fn decode_data(encoded: &str) -> Result<Value> {
    let json = decode_utf8(encoded)?;
    Ok(serde_json::from_str(&json)?)
}

/// Parse a `0x`-prefixed hex integer.
pub fn parse_hex_amount(s: &str) -> Result<U256> {
    let digits = s
        .strip_prefix("0x")
        .filter(|d| !d.is_empty())
        .ok_or_else(|| AppError::Parse(format!("Expected 0x-prefixed hex, got '{}'", s)))?;
    U256::from_str_radix(digits, 16)
        .map_err(|e| AppError::Parse(format!("Invalid hex integer '{}': {}", s, e)))
}

/// Parse a JSON value holding a hex integer string.
pub fn parse_hex_value(value: &Value) -> Result<U256> {
    match value.as_str() {
        Some(s) => parse_hex_amount(s),
        None => Err(AppError::Parse(format!("Expected hex string, got {}", value))),
    }
}
