//! Token and amount types.

use alloy::primitives::U256;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{AppError, Result};

/// Address used by the token catalog for native ICX.
pub const ICX_ADDRESS: &str = "cx0000000000000000000000000000000000000000";

/// Decimals of ICX and of every Balanced token except IUSDC.
pub const ICX_DECIMALS: u8 = 18;

/// A token known to the client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    /// Contract address (`cx...`), or [`ICX_ADDRESS`] for native ICX.
    pub address: String,
    /// Token symbol (e.g., "sICX", "bnUSD").
    pub symbol: String,
    /// Token name.
    pub name: String,
    /// Number of decimals.
    pub decimals: u8,
}

impl Token {
    /// Native ICX.
    pub fn icx() -> Self {
        Self {
            address: ICX_ADDRESS.to_string(),
            symbol: "ICX".to_string(),
            name: "ICX".to_string(),
            decimals: ICX_DECIMALS,
        }
    }

    /// Create an IRC2 token entry.
    pub fn irc2(address: impl Into<String>, symbol: &str, name: &str, decimals: u8) -> Self {
        Self {
            address: address.into(),
            symbol: symbol.to_string(),
            name: name.to_string(),
            decimals,
        }
    }

    /// Whether this is native ICX rather than an IRC2 contract.
    pub fn is_native(&self) -> bool {
        self.address == ICX_ADDRESS
    }
}

/// A raw token quantity tagged with its token.
///
/// The raw value is kept in the token's smallest unit; conversion to a
/// decimal happens only when a caller asks for it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonetaryAmount {
    /// Token the amount is denominated in.
    pub token: Token,
    /// Amount in the token's smallest unit.
    pub raw: U256,
}

impl MonetaryAmount {
    /// Wrap a raw amount.
    pub fn from_raw_amount(token: Token, raw: U256) -> Self {
        Self { token, raw }
    }

    /// Human-readable exact string (trailing zeros removed).
    pub fn to_exact(&self) -> String {
        format_units(self.raw, self.token.decimals)
    }

    /// Exact decimal value, failing if it does not fit a `Decimal`.
    pub fn to_decimal(&self) -> Result<Decimal> {
        u256_to_decimal(self.raw, self.token.decimals)
    }
}

/// Balance information response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BalanceInfo {
    /// Wallet address.
    pub address: String,
    /// Token information.
    pub token: Token,
    /// Human-readable balance with proper decimals.
    pub balance: String,
    /// Raw balance in loop.
    pub balance_raw: String,
}

/// Format a U256 value with decimals to a human-readable string.
pub fn format_units(value: U256, decimals: u8) -> String {
    if value == U256::ZERO {
        return "0".to_string();
    }

    let value_str = value.to_string();
    let decimals = decimals as usize;

    if decimals == 0 {
        return value_str;
    }

    let len = value_str.len();
    if len <= decimals {
        let zeros = decimals - len;
        let decimal_part = value_str.trim_end_matches('0');
        format!("0.{}{}", "0".repeat(zeros), decimal_part)
    } else {
        let (integer, decimal) = value_str.split_at(len - decimals);
        let decimal = decimal.trim_end_matches('0');
        if decimal.is_empty() {
            integer.to_string()
        } else {
            format!("{}.{}", integer, decimal)
        }
    }
}

/// Convert U256 to Decimal with proper scaling.
pub fn u256_to_decimal(value: U256, decimals: u8) -> Result<Decimal> {
    let formatted = format_units(value, decimals);
    formatted.parse::<Decimal>().map_err(|e| {
        AppError::NumericOverflow(format!("{} does not fit a decimal: {}", formatted, e))
    })
}

/// Convert an amount in loop to ICX.
pub fn loop_to_icx(value: U256) -> Result<Decimal> {
    u256_to_decimal(value, ICX_DECIMALS)
}
