//! Account addresses and the external signing seam.
//!
//! Keys never live in this crate: a wallet implements [`TransactionSigner`]
//! and the RPC client hands it each unsigned transaction.

use async_trait::async_trait;
use serde_json::Value;

use crate::error::{AppError, Result};

/// Signs ICON transactions on behalf of one account.
#[async_trait]
pub trait TransactionSigner: Send + Sync {
    /// Address (`hx...`) the signer signs for.
    fn address(&self) -> &str;

    /// Produce the base64 signature for the transaction `params` object.
    async fn sign(&self, transaction: &Value) -> Result<String>;
}

/// Whether `s` is an ICON address: `hx` (account) or `cx` (contract)
/// followed by 40 lowercase hex characters.
pub fn is_valid_address(s: &str) -> bool {
    match (s.get(..2), s.get(2..)) {
        (Some("hx" | "cx"), Some(body)) => {
            body.len() == 40 && body.chars().all(|c| c.is_ascii_digit() || ('a'..='f').contains(&c))
        }
        _ => false,
    }
}

/// Validate an ICON address, returning it trimmed.
pub fn parse_address(s: &str) -> Result<String> {
    let trimmed = s.trim();

    if trimmed.is_empty() {
        return Err(AppError::InvalidParameter("Address cannot be empty".to_string()));
    }

    if !is_valid_address(trimmed) {
        return Err(AppError::InvalidParameter(format!(
            "Address must be 'hx' or 'cx' followed by 40 lowercase hex chars: {}",
            s
        )));
    }

    Ok(trimmed.to_string())
}
