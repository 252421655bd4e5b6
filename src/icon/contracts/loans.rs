//! Loans contract: account positions.

use alloy::primitives::U256;
use serde_json::Value;

use crate::{
    error::Result,
    icon::encoding::parse_hex_value,
    types::ContractCallPayload,
};

use super::Contract;

/// Position of the contract's bound account (collateral assets, debt, ratios).
///
/// Accounts without a position come back without an `assets` object.
pub async fn get_account_positions(contract: &Contract) -> Result<Value> {
    let owner = contract.require_account()?.to_string();
    contract.call(ContractCallPayload::new("getAccountPositions").param("_owner", owner)).await
}

/// sICX collateral in a positions object, in loop. Zero when absent.
pub fn collateral_sicx(positions: &Value) -> Result<U256> {
    match positions.get("assets").and_then(|assets| assets.get("sICX")) {
        Some(value) => parse_hex_value(value),
        None => Ok(U256::ZERO),
    }
}
