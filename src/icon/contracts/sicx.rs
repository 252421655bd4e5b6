//! sICX token: collateral deposit, ICX swap and unstaking.
//!
//! Each operation is a transfer carrying a JSON instruction for the
//! receiving contract.

use alloy::primitives::U256;
use serde_json::json;

use crate::{
    error::Result,
    icon::encoding::to_hex_amount,
    types::{TransactionHandle, TransferValue},
};

use super::{ensure_positive, irc2, roles, Contract};

/// Deposit `value` sICX as loan collateral without borrowing.
pub async fn deposit_and_borrow(contract: &Contract, value: U256) -> Result<TransactionHandle> {
    let loans = contract.resolve(roles::LOANS)?;
    let data = serde_json::to_string(&json!({ "_asset": "", "_amount": 0 }))?;
    irc2::transfer(contract, &loans, value, Some(&data)).await
}

/// Swap `value` sICX for ICX on the DEX.
pub async fn swap_to_icx(contract: &Contract, value: U256) -> Result<TransactionHandle> {
    let dex = contract.resolve(roles::DEX)?;
    let data = serde_json::to_string(&json!({ "method": "_swap_icx" }))?;
    irc2::transfer(contract, &dex, value, Some(&data)).await
}

/// Send `value` sICX to the staking contract to unstake it.
///
/// The amount is hex-encoded here and handed to `transfer` pre-encoded.
pub async fn unstake(contract: &Contract, value: U256) -> Result<TransactionHandle> {
    ensure_positive(value)?;
    let staking = contract.resolve(roles::STAKING)?;
    let data = serde_json::to_string(&json!({ "method": "unstake" }))?;
    irc2::transfer(contract, &staking, TransferValue::Hex(to_hex_amount(value)), Some(&data)).await
}
