//! BALN token: staking and staked-balance queries.
//!
//! Transfers and DEX swaps go through [`super::irc2`].

use alloy::primitives::U256;
use serde_json::Value;

use crate::{
    error::Result,
    icon::{
        encoding::{parse_hex_value, to_hex_amount, to_hex_u64},
        wallet::parse_address,
    },
    types::{ContractCallPayload, TransactionHandle},
};

use super::{ensure_positive, Contract};

/// Stake `value` BALN.
pub async fn stake(contract: &Contract, value: U256) -> Result<TransactionHandle> {
    ensure_positive(value)?;
    contract.send(ContractCallPayload::new("stake").param("_value", to_hex_amount(value))).await
}

/// Breakdown of `owner`'s BALN (available, staked, unstaking, ...), as returned by the contract.
pub async fn details_balance_of(contract: &Contract, owner: &str) -> Result<Value> {
    let owner = parse_address(owner)?;
    contract.call(ContractCallPayload::new("detailsBalanceOf").param("_owner", owner)).await
}

/// BALN staked by `account` on a given day.
pub async fn staked_balance_of_at(contract: &Contract, account: &str, day: u64) -> Result<U256> {
    let account = parse_address(account)?;
    let call = ContractCallPayload::new("stakedBalanceOfAt")
        .param("_account", account)
        .param("_day", to_hex_u64(day));
    parse_hex_value(&contract.call(call).await?)
}

/// Total BALN staked on a given day.
pub async fn total_staked_balance_of_at(contract: &Contract, day: u64) -> Result<U256> {
    let call = ContractCallPayload::new("totalStakedBalanceOfAt").param("_day", to_hex_u64(day));
    parse_hex_value(&contract.call(call).await?)
}
