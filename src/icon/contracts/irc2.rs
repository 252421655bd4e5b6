//! IRC2 token operations shared by every Balanced token contract.

use alloy::primitives::U256;
use serde_json::{json, Value};

use crate::{
    error::{AppError, Result},
    icon::{
        encoding::{is_hex, parse_hex_value, to_hex_amount, to_hex_str},
        wallet::parse_address,
    },
    types::{ContractCallPayload, TransactionHandle, TransferValue},
};

use super::{ensure_positive, roles, Contract};

/// Build the `transfer` call.
///
/// `data` is the JSON text of the auxiliary payload; it is hex-encoded
/// into `_data`. Without data the key is omitted.
pub fn transfer_payload(
    to: &str,
    value: &TransferValue,
    data: Option<&str>,
) -> Result<ContractCallPayload> {
    let to = parse_address(to)?;

    let value = match value {
        TransferValue::Amount(amount) => {
            ensure_positive(*amount)?;
            to_hex_amount(*amount)
        }
        TransferValue::Hex(encoded) => {
            if !is_hex(encoded) {
                return Err(AppError::InvalidParameter(format!(
                    "Pre-encoded value must be 0x-prefixed hex: {}",
                    encoded
                )));
            }
            to_hex_str(encoded)
        }
    };

    Ok(ContractCallPayload::new("transfer")
        .param("_to", to)
        .param("_value", value)
        .param_opt("_data", data.map(to_hex_str)))
}

/// Transfer tokens to `to`, optionally with auxiliary data for the receiver.
pub async fn transfer(
    contract: &Contract,
    to: &str,
    value: impl Into<TransferValue>,
    data: Option<&str>,
) -> Result<TransactionHandle> {
    let call = transfer_payload(to, &value.into(), data)?;
    contract.send(call).await
}

/// JSON text of the DEX swap instruction.
pub fn swap_data(to_token: &str, minimum_receive: U256) -> Result<String> {
    let data = json!({
        "method": "_swap",
        "params": { "toToken": to_token, "minimumReceive": minimum_receive.to_string() },
    });
    Ok(serde_json::to_string(&data)?)
}

/// Swap `value` of this token on the DEX for the token named `output_symbol`.
///
/// The output symbol is lowercased to find its contract role.
pub async fn swap(
    contract: &Contract,
    value: U256,
    output_symbol: &str,
    minimum_receive: U256,
) -> Result<TransactionHandle> {
    let to_token = contract.resolve(&output_symbol.to_lowercase())?;
    let dex = contract.resolve(roles::DEX)?;
    let data = swap_data(&to_token, minimum_receive)?;
    transfer(contract, &dex, value, Some(&data)).await
}

/// Token balance of `owner`.
pub async fn balance_of(contract: &Contract, owner: &str) -> Result<U256> {
    let owner = parse_address(owner)?;
    let result = contract.call(ContractCallPayload::new("balanceOf").param("_owner", owner)).await?;
    parse_hex_value(&result)
}

/// Total token supply.
pub async fn total_supply(contract: &Contract) -> Result<U256> {
    let result: Value = contract.call(ContractCallPayload::new("totalSupply")).await?;
    parse_hex_value(&result)
}
