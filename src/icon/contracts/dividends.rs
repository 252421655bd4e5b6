//! Dividends contract: unclaimed fee dividends.

use std::collections::BTreeMap;

use alloy::primitives::U256;
use serde_json::Value;

use crate::{
    error::{AppError, Result},
    icon::{encoding::parse_hex_value, wallet::parse_address},
    types::{ContractCallPayload, TransactionHandle},
};

use super::Contract;

/// Unclaimed dividends of `account`, keyed by token address, in raw units.
pub async fn get_unclaimed_dividends(
    contract: &Contract,
    account: &str,
) -> Result<BTreeMap<String, U256>> {
    let account = parse_address(account)?;
    let call = ContractCallPayload::new("getUnclaimedDividends").param("_account", account);
    let result = contract.call(call).await?;
    decode_dividends(&result)
}

/// Decode `{ "<token address>": "0x..." }`.
pub fn decode_dividends(result: &Value) -> Result<BTreeMap<String, U256>> {
    let entries = result
        .as_object()
        .ok_or_else(|| AppError::Parse(format!("Expected dividends object, got {}", result)))?;

    entries
        .iter()
        .map(|(address, raw)| parse_hex_value(raw).map(|value| (address.clone(), value)))
        .collect()
}

/// Claim all dividends of the bound account.
pub async fn claim(contract: &Contract) -> Result<TransactionHandle> {
    contract.send(ContractCallPayload::new("claim")).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        icon::contracts::{roles, ContractSettings},
        services::address_registry::AddressRegistry,
        testing::MockSdk,
    };
    use serde_json::json;
    use std::sync::Arc;

    const ACCOUNT: &str = "hx3f01840a599da07b0f620eeae7aa9c574169a4be";

    fn dividends(sdk: Arc<MockSdk>) -> Contract {
        Contract::new(
            sdk,
            Arc::new(AddressRegistry::mainnet()),
            ContractSettings::new(1).with_account(ACCOUNT),
            roles::DIVIDENDS,
        )
    }

    #[tokio::test]
    async fn test_get_unclaimed_dividends() {
        let sdk = Arc::new(MockSdk::new());
        sdk.respond("getUnclaimedDividends", json!({"cx01": "0x10", "cx02": "0x0"}));

        let fees = get_unclaimed_dividends(&dividends(sdk.clone()), ACCOUNT).await.unwrap();
        assert_eq!(fees["cx01"], U256::from(16u64));
        assert_eq!(fees["cx02"], U256::ZERO);
        assert_eq!(sdk.reads()[0].call.params["_account"], ACCOUNT);
    }

    #[test]
    fn test_decode_dividends_rejects_non_object() {
        assert!(matches!(decode_dividends(&json!("0x10")), Err(AppError::Parse(_))));
        assert!(decode_dividends(&json!({"cx01": "sixteen"})).is_err());
    }

    #[tokio::test]
    async fn test_claim() {
        let sdk = Arc::new(MockSdk::new());
        claim(&dividends(sdk.clone())).await.unwrap();

        let writes = sdk.writes();
        assert_eq!(writes[0].call.method, "claim");
        assert!(writes[0].call.params.is_empty());
        assert_eq!(writes[0].to, "cx203d9cd2a669be67177e997b8948ce2c35caffae");
    }
}
