//! Integration tests for the contract proxies over an in-memory SDK.
//!
//! Run with: `cargo test --test test_contracts`

mod common;

use std::io::Write;
use std::sync::Arc;

use alloy::primitives::U256;
use balanced_client::{
    error::ResolveError,
    icon::{
        contracts::{baln, dividends, irc2, sicx},
        encoding::{decode_data, decode_utf8},
    },
    testing::MockSdk,
    AddressRegistry, AppError, BalancedClient,
};
use serde_json::json;
use tokio_test::{assert_err, assert_ok};

use common::{mock_client, ACCOUNT};

const DEX: &str = "cxa0af3165c08318e988cb30993b3048335b94af6c";
const STAKING: &str = "cx43e2eec79eb76293c298f2b17aec06097be606e0";

#[test]
fn test_registry_resolution() {
    let registry = AddressRegistry::new().with_network(1, [("baln", "cxAAA")]).unwrap();

    assert_eq!(registry.resolve(1, "baln").unwrap(), "cxAAA");
    assert!(matches!(registry.resolve(1, "missing"), Err(ResolveError::UnknownRole { .. })));
    assert!(matches!(registry.resolve(99, "baln"), Err(ResolveError::UnknownNetwork(99))));
}

#[test]
fn test_registry_file_overrides_mainnet() {
    let path = std::env::temp_dir()
        .join(format!("balanced-client-addresses-{}.json", std::process::id()));
    let mut file = std::fs::File::create(&path).unwrap();
    let contents = json!({
        "3": { "baln": "cx0000000000000000000000000000000000000003" },
        "1": { "dex": "cxDDD" },
    });
    write!(file, "{contents}").unwrap();
    drop(file);

    let registry = AddressRegistry::mainnet().merge_file(&path).unwrap();
    assert_eq!(registry.resolve(1, "dex").unwrap(), "cxDDD");
    assert_eq!(registry.resolve(3, "baln").unwrap(), "cx0000000000000000000000000000000000000003");
    assert!(registry.resolve(1, "loans").is_ok());

    let standalone = AddressRegistry::from_file(&path).unwrap();
    assert_eq!(standalone.networks(), vec![1, 3]);
    assert_eq!(standalone.roles(1), vec!["dex"]);

    let _ = std::fs::remove_file(&path);
}

#[tokio::test]
async fn test_transfer_with_swap_data() {
    let (sdk, client) = mock_client();
    let client = client.with_account(ACCOUNT).unwrap();

    irc2::transfer(&client.bnusd(), DEX, U256::from(100u64), Some(r#"{"method":"_swap"}"#))
        .await
        .unwrap();

    let writes = sdk.writes();
    let tx = &writes[0];
    assert_eq!(tx.from, ACCOUNT);
    assert_eq!(tx.call.params["_value"], "0x64");
    assert_eq!(tx.call.params["_data"], "0x7b226d6574686f64223a225f73776170227d");
    let data = tx.call.params["_data"].as_str().unwrap();
    assert_eq!(decode_utf8(data).unwrap(), r#"{"method":"_swap"}"#);
}

#[tokio::test]
async fn test_unstake_goes_to_staking() {
    let (sdk, client) = mock_client();
    let client = client.with_account(ACCOUNT).unwrap();

    sicx::unstake(&client.sicx(), U256::from(255u64)).await.unwrap();

    let writes = sdk.writes();
    let tx = &writes[0];
    assert_eq!(tx.call.method, "transfer");
    assert_eq!(tx.call.params["_to"], STAKING);
    assert_eq!(tx.call.params["_value"], "0xff");
    assert_eq!(
        decode_data(tx.call.params["_data"].as_str().unwrap()).unwrap(),
        json!({ "method": "unstake" })
    );
}

#[tokio::test]
async fn test_writes_without_account_fail_before_sdk() {
    let (sdk, client) = mock_client();

    let result = baln::stake(&client.baln(), U256::from(1u64)).await;
    assert!(matches!(result, Err(AppError::Wallet(_))));

    let err = assert_err!(dividends::claim(&client.dividends()).await);
    assert!(matches!(err, AppError::Wallet(_)));

    assert!(sdk.writes().is_empty());
}

#[tokio::test]
async fn test_unknown_network_fails_before_sdk() {
    let sdk = Arc::new(MockSdk::new());
    let client = BalancedClient::new(sdk.clone(), AddressRegistry::mainnet(), 99);

    let result = irc2::total_supply(&client.baln()).await;
    assert!(matches!(
        result,
        Err(AppError::AddressResolution(ResolveError::UnknownNetwork(99)))
    ));
    assert!(sdk.reads().is_empty());
}

#[tokio::test]
async fn test_consecutive_writes_use_fresh_nonces() {
    let (sdk, client) = mock_client();
    let client = client.with_account(ACCOUNT).unwrap();

    // A fresh proxy per write, as the MCP tools and hooks obtain them.
    let first = assert_ok!(baln::stake(&client.baln(), U256::from(1u64)).await);
    let second = assert_ok!(baln::stake(&client.baln(), U256::from(2u64)).await);
    assert_ok!(dividends::claim(&client.dividends()).await);

    assert_ne!(first, second);
    let writes = sdk.writes();
    assert_eq!(writes[1].nonce, writes[0].nonce + 1);
    assert_eq!(writes[2].nonce, writes[1].nonce + 1);
    assert_eq!(writes[1].call.params["_value"], "0x2");
}
