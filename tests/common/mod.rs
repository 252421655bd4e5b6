//! Common utilities for integration tests.

#![allow(dead_code)]

use std::sync::Arc;

use balanced_client::{
    testing::MockSdk, AddressRegistry, BalancedClient, BalancedServer, Config, Store,
};

/// Account used by the mock-backed tests.
pub const ACCOUNT: &str = "hx3f01840a599da07b0f620eeae7aa9c574169a4be";

/// Mainnet client over a fresh mock SDK.
pub fn mock_client() -> (Arc<MockSdk>, BalancedClient) {
    let sdk = Arc::new(MockSdk::new());
    let client = BalancedClient::new(sdk.clone(), AddressRegistry::mainnet(), 1);
    (sdk, client)
}

/// Server over a fresh mock SDK with [`ACCOUNT`] as default account.
pub fn mock_server() -> (Arc<MockSdk>, BalancedServer) {
    let (sdk, client) = mock_client();
    (sdk, BalancedServer::new(client, Store::new(), Some(ACCOUNT.to_string())))
}

/// Helper to create a test server from environment variables.
pub fn create_test_server() -> Option<BalancedServer> {
    // Load .env file if present
    let _ = dotenvy::dotenv();

    let config = Config::from_env().ok()?;
    BalancedServer::from_config(&config).ok()
}

/// Skip test if server cannot be created (missing env vars).
#[macro_export]
macro_rules! skip_if_no_server {
    () => {
        match common::create_test_server() {
            Some(server) => server,
            None => {
                eprintln!("Skipping test: ICON_RPC_URL not set");
                return;
            }
        }
    };
}
