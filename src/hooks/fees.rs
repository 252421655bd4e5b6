//! Unclaimed dividend fees.

use std::collections::HashMap;

use async_trait::async_trait;
use tracing::warn;

use crate::{
    error::Result,
    hooks::polling::Refresh,
    icon::contracts::dividends,
    services::BalancedClient,
    store::{FeesAction, Store},
    types::MonetaryAmount,
};

/// Current unclaimed fees, keyed by token address.
pub fn unclaimed_fees(store: &Store) -> HashMap<String, MonetaryAmount> {
    store.select(|s| s.fees.fees.clone())
}

/// Read `account`'s unclaimed dividends and replace the fees slice.
///
/// Tokens missing from the client's catalog are skipped.
pub async fn fetch_unclaimed_fees(
    client: &BalancedClient,
    store: &Store,
    account: &str,
) -> Result<()> {
    let raw = dividends::get_unclaimed_dividends(&client.dividends(), account).await?;

    let mut fees = HashMap::with_capacity(raw.len());
    for (address, amount) in raw {
        match client.tokens().lookup_address(&address) {
            Some(token) => {
                fees.insert(address, MonetaryAmount::from_raw_amount(token.clone(), amount));
            }
            None => warn!(account = %account, token = %address, "Unknown fee token skipped"),
        }
    }

    store.dispatch(FeesAction::SetFees(fees));
    Ok(())
}

/// Polls [`fetch_unclaimed_fees`].
#[derive(Debug, Clone)]
pub struct FeesRefresher {
    client: BalancedClient,
    store: Store,
}

impl FeesRefresher {
    pub fn new(client: BalancedClient, store: Store) -> Self {
        Self { client, store }
    }
}

#[async_trait]
impl Refresh for FeesRefresher {
    fn name(&self) -> &'static str {
        "fees"
    }

    async fn refresh(&self, account: &str) -> Result<()> {
        fetch_unclaimed_fees(&self.client, &self.store, account).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        hooks::polling::PollingHook,
        services::{AddressRegistry, TokenRegistry},
        testing::MockSdk,
        types::Token,
    };
    use alloy::primitives::U256;
    use serde_json::json;
    use std::{sync::Arc, time::Duration};

    const A1: &str = "hx3f01840a599da07b0f620eeae7aa9c574169a4be";
    const DIVIDENDS: &str = "cx203d9cd2a669be67177e997b8948ce2c35caffae";

    fn client(sdk: Arc<MockSdk>) -> BalancedClient {
        let addresses = AddressRegistry::new().with_network(1, [("dividends", DIVIDENDS)]).unwrap();
        let tokens = TokenRegistry::from_tokens(1, [Token::irc2("X", "X", "Token X", 18)]);
        BalancedClient::new(sdk, addresses, 1).with_tokens(tokens)
    }

    #[tokio::test]
    async fn test_fetch_skips_unknown_tokens() {
        let sdk = Arc::new(MockSdk::new());
        sdk.respond("getUnclaimedDividends", json!({ "X": "0x10", "cxUnknown": "0x5" }));
        let store = Store::new();

        fetch_unclaimed_fees(&client(sdk.clone()), &store, A1).await.unwrap();

        let fees = unclaimed_fees(&store);
        assert_eq!(fees.len(), 1);
        assert_eq!(fees["X"].raw, U256::from(16u64));
        assert_eq!(fees["X"].token.symbol, "X");

        let read = &sdk.reads()[0];
        assert_eq!(read.to, DIVIDENDS);
        assert_eq!(read.call.params["_account"], A1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_poller_dispatches_then_stops_after_unbind() {
        let sdk = Arc::new(MockSdk::new());
        sdk.respond("getUnclaimedDividends", json!({ "X": "0x10" }));
        let store = Store::new();

        let mut hook = PollingHook::new(FeesRefresher::new(client(sdk.clone()), store.clone()));
        hook.bind(Some(A1));

        tokio::time::sleep(Duration::from_millis(5001)).await;
        assert_eq!(unclaimed_fees(&store)["X"].raw, U256::from(0x10u64));
        assert_eq!(sdk.read_count("getUnclaimedDividends"), 1);

        hook.unbind();
        sdk.respond("getUnclaimedDividends", json!({ "X": "0x20" }));

        tokio::time::sleep(Duration::from_millis(20_000)).await;
        assert_eq!(sdk.read_count("getUnclaimedDividends"), 1);
        assert_eq!(unclaimed_fees(&store)["X"].raw, U256::from(0x10u64));
    }

    #[tokio::test]
    async fn test_failed_read_keeps_previous_fees() {
        let sdk = Arc::new(MockSdk::new());
        sdk.respond("getUnclaimedDividends", json!({ "X": "0x10" }));
        let store = Store::new();
        let c = client(sdk.clone());
        fetch_unclaimed_fees(&c, &store, A1).await.unwrap();

        sdk.fail("getUnclaimedDividends", "timeout");
        assert!(fetch_unclaimed_fees(&c, &store, A1).await.is_err());
        assert_eq!(unclaimed_fees(&store).len(), 1);
    }
}
