//! Entry point to the Balanced contracts on one network.

use std::sync::{atomic::AtomicU64, Arc};

use alloy::primitives::U256;
use tracing::info;

use crate::{
    error::Result,
    icon::{
        client::IconSdk,
        contracts::{roles, Contract, ContractSettings},
        wallet::parse_address,
    },
    services::{address_registry::AddressRegistry, token_registry::TokenRegistry},
    types::NetworkId,
};

/// Shared SDK, address book and token catalog, handing out contract proxies.
#[derive(Clone)]
pub struct BalancedClient {
    sdk: Arc<dyn IconSdk>,
    addresses: Arc<AddressRegistry>,
    tokens: Arc<TokenRegistry>,
    settings: ContractSettings,
    nonce: Arc<AtomicU64>,
}

impl BalancedClient {
    /// Create a client for `network_id` with no bound account.
    pub fn new(sdk: Arc<dyn IconSdk>, addresses: AddressRegistry, network_id: NetworkId) -> Self {
        let tokens = TokenRegistry::for_network(&addresses, network_id);
        info!(network_id = network_id, "Balanced client created");
        Self {
            sdk,
            addresses: Arc::new(addresses),
            tokens: Arc::new(tokens),
            settings: ContractSettings::new(network_id),
            nonce: Arc::new(AtomicU64::new(1)),
        }
    }

    /// Copy of this client bound to `account`.
    pub fn with_account(&self, account: &str) -> Result<Self> {
        let account = parse_address(account)?;
        Ok(Self { settings: self.settings.clone().with_account(account), ..self.clone() })
    }

    /// Replace the token catalog.
    pub fn with_tokens(mut self, tokens: TokenRegistry) -> Self {
        self.tokens = Arc::new(tokens);
        self
    }

    pub fn network_id(&self) -> NetworkId {
        self.settings.nid
    }

    pub fn account(&self) -> Option<&str> {
        self.settings.account.as_deref()
    }

    pub fn addresses(&self) -> &AddressRegistry {
        &self.addresses
    }

    pub fn tokens(&self) -> &TokenRegistry {
        &self.tokens
    }

    /// Proxy for the contract registered under `role`. Every proxy from this client
    /// and its `with_account` copies draws from one nonce counter.
    pub fn contract(&self, role: &str) -> Contract {
        Contract::new(self.sdk.clone(), self.addresses.clone(), self.settings.clone(), role)
            .with_nonce(self.nonce.clone())
    }

    pub fn baln(&self) -> Contract {
        self.contract(roles::BALN)
    }

    pub fn sicx(&self) -> Contract {
        self.contract(roles::SICX)
    }

    pub fn bnusd(&self) -> Contract {
        self.contract(roles::BNUSD)
    }

    pub fn loans(&self) -> Contract {
        self.contract(roles::LOANS)
    }

    pub fn dividends(&self) -> Contract {
        self.contract(roles::DIVIDENDS)
    }

    pub fn staking(&self) -> Contract {
        self.contract(roles::STAKING)
    }

    /// Native ICX balance of `address`, in loop.
    pub async fn icx_balance(&self, address: &str) -> Result<U256> {
        let address = parse_address(address)?;
        tracing::debug!(account = %address, "ICX balance read");
        self.sdk.get_balance(&address).await
    }
}

impl std::fmt::Debug for BalancedClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BalancedClient").field("settings", &self.settings).finish()
    }
}
