//! Supported-token catalog.
//!
//! Built once per network from the address registry and indexed both by
//! contract address and by symbol.

use std::collections::HashMap;

use tracing::{debug, info};

use crate::{
    services::address_registry::AddressRegistry,
    types::{NetworkId, Token},
};

/// `(role, symbol, name, decimals)` of every IRC2 token the app supports.
pub const SUPPORTED_TOKENS: &[(&str, &str, &str, u8)] = &[
    ("sicx", "sICX", "Staked ICX", 18),
    ("bnusd", "bnUSD", "Balanced Dollar", 18),
    ("baln", "BALN", "Balance Token", 18),
    ("iusdc", "IUSDC", "ICON USD Coin", 6),
    ("omm", "OMM", "Omm Token", 18),
    ("usds", "USDS", "Stably USD", 18),
];

/// Read-only token catalog for one network.
#[derive(Debug, Clone)]
pub struct TokenRegistry {
    network_id: NetworkId,
    /// Tokens indexed by address.
    by_address: HashMap<String, Token>,
    /// Tokens indexed by uppercase symbol.
    by_symbol: HashMap<String, Token>,
}

impl TokenRegistry {
    /// Build the catalog for `network_id`.
    ///
    /// Native ICX is always present. Tokens whose contract role is not in
    /// the address book for that network are left out.
    pub fn for_network(addresses: &AddressRegistry, network_id: NetworkId) -> Self {
        let mut registry =
            Self { network_id, by_address: HashMap::new(), by_symbol: HashMap::new() };
        registry.insert(Token::icx());

        for (role, symbol, name, decimals) in SUPPORTED_TOKENS {
            match addresses.resolve(network_id, role) {
                Ok(address) => registry.insert(Token::irc2(address, symbol, name, *decimals)),
                Err(e) => debug!(symbol = %symbol, error = %e, "Token not deployed on network"),
            }
        }

        info!(network_id = network_id, tokens = registry.by_address.len(), "Token catalog built");
        registry
    }

    /// Build a catalog from explicit entries.
    pub fn from_tokens(network_id: NetworkId, tokens: impl IntoIterator<Item = Token>) -> Self {
        let mut registry =
            Self { network_id, by_address: HashMap::new(), by_symbol: HashMap::new() };
        for token in tokens {
            registry.insert(token);
        }
        registry
    }

    fn insert(&mut self, token: Token) {
        self.by_symbol.insert(token.symbol.to_uppercase(), token.clone());
        self.by_address.insert(token.address.clone(), token);
    }

    /// Network the catalog was built for.
    pub fn network_id(&self) -> NetworkId {
        self.network_id
    }

    /// Look up a token by contract address.
    pub fn lookup_address(&self, address: &str) -> Option<&Token> {
        self.by_address.get(address)
    }

    /// Look up a token by symbol (case-insensitive).
    pub fn resolve_symbol(&self, symbol: &str) -> Option<&Token> {
        self.by_symbol.get(&symbol.to_uppercase())
    }

    /// All tokens, sorted by symbol.
    pub fn list_tokens(&self) -> Vec<&Token> {
        let mut tokens: Vec<&Token> = self.by_address.values().collect();
        tokens.sort_by(|a, b| a.symbol.cmp(&b.symbol));
        tokens
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{icon::constants::MAINNET_NID, types::ICX_ADDRESS};

    #[test]
    fn test_mainnet_catalog_contains_all_tokens() {
        let registry = TokenRegistry::for_network(&AddressRegistry::mainnet(), MAINNET_NID);
        assert_eq!(registry.list_tokens().len(), SUPPORTED_TOKENS.len() + 1);
        assert_eq!(registry.network_id(), MAINNET_NID);
    }

    #[test]
    fn test_lookup_by_address() {
        let registry = TokenRegistry::for_network(&AddressRegistry::mainnet(), MAINNET_NID);

        let sicx = registry.lookup_address("cx2609b924e33ef00b648a409245c7ea394c467824").unwrap();
        assert_eq!(sicx.symbol, "sICX");

        let icx = registry.lookup_address(ICX_ADDRESS).unwrap();
        assert!(icx.is_native());

        assert!(registry.lookup_address("cx0000000000000000000000000000000000000001").is_none());
    }

    #[test]
    fn test_resolve_symbol_case_insensitive() {
        let registry = TokenRegistry::for_network(&AddressRegistry::mainnet(), MAINNET_NID);
        assert_eq!(registry.resolve_symbol("iusdc").unwrap().decimals, 6);
        assert_eq!(registry.resolve_symbol("BNUSD").unwrap().symbol, "bnUSD");
    }

    #[test]
    fn test_unknown_network_has_only_icx() {
        let registry = TokenRegistry::for_network(&AddressRegistry::mainnet(), 42);
        let tokens = registry.list_tokens();
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].symbol, "ICX");
    }

    #[test]
    fn test_partial_address_book() {
        let addresses = AddressRegistry::new().with_network(3, [("baln", "cxBBB")]).unwrap();
        let registry = TokenRegistry::for_network(&addresses, 3);
        assert_eq!(registry.lookup_address("cxBBB").unwrap().symbol, "BALN");
        assert!(registry.resolve_symbol("sICX").is_none());
    }
}
