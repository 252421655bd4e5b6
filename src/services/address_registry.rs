//! Address registry: network id -> contract role -> address.
//!
//! Loaded once at startup and read-only afterwards.

use std::collections::{BTreeMap, HashMap};
use std::path::Path;

use tracing::info;

use crate::{
    error::{AppError, ResolveError, Result},
    icon::constants::{MAINNET_ADDRESSES, MAINNET_NID},
    types::NetworkId,
};

/// Strategy for turning a contract role into an address.
///
/// Implemented by [`AddressRegistry`]; tests may substitute their own.
pub trait AddressResolver: Send + Sync {
    /// Resolve the address registered for `role` on `network_id`.
    fn resolve(
        &self,
        network_id: NetworkId,
        role: &str,
    ) -> std::result::Result<String, ResolveError>;
}

/// Static address book of Balanced contracts per network.
#[derive(Debug, Clone, Default)]
pub struct AddressRegistry {
    book: HashMap<NetworkId, HashMap<String, String>>,
}

impl AddressRegistry {
    /// Empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry seeded with the Balanced mainnet deployment.
    pub fn mainnet() -> Self {
        let roles = MAINNET_ADDRESSES
            .iter()
            .map(|(role, address)| (role.to_string(), address.to_string()))
            .collect();
        Self { book: HashMap::from([(MAINNET_NID, roles)]) }
    }

    /// Add (or extend) a network's address book.
    ///
    /// # Errors
    /// Returns a config error if any role or address is empty.
    pub fn with_network<R, A>(
        mut self,
        network_id: NetworkId,
        entries: impl IntoIterator<Item = (R, A)>,
    ) -> Result<Self>
    where
        R: Into<String>,
        A: Into<String>,
    {
        let roles = self.book.entry(network_id).or_default();
        for (role, address) in entries {
            let role = role.into();
            let address = address.into();
            if role.trim().is_empty() || address.trim().is_empty() {
                return Err(AppError::Config(format!(
                    "Empty role or address in address book for network {}",
                    network_id
                )));
            }
            roles.insert(role, address);
        }
        Ok(self)
    }

    /// Merge address books from JSON: `{ "<nid>": { "<role>": "<address>" } }`.
    pub fn merge_json_str(mut self, json: &str) -> Result<Self> {
        let parsed: BTreeMap<String, BTreeMap<String, String>> = serde_json::from_str(json)
            .map_err(|e| AppError::Config(format!("Invalid address book: {}", e)))?;

        for (nid, roles) in parsed {
            let network_id = nid.trim().parse::<NetworkId>().map_err(|_| {
                AppError::Config(format!("Invalid network id in address book: {}", nid))
            })?;
            self = self.with_network(network_id, roles)?;
        }
        Ok(self)
    }

    /// Parse a standalone registry from JSON.
    pub fn from_json_str(json: &str) -> Result<Self> {
        Self::new().merge_json_str(json)
    }

    /// Parse a standalone registry from a JSON file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        Self::new().merge_file(path)
    }

    /// Merge address books from a JSON file.
    pub fn merge_file(self, path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|e| {
            AppError::Config(format!("Failed to read address book {}: {}", path.display(), e))
        })?;
        let registry = self.merge_json_str(&json)?;
        info!(path = %path.display(), networks = registry.book.len(), "Loaded address book");
        Ok(registry)
    }

    /// Look up a contract address.
    pub fn resolve(
        &self,
        network_id: NetworkId,
        role: &str,
    ) -> std::result::Result<&str, ResolveError> {
        let roles = self.book.get(&network_id).ok_or(ResolveError::UnknownNetwork(network_id))?;
        roles.get(role).map(String::as_str).ok_or_else(|| ResolveError::UnknownRole {
            network_id,
            role: role.to_string(),
        })
    }

    /// Networks with an address book, sorted.
    pub fn networks(&self) -> Vec<NetworkId> {
        let mut networks: Vec<NetworkId> = self.book.keys().copied().collect();
        networks.sort_unstable();
        networks
    }

    /// Roles registered for a network, sorted.
    pub fn roles(&self, network_id: NetworkId) -> Vec<&str> {
        let mut roles: Vec<&str> = self
            .book
            .get(&network_id)
            .map(|roles| roles.keys().map(String::as_str).collect())
            .unwrap_or_default();
        roles.sort_unstable();
        roles
    }
}

impl AddressResolver for AddressRegistry {
    fn resolve(
        &self,
        network_id: NetworkId,
        role: &str,
    ) -> std::result::Result<String, ResolveError> {
        AddressRegistry::resolve(self, network_id, role).map(str::to_string)
    }
}
