//! Configuration management module.
//!
//! Handles loading configuration from environment variables.

use std::env;
use std::path::PathBuf;
use std::time::Duration;

use crate::{
    error::AppError,
    icon::constants::{DEFAULT_NID, DEFAULT_POLL_INTERVAL},
    types::NetworkId,
};

/// Application configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// ICON JSON-RPC v3 endpoint URL.
    pub rpc_url: String,
    /// Network id (default: 1, mainnet).
    pub network_id: NetworkId,
    /// Account the pollers are bound to at startup.
    pub account: Option<String>,
    /// Extra address book merged over the mainnet seed.
    pub addresses_file: Option<PathBuf>,
    /// Polling period (default: 5000 ms).
    pub poll_interval: Duration,
    /// Logging level (default: info).
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Required environment variables:
    /// - `ICON_RPC_URL`: ICON JSON-RPC endpoint
    ///
    /// Optional environment variables:
    /// - `ICON_NETWORK_ID`: network id (default: 1)
    /// - `ICON_ACCOUNT`: account to poll
    /// - `BALANCED_ADDRESSES_FILE`: JSON address book
    /// - `POLL_INTERVAL_MS`: polling period (default: 5000)
    /// - `LOG_LEVEL`: Logging level (default: info)
    pub fn from_env() -> Result<Self, AppError> {
        // Load .env file if present
        let _ = dotenvy::dotenv();

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build the configuration from an arbitrary variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, AppError> {
        let var = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let rpc_url = var("ICON_RPC_URL")
            .ok_or_else(|| AppError::Config("ICON_RPC_URL environment variable not set".into()))?;

        let network_id = match var("ICON_NETWORK_ID") {
            Some(raw) => raw.trim().parse::<NetworkId>().map_err(|e| {
                AppError::Config(format!("Invalid ICON_NETWORK_ID '{}': {}", raw, e))
            })?,
            None => DEFAULT_NID,
        };

        let poll_interval = match var("POLL_INTERVAL_MS") {
            Some(raw) => {
                let millis = raw.trim().parse::<u64>().map_err(|e| {
                    AppError::Config(format!("Invalid POLL_INTERVAL_MS '{}': {}", raw, e))
                })?;
                if millis == 0 {
                    return Err(AppError::Config("POLL_INTERVAL_MS must be positive".into()));
                }
                Duration::from_millis(millis)
            }
            None => DEFAULT_POLL_INTERVAL,
        };

        let account = var("ICON_ACCOUNT").map(|a| a.trim().to_string());
        let addresses_file = var("BALANCED_ADDRESSES_FILE").map(PathBuf::from);
        let log_level = var("LOG_LEVEL").unwrap_or_else(|| "info".to_string());

        Ok(Self { rpc_url, network_id, account, addresses_file, poll_interval, log_level })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn load(vars: &[(&str, &str)]) -> Result<Config, AppError> {
        let vars: HashMap<String, String> =
            vars.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = load(&[("ICON_RPC_URL", "https://ctz.solidwallet.io/api/v3")]).unwrap();
        assert_eq!(config.network_id, 1);
        assert_eq!(config.account, None);
        assert_eq!(config.addresses_file, None);
        assert_eq!(config.poll_interval, Duration::from_millis(5000));
        assert_eq!(config.log_level, "info");
    }

    #[test]
    fn test_missing_rpc_url() {
        assert!(matches!(load(&[]), Err(AppError::Config(_))));
        assert!(matches!(load(&[("ICON_RPC_URL", "  ")]), Err(AppError::Config(_))));
    }

    #[test]
    fn test_overrides() {
        let config = load(&[
            ("ICON_RPC_URL", "http://localhost:9000/api/v3"),
            ("ICON_NETWORK_ID", "3"),
            ("ICON_ACCOUNT", "hx3f01840a599da07b0f620eeae7aa9c574169a4be"),
            ("BALANCED_ADDRESSES_FILE", "addresses.json"),
            ("POLL_INTERVAL_MS", "1500"),
            ("LOG_LEVEL", "debug"),
        ])
        .unwrap();

        assert_eq!(config.network_id, 3);
        assert_eq!(config.account.as_deref(), Some("hx3f01840a599da07b0f620eeae7aa9c574169a4be"));
        assert_eq!(config.addresses_file, Some(PathBuf::from("addresses.json")));
        assert_eq!(config.poll_interval, Duration::from_millis(1500));
        assert_eq!(config.log_level, "debug");
    }

    #[test]
    fn test_invalid_numbers() {
        let url = ("ICON_RPC_URL", "http://localhost");
        assert!(matches!(load(&[url, ("ICON_NETWORK_ID", "main")]), Err(AppError::Config(_))));
        assert!(matches!(load(&[url, ("POLL_INTERVAL_MS", "-1")]), Err(AppError::Config(_))));
        assert!(matches!(load(&[url, ("POLL_INTERVAL_MS", "0")]), Err(AppError::Config(_))));
    }
}
