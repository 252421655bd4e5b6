//! Balanced Client Library
//!
//! Client-side access to the Balanced DeFi contracts on the ICON network,
//! with an observable application store and an MCP server on top.
//!
//! # Features
//!
//! - **Contract Proxies**: Build and submit `icx_call` / `icx_sendTransaction` payloads for
//!   the IRC2 tokens, loans, staking and dividends contracts
//! - **Address Registry**: Resolve contract roles per network
//! - **Store**: Collateral, fees and ratio slices with pure selectors
//! - **Polling Hooks**: Cancellable periodic refresh bound to an account
//!
//! # Example
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use balanced_client::{hooks, AddressRegistry, BalancedClient, IconRpcClient, Store};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let sdk = Arc::new(IconRpcClient::new("https://ctz.solidwallet.io/api/v3")?);
//!     let client = BalancedClient::new(sdk, AddressRegistry::mainnet(), 1);
//!     let store = Store::new();
//!     hooks::fetch_ratio(&client, &store).await?;
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod error;
pub mod hooks;
pub mod icon;
pub mod mcp;
pub mod services;
pub mod store;
#[cfg(feature = "testing")]
pub mod testing;
pub mod types;

pub use config::Config;
pub use error::{AppError, Result};
pub use icon::{IconRpcClient, IconSdk, TransactionSigner};
pub use mcp::BalancedServer;
pub use services::{AddressRegistry, BalancedClient, TokenRegistry};
pub use store::{AppState, Store};
