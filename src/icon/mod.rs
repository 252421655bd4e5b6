//! ICON network interaction module.
//!
//! Contains the JSON-RPC client, value encoding, signing boundary, static
//! reference data and the Balanced contract bindings.

pub mod client;
pub mod constants;
pub mod contracts;
pub mod encoding;
pub mod pairs;
pub mod wallet;

pub use client::{IconRpcClient, IconSdk};
pub use contracts::{Contract, ContractSettings};
pub use wallet::TransactionSigner;
