//! Error types and handling module.
//!
//! Defines all application-specific error types and conversions.

use rmcp::ErrorData as McpError;
use thiserror::Error;

use crate::types::NetworkId;

/// Address lookup failures raised by the address registry.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResolveError {
    /// No address book is loaded for the network.
    #[error("Unknown network: {0}")]
    UnknownNetwork(NetworkId),

    /// The network is known but has no contract registered under the role.
    #[error("Unknown role '{role}' on network {network_id}")]
    UnknownRole { network_id: NetworkId, role: String },
}

/// Application-wide error type.
#[derive(Debug, Error)]
pub enum AppError {
    /// Configuration-related errors.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Contract address could not be resolved.
    #[error("Address resolution failed: {0}")]
    AddressResolution(#[from] ResolveError),

    /// The node rejected a JSON-RPC call.
    #[error("Remote call failed: {0}")]
    RemoteCall(String),

    /// Transport errors.
    #[error("Transport error: {0}")]
    Transport(String),

    /// A call argument failed validation before anything was sent.
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// Parse error.
    #[error("Parse error: {0}")]
    Parse(String),

    /// Wallet-related errors.
    #[error("Wallet error: {0}")]
    Wallet(String),

    /// Numeric overflow during conversion.
    #[error("Numeric overflow: {0}")]
    NumericOverflow(String),
}

impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        AppError::Transport(err.to_string())
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Parse(err.to_string())
    }
}

impl From<alloy::hex::FromHexError> for AppError {
    fn from(err: alloy::hex::FromHexError) -> Self {
        AppError::Parse(err.to_string())
    }
}

impl From<std::num::ParseIntError> for AppError {
    fn from(err: std::num::ParseIntError) -> Self {
        AppError::Parse(err.to_string())
    }
}

impl From<AppError> for McpError {
    fn from(err: AppError) -> Self {
        match err {
            AppError::InvalidParameter(_)
            | AppError::AddressResolution(_)
            | AppError::Parse(_)
            | AppError::NumericOverflow(_) => McpError::invalid_params(err.to_string(), None),
            AppError::Config(_) => McpError::invalid_request(err.to_string(), None),
            _ => McpError::internal_error(err.to_string(), None),
        }
    }
}

/// Result type alias using AppError.
pub type Result<T> = std::result::Result<T, AppError>;
