//! Balanced contract bindings.
//!
//! [`Contract`] is the shared payload-building and execution core. It knows
//! its own role and resolves addresses through an [`AddressResolver`]; the
//! per-contract modules add their operations as free functions over it.

pub mod baln;
pub mod dividends;
pub mod irc2;
pub mod loans;
pub mod sicx;
pub mod staking;

use std::sync::{
    atomic::{AtomicU64, Ordering},
    Arc,
};
use std::time::SystemTime;

use alloy::primitives::U256;
use serde_json::Value;

use crate::{
    error::{AppError, Result},
    icon::{client::IconSdk, constants::DEFAULT_STEP_LIMIT},
    services::address_registry::AddressResolver,
    types::{
        ContractCallPayload, NetworkId, ReadPayload, TransactionHandle, WritePayload,
        TRANSACTION_VERSION,
    },
};

/// Contract roles used by the bindings.
pub mod roles {
    pub const BALN: &str = "baln";
    pub const SICX: &str = "sicx";
    pub const BNUSD: &str = "bnusd";
    pub const DEX: &str = "dex";
    pub const LOANS: &str = "loans";
    pub const STAKING: &str = "staking";
    pub const DIVIDENDS: &str = "dividends";
}

/// Per-client call settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContractSettings {
    /// Network the contracts live on.
    pub nid: NetworkId,
    /// Account used as `from` on writes and as the default owner on reads.
    pub account: Option<String>,
    /// Step limit attached to writes.
    pub step_limit: u64,
}

impl ContractSettings {
    /// Settings for a network with no bound account.
    pub fn new(nid: NetworkId) -> Self {
        Self { nid, account: None, step_limit: DEFAULT_STEP_LIMIT }
    }

    /// Bind an account.
    pub fn with_account(mut self, account: impl Into<String>) -> Self {
        self.account = Some(account.into());
        self
    }
}

/// Get current Unix timestamp in microseconds.
/// Returns 0 if system time is before Unix epoch (should never happen in practice).
fn current_timestamp_micros() -> u64 {
    SystemTime::now()
        .duration_since(SystemTime::UNIX_EPOCH)
        .map(|d| d.as_micros() as u64)
        .unwrap_or(0)
}

/// Client-side handle to one Balanced contract.
#[derive(Clone)]
pub struct Contract {
    sdk: Arc<dyn IconSdk>,
    resolver: Arc<dyn AddressResolver>,
    settings: ContractSettings,
    role: String,
    nonce: Arc<AtomicU64>,
}

impl Contract {
    /// Create a handle for the contract registered under `role`.
    pub fn new(
        sdk: Arc<dyn IconSdk>,
        resolver: Arc<dyn AddressResolver>,
        settings: ContractSettings,
        role: impl Into<String>,
    ) -> Self {
        Self { sdk, resolver, settings, role: role.into(), nonce: Arc::new(AtomicU64::new(1)) }
    }

    /// Draw nonces from `nonce` instead of a counter of its own.
    pub fn with_nonce(mut self, nonce: Arc<AtomicU64>) -> Self {
        self.nonce = nonce;
        self
    }

    /// Copy of this handle bound to another account.
    pub fn eject(&self, account: impl Into<String>) -> Self {
        Self { settings: self.settings.clone().with_account(account), ..self.clone() }
    }

    /// Role name in the address registry.
    pub fn role(&self) -> &str {
        &self.role
    }

    /// Network id.
    pub fn nid(&self) -> NetworkId {
        self.settings.nid
    }

    /// Bound account, if any.
    pub fn account(&self) -> Option<&str> {
        self.settings.account.as_deref()
    }

    /// Bound account, or a wallet error when none is bound.
    pub fn require_account(&self) -> Result<&str> {
        self.account().ok_or_else(|| {
            AppError::Wallet(format!("No account bound for {} contract call", self.role))
        })
    }

    /// This contract's address.
    pub fn address(&self) -> Result<String> {
        self.resolve(&self.role)
    }

    /// Address of another contract on the same network.
    pub fn resolve(&self, role: &str) -> Result<String> {
        Ok(self.resolver.resolve(self.settings.nid, role)?)
    }

    /// Build an `icx_call` payload.
    pub fn params_builder(&self, call: ContractCallPayload) -> Result<ReadPayload> {
        Ok(ReadPayload { to: self.address()?, from: self.settings.account.clone(), call })
    }

    /// Build an unsigned `icx_sendTransaction` payload.
    pub fn transaction_params_builder(&self, call: ContractCallPayload) -> Result<WritePayload> {
        let from = self.require_account()?.to_string();
        Ok(WritePayload {
            version: TRANSACTION_VERSION,
            from,
            to: self.address()?,
            step_limit: U256::from(self.settings.step_limit),
            timestamp: current_timestamp_micros(),
            nid: self.settings.nid,
            nonce: self.nonce.fetch_add(1, Ordering::Relaxed),
            call,
        })
    }

    /// Read path: run a read-only call and return the raw result.
    pub async fn call(&self, call: ContractCallPayload) -> Result<Value> {
        let payload = self.params_builder(call)?;
        tracing::debug!(
            role = %self.role,
            to = %payload.to,
            method = %payload.call.method,
            "Contract read"
        );
        self.sdk.call(&payload).await
    }

    /// Write path: submit a transaction and return its handle.
    pub async fn send(&self, call: ContractCallPayload) -> Result<TransactionHandle> {
        let payload = self.transaction_params_builder(call)?;
        tracing::info!(
            role = %self.role,
            to = %payload.to,
            method = %payload.call.method,
            "Contract write"
        );
        self.sdk.send_transaction(&payload).await
    }
}

impl std::fmt::Debug for Contract {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Contract")
            .field("role", &self.role)
            .field("settings", &self.settings)
            .finish()
    }
}

/// Reject a zero amount before anything is sent.
pub(crate) fn ensure_positive(value: U256) -> Result<()> {
    if value == U256::ZERO {
        return Err(AppError::InvalidParameter("Amount must be greater than zero".to_string()));
    }
    Ok(())
}
