//! ICON SDK boundary and its JSON-RPC v3 implementation.

use std::sync::{
    atomic::{AtomicU64, Ordering},
    Arc,
};
use std::time::Duration;

use alloy::primitives::U256;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::{
    error::{AppError, Result},
    icon::{encoding::parse_hex_value, wallet::TransactionSigner},
    types::{ReadPayload, TransactionHandle, WritePayload},
};

/// The three node operations the contract layer depends on.
#[async_trait]
pub trait IconSdk: Send + Sync {
    /// Read-only contract call (`icx_call`). Returns the raw JSON result.
    async fn call(&self, payload: &ReadPayload) -> Result<Value>;

    /// Sign and submit a state-changing call (`icx_sendTransaction`).
    async fn send_transaction(&self, payload: &WritePayload) -> Result<TransactionHandle>;

    /// Native ICX balance of an address, in loop.
    async fn get_balance(&self, address: &str) -> Result<U256>;
}

/// JSON-RPC request envelope.
#[derive(Debug, Serialize)]
struct RpcRequest<'a> {
    jsonrpc: &'static str,
    id: u64,
    method: &'a str,
    #[serde(skip_serializing_if = "Value::is_null")]
    params: Value,
}

/// JSON-RPC error object.
#[derive(Debug, Deserialize)]
struct RpcErrorObject {
    code: i64,
    message: String,
}

/// JSON-RPC response envelope.
#[derive(Debug, Deserialize)]
struct RpcResponse {
    #[serde(default)]
    result: Option<Value>,
    #[serde(default)]
    error: Option<RpcErrorObject>,
}

impl RpcResponse {
    fn into_result(self) -> Result<Value> {
        if let Some(error) = self.error {
            return Err(AppError::RemoteCall(format!("{}: {}", error.code, error.message)));
        }
        self.result.ok_or_else(|| AppError::RemoteCall("Response has no result".into()))
    }
}

/// ICON JSON-RPC v3 client.
///
/// Note: no network call is made on construction. Write calls require a
/// signer; reads and balance queries work without one.
#[derive(Clone)]
pub struct IconRpcClient {
    http: reqwest::Client,
    rpc_url: String,
    signer: Option<Arc<dyn TransactionSigner>>,
    next_id: Arc<AtomicU64>,
}

impl IconRpcClient {
    /// Create a new client for the given endpoint.
    pub fn new(rpc_url: &str) -> Result<Self> {
        reqwest::Url::parse(rpc_url)
            .map_err(|_| AppError::Config(format!("Invalid RPC URL: {}", rpc_url)))?;

        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .map_err(|e| AppError::Transport(format!("Failed to create HTTP client: {}", e)))?;

        tracing::info!(rpc_url = %rpc_url, "ICON client created");

        Ok(Self {
            http,
            rpc_url: rpc_url.to_string(),
            signer: None,
            next_id: Arc::new(AtomicU64::new(1)),
        })
    }

    /// Attach the signer used for write calls.
    pub fn with_signer(mut self, signer: Arc<dyn TransactionSigner>) -> Self {
        self.signer = Some(signer);
        self
    }

    /// Endpoint URL.
    pub fn rpc_url(&self) -> &str {
        &self.rpc_url
    }

    async fn request(&self, method: &str, params: Value) -> Result<Value> {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        let request = RpcRequest { jsonrpc: "2.0", id, method, params };

        tracing::debug!(id = id, method = %method, "Sending JSON-RPC request");

        let response = self.http.post(&self.rpc_url).json(&request).send().await?;
        let status = response.status();

        // ICON reports contract failures with a 4xx status and a JSON error body.
        let body: RpcResponse = match response.json().await {
            Ok(body) => body,
            Err(_) if !status.is_success() => {
                return Err(AppError::Transport(format!("RPC endpoint returned status: {}", status)))
            }
            Err(e) => return Err(AppError::Parse(format!("Invalid JSON-RPC response: {}", e))),
        };

        body.into_result()
    }
}

#[async_trait]
impl IconSdk for IconRpcClient {
    async fn call(&self, payload: &ReadPayload) -> Result<Value> {
        tracing::debug!(to = %payload.to, method = %payload.call.method, "icx_call");
        self.request("icx_call", payload.to_rpc_params()).await
    }

    async fn send_transaction(&self, payload: &WritePayload) -> Result<TransactionHandle> {
        let signer = self
            .signer
            .as_ref()
            .ok_or_else(|| AppError::Wallet("No transaction signer configured".into()))?;

        if signer.address() != payload.from {
            return Err(AppError::Wallet(format!(
                "Signer {} cannot sign for {}",
                signer.address(),
                payload.from
            )));
        }

        let mut params = payload.to_rpc_params();
        let signature = signer.sign(&params).await?;
        if let Value::Object(map) = &mut params {
            map.insert("signature".to_string(), json!(signature));
        }

        tracing::info!(
            from = %payload.from,
            to = %payload.to,
            method = %payload.call.method,
            "icx_sendTransaction"
        );

        let result = self.request("icx_sendTransaction", params).await?;
        match result {
            Value::String(hash) => Ok(TransactionHandle(hash)),
            other => Err(AppError::Parse(format!("Expected transaction hash, got {}", other))),
        }
    }

    async fn get_balance(&self, address: &str) -> Result<U256> {
        tracing::debug!(address = %address, "icx_getBalance");
        let result = self.request("icx_getBalance", json!({ "address": address })).await?;
        parse_hex_value(&result)
    }
}

impl std::fmt::Debug for IconRpcClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("IconRpcClient")
            .field("rpc_url", &self.rpc_url)
            .field("signer", &self.signer.as_ref().map(|s| s.address().to_string()))
            .finish()
    }
}
