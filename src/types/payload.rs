//! Contract call payloads sent through the ICON SDK boundary.

use alloy::primitives::U256;
use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};

use crate::icon::encoding::{to_hex_amount, to_hex_u64};

use super::NetworkId;

/// ICON transaction protocol version.
pub const TRANSACTION_VERSION: u64 = 3;

/// A single contract method invocation: the `data` object of an ICON call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContractCallPayload {
    /// Contract method name.
    pub method: String,
    /// Method parameters, in insertion order.
    #[serde(default, skip_serializing_if = "Map::is_empty")]
    pub params: Map<String, Value>,
}

impl ContractCallPayload {
    /// Payload for a method without parameters.
    pub fn new(method: impl Into<String>) -> Self {
        Self { method: method.into(), params: Map::new() }
    }

    /// Add a parameter.
    pub fn param(mut self, key: &str, value: impl Into<Value>) -> Self {
        self.params.insert(key.to_string(), value.into());
        self
    }

    /// Add a parameter only when a value is present.
    pub fn param_opt(self, key: &str, value: Option<impl Into<Value>>) -> Self {
        match value {
            Some(value) => self.param(key, value),
            None => self,
        }
    }
}

/// Parameters of an `icx_call` read.
#[derive(Debug, Clone, PartialEq)]
pub struct ReadPayload {
    /// Contract address.
    pub to: String,
    /// Optional caller address.
    pub from: Option<String>,
    /// Method invocation.
    pub call: ContractCallPayload,
}

impl ReadPayload {
    /// JSON-RPC `params` object.
    pub fn to_rpc_params(&self) -> Value {
        let mut params = Map::new();
        if let Some(from) = &self.from {
            params.insert("from".to_string(), json!(from));
        }
        params.insert("to".to_string(), json!(self.to));
        params.insert("dataType".to_string(), json!("call"));
        params.insert("data".to_string(), json!(self.call));
        Value::Object(params)
    }
}

/// Parameters of an unsigned `icx_sendTransaction` write.
#[derive(Debug, Clone, PartialEq)]
pub struct WritePayload {
    /// Protocol version.
    pub version: u64,
    /// Sender address.
    pub from: String,
    /// Contract address.
    pub to: String,
    /// Maximum steps the transaction may consume.
    pub step_limit: U256,
    /// Creation time in microseconds since the Unix epoch.
    pub timestamp: u64,
    /// Network id.
    pub nid: NetworkId,
    /// Sender-chosen nonce.
    pub nonce: u64,
    /// Method invocation.
    pub call: ContractCallPayload,
}

impl WritePayload {
    /// JSON-RPC `params` object, without signature.
    pub fn to_rpc_params(&self) -> Value {
        let mut params = Map::new();
        params.insert("version".to_string(), json!(to_hex_u64(self.version)));
        params.insert("from".to_string(), json!(self.from));
        params.insert("to".to_string(), json!(self.to));
        params.insert("stepLimit".to_string(), json!(to_hex_amount(self.step_limit)));
        params.insert("timestamp".to_string(), json!(to_hex_u64(self.timestamp)));
        params.insert("nid".to_string(), json!(to_hex_u64(self.nid)));
        params.insert("nonce".to_string(), json!(to_hex_u64(self.nonce)));
        params.insert("dataType".to_string(), json!("call"));
        params.insert("data".to_string(), json!(self.call));
        Value::Object(params)
    }
}

/// Hash of a submitted transaction. Confirmation is tracked by the caller.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TransactionHandle(pub String);

impl TransactionHandle {
    /// Transaction hash (`0x...`).
    pub fn hash(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for TransactionHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// The `_value` argument of an IRC2 transfer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransferValue {
    /// Raw amount, hex-encoded when the payload is built.
    Amount(U256),
    /// Amount the caller already hex-encoded; passed through the hex step unchanged.
    Hex(String),
}

impl From<U256> for TransferValue {
    fn from(value: U256) -> Self {
        TransferValue::Amount(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_call() -> ContractCallPayload {
        ContractCallPayload::new("balanceOf")
            .param("_owner", "hx0000000000000000000000000000000000000001")
    }

    #[test]
    fn test_call_payload_omits_empty_params() {
        let json = serde_json::to_string(&ContractCallPayload::new("totalSupply")).unwrap();
        assert_eq!(json, r#"{"method":"totalSupply"}"#);
    }

    #[test]
    fn test_call_payload_param_opt() {
        let call = ContractCallPayload::new("transfer")
            .param("_to", "hx01")
            .param_opt("_data", None::<String>);
        assert!(!call.params.contains_key("_data"));

        let call = call.param_opt("_data", Some("0x7b7d"));
        assert_eq!(call.params["_data"], "0x7b7d");
    }

    #[test]
    fn test_call_payload_preserves_param_order() {
        let call = ContractCallPayload::new("transfer")
            .param("_to", "cx01")
            .param("_value", "0x64")
            .param("_data", "0x7b7d");
        let keys: Vec<&String> = call.params.keys().collect();
        assert_eq!(keys, ["_to", "_value", "_data"]);
    }

    #[test]
    fn test_read_payload_rpc_params() {
        let payload = ReadPayload { to: "cx01".to_string(), from: None, call: sample_call() };
        let params = payload.to_rpc_params();

        assert_eq!(params["to"], "cx01");
        assert_eq!(params["dataType"], "call");
        assert_eq!(params["data"]["method"], "balanceOf");
        assert!(params.get("from").is_none());
    }

    #[test]
    fn test_write_payload_rpc_params() {
        let payload = WritePayload {
            version: TRANSACTION_VERSION,
            from: "hx01".to_string(),
            to: "cx02".to_string(),
            step_limit: U256::from(1_000_000u64),
            timestamp: 1_600_000_000_000_000,
            nid: 1,
            nonce: 1,
            call: ContractCallPayload::new("stake").param("_value", "0x64"),
        };
        let params = payload.to_rpc_params();

        assert_eq!(params["version"], "0x3");
        assert_eq!(params["stepLimit"], "0xf4240");
        assert_eq!(params["nid"], "0x1");
        assert_eq!(params["timestamp"], "0x5af3107a40000");
        assert_eq!(params["data"]["params"]["_value"], "0x64");
        assert!(params.get("value").is_none());
        assert!(params.get("signature").is_none());
    }

    #[test]
    fn test_transaction_handle_serializes_as_string() {
        let handle = TransactionHandle("0xabc".to_string());
        assert_eq!(serde_json::to_string(&handle).unwrap(), "\"0xabc\"");
        assert_eq!(handle.to_string(), "0xabc");
    }
}
