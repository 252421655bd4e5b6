//! In-memory SDK for tests.
//!
//! [`MockSdk`] records every payload it receives and answers reads from
//! canned responses keyed by contract method.

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};

use alloy::primitives::U256;
use async_trait::async_trait;
use serde_json::Value;

use crate::{
    error::{AppError, Result},
    icon::client::IconSdk,
    types::{ReadPayload, TransactionHandle, WritePayload},
};

#[derive(Debug, Clone)]
enum Reply {
    Value(Value),
    Failure(String),
}

#[derive(Debug, Default)]
struct MockState {
    replies: HashMap<String, Reply>,
    balances: HashMap<String, U256>,
    reads: Vec<ReadPayload>,
    writes: Vec<WritePayload>,
}

/// Recording SDK with canned responses.
#[derive(Debug, Default)]
pub struct MockSdk {
    state: Mutex<MockState>,
}

impl MockSdk {
    /// Empty mock: every read fails until a response is registered.
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, MockState> {
        self.state.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Answer reads of `method` with `value`.
    pub fn respond(&self, method: &str, value: Value) {
        self.lock().replies.insert(method.to_string(), Reply::Value(value));
    }

    /// Fail reads of `method` with a remote-call error.
    pub fn fail(&self, method: &str, message: &str) {
        self.lock().replies.insert(method.to_string(), Reply::Failure(message.to_string()));
    }

    /// Set the ICX balance reported for `address`.
    pub fn set_balance(&self, address: &str, balance: U256) {
        self.lock().balances.insert(address.to_string(), balance);
    }

    /// Reads received so far.
    pub fn reads(&self) -> Vec<ReadPayload> {
        self.lock().reads.clone()
    }

    /// Number of reads of `method` received so far.
    pub fn read_count(&self, method: &str) -> usize {
        self.lock().reads.iter().filter(|r| r.call.method == method).count()
    }

    /// Writes received so far.
    pub fn writes(&self) -> Vec<WritePayload> {
        self.lock().writes.clone()
    }
}

#[async_trait]
impl IconSdk for MockSdk {
    async fn call(&self, payload: &ReadPayload) -> Result<Value> {
        let mut state = self.lock();
        state.reads.push(payload.clone());
        match state.replies.get(&payload.call.method) {
            Some(Reply::Value(value)) => Ok(value.clone()),
            Some(Reply::Failure(message)) => Err(AppError::RemoteCall(message.clone())),
            None => Err(AppError::RemoteCall(format!(
                "No mock response for method {}",
                payload.call.method
            ))),
        }
    }

    async fn send_transaction(&self, payload: &WritePayload) -> Result<TransactionHandle> {
        let mut state = self.lock();
        state.writes.push(payload.clone());
        Ok(TransactionHandle(format!("0x{:064x}", state.writes.len())))
    }

    async fn get_balance(&self, address: &str) -> Result<U256> {
        Ok(self.lock().balances.get(address).copied().unwrap_or(U256::ZERO))
    }
}
