//! Application state store.
//!
//! State is held in a `tokio::sync::watch` channel. Every action is applied
//! inside `send_modify`, so mutations are serialized and subscribers always
//! observe whole snapshots.

pub mod collateral;
pub mod fees;
pub mod ratio;
pub mod selectors;

use std::sync::Arc;

use serde::Serialize;
use tokio::sync::watch;

pub use collateral::{
    CollateralAction, CollateralInput, CollateralMode, CollateralState, Field, InputType,
    TypePayload,
};
pub use fees::{FeesAction, FeesState};
pub use ratio::{RatioAction, RatioState};

/// Snapshot of every slice.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct AppState {
    pub collateral: CollateralState,
    pub fees: FeesState,
    pub ratio: RatioState,
}

/// Any action accepted by the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Collateral(CollateralAction),
    Fees(FeesAction),
    Ratio(RatioAction),
}

impl From<CollateralAction> for Action {
    fn from(action: CollateralAction) -> Self {
        Action::Collateral(action)
    }
}

impl From<FeesAction> for Action {
    fn from(action: FeesAction) -> Self {
        Action::Fees(action)
    }
}

impl From<RatioAction> for Action {
    fn from(action: RatioAction) -> Self {
        Action::Ratio(action)
    }
}

impl AppState {
    fn reduce(&mut self, action: Action) {
        match action {
            Action::Collateral(action) => self.collateral.reduce(action),
            Action::Fees(action) => self.fees.reduce(action),
            Action::Ratio(action) => self.ratio.reduce(action),
        }
    }
}

/// Shared handle to the application state.
#[derive(Debug, Clone)]
pub struct Store {
    tx: Arc<watch::Sender<AppState>>,
}

impl Default for Store {
    fn default() -> Self {
        Self::new()
    }
}

impl Store {
    /// Store with every slice at its initial state.
    pub fn new() -> Self {
        Self::with_state(AppState::default())
    }

    pub fn with_state(state: AppState) -> Self {
        let (tx, _rx) = watch::channel(state);
        Self { tx: Arc::new(tx) }
    }

    /// Apply an action and notify subscribers.
    pub fn dispatch(&self, action: impl Into<Action>) {
        let action = action.into();
        tracing::debug!(action = ?action, "Dispatch");
        self.tx.send_modify(|state| state.reduce(action));
    }

    /// Clone of the current state.
    pub fn state(&self) -> AppState {
        self.tx.borrow().clone()
    }

    /// Project the current state without cloning all of it.
    pub fn select<T>(&self, selector: impl FnOnce(&AppState) -> T) -> T {
        selector(&self.tx.borrow())
    }

    /// Receiver that is notified after every dispatch.
    pub fn subscribe(&self) -> watch::Receiver<AppState> {
        self.tx.subscribe()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    #[test]
    fn test_dispatch_routes_to_slice() {
        let store = Store::new();
        store.dispatch(CollateralAction::ChangeBalance { balance: Decimal::new(3, 0) });
        store.dispatch(RatioAction::ChangeRatio {
            sicx_icx_ratio: Some(Decimal::ONE),
            icx_usd_ratio: None,
        });

        let state = store.state();
        assert_eq!(state.collateral.balance, Decimal::new(3, 0));
        assert_eq!(state.ratio.sicx_icx_ratio, Decimal::ONE);
        assert!(state.fees.fees.is_empty());
    }

    #[test]
    fn test_clones_share_state() {
        let store = Store::new();
        let other = store.clone();
        other.dispatch(CollateralAction::Adjust);
        assert_eq!(store.select(|s| s.collateral.state.mode), CollateralMode::Adjusting);
    }

    #[tokio::test]
    async fn test_subscribers_see_dispatch() {
        let store = Store::new();
        let mut rx = store.subscribe();

        store.dispatch(CollateralAction::ChangeDepositedAmount {
            deposited_amount: Decimal::new(7, 0),
        });

        rx.changed().await.unwrap();
        assert_eq!(rx.borrow_and_update().collateral.deposited_amount, Decimal::new(7, 0));
    }
}
