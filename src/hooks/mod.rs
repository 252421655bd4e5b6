//! Bindings between the contract proxies and the store.
//!
//! Accessors read and write slices, fetch functions call a proxy and
//! dispatch the transformed result, and [`PollingHook`] repeats a fetch on
//! a timer for a bound account.

pub mod collateral;
pub mod fees;
pub mod polling;
pub mod ratio;

pub use collateral::{fetch_collateral_info, CollateralHooks, CollateralRefresher};
pub use fees::{fetch_unclaimed_fees, unclaimed_fees, FeesRefresher};
pub use polling::{PollingHook, PollingState, Refresh};
pub use ratio::{change_icx_usd_ratio, fetch_ratio};
