//! Type definitions module.
//!
//! Contains shared types used across the application.

pub mod pair;
pub mod payload;
pub mod token;

pub use pair::*;
pub use payload::*;
pub use token::*;

/// ICON network id (`nid`).
pub type NetworkId = u64;
