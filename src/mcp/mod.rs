//! MCP server module.
//!
//! Contains the MCP server implementation with tool handlers.

pub mod server;

pub use server::BalancedServer;
pub use server::{
    GetBalanceInput, GetCollateralInfoInput, GetUnclaimedFeesInput, ListPairsInput,
    SetCollateralInputInput,
};
