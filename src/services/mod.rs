//! Business logic services module.

pub mod address_registry;
pub mod balanced;
pub mod token_registry;

pub use address_registry::{AddressRegistry, AddressResolver};
pub use balanced::BalancedClient;
pub use token_registry::TokenRegistry;
