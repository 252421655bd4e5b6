//! Trading pair types.

use rust_decimal::Decimal;
use serde::Serialize;

use super::NetworkId;

/// A trading pair supported by the Balanced DEX.
///
/// Identity is `(network_id, id)`; entries are static and never mutated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PairInfo {
    /// Network the pair is deployed on.
    pub network_id: NetworkId,
    /// Pool id on the DEX contract.
    pub id: u32,
    /// Display name (e.g., "sICX/ICX").
    pub name: &'static str,
    /// Base currency symbol.
    pub base_currency_key: &'static str,
    /// Quote currency symbol.
    pub quote_currency_key: &'static str,
    /// Share of daily BALN rewards allocated to the pool.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rewards: Option<Decimal>,
}

impl PairInfo {
    /// Whether either side of the pair is the given currency.
    pub fn contains(&self, currency_key: &str) -> bool {
        self.base_currency_key == currency_key || self.quote_currency_key == currency_key
    }
}
