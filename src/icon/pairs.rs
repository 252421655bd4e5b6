//! Trading pairs supported by the Balanced DEX.

use rust_decimal::Decimal;

use crate::types::{NetworkId, PairInfo};

use super::constants::{MAINNET_NID, YEOUIDO_NID};

const fn rate(mantissa: u32, scale: u32) -> Option<Decimal> {
    Some(Decimal::from_parts(mantissa, 0, 0, false, scale))
}

const fn pair(
    network_id: NetworkId,
    id: u32,
    name: &'static str,
    base_currency_key: &'static str,
    quote_currency_key: &'static str,
    rewards: Option<Decimal>,
) -> PairInfo {
    PairInfo { network_id, id, name, base_currency_key, quote_currency_key, rewards }
}

/// Every supported pair on every network.
pub const SUPPORTED_PAIRS_INFO: &[PairInfo] = &[
    // Mainnet
    pair(MAINNET_NID, 1, "sICX/ICX", "sICX", "ICX", rate(1, 1)),
    pair(MAINNET_NID, 2, "sICX/bnUSD", "sICX", "bnUSD", rate(175, 3)),
    pair(MAINNET_NID, 3, "BALN/bnUSD", "BALN", "bnUSD", rate(175, 3)),
    pair(MAINNET_NID, 4, "BALN/sICX", "BALN", "sICX", rate(5, 2)),
    pair(MAINNET_NID, 5, "IUSDC/bnUSD", "IUSDC", "bnUSD", None),
    pair(MAINNET_NID, 7, "OMM/sICX", "OMM", "sICX", None),
    pair(MAINNET_NID, 6, "OMM/IUSDC", "OMM", "IUSDC", None),
    pair(MAINNET_NID, 8, "OMM/USDS", "OMM", "USDS", None),
    // Yeouido
    pair(YEOUIDO_NID, 1, "sICX/ICX", "sICX", "ICX", rate(1, 1)),
    pair(YEOUIDO_NID, 2, "sICX/bnUSD", "sICX", "bnUSD", rate(175, 3)),
    pair(YEOUIDO_NID, 3, "BALN/bnUSD", "BALN", "bnUSD", rate(175, 3)),
    pair(YEOUIDO_NID, 4, "BALN/sICX", "BALN", "sICX", rate(5, 2)),
    pair(YEOUIDO_NID, 22, "OMM/IUSDC", "OMM", "IUSDC", None),
    pair(YEOUIDO_NID, 20, "OMM/sICX", "OMM", "sICX", None),
    pair(YEOUIDO_NID, 21, "OMM/USDS", "OMM", "USDS", None),
];

/// Pairs deployed on a network, in catalog order.
pub fn pairs_for_network(network_id: NetworkId) -> impl Iterator<Item = &'static PairInfo> {
    SUPPORTED_PAIRS_INFO.iter().filter(move |p| p.network_id == network_id)
}

/// Look up a pair by identity.
pub fn find_pair(network_id: NetworkId, id: u32) -> Option<&'static PairInfo> {
    SUPPORTED_PAIRS_INFO.iter().find(|p| p.network_id == network_id && p.id == id)
}

/// Look up a pair by display name (e.g., "BALN/bnUSD").
pub fn find_pair_by_name(network_id: NetworkId, name: &str) -> Option<&'static PairInfo> {
    pairs_for_network(network_id).find(|p| p.name == name)
}
