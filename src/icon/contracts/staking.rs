//! Staking contract: sICX/ICX exchange rate.

use alloy::primitives::U256;

use crate::{error::Result, icon::encoding::parse_hex_value, types::ContractCallPayload};

use super::Contract;

/// ICX per sICX, scaled by 10^18.
pub async fn get_today_rate(contract: &Contract) -> Result<U256> {
    parse_hex_value(&contract.call(ContractCallPayload::new("getTodayRate")).await?)
}
