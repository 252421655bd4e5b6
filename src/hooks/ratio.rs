//! Exchange rates.

use rust_decimal::Decimal;

use crate::{
    error::Result,
    icon::contracts::staking,
    services::BalancedClient,
    store::{RatioAction, RatioState, Store},
    types::{u256_to_decimal, ICX_DECIMALS},
};

pub fn ratio(store: &Store) -> RatioState {
    store.select(|s| s.ratio.clone())
}

/// Set the ICX price in USD.
pub fn change_icx_usd_ratio(store: &Store, icx_usd_ratio: Decimal) {
    store.dispatch(RatioAction::ChangeRatio {
        sicx_icx_ratio: None,
        icx_usd_ratio: Some(icx_usd_ratio),
    });
}

/// Read today's sICX/ICX rate from the staking contract and store it.
pub async fn fetch_ratio(client: &BalancedClient, store: &Store) -> Result<Decimal> {
    let rate = staking::get_today_rate(&client.staking()).await?;
    let sicx_icx_ratio = u256_to_decimal(rate, ICX_DECIMALS)?;
    store.dispatch(RatioAction::ChangeRatio {
        sicx_icx_ratio: Some(sicx_icx_ratio),
        icx_usd_ratio: None,
    });
    Ok(sicx_icx_ratio)
}
