//! Pure derivations over [`AppState`].
//!
//! The dependent collateral field is never stored; it is always
//! `total - independent`.

use std::str::FromStr;

use rust_decimal::Decimal;
use serde::Serialize;

use super::{AppState, Field};

/// Both collateral input fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CollateralInputAmounts {
    pub left: Decimal,
    pub right: Decimal,
}

/// Deposited sICX valued in ICX.
pub fn deposited_amount_in_icx(state: &AppState) -> Decimal {
    state.collateral.deposited_amount.saturating_mul(state.ratio.sicx_icx_ratio)
}

/// Deposited collateral plus wallet balance, in ICX.
pub fn total_icx_amount(state: &AppState) -> Decimal {
    deposited_amount_in_icx(state).saturating_add(state.collateral.balance)
}

/// Parse the typed value. Empty or unparsable input counts as zero.
fn typed_amount(typed_value: &str) -> Decimal {
    let trimmed = typed_value.trim();
    if trimmed.is_empty() {
        return Decimal::ZERO;
    }
    Decimal::from_str(trimmed).unwrap_or(Decimal::ZERO)
}

pub fn collateral_input_amounts(state: &AppState) -> CollateralInputAmounts {
    let input = &state.collateral.state;
    let independent = typed_amount(&input.typed_value);
    let dependent = total_icx_amount(state).saturating_sub(independent);

    match input.independent_field {
        Field::Left => CollateralInputAmounts { left: independent, right: dependent },
        Field::Right => CollateralInputAmounts { left: dependent, right: independent },
    }
}

/// Collateral the user wants deposited, in ICX.
pub fn collateral_input_amount(state: &AppState) -> Decimal {
    collateral_input_amounts(state).left
}

pub fn collateral_input_amount_in_usd(state: &AppState) -> Decimal {
    collateral_input_amount(state).saturating_mul(state.ratio.icx_usd_ratio)
}
