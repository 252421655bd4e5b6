//! Exchange-rate slice.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RatioState {
    /// ICX per sICX.
    pub sicx_icx_ratio: Decimal,
    /// USD per ICX.
    pub icx_usd_ratio: Decimal,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RatioAction {
    /// Update the rates that are present.
    ChangeRatio { sicx_icx_ratio: Option<Decimal>, icx_usd_ratio: Option<Decimal> },
}

impl RatioState {
    pub(crate) fn reduce(&mut self, action: RatioAction) {
        match action {
            RatioAction::ChangeRatio { sicx_icx_ratio, icx_usd_ratio } => {
                if let Some(ratio) = sicx_icx_ratio {
                    self.sicx_icx_ratio = ratio;
                }
                if let Some(ratio) = icx_usd_ratio {
                    self.icx_usd_ratio = ratio;
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_change_ratio_keeps_absent_rates() {
        let mut state = RatioState::default();
        state.reduce(RatioAction::ChangeRatio {
            sicx_icx_ratio: Some(Decimal::new(105, 2)),
            icx_usd_ratio: Some(Decimal::new(8, 1)),
        });
        state.reduce(RatioAction::ChangeRatio {
            sicx_icx_ratio: None,
            icx_usd_ratio: Some(Decimal::new(9, 1)),
        });

        assert_eq!(state.sicx_icx_ratio, Decimal::new(105, 2));
        assert_eq!(state.icx_usd_ratio, Decimal::new(9, 1));
    }
}
