//! Unclaimed-fees slice.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::types::MonetaryAmount;

/// Unclaimed fees per token address.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeesState {
    pub fees: HashMap<String, MonetaryAmount>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FeesAction {
    /// Replace the whole map.
    SetFees(HashMap<String, MonetaryAmount>),
}

impl FeesState {
    pub(crate) fn reduce(&mut self, action: FeesAction) {
        match action {
            FeesAction::SetFees(fees) => self.fees = fees,
        }
    }
}
