//! Collateral slice: deposited sICX, available ICX and the pending
//! collateral-adjustment input.

use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// The two linked input fields of the collateral form.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    /// Collateral to keep deposited.
    #[default]
    Left,
    /// Collateral left available in the wallet.
    Right,
}

impl Field {
    /// The other field.
    pub fn dependent(self) -> Self {
        match self {
            Field::Left => Field::Right,
            Field::Right => Field::Left,
        }
    }
}

impl FromStr for Field {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "left" => Ok(Field::Left),
            "right" => Ok(Field::Right),
            other => Err(AppError::InvalidParameter(format!(
                "Unknown field '{}', expected 'left' or 'right'",
                other
            ))),
        }
    }
}

/// How the typed value was entered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InputType {
    Slider,
    #[default]
    Text,
}

impl FromStr for InputType {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "slider" => Ok(InputType::Slider),
            "text" => Ok(InputType::Text),
            other => Err(AppError::InvalidParameter(format!(
                "Unknown input type '{}', expected 'slider' or 'text'",
                other
            ))),
        }
    }
}

/// Interaction mode of the collateral panel.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CollateralMode {
    #[default]
    Idle,
    Adjusting,
}

/// Transient user input.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CollateralInput {
    pub mode: CollateralMode,
    pub independent_field: Field,
    pub typed_value: String,
    pub input_type: InputType,
}

/// Collateral slice state.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CollateralState {
    /// sICX deposited as collateral.
    pub deposited_amount: Decimal,
    /// ICX available in the wallet.
    pub balance: Decimal,
    pub state: CollateralInput,
}

/// Partial update of the input fields; absent fields are kept.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypePayload {
    #[serde(default)]
    pub independent_field: Option<Field>,
    #[serde(default)]
    pub typed_value: Option<String>,
    #[serde(default)]
    pub input_type: Option<InputType>,
}

/// Collateral actions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CollateralAction {
    ChangeBalance { balance: Decimal },
    ChangeDepositedAmount { deposited_amount: Decimal },
    Type(TypePayload),
    Adjust,
    Cancel,
}

impl CollateralState {
    pub(crate) fn reduce(&mut self, action: CollateralAction) {
        match action {
            CollateralAction::ChangeBalance { balance } => self.balance = balance,
            CollateralAction::ChangeDepositedAmount { deposited_amount } => {
                self.deposited_amount = deposited_amount
            }
            CollateralAction::Type(payload) => {
                if let Some(field) = payload.independent_field {
                    self.state.independent_field = field;
                }
                if let Some(value) = payload.typed_value {
                    self.state.typed_value = value;
                }
                if let Some(input_type) = payload.input_type {
                    self.state.input_type = input_type;
                }
            }
            CollateralAction::Adjust => self.state.mode = CollateralMode::Adjusting,
            CollateralAction::Cancel => self.state = CollateralInput::default(),
        }
    }
}
