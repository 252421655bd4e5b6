//! Collateral accessors and the collateral-info fetch.

use async_trait::async_trait;
use rust_decimal::Decimal;
use tracing::debug;

use crate::{
    error::Result,
    hooks::polling::Refresh,
    icon::contracts::loans,
    services::BalancedClient,
    store::{
        selectors::{self, CollateralInputAmounts},
        CollateralAction, CollateralInput, Store, TypePayload,
    },
    types::loop_to_icx,
};

/// Read and write access to the collateral slice.
#[derive(Debug, Clone)]
pub struct CollateralHooks {
    store: Store,
}

impl CollateralHooks {
    pub fn new(store: Store) -> Self {
        Self { store }
    }

    pub fn change_deposited_amount(&self, deposited_amount: Decimal) {
        self.store.dispatch(CollateralAction::ChangeDepositedAmount { deposited_amount });
    }

    pub fn change_balance(&self, balance: Decimal) {
        self.store.dispatch(CollateralAction::ChangeBalance { balance });
    }

    /// ICX available in the wallet.
    pub fn available_amount(&self) -> Decimal {
        self.store.select(|s| s.collateral.balance)
    }

    /// sICX deposited as collateral.
    pub fn deposited_amount(&self) -> Decimal {
        self.store.select(|s| s.collateral.deposited_amount)
    }

    pub fn collateral_state(&self) -> CollateralInput {
        self.store.select(|s| s.collateral.state.clone())
    }

    pub fn collateral_type(&self, payload: TypePayload) {
        self.store.dispatch(CollateralAction::Type(payload));
    }

    /// Enter adjustment mode, or cancel it and reset the input.
    pub fn collateral_adjust(&self, is_adjust: bool) {
        if is_adjust {
            self.store.dispatch(CollateralAction::Adjust);
        } else {
            self.store.dispatch(CollateralAction::Cancel);
        }
    }

    pub fn deposited_amount_in_icx(&self) -> Decimal {
        self.store.select(selectors::deposited_amount_in_icx)
    }

    pub fn total_icx_amount(&self) -> Decimal {
        self.store.select(selectors::total_icx_amount)
    }

    pub fn collateral_input_amounts(&self) -> CollateralInputAmounts {
        self.store.select(selectors::collateral_input_amounts)
    }

    pub fn collateral_input_amount(&self) -> Decimal {
        self.store.select(selectors::collateral_input_amount)
    }

    pub fn collateral_input_amount_in_usd(&self) -> Decimal {
        self.store.select(selectors::collateral_input_amount_in_usd)
    }
}

/// Read `account`'s deposited sICX and ICX balance and store both.
///
/// The two reads run concurrently. Nothing is dispatched unless both succeed.
pub async fn fetch_collateral_info(
    client: &BalancedClient,
    store: &Store,
    account: &str,
) -> Result<()> {
    let bound = client.with_account(account)?;
    let loans_contract = bound.loans();

    let (positions, balance) = tokio::try_join!(
        loans::get_account_positions(&loans_contract),
        bound.icx_balance(account),
    )?;

    let deposited_amount = loop_to_icx(loans::collateral_sicx(&positions)?)?;
    let balance = loop_to_icx(balance)?;
    debug!(
        account = %account,
        deposited = %deposited_amount,
        balance = %balance,
        "Collateral info fetched"
    );

    store.dispatch(CollateralAction::ChangeDepositedAmount { deposited_amount });
    store.dispatch(CollateralAction::ChangeBalance { balance });
    Ok(())
}

/// Polls [`fetch_collateral_info`].
#[derive(Debug, Clone)]
pub struct CollateralRefresher {
    client: BalancedClient,
    store: Store,
}

impl CollateralRefresher {
    pub fn new(client: BalancedClient, store: Store) -> Self {
        Self { client, store }
    }
}

#[async_trait]
impl Refresh for CollateralRefresher {
    fn name(&self) -> &'static str {
        "collateral"
    }

    async fn refresh(&self, account: &str) -> Result<()> {
        fetch_collateral_info(&self.client, &self.store, account).await
    }
}
