//! Deposit use cases: the monthly balance update and the read path.

use std::sync::Arc;

use tracing::info;

use crate::domain::interest::InterestCalculatorSet;
use crate::domain::models::deposit::{TimeDeposit, TimeDepositWithWithdrawals};
use crate::storage::{StorageError, TimeDepositStorage};

/// Service orchestrating interest accrual and deposit reads.
#[derive(Clone)]
pub struct DepositService {
    store: Arc<dyn TimeDepositStorage>,
    calculators: Arc<InterestCalculatorSet>,
}

impl DepositService {
    pub fn new(store: Arc<dyn TimeDepositStorage>, calculators: Arc<InterestCalculatorSet>) -> Self {
        Self { store, calculators }
    }

    /// Apply one month of interest to every stored deposit and persist the
    /// updated collection through a single bulk write.
    ///
    /// Deposits whose plan has no registered rule accrue nothing and are
    /// written back unchanged. The accrual step is pure and runs entirely
    /// before the write; storage failures propagate to the caller with no
    /// retry, leaving the stored state as it was.
    pub async fn update_balances(&self) -> Result<(), StorageError> {
        let deposits = self.store.get_all().await?;
        info!("Applying monthly interest to {} deposits", deposits.len());

        let updated = self.apply_monthly_interest(deposits);
        self.store.update_all(&updated).await?;

        info!("Persisted {} updated balances", updated.len());
        Ok(())
    }

    /// Pure accrual step: new records with interest added to the balance
    /// and every other field carried over untouched.
    fn apply_monthly_interest(&self, deposits: Vec<TimeDeposit>) -> Vec<TimeDeposit> {
        deposits
            .into_iter()
            .map(|deposit| {
                let interest = self
                    .calculators
                    .for_plan(&deposit.plan_type)
                    .map(|calculator| calculator.interest_for(&deposit))
                    .unwrap_or(0.0);
                TimeDeposit {
                    balance: deposit.balance + interest,
                    ..deposit
                }
            })
            .collect()
    }

    /// All stored deposits with their withdrawal histories.
    pub async fn get_all_deposits(
        &self,
    ) -> Result<Vec<TimeDepositWithWithdrawals>, StorageError> {
        self.store.get_all_with_withdrawals().await
    }
}
