//! In-memory deposit store.
//!
//! Mirrors the SQLite adapter's semantics (upsert-merge writes, id-ordered
//! reads) without a database. Used by the domain and handler tests.

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};

use async_trait::async_trait;

use super::traits::{StorageError, TimeDepositStorage};
use crate::domain::models::deposit::{TimeDeposit, TimeDepositWithWithdrawals, Withdrawal};

#[derive(Default)]
struct Inner {
    deposits: HashMap<i64, TimeDeposit>,
    withdrawals: HashMap<i64, Vec<Withdrawal>>,
}

/// Deposit store keeping everything behind a mutex.
#[derive(Default)]
pub struct InMemoryDepositStore {
    inner: Mutex<Inner>,
}

impl InMemoryDepositStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populate the store with deposits.
    pub fn with_deposits(deposits: Vec<TimeDeposit>) -> Self {
        let store = Self::new();
        {
            let mut inner = store.lock();
            for deposit in deposits {
                inner.deposits.insert(deposit.id, deposit);
            }
        }
        store
    }

    /// Attach withdrawals to a stored deposit, kept ordered by date.
    pub fn add_withdrawals(&self, deposit_id: i64, withdrawals: Vec<Withdrawal>) {
        let mut inner = self.lock();
        let entry = inner.withdrawals.entry(deposit_id).or_default();
        entry.extend(withdrawals);
        entry.sort_by(|a, b| (a.date, a.id).cmp(&(b.date, b.id)));
    }

    fn lock(&self) -> MutexGuard<'_, Inner> {
        self.inner.lock().expect("deposit store lock poisoned")
    }
}

#[async_trait]
impl TimeDepositStorage for InMemoryDepositStore {
    async fn get_all(&self) -> Result<Vec<TimeDeposit>, StorageError> {
        let inner = self.lock();
        let mut deposits: Vec<TimeDeposit> = inner.deposits.values().cloned().collect();
        deposits.sort_by_key(|deposit| deposit.id);
        Ok(deposits)
    }

    async fn get_all_with_withdrawals(
        &self,
    ) -> Result<Vec<TimeDepositWithWithdrawals>, StorageError> {
        let deposits = self.get_all().await?;
        let inner = self.lock();
        Ok(deposits
            .into_iter()
            .map(|deposit| {
                let withdrawals = inner
                    .withdrawals
                    .get(&deposit.id)
                    .cloned()
                    .unwrap_or_default();
                TimeDepositWithWithdrawals {
                    deposit,
                    withdrawals,
                }
            })
            .collect())
    }

    async fn update_all(&self, deposits: &[TimeDeposit]) -> Result<(), StorageError> {
        let mut inner = self.lock();
        // Applying in input order makes repeated ids last-write-wins
        for deposit in deposits {
            inner.deposits.insert(deposit.id, deposit.clone());
        }
        Ok(())
    }
}
