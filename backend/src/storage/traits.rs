//! Storage trait and error taxonomy for the deposit store.

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::models::deposit::{TimeDeposit, TimeDepositWithWithdrawals};

/// Failures a deposit store can surface.
///
/// The domain layer performs no recovery; these propagate unchanged to the
/// caller, and a failed bulk write leaves the stored state untouched.
#[derive(Debug, Error)]
pub enum StorageError {
    /// The backing store could not complete a read or write
    #[error("backing store unavailable: {0}")]
    Unavailable(String),

    /// A write violated a storage-level constraint
    #[error("storage constraint violated: {0}")]
    ConstraintViolation(String),
}

/// Bulk read/write contract for time deposits.
///
/// `update_all` is an upsert-merge: existing ids are overwritten, new ids
/// inserted, and repeated ids within one call resolve last-write-wins.
#[async_trait]
pub trait TimeDepositStorage: Send + Sync {
    /// Current stored deposits, ordered by id
    async fn get_all(&self) -> Result<Vec<TimeDeposit>, StorageError>;

    /// Current stored deposits with their withdrawals ordered by date
    async fn get_all_with_withdrawals(
        &self,
    ) -> Result<Vec<TimeDepositWithWithdrawals>, StorageError>;

    /// Persist the given collection in a single logical write
    async fn update_all(&self, deposits: &[TimeDeposit]) -> Result<(), StorageError>;
}
