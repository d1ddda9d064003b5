//! Domain model for a time deposit and its withdrawal history.
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A single time deposit as the accrual logic sees it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeDeposit {
    /// Unique identifier, immutable once assigned
    pub id: i64,
    /// Plan tag selecting the interest rule. Unrecognized tags are kept
    /// as-is and accrue no interest.
    pub plan_type: String,
    /// Current balance. The only field the balance update mutates.
    pub balance: f64,
    /// Elapsed tenure in days
    pub days: i32,
}

impl TimeDeposit {
    pub fn new(id: i64, plan_type: impl Into<String>, balance: f64, days: i32) -> Self {
        Self {
            id,
            plan_type: plan_type.into(),
            balance,
            days,
        }
    }
}

/// A withdrawal made against a deposit. Interest accrual never touches these.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Withdrawal {
    pub id: i64,
    pub amount: f64,
    pub date: NaiveDate,
}

/// A deposit together with its withdrawals, ordered by date.
///
/// Only the read path uses this shape; accrual works on the plain deposit
/// and leaves withdrawal history untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeDepositWithWithdrawals {
    pub deposit: TimeDeposit,
    pub withdrawals: Vec<Withdrawal>,
}
