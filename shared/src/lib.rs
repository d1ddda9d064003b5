use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A time deposit as it appears on the wire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeDeposit {
    pub id: i64,
    /// Plan tag selecting the interest rule ("basic", "premium", "student")
    pub plan_type: String,
    /// Current balance, rounded to cents
    pub balance: f64,
    /// Elapsed tenure in days
    pub days: i32,
}

/// A withdrawal made against a deposit. Read-only on this API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Withdrawal {
    pub id: i64,
    pub amount: f64,
    /// Calendar date of the withdrawal (ISO 8601)
    pub date: NaiveDate,
}

/// A time deposit together with its withdrawal history, ordered by date
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeDepositWithWithdrawals {
    pub id: i64,
    pub plan_type: String,
    pub balance: f64,
    pub days: i32,
    pub withdrawals: Vec<Withdrawal>,
}

/// Response body for the balance-update endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpdateBalanceResponse {
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deposit_serializes_with_camel_case_field_names() {
        let deposit = TimeDeposit {
            id: 1,
            plan_type: "basic".to_string(),
            balance: 12000.0,
            days: 60,
        };

        let json = serde_json::to_value(&deposit).unwrap();
        assert_eq!(json["planType"], "basic");
        assert_eq!(json["balance"], 12000.0);
        assert_eq!(json["days"], 60);
    }

    #[test]
    fn deposit_with_withdrawals_round_trips() {
        let deposit = TimeDepositWithWithdrawals {
            id: 2,
            plan_type: "premium".to_string(),
            balance: 10000.0,
            days: 180,
            withdrawals: vec![Withdrawal {
                id: 201,
                amount: 500.0,
                date: NaiveDate::from_ymd_opt(2025, 3, 15).unwrap(),
            }],
        };

        let json = serde_json::to_string(&deposit).unwrap();
        let parsed: TimeDepositWithWithdrawals = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, deposit);
    }
}
