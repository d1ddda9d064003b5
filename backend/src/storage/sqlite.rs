//! SQLite-backed deposit store.

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::NaiveDate;
use sqlx::error::ErrorKind;
use sqlx::sqlite::SqliteRow;
use sqlx::Row;

use super::traits::{StorageError, TimeDepositStorage};
use crate::db::DbConnection;
use crate::domain::models::deposit::{TimeDeposit, TimeDepositWithWithdrawals, Withdrawal};

/// Deposit store backed by the shared SQLite pool.
#[derive(Clone)]
pub struct SqliteDepositStore {
    db: DbConnection,
}

impl SqliteDepositStore {
    pub fn new(db: DbConnection) -> Self {
        Self { db }
    }

    /// Remove every stored deposit and withdrawal.
    pub async fn clear_all(&self) -> Result<(), StorageError> {
        let mut tx = self.db.pool().begin().await.map_err(classify)?;
        sqlx::query("DELETE FROM withdrawals")
            .execute(&mut *tx)
            .await
            .map_err(classify)?;
        sqlx::query("DELETE FROM time_deposits")
            .execute(&mut *tx)
            .await
            .map_err(classify)?;
        tx.commit().await.map_err(classify)
    }

    /// Insert a deposit together with its withdrawals in one transaction.
    ///
    /// Unlike `update_all` this is a plain insert, so an existing id
    /// surfaces as a constraint violation.
    pub async fn insert_deposit_with_withdrawals(
        &self,
        entry: &TimeDepositWithWithdrawals,
    ) -> Result<(), StorageError> {
        let mut tx = self.db.pool().begin().await.map_err(classify)?;

        sqlx::query("INSERT INTO time_deposits (id, plan_type, balance, days) VALUES (?, ?, ?, ?)")
            .bind(entry.deposit.id)
            .bind(&entry.deposit.plan_type)
            .bind(entry.deposit.balance)
            .bind(entry.deposit.days)
            .execute(&mut *tx)
            .await
            .map_err(classify)?;

        for withdrawal in &entry.withdrawals {
            sqlx::query(
                "INSERT INTO withdrawals (id, time_deposit_id, amount, date) VALUES (?, ?, ?, ?)",
            )
            .bind(withdrawal.id)
            .bind(entry.deposit.id)
            .bind(withdrawal.amount)
            .bind(withdrawal.date.to_string())
            .execute(&mut *tx)
            .await
            .map_err(classify)?;
        }

        tx.commit().await.map_err(classify)
    }
}

/// Classify a sqlx failure into the storage taxonomy.
fn classify(err: sqlx::Error) -> StorageError {
    if let sqlx::Error::Database(db_err) = &err {
        match db_err.kind() {
            ErrorKind::UniqueViolation
            | ErrorKind::ForeignKeyViolation
            | ErrorKind::NotNullViolation
            | ErrorKind::CheckViolation => {
                return StorageError::ConstraintViolation(db_err.message().to_string());
            }
            _ => {}
        }
    }
    StorageError::Unavailable(err.to_string())
}

fn deposit_from_row(row: &SqliteRow) -> TimeDeposit {
    TimeDeposit {
        id: row.get("id"),
        plan_type: row.get("plan_type"),
        balance: row.get("balance"),
        days: row.get("days"),
    }
}

/// Dates are stored as ISO 8601 text; parsing happens at this boundary.
fn parse_stored_date(raw: &str) -> Result<NaiveDate, StorageError> {
    raw.parse::<NaiveDate>()
        .map_err(|e| StorageError::Unavailable(format!("invalid stored date '{}': {}", raw, e)))
}

#[async_trait]
impl TimeDepositStorage for SqliteDepositStore {
    async fn get_all(&self) -> Result<Vec<TimeDeposit>, StorageError> {
        let rows =
            sqlx::query("SELECT id, plan_type, balance, days FROM time_deposits ORDER BY id")
                .fetch_all(self.db.pool())
                .await
                .map_err(classify)?;

        Ok(rows.iter().map(deposit_from_row).collect())
    }

    async fn get_all_with_withdrawals(
        &self,
    ) -> Result<Vec<TimeDepositWithWithdrawals>, StorageError> {
        let deposits = self.get_all().await?;

        let rows = sqlx::query(
            "SELECT id, time_deposit_id, amount, date FROM withdrawals ORDER BY date, id",
        )
        .fetch_all(self.db.pool())
        .await
        .map_err(classify)?;

        let mut by_deposit: HashMap<i64, Vec<Withdrawal>> = HashMap::new();
        for row in &rows {
            let raw_date: String = row.get("date");
            let withdrawal = Withdrawal {
                id: row.get("id"),
                amount: row.get("amount"),
                date: parse_stored_date(&raw_date)?,
            };
            by_deposit
                .entry(row.get("time_deposit_id"))
                .or_default()
                .push(withdrawal);
        }

        Ok(deposits
            .into_iter()
            .map(|deposit| {
                let withdrawals = by_deposit.remove(&deposit.id).unwrap_or_default();
                TimeDepositWithWithdrawals {
                    deposit,
                    withdrawals,
                }
            })
            .collect())
    }

    async fn update_all(&self, deposits: &[TimeDeposit]) -> Result<(), StorageError> {
        let mut tx = self.db.pool().begin().await.map_err(classify)?;

        for deposit in deposits {
            sqlx::query(
                r#"
                INSERT INTO time_deposits (id, plan_type, balance, days)
                VALUES (?, ?, ?, ?)
                ON CONFLICT(id) DO UPDATE SET
                    plan_type = excluded.plan_type,
                    balance = excluded.balance,
                    days = excluded.days
                "#,
            )
            .bind(deposit.id)
            .bind(&deposit.plan_type)
            .bind(deposit.balance)
            .bind(deposit.days)
            .execute(&mut *tx)
            .await
            .map_err(classify)?;
        }

        tx.commit().await.map_err(classify)
    }
}
