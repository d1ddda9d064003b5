//! Demo data seeding for the deposit store.
//!
//! Wipes the deposit and withdrawal tables and inserts a fixed sample set
//! of ten deposits carrying between zero and three withdrawals each.

use anyhow::Result;
use chrono::NaiveDate;
use tracing::info;

use crate::domain::models::deposit::{TimeDeposit, TimeDepositWithWithdrawals, Withdrawal};
use crate::storage::SqliteDepositStore;

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

fn withdrawal(id: i64, amount: f64, on: NaiveDate) -> Withdrawal {
    Withdrawal {
        id,
        amount,
        date: on,
    }
}

fn entry(deposit: TimeDeposit, withdrawals: Vec<Withdrawal>) -> TimeDepositWithWithdrawals {
    TimeDepositWithWithdrawals {
        deposit,
        withdrawals,
    }
}

/// The sample deposits inserted by the seed binary.
pub fn sample_deposits() -> Vec<TimeDepositWithWithdrawals> {
    vec![
        entry(TimeDeposit::new(1, "basic", 5000.0, 90), vec![]),
        entry(
            TimeDeposit::new(2, "premium", 10000.0, 180),
            vec![withdrawal(201, 500.0, date(2025, 3, 15))],
        ),
        entry(
            TimeDeposit::new(3, "student", 15000.0, 365),
            vec![
                withdrawal(301, 750.0, date(2025, 2, 10)),
                withdrawal(302, 1000.0, date(2025, 5, 20)),
            ],
        ),
        entry(
            TimeDeposit::new(4, "basic", 7500.0, 120),
            vec![
                withdrawal(401, 300.0, date(2025, 4, 5)),
                withdrawal(402, 400.0, date(2025, 7, 15)),
                withdrawal(403, 250.0, date(2025, 8, 25)),
            ],
        ),
        entry(TimeDeposit::new(5, "premium", 12000.0, 270), vec![]),
        entry(
            TimeDeposit::new(6, "student", 20000.0, 365),
            vec![withdrawal(601, 2000.0, date(2025, 6, 10))],
        ),
        entry(
            TimeDeposit::new(7, "basic", 6000.0, 60),
            vec![
                withdrawal(701, 150.0, date(2025, 2, 25)),
                withdrawal(702, 200.0, date(2025, 8, 12)),
            ],
        ),
        entry(TimeDeposit::new(8, "premium", 9000.0, 150), vec![]),
        entry(
            TimeDeposit::new(9, "student", 25000.0, 365),
            vec![
                withdrawal(901, 1500.0, date(2025, 1, 15)),
                withdrawal(902, 2500.0, date(2025, 7, 30)),
                withdrawal(903, 1000.0, date(2025, 8, 5)),
            ],
        ),
        entry(
            TimeDeposit::new(10, "basic", 8000.0, 90),
            vec![withdrawal(1001, 800.0, date(2025, 5, 18))],
        ),
    ]
}

/// Replace the stored data with the sample set.
pub async fn run(store: &SqliteDepositStore) -> Result<()> {
    let deposits = sample_deposits();

    info!("Cleaning database");
    store.clear_all().await?;

    info!("Inserting {} time deposits", deposits.len());
    for deposit in &deposits {
        store.insert_deposit_with_withdrawals(deposit).await?;
    }

    info!(
        "Successfully seeded {} time deposits with their withdrawals",
        deposits.len()
    );
    Ok(())
}
