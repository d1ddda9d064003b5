use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use shared::{TimeDepositWithWithdrawals, UpdateBalanceResponse, Withdrawal};
use tracing::info;

use crate::domain::models::deposit::{
    TimeDepositWithWithdrawals as DomainDepositWithWithdrawals, Withdrawal as DomainWithdrawal,
};
use crate::domain::DepositService;
use crate::storage::StorageError;

/// Application state containing the DepositService
#[derive(Clone)]
pub struct AppState {
    pub deposit_service: DepositService,
}

impl AppState {
    /// Create new application state with the given DepositService
    pub fn new(deposit_service: DepositService) -> Self {
        Self { deposit_service }
    }
}

/// Axum handler function for GET /api/deposits
pub async fn list_deposits(State(state): State<AppState>) -> impl IntoResponse {
    info!("GET /api/deposits");

    match state.deposit_service.get_all_deposits().await {
        Ok(deposits) => {
            let body: Vec<TimeDepositWithWithdrawals> =
                deposits.into_iter().map(Into::into).collect();
            (StatusCode::OK, Json(body)).into_response()
        }
        Err(e) => storage_error_response(e, "Error listing deposits").into_response(),
    }
}

/// Axum handler function for PUT /api/deposits/update-balance
pub async fn update_balance(State(state): State<AppState>) -> impl IntoResponse {
    info!("PUT /api/deposits/update-balance");

    match state.deposit_service.update_balances().await {
        Ok(()) => (
            StatusCode::OK,
            Json(UpdateBalanceResponse {
                message: "Balances updated successfully".to_string(),
            }),
        )
            .into_response(),
        Err(e) => storage_error_response(e, "Error updating balances").into_response(),
    }
}

fn storage_error_response(err: StorageError, context: &str) -> (StatusCode, String) {
    tracing::error!("{}: {:?}", context, err);
    let status = match err {
        StorageError::Unavailable(_) => StatusCode::INTERNAL_SERVER_ERROR,
        StorageError::ConstraintViolation(_) => StatusCode::CONFLICT,
    };
    (status, err.to_string())
}

impl From<DomainWithdrawal> for Withdrawal {
    fn from(withdrawal: DomainWithdrawal) -> Self {
        Self {
            id: withdrawal.id,
            amount: withdrawal.amount,
            date: withdrawal.date,
        }
    }
}

impl From<DomainDepositWithWithdrawals> for TimeDepositWithWithdrawals {
    fn from(entry: DomainDepositWithWithdrawals) -> Self {
        Self {
            id: entry.deposit.id,
            plan_type: entry.deposit.plan_type,
            balance: entry.deposit.balance,
            days: entry.deposit.days,
            withdrawals: entry.withdrawals.into_iter().map(Into::into).collect(),
        }
    }
}
