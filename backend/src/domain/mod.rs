//! Domain layer: deposit models, interest rules, and the deposit service.

pub mod deposit_service;
pub mod interest;
pub mod models;

pub use deposit_service::DepositService;
pub use interest::{InterestCalculator, InterestCalculatorSet};
