//! # Time Deposit Backend
//!
//! Interest-accrual service for time deposits. Each deposit carries a plan
//! type, a balance, and a tenure in days; the balance-update operation
//! applies one month of plan-specific interest to every deposit and
//! persists the updated collection in a single bulk write. A small REST
//! API exposes the deposit list and the update trigger.

pub mod db;
pub mod domain;
pub mod rest;
pub mod seed;
pub mod storage;
