//! Storage abstraction for time deposits.
//!
//! The domain layer talks to a [`TimeDepositStorage`] trait object and never
//! sees the backing store; adapters for SQLite and an in-memory map live
//! here side by side.

pub mod memory;
pub mod sqlite;
mod traits;

pub use memory::InMemoryDepositStore;
pub use sqlite::SqliteDepositStore;
pub use traits::{StorageError, TimeDepositStorage};
