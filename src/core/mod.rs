//! Core ledger abstractions and types

pub mod category;
pub mod config;
pub mod error;
pub mod kv;
pub mod log;
pub mod transaction;

// Re-export main types for cleaner imports
pub use category::Category;
pub use error::{LedgerError, StorageStep, ValidationError};
pub use kv::KeyValueStore;
pub use transaction::{LedgerKind, NewTransaction, Transaction, TransactionDate};
