use std::fmt::Display;
use thiserror::Error;

/// Which storage call a [`LedgerError::Storage`] came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageStep {
    /// Loading the current collection before an append.
    ReadExisting,
    /// Writing the updated collection back after an append.
    WriteBack,
    /// A plain read for listing or aggregation.
    Read,
}

impl Display for StorageStep {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                StorageStep::ReadExisting => "read existing collection",
                StorageStep::WriteBack => "write collection back",
                StorageStep::Read => "read collection",
            }
        )
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Amount must be greater than zero")]
    NonPositiveAmount,

    #[error("Not a valid amount: {0:?}")]
    NotANumber(String),

    #[error("Not a valid DD/MM/YY date: {0:?}")]
    InvalidDate(String),
}

#[derive(Error, Debug)]
pub enum LedgerError {
    #[error("Storage failure during {step} for '{key}': {source}")]
    Storage {
        step: StorageStep,
        key: String,
        #[source]
        source: anyhow::Error,
    },

    #[error("Stored collection '{key}' is corrupt: {source}")]
    CorruptStore {
        key: String,
        #[source]
        source: serde_json::Error,
    },

    #[error(transparent)]
    Validation(#[from] ValidationError),
}

impl LedgerError {
    pub fn storage_step(&self) -> Option<StorageStep> {
        match self {
            LedgerError::Storage { step, .. } => Some(*step),
            _ => None,
        }
    }
}
