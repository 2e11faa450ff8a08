use thiserror::Error;

/// Error type that captures the failures a single ledger operation can hit.
#[derive(Debug, Error)]
pub enum LedgerError {
    #[error("validation failed: {0}")]
    Validation(String),
    #[error("unknown sort key `{0}` (expected name, date, or type)")]
    InvalidSortKey(String),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("serialization error: {0}")]
    Serde(#[from] serde_json::Error),
    #[error("storage error: {0}")]
    Storage(String),
}

impl LedgerError {
    /// True when the failure came from the persistence layer rather than the
    /// caller's input. The in-memory ledger is still intact in that case.
    pub fn is_storage(&self) -> bool {
        matches!(
            self,
            LedgerError::Io(_) | LedgerError::Serde(_) | LedgerError::Storage(_)
        )
    }
}
