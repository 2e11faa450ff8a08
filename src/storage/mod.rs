pub mod json_backend;

use crate::{errors::LedgerError, ledger::Transaction};

pub type Result<T> = std::result::Result<T, LedgerError>;

/// Storage key the tracker uses when none is configured.
pub const DEFAULT_KEY: &str = "trans";

/// Abstraction over persistence backends: a key-value store holding one
/// whole-ledger snapshot per key. Saves always overwrite the full blob;
/// there is no incremental format.
pub trait StorageBackend: Send + Sync {
    /// Returns the snapshot stored under `key`, or `None` on first run.
    fn load(&self, key: &str) -> Result<Option<Vec<Transaction>>>;

    /// Overwrites the snapshot stored under `key`.
    fn save(&self, key: &str, transactions: &[Transaction]) -> Result<()>;
}

pub use json_backend::JsonStorage;
