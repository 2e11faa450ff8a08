//! Facade that coordinates ledger state and write-through persistence.

use crate::{
    errors::LedgerError,
    ledger::{Advisory, Ledger, SortKey, Summary, Transaction, TransactionDraft},
    storage::StorageBackend,
};

/// Owns the ledger and its persistence handle for one session.
///
/// Constructed once at startup from the persisted snapshot; every mutating
/// operation applies in memory first and then writes the whole ledger back
/// through the backend. A failed write is returned to the caller, but the
/// in-memory ledger keeps the change and remains the session's source of
/// truth; [`ExpenseTracker::persist`] retries explicitly.
pub struct ExpenseTracker {
    ledger: Ledger,
    storage: Box<dyn StorageBackend>,
    key: String,
}

impl ExpenseTracker {
    /// Loads the snapshot stored under `key`, starting empty on first run.
    pub fn open(storage: Box<dyn StorageBackend>, key: impl Into<String>) -> Result<Self, LedgerError> {
        let key = key.into();
        let ledger = match storage.load(&key)? {
            Some(transactions) => Ledger::from_transactions(transactions),
            None => Ledger::new(),
        };
        tracing::debug!(key = %key, count = ledger.len(), "ledger loaded");
        Ok(Self {
            ledger,
            storage,
            key,
        })
    }

    /// Validates the raw form fields, appends the transaction, and persists.
    pub fn add(
        &mut self,
        description: &str,
        amount: &str,
        kind: &str,
    ) -> Result<Transaction, LedgerError> {
        let draft = TransactionDraft::parse(description, amount, kind)?;
        let created = self.ledger.add(draft);
        tracing::info!(id = created.id, kind = %created.kind, "transaction recorded");
        self.persist()?;
        Ok(created)
    }

    /// Removes by id and persists. `Ok(None)` reports "not found": the
    /// sequence is untouched and nothing is written.
    pub fn remove(&mut self, id: u64) -> Result<Option<Transaction>, LedgerError> {
        match self.ledger.remove(id) {
            Some(removed) => {
                tracing::info!(id = removed.id, "transaction removed");
                self.persist()?;
                Ok(Some(removed))
            }
            None => {
                tracing::debug!(id, "remove requested for unknown id");
                Ok(None)
            }
        }
    }

    /// Parses the raw sort key, re-orders the ledger, and persists the new
    /// working order, returning it. An unknown key leaves the order
    /// unchanged.
    pub fn sort(&mut self, key: &str) -> Result<&[Transaction], LedgerError> {
        let key: SortKey = key.parse()?;
        self.ledger.sort(key);
        self.persist()?;
        Ok(self.ledger.transactions())
    }

    pub fn summary(&self) -> Summary {
        self.ledger.summary()
    }

    pub fn advisories(&self) -> Vec<Advisory> {
        Advisory::evaluate(self.summary().balance)
    }

    pub fn transactions(&self) -> &[Transaction] {
        self.ledger.transactions()
    }

    /// Writes the current snapshot through to storage.
    pub fn persist(&self) -> Result<(), LedgerError> {
        self.storage.save(&self.key, self.ledger.transactions())
    }
}
