use std::str::FromStr;

use chrono::Utc;

use crate::errors::LedgerError;

use super::summary::Summary;
use super::transaction::{Transaction, TransactionDraft, TransactionKind};

/// The owned, ordered collection of transactions.
///
/// Order is insertion order until a sort is applied, after which the sorted
/// order becomes the working order. Identifiers come from a monotonically
/// increasing counter, so every held transaction has a unique id after any
/// interleaving of adds and removals.
#[derive(Debug, Clone)]
pub struct Ledger {
    transactions: Vec<Transaction>,
    next_id: u64,
}

impl Default for Ledger {
    fn default() -> Self {
        Self::new()
    }
}

/// Key a sort operation re-orders the ledger by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    Name,
    Date,
    Type,
}

impl FromStr for SortKey {
    type Err = LedgerError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "name" => Ok(SortKey::Name),
            "date" => Ok(SortKey::Date),
            "type" => Ok(SortKey::Type),
            other => Err(LedgerError::InvalidSortKey(other.to_string())),
        }
    }
}

impl Ledger {
    pub fn new() -> Self {
        Self {
            transactions: Vec::new(),
            next_id: 1,
        }
    }

    /// Rebuilds a ledger from a persisted snapshot, seeding the id counter
    /// past the highest id present so future adds never collide.
    pub fn from_transactions(transactions: Vec<Transaction>) -> Self {
        let next_id = transactions
            .iter()
            .map(|txn| txn.id)
            .max()
            .map_or(1, |max| max + 1);
        Self {
            transactions,
            next_id,
        }
    }

    /// Appends a transaction built from the validated draft, assigning the
    /// next id and capturing the creation timestamp.
    pub fn add(&mut self, draft: TransactionDraft) -> Transaction {
        let transaction = Transaction {
            id: self.next_id,
            description: draft.description,
            amount: draft.amount,
            kind: draft.kind,
            date: Utc::now(),
        };
        self.next_id += 1;
        self.transactions.push(transaction.clone());
        transaction
    }

    /// Removes the transaction with the given id, returning the removed
    /// instance. `None` means nothing matched and the sequence is untouched.
    pub fn remove(&mut self, id: u64) -> Option<Transaction> {
        let index = self.transactions.iter().position(|txn| txn.id == id)?;
        Some(self.transactions.remove(index))
    }

    /// Re-orders the working sequence by `key` and returns the new order.
    /// All three orderings are stable, so equal elements keep their
    /// relative order.
    pub fn sort(&mut self, key: SortKey) -> &[Transaction] {
        match key {
            SortKey::Name => self
                .transactions
                .sort_by(|a, b| a.description.to_lowercase().cmp(&b.description.to_lowercase())),
            SortKey::Date => self.transactions.sort_by(|a, b| a.date.cmp(&b.date)),
            // A stable partition: income first, original order kept within
            // each group.
            SortKey::Type => self
                .transactions
                .sort_by_key(|txn| txn.kind == TransactionKind::Expense),
        }
        &self.transactions
    }

    pub fn summary(&self) -> Summary {
        Summary::of(&self.transactions)
    }

    pub fn transaction(&self, id: u64) -> Option<&Transaction> {
        self.transactions.iter().find(|txn| txn.id == id)
    }

    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }
}
