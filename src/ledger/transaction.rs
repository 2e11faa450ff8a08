use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::currency;
use crate::errors::LedgerError;

/// A single recorded income or expense event. Immutable once created;
/// removal is the only way out of the ledger.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub id: u64,
    pub description: String,
    /// Magnitude as entered by the user, never pre-signed. `kind` carries
    /// the direction. Stored as a plain JSON number with exact decimal
    /// digits.
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    pub amount: Decimal,
    #[serde(rename = "type")]
    pub kind: TransactionKind,
    pub date: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    Income,
    Expense,
}

impl FromStr for TransactionKind {
    type Err = LedgerError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "income" => Ok(TransactionKind::Income),
            "expense" => Ok(TransactionKind::Expense),
            other => Err(LedgerError::Validation(format!(
                "unknown transaction type `{other}` (expected income or expense)"
            ))),
        }
    }
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransactionKind::Income => write!(f, "income"),
            TransactionKind::Expense => write!(f, "expense"),
        }
    }
}

/// Validated form input for a new transaction. Parsing the raw strings here
/// keeps the ledger free of half-constructed entries: a draft either carries
/// all three fields in their typed form or it does not exist.
#[derive(Debug, Clone)]
pub struct TransactionDraft {
    pub description: String,
    pub amount: Decimal,
    pub kind: TransactionKind,
}

impl TransactionDraft {
    pub fn parse(description: &str, amount: &str, kind: &str) -> Result<Self, LedgerError> {
        let description = description.trim();
        if description.is_empty() {
            return Err(LedgerError::Validation(
                "description must not be empty".into(),
            ));
        }
        if kind.trim().is_empty() {
            return Err(LedgerError::Validation(
                "transaction type must not be empty".into(),
            ));
        }
        let amount = currency::parse_amount(amount)?;
        let kind = kind.parse()?;
        Ok(Self {
            description: description.to_string(),
            amount,
            kind,
        })
    }
}
