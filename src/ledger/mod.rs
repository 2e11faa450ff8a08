//! Ledger domain models and the derived views computed from them.

pub mod advisory;
#[allow(clippy::module_inception)]
pub mod ledger;
pub mod summary;
pub mod transaction;

pub use advisory::Advisory;
pub use ledger::{Ledger, SortKey};
pub use summary::Summary;
pub use transaction::{Transaction, TransactionDraft, TransactionKind};
