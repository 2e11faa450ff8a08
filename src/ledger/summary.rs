use rust_decimal::Decimal;

use super::transaction::{Transaction, TransactionKind};

/// Aggregate view over the current sequence: income and expense totals plus
/// their difference. Values are rounded to two decimal places here, at the
/// display boundary; accumulation itself is exact decimal arithmetic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Summary {
    pub balance: Decimal,
    pub total_income: Decimal,
    /// Reported as a non-negative magnitude.
    pub total_expense: Decimal,
}

impl Summary {
    pub fn of(transactions: &[Transaction]) -> Self {
        let mut income = Decimal::ZERO;
        let mut expense = Decimal::ZERO;
        for transaction in transactions {
            match transaction.kind {
                TransactionKind::Income => income += transaction.amount,
                TransactionKind::Expense => expense += transaction.amount,
            }
        }
        Self {
            balance: (income - expense).round_dp(2),
            total_income: income.round_dp(2),
            total_expense: expense.round_dp(2),
        }
    }
}
