//! Amount parsing and display formatting.
//!
//! Amounts are decimal values throughout; rendering rounds to two decimal
//! places and prefixes the configured currency symbol.

use rust_decimal::Decimal;

use crate::errors::LedgerError;
use crate::ledger::TransactionKind;

/// Parses a raw amount string into a non-negative decimal magnitude.
pub fn parse_amount(raw: &str) -> Result<Decimal, LedgerError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(LedgerError::Validation("amount must not be empty".into()));
    }
    let amount: Decimal = trimmed
        .parse()
        .map_err(|_| LedgerError::Validation(format!("amount `{trimmed}` is not a number")))?;
    if amount.is_sign_negative() {
        return Err(LedgerError::Validation(
            "amount must be a positive magnitude; the type carries the direction".into(),
        ));
    }
    Ok(amount)
}

/// Renders an unsigned amount, e.g. `₹ 1500.00`.
pub fn format_amount(symbol: &str, amount: Decimal) -> String {
    format!("{symbol} {:.2}", amount.round_dp(2))
}

/// Renders a signed amount the way the transaction list shows it,
/// e.g. `+ ₹ 2000.00` or `- ₹ 500.00`.
pub fn format_signed(symbol: &str, kind: TransactionKind, amount: Decimal) -> String {
    let sign = match kind {
        TransactionKind::Income => '+',
        TransactionKind::Expense => '-',
    };
    format!("{sign} {symbol} {:.2}", amount.round_dp(2))
}
