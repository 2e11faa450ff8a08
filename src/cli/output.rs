//! Styled terminal output and the read-only render projections.
//!
//! Everything here consumes ledger state; nothing mutates it.

use colored::Colorize;
use std::fmt;

use rust_decimal::prelude::ToPrimitive;

use crate::{
    config::Config,
    currency,
    ledger::{Advisory, Summary, Transaction, TransactionKind},
};

const CHART_WIDTH: usize = 40;
const LABEL_WIDTH: usize = 16;

/// Message categories used by the CLI output helpers.
#[derive(Clone, Copy, PartialEq, Eq)]
pub enum MessageKind {
    Info,
    Success,
    Warning,
    Error,
    Section,
}

fn apply_style(kind: MessageKind, message: impl fmt::Display) -> String {
    let text = message.to_string();
    match kind {
        MessageKind::Section => format!("=== {} ===", text.trim()).bold().to_string(),
        MessageKind::Success => text.bright_green().to_string(),
        MessageKind::Warning => text.bright_yellow().to_string(),
        MessageKind::Error => format!("ERROR: {text}").bright_red().to_string(),
        MessageKind::Info => text,
    }
}

pub fn print(kind: MessageKind, message: impl fmt::Display) {
    match kind {
        MessageKind::Section => println!("\n{}", apply_style(kind, message)),
        _ => println!("{}", apply_style(kind, message)),
    }
}

pub fn info(message: impl fmt::Display) {
    print(MessageKind::Info, message);
}

pub fn success(message: impl fmt::Display) {
    print(MessageKind::Success, message);
}

pub fn warning(message: impl fmt::Display) {
    print(MessageKind::Warning, message);
}

pub fn error(message: impl fmt::Display) {
    print(MessageKind::Error, message);
}

/// Renders the ordered sequence; each line carries id, date, description,
/// and the signed amount, colored by kind.
pub fn render_list(transactions: &[Transaction], config: &Config) {
    print(MessageKind::Section, "Transactions");
    if transactions.is_empty() {
        info("No transactions recorded yet.");
        return;
    }
    for transaction in transactions {
        let amount = currency::format_signed(
            &config.currency_symbol,
            transaction.kind,
            transaction.amount,
        );
        let line = format!(
            "{:>4}  {}  {:<24}  {}",
            transaction.id,
            transaction.date.format(&config.date_format),
            transaction.description,
            amount
        );
        match transaction.kind {
            TransactionKind::Income => println!("{}", line.green()),
            TransactionKind::Expense => println!("{}", line.red()),
        }
    }
}

pub fn render_summary(summary: &Summary, config: &Config) {
    print(MessageKind::Section, "Summary");
    let symbol = &config.currency_symbol;
    println!(
        "Balance:  {}",
        currency::format_amount(symbol, summary.balance)
    );
    println!(
        "Income:   {}",
        currency::format_amount(symbol, summary.total_income)
    );
    println!(
        "Expense:  {}",
        currency::format_amount(symbol, summary.total_expense)
    );
}

pub fn render_advisories(advisories: &[Advisory]) {
    if advisories.is_empty() {
        info("No advisories for the current balance.");
        return;
    }
    for advisory in advisories {
        match advisory {
            Advisory::ExpensesExceedIncome => warning(advisory.message()),
            Advisory::HealthySavings => success(advisory.message()),
        }
    }
}

/// Description-vs-amount bar chart, green for income and red for expense.
/// Bars are scaled against the largest amount in the sequence.
pub fn render_chart(transactions: &[Transaction]) {
    print(MessageKind::Section, "Amounts by transaction");
    if transactions.is_empty() {
        info("Nothing to chart yet.");
        return;
    }
    let max = transactions
        .iter()
        .map(|transaction| transaction.amount)
        .max()
        .unwrap_or_default();
    for transaction in transactions {
        let ratio = if max.is_zero() {
            0.0
        } else {
            (transaction.amount / max).to_f64().unwrap_or(0.0)
        };
        let width = ((ratio * CHART_WIDTH as f64).round() as usize).min(CHART_WIDTH);
        let bar = "█".repeat(width.max(1));
        let bar = match transaction.kind {
            TransactionKind::Income => bar.green(),
            TransactionKind::Expense => bar.red(),
        };
        println!(
            "{:<label$} {} {:.2}",
            truncate_label(&transaction.description),
            bar,
            transaction.amount,
            label = LABEL_WIDTH
        );
    }
}

pub fn render_help() {
    print(MessageKind::Section, "Commands");
    let entries = [
        ("add <description> <amount> <income|expense>", "Record a transaction"),
        ("remove <id>", "Delete a transaction by id"),
        ("list", "Show transactions in their current order"),
        ("sort <name|date|type>", "Re-order transactions and keep that order"),
        ("summary", "Balance, total income, and total expense"),
        ("advice", "Spending advisories for the current balance"),
        ("chart", "Bar chart of amounts, colored by type"),
        ("help", "This list"),
        ("exit", "Leave the shell"),
    ];
    for (usage, blurb) in entries {
        println!("  {usage:<46} {blurb}");
    }
}

fn truncate_label(text: &str) -> String {
    if text.chars().count() <= LABEL_WIDTH {
        return text.to_string();
    }
    let mut truncated: String = text.chars().take(LABEL_WIDTH - 1).collect();
    truncated.push('…');
    truncated
}
