use expense_core::{
    errors::LedgerError,
    ledger::{Advisory, TransactionKind},
    storage::JsonStorage,
    tracker::ExpenseTracker,
};
use rust_decimal::Decimal;
use std::collections::HashSet;
use tempfile::TempDir;

fn open_tracker(temp: &TempDir) -> ExpenseTracker {
    let storage = JsonStorage::new(Some(temp.path().to_path_buf())).expect("json storage");
    ExpenseTracker::open(Box::new(storage), "trans").expect("open tracker")
}

#[test]
fn ids_stay_unique_across_add_remove_interleavings() {
    let temp = TempDir::new().unwrap();
    let mut tracker = open_tracker(&temp);

    for round in 0..5 {
        tracker
            .add(&format!("income {round}"), "100", "income")
            .unwrap();
        let victim = tracker
            .add(&format!("expense {round}"), "30", "expense")
            .unwrap();
        tracker.remove(victim.id).unwrap();
    }

    let ids: HashSet<u64> = tracker.transactions().iter().map(|t| t.id).collect();
    assert_eq!(ids.len(), tracker.transactions().len());
}

#[test]
fn summary_balance_is_income_minus_expense() {
    let temp = TempDir::new().unwrap();
    let mut tracker = open_tracker(&temp);

    let empty = tracker.summary();
    assert_eq!(empty.balance, Decimal::ZERO);
    assert_eq!(empty.total_income, Decimal::ZERO);
    assert_eq!(empty.total_expense, Decimal::ZERO);

    tracker.add("Salary", "500", "income").unwrap();
    tracker.add("Rent", "700", "expense").unwrap();

    let summary = tracker.summary();
    assert_eq!(summary.total_income, Decimal::from(500));
    assert_eq!(summary.total_expense, Decimal::from(700));
    assert_eq!(
        summary.balance,
        summary.total_income - summary.total_expense
    );
}

#[test]
fn reopening_reproduces_the_sequence() {
    let temp = TempDir::new().unwrap();
    {
        let mut tracker = open_tracker(&temp);
        tracker.add("Salary", "2000", "income").unwrap();
        tracker.add("Groceries", "42.50", "expense").unwrap();
    }

    let first = {
        let tracker = open_tracker(&temp);
        tracker.transactions().to_vec()
    };
    let second = {
        let tracker = open_tracker(&temp);
        tracker.transactions().to_vec()
    };

    assert_eq!(first.len(), 2);
    assert_eq!(first, second);
    assert_eq!(first[0].description, "Salary");
    assert_eq!(first[1].amount, "42.5".parse::<Decimal>().unwrap());
}

#[test]
fn sorting_by_type_is_a_stable_partition() {
    let temp = TempDir::new().unwrap();
    let mut tracker = open_tracker(&temp);

    tracker.add("Rent", "700", "expense").unwrap();
    tracker.add("Salary", "2000", "income").unwrap();
    tracker.add("Bonus", "100", "income").unwrap();

    tracker.sort("type").unwrap();

    let ids: Vec<u64> = tracker.transactions().iter().map(|t| t.id).collect();
    assert_eq!(ids, [2, 3, 1], "income keeps relative order, then expense");
    assert_eq!(tracker.transactions()[2].kind, TransactionKind::Expense);
}

#[test]
fn sorting_by_name_ignores_case() {
    let temp = TempDir::new().unwrap();
    let mut tracker = open_tracker(&temp);

    tracker.add("banana", "1", "expense").unwrap();
    tracker.add("Apple", "1", "expense").unwrap();

    tracker.sort("name").unwrap();

    let names: Vec<&str> = tracker
        .transactions()
        .iter()
        .map(|t| t.description.as_str())
        .collect();
    assert_eq!(names, ["Apple", "banana"]);
}

#[test]
fn sorted_order_survives_a_reopen() {
    let temp = TempDir::new().unwrap();
    {
        let mut tracker = open_tracker(&temp);
        tracker.add("banana", "1", "expense").unwrap();
        tracker.add("Apple", "1", "expense").unwrap();
        tracker.sort("name").unwrap();
    }
    let tracker = open_tracker(&temp);
    assert_eq!(tracker.transactions()[0].description, "Apple");
}

#[test]
fn advisory_matches_the_balance() {
    let temp = TempDir::new().unwrap();
    let mut tracker = open_tracker(&temp);

    tracker.add("Salary", "500", "income").unwrap();
    tracker.add("Rent", "700", "expense").unwrap();
    assert_eq!(tracker.advisories(), [Advisory::ExpensesExceedIncome]);

    tracker.add("Contract", "1500", "income").unwrap();
    tracker.remove(2).unwrap();
    // income 2000, expense 0 -> balance 2000
    assert_eq!(tracker.advisories(), [Advisory::HealthySavings]);
}

#[test]
fn removing_an_unknown_id_reports_not_found() {
    let temp = TempDir::new().unwrap();
    let mut tracker = open_tracker(&temp);

    tracker.add("Salary", "2000", "income").unwrap();
    let before = tracker.transactions().to_vec();

    let outcome = tracker.remove(99).expect("not found is not an error");
    assert!(outcome.is_none());
    assert_eq!(
        tracker.transactions(),
        before.as_slice(),
        "sequence must be field-for-field identical"
    );
}

#[test]
fn add_with_empty_description_fails_validation() {
    let temp = TempDir::new().unwrap();
    let mut tracker = open_tracker(&temp);

    tracker.add("Salary", "2000", "income").unwrap();
    let err = tracker.add("", "100", "income").unwrap_err();

    assert!(matches!(err, LedgerError::Validation(_)));
    assert_eq!(tracker.transactions().len(), 1);
}
