use chrono::NaiveDate;
use fintrack_core::budget::{
    budget_status, spent_in_window, BudgetAlert, BudgetPeriod, BudgetStatus, CategoryBudget,
};
use fintrack_core::ledger::{Category, CategoryKind, DateWindow, Transaction, TransactionKind};
use uuid::Uuid;

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

#[test]
fn test_status_vectors() {
    assert_eq!(budget_status(500.0, 1000.0, 80.0), BudgetStatus::Safe);
    assert_eq!(budget_status(850.0, 1000.0, 80.0), BudgetStatus::Warning);
    assert_eq!(budget_status(1000.0, 1000.0, 80.0), BudgetStatus::Danger);
    assert_eq!(budget_status(1200.0, 1000.0, 80.0), BudgetStatus::Danger);
}

#[test]
fn test_zero_limit_is_danger() {
    // A zero limit always classifies as danger, even with nothing spent.
    assert_eq!(budget_status(0.0, 0.0, 80.0), BudgetStatus::Danger);
}

#[test]
fn test_negative_limit_goes_through_plain_division() {
    assert_eq!(budget_status(500.0, -1000.0, 80.0), BudgetStatus::Safe);
}

#[test]
fn test_status_strings() {
    assert_eq!(BudgetStatus::Safe.as_str(), "safe");
    assert_eq!(BudgetStatus::Warning.as_str(), "warning");
    assert_eq!(BudgetStatus::Danger.as_str(), "danger");
}

#[test]
fn test_spent_in_window_ignores_income_and_other_categories() {
    let groceries = Uuid::new_v4();
    let transport = Uuid::new_v4();
    let window = DateWindow::new(date(2024, 6, 1), date(2024, 6, 30)).unwrap();

    let transactions = vec![
        Transaction::new(groceries, 120.0, date(2024, 6, 5), TransactionKind::Expense),
        Transaction::new(groceries, 80.0, date(2024, 6, 20), TransactionKind::Expense),
        Transaction::new(groceries, 500.0, date(2024, 6, 10), TransactionKind::Income),
        Transaction::new(transport, 45.0, date(2024, 6, 12), TransactionKind::Expense),
        Transaction::new(groceries, 60.0, date(2024, 5, 31), TransactionKind::Expense),
    ];

    assert_eq!(spent_in_window(&transactions, groceries, window), 200.0);
}

#[test]
fn test_snapshot_and_alert_flow() {
    let category = Category::new("Dining out", CategoryKind::Expense);
    let budget = CategoryBudget::new(category.id, 300.0, 80.0, BudgetPeriod::Monthly);

    let safe = budget.snapshot(90.0);
    assert_eq!(safe.status, BudgetStatus::Safe);
    assert!(BudgetAlert::from_snapshot(&category, &safe).is_none());

    let warning = budget.snapshot(270.0);
    let alert = BudgetAlert::from_snapshot(&category, &warning).expect("alert");
    assert_eq!(alert.category_id, category.id);
    assert_eq!(alert.status, BudgetStatus::Warning);
    assert!(alert.message.contains("Dining out"));

    let danger = budget.snapshot(400.0);
    let alert = BudgetAlert::from_snapshot(&category, &danger).expect("alert");
    assert_eq!(alert.status, BudgetStatus::Danger);
    assert!(alert.message.contains("over budget"));
}

#[test]
fn test_window_rejects_reversed_bounds() {
    assert!(DateWindow::new(date(2024, 6, 30), date(2024, 6, 1)).is_err());
}
