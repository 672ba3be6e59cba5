//! Budget evaluation: spent-versus-limit classification and alerts.

pub mod alert;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::ledger::{DateWindow, Transaction};

pub use alert::BudgetAlert;

/// Health classification for a category budget.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum BudgetStatus {
    Safe,
    Warning,
    Danger,
}

impl BudgetStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            BudgetStatus::Safe => "safe",
            BudgetStatus::Warning => "warning",
            BudgetStatus::Danger => "danger",
        }
    }
}

/// Classifies spending against a limit.
///
/// A zero `limit` maps the percentage to positive infinity, so zero-limit
/// budgets always classify as [`BudgetStatus::Danger`]; negative limits go
/// through plain division unguarded. Callers sanitize upstream when they want
/// different behavior.
pub fn budget_status(spent: f64, limit: f64, warning_threshold: f64) -> BudgetStatus {
    let percentage = spent_percentage(spent, limit);
    if percentage >= 100.0 {
        BudgetStatus::Danger
    } else if percentage >= warning_threshold {
        BudgetStatus::Warning
    } else {
        BudgetStatus::Safe
    }
}

fn spent_percentage(spent: f64, limit: f64) -> f64 {
    if limit == 0.0 {
        f64::INFINITY
    } else {
        spent / limit * 100.0
    }
}

/// Spending guardrail configured for a category.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryBudget {
    pub id: Uuid,
    pub category_id: Uuid,
    pub limit: f64,
    /// Percentage of the limit at which a warning fires.
    pub warning_threshold: f64,
    #[serde(default)]
    pub period: BudgetPeriod,
}

impl CategoryBudget {
    pub fn new(
        category_id: Uuid,
        limit: f64,
        warning_threshold: f64,
        period: BudgetPeriod,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            category_id,
            limit,
            warning_threshold,
            period,
        }
    }

    /// Evaluates the budget against a spent total.
    pub fn snapshot(&self, spent: f64) -> BudgetSnapshot {
        BudgetSnapshot {
            spent,
            limit: self.limit,
            warning_threshold: self.warning_threshold,
            percentage: spent_percentage(spent, self.limit),
            status: budget_status(spent, self.limit, self.warning_threshold),
        }
    }
}

/// Enumeration of budgeting periods.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum BudgetPeriod {
    Weekly,
    #[default]
    Monthly,
    Yearly,
}

/// Point-in-time evaluation of a category budget.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct BudgetSnapshot {
    pub spent: f64,
    pub limit: f64,
    pub warning_threshold: f64,
    pub percentage: f64,
    pub status: BudgetStatus,
}

/// Sum of expense amounts for a category inside the window.
pub fn spent_in_window(
    transactions: &[Transaction],
    category_id: Uuid,
    window: DateWindow,
) -> f64 {
    transactions
        .iter()
        .filter(|txn| txn.category_id == category_id)
        .filter(|txn| txn.is_expense())
        .filter(|txn| window.contains(txn.date))
        .map(|txn| txn.amount)
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classification_thresholds() {
        assert_eq!(budget_status(500.0, 1000.0, 80.0), BudgetStatus::Safe);
        assert_eq!(budget_status(850.0, 1000.0, 80.0), BudgetStatus::Warning);
        assert_eq!(budget_status(1000.0, 1000.0, 80.0), BudgetStatus::Danger);
    }

    #[test]
    fn zero_limit_classifies_as_danger() {
        // Division by zero maps to infinity, so even zero spent is danger.
        assert_eq!(budget_status(0.0, 0.0, 80.0), BudgetStatus::Danger);
        assert_eq!(budget_status(10.0, 0.0, 80.0), BudgetStatus::Danger);
    }

    #[test]
    fn snapshot_carries_percentage_and_status() {
        let budget = CategoryBudget::new(Uuid::new_v4(), 200.0, 75.0, BudgetPeriod::Monthly);
        let snapshot = budget.snapshot(150.0);
        assert_eq!(snapshot.percentage, 75.0);
        assert_eq!(snapshot.status, BudgetStatus::Warning);
    }
}
