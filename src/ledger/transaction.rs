use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A single dated entry against a category.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Transaction {
    pub id: Uuid,
    pub category_id: Uuid,
    pub amount: f64,
    pub date: NaiveDate,
    pub kind: TransactionKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    /// Set when the entry was materialized from a recurring template.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub template_id: Option<Uuid>,
}

impl Transaction {
    pub fn new(category_id: Uuid, amount: f64, date: NaiveDate, kind: TransactionKind) -> Self {
        Self {
            id: Uuid::new_v4(),
            category_id,
            amount,
            date,
            kind,
            note: None,
            template_id: None,
        }
    }

    pub fn is_expense(&self) -> bool {
        matches!(self.kind, TransactionKind::Expense)
    }
}

/// Whether an entry draws from or adds to the household balance.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    #[default]
    Expense,
    Income,
}
