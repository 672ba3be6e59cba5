use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::ledger::Category;

use super::{BudgetSnapshot, BudgetStatus};

/// User-facing notification for a budget that crossed its threshold.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BudgetAlert {
    pub id: Uuid,
    pub category_id: Uuid,
    pub status: BudgetStatus,
    pub message: String,
    pub created_at: DateTime<Utc>,
}

impl BudgetAlert {
    /// Builds a notification for a non-safe snapshot; safe budgets produce
    /// nothing.
    pub fn from_snapshot(category: &Category, snapshot: &BudgetSnapshot) -> Option<Self> {
        let message = match snapshot.status {
            BudgetStatus::Safe => return None,
            BudgetStatus::Warning => format!(
                "{} has reached {:.0}% of its budget",
                category.name, snapshot.percentage
            ),
            BudgetStatus::Danger => format!("{} is over budget", category.name),
        };
        Some(Self {
            id: Uuid::new_v4(),
            category_id: category.id,
            status: snapshot.status,
            message,
            created_at: Utc::now(),
        })
    }
}
