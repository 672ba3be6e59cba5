use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};
use uuid::Uuid;

use crate::ledger::{Transaction, TransactionKind};

use super::recurrence::{next_due_date, RecurrenceKind};

/// A recurring transaction template owned by the user.
///
/// `next_due` is a cache derived from `(kind, recurrence_day, last_executed)`
/// and is recomputed after every execution; it is never the source of truth.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecurringTemplate {
    pub id: Uuid,
    pub name: String,
    pub amount: f64,
    pub category_id: Uuid,
    pub kind: RecurrenceKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recurrence_day: Option<u32>,
    #[serde(default)]
    pub entry_kind: TransactionKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_executed: Option<NaiveDate>,
    pub next_due: NaiveDate,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

impl RecurringTemplate {
    pub fn new(
        name: impl Into<String>,
        amount: f64,
        category_id: Uuid,
        kind: RecurrenceKind,
        recurrence_day: Option<u32>,
        today: NaiveDate,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            amount,
            category_id,
            kind,
            recurrence_day,
            entry_kind: TransactionKind::Expense,
            last_executed: None,
            next_due: next_due_date(kind, recurrence_day, today),
            is_active: true,
            created_at: Utc::now(),
        }
    }

    pub fn with_entry_kind(mut self, entry_kind: TransactionKind) -> Self {
        self.entry_kind = entry_kind;
        self
    }

    /// Recomputes the cached due date from the rule, using the last execution
    /// date as the base when one exists and `today` otherwise.
    pub fn refresh(&mut self, today: NaiveDate) {
        let base = self.last_executed.unwrap_or(today);
        self.next_due = next_due_date(self.kind, self.recurrence_day, base);
    }

    /// Replaces the recurrence rule and restores the due-date cache.
    pub fn set_rule(
        &mut self,
        kind: RecurrenceKind,
        recurrence_day: Option<u32>,
        today: NaiveDate,
    ) {
        self.kind = kind;
        self.recurrence_day = recurrence_day;
        self.refresh(today);
    }

    /// Whether the template should run on `today`. Inactive templates are
    /// never due.
    pub fn is_due(&self, today: NaiveDate) -> bool {
        if !self.is_active {
            return false;
        }
        self.next_due <= today
    }

    /// Materializes one transaction instance and advances the schedule.
    pub fn execute(&mut self, date: NaiveDate) -> Transaction {
        self.last_executed = Some(date);
        self.next_due = next_due_date(self.kind, self.recurrence_day, date);
        let mut txn = Transaction::new(self.category_id, self.amount, date, self.entry_kind);
        txn.note = Some(self.name.clone());
        txn.template_id = Some(self.id);
        txn
    }
}

/// Recomputes cached due dates for every template in the list.
pub fn refresh_due_dates(templates: &mut [RecurringTemplate], today: NaiveDate) {
    for template in templates.iter_mut() {
        template.refresh(today);
    }
    debug!(count = templates.len(), "refreshed template due dates");
}

/// Active templates whose due date is on or before `today`.
pub fn due_templates(
    templates: &[RecurringTemplate],
    today: NaiveDate,
) -> Vec<&RecurringTemplate> {
    templates
        .iter()
        .filter(|template| template.is_due(today))
        .collect()
}

/// Executes every due template once, returning the materialized transactions
/// in input order.
pub fn materialize_due(templates: &mut [RecurringTemplate], today: NaiveDate) -> Vec<Transaction> {
    let mut created = Vec::new();
    for template in templates.iter_mut() {
        if !template.is_due(today) {
            continue;
        }
        debug!(template = %template.id, name = %template.name, "materializing due template");
        created.push(template.execute(today));
    }
    if !created.is_empty() {
        info!(count = created.len(), "materialized due templates");
    }
    created
}
