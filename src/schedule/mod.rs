//! Recurrence engine: next-due-date computation and template scheduling.

pub mod recurrence;
pub mod template;

pub use recurrence::{next_due_date, recurrence_label, RecurrenceKind};
pub use template::{due_templates, materialize_due, refresh_due_dates, RecurringTemplate};
