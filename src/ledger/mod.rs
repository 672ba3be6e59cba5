//! Domain models shared by the scheduling and budgeting engines.

pub mod category;
pub mod transaction;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::errors::FinanceError;

pub use category::{Category, CategoryKind};
pub use transaction::{Transaction, TransactionKind};

/// Inclusive calendar range used to scope aggregations.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct DateWindow {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateWindow {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self, FinanceError> {
        if end < start {
            return Err(FinanceError::InvalidRef(format!(
                "window end {} precedes start {}",
                end, start
            )));
        }
        Ok(Self { start, end })
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }
}
