use std::collections::HashMap;

use chrono::{Datelike, Duration, NaiveDate};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

/// How often a recurring template repeats.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum RecurrenceKind {
    Daily,
    Weekly,
    Monthly,
    Yearly,
}

static KIND_LABELS: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        ("daily", "every day"),
        ("weekly", "every week"),
        ("monthly", "every month"),
        ("yearly", "every year"),
    ])
});

impl RecurrenceKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            RecurrenceKind::Daily => "daily",
            RecurrenceKind::Weekly => "weekly",
            RecurrenceKind::Monthly => "monthly",
            RecurrenceKind::Yearly => "yearly",
        }
    }

    pub fn label(&self) -> &'static str {
        recurrence_label(self.as_str())
    }
}

/// Human-readable schedule label; unrecognized input maps to "unknown".
pub fn recurrence_label(kind: &str) -> &'static str {
    KIND_LABELS.get(kind).copied().unwrap_or("unknown")
}

/// Computes the next due date for a recurrence rule.
///
/// `base` is the last execution date when one exists, otherwise the current
/// date as supplied by the caller. The meaning of `recurrence_day` depends on
/// the kind: day of week (0 = Sunday) for weekly, day of month for monthly,
/// and `month * 100 + day` for yearly (1225 = Dec 25). Days that do not exist
/// in the target month are clamped to its last valid day.
pub fn next_due_date(
    kind: RecurrenceKind,
    recurrence_day: Option<u32>,
    base: NaiveDate,
) -> NaiveDate {
    match kind {
        RecurrenceKind::Daily => base + Duration::days(1),
        RecurrenceKind::Weekly => {
            let target = recurrence_day.unwrap_or(0) % 7;
            let current = base.weekday().num_days_from_sunday();
            let mut ahead = (target + 7 - current) % 7;
            // The next occurrence is never "today".
            if ahead == 0 {
                ahead = 7;
            }
            base + Duration::days(ahead as i64)
        }
        RecurrenceKind::Monthly => {
            let (year, month) = month_after(base.year(), base.month());
            let day = recurrence_day.unwrap_or(1).max(1);
            date_clamped(year, month, day)
        }
        RecurrenceKind::Yearly => {
            let year = base.year() + 1;
            match recurrence_day {
                Some(code) => {
                    let month = (code / 100).clamp(1, 12);
                    let day = (code % 100).max(1);
                    date_clamped(year, month, day)
                }
                None => date_clamped(year, base.month(), base.day()),
            }
        }
    }
}

fn month_after(year: i32, month: u32) -> (i32, u32) {
    if month == 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    }
}

fn date_clamped(year: i32, month: u32, day: u32) -> NaiveDate {
    let day = day.min(days_in_month(year, month));
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

fn days_in_month(year: i32, month: u32) -> u32 {
    let (next_year, next_month) = month_after(year, month);
    let first_next = NaiveDate::from_ymd_opt(next_year, next_month, 1).unwrap();
    (first_next - Duration::days(1)).day()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    #[test]
    fn daily_advances_one_day() {
        assert_eq!(
            next_due_date(RecurrenceKind::Daily, None, date(2024, 12, 31)),
            date(2025, 1, 1)
        );
    }

    #[test]
    fn weekly_defaults_to_sunday() {
        // 2024-01-03 is a Wednesday.
        assert_eq!(
            next_due_date(RecurrenceKind::Weekly, None, date(2024, 1, 3)),
            date(2024, 1, 7)
        );
    }

    #[test]
    fn monthly_defaults_to_first_of_month() {
        assert_eq!(
            next_due_date(RecurrenceKind::Monthly, None, date(2024, 3, 15)),
            date(2024, 4, 1)
        );
    }

    #[test]
    fn days_in_month_handles_leap_years() {
        assert_eq!(days_in_month(2024, 2), 29);
        assert_eq!(days_in_month(2023, 2), 28);
        assert_eq!(days_in_month(2024, 12), 31);
    }

    #[test]
    fn unknown_kind_string_gets_fallback_label() {
        assert_eq!(recurrence_label("fortnightly"), "unknown");
        assert_eq!(recurrence_label("monthly"), "every month");
    }
}
