//! Shared traits and calendar helpers for budgeting primitives.

use chrono::{Datelike, Duration, Month, NaiveDate};

/// Exposes a stable identifier for in-memory entities.
pub trait Identifiable {
    fn id(&self) -> u32;
}

/// Provides read-only access to an entity's display name.
pub trait NamedEntity {
    fn name(&self) -> &str;
}

/// Converts an entity into a user-facing display label.
pub trait Displayable {
    fn display_label(&self) -> String;
}

/// Returns the first and last day of the given month.
pub fn month_window(year: i32, month: Month) -> (NaiveDate, NaiveDate) {
    let month = month.number_from_month();
    let first = NaiveDate::from_ymd_opt(year, month, 1)
        .unwrap_or_else(|| NaiveDate::from_ymd_opt(year, 1, 1).expect("january exists"));
    let last = NaiveDate::from_ymd_opt(year, month, days_in_month(year, month))
        .unwrap_or(first);
    (first, last)
}

pub fn days_in_month(year: i32, month: u32) -> u32 {
    let next_month = if month == 12 { 1 } else { month + 1 };
    let next_year = if month == 12 { year + 1 } else { year };
    let first_next = NaiveDate::from_ymd_opt(next_year, next_month, 1)
        .unwrap_or_else(|| NaiveDate::from_ymd_opt(year, month, 28).expect("valid fallback"));
    let last_current = first_next - Duration::days(1);
    last_current.day()
}

/// Rounds `part / whole` to a whole percentage. Zero when `whole` is zero.
pub fn percent_of(part: i64, whole: i64) -> u32 {
    if whole <= 0 {
        return 0;
    }
    ((part as f64 / whole as f64) * 100.0).round() as u32
}
