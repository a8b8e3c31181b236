//! Calendar month arithmetic for the monthly stepping loop.

use chrono::{DateTime, Datelike, Months, Utc};

/// Number of whole calendar months between two dates.
///
/// Year/month arithmetic: `(endYear - startYear) * 12 + (endMonth -
/// startMonth)`, decremented by one when the end day-of-month comes before
/// the start day-of-month, floored at zero. This is exactly the number of
/// projections a simulation produces.
pub fn month_span(start: DateTime<Utc>, end: DateTime<Utc>) -> u32 {
    let mut months =
        (end.year() - start.year()) * 12 + (end.month() as i32 - start.month() as i32);
    if end.day() < start.day() {
        months -= 1;
    }
    months.max(0) as u32
}

/// The date `offset` calendar months after `start`, with calendar-correct
/// rollover (Jan 31 + 1 month clamps into February rather than stepping a
/// fixed 30 days).
pub fn add_months(start: DateTime<Utc>, offset: u32) -> DateTime<Utc> {
    start
        .checked_add_months(Months::new(offset))
        .unwrap_or(start)
}

/// Whether two dates fall in the same calendar year and month.
/// Day-of-month is intentionally ignored.
pub fn same_month(a: DateTime<Utc>, b: DateTime<Utc>) -> bool {
    a.year() == b.year() && a.month() == b.month()
}
