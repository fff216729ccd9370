//! Calendar-month statistics windows
//!
//! The dashboard compares the month in progress against the month before
//! it. Windows are half-open `[start, end)`, calendar-month-aligned and
//! contiguous, computed with calendar arithmetic so year boundaries
//! (December -> January) stay correct.

use chrono::{Datelike, NaiveDate};
use gamelog_domain::DateWindow;

/// First day of the given month. Day 1 of a valid month always exists,
/// so the fallback is unreachable for any date chrono can represent.
fn month_start(year: i32, month: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, 1).unwrap_or(NaiveDate::MIN)
}

/// First day of the month after the given one.
fn next_month_start(year: i32, month: u32) -> NaiveDate {
    if month == 12 {
        month_start(year + 1, 1)
    } else {
        month_start(year, month + 1)
    }
}

/// First day of the month before the given one.
fn previous_month_start(year: i32, month: u32) -> NaiveDate {
    if month == 1 {
        month_start(year - 1, 12)
    } else {
        month_start(year, month - 1)
    }
}

/// The two adjacent statistics windows for a reference date, ordered
/// `[last period, this period]`.
///
/// "This period" spans the entirety of the current calendar month
/// regardless of where in the month `today` falls; "last period" is the
/// calendar month immediately before it.
pub fn trailing_month_windows(today: NaiveDate) -> [DateWindow; 2] {
    let this_start = month_start(today.year(), today.month());
    let next_start = next_month_start(today.year(), today.month());
    let last_start = previous_month_start(today.year(), today.month());

    [DateWindow::new(last_start, this_start), DateWindow::new(this_start, next_start)]
}
