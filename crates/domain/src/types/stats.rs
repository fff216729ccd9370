//! Statistics types
//!
//! Aggregate counters the dashboard requests per calendar-month window.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Aggregate play statistics for one date window.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardStatistics {
    /// Total minutes played within the window.
    pub total_minutes_played: i64,

    /// Distinct titles played within the window.
    pub total_games_played: i64,

    /// Titles completed within the window.
    pub total_games_completed: i64,
}

impl DashboardStatistics {
    /// The documented zero-valued payload.
    pub fn zero() -> Self {
        Self { total_minutes_played: 0, total_games_played: 0, total_games_completed: 0 }
    }
}

/// A half-open date interval `[start, end)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateWindow {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateWindow {
    /// Create a window. `start` must precede `end`.
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        debug_assert!(start < end, "window start must precede its end");
        Self { start, end }
    }

    /// Whether `date` falls inside the window.
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date < self.end
    }
}
