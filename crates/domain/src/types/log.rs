//! Play-session log types
//!
//! A `Log` is a user-authored play-session entry. Identifiers and
//! timestamps are owned by the store; this layer only reads them.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/* -------------------------------------------------------------------------- */
/* Status */
/* -------------------------------------------------------------------------- */

/// Status of a logged game.
///
/// Closed enumeration; the wire representation is the lowercase name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogStatus {
    Wishlist,
    Backlog,
    Playing,
    Completed,
    Played,
    Abandoned,
    Retired,
}

impl LogStatus {
    /// Every status, in declaration order.
    pub const ALL: [Self; 7] = [
        Self::Wishlist,
        Self::Backlog,
        Self::Playing,
        Self::Completed,
        Self::Played,
        Self::Abandoned,
        Self::Retired,
    ];

    /// Statuses that count as "played" for recency and statistics views.
    ///
    /// A wishlisted or backlogged game has not been played, so both are
    /// excluded. The same filter must be used for every activity fetch
    /// within one pipeline run.
    pub fn played() -> Vec<Self> {
        Self::ALL
            .iter()
            .copied()
            .filter(|status| !matches!(status, Self::Wishlist | Self::Backlog))
            .collect()
    }

    /// Wire name of the status.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Wishlist => "wishlist",
            Self::Backlog => "backlog",
            Self::Playing => "playing",
            Self::Completed => "completed",
            Self::Played => "played",
            Self::Abandoned => "abandoned",
            Self::Retired => "retired",
        }
    }
}

/* -------------------------------------------------------------------------- */
/* Log */
/* -------------------------------------------------------------------------- */

/// A user-authored play-session entry ("log").
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Log {
    pub id: i64,

    /// Creation timestamp, owned by the store.
    pub created_at: String,

    /// Last-update timestamp, owned by the store.
    pub updated_at: String,

    /// Foreign reference to the catalog item this log is about.
    pub game_id: i64,

    pub status: LogStatus,

    pub rating: i32,

    pub notes: String,

    pub started_on: NaiveDate,

    pub finished_on: NaiveDate,

    pub minutes_played: i32,
}

impl Log {
    /// Whether the game was finished. Derived from status; there is no
    /// separate boolean on the wire.
    pub fn is_finished(&self) -> bool {
        self.status == LogStatus::Completed
    }
}

/* -------------------------------------------------------------------------- */
/* Sorting */
/* -------------------------------------------------------------------------- */

/// Sort field accepted by the log store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LogSortField {
    Title,
    TimePlayedMinutes,
    StartedOn,
    FinishedOn,
    CreatedAt,
}

impl LogSortField {
    /// Wire name of the sort field.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Title => "title",
            Self::TimePlayedMinutes => "time_played_minutes",
            Self::StartedOn => "started_on",
            Self::FinishedOn => "finished_on",
            Self::CreatedAt => "created_at",
        }
    }
}

/// Sort direction accepted by the log store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    Asc,
    Desc,
}

impl SortOrder {
    /// Wire name of the sort direction.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Asc => "asc",
            Self::Desc => "desc",
        }
    }
}
