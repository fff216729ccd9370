//! Page payload types
//!
//! One versioned contract per screen, returned by the page-load
//! commands. Optional fields are explicit; earlier historical variants
//! of these shapes (with access tokens, with settings-driven redirects)
//! are not kept.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::game::Game;
use super::log::{Log, LogStatus};
use super::stats::DashboardStatistics;

/// A recent-activity entry joined to its catalog metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecentEntry {
    pub log: Log,
    pub game: Game,
}

/// Dashboard page payload.
///
/// `statistics` is always a pair, ordered `[last period, this period]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardPage {
    pub username: String,
    pub statistics: [DashboardStatistics; 2],
    pub recent_games: Vec<RecentEntry>,
    pub similar_games: Vec<Game>,
}

impl DashboardPage {
    /// The documented zero-valued payload, returned without any backend
    /// call when the host is not attached.
    pub fn empty() -> Self {
        Self {
            username: String::new(),
            statistics: [DashboardStatistics::zero(), DashboardStatistics::zero()],
            recent_games: Vec::new(),
            similar_games: Vec::new(),
        }
    }
}

/// Single-log page payload: the log joined to its catalog metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogDetail {
    pub log: Log,
    pub game: Game,
}

impl LogDetail {
    /// The documented zero-valued payload, returned without any backend
    /// call when the host is not attached.
    pub fn empty() -> Self {
        Self {
            log: Log {
                id: 0,
                created_at: String::new(),
                updated_at: String::new(),
                game_id: 0,
                status: LogStatus::Wishlist,
                rating: 0,
                notes: String::new(),
                started_on: NaiveDate::default(),
                finished_on: NaiveDate::default(),
                minutes_played: 0,
            },
            game: Game::empty(),
        }
    }
}

/// Form-ready shape for the log edit screen.
///
/// Time played is decomposed into hours and minutes for the two form
/// fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogFormData {
    pub rating: i32,
    pub status: LogStatus,
    pub notes: String,
    pub started_on: NaiveDate,
    pub finished_on: NaiveDate,
    pub time_played_hours: i32,
    pub time_played_minutes: i32,
}

impl LogFormData {
    /// The blank form, shown by detached hosts before the real log is
    /// available. Status starts at the first option.
    pub fn empty() -> Self {
        Self {
            rating: 0,
            status: LogStatus::Wishlist,
            notes: String::new(),
            started_on: NaiveDate::default(),
            finished_on: NaiveDate::default(),
            time_played_hours: 0,
            time_played_minutes: 0,
        }
    }
}

impl From<&Log> for LogFormData {
    fn from(log: &Log) -> Self {
        Self {
            rating: log.rating,
            status: log.status,
            notes: log.notes.clone(),
            started_on: log.started_on,
            finished_on: log.finished_on,
            time_played_hours: log.minutes_played / 60,
            time_played_minutes: log.minutes_played % 60,
        }
    }
}
