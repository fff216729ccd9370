//! Domain data types
//!
//! Request/response-scoped shapes exchanged with the native backend.
//! Nothing here owns persistent state; persistence lifecycle belongs to
//! the external store.

pub mod dumps;
pub mod game;
pub mod log;
pub mod page;
pub mod settings;
pub mod stats;

pub use dumps::{DumpInfo, DumpKind, DumpVersions};
pub use game::Game;
pub use log::{Log, LogSortField, LogStatus, SortOrder};
pub use page::{DashboardPage, LogDetail, LogFormData, RecentEntry};
pub use settings::{ProcessMonitoringSettings, SettingsForm, UserSettings};
pub use stats::{DashboardStatistics, DateWindow};
