//! Port interfaces for the store and catalog collaborators
//!
//! These traits define the boundaries between orchestration logic and
//! the native backend. Implementations live in `gamelog-infra` and talk
//! to the backend through the remote-invocation primitive.

use async_trait::async_trait;
use gamelog_domain::{
    DashboardStatistics, DateWindow, Game, Log, LogSortField, LogStatus, Result, SortOrder,
    UserSettings,
};

/// Trait for reading logs, statistics and settings from the store.
///
/// The store owns persistence and aggregation; this layer only shapes
/// requests and consumes validated responses.
#[async_trait]
pub trait LogStore: Send + Sync {
    /// Most recent logs, bounded by `amount`, keeping only `filter` statuses.
    async fn recent_logs(&self, amount: u32, filter: &[LogStatus]) -> Result<Vec<Log>>;

    /// Every log matching `filter`, sorted by the store.
    async fn logs(
        &self,
        sort_by: LogSortField,
        sort_order: SortOrder,
        filter: &[LogStatus],
    ) -> Result<Vec<Log>>;

    /// A single log by identifier.
    async fn log_by_id(&self, id: i64) -> Result<Log>;

    /// Aggregate counters for one half-open date window.
    async fn dashboard_statistics(&self, window: DateWindow) -> Result<DashboardStatistics>;

    /// The current user settings.
    async fn user_settings(&self) -> Result<UserSettings>;
}

/// Trait for fetching game metadata from the external catalog.
#[async_trait]
pub trait CatalogProvider: Send + Sync {
    /// Batch-fetch catalog items by identifier.
    async fn games_by_id(&self, game_ids: &[i64]) -> Result<Vec<Game>>;

    /// Full-text search of the catalog.
    async fn search_games(&self, query: &str) -> Result<Vec<Game>>;

    /// A random sample of highly ranked catalog items.
    async fn random_top_games(&self, amount: u32) -> Result<Vec<Game>>;
}
