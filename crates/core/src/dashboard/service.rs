//! Dashboard page composition - gate, fetch, join, merge

use std::collections::HashMap;
use std::sync::Arc;

use chrono::NaiveDate;
use gamelog_domain::{
    DashboardPage, Game, GameLogError, Log, LogSortField, LogStatus, RecentEntry, Result,
    SortOrder, UserSettings,
};
use tracing::debug;

use super::ports::{CatalogProvider, LogStore};
use super::windows::trailing_month_windows;
use crate::gates::{GateDecision, GateSequencer, Route};

/// How many entries the recent-activity strip shows.
pub const RECENT_LOG_COUNT: u32 = 6;

/// Outcome of one dashboard navigation.
#[derive(Debug, Clone, PartialEq)]
pub enum DashboardLoad {
    /// A gate failed; the caller must navigate to `Route` instead.
    Redirect(Route),
    /// An update is pending; the caller must swap to the updater surface.
    Suspend(String),
    /// Gates passed and the page composed.
    Page(Box<DashboardPage>),
}

/// Composes the dashboard: runs the gate chain, then issues the backend
/// fetches, joins activity to catalog metadata by identifier and merges
/// everything into one page payload.
pub struct DashboardService {
    gates: GateSequencer,
    store: Arc<dyn LogStore>,
    catalog: Arc<dyn CatalogProvider>,
}

impl DashboardService {
    /// Create a new dashboard service.
    pub fn new(
        gates: GateSequencer,
        store: Arc<dyn LogStore>,
        catalog: Arc<dyn CatalogProvider>,
    ) -> Self {
        Self { gates, store, catalog }
    }

    /// Load the dashboard for one navigation.
    ///
    /// Gates run first and strictly in order; composition only starts
    /// once every gate has passed. Nothing here retries a failed call.
    pub async fn load(&self, today: NaiveDate) -> Result<DashboardLoad> {
        match self.gates.evaluate().await? {
            GateDecision::Redirect(route) => Ok(DashboardLoad::Redirect(route)),
            GateDecision::Suspend(reason) => Ok(DashboardLoad::Suspend(reason)),
            GateDecision::Proceed(settings) => {
                let page = self.compose(&settings, today).await?;
                Ok(DashboardLoad::Page(Box::new(page)))
            }
        }
    }

    /// Compose the page once gates have passed.
    async fn compose(&self, settings: &UserSettings, today: NaiveDate) -> Result<DashboardPage> {
        // One filter value per run, shared by the recent and the full
        // fetch: wishlisted and backlogged games have not been played.
        let filter = LogStatus::played();
        let [last_window, this_window] = trailing_month_windows(today);

        // The four fetches have no data dependency on each other.
        let (recent_logs, all_logs, last_stats, this_stats) = tokio::try_join!(
            self.store.recent_logs(RECENT_LOG_COUNT, &filter),
            self.store.logs(LogSortField::FinishedOn, SortOrder::Desc, &filter),
            self.store.dashboard_statistics(last_window),
            self.store.dashboard_statistics(this_window),
        )?;

        let game_ids = distinct_game_ids(&all_logs);
        let games = self.catalog.games_by_id(&game_ids).await?;
        let games_by_id: HashMap<i64, &Game> = games.iter().map(|game| (game.id, game)).collect();

        let recent_games = join_recent(recent_logs, &games_by_id)?;

        let similar_ids = distinct_similar_ids(&games);
        let similar_games = if similar_ids.is_empty() {
            Vec::new()
        } else {
            self.catalog.games_by_id(&similar_ids).await?
        };

        debug!(
            recent = recent_games.len(),
            similar = similar_games.len(),
            "dashboard composed"
        );

        Ok(DashboardPage {
            username: settings.username.clone(),
            statistics: [last_stats, this_stats],
            recent_games,
            similar_games,
        })
    }
}

/// Distinct catalog identifiers referenced by `logs`, first-seen order.
fn distinct_game_ids(logs: &[Log]) -> Vec<i64> {
    let mut ids = Vec::new();
    for log in logs {
        if !ids.contains(&log.game_id) {
            ids.push(log.game_id);
        }
    }
    ids
}

/// Distinct related-game identifiers across `games`, first-seen order.
fn distinct_similar_ids(games: &[Game]) -> Vec<i64> {
    let mut ids = Vec::new();
    for game in games {
        for &id in game.similar_games.iter().flatten() {
            if !ids.contains(&id) {
                ids.push(id);
            }
        }
    }
    ids
}

/// Attach catalog metadata to each recent log by identifier.
///
/// A referenced identifier missing from the batch result means the
/// store and the catalog have diverged; the record is never silently
/// dropped.
fn join_recent(logs: Vec<Log>, games_by_id: &HashMap<i64, &Game>) -> Result<Vec<RecentEntry>> {
    logs.into_iter()
        .map(|log| {
            let game = games_by_id.get(&log.game_id).copied().ok_or_else(|| {
                GameLogError::Consistency(format!(
                    "log {} references game {} missing from the catalog batch",
                    log.id, log.game_id
                ))
            })?;
            Ok(RecentEntry { log, game: game.clone() })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use async_trait::async_trait;
    use gamelog_domain::{
        DashboardStatistics, DateWindow, ProcessMonitoringSettings, UserSettings,
    };

    use super::*;
    use crate::gates::ports::{UpdateChecker, UpdateInfo};
    use crate::session::Session;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn log(id: i64, game_id: i64) -> Log {
        Log {
            id,
            created_at: "2024-03-01 10:00:00".to_string(),
            updated_at: "2024-03-01 10:00:00".to_string(),
            game_id,
            status: LogStatus::Played,
            rating: 4,
            notes: String::new(),
            started_on: date(2024, 2, 1),
            finished_on: date(2024, 3, 1),
            minutes_played: 120,
        }
    }

    fn game(id: i64, similar: &[i64]) -> Game {
        Game {
            id,
            title: format!("Game {id}"),
            cover_id: None,
            similar_games: (!similar.is_empty()).then(|| similar.to_vec()),
            category: 0,
            version_parent: None,
            total_rating: Some(80.0),
        }
    }

    fn settings() -> UserSettings {
        UserSettings {
            username: "sam".to_string(),
            executable_paths: String::new(),
            process_monitoring: ProcessMonitoringSettings { enabled: false, directory_depth: 3 },
            autostart: false,
            is_first_run: false,
            twitch_client_id: Some("id".to_string()),
            twitch_client_secret: Some("secret".to_string()),
        }
    }

    /// Records every store call so tests can assert ordering and filters.
    struct RecordingStore {
        recent: Vec<Log>,
        all: Vec<Log>,
        calls: Mutex<Vec<String>>,
        filters: Mutex<Vec<Vec<LogStatus>>>,
        windows: Mutex<Vec<DateWindow>>,
    }

    impl RecordingStore {
        fn new(recent: Vec<Log>, all: Vec<Log>) -> Self {
            Self {
                recent,
                all,
                calls: Mutex::new(Vec::new()),
                filters: Mutex::new(Vec::new()),
                windows: Mutex::new(Vec::new()),
            }
        }
    }

    #[async_trait]
    impl LogStore for RecordingStore {
        async fn recent_logs(&self, amount: u32, filter: &[LogStatus]) -> Result<Vec<Log>> {
            assert_eq!(amount, RECENT_LOG_COUNT);
            self.calls.lock().unwrap().push("recent_logs".to_string());
            self.filters.lock().unwrap().push(filter.to_vec());
            Ok(self.recent.clone())
        }

        async fn logs(
            &self,
            sort_by: LogSortField,
            sort_order: SortOrder,
            filter: &[LogStatus],
        ) -> Result<Vec<Log>> {
            assert_eq!(sort_by, LogSortField::FinishedOn);
            assert_eq!(sort_order, SortOrder::Desc);
            self.calls.lock().unwrap().push("logs".to_string());
            self.filters.lock().unwrap().push(filter.to_vec());
            Ok(self.all.clone())
        }

        async fn log_by_id(&self, _: i64) -> Result<Log> {
            panic!("dashboard composition never fetches single logs");
        }

        async fn dashboard_statistics(&self, window: DateWindow) -> Result<DashboardStatistics> {
            self.calls.lock().unwrap().push("dashboard_statistics".to_string());
            self.windows.lock().unwrap().push(window);
            Ok(DashboardStatistics {
                total_minutes_played: 60,
                total_games_played: 2,
                total_games_completed: 1,
            })
        }

        async fn user_settings(&self) -> Result<UserSettings> {
            self.calls.lock().unwrap().push("user_settings".to_string());
            Ok(settings())
        }
    }

    struct FixedCatalog {
        games: Vec<Game>,
        batches: Mutex<Vec<Vec<i64>>>,
    }

    impl FixedCatalog {
        fn new(games: Vec<Game>) -> Self {
            Self { games, batches: Mutex::new(Vec::new()) }
        }
    }

    #[async_trait]
    impl CatalogProvider for FixedCatalog {
        async fn games_by_id(&self, game_ids: &[i64]) -> Result<Vec<Game>> {
            self.batches.lock().unwrap().push(game_ids.to_vec());
            Ok(self
                .games
                .iter()
                .filter(|game| game_ids.contains(&game.id))
                .cloned()
                .collect())
        }

        async fn search_games(&self, _: &str) -> Result<Vec<Game>> {
            panic!("dashboard composition never searches");
        }

        async fn random_top_games(&self, _: u32) -> Result<Vec<Game>> {
            panic!("dashboard composition never samples top games");
        }
    }

    struct NoUpdate;

    #[async_trait]
    impl UpdateChecker for NoUpdate {
        async fn check_for_updates(&self) -> Result<Option<UpdateInfo>> {
            Ok(None)
        }
    }

    struct UpdateAvailable;

    #[async_trait]
    impl UpdateChecker for UpdateAvailable {
        async fn check_for_updates(&self) -> Result<Option<UpdateInfo>> {
            Ok(Some(UpdateInfo { version: "3.0.0".to_string(), notes: None }))
        }
    }

    fn service(
        updates: Arc<dyn UpdateChecker>,
        store: Arc<RecordingStore>,
        catalog: Arc<FixedCatalog>,
    ) -> DashboardService {
        let session = Arc::new(Session::new());
        session.mark_dump_check_completed();
        let gates = GateSequencer::new(
            updates,
            Arc::clone(&store) as Arc<dyn LogStore>,
            session,
        );
        DashboardService::new(gates, store, catalog)
    }

    #[tokio::test]
    async fn composes_full_page() {
        let store = Arc::new(RecordingStore::new(
            vec![log(1, 5), log(2, 9)],
            vec![log(1, 5), log(2, 9), log(3, 5)],
        ));
        let catalog =
            Arc::new(FixedCatalog::new(vec![game(5, &[100, 101]), game(9, &[101]), game(100, &[]), game(101, &[])]));
        let svc = service(Arc::new(NoUpdate), Arc::clone(&store), Arc::clone(&catalog));

        let page = match svc.load(date(2024, 3, 15)).await.unwrap() {
            DashboardLoad::Page(page) => page,
            other => panic!("expected page, got {other:?}"),
        };

        assert_eq!(page.username, "sam");
        assert_eq!(page.recent_games.len(), 2);
        assert_eq!(page.recent_games[0].game.id, 5);
        assert_eq!(page.recent_games[1].game.id, 9);
        // Two windows, previous period first.
        let windows = store.windows.lock().unwrap();
        assert_eq!(windows.len(), 2);
        assert_eq!(windows[0].end, windows[1].start);
        // Related ids flattened and deduplicated into one second batch.
        let batches = catalog.batches.lock().unwrap();
        assert_eq!(batches[0], vec![5, 9]);
        assert_eq!(batches[1], vec![100, 101]);
        assert_eq!(page.similar_games.len(), 2);
    }

    #[tokio::test]
    async fn recent_and_full_fetch_share_one_filter() {
        let store = Arc::new(RecordingStore::new(vec![], vec![]));
        let catalog = Arc::new(FixedCatalog::new(vec![]));
        let svc = service(Arc::new(NoUpdate), Arc::clone(&store), catalog);

        svc.load(date(2024, 3, 15)).await.unwrap();

        let filters = store.filters.lock().unwrap();
        assert_eq!(filters.len(), 2);
        assert_eq!(filters[0], filters[1]);
        assert!(!filters[0].contains(&LogStatus::Wishlist));
        assert!(!filters[0].contains(&LogStatus::Backlog));
        assert_eq!(filters[0].len(), 5);
    }

    #[tokio::test]
    async fn duplicate_game_ids_join_to_equal_metadata() {
        // Recent ids [5, 9, 5]: three joined records, first and third
        // carrying the same catalog data by value.
        let store = Arc::new(RecordingStore::new(
            vec![log(1, 5), log(2, 9), log(3, 5)],
            vec![log(1, 5), log(2, 9), log(3, 5)],
        ));
        let catalog = Arc::new(FixedCatalog::new(vec![game(5, &[]), game(9, &[])]));
        let svc = service(Arc::new(NoUpdate), store, catalog);

        let page = match svc.load(date(2024, 3, 15)).await.unwrap() {
            DashboardLoad::Page(page) => page,
            other => panic!("expected page, got {other:?}"),
        };

        assert_eq!(page.recent_games.len(), 3);
        assert_eq!(page.recent_games[0].game, page.recent_games[2].game);
        assert_eq!(page.recent_games[0].game.id, 5);
        assert_eq!(page.recent_games[1].game.id, 9);
    }

    #[tokio::test]
    async fn missing_catalog_item_fails_loudly() {
        let store = Arc::new(RecordingStore::new(vec![log(1, 42)], vec![log(1, 42)]));
        // The batch result does not include id 42.
        let catalog = Arc::new(FixedCatalog::new(vec![game(5, &[])]));
        let svc = service(Arc::new(NoUpdate), store, catalog);

        let err = svc.load(date(2024, 3, 15)).await.unwrap_err();
        assert!(matches!(err, GameLogError::Consistency(_)), "got {err:?}");
    }

    #[tokio::test]
    async fn suspended_gate_stops_all_composition_calls() {
        let store = Arc::new(RecordingStore::new(vec![log(1, 5)], vec![log(1, 5)]));
        let catalog = Arc::new(FixedCatalog::new(vec![game(5, &[])]));
        let svc = service(Arc::new(UpdateAvailable), Arc::clone(&store), Arc::clone(&catalog));

        let outcome = svc.load(date(2024, 3, 15)).await.unwrap();
        assert!(matches!(outcome, DashboardLoad::Suspend(_)));
        assert!(store.calls.lock().unwrap().is_empty());
        assert!(catalog.batches.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn no_similar_ids_skips_second_batch() {
        let store = Arc::new(RecordingStore::new(vec![log(1, 5)], vec![log(1, 5)]));
        let catalog = Arc::new(FixedCatalog::new(vec![game(5, &[])]));
        let svc = service(Arc::new(NoUpdate), store, Arc::clone(&catalog));

        let page = match svc.load(date(2024, 3, 15)).await.unwrap() {
            DashboardLoad::Page(page) => page,
            other => panic!("expected page, got {other:?}"),
        };

        assert!(page.similar_games.is_empty());
        assert_eq!(catalog.batches.lock().unwrap().len(), 1);
    }
}
