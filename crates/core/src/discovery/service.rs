//! Discovery service - recommendations and catalog search

use std::sync::Arc;

use gamelog_domain::{Game, LogSortField, LogStatus, Result, SortOrder};
use tracing::debug;

use crate::dashboard::ports::{CatalogProvider, LogStore};

/// Composes the similar-games and game-search screens.
pub struct DiscoveryService {
    store: Arc<dyn LogStore>,
    catalog: Arc<dyn CatalogProvider>,
}

impl DiscoveryService {
    /// Create a new discovery service.
    pub fn new(store: Arc<dyn LogStore>, catalog: Arc<dyn CatalogProvider>) -> Self {
        Self { store, catalog }
    }

    /// Recommendations derived from the played library.
    ///
    /// Collects the related-game ids of every owned catalog item,
    /// flattens and deduplicates them, then batch-fetches the result.
    /// These are recommendations, not owned records, so there is no join
    /// back against logs.
    pub async fn similar_games(&self) -> Result<Vec<Game>> {
        let filter = LogStatus::played();
        let logs = self.store.logs(LogSortField::FinishedOn, SortOrder::Desc, &filter).await?;

        let mut game_ids: Vec<i64> = Vec::new();
        for log in &logs {
            if !game_ids.contains(&log.game_id) {
                game_ids.push(log.game_id);
            }
        }
        if game_ids.is_empty() {
            return Ok(Vec::new());
        }

        let owned = self.catalog.games_by_id(&game_ids).await?;

        let mut similar_ids: Vec<i64> = Vec::new();
        for game in &owned {
            for &id in game.similar_games.iter().flatten() {
                if !similar_ids.contains(&id) {
                    similar_ids.push(id);
                }
            }
        }
        if similar_ids.is_empty() {
            return Ok(Vec::new());
        }

        debug!(owned = owned.len(), candidates = similar_ids.len(), "fetching similar games");
        self.catalog.games_by_id(&similar_ids).await
    }

    /// Full-text catalog search for the game-search screen.
    pub async fn search(&self, query: &str) -> Result<Vec<Game>> {
        self.catalog.search_games(query).await
    }

    /// Random highly ranked games shown before the user searches.
    pub async fn random_top_games(&self, amount: u32) -> Result<Vec<Game>> {
        self.catalog.random_top_games(amount).await
    }
}
