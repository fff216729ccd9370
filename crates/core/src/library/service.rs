//! Library service - log listing and single-log composition

use std::sync::Arc;

use gamelog_domain::{
    GameLogError, Log, LogDetail, LogFormData, LogSortField, LogStatus, Result, SortOrder,
};

use crate::dashboard::ports::{CatalogProvider, LogStore};

/// Composes the log-listing, log-detail and log-edit screens.
pub struct LibraryService {
    store: Arc<dyn LogStore>,
    catalog: Arc<dyn CatalogProvider>,
}

impl LibraryService {
    /// Create a new library service.
    pub fn new(store: Arc<dyn LogStore>, catalog: Arc<dyn CatalogProvider>) -> Self {
        Self { store, catalog }
    }

    /// Full log listing. An empty `filter` means every status.
    pub async fn list_logs(
        &self,
        sort_by: LogSortField,
        sort_order: SortOrder,
        filter: &[LogStatus],
    ) -> Result<Vec<Log>> {
        self.store.logs(sort_by, sort_order, filter).await
    }

    /// A single log joined to its catalog metadata.
    ///
    /// The catalog not knowing the referenced game is a consistency
    /// failure, not an empty page.
    pub async fn log_detail(&self, id: i64) -> Result<LogDetail> {
        let log = self.store.log_by_id(id).await?;
        let games = self.catalog.games_by_id(&[log.game_id]).await?;
        let game = games.into_iter().find(|game| game.id == log.game_id).ok_or_else(|| {
            GameLogError::Consistency(format!(
                "log {} references game {} missing from the catalog",
                log.id, log.game_id
            ))
        })?;

        Ok(LogDetail { log, game })
    }

    /// Form-ready prefill for the edit screen of an existing log.
    pub async fn edit_form(&self, id: i64) -> Result<(LogDetail, LogFormData)> {
        let detail = self.log_detail(id).await?;
        let form = LogFormData::from(&detail.log);
        Ok((detail, form))
    }
}
