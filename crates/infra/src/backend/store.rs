//! Remote log store adapter

use std::sync::Arc;

use async_trait::async_trait;
use gamelog_core::LogStore;
use gamelog_domain::{
    DashboardStatistics, DateWindow, GameLogError, Log, LogSortField, LogStatus, Result,
    SortOrder, UserSettings,
};
use serde_json::json;
use tracing::debug;

use super::parse;
use crate::invoke::Invoker;

/// `LogStore` implementation over the remote-invocation boundary.
pub struct RemoteLogStore {
    invoker: Arc<dyn Invoker>,
}

impl RemoteLogStore {
    /// Create a new remote log store.
    pub fn new(invoker: Arc<dyn Invoker>) -> Self {
        Self { invoker }
    }
}

#[async_trait]
impl LogStore for RemoteLogStore {
    async fn recent_logs(&self, amount: u32, filter: &[LogStatus]) -> Result<Vec<Log>> {
        let args = json!({ "amount": amount, "filter": filter });
        let response = self
            .invoker
            .invoke("get_recent_logs", args)
            .await
            .map_err(|err| GameLogError::Store(err.reason))?;
        parse("get_recent_logs", response)
    }

    async fn logs(
        &self,
        sort_by: LogSortField,
        sort_order: SortOrder,
        filter: &[LogStatus],
    ) -> Result<Vec<Log>> {
        let args = json!({
            "sortBy": sort_by.as_str(),
            "sortOrder": sort_order.as_str(),
            "filter": filter,
        });
        let response = self
            .invoker
            .invoke("get_logs", args)
            .await
            .map_err(|err| GameLogError::Store(err.reason))?;
        parse("get_logs", response)
    }

    async fn log_by_id(&self, id: i64) -> Result<Log> {
        let response = self
            .invoker
            .invoke("get_log_by_id", json!({ "id": id }))
            .await
            .map_err(|err| GameLogError::Store(err.reason))?;
        parse("get_log_by_id", response)
    }

    async fn dashboard_statistics(&self, window: DateWindow) -> Result<DashboardStatistics> {
        debug!(start = %window.start, end = %window.end, "requesting statistics window");
        let args = json!({
            "startDate": window.start.to_string(),
            "endDate": window.end.to_string(),
        });
        let response = self
            .invoker
            .invoke("get_dashboard_statistics", args)
            .await
            .map_err(|err| GameLogError::Store(err.reason))?;
        parse("get_dashboard_statistics", response)
    }

    async fn user_settings(&self) -> Result<UserSettings> {
        let response = self
            .invoker
            .invoke("get_user_settings", json!({}))
            .await
            .map_err(|err| GameLogError::Store(err.reason))?;
        parse("get_user_settings", response)
    }
}
