//! Library page-load commands

use std::sync::Arc;
use std::time::Instant;

use gamelog_domain::{Log, LogDetail, LogFormData, LogSortField, LogStatus, Result, SortOrder};
use tracing::info;

use crate::utils::logging::log_command_execution;
use crate::AppContext;

/// Full log listing for the library screen.
pub async fn get_logs(
    ctx: &Arc<AppContext>,
    sort_by: LogSortField,
    sort_order: SortOrder,
    filter: &[LogStatus],
) -> Result<Vec<Log>> {
    let command_name = "library::get_logs";

    if !ctx.host_attached() {
        return Ok(Vec::new());
    }

    let start = Instant::now();
    info!(command = command_name, "Listing logs");

    let result = ctx.library.list_logs(sort_by, sort_order, filter).await;
    log_command_execution(command_name, start.elapsed(), &result);

    result
}

/// A single log joined to its catalog metadata.
pub async fn get_log_detail(ctx: &Arc<AppContext>, id: i64) -> Result<LogDetail> {
    let command_name = "library::get_log_detail";

    if !ctx.host_attached() {
        return Ok(LogDetail::empty());
    }

    let start = Instant::now();
    info!(command = command_name, id, "Loading log detail");

    let result = ctx.library.log_detail(id).await;
    log_command_execution(command_name, start.elapsed(), &result);

    result
}

/// Prefilled form data for editing an existing log.
pub async fn get_log_edit_form(
    ctx: &Arc<AppContext>,
    id: i64,
) -> Result<(LogDetail, LogFormData)> {
    let command_name = "library::get_log_edit_form";

    if !ctx.host_attached() {
        return Ok((LogDetail::empty(), LogFormData::empty()));
    }

    let start = Instant::now();
    info!(command = command_name, id, "Loading log edit form");

    let result = ctx.library.edit_form(id).await;
    log_command_execution(command_name, start.elapsed(), &result);

    result
}
