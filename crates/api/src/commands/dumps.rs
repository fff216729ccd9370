//! Dump-management commands
//!
//! The dump-manager screen is the target of the freshness gate. Once the
//! user has reviewed (and possibly refreshed) the metadata dumps,
//! `complete_dump_check` marks the session so the gate stands down.

use std::sync::Arc;
use std::time::Instant;

use gamelog_domain::{DumpInfo, DumpVersions, Result};
use tracing::info;

use crate::utils::logging::log_command_execution;
use crate::AppContext;

/// Versions of the dumps already imported into the store.
pub async fn get_local_dump_versions(ctx: &Arc<AppContext>) -> Result<DumpVersions> {
    let command_name = "dumps::get_local_dump_versions";

    if !ctx.host_attached() {
        return Ok(DumpVersions::empty());
    }

    let start = Instant::now();

    let result = ctx.dumps.local_dump_versions().await;
    log_command_execution(command_name, start.elapsed(), &result);

    result
}

/// Every dump the provider currently offers.
pub async fn get_all_dump_info(ctx: &Arc<AppContext>) -> Result<Vec<DumpInfo>> {
    let command_name = "dumps::get_all_dump_info";

    if !ctx.host_attached() {
        return Ok(Vec::new());
    }

    let start = Instant::now();

    let result = ctx.dumps.all_dump_info().await;
    log_command_execution(command_name, start.elapsed(), &result);

    result
}

/// Download the given dumps into a staging directory.
pub async fn download_dumps(
    ctx: &Arc<AppContext>,
    dumps: &[DumpInfo],
    to_directory: &str,
) -> Result<()> {
    let command_name = "dumps::download_dumps";

    if !ctx.host_attached() {
        return Ok(());
    }

    let start = Instant::now();
    info!(command = command_name, count = dumps.len(), to_directory, "Downloading dumps");

    let result = ctx.dumps.download_dumps(dumps, to_directory).await;
    log_command_execution(command_name, start.elapsed(), &result);

    result
}

/// Import previously downloaded dumps from a staging directory.
pub async fn import_dumps(ctx: &Arc<AppContext>, from_directory: &str) -> Result<()> {
    let command_name = "dumps::import_dumps";

    if !ctx.host_attached() {
        return Ok(());
    }

    let start = Instant::now();
    info!(command = command_name, from_directory, "Importing dumps");

    let result = ctx.dumps.import_dumps(from_directory).await;
    log_command_execution(command_name, start.elapsed(), &result);

    result
}

/// Mark the session's dump check complete so the dashboard gate stands
/// down for the rest of the process lifetime.
pub fn complete_dump_check(ctx: &Arc<AppContext>) {
    info!(command = "dumps::complete_dump_check", "Dump check marked complete");
    ctx.session.mark_dump_check_completed();
}
