//! Dashboard page-load command

use std::sync::Arc;
use std::time::Instant;

use chrono::{Local, NaiveDate};
use gamelog_core::{DashboardLoad, Route};
use gamelog_domain::{DashboardPage, GameLogError, Result};
use tracing::{info, warn};

use crate::utils::logging::log_command_execution;
use crate::AppContext;

/// Load the dashboard for today's local calendar date.
pub async fn load_dashboard(ctx: &Arc<AppContext>) -> Result<DashboardLoad> {
    load_dashboard_at(ctx, Local::now().date_naive()).await
}

/// Load the dashboard for an explicit reference date.
///
/// Runs the gate chain, composes the page, and applies the
/// application-edge policy: a credential failure sends the user to
/// settings rather than rendering a broken page. All other failures
/// propagate to the rendering layer's error surface.
pub async fn load_dashboard_at(ctx: &Arc<AppContext>, today: NaiveDate) -> Result<DashboardLoad> {
    let command_name = "dashboard::load_dashboard";

    if !ctx.host_attached() {
        return Ok(DashboardLoad::Page(Box::new(DashboardPage::empty())));
    }

    let start = Instant::now();
    info!(command = command_name, %today, "Loading dashboard");

    let result = match ctx.dashboard.load(today).await {
        Err(GameLogError::Auth(reason)) => {
            warn!(command = command_name, %reason, "catalog credentials missing, redirecting");
            Ok(DashboardLoad::Redirect(Route::Settings))
        }
        other => other,
    };

    log_command_execution(command_name, start.elapsed(), &result);

    result
}
