//! Settings page-load command

use std::sync::Arc;
use std::time::Instant;

use gamelog_domain::{Result, SettingsForm};
use tracing::info;

use crate::utils::logging::log_command_execution;
use crate::AppContext;

/// Form-ready settings for the settings screen.
pub async fn get_settings_form(ctx: &Arc<AppContext>) -> Result<SettingsForm> {
    let command_name = "settings::get_settings_form";

    if !ctx.host_attached() {
        return Ok(SettingsForm::empty());
    }

    let start = Instant::now();
    info!(command = command_name, "Loading settings form");

    let result = ctx.settings.settings_form().await;
    log_command_execution(command_name, start.elapsed(), &result);

    result
}
