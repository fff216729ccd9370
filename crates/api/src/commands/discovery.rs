//! Discovery commands - recommendations and catalog search

use std::sync::Arc;
use std::time::Instant;

use gamelog_domain::{Game, Result};
use tracing::info;

use crate::utils::logging::log_command_execution;
use crate::AppContext;

/// Recommendations derived from the played library.
pub async fn get_similar_games(ctx: &Arc<AppContext>) -> Result<Vec<Game>> {
    let command_name = "discovery::get_similar_games";

    if !ctx.host_attached() {
        return Ok(Vec::new());
    }

    let start = Instant::now();
    info!(command = command_name, "Collecting similar games");

    let result = ctx.discovery.similar_games().await;
    log_command_execution(command_name, start.elapsed(), &result);

    result
}

/// Full-text catalog search.
pub async fn search_games(ctx: &Arc<AppContext>, query: &str) -> Result<Vec<Game>> {
    let command_name = "discovery::search_games";

    if !ctx.host_attached() {
        return Ok(Vec::new());
    }

    let start = Instant::now();
    info!(command = command_name, query, "Searching catalog");

    let result = ctx.discovery.search(query).await;
    log_command_execution(command_name, start.elapsed(), &result);

    result
}

/// Random highly ranked games shown before the user searches.
pub async fn get_random_top_games(ctx: &Arc<AppContext>, amount: u32) -> Result<Vec<Game>> {
    let command_name = "discovery::get_random_top_games";

    if !ctx.host_attached() {
        return Ok(Vec::new());
    }

    let start = Instant::now();
    info!(command = command_name, amount, "Fetching random top games");

    let result = ctx.discovery.random_top_games(amount).await;
    log_command_execution(command_name, start.elapsed(), &result);

    result
}
