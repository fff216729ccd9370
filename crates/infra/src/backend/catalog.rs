//! Remote catalog provider adapter
//!
//! The backend performs the catalog provider's credential exchange
//! itself; this adapter only distinguishes credential failures from
//! other catalog failures so the caller can redirect to settings.

use std::sync::Arc;

use async_trait::async_trait;
use gamelog_core::CatalogProvider;
use gamelog_domain::{Game, GameLogError, Result};
use serde_json::json;

use super::parse;
use crate::invoke::Invoker;

/// `CatalogProvider` implementation over the remote-invocation boundary.
pub struct RemoteCatalogProvider {
    invoker: Arc<dyn Invoker>,
}

impl RemoteCatalogProvider {
    /// Create a new remote catalog provider.
    pub fn new(invoker: Arc<dyn Invoker>) -> Self {
        Self { invoker }
    }
}

/// Map a backend failure reason onto the error taxonomy. Reasons naming
/// credentials are authentication/configuration failures.
fn classify(reason: String) -> GameLogError {
    let lowered = reason.to_lowercase();
    if lowered.contains("credential")
        || lowered.contains("client id")
        || lowered.contains("client secret")
        || lowered.contains("access token")
    {
        GameLogError::Auth(reason)
    } else {
        GameLogError::Catalog(reason)
    }
}

#[async_trait]
impl CatalogProvider for RemoteCatalogProvider {
    async fn games_by_id(&self, game_ids: &[i64]) -> Result<Vec<Game>> {
        let response = self
            .invoker
            .invoke("get_games_by_id", json!({ "gameIds": game_ids }))
            .await
            .map_err(|err| classify(err.reason))?;
        parse("get_games_by_id", response)
    }

    async fn search_games(&self, query: &str) -> Result<Vec<Game>> {
        let response = self
            .invoker
            .invoke("search_games", json!({ "searchQuery": query }))
            .await
            .map_err(|err| classify(err.reason))?;
        parse("search_games", response)
    }

    async fn random_top_games(&self, amount: u32) -> Result<Vec<Game>> {
        let response = self
            .invoker
            .invoke("get_random_top_games", json!({ "amount": amount }))
            .await
            .map_err(|err| classify(err.reason))?;
        parse("get_random_top_games", response)
    }
}
