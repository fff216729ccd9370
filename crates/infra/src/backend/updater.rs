//! Remote update checker adapter

use std::sync::Arc;

use async_trait::async_trait;
use gamelog_core::{UpdateChecker, UpdateInfo};
use gamelog_domain::{GameLogError, Result};
use serde_json::json;

use super::parse;
use crate::invoke::Invoker;

/// `UpdateChecker` implementation over the remote-invocation boundary.
///
/// The backend answers `null` when the running version is current. The
/// gate sequencer treats any error from here as "no update"; this
/// adapter does not swallow anything itself.
pub struct RemoteUpdateChecker {
    invoker: Arc<dyn Invoker>,
}

impl RemoteUpdateChecker {
    /// Create a new remote update checker.
    pub fn new(invoker: Arc<dyn Invoker>) -> Self {
        Self { invoker }
    }
}

#[async_trait]
impl UpdateChecker for RemoteUpdateChecker {
    async fn check_for_updates(&self) -> Result<Option<UpdateInfo>> {
        let response = self
            .invoker
            .invoke("check_for_updates", json!({}))
            .await
            .map_err(|err| GameLogError::Internal(err.reason))?;
        parse("check_for_updates", response)
    }
}
