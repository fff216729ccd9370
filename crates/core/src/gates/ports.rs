//! Port interfaces for the navigation gates
//!
//! The update collaborator is host-provided; only its request/response
//! contract is visible here.

use async_trait::async_trait;
use gamelog_domain::Result;
use serde::{Deserialize, Serialize};

/// A newer application version offered by the update collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateInfo {
    pub version: String,
    pub notes: Option<String>,
}

/// Trait for asking the host whether a newer version is available.
#[async_trait]
pub trait UpdateChecker: Send + Sync {
    /// `Ok(Some(_))` when an update is available, `Ok(None)` when the
    /// running version is current.
    async fn check_for_updates(&self) -> Result<Option<UpdateInfo>>;
}
