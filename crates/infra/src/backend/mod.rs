//! Typed backend adapters over the remote-invocation primitive
//!
//! One adapter per collaborator. Each builds the operation's argument
//! record, invokes it, and validates the response strictly against the
//! domain schema.

pub mod catalog;
pub mod dumps;
pub mod store;
pub mod updater;

pub use catalog::RemoteCatalogProvider;
pub use dumps::RemoteDumpGateway;
pub use store::RemoteLogStore;
pub use updater::RemoteUpdateChecker;

use gamelog_domain::{GameLogError, Result};
use serde::de::DeserializeOwned;
use serde_json::Value;

/// Validate a response against its schema. A missing or mistyped field
/// is a hard failure, never a silently-defaulted value.
fn parse<T: DeserializeOwned>(operation: &str, value: Value) -> Result<T> {
    serde_json::from_value(value).map_err(|err| {
        GameLogError::Validation(format!("{operation} response failed its schema check: {err}"))
    })
}
