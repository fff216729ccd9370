//! Port interface for the dump-management collaborator
//!
//! The dump-management screen drives this once per session and marks the
//! session's dump check complete when it finishes. Download and import
//! mechanics live entirely behind the backend.

use async_trait::async_trait;
use gamelog_domain::{DumpInfo, DumpVersions, Result};

/// Trait for the bulk metadata-dump collaborator.
#[async_trait]
pub trait DumpGateway: Send + Sync {
    /// Versions of the dumps already imported into the store.
    async fn local_dump_versions(&self) -> Result<DumpVersions>;

    /// Every dump the provider currently offers.
    async fn all_dump_info(&self) -> Result<Vec<DumpInfo>>;

    /// Download the given dumps into a staging directory.
    async fn download_dumps(&self, dumps: &[DumpInfo], to_directory: &str) -> Result<()>;

    /// Import previously downloaded dumps from a staging directory.
    async fn import_dumps(&self, from_directory: &str) -> Result<()>;
}
