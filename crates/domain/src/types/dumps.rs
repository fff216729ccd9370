//! Metadata-dump types
//!
//! The dump-management flow downloads bulk catalog dumps and imports
//! them into the store. This layer only shapes its requests and
//! responses; versions are opaque strings owned by the dump provider.

use serde::{Deserialize, Serialize};

/// Versions of the locally imported dumps, one per dump kind.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DumpVersions {
    pub games: String,
    pub covers: String,
    pub websites: String,
    pub platforms: String,
}

impl DumpVersions {
    /// The documented zero-valued payload for detached hosts: no dump
    /// has been imported, every version is blank.
    pub fn empty() -> Self {
        Self {
            games: String::new(),
            covers: String::new(),
            websites: String::new(),
            platforms: String::new(),
        }
    }
}

/// Kind of a downloadable dump.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DumpKind {
    Games,
    Covers,
    Websites,
    Platforms,
}

/// A dump offered by the provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DumpInfo {
    pub name: DumpKind,
    pub url: String,
    pub version: String,
}
