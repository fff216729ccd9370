//! Catalog item types
//!
//! Read-only metadata about a game, supplied entirely by the external
//! catalog provider and joined to logs by identifier equality.

use serde::{Deserialize, Serialize};

/// A game as described by the external catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Game {
    pub id: i64,

    pub title: String,

    /// Cover-image reference, when the catalog has one.
    pub cover_id: Option<String>,

    /// Identifiers of related games, used for recommendations.
    pub similar_games: Option<Vec<i64>>,

    /// Catalog classification code (main game, DLC, remaster, ...).
    pub category: i32,

    /// Identifier of the parent entry for alternate versions.
    pub version_parent: Option<i64>,

    /// Aggregate popularity score, when the catalog has one.
    pub total_rating: Option<f64>,
}

impl Game {
    /// The documented zero-valued catalog item, used by detached hosts
    /// in place of a real fetch.
    pub fn empty() -> Self {
        Self {
            id: 0,
            title: String::new(),
            cover_id: None,
            similar_games: None,
            category: 0,
            version_parent: None,
            total_rating: None,
        }
    }
}
