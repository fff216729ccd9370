//! Error types used throughout the application

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Main error type for GameLog
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "message")]
pub enum GameLogError {
    /// The persistent store rejected or failed a request.
    #[error("Store error: {0}")]
    Store(String),

    /// The game-catalog provider rejected or failed a request.
    #[error("Catalog error: {0}")]
    Catalog(String),

    /// Missing or invalid third-party credentials. The caller's policy is
    /// to send the user to the settings screen rather than render a
    /// broken page.
    #[error("Authentication error: {0}")]
    Auth(String),

    /// A log references a catalog item the batch fetch did not return.
    /// Indicates the store and the catalog have diverged.
    #[error("Consistency error: {0}")]
    Consistency(String),

    /// A backend response failed its schema check.
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

/// Result type alias for GameLog operations
pub type Result<T> = std::result::Result<T, GameLogError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn errors_serialize_with_tag_and_message() {
        let err = GameLogError::Consistency("game 42 missing".to_string());
        let json = serde_json::to_value(&err).unwrap();
        assert_eq!(json["type"], "Consistency");
        assert_eq!(json["message"], "game 42 missing");
    }

    #[test]
    fn errors_round_trip_through_serde() {
        let err = GameLogError::Auth("missing client id".to_string());
        let json = serde_json::to_string(&err).unwrap();
        let back: GameLogError = serde_json::from_str(&json).unwrap();
        assert_eq!(back, err);
    }
}
