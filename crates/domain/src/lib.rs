//! # GameLog Domain
//!
//! Business domain types and models for GameLog.
//!
//! This crate contains:
//! - Domain data types (Log, Game, DashboardPage, etc.)
//! - Domain error types and Result definitions
//! - Declarative form validation rules
//!
//! ## Architecture
//! - No dependencies on other GameLog crates
//! - Only external dependencies allowed
//! - Pure domain models and data structures

pub mod errors;
pub mod types;
pub mod validation;

// Re-export commonly used items
pub use errors::*;
pub use types::*;
