//! # GameLog App
//!
//! Application layer - page-load commands and context wiring.
//!
//! This crate contains:
//! - Page-load commands (the UI shell -> backend bridge)
//! - Application context (dependency injection)
//! - Command logging helpers
//!
//! ## Architecture
//! - Depends on `domain`, `core`, and `infra`
//! - Wires up the hexagonal architecture
//! - Exposes one command per screen navigation

pub mod commands;
pub mod context;
pub mod utils;

// Re-export for convenience
pub use commands::*;
pub use context::AppContext;
pub use utils::logging::init_tracing;
