//! # GameLog Core
//!
//! Pure orchestration logic - no infrastructure dependencies.
//!
//! This crate contains:
//! - Port/adapter interfaces (traits) for the store, catalog, updater
//!   and dump collaborators
//! - The page-load services: gate sequencing, dashboard composition,
//!   statistics windowing, library/discovery/settings screens
//! - Session-scoped state shared across one process run
//!
//! ## Architecture Principles
//! - Only depends on `gamelog-domain`
//! - No remote-invocation, HTTP, or platform code
//! - All external collaborators via traits
//! - Pure, testable orchestration logic

pub mod dashboard;
pub mod discovery;
pub mod dumps_ports;
pub mod gates;
pub mod library;
pub mod session;
pub mod settings;

// Re-export specific items to avoid ambiguity
pub use dashboard::ports::{CatalogProvider, LogStore};
pub use dashboard::windows::trailing_month_windows;
pub use dashboard::{DashboardLoad, DashboardService, RECENT_LOG_COUNT};
pub use discovery::DiscoveryService;
pub use dumps_ports::DumpGateway;
pub use gates::ports::{UpdateChecker, UpdateInfo};
pub use gates::{GateDecision, GateSequencer, Route};
pub use library::LibraryService;
pub use session::Session;
pub use settings::SettingsService;
