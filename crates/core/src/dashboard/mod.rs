//! Dashboard page-load pipeline: gates, composition, statistics windows

pub mod ports;
pub mod service;
pub mod windows;

pub use service::{DashboardLoad, DashboardService, RECENT_LOG_COUNT};
