//! Settings screen composition

pub mod service;

pub use service::SettingsService;
