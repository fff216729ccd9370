//! Discovery screens: similar games and catalog search

pub mod service;

pub use service::DiscoveryService;
