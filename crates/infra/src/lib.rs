//! # GameLog Infra
//!
//! Infrastructure layer - the remote-invocation boundary.
//!
//! This crate contains:
//! - The `Invoker` trait, the single asynchronous primitive through
//!   which every backend operation travels
//! - Typed backend adapters implementing the core ports, validating
//!   every response against its schema on receipt
//!
//! ## Architecture
//! - Implements the port traits from `gamelog-core`
//! - All backend access is `invoke(operation, arguments)`; there is no
//!   other transport
//! - A response with a missing or mistyped field is a hard validation
//!   failure, never a silently-defaulted value

pub mod backend;
pub mod invoke;

pub use backend::{RemoteCatalogProvider, RemoteDumpGateway, RemoteLogStore, RemoteUpdateChecker};
pub use invoke::{InvokeError, Invoker};
