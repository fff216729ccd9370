//! The remote-invocation primitive
//!
//! All backend access goes through `invoke(operation, arguments)`; the
//! backend answers with a JSON value or a string reason. Argument keys
//! use the backend's camelCase names; adapters own that mapping.

use async_trait::async_trait;
use serde_json::Value;
use thiserror::Error;

/// Failure reported by the backend for one invocation.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("invoke '{operation}' failed: {reason}")]
pub struct InvokeError {
    /// Operation that failed.
    pub operation: String,
    /// The backend's string reason, verbatim.
    pub reason: String,
}

impl InvokeError {
    /// Create a new invocation error.
    pub fn new(operation: impl Into<String>, reason: impl Into<String>) -> Self {
        Self { operation: operation.into(), reason: reason.into() }
    }
}

/// The single asynchronous remote-call primitive.
///
/// Implementations bridge to the host runtime. This layer never retries
/// a failed invocation.
#[async_trait]
pub trait Invoker: Send + Sync {
    /// Invoke `operation` with an argument record.
    async fn invoke(&self, operation: &str, args: Value) -> Result<Value, InvokeError>;
}
