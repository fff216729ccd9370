//! Structured logging helpers for command wrappers

use std::time::Duration;

use gamelog_domain::GameLogError;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

/// Install the process-wide tracing subscriber.
///
/// `RUST_LOG` controls the filter and defaults to `info`. The host
/// shell calls this once at startup, before the first command runs.
pub fn init_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

/// Log the outcome of a command execution with structured fields.
///
/// # Parameters
/// * `command` - Logical command identifier (e.g. `"dashboard::load_dashboard"`).
/// * `elapsed` - Duration the command execution took.
/// * `result` - The command's outcome; failures carry a stable error label.
///
/// The helper keeps the command wrappers concise and the log shape
/// consistent across screens.
#[inline]
pub fn log_command_execution<T>(
    command: &str,
    elapsed: Duration,
    result: &gamelog_domain::Result<T>,
) {
    let duration_ms = elapsed.as_millis() as u64;

    match result {
        Ok(_) => info!(command, duration_ms, "command_execution_success"),
        Err(error) => {
            warn!(command, duration_ms, error = error_label(error), "command_execution_failure");
        }
    }
}

/// Convert a `GameLogError` into a stable label suitable for logging.
#[inline]
pub fn error_label(error: &GameLogError) -> &'static str {
    match error {
        GameLogError::Store(_) => "store",
        GameLogError::Catalog(_) => "catalog",
        GameLogError::Auth(_) => "auth",
        GameLogError::Consistency(_) => "consistency",
        GameLogError::Validation(_) => "validation",
        GameLogError::NotFound(_) => "not_found",
        GameLogError::InvalidInput(_) => "invalid_input",
        GameLogError::Internal(_) => "internal",
    }
}
