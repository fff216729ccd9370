//! Gate sequencer - preconditions evaluated before page composition

use std::sync::Arc;

use gamelog_domain::{Result, UserSettings};
use tracing::{info, warn};

use super::ports::UpdateChecker;
use crate::dashboard::ports::LogStore;
use crate::session::Session;

/// Navigation target of a failed gate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    DumpManager,
    Onboarding,
    Settings,
}

/// Outcome of the gate chain.
///
/// `Proceed` carries the settings fetched by the onboarding gate so the
/// composer does not fetch them a second time.
#[derive(Debug, Clone, PartialEq)]
pub enum GateDecision {
    Proceed(UserSettings),
    Redirect(Route),
    /// The caller must hide the main surface and show the updater.
    Suspend(String),
}

/// Runs the fixed precondition chain: pending update, pending dump
/// refresh, first-run onboarding. Evaluation is strictly ordered and
/// stops at the first non-pass; no data fetch happens after a redirect
/// or suspend decision.
pub struct GateSequencer {
    updates: Arc<dyn UpdateChecker>,
    store: Arc<dyn LogStore>,
    session: Arc<Session>,
}

impl GateSequencer {
    /// Create a new gate sequencer.
    pub fn new(
        updates: Arc<dyn UpdateChecker>,
        store: Arc<dyn LogStore>,
        session: Arc<Session>,
    ) -> Self {
        Self { updates, store, session }
    }

    /// Evaluate the gates in order.
    ///
    /// A failing update *check* is swallowed: it must never keep the
    /// user out of the app. Store errors from the onboarding gate
    /// propagate.
    pub async fn evaluate(&self) -> Result<GateDecision> {
        match self.updates.check_for_updates().await {
            Ok(Some(update)) => {
                info!(version = %update.version, "update available, suspending navigation");
                return Ok(GateDecision::Suspend(format!(
                    "update {} available",
                    update.version
                )));
            }
            Ok(None) => {}
            Err(err) => {
                warn!(error = %err, "update check failed, continuing without update");
            }
        }

        if !self.session.dump_check_completed() {
            return Ok(GateDecision::Redirect(Route::DumpManager));
        }

        let settings = self.store.user_settings().await?;
        if settings.is_first_run {
            return Ok(GateDecision::Redirect(Route::Onboarding));
        }

        Ok(GateDecision::Proceed(settings))
    }
}
