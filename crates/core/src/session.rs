//! Session-scoped state
//!
//! One `Session` lives for the lifetime of the process. The only shared
//! flag is whether the metadata-dump freshness check has run this
//! session: false at process start, written once by the dump-management
//! flow, read by the gate sequencer on every dashboard navigation.

use std::sync::atomic::{AtomicBool, Ordering};

/// Process-wide session state.
#[derive(Debug, Default)]
pub struct Session {
    dump_check_completed: AtomicBool,
}

impl Session {
    /// Create a fresh session. The dump check starts out pending.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the dump-freshness check has run this session.
    pub fn dump_check_completed(&self) -> bool {
        self.dump_check_completed.load(Ordering::Acquire)
    }

    /// Record that the dump-freshness check ran. Called by the
    /// dump-management flow, once per session; never unset.
    pub fn mark_dump_check_completed(&self) {
        self.dump_check_completed.store(true, Ordering::Release);
    }
}
