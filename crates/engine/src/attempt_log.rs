// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Append-only audit trail of channel attempts.

use herald_core::{AttemptRecord, RequestId, UserName};
use parking_lot::Mutex;
use std::sync::{Arc, OnceLock};

static GLOBAL: OnceLock<AttemptLog> = OnceLock::new();

/// Time-ordered record of every attempt across all dispatch calls.
///
/// Clones share the same underlying log. Appends are serialized by a lock,
/// so concurrent dispatches never lose or interleave records. There is no
/// capacity bound: the log lives as long as the process unless cleared.
#[derive(Clone, Default)]
pub struct AttemptLog {
    records: Arc<Mutex<Vec<AttemptRecord>>>,
}

impl AttemptLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Process-wide log, created on first access.
    ///
    /// Take this once at startup and pass it down; engine code only ever
    /// sees the handle it was given.
    pub fn global() -> &'static AttemptLog {
        GLOBAL.get_or_init(AttemptLog::new)
    }

    pub fn record(&self, attempt: AttemptRecord) {
        tracing::debug!(
            request_id = %attempt.request_id(),
            user = %attempt.user(),
            channel = %attempt.channel(),
            success = attempt.success(),
            "attempt recorded"
        );
        self.records.lock().push(attempt);
    }

    /// Snapshot of every record, oldest first.
    pub fn all(&self) -> Vec<AttemptRecord> {
        self.records.lock().clone()
    }

    pub fn for_user(&self, user: &UserName) -> Vec<AttemptRecord> {
        self.records
            .lock()
            .iter()
            .filter(|r| r.user() == user)
            .cloned()
            .collect()
    }

    pub fn for_request(&self, request_id: &RequestId) -> Vec<AttemptRecord> {
        self.records
            .lock()
            .iter()
            .filter(|r| r.request_id() == request_id)
            .cloned()
            .collect()
    }

    pub fn len(&self) -> usize {
        self.records.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.lock().is_empty()
    }

    /// Drop every record. Snapshots taken earlier are unaffected.
    pub fn clear(&self) {
        self.records.lock().clear();
    }
}

impl std::fmt::Debug for AttemptLog {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AttemptLog").field("len", &self.len()).finish()
    }
}

#[cfg(test)]
#[path = "attempt_log_tests.rs"]
mod tests;
