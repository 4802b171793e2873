// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Shared test helpers for use across crates.
//!
//! Gated behind `#[cfg(any(test, feature = "test-support"))]`.

#![allow(clippy::expect_used)]

use crate::{AttemptRecord, Channel, DispatchRequest, RequestId, User, UserName};
use chrono::{DateTime, TimeZone, Utc};

/// Fixed instant used by test records.
pub fn test_time() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 1, 30, 8, 14, 9)
        .single()
        .unwrap_or(DateTime::<Utc>::UNIX_EPOCH)
}

/// Build a user from typed channels.
///
/// Panics on invalid input; tests that exercise validation call
/// [`User::new`] directly.
pub fn user(name: &str, preferred: Option<Channel>, available: &[Channel]) -> User {
    User::new(name, preferred, available.iter().copied()).expect("valid test user")
}

pub fn request(id: &str, user: &str, message: &str) -> DispatchRequest {
    DispatchRequest::new(id, user, message, "normal")
}

pub fn failed_attempt(request_id: &str, user: &str, channel: Channel) -> AttemptRecord {
    AttemptRecord::failed(
        RequestId::new(request_id),
        UserName::new(user),
        channel,
        test_time(),
        0,
        "test failure",
    )
}

pub fn delivered_attempt(request_id: &str, user: &str, channel: Channel) -> AttemptRecord {
    AttemptRecord::delivered(
        RequestId::new(request_id),
        UserName::new(user),
        channel,
        test_time(),
        0,
    )
}
