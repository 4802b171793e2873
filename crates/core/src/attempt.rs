// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Per-channel attempt records

use crate::channel::Channel;
use crate::request::RequestId;
use crate::user::UserName;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Outcome of trying a single channel once.
///
/// Immutable once created: fields are only reachable through accessors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttemptRecord {
    request_id: RequestId,
    user: UserName,
    channel: Channel,
    success: bool,
    timestamp: DateTime<Utc>,
    elapsed_ms: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

impl AttemptRecord {
    pub fn delivered(
        request_id: RequestId,
        user: UserName,
        channel: Channel,
        timestamp: DateTime<Utc>,
        elapsed_ms: u64,
    ) -> Self {
        Self {
            request_id,
            user,
            channel,
            success: true,
            timestamp,
            elapsed_ms,
            error: None,
        }
    }

    pub fn failed(
        request_id: RequestId,
        user: UserName,
        channel: Channel,
        timestamp: DateTime<Utc>,
        elapsed_ms: u64,
        detail: impl Into<String>,
    ) -> Self {
        Self {
            request_id,
            user,
            channel,
            success: false,
            timestamp,
            elapsed_ms,
            error: Some(detail.into()),
        }
    }

    pub fn request_id(&self) -> &RequestId {
        &self.request_id
    }

    pub fn user(&self) -> &UserName {
        &self.user
    }

    pub fn channel(&self) -> Channel {
        self.channel
    }

    pub fn success(&self) -> bool {
        self.success
    }

    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }

    pub fn elapsed_ms(&self) -> u64 {
        self.elapsed_ms
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }
}
