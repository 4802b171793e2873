// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Results of processing one request through a channel chain

use crate::attempt::AttemptRecord;
use crate::channel::Channel;
use crate::request::RequestId;
use crate::user::UserName;
use serde::{Deserialize, Serialize};

/// Final outcome of one dispatch call.
///
/// `attempts` holds only this request's records, in the order they were made.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DispatchResult {
    pub request_id: RequestId,
    pub user: UserName,
    pub success: bool,
    pub channel_used: Option<Channel>,
    pub attempts: Vec<AttemptRecord>,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub cancelled: bool,
}

impl DispatchResult {
    pub fn delivered(
        request_id: RequestId,
        user: UserName,
        channel: Channel,
        attempts: Vec<AttemptRecord>,
    ) -> Self {
        Self {
            request_id,
            user,
            success: true,
            channel_used: Some(channel),
            attempts,
            cancelled: false,
        }
    }

    pub fn failed(request_id: RequestId, user: UserName, attempts: Vec<AttemptRecord>) -> Self {
        Self {
            request_id,
            user,
            success: false,
            channel_used: None,
            attempts,
            cancelled: false,
        }
    }

    /// Partial result for a chain aborted by its caller.
    pub fn cancelled(request_id: RequestId, user: UserName, attempts: Vec<AttemptRecord>) -> Self {
        Self {
            cancelled: true,
            ..Self::failed(request_id, user, attempts)
        }
    }

    /// Failed because the user had nothing to try.
    pub fn no_channels_configured(&self) -> bool {
        !self.success && !self.cancelled && self.attempts.is_empty()
    }

    /// Failed after every configured channel was tried.
    pub fn all_channels_failed(&self) -> bool {
        !self.success && !self.cancelled && !self.attempts.is_empty()
    }
}

#[cfg(test)]
#[path = "dispatch_tests.rs"]
mod tests;
