// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Per-call notification requests

use crate::user::UserName;
use serde::{Deserialize, Serialize};

crate::define_id! {
    /// Unique identifier for one dispatch call.
    pub struct RequestId;
}

crate::define_id! {
    /// Opaque priority label. Only used when formatting the outgoing message;
    /// it never influences channel selection.
    #[derive(Default)]
    pub struct Priority;
}

/// One notification to deliver to one user.
///
/// Created per call and discarded once a result has been produced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DispatchRequest {
    pub id: RequestId,
    pub user: UserName,
    pub message: String,
    #[serde(default)]
    pub priority: Priority,
}

impl DispatchRequest {
    pub fn new(
        id: impl Into<RequestId>,
        user: impl Into<UserName>,
        message: impl Into<String>,
        priority: impl Into<Priority>,
    ) -> Self {
        Self {
            id: id.into(),
            user: user.into(),
            message: message.into(),
            priority: priority.into(),
        }
    }

    /// Text handed to channel senders: `"[<priority>] <message>"`, or the bare
    /// message when no priority label is set.
    pub fn formatted_message(&self) -> String {
        let label = self.priority.as_str().trim();
        if label.is_empty() {
            self.message.clone()
        } else {
            format!("[{}] {}", label.to_uppercase(), self.message)
        }
    }
}

#[cfg(test)]
#[path = "request_tests.rs"]
mod tests;
