// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Error types surfaced to dispatch callers

use herald_core::ChannelError;
use thiserror::Error;

/// Structural errors that stop a dispatch before any attempt is made.
///
/// Delivery failures are never errors: they come back as data inside a
/// `DispatchResult`.
#[derive(Debug, Error)]
pub enum DispatchError {
    #[error("user not found: {0}")]
    UserNotFound(String),
    #[error("invalid channel configuration for user {user}: {source}")]
    InvalidChannel {
        user: String,
        #[source]
        source: ChannelError,
    },
}

impl DispatchError {
    /// HTTP status an outer request layer should answer with.
    pub fn status_code(&self) -> u16 {
        match self {
            DispatchError::UserNotFound(_) => 404,
            DispatchError::InvalidChannel { .. } => 400,
        }
    }
}
