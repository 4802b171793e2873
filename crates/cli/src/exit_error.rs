// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Controlled process exit codes

use herald_core::DispatchResult;
use herald_engine::DispatchError;

pub const DELIVERED: i32 = 0;
pub const GENERIC: i32 = 1;
pub const UNDELIVERED: i32 = 3;
pub const USER_NOT_FOUND: i32 = 4;
pub const INVALID_CHANNEL: i32 = 5;
pub const CANCELLED: i32 = 6;

/// An error that carries the exit code `main` should use.
///
/// An empty message exits silently (the command already printed its output).
#[derive(Debug)]
pub struct ExitError {
    pub code: i32,
    pub message: String,
}

impl ExitError {
    pub fn new(code: i32, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    pub fn silent(code: i32) -> Self {
        Self::new(code, String::new())
    }

    pub fn from_dispatch(err: &DispatchError) -> Self {
        Self::new(dispatch_error_code(err), err.to_string())
    }
}

impl std::fmt::Display for ExitError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for ExitError {}

pub fn dispatch_error_code(err: &DispatchError) -> i32 {
    match err {
        DispatchError::UserNotFound(_) => USER_NOT_FOUND,
        DispatchError::InvalidChannel { .. } => INVALID_CHANNEL,
    }
}

pub fn result_code(result: &DispatchResult) -> i32 {
    if result.cancelled {
        CANCELLED
    } else if result.success {
        DELIVERED
    } else {
        UNDELIVERED
    }
}
