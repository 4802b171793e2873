// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Centralized environment variable access for the CLI crate.

use std::path::PathBuf;
use std::time::Duration;

/// Config file path override
pub fn config_path() -> Option<PathBuf> {
    std::env::var("HERALD_CONFIG")
        .ok()
        .filter(|s| !s.is_empty())
        .map(PathBuf::from)
}

/// Log filter directives, in `EnvFilter` syntax
pub fn log_filter() -> Option<String> {
    std::env::var("HERALD_LOG").ok().filter(|s| !s.is_empty())
}

pub fn send_timeout() -> Option<Duration> {
    std::env::var("HERALD_SEND_TIMEOUT_MS")
        .ok()
        .and_then(|s| s.parse::<u64>().ok())
        .map(Duration::from_millis)
}

/// Seed for simulated channel outcomes
pub fn seed() -> Option<u64> {
    std::env::var("HERALD_SEED")
        .ok()
        .and_then(|s| s.parse::<u64>().ok())
}
