// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]
// Enable coverage(off) attribute for excluding test infrastructure
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Channel senders: the transport side of notification dispatch

pub mod registry;
pub mod sender;
pub mod traced;

pub use registry::SenderRegistry;
pub use sender::{
    ChannelSender, ConsoleSender, DesktopSender, NoOpSender, SendError, SimulatedConfig,
    SimulatedSender,
};
pub use traced::TracedSender;

// Test support - only compiled for tests or when explicitly requested
#[cfg(any(test, feature = "test-support"))]
pub use sender::{FakeSender, SendCall};
