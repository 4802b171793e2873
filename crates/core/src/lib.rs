// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! herald-core: data model for multichannel notification dispatch

pub mod attempt;
pub mod channel;
pub mod clock;
pub mod dispatch;
pub mod id;
pub mod request;
pub mod time_fmt;
pub mod user;

#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

pub use attempt::AttemptRecord;
pub use channel::{Channel, ChannelError};
pub use clock::{Clock, FakeClock, SystemClock};
pub use dispatch::DispatchResult;
pub use id::{IdGen, SequentialIdGen, ShortId, UuidIdGen};
pub use request::{DispatchRequest, Priority, RequestId};
pub use time_fmt::{duration_ms, format_elapsed, format_elapsed_ms};
pub use user::{User, UserName, UserProfile};
