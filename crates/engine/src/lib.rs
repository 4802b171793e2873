// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! Herald dispatch engine
//!
//! A request flows: user lookup -> [`ChannelChain`] built from the user's
//! channel order -> channels tried in order until one delivers -> every
//! attempt recorded into the shared [`AttemptLog`].

mod attempt_log;
mod chain;
mod directory;
mod dispatcher;
mod error;

pub use attempt_log::AttemptLog;
pub use chain::{ChannelChain, DispatchOptions};
pub use directory::{InMemoryUserDirectory, UserDirectory};
pub use dispatcher::{Dispatcher, NotifyInput};
pub use error::DispatchError;
