// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Delivery channel identifiers

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Errors for structurally invalid channel configuration.
///
/// These are configuration problems, distinct from a delivery failure on a
/// valid channel. They are raised before any attempt is made.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChannelError {
    #[error("unknown channel: {0}")]
    Unknown(String),
    #[error("preferred channel {preferred} is not among the available channels")]
    PreferredNotAvailable { preferred: Channel },
    #[error("no sender registered for channel: {0}")]
    NotRegistered(Channel),
}

/// A named delivery mechanism for a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum Channel {
    Email,
    Sms,
    Console,
    Phone,
    Whatsapp,
    Desktop,
}

impl Channel {
    /// Every known channel, in declaration order.
    pub const ALL: [Channel; 6] = [
        Channel::Email,
        Channel::Sms,
        Channel::Console,
        Channel::Phone,
        Channel::Whatsapp,
        Channel::Desktop,
    ];

    /// Lowercase identifier used in configuration and on the wire.
    pub fn as_str(&self) -> &'static str {
        match self {
            Channel::Email => "email",
            Channel::Sms => "sms",
            Channel::Console => "console",
            Channel::Phone => "phone",
            Channel::Whatsapp => "whatsapp",
            Channel::Desktop => "desktop",
        }
    }

    /// Parse an identifier, ignoring case and surrounding whitespace.
    pub fn parse(id: &str) -> Result<Self, ChannelError> {
        let normalized = id.trim().to_ascii_lowercase();
        Channel::ALL
            .into_iter()
            .find(|c| c.as_str() == normalized)
            .ok_or_else(|| ChannelError::Unknown(id.trim().to_string()))
    }

    /// Parse a list of identifiers, failing on the first unknown one.
    pub fn parse_all<S: AsRef<str>>(ids: &[S]) -> Result<Vec<Self>, ChannelError> {
        ids.iter().map(|id| Channel::parse(id.as_ref())).collect()
    }
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Channel {
    type Err = ChannelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Channel::parse(s)
    }
}

impl TryFrom<String> for Channel {
    type Error = ChannelError;

    fn try_from(id: String) -> Result<Self, Self::Error> {
        Channel::parse(&id)
    }
}

#[cfg(test)]
#[path = "channel_tests.rs"]
mod tests;
