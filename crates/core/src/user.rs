// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Notification recipients and their channel preferences

use crate::channel::{Channel, ChannelError};
use serde::{Deserialize, Serialize};

crate::define_id! {
    /// Opaque user identifier, looked up by name.
    pub struct UserName;
}

/// A recipient with a preferred channel and the channels they can be reached on.
///
/// Invariants, enforced at construction:
/// - `available` holds no duplicates (first occurrence wins)
/// - `preferred`, when set, is a member of `available`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "UserProfile")]
pub struct User {
    name: UserName,
    preferred: Option<Channel>,
    available: Vec<Channel>,
}

impl User {
    pub fn new(
        name: impl Into<UserName>,
        preferred: Option<Channel>,
        available: impl IntoIterator<Item = Channel>,
    ) -> Result<Self, ChannelError> {
        let mut deduped: Vec<Channel> = Vec::new();
        for channel in available {
            if !deduped.contains(&channel) {
                deduped.push(channel);
            }
        }

        if let Some(preferred) = preferred {
            if !deduped.contains(&preferred) {
                return Err(ChannelError::PreferredNotAvailable { preferred });
            }
        }

        Ok(Self {
            name: name.into(),
            preferred,
            available: deduped,
        })
    }

    /// Build a user from raw string identifiers.
    ///
    /// Unknown identifiers fail with [`ChannelError::Unknown`] before the
    /// membership check runs.
    pub fn from_identifiers<S: AsRef<str>>(
        name: impl Into<UserName>,
        preferred: Option<&str>,
        available: &[S],
    ) -> Result<Self, ChannelError> {
        let available = Channel::parse_all(available)?;
        let preferred = preferred.map(Channel::parse).transpose()?;
        Self::new(name, preferred, available)
    }

    pub fn name(&self) -> &UserName {
        &self.name
    }

    pub fn preferred(&self) -> Option<Channel> {
        self.preferred
    }

    pub fn available(&self) -> &[Channel] {
        &self.available
    }

    /// Order in which channels are attempted: the preferred channel first,
    /// then the rest of `available` in stored order.
    pub fn channel_order(&self) -> Vec<Channel> {
        let mut order = Vec::with_capacity(self.available.len());
        order.extend(self.preferred);
        order.extend(
            self.available
                .iter()
                .copied()
                .filter(|c| Some(*c) != self.preferred),
        );
        order
    }
}

/// A user as an external store holds it: raw channel identifiers, not yet
/// validated. [`UserProfile::to_user`] applies the [`User`] invariants.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preferred: Option<String>,
    #[serde(default)]
    pub available: Vec<String>,
}

impl UserProfile {
    pub fn new<S: Into<String>>(
        name: impl Into<String>,
        preferred: Option<&str>,
        available: impl IntoIterator<Item = S>,
    ) -> Self {
        Self {
            name: name.into(),
            preferred: preferred.map(str::to_string),
            available: available.into_iter().map(Into::into).collect(),
        }
    }

    pub fn to_user(&self) -> Result<User, ChannelError> {
        User::from_identifiers(
            self.name.as_str(),
            self.preferred.as_deref(),
            &self.available,
        )
    }
}

impl From<&User> for UserProfile {
    fn from(user: &User) -> Self {
        Self {
            name: user.name.to_string(),
            preferred: user.preferred.map(|c| c.as_str().to_string()),
            available: user
                .available
                .iter()
                .map(|c| c.as_str().to_string())
                .collect(),
        }
    }
}

impl TryFrom<UserProfile> for User {
    type Error = ChannelError;

    fn try_from(profile: UserProfile) -> Result<Self, Self::Error> {
        profile.to_user()
    }
}

#[cfg(test)]
#[path = "user_tests.rs"]
mod tests;
