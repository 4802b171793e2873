// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! User lookup

use herald_core::UserProfile;
use indexmap::IndexMap;
use parking_lot::RwLock;
use std::sync::Arc;

/// Read-only source of user profiles.
///
/// Profiles are returned unvalidated; the dispatcher checks channel
/// identifiers when it builds a chain.
pub trait UserDirectory: Send + Sync + 'static {
    fn find_by_name(&self, name: &str) -> Option<UserProfile>;
}

impl<T: UserDirectory> UserDirectory for Arc<T> {
    fn find_by_name(&self, name: &str) -> Option<UserProfile> {
        (**self).find_by_name(name)
    }
}

/// Directory backed by an insertion-ordered map. Clones share entries.
#[derive(Clone, Default)]
pub struct InMemoryUserDirectory {
    users: Arc<RwLock<IndexMap<String, UserProfile>>>,
}

impl InMemoryUserDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace a profile. A replaced profile keeps its position.
    pub fn insert(&self, profile: UserProfile) -> Option<UserProfile> {
        self.users.write().insert(profile.name.clone(), profile)
    }

    pub fn remove(&self, name: &str) -> Option<UserProfile> {
        self.users.write().shift_remove(name)
    }

    /// Profiles in insertion order.
    pub fn list(&self) -> Vec<UserProfile> {
        self.users.read().values().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.users.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.read().is_empty()
    }
}

impl UserDirectory for InMemoryUserDirectory {
    fn find_by_name(&self, name: &str) -> Option<UserProfile> {
        self.users.read().get(name).cloned()
    }
}

impl FromIterator<UserProfile> for InMemoryUserDirectory {
    fn from_iter<I: IntoIterator<Item = UserProfile>>(iter: I) -> Self {
        let directory = Self::new();
        for profile in iter {
            directory.insert(profile);
        }
        directory
    }
}

impl std::fmt::Debug for InMemoryUserDirectory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InMemoryUserDirectory")
            .field("len", &self.len())
            .finish()
    }
}

#[cfg(test)]
#[path = "directory_tests.rs"]
mod tests;
