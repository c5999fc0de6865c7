// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! The device-local friend list.
//!
//! Friends live only in local storage: never synchronized to the shared
//! store, never visible to other devices, and there is no operation that
//! removes one. Adding is idempotent per user ID.

use crate::local::LocalStore;
use crate::models::Friend;

const FRIENDS_KEY: &str = "friends";

/// Append-only friend list over local storage.
#[derive(Debug, Clone)]
pub struct FriendBook {
    local: LocalStore,
}

impl FriendBook {
    pub fn new(local: LocalStore) -> Self {
        Self { local }
    }

    /// Load the stored friend list. A missing or unreadable entry reads as
    /// an empty list.
    pub fn load(&self) -> Vec<Friend> {
        match self.local.get(FRIENDS_KEY) {
            Ok(Some(friends)) => friends,
            Ok(None) => Vec::new(),
            Err(err) => {
                tracing::warn!(error = %err, "Failed to read friend list");
                Vec::new()
            }
        }
    }

    /// Add a friend, keyed by user ID; adding someone already present leaves
    /// the list unchanged. Returns the resulting list.
    pub fn add(&self, friend: Friend) -> Vec<Friend> {
        let mut friends = self.load();
        if friends.iter().any(|f| f.id == friend.id) {
            return friends;
        }
        friends.push(friend);

        if let Err(err) = self.local.set(FRIENDS_KEY, &friends) {
            tracing::error!(error = %err, "Failed to persist friend list");
        }
        friends
    }
}
