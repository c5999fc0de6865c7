// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! User directory: search all profiles by email and add friends.

use crate::models::{Friend, Profile};
use crate::screens::Phase;
use crate::services::reader;
use crate::AppCore;

/// Controller for the user list screen.
#[derive(Debug, Default)]
pub struct UserListScreen {
    pub phase: Phase,
    /// Every profile except those already moved into the friend list
    pub users: Vec<Profile>,
    pub friends: Vec<Friend>,
    pub search: String,
}

impl UserListScreen {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mount: read the whole user directory and the stored friend list.
    pub async fn load(&mut self, core: &AppCore) {
        self.users = reader::all_profiles(core.store.as_ref()).await;
        self.friends = core.friends.load();
        self.phase = Phase::Ready;
    }

    pub fn set_search(&mut self, query: impl Into<String>) {
        self.search = query.into();
    }

    /// Profiles matching the email search, excluding the current user.
    pub fn visible_users(&self, core: &AppCore) -> Vec<&Profile> {
        let own_email = core.session.identity().map(|identity| identity.email);
        self.users
            .iter()
            .filter(|user| user.email.contains(&self.search))
            .filter(|user| Some(&user.email) != own_email.as_ref())
            .collect()
    }

    /// Move a profile into the friend list (idempotent per user ID) and out
    /// of the searchable list, clearing the search box.
    pub fn add_friend(&mut self, core: &AppCore, user_id: &str) {
        let Some(position) = self.users.iter().position(|u| u.id == user_id) else {
            return;
        };
        let profile = self.users.remove(position);
        self.friends = core.friends.add(Friend::from(&profile));
        self.search.clear();
    }
}
