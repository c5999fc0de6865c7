// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! In-memory implementation of the [`Store`] boundary.
//!
//! Used by tests and local development. `set_offline(true)` makes every call
//! fail the way the offline Firestore mock does, which is how the degraded
//! read and logged-write-failure paths get exercised.

use crate::db::{collections, Store};
use crate::error::{AppError, Result};
use crate::models::{Activity, Group, Note, Profile, ProfileCard};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use tokio::sync::Mutex;

/// In-memory document store.
#[derive(Default)]
pub struct MemoryStore {
    groups: Mutex<HashMap<String, Group>>,
    profiles: Mutex<HashMap<String, Profile>>,
    offline: AtomicBool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Toggle failure mode: while offline, every operation returns a
    /// `Database` error without touching the data.
    pub fn set_offline(&self, offline: bool) {
        self.offline.store(offline, Ordering::Relaxed);
    }

    fn check_online(&self) -> Result<()> {
        if self.offline.load(Ordering::Relaxed) {
            return Err(AppError::Database(
                "Database not connected (offline mode)".to_string(),
            ));
        }
        Ok(())
    }
}

#[async_trait]
impl Store for MemoryStore {
    async fn create_group(&self, mut group: Group) -> Result<Group> {
        self.check_online()?;
        group.id = self.generate_id();
        self.groups
            .lock()
            .await
            .insert(group.id.clone(), group.clone());
        Ok(group)
    }

    async fn get_group(&self, group_id: &str) -> Result<Option<Group>> {
        self.check_online()?;
        Ok(self.groups.lock().await.get(group_id).cloned())
    }

    async fn groups_for_member(&self, user_id: &str) -> Result<Vec<Group>> {
        self.check_online()?;
        Ok(self
            .groups
            .lock()
            .await
            .values()
            .filter(|g| g.has_member(user_id))
            .cloned()
            .collect())
    }

    async fn add_group_activity(&self, group_id: &str, activity: &Activity) -> Result<()> {
        self.check_online()?;
        let mut groups = self.groups.lock().await;
        let group = groups.get_mut(group_id).ok_or_else(|| {
            AppError::NotFound(format!("{}/{}", collections::GROUPS, group_id))
        })?;
        // Array-union: appending a structurally equal element is a no-op.
        if !group.activities.iter().any(|a| a == activity) {
            group.activities.push(activity.clone());
        }
        Ok(())
    }

    async fn set_group_activities(&self, group_id: &str, activities: &[Activity]) -> Result<()> {
        self.check_online()?;
        let mut groups = self.groups.lock().await;
        let group = groups.get_mut(group_id).ok_or_else(|| {
            AppError::NotFound(format!("{}/{}", collections::GROUPS, group_id))
        })?;
        group.activities = activities.to_vec();
        Ok(())
    }

    async fn add_group_note(&self, group_id: &str, note: &Note) -> Result<()> {
        self.check_online()?;
        let mut groups = self.groups.lock().await;
        let group = groups.get_mut(group_id).ok_or_else(|| {
            AppError::NotFound(format!("{}/{}", collections::GROUPS, group_id))
        })?;
        if !group.notes.iter().any(|n| n == note) {
            group.notes.push(note.clone());
        }
        Ok(())
    }

    async fn get_profile(&self, user_id: &str) -> Result<Option<Profile>> {
        self.check_online()?;
        Ok(self.profiles.lock().await.get(user_id).cloned())
    }

    async fn set_profile(&self, user_id: &str, profile: &Profile) -> Result<()> {
        self.check_online()?;
        let mut stored = profile.clone();
        stored.id = user_id.to_string();
        self.profiles
            .lock()
            .await
            .insert(user_id.to_string(), stored);
        Ok(())
    }

    async fn update_profile_card(&self, user_id: &str, card: &ProfileCard) -> Result<()> {
        self.check_online()?;
        let mut profiles = self.profiles.lock().await;
        let profile = profiles.get_mut(user_id).ok_or_else(|| {
            AppError::NotFound(format!("{}/{}", collections::PROFILES, user_id))
        })?;
        profile.display_name = card.display_name.clone();
        profile.avatar = card.avatar.clone();
        Ok(())
    }

    async fn list_profiles(&self) -> Result<Vec<Profile>> {
        self.check_online()?;
        Ok(self.profiles.lock().await.values().cloned().collect())
    }
}
