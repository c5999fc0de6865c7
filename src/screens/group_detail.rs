// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Group detail: members, activities, notes, and the completed list.

use crate::error::{AppError, Result};
use crate::models::{Activity, Group, Note};
use crate::screens::Route;
use crate::services::activities::{self, NewActivity};
use crate::services::reader;
use crate::time_utils;
use crate::AppCore;
use std::collections::HashMap;

/// Load state of the group detail screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GroupDetailPhase {
    #[default]
    Loading,
    Ready,
    /// The group does not exist or could not be read; navigate away.
    Missing,
}

/// Controller for one group's detail screen.
///
/// `completed` is this session's local list only: completing an activity
/// deletes it from the shared record, and no other session ever sees it as
/// completed.
#[derive(Debug, Default)]
pub struct GroupDetailScreen {
    pub phase: GroupDetailPhase,
    pub group: Option<Group>,
    /// Display names for the member badges, keyed by user ID
    pub member_names: HashMap<String, String>,
    pub completed: Vec<Activity>,
}

impl GroupDetailScreen {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mount: fetch the group and its members' display names. Returns the
    /// route to fall back to when the group is missing.
    pub async fn load(&mut self, core: &AppCore, group_id: &str) -> Option<Route> {
        match reader::group_by_id(core.store.as_ref(), group_id).await {
            Some(group) => {
                self.member_names =
                    reader::member_names(core.store.as_ref(), &group.members).await;
                self.group = Some(group);
                self.phase = GroupDetailPhase::Ready;
                None
            }
            None => {
                self.phase = GroupDetailPhase::Missing;
                Some(Route::Groups)
            }
        }
    }

    /// Add a new activity from form input. Validation errors come back to
    /// the form; a failed store write is logged and the optimistic local
    /// entry stays.
    pub async fn add_activity(&mut self, core: &AppCore, input: NewActivity) -> Result<()> {
        let identity = core
            .session
            .identity()
            .ok_or_else(|| AppError::Auth("No authenticated user".to_string()))?;
        let group = self
            .group
            .as_mut()
            .ok_or_else(|| AppError::NotFound("group not loaded".to_string()))?;

        let activity = activities::build(core.store.as_ref(), &identity.uid, input)?;
        activities::add(core.store.as_ref(), group, activity).await;
        Ok(())
    }

    /// Delete an activity by ID. Deleting one that is already gone is a
    /// no-op.
    pub async fn delete_activity(&mut self, core: &AppCore, activity_id: &str) {
        if let Some(group) = self.group.as_mut() {
            activities::remove(core.store.as_ref(), group, activity_id).await;
        }
    }

    /// Complete an activity: it leaves the shared record and joins this
    /// session's completed list.
    pub async fn complete_activity(&mut self, core: &AppCore, activity_id: &str) {
        if let Some(group) = self.group.as_mut() {
            if let Some(done) =
                activities::complete(core.store.as_ref(), group, activity_id).await
            {
                self.completed.push(done);
            }
        }
    }

    /// Append a note to the group.
    pub async fn add_note(&mut self, core: &AppCore, content: &str) -> Result<()> {
        if content.trim().is_empty() {
            return Err(AppError::BadRequest("note text is required".to_string()));
        }
        let identity = core
            .session
            .identity()
            .ok_or_else(|| AppError::Auth("No authenticated user".to_string()))?;
        let group = self
            .group
            .as_mut()
            .ok_or_else(|| AppError::NotFound("group not loaded".to_string()))?;

        let note = Note {
            content: content.to_string(),
            author_id: identity.uid,
            created_at: time_utils::now_rfc3339(),
        };
        activities::append_note(core.store.as_ref(), group, note).await;
        Ok(())
    }

    /// Label for a member badge: the profile's display name when known,
    /// otherwise the raw user ID.
    pub fn member_label<'a>(&'a self, user_id: &'a str) -> &'a str {
        self.member_names
            .get(user_id)
            .map(String::as_str)
            .unwrap_or(user_id)
    }
}
