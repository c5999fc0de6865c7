// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Mutations of the activity and note collections embedded in a group.
//!
//! Each operation applies an optimistic local patch immediately, then issues
//! the remote write. A failed write is logged and the local patch stays in
//! place; the screen keeps rendering its own view of the record.
//!
//! Removal is keyed by the activity ID: the remote side re-reads the record
//! and drops the element whose ID matches, so a concurrent edit of the same
//! logical activity by another member does not break removal. An ID that is
//! already absent is a no-op, not an error.

use crate::db::Store;
use crate::error::{AppError, Result};
use crate::models::{Activity, ActivityStatus, Group, Note};
use crate::time_utils;
use validator::Validate;

/// User input for a new activity.
#[derive(Debug, Clone, Validate)]
pub struct NewActivity {
    #[validate(length(min = 1, message = "title is required"))]
    pub title: String,
    pub description: String,
    #[validate(length(min = 1, message = "date is required"))]
    pub date: String,
}

/// Validate input and assemble a pending activity with a fresh client-side
/// ID. Nothing is written yet.
pub fn build(store: &dyn Store, creator_id: &str, input: NewActivity) -> Result<Activity> {
    input
        .validate()
        .map_err(|e| AppError::BadRequest(e.to_string()))?;
    if !time_utils::is_valid_schedule_date(&input.date) {
        return Err(AppError::BadRequest(format!(
            "invalid schedule date: {}",
            input.date
        )));
    }

    Ok(Activity {
        id: store.generate_id(),
        title: input.title,
        description: input.description,
        date: input.date,
        creator_id: creator_id.to_string(),
        status: ActivityStatus::Pending,
        votes: Vec::new(),
        created_at: time_utils::now_rfc3339(),
    })
}

/// Add an activity: local push, then array-union write.
pub async fn add(store: &dyn Store, group: &mut Group, activity: Activity) {
    group.activities.push(activity.clone());

    if let Err(err) = store.add_group_activity(&group.id, &activity).await {
        tracing::error!(
            group_id = %group.id,
            activity_id = %activity.id,
            error = %err,
            "Failed to store new activity"
        );
    }
}

/// Remove the activity with the given ID from the group, locally and
/// remotely. Returns the removed element, or `None` if it was not present.
pub async fn remove(store: &dyn Store, group: &mut Group, activity_id: &str) -> Option<Activity> {
    let position = group.activities.iter().position(|a| a.id == activity_id)?;
    let removed = group.activities.remove(position);

    if let Err(err) = remove_remote(store, &group.id, activity_id).await {
        tracing::error!(
            group_id = %group.id,
            activity_id,
            error = %err,
            "Failed to remove activity from store"
        );
    }

    Some(removed)
}

/// Complete an activity: remove it from the shared record and hand back a
/// completed copy for the caller's session-local list. No durable record of
/// the completion exists anywhere; other sessions simply see it disappear.
pub async fn complete(store: &dyn Store, group: &mut Group, activity_id: &str) -> Option<Activity> {
    let mut done = remove(store, group, activity_id).await?;
    done.status = ActivityStatus::Completed;
    Some(done)
}

/// Append a note: local push, then array-union write. Notes are append-only.
pub async fn append_note(store: &dyn Store, group: &mut Group, note: Note) {
    group.notes.push(note.clone());

    if let Err(err) = store.add_group_note(&group.id, &note).await {
        tracing::error!(group_id = %group.id, error = %err, "Failed to store note");
    }
}

/// Remote half of [`remove`]: re-read the record and drop the element whose
/// ID matches. Working from a fresh read rather than the caller's snapshot
/// keeps removal independent of concurrent field edits.
async fn remove_remote(store: &dyn Store, group_id: &str, activity_id: &str) -> Result<()> {
    let Some(fresh) = store.get_group(group_id).await? else {
        // The record itself is gone; nothing to remove.
        return Ok(());
    };

    let remaining: Vec<Activity> = fresh
        .activities
        .iter()
        .filter(|a| a.id != activity_id)
        .cloned()
        .collect();

    if remaining.len() == fresh.activities.len() {
        // Already absent: no-op.
        return Ok(());
    }

    store.set_group_activities(group_id, &remaining).await
}
