// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Group creation.

use crate::db::Store;
use crate::error::{AppError, Result};
use crate::models::Group;
use crate::time_utils;
use validator::Validate;

/// User input for a new group.
#[derive(Debug, Clone, Validate)]
pub struct NewGroup {
    #[validate(length(min = 1, message = "name is required"))]
    pub name: String,
    pub description: String,
}

/// Create a group with the creator as its sole member and empty embedded
/// collections.
pub async fn create(store: &dyn Store, creator_id: &str, input: NewGroup) -> Result<Group> {
    input
        .validate()
        .map_err(|e| AppError::BadRequest(e.to_string()))?;

    let group = Group {
        id: String::new(),
        name: input.name,
        description: input.description,
        creator_id: creator_id.to_string(),
        members: vec![creator_id.to_string()],
        created_at: time_utils::now_rfc3339(),
        activities: Vec::new(),
        notes: Vec::new(),
    };

    store.create_group(group).await
}
