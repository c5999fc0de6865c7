// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Group, activity and note models.

use serde::{Deserialize, Serialize};

/// A group record in the `grupos` collection.
///
/// Activities and notes are embedded, unordered collections inside the one
/// document; there is no normalization, so their growth is bounded only by
/// the store's document size limit.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Group {
    /// Document ID, populated from the store key on read
    #[serde(default, skip_serializing, alias = "_firestore_id")]
    pub id: String,
    /// Group name
    #[serde(rename = "nombre")]
    pub name: String,
    /// Free-text description
    #[serde(rename = "descripcion", default)]
    pub description: String,
    /// User ID of the creator
    #[serde(rename = "creadorId")]
    pub creator_id: String,
    /// Member user IDs; membership test is a linear scan
    #[serde(rename = "miembros", default)]
    pub members: Vec<String>,
    /// When the group was created (RFC3339)
    #[serde(rename = "fechaCreacion")]
    pub created_at: String,
    /// Embedded activity collection
    #[serde(rename = "actividades", default)]
    pub activities: Vec<Activity>,
    /// Embedded note collection, append-only
    #[serde(rename = "notas", default)]
    pub notes: Vec<Note>,
}

impl Group {
    /// Whether the given user belongs to this group.
    pub fn has_member(&self, user_id: &str) -> bool {
        self.members.iter().any(|m| m == user_id)
    }

    /// Activities still awaiting completion.
    pub fn pending_activities(&self) -> impl Iterator<Item = &Activity> {
        self.activities
            .iter()
            .filter(|a| a.status == ActivityStatus::Pending)
    }
}

/// Completion status of an activity.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum ActivityStatus {
    #[serde(rename = "pendiente")]
    Pending,
    #[serde(rename = "completada")]
    Completed,
}

/// An activity embedded in a group record.
///
/// The ID is generated client-side when the activity is created; it is unique
/// within its group but nothing on the server enforces that, so two
/// concurrent creators can theoretically collide.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Activity {
    /// Client-generated ID, unique within the group
    pub id: String,
    /// Activity title
    #[serde(rename = "titulo")]
    pub title: String,
    /// Free-text description
    #[serde(rename = "descripcion", default)]
    pub description: String,
    /// Scheduled date (`YYYY-MM-DD` or RFC3339)
    #[serde(rename = "fecha")]
    pub date: String,
    /// User ID of the creator
    #[serde(rename = "creadorId")]
    pub creator_id: String,
    /// Completion status
    #[serde(rename = "estado")]
    pub status: ActivityStatus,
    /// Voter user IDs; written empty, no screen populates it
    #[serde(rename = "votos", default)]
    pub votes: Vec<String>,
    /// When the activity was created (RFC3339)
    #[serde(rename = "fechaCreacion")]
    pub created_at: String,
}

/// A free-text note embedded in a group record. Append-only.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Note {
    /// Note text
    #[serde(rename = "contenido")]
    pub content: String,
    /// User ID of the author
    #[serde(rename = "autor")]
    pub author_id: String,
    /// When the note was written (RFC3339)
    #[serde(rename = "fecha")]
    pub created_at: String,
}
