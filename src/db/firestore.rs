// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Firestore implementation of the [`Store`] boundary.
//!
//! Provides typed operations for:
//! - Groups (with their embedded activity and note collections)
//! - Profiles (user records mirrored from the auth provider)
//!
//! Embedded-array mutations are read-modify-write against the whole group
//! document; write ordering between sessions is whatever Firestore's
//! last-write-wins gives us.

use crate::db::{collections, Store};
use crate::error::{AppError, Result};
use crate::models::{Activity, Group, Note, Profile, ProfileCard};
use async_trait::async_trait;

/// Firestore-backed document store.
#[derive(Clone)]
pub struct FirestoreStore {
    client: Option<firestore::FirestoreDb>,
}

impl FirestoreStore {
    /// Create a new Firestore client.
    ///
    /// For local development with emulator, set FIRESTORE_EMULATOR_HOST.
    pub async fn new(project_id: &str) -> Result<Self> {
        // If the emulator environment variable is set, use unauthenticated
        // connection to avoid local credential warnings and leakage.
        if std::env::var("FIRESTORE_EMULATOR_HOST").is_ok() {
            return Self::create_emulator_client(project_id).await;
        }

        let client = firestore::FirestoreDb::new(project_id)
            .await
            .map_err(|e| AppError::Database(format!("Failed to connect to Firestore: {}", e)))?;

        tracing::info!(project = project_id, "Connected to Firestore");

        Ok(Self {
            client: Some(client),
        })
    }

    /// Create a Firestore client for the emulator with unauthenticated access.
    async fn create_emulator_client(project_id: &str) -> Result<Self> {
        tracing::info!("Using unauthenticated connection for Firestore Emulator");

        let token_source = gcloud_sdk::ExternalJwtFunctionSource::new(|| async {
            Ok(gcloud_sdk::Token {
                token_type: "Bearer".to_string(),
                token: gcloud_sdk::SecretValue::new(
                    "eyJhbGciOiJub25lIn0.eyJ1aWQiOiJ0ZXN0In0."
                        .to_string()
                        .into(),
                ),
                expiry: chrono::Utc::now() + chrono::Duration::hours(1),
            })
        });

        let options = firestore::FirestoreDbOptions::new(project_id.to_string());

        let client = firestore::FirestoreDb::with_options_token_source(
            options,
            gcloud_sdk::GCP_DEFAULT_SCOPES.clone(),
            gcloud_sdk::TokenSourceType::ExternalSource(Box::new(token_source)),
        )
        .await
        .map_err(|e| {
            AppError::Database(format!("Failed to connect to Firestore Emulator: {}", e))
        })?;

        tracing::info!(
            project = project_id,
            "Connected to Firestore (Emulator/Unauthenticated)"
        );

        Ok(Self {
            client: Some(client),
        })
    }

    /// Create a mock client for testing (offline mode).
    ///
    /// All database operations will return an error if called.
    pub fn new_mock() -> Self {
        Self { client: None }
    }

    /// Helper to get the client or return an error if offline.
    fn get_client(&self) -> Result<&firestore::FirestoreDb> {
        self.client
            .as_ref()
            .ok_or_else(|| AppError::Database("Database not connected (offline mode)".to_string()))
    }

    /// Read a group that must exist, for read-modify-write updates.
    async fn require_group(&self, group_id: &str) -> Result<Group> {
        self.get_group(group_id).await?.ok_or_else(|| {
            AppError::NotFound(format!("{}/{}", collections::GROUPS, group_id))
        })
    }

    /// Write a whole group document back under its key.
    async fn write_group(&self, group: &Group) -> Result<()> {
        let _: () = self
            .get_client()?
            .fluent()
            .update()
            .in_col(collections::GROUPS)
            .document_id(&group.id)
            .object(group)
            .execute()
            .await
            .map_err(|e| AppError::Database(e.to_string()))?;
        Ok(())
    }
}

#[async_trait]
impl Store for FirestoreStore {
    async fn create_group(&self, mut group: Group) -> Result<Group> {
        group.id = self.generate_id();
        self.write_group(&group).await?;
        Ok(group)
    }

    async fn get_group(&self, group_id: &str) -> Result<Option<Group>> {
        self.get_client()?
            .fluent()
            .select()
            .by_id_in(collections::GROUPS)
            .obj()
            .one(group_id)
            .await
            .map_err(|e| AppError::Database(e.to_string()))
    }

    async fn groups_for_member(&self, user_id: &str) -> Result<Vec<Group>> {
        // Membership filter applied after the fetch; the dataset carries no
        // index for it and the full set is what every screen reads anyway.
        let groups: Vec<Group> = self
            .get_client()?
            .fluent()
            .select()
            .from(collections::GROUPS)
            .obj()
            .query()
            .await
            .map_err(|e| AppError::Database(e.to_string()))?;

        Ok(groups.into_iter().filter(|g| g.has_member(user_id)).collect())
    }

    async fn add_group_activity(&self, group_id: &str, activity: &Activity) -> Result<()> {
        let mut group = self.require_group(group_id).await?;
        if group.activities.iter().any(|a| a == activity) {
            return Ok(());
        }
        group.activities.push(activity.clone());
        self.write_group(&group).await
    }

    async fn set_group_activities(&self, group_id: &str, activities: &[Activity]) -> Result<()> {
        let mut group = self.require_group(group_id).await?;
        group.activities = activities.to_vec();
        self.write_group(&group).await
    }

    async fn add_group_note(&self, group_id: &str, note: &Note) -> Result<()> {
        let mut group = self.require_group(group_id).await?;
        if group.notes.iter().any(|n| n == note) {
            return Ok(());
        }
        group.notes.push(note.clone());
        self.write_group(&group).await
    }

    async fn get_profile(&self, user_id: &str) -> Result<Option<Profile>> {
        self.get_client()?
            .fluent()
            .select()
            .by_id_in(collections::PROFILES)
            .obj()
            .one(user_id)
            .await
            .map_err(|e| AppError::Database(e.to_string()))
    }

    async fn set_profile(&self, user_id: &str, profile: &Profile) -> Result<()> {
        let _: () = self
            .get_client()?
            .fluent()
            .update()
            .in_col(collections::PROFILES)
            .document_id(user_id)
            .object(profile)
            .execute()
            .await
            .map_err(|e| AppError::Database(e.to_string()))?;
        Ok(())
    }

    async fn update_profile_card(&self, user_id: &str, card: &ProfileCard) -> Result<()> {
        let mut profile = self.get_profile(user_id).await?.ok_or_else(|| {
            AppError::NotFound(format!("{}/{}", collections::PROFILES, user_id))
        })?;
        profile.display_name = card.display_name.clone();
        profile.avatar = card.avatar.clone();
        self.set_profile(user_id, &profile).await
    }

    async fn list_profiles(&self) -> Result<Vec<Profile>> {
        self.get_client()?
            .fluent()
            .select()
            .from(collections::PROFILES)
            .obj()
            .query()
            .await
            .map_err(|e| AppError::Database(e.to_string()))
    }
}
