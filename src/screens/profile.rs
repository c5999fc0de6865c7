// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Profile screen: staged edits committed as one profile write plus a
//! conditional email change.

use crate::models::ProfileCard;
use crate::AppCore;
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;

/// Load state of the profile screen.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ProfilePhase {
    #[default]
    Loading,
    Ready,
    /// Inert message shown instead of the form (missing profile, no session)
    Failed(String),
}

/// The editable fields as staged in the form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProfileForm {
    pub email: String,
    pub display_name: String,
    pub avatar: Option<String>,
}

/// Controller for the profile screen.
#[derive(Debug, Default)]
pub struct ProfileScreen {
    pub phase: ProfilePhase,
    pub form: ProfileForm,
    pub editing: bool,
    pub error: Option<String>,
    pub success: Option<String>,
}

impl ProfileScreen {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mount: load the session user's profile into the form. The email shown
    /// is the session's, not the mirrored copy in the profile record.
    pub async fn load(&mut self, core: &AppCore) {
        let Some(identity) = core.session.identity() else {
            self.phase = ProfilePhase::Failed("No authenticated user".to_string());
            return;
        };

        match core.store.get_profile(&identity.uid).await {
            Ok(Some(profile)) => {
                self.form = ProfileForm {
                    email: identity.email,
                    display_name: profile.display_name.unwrap_or_default(),
                    avatar: profile.avatar,
                };
                self.phase = ProfilePhase::Ready;
            }
            Ok(None) => {
                self.phase = ProfilePhase::Failed("The profile does not exist".to_string());
            }
            Err(err) => {
                self.phase = ProfilePhase::Failed(format!("Could not load the profile: {err}"));
            }
        }
    }

    pub fn toggle_editing(&mut self) {
        self.editing = !self.editing;
    }

    /// Stage an avatar image as a base64 data URL, the format the
    /// `imagenPerfil` field holds.
    pub fn stage_avatar(&mut self, mime_type: &str, bytes: &[u8]) {
        self.form.avatar = Some(format!("data:{};base64,{}", mime_type, BASE64.encode(bytes)));
    }

    /// Commit the staged edits: one write for the profile fields, then a
    /// separate auth write if the email changed.
    ///
    /// The two writes are not atomic with respect to each other: the profile
    /// fields can land while the email change fails (or vice versa), leaving
    /// the two out of sync until the next successful save.
    pub async fn save(&mut self, core: &AppCore) {
        self.error = None;
        self.success = None;

        let Some(identity) = core.session.identity() else {
            self.error = Some("No authenticated user".to_string());
            return;
        };

        let card = ProfileCard {
            display_name: Some(self.form.display_name.clone()),
            avatar: self.form.avatar.clone(),
        };
        if let Err(err) = core.store.update_profile_card(&identity.uid, &card).await {
            self.error = Some(format!("Could not update the profile: {err}"));
            return;
        }

        if self.form.email != identity.email {
            if let Err(err) = core.session.update_email(&self.form.email).await {
                // Profile fields above are already committed.
                self.error = Some(format!("Could not update the email: {err}"));
                return;
            }
        }

        self.success = Some("Profile updated".to_string());
        self.editing = false;
    }
}
