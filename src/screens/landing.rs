// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Public entry screen: login and registration forms.

use crate::models::Profile;
use crate::screens::Route;
use crate::time_utils;
use crate::AppCore;

/// Controller for the landing screen.
///
/// `busy` disables the submitting form for exactly the duration of the
/// attempt; `error` is the provider's message, displayed verbatim and
/// cleared on the next attempt.
#[derive(Debug, Default)]
pub struct LandingScreen {
    pub busy: bool,
    pub error: Option<String>,
}

impl LandingScreen {
    pub fn new() -> Self {
        Self::default()
    }

    /// Attempt login. Returns the dashboard route on success.
    pub async fn sign_in(&mut self, core: &AppCore, email: &str, password: &str) -> Option<Route> {
        self.busy = true;
        self.error = None;

        let result = core.session.sign_in(email, password).await;
        self.busy = false;

        match result {
            Ok(_) => Some(Route::Dashboard),
            Err(err) => {
                self.error = Some(format!("Sign-in failed: {err}"));
                None
            }
        }
    }

    /// Attempt registration, mirroring the new account into a profile
    /// record. Returns the dashboard route on success.
    pub async fn register(
        &mut self,
        core: &AppCore,
        name: &str,
        email: &str,
        password: &str,
        confirm_password: &str,
    ) -> Option<Route> {
        self.error = None;

        if password != confirm_password {
            self.error = Some("Passwords do not match".to_string());
            return None;
        }

        self.busy = true;
        let result = core.session.register(email, password).await;
        self.busy = false;

        let identity = match result {
            Ok(identity) => identity,
            Err(err) => {
                self.error = Some(format!("Registration failed: {err}"));
                return None;
            }
        };

        let profile = Profile {
            id: identity.uid.clone(),
            name: name.to_string(),
            email: email.to_string(),
            created_at: time_utils::now_rfc3339(),
            groups: Vec::new(),
            display_name: None,
            avatar: None,
        };

        if let Err(err) = core.store.set_profile(&identity.uid, &profile).await {
            // The account exists but its profile mirror does not; the form
            // stays up with the error.
            self.error = Some(format!("Registration failed: {err}"));
            return None;
        }

        Some(Route::Dashboard)
    }
}
