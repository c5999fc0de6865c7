// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Group creation form.

use crate::screens::Route;
use crate::services::groups::{self, NewGroup};
use crate::AppCore;

/// Controller for the create-group screen.
#[derive(Debug, Default)]
pub struct CreateGroupScreen {
    pub error: Option<String>,
}

impl CreateGroupScreen {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create the group and navigate to it. On failure the form stays up
    /// with the error message set.
    pub async fn create(&mut self, core: &AppCore, input: NewGroup) -> Option<Route> {
        self.error = None;

        let Some(identity) = core.session.identity() else {
            self.error = Some("Could not create the group: no authenticated user".to_string());
            return None;
        };

        match groups::create(core.store.as_ref(), &identity.uid, input).await {
            Ok(group) => Some(Route::Group(group.id)),
            Err(err) => {
                self.error = Some(format!("Could not create the group: {err}"));
                None
            }
        }
    }
}
