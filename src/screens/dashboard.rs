// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Dashboard: the user's groups and their pending activities.

use crate::models::Group;
use crate::screens::Phase;
use crate::services::reader::{self, ActivityOverview};
use crate::AppCore;

/// Controller for the dashboard screen.
#[derive(Debug, Default)]
pub struct DashboardScreen {
    pub phase: Phase,
    pub groups: Vec<Group>,
    pub pending: Vec<ActivityOverview>,
}

impl DashboardScreen {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mount: fetch the user's groups and flatten their pending activities.
    /// Read failures render as empty lists; the screen still reaches ready.
    pub async fn load(&mut self, core: &AppCore) {
        if let Some(identity) = core.session.identity() {
            self.groups = reader::member_groups(core.store.as_ref(), &identity.uid).await;
            self.pending = reader::pending_overview(&self.groups);
        } else {
            tracing::warn!("Dashboard mounted without a session");
            self.groups = Vec::new();
            self.pending = Vec::new();
        }
        self.phase = Phase::Ready;
    }
}
