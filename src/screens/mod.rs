// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Screen controllers.
//!
//! Each screen is a small state machine: `loading -> ready` on mount, with
//! user actions mutating from `ready` back to `ready` via optimistic local
//! patches. Rendering and the routing library live in the embedding shell;
//! [`Route`] only models the navigations the controllers themselves trigger.

pub mod create_group;
pub mod dashboard;
pub mod group_detail;
pub mod landing;
pub mod profile;
pub mod user_list;

pub use create_group::CreateGroupScreen;
pub use dashboard::DashboardScreen;
pub use group_detail::{GroupDetailPhase, GroupDetailScreen};
pub use landing::LandingScreen;
pub use profile::{ProfilePhase, ProfileScreen};
pub use user_list::UserListScreen;

/// Load state shared by the simple screens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Loading,
    Ready,
}

/// A navigation target requested by a controller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    /// Public entry screen (login/register)
    Landing,
    Dashboard,
    /// Group list overview
    Groups,
    /// One group's detail screen
    Group(String),
}
