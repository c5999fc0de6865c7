// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Route-guard resolution.
//!
//! The live session is the only truth source. The cached identity in local
//! storage is consulted solely while the session is still loading, and only
//! while fresh; once the provider has resolved, the cache is ignored.

use crate::screens::Route;
use crate::session::{CachedIdentity, Identity, SessionState};
use chrono::{DateTime, Utc};

/// Outcome of guarding a private route.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Access {
    /// Live session grants access.
    Granted(Identity),
    /// Session still loading; a fresh cached identity grants provisional
    /// access until the provider resolves.
    Provisional(CachedIdentity),
    /// Not signed in; go to the given route instead.
    Redirect(Route),
}

/// Guard a private route.
pub fn private_route(
    state: &SessionState,
    cache: Option<&CachedIdentity>,
    now: DateTime<Utc>,
) -> Access {
    match state {
        SessionState::SignedIn(identity) => Access::Granted(identity.clone()),
        SessionState::SignedOut => Access::Redirect(Route::Landing),
        SessionState::Loading => match cache {
            Some(cached) if cached.is_fresh(now) => Access::Provisional(cached.clone()),
            _ => Access::Redirect(Route::Landing),
        },
    }
}

/// Guard the public entry route: signed-in users are sent to the dashboard.
pub fn public_route(
    state: &SessionState,
    cache: Option<&CachedIdentity>,
    now: DateTime<Utc>,
) -> Option<Route> {
    match state {
        SessionState::SignedIn(_) => Some(Route::Dashboard),
        SessionState::SignedOut => None,
        SessionState::Loading => cache
            .filter(|cached| cached.is_fresh(now))
            .map(|_| Route::Dashboard),
    }
}
