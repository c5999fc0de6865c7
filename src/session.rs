// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Session state: the authenticated identity and its readiness.
//!
//! There is exactly one session source per app core, built by dependency
//! injection from an [`AuthProvider`] — no ambient global. Subscribing is the
//! init hook; dropping the watch receiver is the teardown. The last-known
//! identity is mirrored into local storage strictly as a cache for the route
//! guard; it is never treated as a truth source (see [`crate::guard`]).

use crate::auth::AuthProvider;
use crate::error::Result;
use crate::local::LocalStore;
use crate::time_utils;
use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tokio::sync::watch;

/// Local-storage key for the cached identity.
pub const SESSION_CACHE_KEY: &str = "session";

/// How long a cached identity may stand in for a still-loading session.
const CACHE_TTL_DAYS: i64 = 7;

/// The authenticated identity as reported by the provider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    pub uid: String,
    pub email: String,
    pub display_name: Option<String>,
}

/// Readiness and identity of the session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionState {
    /// The provider has not yet reported whether anyone is signed in.
    Loading,
    SignedOut,
    SignedIn(Identity),
}

impl SessionState {
    pub fn identity(&self) -> Option<&Identity> {
        match self {
            SessionState::SignedIn(identity) => Some(identity),
            _ => None,
        }
    }

    /// Whether the provider has resolved the session either way.
    pub fn is_ready(&self) -> bool {
        !matches!(self, SessionState::Loading)
    }
}

/// Last-known identity persisted in local storage.
///
/// Only a cache: consulted by the route guard while the live session is
/// still loading, and only while fresh.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CachedIdentity {
    pub uid: String,
    pub email: String,
    /// When the cache entry was written (RFC3339)
    pub cached_at: String,
}

impl CachedIdentity {
    fn of(identity: &Identity) -> Self {
        Self {
            uid: identity.uid.clone(),
            email: identity.email.clone(),
            cached_at: time_utils::now_rfc3339(),
        }
    }

    /// Whether the entry is recent enough to grant provisional access.
    /// Unparseable timestamps count as stale.
    pub fn is_fresh(&self, now: DateTime<Utc>) -> bool {
        match time_utils::parse_rfc3339(&self.cached_at) {
            Some(cached_at) => now - cached_at <= Duration::days(CACHE_TTL_DAYS),
            None => false,
        }
    }
}

/// Handle to the one authoritative session source.
pub struct SessionHandle {
    provider: Arc<dyn AuthProvider>,
    rx: watch::Receiver<SessionState>,
    local: LocalStore,
}

impl SessionHandle {
    /// Subscribe to the provider. This is the session's init hook.
    pub fn new(provider: Arc<dyn AuthProvider>, local: LocalStore) -> Self {
        let rx = provider.subscribe();
        Self {
            provider,
            rx,
            local,
        }
    }

    /// Current session state.
    pub fn state(&self) -> SessionState {
        self.rx.borrow().clone()
    }

    /// Current identity, if signed in.
    pub fn identity(&self) -> Option<Identity> {
        self.state().identity().cloned()
    }

    /// A fresh receiver for callers that want to await identity changes.
    pub fn watch(&self) -> watch::Receiver<SessionState> {
        self.provider.subscribe()
    }

    /// The cached last-known identity, if any. Read errors degrade to `None`.
    pub fn cached_identity(&self) -> Option<CachedIdentity> {
        match self.local.get(SESSION_CACHE_KEY) {
            Ok(cached) => cached,
            Err(err) => {
                tracing::warn!(error = %err, "Failed to read cached identity");
                None
            }
        }
    }

    pub async fn sign_in(&self, email: &str, password: &str) -> Result<Identity> {
        let identity = self.provider.sign_in(email, password).await?;
        self.remember(&identity);
        Ok(identity)
    }

    pub async fn register(&self, email: &str, password: &str) -> Result<Identity> {
        let identity = self.provider.sign_up(email, password).await?;
        self.remember(&identity);
        Ok(identity)
    }

    pub async fn update_email(&self, new_email: &str) -> Result<Identity> {
        let identity = self.provider.update_email(new_email).await?;
        self.remember(&identity);
        Ok(identity)
    }

    /// Sign out and clear the cached identity.
    pub fn sign_out(&self) {
        self.provider.sign_out();
        if let Err(err) = self.local.remove(SESSION_CACHE_KEY) {
            tracing::warn!(error = %err, "Failed to clear cached identity");
        }
    }

    /// Refresh the last-known-identity cache. Failures are only logged; the
    /// cache is an optimization, not state we depend on.
    fn remember(&self, identity: &Identity) {
        if let Err(err) = self.local.set(SESSION_CACHE_KEY, &CachedIdentity::of(identity)) {
            tracing::warn!(error = %err, "Failed to cache identity");
        }
    }
}
