// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Authentication provider boundary.
//!
//! All credential handling is delegated to the external provider; this crate
//! only consumes "subscribe to identity changes" plus the account operations
//! the screens trigger. Provider error codes are surfaced verbatim.

pub mod firebase;
pub mod memory;

pub use firebase::FirebaseAuth;
pub use memory::MemoryAuth;

use crate::error::Result;
use crate::session::{Identity, SessionState};
use async_trait::async_trait;
use tokio::sync::watch;

/// Capabilities consumed from the external auth provider.
#[async_trait]
pub trait AuthProvider: Send + Sync {
    /// Subscribe to identity changes. Dropping the receiver unsubscribes.
    fn subscribe(&self) -> watch::Receiver<SessionState>;

    /// Register a new account and sign it in.
    async fn sign_up(&self, email: &str, password: &str) -> Result<Identity>;

    /// Sign in with email and password.
    async fn sign_in(&self, email: &str, password: &str) -> Result<Identity>;

    /// Change the signed-in account's email address.
    async fn update_email(&self, new_email: &str) -> Result<Identity>;

    /// Drop the current session. Purely client-side.
    fn sign_out(&self);
}
