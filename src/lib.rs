// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! SquadPlan core: the client-side state and synchronization layer for the
//! SquadPlan group activity planner.
//!
//! Persistence and authentication are delegated to Firebase; this crate
//! holds the session state, the collection readers, the embedded-list
//! mutators, and the screen controllers an embedding UI shell drives. There
//! is no server here and no protocol of our own: every operation is a direct
//! call against the external store, with optimistic local patches and the
//! store's last-write-wins as the only concurrency control.

pub mod auth;
pub mod config;
pub mod db;
pub mod error;
pub mod guard;
pub mod local;
pub mod models;
pub mod screens;
pub mod services;
pub mod session;
pub mod time_utils;

use auth::{AuthProvider, FirebaseAuth};
use config::Config;
use db::{FirestoreStore, Store};
use error::Result;
use local::LocalStore;
use services::FriendBook;
use session::SessionHandle;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Shared application state, built once by the embedding shell and handed to
/// every screen.
pub struct AppCore {
    pub config: Config,
    pub store: Arc<dyn Store>,
    pub session: SessionHandle,
    pub friends: FriendBook,
    pub local: LocalStore,
}

impl AppCore {
    /// Connect to the real Firebase backends described by the config.
    pub async fn connect(config: Config) -> Result<Self> {
        let store = Arc::new(FirestoreStore::new(&config.firebase_project_id).await?);
        let provider = Arc::new(FirebaseAuth::new(&config));
        Self::assemble(config, store, provider)
    }

    /// Assemble the core from injected boundaries (tests, local dev).
    pub fn assemble(
        config: Config,
        store: Arc<dyn Store>,
        provider: Arc<dyn AuthProvider>,
    ) -> Result<Self> {
        let local = LocalStore::open(&config.data_dir)?;
        let session = SessionHandle::new(provider, local.clone());
        let friends = FriendBook::new(local.clone());

        Ok(Self {
            config,
            store,
            session,
            friends,
            local,
        })
    }
}

/// Initialize logging for the embedding shell. Call once at startup.
pub fn init_logging() {
    let format = tracing_subscriber::fmt::layer().with_target(false);

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("squadplan_core=debug".parse().unwrap())
                .add_directive("info".parse().unwrap()),
        )
        .with(format)
        .init();
}
