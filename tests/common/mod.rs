// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

use squadplan_core::auth::MemoryAuth;
use squadplan_core::config::Config;
use squadplan_core::db::{MemoryStore, Store};
use squadplan_core::models::Group;
use squadplan_core::AppCore;
use std::sync::Arc;

/// A fully assembled app core over in-memory boundaries, plus direct handles
/// to the fakes for test manipulation. The temp dir keeps local storage
/// isolated per test and is removed on drop.
#[allow(dead_code)]
pub struct TestApp {
    pub core: AppCore,
    pub store: Arc<MemoryStore>,
    pub auth: Arc<MemoryAuth>,
    _local_dir: tempfile::TempDir,
}

/// Build a test app with nobody signed in.
#[allow(dead_code)]
pub fn test_app() -> TestApp {
    let local_dir = tempfile::tempdir().expect("temp dir for local storage");
    let mut config = Config::test_default();
    config.data_dir = local_dir.path().to_path_buf();

    let store = Arc::new(MemoryStore::new());
    let auth = Arc::new(MemoryAuth::new());
    let core = AppCore::assemble(config, store.clone(), auth.clone()).expect("assemble app core");

    TestApp {
        core,
        store,
        auth,
        _local_dir: local_dir,
    }
}

/// Build a test app with a registered, signed-in user.
/// Returns the app and the user's uid.
#[allow(dead_code)]
pub async fn signed_in_app(email: &str) -> (TestApp, String) {
    let app = test_app();
    let identity = app
        .core
        .session
        .register(email, "secret123")
        .await
        .expect("register test user");
    (app, identity.uid)
}

/// Seed a group directly in the store.
#[allow(dead_code)]
pub async fn seed_group(store: &MemoryStore, name: &str, members: &[&str]) -> Group {
    store
        .create_group(Group {
            id: String::new(),
            name: name.to_string(),
            description: String::new(),
            creator_id: members[0].to_string(),
            members: members.iter().map(|m| m.to_string()).collect(),
            created_at: "2024-05-01T00:00:00Z".to_string(),
            activities: Vec::new(),
            notes: Vec::new(),
        })
        .await
        .expect("seed group")
}
