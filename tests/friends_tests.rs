// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Friend list tests: device-local, append-only, idempotent per user.

use squadplan_core::db::Store;
use squadplan_core::models::Profile;
use squadplan_core::screens::{Phase, UserListScreen};

mod common;

fn profile(id: &str, name: &str, email: &str) -> Profile {
    Profile {
        id: id.to_string(),
        name: name.to_string(),
        email: email.to_string(),
        created_at: "2024-05-01T00:00:00Z".to_string(),
        groups: Vec::new(),
        display_name: None,
        avatar: None,
    }
}

#[tokio::test]
async fn test_add_friend_moves_user_out_of_search() {
    let (app, _uid) = common::signed_in_app("ana@example.com").await;
    app.store
        .set_profile("u2", &profile("u2", "Bea", "bea@example.com"))
        .await
        .unwrap();

    let mut screen = UserListScreen::new();
    screen.load(&app.core).await;
    assert_eq!(screen.phase, Phase::Ready);

    screen.set_search("bea");
    assert_eq!(screen.visible_users(&app.core).len(), 1);

    screen.add_friend(&app.core, "u2");
    assert_eq!(screen.friends.len(), 1);
    assert_eq!(screen.friends[0].email, "bea@example.com");
    assert!(screen.search.is_empty());
    assert!(screen.visible_users(&app.core).is_empty());
}

#[tokio::test]
async fn test_add_friend_is_idempotent_per_user() {
    let (app, _uid) = common::signed_in_app("ana@example.com").await;

    let bea = squadplan_core::models::Friend {
        id: "u2".to_string(),
        name: "Bea".to_string(),
        email: "bea@example.com".to_string(),
        display_name: None,
    };

    assert_eq!(app.core.friends.add(bea.clone()).len(), 1);
    assert_eq!(app.core.friends.add(bea).len(), 1);
}

#[tokio::test]
async fn test_friends_persist_across_screen_mounts() {
    let (app, _uid) = common::signed_in_app("ana@example.com").await;
    app.store
        .set_profile("u2", &profile("u2", "Bea", "bea@example.com"))
        .await
        .unwrap();

    let mut screen = UserListScreen::new();
    screen.load(&app.core).await;
    screen.add_friend(&app.core, "u2");

    // A fresh mount reloads the same list from local storage; there is no
    // operation anywhere that removes an entry.
    let mut remounted = UserListScreen::new();
    remounted.load(&app.core).await;
    assert_eq!(remounted.friends.len(), 1);
    assert_eq!(remounted.friends[0].id, "u2");
}

#[tokio::test]
async fn test_search_excludes_the_current_user() {
    let (app, uid) = common::signed_in_app("ana@example.com").await;
    app.store
        .set_profile(&uid, &profile(&uid, "Ana", "ana@example.com"))
        .await
        .unwrap();
    app.store
        .set_profile("u2", &profile("u2", "Bea", "bea@example.com"))
        .await
        .unwrap();

    let mut screen = UserListScreen::new();
    screen.load(&app.core).await;

    // An empty query matches everyone except the signed-in user.
    let visible = screen.visible_users(&app.core);
    assert_eq!(visible.len(), 1);
    assert_eq!(visible[0].id, "u2");
}

#[tokio::test]
async fn test_directory_read_failure_renders_empty() {
    let (app, _uid) = common::signed_in_app("ana@example.com").await;

    app.store.set_offline(true);
    let mut screen = UserListScreen::new();
    screen.load(&app.core).await;

    assert_eq!(screen.phase, Phase::Ready);
    assert!(screen.users.is_empty());
}
