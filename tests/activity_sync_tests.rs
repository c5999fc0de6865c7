// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Activity list synchronization tests.
//!
//! These tests verify that:
//! 1. Add-then-remove round-trips the embedded collection
//! 2. Removal is keyed by ID and survives concurrent field edits
//! 3. Completion is destructive in the shared record and visible only to
//!    the session that completed
//! 4. Write failures leave the optimistic local patch in place

use squadplan_core::db::Store;
use squadplan_core::models::ActivityStatus;
use squadplan_core::screens::{GroupDetailPhase, GroupDetailScreen, Route};
use squadplan_core::services::NewActivity;

mod common;

fn practice_input() -> NewActivity {
    NewActivity {
        title: "Practice".to_string(),
        description: "Bring water".to_string(),
        date: "2024-06-01".to_string(),
    }
}

#[tokio::test]
async fn test_example_scenario_add_then_complete() {
    let (app, uid) = common::signed_in_app("u1@example.com").await;
    let group = common::seed_group(&app.store, "g1", &[uid.as_str()]).await;

    let mut screen = GroupDetailScreen::new();
    screen.load(&app.core, &group.id).await;
    assert_eq!(screen.phase, GroupDetailPhase::Ready);

    screen.add_activity(&app.core, practice_input()).await.unwrap();

    let stored = app.store.get_group(&group.id).await.unwrap().unwrap();
    assert_eq!(stored.activities.len(), 1);
    let activity = &stored.activities[0];
    assert!(!activity.id.is_empty());
    assert_eq!(activity.title, "Practice");
    assert_eq!(activity.status, ActivityStatus::Pending);
    assert_eq!(activity.creator_id, uid);

    let activity_id = activity.id.clone();
    screen.complete_activity(&app.core, &activity_id).await;

    // Completion removes the activity from the shared record...
    let stored = app.store.get_group(&group.id).await.unwrap().unwrap();
    assert!(stored.activities.is_empty());

    // ...and records it only in this session's local list.
    assert_eq!(screen.completed.len(), 1);
    assert_eq!(screen.completed[0].id, activity_id);
    assert_eq!(screen.completed[0].status, ActivityStatus::Completed);
}

#[tokio::test]
async fn test_add_then_delete_round_trips_the_collection() {
    let (app, uid) = common::signed_in_app("u1@example.com").await;
    let group = common::seed_group(&app.store, "g1", &[uid.as_str()]).await;

    let before = app.store.get_group(&group.id).await.unwrap().unwrap();

    let mut screen = GroupDetailScreen::new();
    screen.load(&app.core, &group.id).await;
    screen.add_activity(&app.core, practice_input()).await.unwrap();

    let added_id = screen.group.as_ref().unwrap().activities[0].id.clone();
    screen.delete_activity(&app.core, &added_id).await;

    let after = app.store.get_group(&group.id).await.unwrap().unwrap();
    assert_eq!(after.activities, before.activities);
    assert!(screen.group.as_ref().unwrap().activities.is_empty());
}

#[tokio::test]
async fn test_removal_survives_a_concurrent_field_edit() {
    let (app, uid) = common::signed_in_app("u1@example.com").await;
    let group = common::seed_group(&app.store, "g1", &[uid.as_str()]).await;

    let mut screen = GroupDetailScreen::new();
    screen.load(&app.core, &group.id).await;
    screen.add_activity(&app.core, practice_input()).await.unwrap();
    let activity_id = screen.group.as_ref().unwrap().activities[0].id.clone();

    // Another member edits the same logical activity behind this screen's
    // back, so this screen's snapshot no longer matches the stored element.
    let mut edited = app
        .store
        .get_group(&group.id)
        .await
        .unwrap()
        .unwrap()
        .activities;
    edited[0].title = "Practice (moved to 6pm)".to_string();
    app.store
        .set_group_activities(&group.id, &edited)
        .await
        .unwrap();

    // Removal is keyed by ID, so it still removes the element.
    screen.delete_activity(&app.core, &activity_id).await;

    let stored = app.store.get_group(&group.id).await.unwrap().unwrap();
    assert!(stored.activities.is_empty());
}

#[tokio::test]
async fn test_deleting_an_already_absent_activity_is_a_no_op() {
    let (app, uid) = common::signed_in_app("u1@example.com").await;
    let group = common::seed_group(&app.store, "g1", &[uid.as_str()]).await;

    let mut screen = GroupDetailScreen::new();
    screen.load(&app.core, &group.id).await;
    screen.delete_activity(&app.core, "never-existed").await;

    assert_eq!(screen.phase, GroupDetailPhase::Ready);
    assert!(app
        .store
        .get_group(&group.id)
        .await
        .unwrap()
        .unwrap()
        .activities
        .is_empty());
}

#[tokio::test]
async fn test_completion_is_invisible_to_a_second_session() {
    let (app, uid) = common::signed_in_app("u1@example.com").await;
    let group = common::seed_group(&app.store, "g1", &[uid.as_str(), "u2"]).await;

    let mut first = GroupDetailScreen::new();
    first.load(&app.core, &group.id).await;
    first.add_activity(&app.core, practice_input()).await.unwrap();
    let activity_id = first.group.as_ref().unwrap().activities[0].id.clone();
    first.complete_activity(&app.core, &activity_id).await;

    // A second session over the same record sees no pending activity and,
    // crucially, no completed one either: the completion never left the
    // first session's memory.
    let mut second = GroupDetailScreen::new();
    second.load(&app.core, &group.id).await;
    assert!(second.group.as_ref().unwrap().activities.is_empty());
    assert!(second.completed.is_empty());
}

#[tokio::test]
async fn test_write_failure_keeps_the_optimistic_patch() {
    let (app, uid) = common::signed_in_app("u1@example.com").await;
    let group = common::seed_group(&app.store, "g1", &[uid.as_str()]).await;

    let mut screen = GroupDetailScreen::new();
    screen.load(&app.core, &group.id).await;

    app.store.set_offline(true);
    screen.add_activity(&app.core, practice_input()).await.unwrap();

    // The local view shows the activity even though the write failed...
    assert_eq!(screen.group.as_ref().unwrap().activities.len(), 1);

    // ...and the shared record was never touched.
    app.store.set_offline(false);
    let stored = app.store.get_group(&group.id).await.unwrap().unwrap();
    assert!(stored.activities.is_empty());
}

#[tokio::test]
async fn test_missing_group_navigates_away() {
    let (app, _uid) = common::signed_in_app("u1@example.com").await;

    let mut screen = GroupDetailScreen::new();
    let route = screen.load(&app.core, "no-such-group").await;

    assert_eq!(route, Some(Route::Groups));
    assert_eq!(screen.phase, GroupDetailPhase::Missing);
    assert!(screen.group.is_none());
}

#[tokio::test]
async fn test_notes_append_and_persist() {
    let (app, uid) = common::signed_in_app("u1@example.com").await;
    let group = common::seed_group(&app.store, "g1", &[uid.as_str()]).await;

    let mut screen = GroupDetailScreen::new();
    screen.load(&app.core, &group.id).await;

    screen.add_note(&app.core, "Bring snacks").await.unwrap();
    screen.add_note(&app.core, "Meet at the trailhead").await.unwrap();
    assert!(screen.add_note(&app.core, "   ").await.is_err());

    let stored = app.store.get_group(&group.id).await.unwrap().unwrap();
    assert_eq!(stored.notes.len(), 2);
    assert_eq!(stored.notes[0].content, "Bring snacks");
    assert_eq!(stored.notes[0].author_id, uid);
}

#[tokio::test]
async fn test_member_names_resolve_from_profiles() {
    let (app, uid) = common::signed_in_app("u1@example.com").await;

    // Mirror a profile for the second member only; the signed-in fixture
    // does not create one.
    let group = common::seed_group(&app.store, "g1", &[uid.as_str(), "u2"]).await;
    app.store
        .set_profile(
            "u2",
            &squadplan_core::models::Profile {
                id: "u2".to_string(),
                name: "Bea".to_string(),
                email: "bea@example.com".to_string(),
                created_at: "2024-05-01T00:00:00Z".to_string(),
                groups: Vec::new(),
                display_name: Some("Bea R".to_string()),
                avatar: None,
            },
        )
        .await
        .unwrap();

    let mut screen = GroupDetailScreen::new();
    screen.load(&app.core, &group.id).await;

    assert_eq!(screen.member_label("u2"), "Bea R");
    // Members without a profile fall back to the raw ID.
    assert_eq!(screen.member_label(&uid), uid.as_str());
}
