// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Collection reads mapped into view state.
//!
//! Every screen re-fetches the full matching set on mount; there is no
//! pagination and no caching across calls. A failed read is logged and
//! degraded to an empty or absent value, never retried.

use crate::db::Store;
use crate::models::{Group, Profile};
use futures_util::{stream, StreamExt};
use std::collections::HashMap;

const MAX_CONCURRENT_PROFILE_READS: usize = 8;

/// All groups whose member list contains the user. Failure reads as "no
/// groups" on screen.
pub async fn member_groups(store: &dyn Store, user_id: &str) -> Vec<Group> {
    match store.groups_for_member(user_id).await {
        Ok(groups) => groups,
        Err(err) => {
            tracing::error!(user_id, error = %err, "Failed to load groups");
            Vec::new()
        }
    }
}

/// One group by ID. Both "missing" and "failed" read as `None`; the caller
/// navigates away either way.
pub async fn group_by_id(store: &dyn Store, group_id: &str) -> Option<Group> {
    match store.get_group(group_id).await {
        Ok(group) => group,
        Err(err) => {
            tracing::error!(group_id, error = %err, "Failed to load group");
            None
        }
    }
}

/// Every user profile. Failure reads as an empty directory.
pub async fn all_profiles(store: &dyn Store) -> Vec<Profile> {
    match store.list_profiles().await {
        Ok(profiles) => profiles,
        Err(err) => {
            tracing::error!(error = %err, "Failed to load profiles");
            Vec::new()
        }
    }
}

/// Display names for a set of members, keyed by user ID.
///
/// Profiles are fetched with bounded concurrency; members whose profile is
/// missing or unreadable simply have no entry in the map.
pub async fn member_names(store: &dyn Store, member_ids: &[String]) -> HashMap<String, String> {
    let results = stream::iter(member_ids.iter().cloned())
        .map(|uid| async move {
            let profile = store.get_profile(&uid).await;
            (uid, profile)
        })
        .buffer_unordered(MAX_CONCURRENT_PROFILE_READS)
        .collect::<Vec<_>>()
        .await;

    let mut names = HashMap::new();
    for (uid, profile) in results {
        match profile {
            Ok(Some(profile)) => {
                names.insert(uid, profile.shown_name().to_string());
            }
            Ok(None) => {}
            Err(err) => {
                tracing::warn!(user_id = %uid, error = %err, "Failed to load member profile");
            }
        }
    }
    names
}

/// A pending activity tagged with the group it belongs to, for the dashboard.
#[derive(Debug, Clone, PartialEq)]
pub struct ActivityOverview {
    pub group_id: String,
    pub group_name: String,
    pub activity: crate::models::Activity,
}

/// Flatten every pending activity across the user's groups.
pub fn pending_overview(groups: &[Group]) -> Vec<ActivityOverview> {
    groups
        .iter()
        .flat_map(|group| {
            group.pending_activities().map(|activity| ActivityOverview {
                group_id: group.id.clone(),
                group_name: group.name.clone(),
                activity: activity.clone(),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Activity, ActivityStatus};

    fn activity(id: &str, status: ActivityStatus) -> Activity {
        Activity {
            id: id.to_string(),
            title: id.to_string(),
            description: String::new(),
            date: "2024-06-01".to_string(),
            creator_id: "u1".to_string(),
            status,
            votes: Vec::new(),
            created_at: "2024-05-20T10:00:00Z".to_string(),
        }
    }

    #[test]
    fn test_pending_overview_filters_and_tags() {
        let groups = vec![
            Group {
                id: "g1".to_string(),
                name: "Hiking".to_string(),
                description: String::new(),
                creator_id: "u1".to_string(),
                members: vec!["u1".to_string()],
                created_at: "2024-05-01T00:00:00Z".to_string(),
                activities: vec![
                    activity("a1", ActivityStatus::Pending),
                    activity("a2", ActivityStatus::Completed),
                ],
                notes: Vec::new(),
            },
            Group {
                id: "g2".to_string(),
                name: "Cooking".to_string(),
                description: String::new(),
                creator_id: "u1".to_string(),
                members: vec!["u1".to_string()],
                created_at: "2024-05-01T00:00:00Z".to_string(),
                activities: vec![activity("a3", ActivityStatus::Pending)],
                notes: Vec::new(),
            },
        ];

        let overview = pending_overview(&groups);
        assert_eq!(overview.len(), 2);
        assert_eq!(overview[0].activity.id, "a1");
        assert_eq!(overview[0].group_name, "Hiking");
        assert_eq!(overview[1].group_id, "g2");
    }
}
