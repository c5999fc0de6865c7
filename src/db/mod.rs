//! Persistence boundary over the shared document store.

pub mod firestore;
pub mod memory;

pub use firestore::FirestoreStore;
pub use memory::MemoryStore;

use crate::error::Result;
use crate::models::{Activity, Group, Note, Profile, ProfileCard};
use async_trait::async_trait;

/// Collection names as constants.
pub mod collections {
    pub const GROUPS: &str = "grupos";
    pub const PROFILES: &str = "usuarios";
}

/// Capabilities the application consumes from the document store.
///
/// Every operation is a single direct call: no retries, no caching across
/// calls, no transactional grouping beyond what the store itself offers.
/// Array-valued fields are mutated read-modify-write; concurrent writers are
/// resolved by the store's own last-write-wins behavior.
#[async_trait]
pub trait Store: Send + Sync {
    /// Mint a fresh opaque key without creating a record.
    ///
    /// Used for client-generated activity IDs; uniqueness within a group is
    /// a client-side convention with no server-side enforcement.
    fn generate_id(&self) -> String {
        uuid::Uuid::new_v4().simple().to_string()
    }

    /// Create a group under a generated key and return it with the key set.
    async fn create_group(&self, group: Group) -> Result<Group>;

    /// Read one group by key.
    async fn get_group(&self, group_id: &str) -> Result<Option<Group>>;

    /// Read the full set of groups whose member list contains the user.
    async fn groups_for_member(&self, user_id: &str) -> Result<Vec<Group>>;

    /// Append an activity to a group's embedded collection unless a
    /// structurally equal element is already present (array-union).
    async fn add_group_activity(&self, group_id: &str, activity: &Activity) -> Result<()>;

    /// Replace a group's embedded activity collection.
    async fn set_group_activities(&self, group_id: &str, activities: &[Activity]) -> Result<()>;

    /// Append a note to a group's embedded collection (array-union).
    async fn add_group_note(&self, group_id: &str, note: &Note) -> Result<()>;

    /// Read one profile by user ID.
    async fn get_profile(&self, user_id: &str) -> Result<Option<Profile>>;

    /// Create or replace a profile record.
    async fn set_profile(&self, user_id: &str, profile: &Profile) -> Result<()>;

    /// Merge the editable profile fields into an existing profile.
    async fn update_profile_card(&self, user_id: &str, card: &ProfileCard) -> Result<()>;

    /// Read every profile record.
    async fn list_profiles(&self) -> Result<Vec<Profile>>;
}
