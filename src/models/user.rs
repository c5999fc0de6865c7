//! User profile models.

use serde::{Deserialize, Serialize};

/// User profile mirrored into the `usuarios` collection, keyed by the auth
/// provider's user ID.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Profile {
    /// Document ID (the auth provider uid), populated from the store key
    #[serde(default, skip_serializing, alias = "_firestore_id")]
    pub id: String,
    /// Name given at registration
    #[serde(rename = "nombre")]
    pub name: String,
    /// Email address as mirrored at registration
    pub email: String,
    /// When the account was registered (RFC3339)
    #[serde(rename = "fechaCreacion")]
    pub created_at: String,
    /// Group IDs; written empty at registration and never maintained
    #[serde(rename = "grupos", default)]
    pub groups: Vec<String>,
    /// Editable display name
    #[serde(rename = "nombrePerfil", default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    /// Avatar reference, usually a base64 data URL
    #[serde(rename = "imagenPerfil", default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
}

impl Profile {
    /// The name a screen should show for this user.
    pub fn shown_name(&self) -> &str {
        self.display_name.as_deref().unwrap_or(&self.name)
    }
}

/// The editable profile fields committed together by the profile screen.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProfileCard {
    pub display_name: Option<String>,
    pub avatar: Option<String>,
}

/// A denormalized copy of another user, kept only in device-local storage.
///
/// Friends are never synchronized to the shared store and there is no
/// operation that removes one.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Friend {
    pub id: String,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub display_name: Option<String>,
}

impl From<&Profile> for Friend {
    fn from(profile: &Profile) -> Self {
        Self {
            id: profile.id.clone(),
            name: profile.name.clone(),
            email: profile.email.clone(),
            display_name: profile.display_name.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_profile_wire_field_names() {
        let profile = Profile {
            id: "u1".to_string(),
            name: "Ana".to_string(),
            email: "ana@example.com".to_string(),
            created_at: "2024-01-01T00:00:00Z".to_string(),
            groups: Vec::new(),
            display_name: Some("Ana G".to_string()),
            avatar: None,
        };

        let json = serde_json::to_value(&profile).unwrap();
        assert_eq!(json["nombre"], "Ana");
        assert_eq!(json["nombrePerfil"], "Ana G");
        assert_eq!(json["fechaCreacion"], "2024-01-01T00:00:00Z");
        // Absent optional fields stay out of the document entirely.
        assert!(json.get("imagenPerfil").is_none());
        assert!(json.get("id").is_none());
    }

    #[test]
    fn test_shown_name_prefers_display_name() {
        let mut profile: Profile = serde_json::from_value(serde_json::json!({
            "nombre": "Ana",
            "email": "ana@example.com",
            "fechaCreacion": "2024-01-01T00:00:00Z"
        }))
        .unwrap();

        assert_eq!(profile.shown_name(), "Ana");
        profile.display_name = Some("Ana G".to_string());
        assert_eq!(profile.shown_name(), "Ana G");
    }
}
