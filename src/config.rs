//! Application configuration loaded from environment variables.

use std::env;
use std::path::PathBuf;

/// Application configuration, loaded once by the embedding shell.
#[derive(Debug, Clone)]
pub struct Config {
    /// Firebase / GCP project ID backing the document store
    pub firebase_project_id: String,
    /// Firebase web API key (public, identifies the project to the auth API)
    pub firebase_api_key: String,
    /// Base URL of a local Firebase Auth emulator, if one is running
    pub auth_emulator_url: Option<String>,
    /// Directory for device-local storage (friend list, session cache)
    pub data_dir: PathBuf,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// The Firestore emulator is configured separately through the SDK's own
    /// `FIRESTORE_EMULATOR_HOST` variable.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok(); // Load .env file if present

        Ok(Self {
            firebase_project_id: env::var("FIREBASE_PROJECT_ID")
                .map_err(|_| ConfigError::Missing("FIREBASE_PROJECT_ID"))?,
            firebase_api_key: env::var("FIREBASE_API_KEY")
                .map(|v| v.trim().to_string())
                .map_err(|_| ConfigError::Missing("FIREBASE_API_KEY"))?,
            auth_emulator_url: env::var("FIREBASE_AUTH_EMULATOR_URL").ok(),
            data_dir: env::var("SQUADPLAN_DATA_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from(".squadplan")),
        })
    }

    /// Default config for tests; points local storage at the temp dir.
    pub fn test_default() -> Self {
        Self {
            firebase_project_id: "test-project".to_string(),
            firebase_api_key: "test-api-key".to_string(),
            auth_emulator_url: None,
            data_dir: env::temp_dir().join("squadplan-test"),
        }
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    Missing(&'static str),
}
