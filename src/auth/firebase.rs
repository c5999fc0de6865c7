// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Firebase Auth REST client.
//!
//! Talks to the `identitytoolkit` accounts API:
//! - `accounts:signUp` for registration
//! - `accounts:signInWithPassword` for login
//! - `accounts:update` for email changes
//!
//! Error codes from the API (`EMAIL_EXISTS`, `INVALID_LOGIN_CREDENTIALS`,
//! ...) are passed through verbatim so screens can display them as-is.

use crate::auth::AuthProvider;
use crate::config::Config;
use crate::error::{AppError, Result};
use crate::session::{Identity, SessionState};
use async_trait::async_trait;
use serde::Deserialize;
use std::sync::Mutex;
use tokio::sync::watch;

const DEFAULT_BASE_URL: &str = "https://identitytoolkit.googleapis.com/v1";

/// Firebase Auth client.
pub struct FirebaseAuth {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
    state_tx: watch::Sender<SessionState>,
    /// ID token of the signed-in account, needed for `accounts:update`.
    id_token: Mutex<Option<String>>,
}

impl FirebaseAuth {
    /// Create a new client for the configured project.
    ///
    /// No session is restored from disk, so the state starts at `SignedOut`.
    pub fn new(config: &Config) -> Self {
        let base_url = match &config.auth_emulator_url {
            Some(url) => format!(
                "{}/identitytoolkit.googleapis.com/v1",
                url.trim_end_matches('/')
            ),
            None => DEFAULT_BASE_URL.to_string(),
        };

        let (state_tx, _) = watch::channel(SessionState::SignedOut);

        Self {
            http: reqwest::Client::new(),
            base_url,
            api_key: config.firebase_api_key.clone(),
            state_tx,
            id_token: Mutex::new(None),
        }
    }

    /// Override the API base URL (tests).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// POST to an `accounts:` endpoint and decode the response.
    async fn call(&self, endpoint: &str, body: serde_json::Value) -> Result<AccountResponse> {
        let url = format!("{}/accounts:{}?key={}", self.base_url, endpoint, self.api_key);

        let response = self
            .http
            .post(&url)
            .json(&body)
            .send()
            .await
            .map_err(|e| AppError::Auth(e.to_string()))?;

        if !response.status().is_success() {
            let message = response
                .json::<ErrorEnvelope>()
                .await
                .ok()
                .and_then(|e| e.error)
                .map(|e| e.message)
                .unwrap_or_else(|| "UNKNOWN_AUTH_ERROR".to_string());
            return Err(AppError::Auth(message));
        }

        response
            .json::<AccountResponse>()
            .await
            .map_err(|e| AppError::Auth(e.to_string()))
    }

    /// Record a successful account response as the live session.
    fn record_session(&self, response: &AccountResponse) -> Identity {
        let identity = Identity {
            uid: response.local_id.clone(),
            email: response.email.clone(),
            display_name: response
                .display_name
                .clone()
                .filter(|name| !name.is_empty()),
        };

        if let Ok(mut token) = self.id_token.lock() {
            *token = Some(response.id_token.clone());
        }
        self.state_tx
            .send_replace(SessionState::SignedIn(identity.clone()));

        identity
    }
}

#[async_trait]
impl AuthProvider for FirebaseAuth {
    fn subscribe(&self) -> watch::Receiver<SessionState> {
        self.state_tx.subscribe()
    }

    async fn sign_up(&self, email: &str, password: &str) -> Result<Identity> {
        let response = self
            .call(
                "signUp",
                serde_json::json!({
                    "email": email,
                    "password": password,
                    "returnSecureToken": true,
                }),
            )
            .await?;

        tracing::info!(uid = %response.local_id, "Registered new account");
        Ok(self.record_session(&response))
    }

    async fn sign_in(&self, email: &str, password: &str) -> Result<Identity> {
        let response = self
            .call(
                "signInWithPassword",
                serde_json::json!({
                    "email": email,
                    "password": password,
                    "returnSecureToken": true,
                }),
            )
            .await?;

        tracing::info!(uid = %response.local_id, "Signed in");
        Ok(self.record_session(&response))
    }

    async fn update_email(&self, new_email: &str) -> Result<Identity> {
        let id_token = self
            .id_token
            .lock()
            .ok()
            .and_then(|token| token.clone())
            .ok_or_else(|| AppError::Auth("No active session".to_string()))?;

        let response = self
            .call(
                "update",
                serde_json::json!({
                    "idToken": id_token,
                    "email": new_email,
                    "returnSecureToken": true,
                }),
            )
            .await?;

        tracing::info!(uid = %response.local_id, "Changed account email");
        Ok(self.record_session(&response))
    }

    fn sign_out(&self) {
        if let Ok(mut token) = self.id_token.lock() {
            *token = None;
        }
        self.state_tx.send_replace(SessionState::SignedOut);
    }
}

/// Successful response body shared by the accounts endpoints.
#[derive(Debug, Deserialize)]
struct AccountResponse {
    #[serde(rename = "localId")]
    local_id: String,
    #[serde(default)]
    email: String,
    #[serde(rename = "idToken")]
    id_token: String,
    #[serde(rename = "displayName", default)]
    display_name: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    error: Option<ErrorBody>,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: String,
}
