// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! In-memory auth provider for tests and local development.
//!
//! Mirrors the Firebase error codes so screens behave identically against
//! either provider. Passwords are kept in plain text; this never leaves the
//! process.

use crate::auth::AuthProvider;
use crate::error::{AppError, Result};
use crate::session::{Identity, SessionState};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Mutex;
use tokio::sync::watch;

struct Account {
    uid: String,
    password: String,
}

/// In-memory auth provider.
pub struct MemoryAuth {
    accounts: Mutex<HashMap<String, Account>>, // email -> account
    state_tx: watch::Sender<SessionState>,
}

impl MemoryAuth {
    pub fn new() -> Self {
        let (state_tx, _) = watch::channel(SessionState::SignedOut);
        Self {
            accounts: Mutex::new(HashMap::new()),
            state_tx,
        }
    }

    fn current_identity(&self) -> Option<Identity> {
        match &*self.state_tx.borrow() {
            SessionState::SignedIn(identity) => Some(identity.clone()),
            _ => None,
        }
    }

    fn lock_accounts(&self) -> Result<std::sync::MutexGuard<'_, HashMap<String, Account>>> {
        self.accounts
            .lock()
            .map_err(|_| AppError::Auth("Provider state poisoned".to_string()))
    }
}

impl Default for MemoryAuth {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl AuthProvider for MemoryAuth {
    fn subscribe(&self) -> watch::Receiver<SessionState> {
        self.state_tx.subscribe()
    }

    async fn sign_up(&self, email: &str, password: &str) -> Result<Identity> {
        let uid = {
            let mut accounts = self.lock_accounts()?;
            if accounts.contains_key(email) {
                return Err(AppError::Auth("EMAIL_EXISTS".to_string()));
            }
            let uid = uuid::Uuid::new_v4().simple().to_string();
            accounts.insert(
                email.to_string(),
                Account {
                    uid: uid.clone(),
                    password: password.to_string(),
                },
            );
            uid
        };

        let identity = Identity {
            uid,
            email: email.to_string(),
            display_name: None,
        };
        self.state_tx
            .send_replace(SessionState::SignedIn(identity.clone()));
        Ok(identity)
    }

    async fn sign_in(&self, email: &str, password: &str) -> Result<Identity> {
        let uid = {
            let accounts = self.lock_accounts()?;
            match accounts.get(email) {
                Some(account) if account.password == password => account.uid.clone(),
                _ => return Err(AppError::Auth("INVALID_LOGIN_CREDENTIALS".to_string())),
            }
        };

        let identity = Identity {
            uid,
            email: email.to_string(),
            display_name: None,
        };
        self.state_tx
            .send_replace(SessionState::SignedIn(identity.clone()));
        Ok(identity)
    }

    async fn update_email(&self, new_email: &str) -> Result<Identity> {
        let mut identity = self
            .current_identity()
            .ok_or_else(|| AppError::Auth("No active session".to_string()))?;

        {
            let mut accounts = self.lock_accounts()?;
            if accounts
                .get(new_email)
                .is_some_and(|existing| existing.uid != identity.uid)
            {
                return Err(AppError::Auth("EMAIL_EXISTS".to_string()));
            }
            let account = accounts
                .remove(&identity.email)
                .ok_or_else(|| AppError::Auth("No active session".to_string()))?;
            accounts.insert(new_email.to_string(), account);
        }

        identity.email = new_email.to_string();
        self.state_tx
            .send_replace(SessionState::SignedIn(identity.clone()));
        Ok(identity)
    }

    fn sign_out(&self) {
        self.state_tx.send_replace(SessionState::SignedOut);
    }
}
