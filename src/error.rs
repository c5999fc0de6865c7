// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Application error types shared by every screen and service.

/// Application error type.
///
/// Screens surface `Auth` messages verbatim in their error banners; read and
/// write failures against the remote store degrade to logged events and inert
/// view state rather than propagating to the user.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Message from the auth provider, displayed as-is (e.g. `EMAIL_EXISTS`).
    #[error("Authentication error: {0}")]
    Auth(String),

    #[error("Invalid request: {0}")]
    BadRequest(String),

    #[error("Resource not found: {0}")]
    NotFound(String),

    /// Remote document store failure.
    #[error("Database error: {0}")]
    Database(String),

    /// Device-local storage failure (friend list, session cache).
    #[error("Local storage error: {0}")]
    LocalStorage(String),

    #[error("Internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl AppError {
    /// True for failures the user can recover from by re-submitting a form.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, AppError::Auth(_) | AppError::BadRequest(_))
    }
}

/// Result type alias used throughout the crate.
pub type Result<T> = std::result::Result<T, AppError>;
