// ABOUTME: Client-side credential store read by the API client
// ABOUTME: Holds token, expiry, and user; validity checks only, no lifecycle
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stride Fitness

//! The client never manages token lifecycle — issuance and refresh belong
//! to the external OAuth provider. This module only stores what the
//! application hands it and answers "is there a currently valid token".
//! The API client reads credentials through the [`TokenProvider`] trait
//! so tests can inject a fixed token without touching shared state.

use std::sync::RwLock;

use chrono::{DateTime, Duration, Utc};

use crate::models::{Token, User};

/// Read-side accessor for the bearer credential.
///
/// Implementations return a token only while it is valid; `None` means
/// the caller must treat the request as unauthenticated.
pub trait TokenProvider: Send + Sync {
    /// Currently valid bearer token, if any
    fn access_token(&self) -> Option<String>;
}

/// Snapshot of the stored credential state
#[derive(Debug, Clone, Default)]
pub struct AuthState {
    /// Bearer token, when one was stored
    pub token: Option<String>,
    /// Expiry of the stored token
    pub token_expiry: Option<DateTime<Utc>>,
    /// The signed-in user, when known
    pub user: Option<User>,
}

impl AuthState {
    /// True when a token is present and not yet expired
    #[must_use]
    pub fn is_token_valid(&self) -> bool {
        match (&self.token, self.token_expiry) {
            (Some(_), Some(expiry)) => Utc::now() < expiry,
            _ => false,
        }
    }
}

/// Shared credential store the application writes and the client reads
#[derive(Debug, Default)]
pub struct CredentialStore {
    state: RwLock<AuthState>,
}

impl CredentialStore {
    /// Empty store with no credential
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a fresh credential after authentication; expiry is computed
    /// from the token's declared lifetime
    pub fn set_auth(&self, user: User, token: &Token) {
        let expiry = Utc::now() + Duration::seconds(token.expires_in);
        if let Ok(mut state) = self.state.write() {
            state.token = Some(token.access_token.clone());
            state.token_expiry = Some(expiry);
            state.user = Some(user);
        }
    }

    /// Drop the stored credential and user
    pub fn logout(&self) {
        if let Ok(mut state) = self.state.write() {
            *state = AuthState::default();
        }
    }

    /// Copy of the current state
    #[must_use]
    pub fn snapshot(&self) -> AuthState {
        self.state
            .read()
            .map(|state| state.clone())
            .unwrap_or_default()
    }
}

impl TokenProvider for CredentialStore {
    fn access_token(&self) -> Option<String> {
        self.state.read().ok().and_then(|state| {
            if state.is_token_valid() {
                state.token.clone()
            } else {
                None
            }
        })
    }
}

/// Fixed token that never expires; used by the CLI and in tests
#[derive(Debug, Clone)]
pub struct StaticToken(String);

impl StaticToken {
    /// Wrap a raw bearer token
    #[must_use]
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }
}

impl TokenProvider for StaticToken {
    fn access_token(&self) -> Option<String> {
        Some(self.0.clone())
    }
}
