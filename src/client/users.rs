// ABOUTME: User account and authentication endpoints
// ABOUTME: Current-user reads, account patches, and the OAuth exchange
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stride Fitness

use crate::errors::ClientResult;
use crate::models::{GoogleAuthResponse, User, UserCreate, UserUpdate};
use crate::validate::decode;

use super::ApiClient;

impl ApiClient {
    /// Fetch the signed-in user's account record.
    ///
    /// # Errors
    ///
    /// Returns a [`crate::errors::ClientError`] on transport failure,
    /// non-2xx response, or a malformed body.
    pub async fn current_user(&self) -> ClientResult<User> {
        self.get_decoded("/users/me/", &[]).await
    }

    /// Patch the signed-in user's account settings.
    ///
    /// # Errors
    ///
    /// Returns a [`crate::errors::ClientError`] on transport failure,
    /// non-2xx response, or a malformed body.
    pub async fn update_user(&self, update: &UserUpdate) -> ClientResult<User> {
        let value = self.patch_value("/users/me/", update).await?;
        decode(value).map_err(Into::into)
    }

    /// Exchange an external OAuth identity for a backend session.
    ///
    /// This is the one unauthenticated operation; the caller stores the
    /// returned token in its credential store.
    ///
    /// # Errors
    ///
    /// Returns a [`crate::errors::ClientError`] on transport failure,
    /// non-2xx response, or a malformed body.
    pub async fn google_auth(
        &self,
        user_data: &UserCreate,
    ) -> ClientResult<GoogleAuthResponse> {
        let value = self.post_value_public("/auth/google/", user_data).await?;
        decode(value).map_err(Into::into)
    }
}
