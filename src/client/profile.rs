// ABOUTME: Profile endpoint
// ABOUTME: Aggregate per-sport totals, yearly buckets, and training zones
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stride Fitness

use crate::errors::ClientResult;
use crate::models::Profile;

use super::ApiClient;

impl ApiClient {
    /// Fetch the athlete's aggregate profile.
    ///
    /// # Errors
    ///
    /// Returns a [`crate::errors::ClientError`] on transport failure,
    /// non-2xx response, or a malformed body.
    pub async fn fetch_profile(&self) -> ClientResult<Profile> {
        self.get_decoded("/profile/", &[]).await
    }
}
