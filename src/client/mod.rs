// ABOUTME: HTTP client for the dashboard backend
// ABOUTME: URL construction, bearer auth, timeouts, and response decoding
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stride Fitness

//! One [`ApiClient`] per backend origin. The client owns transport
//! concerns only: building URLs, attaching the bearer credential,
//! enforcing timeouts, and splitting failures into the taxonomy of
//! [`ClientError`]. Payload semantics live in the endpoint groups
//! ([`activities`], [`fitness`], [`profile`], [`users`]) and in the
//! decode boundary they all pass through.

use std::sync::Arc;
use std::time::Duration;

use reqwest::{Client, ClientBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use url::Url;

use crate::auth::TokenProvider;
use crate::config::ClientConfig;
use crate::errors::{ClientError, ClientResult, ValidationError};
use crate::validate::{decode, Validate};

/// Activity endpoints: listing, detail, upload, edit
pub mod activities;
/// Aggregate endpoints: fitness trends, weeks, rankings, heatmap
pub mod fitness;
/// Profile endpoint
pub mod profile;
/// User account and authentication endpoints
pub mod users;

pub use activities::{ActivityUpload, ProgressCallback, UploadProgress};

/// HTTP client bound to one backend origin.
///
/// Credentials are read through the injected [`TokenProvider`] on every
/// request; the client itself never stores or refreshes tokens.
#[derive(Clone)]
pub struct ApiClient {
    http: Client,
    base_url: String,
    credentials: Arc<dyn TokenProvider>,
}

impl ApiClient {
    /// Build a client from configuration and a credential accessor.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Config`] when the configured base URL does
    /// not parse as an origin.
    pub fn new(
        config: &ClientConfig,
        credentials: Arc<dyn TokenProvider>,
    ) -> ClientResult<Self> {
        // Parse once up front so a bad origin fails at construction, not
        // on the first request.
        Url::parse(&config.base_url)
            .map_err(|e| ClientError::Config(format!("invalid base URL: {e}")))?;

        let http = ClientBuilder::new()
            .timeout(Duration::from_secs(config.timeout_secs))
            .connect_timeout(Duration::from_secs(config.connect_timeout_secs))
            .build()
            .unwrap_or_else(|_| Client::new());

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_owned(),
            credentials,
        })
    }

    /// Build the absolute URL for a backend path plus query pairs
    pub(crate) fn endpoint(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> ClientResult<Url> {
        let mut url = Url::parse(&format!("{}{path}", self.base_url))
            .map_err(|e| ClientError::Config(format!("invalid request URL: {e}")))?;
        if !query.is_empty() {
            let mut pairs = url.query_pairs_mut();
            for (key, value) in query {
                pairs.append_pair(key, value);
            }
        }
        Ok(url)
    }

    /// Bearer token for an authenticated request, or an auth failure
    /// before any I/O happens
    pub(crate) fn bearer(&self) -> ClientResult<String> {
        self.credentials.access_token().ok_or(ClientError::Auth)
    }

    pub(crate) async fn get_value(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> ClientResult<Value> {
        let url = self.endpoint(path, query)?;
        let token = self.bearer()?;
        tracing::debug!(%url, "GET");
        let response = self.http.get(url).bearer_auth(token).send().await?;
        Self::read_json(response).await
    }

    /// POST without a credential; only the authentication exchange uses
    /// this
    pub(crate) async fn post_value_public<B: Serialize + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<Value> {
        let url = self.endpoint(path, &[])?;
        tracing::debug!(%url, "POST (public)");
        let response = self.http.post(url).json(body).send().await?;
        Self::read_json(response).await
    }

    pub(crate) async fn patch_value<B: Serialize + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<Value> {
        let url = self.endpoint(path, &[])?;
        let token = self.bearer()?;
        tracing::debug!(%url, "PATCH");
        let response = self
            .http
            .patch(url)
            .bearer_auth(token)
            .json(body)
            .send()
            .await?;
        Self::read_json(response).await
    }

    /// Typed GET passing the body through the decode boundary
    pub(crate) async fn get_decoded<T>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> ClientResult<T>
    where
        T: DeserializeOwned + Validate,
    {
        let value = self.get_value(path, query).await?;
        decode(value).map_err(Into::into)
    }

    /// Split a response into the error taxonomy: non-2xx keeps the JSON
    /// envelope when there is one; a 2xx body that is not JSON is a
    /// malformed response, not a transport failure.
    pub(crate) async fn read_json(response: Response) -> ClientResult<Value> {
        let status = response.status();
        if !status.is_success() {
            let envelope = response.json::<Value>().await.ok();
            return Err(ClientError::Http {
                status: status.as_u16(),
                envelope,
            });
        }

        let body = response.bytes().await?;
        serde_json::from_slice(&body)
            .map_err(|e| ValidationError::MalformedJson(e.to_string()).into())
    }
}

impl std::fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiClient")
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::StaticToken;

    fn test_client() -> ApiClient {
        let config = ClientConfig::default().with_base_url("http://backend.test");
        ApiClient::new(&config, Arc::new(StaticToken::new("t"))).unwrap()
    }

    #[test]
    fn endpoint_joins_path_and_query() {
        let client = test_client();
        let url = client
            .endpoint("/activities/", &[("page", "2".to_owned())])
            .unwrap();
        assert_eq!(url.as_str(), "http://backend.test/activities/?page=2");
    }

    #[test]
    fn endpoint_without_query_has_no_question_mark() {
        let client = test_client();
        let url = client.endpoint("/profile/", &[]).unwrap();
        assert_eq!(url.as_str(), "http://backend.test/profile/");
    }

    #[test]
    fn bad_base_url_fails_at_construction() {
        let config = ClientConfig::default().with_base_url("not a url");
        let result = ApiClient::new(&config, Arc::new(StaticToken::new("t")));
        assert!(matches!(result, Err(ClientError::Config(_))));
    }
}
