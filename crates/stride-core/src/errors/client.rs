// ABOUTME: Error taxonomy for backend requests
// ABOUTME: Distinguishes transport, HTTP, validation, and auth failures
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stride Fitness

use serde_json::Value;
use thiserror::Error;

use super::{ApiError, ValidationError, FALLBACK_ERROR_MESSAGE};

/// Result alias for backend request operations
pub type ClientResult<T> = Result<T, ClientError>;

/// Everything that can go wrong between issuing a request and handing a
/// validated payload to the caller.
///
/// The variants are deliberately coarse: downstream code only needs to
/// distinguish "the request never completed" ([`Transport`]) from "the
/// server answered with a failure" ([`Http`]) from "the server answered
/// success but the body is unusable" ([`Validation`]). Everything
/// user-visible goes through [`ApiError`] via [`ClientError::to_api_error`].
///
/// [`Transport`]: ClientError::Transport
/// [`Http`]: ClientError::Http
/// [`Validation`]: ClientError::Validation
#[derive(Debug, Error)]
pub enum ClientError {
    /// The request never reached or never returned from the server
    /// (connection failure, timeout)
    #[error("transport failure: {0}")]
    Transport(#[from] reqwest::Error),

    /// The server answered with a non-2xx status; the decoded error
    /// envelope is kept when the body was JSON
    #[error("backend returned HTTP {status}")]
    Http {
        /// HTTP status code of the response
        status: u16,
        /// Decoded error envelope, when the body was JSON
        envelope: Option<Value>,
    },

    /// The server answered success but the body failed decoding or a
    /// structural invariant
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// No valid bearer token was available before dispatch
    #[error("no valid authentication token available")]
    Auth,

    /// The client itself was misconfigured (bad base URL, etc.)
    #[error("client configuration error: {0}")]
    Config(String),
}

impl ClientError {
    /// Normalize into the canonical [`ApiError`] record.
    ///
    /// - Transport failures derive their message from the underlying
    ///   failure and carry the `NETWORK_ERROR` code.
    /// - HTTP failures take message/code/details from the response
    ///   envelope via [`ApiError::normalize`]; the status always comes
    ///   from the HTTP status line, overriding anything in the envelope.
    /// - Validation failures are reported as malformed responses, a kind
    ///   distinct from transport failures.
    #[must_use]
    pub fn to_api_error(&self) -> ApiError {
        match self {
            Self::Transport(source) => {
                ApiError::new(source.to_string()).with_code("NETWORK_ERROR")
            }
            Self::Http { status, envelope } => {
                let base = envelope.as_ref().map_or_else(
                    || ApiError::new(FALLBACK_ERROR_MESSAGE),
                    ApiError::normalize,
                );
                ApiError {
                    status: Some(*status),
                    ..base
                }
            }
            Self::Validation(source) => {
                ApiError::new(source.to_string()).with_code("INVALID_RESPONSE")
            }
            Self::Auth => ApiError::new("No valid authentication token available")
                .with_code("AUTH_REQUIRED"),
            Self::Config(message) => {
                ApiError::new(message.clone()).with_code("CONFIG_ERROR")
            }
        }
    }

    /// True when the failure is worth retrying at a policy layer
    /// (transport failures and 5xx responses)
    #[must_use]
    pub const fn is_transient(&self) -> bool {
        match self {
            Self::Transport(_) => true,
            Self::Http { status, .. } => *status >= 500,
            Self::Validation(_) | Self::Auth | Self::Config(_) => false,
        }
    }
}

impl From<ClientError> for ApiError {
    fn from(error: ClientError) -> Self {
        error.to_api_error()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn http_error_takes_envelope_fields_but_status_from_response() {
        let error = ClientError::Http {
            status: 404,
            envelope: Some(json!({
                "detail": "activity not found",
                "status": 500,
                "code": "NOT_FOUND",
            })),
        };
        let api = error.to_api_error();
        assert_eq!(api.message, "activity not found");
        assert_eq!(api.status, Some(404));
        assert_eq!(api.code.as_deref(), Some("NOT_FOUND"));
    }

    #[test]
    fn http_error_without_envelope_uses_fallback_message() {
        let error = ClientError::Http {
            status: 502,
            envelope: None,
        };
        let api = error.to_api_error();
        assert_eq!(api.message, FALLBACK_ERROR_MESSAGE);
        assert_eq!(api.status, Some(502));
    }

    #[test]
    fn validation_error_is_distinct_from_transport() {
        let error =
            ClientError::Validation(ValidationError::MalformedJson("boom".into()));
        let api = error.to_api_error();
        assert_eq!(api.code.as_deref(), Some("INVALID_RESPONSE"));
        assert!(api.status.is_none());
    }

    #[test]
    fn auth_error_does_not_mark_transient() {
        assert!(!ClientError::Auth.is_transient());
        assert!(ClientError::Http {
            status: 503,
            envelope: None
        }
        .is_transient());
    }
}
