// ABOUTME: Normalized error record and the error normalization step
// ABOUTME: ApiError, ValidationError, and the configurable handling step
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stride Fitness

//! # Unified Error Handling
//!
//! Every failure in the client funnels into one canonical [`ApiError`]
//! record before anything user-visible happens. The normalization step is
//! pure and total: it accepts any JSON value or any `std::error::Error`
//! and always produces an `ApiError` with a non-empty message.

use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use thiserror::Error;

/// HTTP error types with transport-level conversions
#[cfg(feature = "http-errors")]
pub mod client;

#[cfg(feature = "http-errors")]
pub use client::{ClientError, ClientResult};

/// Message used when the failure carries no usable information at all
pub const UNKNOWN_ERROR_MESSAGE: &str = "An unknown error occurred";

/// Message used when a structured failure carries no message of its own
pub const FALLBACK_ERROR_MESSAGE: &str = "An error occurred";

/// Canonical error record produced by normalization.
///
/// `message` is always present and non-empty; the remaining fields are
/// copied from the failure's origin only when they are correctly typed.
/// `details` is an opaque diagnostics payload kept for logs, never shown
/// to end users.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ApiError {
    /// Human-readable description of the failure
    pub message: String,
    /// HTTP status code, when the failure came from a response
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<u16>,
    /// Machine-readable error code, when the origin supplied one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    /// Opaque diagnostics payload, retained verbatim
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Value>,
}

impl ApiError {
    /// Create an error carrying only a message
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            status: None,
            code: None,
            details: None,
        }
    }

    /// Attach an HTTP status code
    #[must_use]
    pub const fn with_status(mut self, status: u16) -> Self {
        self.status = Some(status);
        self
    }

    /// Attach a machine-readable code
    #[must_use]
    pub fn with_code(mut self, code: impl Into<String>) -> Self {
        self.code = Some(code.into());
        self
    }

    /// Normalize an arbitrary JSON value into an `ApiError`.
    ///
    /// Dispatch, in priority order:
    /// 1. a string becomes the message verbatim;
    /// 2. an object contributes `message` (string) or else `detail`
    ///    (string) or else [`FALLBACK_ERROR_MESSAGE`], plus `status` only
    ///    if numeric, `code` only if a string, and `details` verbatim;
    /// 3. anything else (null, booleans, numbers, the empty string)
    ///    becomes [`UNKNOWN_ERROR_MESSAGE`].
    ///
    /// Arrays take the object path and therefore fall back to
    /// [`FALLBACK_ERROR_MESSAGE`] with no fields copied.
    #[must_use]
    pub fn normalize(value: &Value) -> Self {
        match value {
            Value::String(s) if !s.is_empty() => Self::new(s.clone()),
            Value::Object(map) => {
                let message = map
                    .get("message")
                    .and_then(Value::as_str)
                    .or_else(|| map.get("detail").and_then(Value::as_str))
                    .unwrap_or(FALLBACK_ERROR_MESSAGE);

                Self {
                    message: message.to_owned(),
                    status: map
                        .get("status")
                        .and_then(Value::as_u64)
                        .and_then(|s| u16::try_from(s).ok()),
                    code: map
                        .get("code")
                        .and_then(Value::as_str)
                        .map(str::to_owned),
                    details: map.get("details").cloned(),
                }
            }
            Value::Array(_) => Self::new(FALLBACK_ERROR_MESSAGE),
            _ => Self::new(UNKNOWN_ERROR_MESSAGE),
        }
    }

    /// Normalize a Rust error into an `ApiError`.
    ///
    /// The message is the error's display form; the error type and its
    /// source chain are retained under `details` for diagnostics.
    #[must_use]
    pub fn from_std_error<E: std::error::Error>(err: &E) -> Self {
        let message = err.to_string();
        let message = if message.is_empty() {
            UNKNOWN_ERROR_MESSAGE.to_owned()
        } else {
            message
        };

        let mut chain = Vec::new();
        let mut source = err.source();
        while let Some(cause) = source {
            chain.push(Value::String(cause.to_string()));
            source = cause.source();
        }

        Self {
            message,
            status: None,
            code: None,
            details: Some(json!({
                "name": short_type_name::<E>(),
                "chain": chain,
                "original": format!("{err:?}"),
            })),
        }
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)?;
        if let Some(status) = self.status {
            write!(f, " (status {status})")?;
        }
        if let Some(code) = &self.code {
            write!(f, " [{code}]")?;
        }
        Ok(())
    }
}

impl std::error::Error for ApiError {}

/// Last path segment of a type name, e.g. `stride_core::errors::ApiError`
/// becomes `ApiError`
fn short_type_name<T>() -> &'static str {
    let full = std::any::type_name::<T>();
    full.rsplit("::").next().unwrap_or(full)
}

/// A response arrived at the transport level but its body does not
/// satisfy the declared contract.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ValidationError {
    /// Body could not be parsed as JSON at all
    #[error("response body is not valid JSON: {0}")]
    MalformedJson(String),
    /// Body parsed but a field is missing or has the wrong type
    #[error("response shape mismatch: {0}")]
    Shape(String),
    /// Body parsed into the declared shape but violates a structural
    /// constraint (e.g. a minimum-length requirement)
    #[error("invariant violation on `{field}`: {message}")]
    Invariant {
        /// Payload field the constraint applies to
        field: String,
        /// What the constraint requires
        message: String,
    },
}

impl ValidationError {
    /// Shorthand for an invariant violation on a named field
    #[must_use]
    pub fn invariant(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Invariant {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// Callback invoked with each handled error
pub type ErrorCallback = Arc<dyn Fn(&ApiError) + Send + Sync>;

/// The side-effecting half of error handling.
///
/// [`ApiError::normalize`] is the pure transform; `ErrorHandler` layers
/// the configurable effects on top: structured logging (on by default)
/// and an optional notification callback.
#[derive(Clone)]
pub struct ErrorHandler {
    log_errors: bool,
    on_error: Option<ErrorCallback>,
}

impl ErrorHandler {
    /// Handler that logs and has no callback
    #[must_use]
    pub const fn new() -> Self {
        Self {
            log_errors: true,
            on_error: None,
        }
    }

    /// Handler that neither logs nor notifies
    #[must_use]
    pub const fn silent() -> Self {
        Self {
            log_errors: false,
            on_error: None,
        }
    }

    /// Enable or disable logging of handled errors
    #[must_use]
    pub const fn log_errors(mut self, enabled: bool) -> Self {
        self.log_errors = enabled;
        self
    }

    /// Register a callback invoked with every handled error
    #[must_use]
    pub fn on_error(mut self, callback: ErrorCallback) -> Self {
        self.on_error = Some(callback);
        self
    }

    /// Pure normalization of an arbitrary JSON value
    #[must_use]
    pub fn transform(&self, value: &Value) -> ApiError {
        ApiError::normalize(value)
    }

    /// Apply the configured side effects to an already-normalized error
    /// and hand it back
    #[must_use]
    pub fn handle(&self, error: ApiError) -> ApiError {
        if self.log_errors {
            tracing::error!(
                status = error.status,
                code = error.code.as_deref(),
                "api error: {}",
                error.message
            );
        }
        if let Some(callback) = &self.on_error {
            callback(&error);
        }
        error
    }
}

impl Default for ErrorHandler {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for ErrorHandler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ErrorHandler")
            .field("log_errors", &self.log_errors)
            .field("on_error", &self.on_error.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_string_becomes_message() {
        assert_eq!(ApiError::normalize(&json!("boom")), ApiError::new("boom"));
    }

    #[test]
    fn normalize_object_prefers_message_over_detail() {
        let error = ApiError::normalize(&json!({
            "message": "primary",
            "detail": "secondary",
        }));
        assert_eq!(error.message, "primary");
    }

    #[test]
    fn normalize_object_with_no_message_uses_fallback() {
        let error = ApiError::normalize(&json!({"status": 400, "code": "X"}));
        assert_eq!(error.message, FALLBACK_ERROR_MESSAGE);
        assert_eq!(error.status, Some(400));
        assert_eq!(error.code.as_deref(), Some("X"));
    }

    #[test]
    fn normalize_ignores_wrongly_typed_fields() {
        let error = ApiError::normalize(&json!({
            "message": "m",
            "status": "not a number",
            "code": 42,
        }));
        assert_eq!(error.status, None);
        assert_eq!(error.code, None);
    }

    #[test]
    fn normalize_null_and_scalars_are_unknown() {
        for value in [json!(null), json!(7), json!(true), json!("")] {
            assert_eq!(
                ApiError::normalize(&value).message,
                UNKNOWN_ERROR_MESSAGE,
                "value: {value}"
            );
        }
    }

    #[test]
    fn from_std_error_keeps_diagnostics() {
        let io = std::io::Error::new(std::io::ErrorKind::Other, "e");
        let error = ApiError::from_std_error(&io);
        assert_eq!(error.message, "e");
        let details = error.details.expect("details present");
        assert_eq!(details["name"], "Error");
        assert!(details["chain"].is_array());
    }

    #[test]
    fn handler_invokes_callback() {
        use std::sync::atomic::{AtomicUsize, Ordering};

        let hits = Arc::new(AtomicUsize::new(0));
        let seen = hits.clone();
        let handler = ErrorHandler::silent().on_error(Arc::new(move |_| {
            seen.fetch_add(1, Ordering::SeqCst);
        }));

        let _ = handler.handle(ApiError::new("x"));
        assert_eq!(hits.load(Ordering::SeqCst), 1);
    }
}
