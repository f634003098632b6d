// ABOUTME: Environment-driven configuration for the dashboard client
// ABOUTME: Backend origin and HTTP timeout settings with sensible defaults
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stride Fitness

use std::env;

/// Default backend origin used when no environment override is present
pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";

/// Default request timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Default connection timeout in seconds
pub const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 5;

/// Client configuration, sourced from build-time environment variables.
///
/// Recognized variables:
/// - `STRIDE_API_BASE_URL` — backend origin all request paths are joined to
/// - `STRIDE_HTTP_TIMEOUT_SECS` — per-request timeout
/// - `STRIDE_HTTP_CONNECT_TIMEOUT_SECS` — connection establishment timeout
///
/// Unset or unparsable values fall back to the defaults above.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Backend origin, e.g. `https://api.stride.example`
    pub base_url: String,
    /// Per-request timeout in seconds
    pub timeout_secs: u64,
    /// Connection establishment timeout in seconds
    pub connect_timeout_secs: u64,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_owned(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            connect_timeout_secs: DEFAULT_CONNECT_TIMEOUT_SECS,
        }
    }
}

impl ClientConfig {
    /// Load configuration from the environment, falling back to defaults
    /// for anything unset or unparsable
    #[must_use]
    pub fn from_env() -> Self {
        Self {
            base_url: env::var("STRIDE_API_BASE_URL")
                .unwrap_or_else(|_| DEFAULT_BASE_URL.to_owned()),
            timeout_secs: env_u64("STRIDE_HTTP_TIMEOUT_SECS", DEFAULT_TIMEOUT_SECS),
            connect_timeout_secs: env_u64(
                "STRIDE_HTTP_CONNECT_TIMEOUT_SECS",
                DEFAULT_CONNECT_TIMEOUT_SECS,
            ),
        }
    }

    /// Override the backend origin
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }
}

/// Parse an environment variable as u64, falling back on absence or parse
/// failure
fn env_u64(key: &str, default: u64) -> u64 {
    env::var(key)
        .ok()
        .and_then(|raw| raw.parse().ok())
        .unwrap_or(default)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_applied() {
        let config = ClientConfig::default();
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.timeout_secs, DEFAULT_TIMEOUT_SECS);
    }

    #[test]
    fn unparsable_env_values_fall_back() {
        assert_eq!(env_u64("STRIDE_TEST_UNSET_VAR", 7), 7);
    }
}
