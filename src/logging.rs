// ABOUTME: Logging configuration and structured logging setup
// ABOUTME: Configures log level and output format for the client and CLI
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stride Fitness

//! Structured logging built on `tracing`. Errors surfaced to users go
//! through the error handler; everything diagnostic lands here.

use std::env;
use std::io;

use thiserror::Error;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Log output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// Full format for development
    Pretty,
    /// Compact format for space-constrained environments
    Compact,
    /// JSON format for production logging
    Json,
}

impl LogFormat {
    fn from_env() -> Self {
        match env::var("STRIDE_LOG_FORMAT").as_deref() {
            Ok("json") => Self::Json,
            Ok("compact") => Self::Compact,
            _ => Self::Pretty,
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Log level directive (trace, debug, info, warn, error, or any
    /// `EnvFilter` expression)
    pub level: String,
    /// Output format
    pub format: LogFormat,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: env::var("RUST_LOG").unwrap_or_else(|_| "info".to_owned()),
            format: LogFormat::from_env(),
        }
    }
}

/// Failure to install the global tracing subscriber
#[derive(Debug, Error)]
#[error("logging initialization failed: {0}")]
pub struct LoggingInitError(#[from] tracing_subscriber::util::TryInitError);

/// Install the global tracing subscriber.
///
/// Safe to call once per process; later calls fail because a subscriber
/// is already installed, which callers may ignore in tests.
///
/// # Errors
///
/// Returns [`LoggingInitError`] when a global subscriber is already
/// installed.
pub fn init(config: &LoggingConfig) -> Result<(), LoggingInitError> {
    let filter =
        EnvFilter::try_new(&config.level).unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(filter);

    match config.format {
        LogFormat::Json => {
            let layer = fmt::layer()
                .with_target(true)
                .with_writer(io::stdout)
                .json();
            registry.with(layer).try_init()?;
        }
        LogFormat::Compact => {
            let layer = fmt::layer()
                .compact()
                .with_target(false)
                .with_writer(io::stdout);
            registry.with(layer).try_init()?;
        }
        LogFormat::Pretty => {
            let layer = fmt::layer().with_target(true).with_writer(io::stdout);
            registry.with(layer).try_init()?;
        }
    }

    Ok(())
}
