// ABOUTME: Main library entry point for the Stride dashboard client
// ABOUTME: Typed API client, query cache, and rendering boundary for fitness data
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stride Fitness

#![deny(unsafe_code)]

//! # Stride Client
//!
//! Typed data layer for the Stride fitness dashboard. The crate talks to
//! the dashboard backend over HTTP, validates every payload at the trust
//! boundary, normalizes every failure into one canonical error record,
//! and exposes cached, deduplicated query results with a deterministic
//! loading/error/content rendering gate.
//!
//! ## Architecture
//!
//! - **models / params / validate / errors** (re-exported from
//!   `stride-core`): payload shapes, request parameters, the decode
//!   boundary, and the error taxonomy
//! - **client**: `ApiClient` and per-resource endpoint groups
//! - **query**: snapshot cache, in-flight deduplication, query handles,
//!   and the `QueryBoundary` rendering gate
//! - **auth**: injected credential accessor read by the client
//! - **config / logging**: environment configuration and tracing setup
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use stride_client::auth::StaticToken;
//! use stride_client::client::ApiClient;
//! use stride_client::config::ClientConfig;
//! use stride_client::params::ActivityListParams;
//!
//! # async fn example() -> Result<(), stride_client::errors::ClientError> {
//! let config = ClientConfig::from_env();
//! let credentials = Arc::new(StaticToken::new("token"));
//! let client = ApiClient::new(&config, credentials)?;
//!
//! let page = client.list_activities(&ActivityListParams::default()).await?;
//! println!("{} activities", page.activities.len());
//! # Ok(())
//! # }
//! ```

/// Client-side credential store and the token accessor trait
pub mod auth;

/// HTTP client and per-resource endpoint groups
pub mod client;

/// Environment-driven client configuration
pub mod config;

/// Error taxonomy and normalized error record (re-exported from core)
pub mod errors;

/// Structured logging configuration
pub mod logging;

/// Payload models (re-exported from core)
pub mod models;

/// Request parameter types (re-exported from core)
pub mod params;

/// Query cache, deduplication, handles, and the rendering boundary
pub mod query;

/// Decode-at-the-edge validation (re-exported from core)
pub mod validate;
