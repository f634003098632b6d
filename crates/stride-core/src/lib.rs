// ABOUTME: Core types for the Stride fitness dashboard client
// ABOUTME: Foundation crate with payload models, validation, params, and error types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stride Fitness

#![deny(unsafe_code)]

//! # Stride Core
//!
//! Foundation crate providing the shared types for the Stride dashboard
//! client. This crate is designed to change infrequently, enabling
//! incremental compilation benefits in the workspace.
//!
//! ## Modules
//!
//! - **errors**: Normalized `ApiError`, the error taxonomy, and the handling step
//! - **models**: Payload models decoded from backend responses
//! - **params**: Request parameter types (pagination, ordering, filters)
//! - **validate**: Decode-at-the-edge validation of untrusted JSON

/// Normalized error record, error taxonomy, and error handling step
pub mod errors;

/// Payload models (Activity, Profile, statistics and fitness rollups, users)
pub mod models;

/// Request parameter types shared by all endpoint groups
pub mod params;

/// Runtime validation of decoded payloads
pub mod validate;
