// ABOUTME: User account and authentication payload models
// ABOUTME: User records, account patches, and the token envelope
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stride Fitness

use serde::{Deserialize, Serialize};

use crate::validate::Validate;

/// Map renderer the user picked for route views
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum MapKind {
    /// Leaflet renderer
    Leaflet,
    /// OpenLayers renderer
    Openlayers,
    /// Mapbox renderer
    Mapbox,
}

/// A registered dashboard user
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct User {
    /// User identifier
    pub id: String,
    /// First name from the identity provider
    pub first_name: String,
    /// Last name from the identity provider
    pub last_name: String,
    /// Email address
    pub email: String,
    /// Identifier at the external OAuth provider
    pub google_id: String,
    /// Avatar URL from the identity provider, when available
    #[serde(skip_serializing_if = "Option::is_none")]
    pub google_picture: Option<String>,
    /// Preferred map renderer
    pub map: MapKind,
    /// Account creation timestamp (RFC 3339)
    pub created_at: String,
    /// Last account update timestamp (RFC 3339)
    pub updated_at: String,
}

impl Validate for User {}

/// Registration payload sent after the external OAuth exchange
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UserCreate {
    /// First name from the identity provider
    pub first_name: String,
    /// Last name from the identity provider
    pub last_name: String,
    /// Email address
    pub email: String,
    /// Identifier at the external OAuth provider
    pub google_id: String,
    /// Avatar URL from the identity provider, when available
    #[serde(skip_serializing_if = "Option::is_none")]
    pub google_picture: Option<String>,
}

/// Patch body for account settings
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct UserUpdate {
    /// New preferred map renderer, when changing it
    #[serde(skip_serializing_if = "Option::is_none")]
    pub map: Option<MapKind>,
}

/// Bearer token issued by the backend after authentication
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Token {
    /// The bearer token itself
    pub access_token: String,
    /// Token type, always `bearer`
    pub token_type: String,
    /// Lifetime in seconds from issuance
    pub expires_in: i64,
}

/// Response of the authentication operation
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GoogleAuthResponse {
    /// The authenticated (possibly just-created) user
    pub user: User,
    /// Fresh bearer token for subsequent requests
    pub token: Token,
}

impl Validate for GoogleAuthResponse {}
