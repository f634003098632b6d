// ABOUTME: Heatmap payload models
// ABOUTME: Route polylines grouped by sport for the heatmap view
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stride Fitness

use serde::{Deserialize, Serialize};

use crate::validate::Validate;

use super::Sport;

/// One activity's route reduced to a coordinate sequence
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct HeatmapPolyline {
    /// Sport the route belongs to, used for client-side filtering
    pub sport: Sport,
    /// `[lat, lng]` pairs in route order
    pub points: Vec<[f64; 2]>,
}

/// Response of the heatmap operation
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct HeatmapResponse {
    /// One polyline per mapped activity
    pub polylines: Vec<HeatmapPolyline>,
}

impl Validate for HeatmapResponse {}
