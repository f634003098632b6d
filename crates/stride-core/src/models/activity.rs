// ABOUTME: Activity payload models including laps, tracepoints, and best efforts
// ABOUTME: Shapes mirror the backend response bodies field for field
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stride Fitness

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::ValidationError;
use crate::validate::{require_min_len, Validate};

use super::Sport;

/// A single recorded workout with its full trace.
///
/// `laps`, `tracepoints`, `performances`, and `performance_power` are
/// chronological sequences; their order is significant and is preserved
/// exactly through encode/decode.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Activity {
    /// Unique identifier assigned by the backend
    pub id: Uuid,
    /// Storage reference of the raw device file
    pub fit: String,
    /// Human-readable title
    pub title: String,
    /// Free-form description
    pub description: String,
    /// Sport the activity was recorded under
    pub sport: Sport,
    /// Recording device name
    pub device: String,
    /// Whether the activity was flagged as a race
    pub race: bool,
    /// Start of recording (Unix epoch seconds)
    pub start_time: i64,
    /// Moving time in seconds
    pub total_timer_time: f64,
    /// Wall-clock time in seconds
    pub total_elapsed_time: f64,
    /// Distance covered in meters
    pub total_distance: f64,
    /// Elevation gained in meters
    pub total_ascent: f64,
    /// Average speed in m/s
    pub avg_speed: f64,
    /// Average heart rate in BPM
    pub avg_heart_rate: f64,
    /// Maximum heart rate in BPM
    pub max_heart_rate: f64,
    /// Average power in watts
    pub avg_power: f64,
    /// Maximum power in watts
    pub max_power: f64,
    /// Normalized power in watts
    pub np_power: f64,
    /// Energy expenditure in kilocalories
    pub total_calories: f64,
    /// Device-reported training effect score
    pub total_training_effect: f64,
    /// Training stress score computed by the backend
    pub training_stress_score: f64,
    /// Intensity factor computed by the backend
    pub intensity_factor: f64,
    /// Latitude of the route's bounding-box center
    pub lat: f64,
    /// Longitude of the route's bounding-box center
    pub lon: f64,
    /// Latitude span of the route's bounding box
    pub delta_lat: f64,
    /// Longitude span of the route's bounding box
    pub delta_lon: f64,
    /// Reverse-geocoded city, when available
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    /// Reverse-geocoded country, when available
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    /// Per-lap splits, in lap order
    pub laps: Vec<Lap>,
    /// Raw samples, in recording order; at least two per activity
    pub tracepoints: Vec<TracePoint>,
    /// Best efforts over standard distances, in ranking order
    pub performances: Vec<Performance>,
    /// Best power efforts over standard durations, in ranking order
    pub performance_power: Vec<PowerPerformance>,
}

impl Validate for Activity {
    fn validate(&self) -> Result<(), ValidationError> {
        require_min_len("tracepoints", &self.tracepoints, 2)
    }
}

/// One segment of an activity with its own totals and extremes
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Lap {
    /// Position of the lap within the activity, starting at 0
    pub index: u32,
    /// Lap start (Unix epoch seconds)
    pub start_time: i64,
    /// Wall-clock time of the lap in seconds
    pub total_elapsed_time: f64,
    /// Moving time of the lap in seconds
    pub total_timer_time: f64,
    /// Distance covered in the lap in meters
    pub total_distance: f64,
    /// Maximum heart rate during the lap in BPM
    pub max_heart_rate: f64,
    /// Average heart rate during the lap in BPM
    pub avg_heart_rate: f64,
    /// Maximum speed during the lap in m/s
    pub max_speed: f64,
}

impl Validate for Lap {}

/// One timestamped sample of the raw trace
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TracePoint {
    /// Latitude in degrees
    pub lat: f64,
    /// Longitude in degrees
    pub lng: f64,
    /// Sample timestamp
    pub timestamp: DateTime<Utc>,
    /// Cumulative distance at this sample in meters
    pub distance: f64,
    /// Heart rate at this sample in BPM
    pub heart_rate: f64,
    /// Speed at this sample in m/s
    pub speed: f64,
    /// Power at this sample in watts
    pub power: f64,
    /// Altitude at this sample in meters
    pub altitude: f64,
}

impl Validate for TracePoint {}

/// A best-effort result over a standard distance
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Performance {
    /// Distance of the effort in meters
    pub distance: f64,
    /// Elapsed time as an ISO-8601 duration string
    pub time: String,
    /// Activity the effort was extracted from
    pub activity_id: Uuid,
}

impl Validate for Performance {}

/// A best power output held over a standard duration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PowerPerformance {
    /// Duration as an ISO-8601 duration string
    pub time: String,
    /// Average power held over the duration in watts
    pub power: f64,
    /// Activity the effort was extracted from
    pub activity_id: Uuid,
}

impl Validate for PowerPerformance {}

/// Patch body for editing an activity's mutable fields
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ActivityUpdate {
    /// New title, when changing it
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// New race flag, when changing it
    #[serde(skip_serializing_if = "Option::is_none")]
    pub race: Option<bool>,
}

/// Pagination metadata attached to list responses
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Pagination {
    /// Current page, 1-based
    pub page: u32,
    /// Page size the backend applied
    pub per_page: u32,
    /// Total number of matching activities
    pub total: u64,
}

/// Response of the activity listing operation
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ActivitiesResponse {
    /// One page of activities, most recent first unless ordered otherwise
    pub activities: Vec<Activity>,
    /// Pagination metadata for the page
    pub pagination: Pagination,
}

impl Validate for ActivitiesResponse {
    fn validate(&self) -> Result<(), ValidationError> {
        self.activities.validate()
    }
}
