// ABOUTME: Fitness trend and weekly summary models
// ABOUTME: Fitness scores, weekly TSS and volume series, FTP history, zone times
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stride Fitness

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

use crate::validate::Validate;

use super::Sport;

/// Fitness score sample for one day
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FitnessScore {
    /// Day the scores apply to
    pub date: NaiveDate,
    /// Combined fitness score
    pub overall: f64,
    /// Running-only fitness score
    pub running: f64,
    /// Cycling-only fitness score
    pub cycling: f64,
}

/// Total training stress for one week
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WeeklyTss {
    /// First day of the week
    pub week_start: NaiveDate,
    /// Summed training stress score
    pub total_tss: f64,
}

/// Distance and time volume for one sport in one week
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WeeklyActivityData {
    /// First day of the week
    pub week_start: NaiveDate,
    /// Distance in meters
    pub distance: f64,
    /// Moving time in seconds
    pub time: f64,
}

/// Functional threshold power estimate at one point in time
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FtpData {
    /// Day of the estimate
    pub date: NaiveDate,
    /// Estimated FTP in watts
    pub ftp: f64,
}

/// Time spent in one training zone during a week
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ZoneTimeData {
    /// Zone position, starting at 0
    pub zone_index: u32,
    /// Total seconds across sports
    pub total_time: f64,
    /// Seconds while running, when the zone applies to running
    #[serde(skip_serializing_if = "Option::is_none")]
    pub running_time: Option<f64>,
    /// Seconds while cycling, when the zone applies to cycling
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cycling_time: Option<f64>,
    /// Upper bound of the zone
    pub max_value: f64,
}

/// Per-zone time breakdowns for one week
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WeeklyZoneData {
    /// First day of the week
    pub week_start: NaiveDate,
    /// Heart-rate zone times
    pub heart_rate_zones: Vec<ZoneTimeData>,
    /// Pace zone times
    pub pace_zones: Vec<ZoneTimeData>,
    /// Power zone times
    pub power_zones: Vec<ZoneTimeData>,
}

/// Response of the fitness trend operation
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FitnessResponse {
    /// Daily fitness scores, oldest first
    pub scores: Vec<FitnessScore>,
    /// Weekly training stress, oldest first
    pub weekly_tss: Vec<WeeklyTss>,
    /// Weekly running volume, oldest first
    pub weekly_running: Vec<WeeklyActivityData>,
    /// Weekly cycling volume, oldest first
    pub weekly_cycling: Vec<WeeklyActivityData>,
    /// Weekly zone-time breakdowns, oldest first
    pub weekly_zones: Vec<WeeklyZoneData>,
    /// FTP history, oldest first
    pub ftp: Vec<FtpData>,
}

impl Validate for FitnessResponse {}

/// Condensed activity row inside a weekly summary
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WeeklyActivitySummary {
    /// Activity identifier
    pub id: Uuid,
    /// Activity title
    pub title: String,
    /// Sport of the activity
    pub sport: Sport,
    /// Start of recording (Unix epoch seconds)
    pub start_time: i64,
    /// Distance in meters
    pub total_distance: f64,
    /// Moving time in seconds
    pub total_timer_time: f64,
    /// Average speed in m/s
    pub avg_speed: f64,
    /// Average heart rate in BPM, when recorded
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avg_heart_rate: Option<f64>,
    /// Average power in watts, when recorded
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avg_power: Option<f64>,
    /// Whether the activity was flagged as a race
    pub race: bool,
}

/// Rollup of one training week
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WeeklySummary {
    /// First day of the week
    pub week_start: NaiveDate,
    /// ISO week number
    pub week_number: u32,
    /// Calendar year the week belongs to
    pub year: i32,
    /// Activities of the week, in recording order
    pub activities: Vec<WeeklyActivitySummary>,
    /// Number of activities
    pub total_activities: u64,
    /// Summed distance in meters
    pub total_distance: f64,
    /// Summed moving time in seconds
    pub total_time: f64,
    /// Summed training stress score
    pub total_tss: f64,
    /// Opaque per-sport breakdown, rendered as-is
    pub sports_breakdown: Value,
}

/// Response of the weekly summaries operation
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WeeksResponse {
    /// Weekly rollups, most recent first
    pub weeks: Vec<WeeklySummary>,
}

impl Validate for WeeksResponse {}
