// ABOUTME: Aggregate statistics models keyed by sport and time bucket
// ABOUTME: Profile rollups, yearly and weekly buckets, and training zones
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stride Fitness

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::ValidationError;
use crate::validate::{require_min_len, Validate};

use super::Sport;

/// Per-sport totals within one time bucket
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Statistic {
    /// Sport the totals are for
    pub sport: Sport,
    /// Number of activities in the bucket
    pub n_activities: u64,
    /// Total distance in the bucket in meters
    pub total_distance: f64,
}

impl Validate for Statistic {}

/// Totals for one calendar year.
///
/// The backend always reports at least two sports per bucket, so a
/// one-entry bucket is a malformed response.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct YearsStatistics {
    /// Calendar year
    pub year: i32,
    /// Per-sport totals, in the backend's reporting order
    pub statistics: Vec<Statistic>,
}

impl Validate for YearsStatistics {
    fn validate(&self) -> Result<(), ValidationError> {
        require_min_len("statistics", &self.statistics, 2)
    }
}

/// Totals for one ISO week; same minimum-two-sports rule as
/// [`YearsStatistics`]
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WeeksStatistics {
    /// First day of the week
    pub start: NaiveDate,
    /// ISO week number
    pub week: u32,
    /// Per-sport totals, in the backend's reporting order
    pub statistics: Vec<Statistic>,
}

impl Validate for WeeksStatistics {
    fn validate(&self) -> Result<(), ValidationError> {
        require_min_len("statistics", &self.statistics, 2)
    }
}

/// Kind of training zone a boundary belongs to
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum ZoneKind {
    /// Heart-rate zone in BPM
    HeartRate,
    /// Pace zone in seconds per kilometer
    Pace,
    /// Power zone in watts
    Power,
}

/// One configured training-zone boundary
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Zone {
    /// Zone identifier
    pub id: Uuid,
    /// Owning user
    pub user_id: String,
    /// Zone position, starting at 0
    pub index: u32,
    /// Kind of measurement the zone partitions
    #[serde(rename = "type")]
    pub kind: ZoneKind,
    /// Upper bound of the zone
    pub max_value: f64,
}

impl Validate for Zone {}

/// The athlete's aggregate profile across all recorded activities
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Profile {
    /// Total number of activities
    pub n_activities: u64,
    /// Number of running activities
    pub run_n_activities: u64,
    /// Total running distance in meters
    pub run_total_distance: f64,
    /// Number of cycling activities
    pub cycling_n_activities: u64,
    /// Total cycling distance in meters
    pub cycling_total_distance: f64,
    /// Yearly buckets, most recent first
    pub years: Vec<YearsStatistics>,
    /// Configured training zones
    pub zones: Vec<Zone>,
}

impl Validate for Profile {
    fn validate(&self) -> Result<(), ValidationError> {
        self.years.validate()
    }
}
