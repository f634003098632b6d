// ABOUTME: Best-performance ranking and performance record models
// ABOUTME: Power profile curves served alongside the record endpoints
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stride Fitness

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::ValidationError;
use crate::validate::Validate;

use super::{Activity, Sport};

/// One ranked entry in a best-performance listing
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BestPerformanceItem {
    /// Ranked value; meaning depends on the queried parameter
    pub value: f64,
    /// Activity the performance came from
    pub activity: Activity,
}

/// Response of the best-performance ranking operation
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BestPerformanceResponse {
    /// Sport the ranking was computed for
    pub sport: String,
    /// Queried parameter (a distance or a duration selector)
    pub parameter: String,
    /// Ranked performances, best first
    pub performances: Vec<BestPerformanceItem>,
}

impl Validate for BestPerformanceResponse {
    fn validate(&self) -> Result<(), ValidationError> {
        for item in &self.performances {
            item.activity.validate()?;
        }
        Ok(())
    }
}

/// Scope a record was achieved within
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum RecordScope {
    /// Best of a single calendar year
    Year,
    /// Best across the athlete's full history
    AllTime,
}

/// Condensed activity fields embedded in a record entry
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RecordActivity {
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
}

/// One personal record held by the athlete
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PerformanceRecord {
    /// Record identifier
    pub id: Uuid,
    /// Activity the record was achieved in
    pub activity_id: Uuid,
    /// Distance-based best effort backing the record, when applicable
    #[serde(skip_serializing_if = "Option::is_none")]
    pub performance_id: Option<Uuid>,
    /// Power-based best effort backing the record, when applicable
    #[serde(skip_serializing_if = "Option::is_none")]
    pub performance_power_id: Option<Uuid>,
    /// Metric the record is for (e.g. a distance or duration label)
    pub metric_type: String,
    /// Value of the record; meaning depends on the metric
    pub value: f64,
    /// Rank of this entry among all efforts for the metric
    pub rank: u32,
    /// Scope the record applies to
    pub scope: RecordScope,
    /// Day the record was set
    pub record_date: NaiveDate,
    /// Sport the record is for
    pub sport: Sport,
    /// Year the record belongs to
    pub year: i32,
    /// Condensed view of the backing activity
    pub activity: RecordActivity,
}

/// Response of the performance records operation
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PerformanceRecordResponse {
    /// Sport the records were queried for
    pub sport: Sport,
    /// Records, ordered by metric then rank
    pub records: Vec<PerformanceRecord>,
}

impl Validate for PerformanceRecordResponse {}

/// Power-duration curves for the athlete.
///
/// Curves are watt values sampled over the backend's fixed duration grid;
/// the per-year map is keyed by calendar year.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PowerProfileResponse {
    /// All-time best curve
    pub overall: Vec<f64>,
    /// Per-year best curves
    pub years: BTreeMap<i32, Vec<f64>>,
}

impl Validate for PowerProfileResponse {}
