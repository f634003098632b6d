// ABOUTME: Payload models decoded from backend responses
// ABOUTME: Re-exports Activity, Profile, statistics rollups, and user types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stride Fitness

//! # Payload Models
//!
//! Typed shapes of every backend response body. All models are plain
//! serde-derived value types: they are produced once at decode time,
//! validated at the trust boundary ([`crate::validate::decode`]), and
//! never mutated afterwards — a refetch replaces the whole value.

mod activity;
mod fitness;
mod heatmap;
mod performance;
mod sport;
mod statistics;
mod user;

pub use activity::{
    ActivitiesResponse, Activity, ActivityUpdate, Lap, Pagination, Performance,
    PowerPerformance, TracePoint,
};
pub use fitness::{
    FitnessResponse, FitnessScore, FtpData, WeeklyActivityData, WeeklyActivitySummary,
    WeeklySummary, WeeklyTss, WeeklyZoneData, WeeksResponse, ZoneTimeData,
};
pub use heatmap::{HeatmapPolyline, HeatmapResponse};
pub use performance::{
    BestPerformanceItem, BestPerformanceResponse, PerformanceRecord,
    PerformanceRecordResponse, PowerProfileResponse, RecordActivity, RecordScope,
};
pub use sport::Sport;
pub use statistics::{Profile, Statistic, WeeksStatistics, YearsStatistics, Zone, ZoneKind};
pub use user::{GoogleAuthResponse, MapKind, Token, User, UserCreate, UserUpdate};
