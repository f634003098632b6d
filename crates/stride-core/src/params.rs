// ABOUTME: Request parameter types for the dashboard endpoints
// ABOUTME: Pagination, ordering, and the activity list filter set
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stride Fitness

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::models::Sport;

/// Sort direction for list operations; the set is closed, any other
/// string fails decoding
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    /// Ascending
    Asc,
    /// Descending
    Desc,
}

impl SortOrder {
    /// Wire representation used in query strings
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Asc => "asc",
            Self::Desc => "desc",
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortOrder {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "asc" => Ok(Self::Asc),
            "desc" => Ok(Self::Desc),
            other => Err(format!("unsupported sort order: {other}")),
        }
    }
}

/// Page selection for list operations; unset fields are omitted from the
/// request and the backend applies its defaults
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct PaginationParams {
    /// Page number, 1-based
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    /// Page size
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
}

/// Ordering plus pagination, all optional
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct QueryParams {
    /// Sort direction
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order: Option<SortOrder>,
    /// Field to sort by
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_by: Option<String>,
    /// Page selection
    #[serde(flatten)]
    pub pagination: PaginationParams,
}

/// Distance filter bounds in kilometers.
///
/// The full range is `0..=100`; a bound sitting at its end of the full
/// range is treated as "no constraint" and omitted from the request.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct DistanceRange {
    /// Lower bound in kilometers
    pub min: f64,
    /// Upper bound in kilometers
    pub max: f64,
}

/// Lower bound of the unconstrained distance range
pub const DISTANCE_RANGE_MIN: f64 = 0.0;

/// Upper bound of the unconstrained distance range
pub const DISTANCE_RANGE_MAX: f64 = 100.0;

impl Default for DistanceRange {
    fn default() -> Self {
        Self {
            min: DISTANCE_RANGE_MIN,
            max: DISTANCE_RANGE_MAX,
        }
    }
}

/// Filter set of the activity listing operation.
///
/// Every field is optional; [`ActivityListParams::to_query_pairs`]
/// produces exactly the query parameters the backend expects, omitting
/// unset filters and distance bounds that sit at the ends of the full
/// range.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ActivityListParams {
    /// Restrict to one sport
    pub sport: Option<Sport>,
    /// Restrict to a distance range
    pub distance: Option<DistanceRange>,
    /// Ask the backend to include map geometry
    pub fetch_map: bool,
    /// Restrict to race-flagged activities
    pub race: bool,
    /// Page number, 1-based
    pub page: Option<u32>,
    /// Page size
    pub limit: Option<u32>,
    /// Sort direction
    pub order: Option<SortOrder>,
    /// Field to sort by
    pub order_by: Option<String>,
}

impl ActivityListParams {
    /// Render the filter set as query-string pairs.
    ///
    /// Boolean filters appear only when set; a distance bound of 0 (min)
    /// or 100 (max) means "unconstrained" and is omitted.
    #[must_use]
    pub fn to_query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();

        if self.fetch_map {
            pairs.push(("map", "true".to_owned()));
        }
        if self.race {
            pairs.push(("race", "true".to_owned()));
        }
        if let Some(sport) = self.sport {
            pairs.push(("sport", sport.as_str().to_owned()));
        }
        if let Some(page) = self.page {
            pairs.push(("page", page.to_string()));
        }
        if let Some(limit) = self.limit {
            pairs.push(("limit", limit.to_string()));
        }
        if let Some(distance) = self.distance {
            if distance.min != DISTANCE_RANGE_MIN {
                pairs.push(("min_distance", distance.min.to_string()));
            }
            if distance.max != DISTANCE_RANGE_MAX {
                pairs.push(("max_distance", distance.max.to_string()));
            }
        }
        if let Some(order) = self.order {
            pairs.push(("order", order.as_str().to_owned()));
        }
        if let Some(order_by) = &self.order_by {
            pairs.push(("order_by", order_by.clone()));
        }

        pairs
    }
}

/// Selector of the best-performance ranking operation
#[derive(Debug, Clone, PartialEq)]
pub struct BestPerformanceParams {
    /// Sport to rank within
    pub sport: Sport,
    /// Distance selector, when ranking distance efforts
    pub distance: Option<String>,
    /// Duration selector, when ranking power efforts
    pub time: Option<String>,
}

impl BestPerformanceParams {
    /// Rank within a sport with no effort selector
    #[must_use]
    pub const fn for_sport(sport: Sport) -> Self {
        Self {
            sport,
            distance: None,
            time: None,
        }
    }

    /// Render the selector as query-string pairs
    #[must_use]
    pub fn to_query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = vec![("sport", self.sport.as_str().to_owned())];
        if let Some(distance) = &self.distance {
            pairs.push(("distance", distance.clone()));
        }
        if let Some(time) = &self.time {
            pairs.push(("time", time.clone()));
        }
        pairs
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unset_filters_produce_no_pairs() {
        assert!(ActivityListParams::default().to_query_pairs().is_empty());
    }

    #[test]
    fn distance_bounds_at_range_ends_are_omitted() {
        let params = ActivityListParams {
            distance: Some(DistanceRange { min: 0.0, max: 42.0 }),
            ..ActivityListParams::default()
        };
        let pairs = params.to_query_pairs();
        assert!(pairs.iter().all(|(k, _)| *k != "min_distance"));
        assert!(pairs.contains(&("max_distance", "42".to_owned())));
    }

    #[test]
    fn full_filter_set_renders_in_stable_order() {
        let params = ActivityListParams {
            sport: Some(Sport::Running),
            distance: Some(DistanceRange {
                min: 5.0,
                max: 100.0,
            }),
            fetch_map: true,
            race: true,
            page: Some(2),
            limit: Some(50),
            order: Some(SortOrder::Desc),
            order_by: Some("start_time".to_owned()),
        };
        let pairs = params.to_query_pairs();
        assert_eq!(
            pairs,
            vec![
                ("map", "true".to_owned()),
                ("race", "true".to_owned()),
                ("sport", "running".to_owned()),
                ("page", "2".to_owned()),
                ("limit", "50".to_owned()),
                ("min_distance", "5".to_owned()),
                ("order", "desc".to_owned()),
                ("order_by", "start_time".to_owned()),
            ]
        );
    }

    #[test]
    fn sort_order_rejects_values_outside_the_closed_set() {
        assert!(serde_json::from_str::<SortOrder>("\"ascending\"").is_err());
        assert!("ascending".parse::<SortOrder>().is_err());
    }
}
