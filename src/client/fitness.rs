// ABOUTME: Aggregate endpoints: fitness trends, weekly summaries, rankings
// ABOUTME: Also serves the heatmap and power-profile curves
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stride Fitness

use crate::errors::ClientResult;
use crate::models::{
    BestPerformanceResponse, FitnessResponse, HeatmapResponse, PerformanceRecordResponse,
    PowerProfileResponse, Sport, WeeksResponse,
};
use crate::params::BestPerformanceParams;

use super::ApiClient;

impl ApiClient {
    /// Fetch the fitness trend series (scores, TSS, volumes, zones, FTP).
    ///
    /// # Errors
    ///
    /// Returns a [`crate::errors::ClientError`] on transport failure,
    /// non-2xx response, or a malformed body.
    pub async fn fetch_fitness(&self) -> ClientResult<FitnessResponse> {
        self.get_decoded("/fitness/", &[]).await
    }

    /// Fetch the weekly training summaries.
    ///
    /// # Errors
    ///
    /// Returns a [`crate::errors::ClientError`] on transport failure,
    /// non-2xx response, or a malformed body.
    pub async fn fetch_weeks(&self) -> ClientResult<WeeksResponse> {
        self.get_decoded("/weeks/", &[]).await
    }

    /// Fetch the best-performance ranking for a sport and effort selector.
    ///
    /// # Errors
    ///
    /// Returns a [`crate::errors::ClientError`] on transport failure,
    /// non-2xx response, or a malformed body.
    pub async fn best_performances(
        &self,
        params: &BestPerformanceParams,
    ) -> ClientResult<BestPerformanceResponse> {
        self.get_decoded("/best/", &params.to_query_pairs()).await
    }

    /// Fetch the athlete's personal records for a sport.
    ///
    /// # Errors
    ///
    /// Returns a [`crate::errors::ClientError`] on transport failure,
    /// non-2xx response, or a malformed body.
    pub async fn performance_records(
        &self,
        sport: Sport,
    ) -> ClientResult<PerformanceRecordResponse> {
        self.get_decoded("/records/", &[("sport", sport.as_str().to_owned())])
            .await
    }

    /// Fetch the route polylines for the heatmap view.
    ///
    /// # Errors
    ///
    /// Returns a [`crate::errors::ClientError`] on transport failure,
    /// non-2xx response, or a malformed body.
    pub async fn fetch_heatmap(&self) -> ClientResult<HeatmapResponse> {
        self.get_decoded("/heatmap/", &[]).await
    }

    /// Fetch the power-duration curves.
    ///
    /// # Errors
    ///
    /// Returns a [`crate::errors::ClientError`] on transport failure,
    /// non-2xx response, or a malformed body.
    pub async fn fetch_power_profile(&self) -> ClientResult<PowerProfileResponse> {
        self.get_decoded("/power-profile/", &[]).await
    }
}
