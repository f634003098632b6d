// ABOUTME: Rendering gate selecting among loading, error, and content views
// ABOUTME: Pure function of a query result, evaluated in a fixed order
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stride Fitness

use super::ApiQueryResult;

/// Default message of the loading view
pub const DEFAULT_LOADING_MESSAGE: &str = "Loading...";

/// Default message of the error view
pub const DEFAULT_ERROR_MESSAGE: &str = "Failed to load data. Please try again.";

/// What the caller should render for a query result
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoundaryView<T> {
    /// Show a loading indicator with this message
    Loading {
        /// Message to display
        message: String,
    },
    /// Show a retry-capable error notice with this message; the
    /// underlying error is never part of the view
    Error {
        /// Message to display
        message: String,
    },
    /// Render the content with the guaranteed-present data
    Content(T),
}

/// Four-state rendering gate over query results.
///
/// Evaluation order is fixed: loading wins over error, error wins over
/// missing data, and content renders only when data is present. The gate
/// holds no state of its own — it is a pure function of the result it is
/// given, re-evaluated on every call.
#[derive(Debug, Clone)]
pub struct QueryBoundary {
    loading_message: String,
    error_message: String,
}

impl Default for QueryBoundary {
    fn default() -> Self {
        Self {
            loading_message: DEFAULT_LOADING_MESSAGE.to_owned(),
            error_message: DEFAULT_ERROR_MESSAGE.to_owned(),
        }
    }
}

impl QueryBoundary {
    /// Gate with the default messages
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Override the loading view message
    #[must_use]
    pub fn loading_message(mut self, message: impl Into<String>) -> Self {
        self.loading_message = message.into();
        self
    }

    /// Override the error view message
    #[must_use]
    pub fn error_message(mut self, message: impl Into<String>) -> Self {
        self.error_message = message.into();
        self
    }

    /// Select the view for a query result.
    ///
    /// 1. loading → loading view;
    /// 2. error → error view (the error itself goes to the log only);
    /// 3. no data (e.g. a disabled query) → loading view;
    /// 4. otherwise → content.
    #[must_use]
    pub fn resolve<T>(&self, result: ApiQueryResult<T>) -> BoundaryView<T> {
        if result.is_loading {
            return BoundaryView::Loading {
                message: self.loading_message.clone(),
            };
        }

        if let Some(error) = result.error {
            tracing::warn!(
                status = error.status,
                code = error.code.as_deref(),
                "rendering error view: {}",
                error.message
            );
            return BoundaryView::Error {
                message: self.error_message.clone(),
            };
        }

        match result.data {
            Some(data) => BoundaryView::Content(data),
            None => BoundaryView::Loading {
                message: self.loading_message.clone(),
            },
        }
    }
}
