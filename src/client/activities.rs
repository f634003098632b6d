// ABOUTME: Activity endpoints: listing with filters, detail, upload, edit
// ABOUTME: Multipart upload streams the file and reports progress
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stride Fitness

use std::sync::Arc;

use bytes::Bytes;
use futures_util::stream::{self, Stream};
use reqwest::multipart;
use uuid::Uuid;

use crate::errors::ClientResult;
use crate::models::{ActivitiesResponse, Activity, ActivityUpdate};
use crate::params::ActivityListParams;
use crate::validate::decode;

use super::ApiClient;

/// Upload body chunk size; one progress event fires per chunk
const UPLOAD_CHUNK_SIZE: usize = 64 * 1024;

/// Progress of an in-flight upload
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UploadProgress {
    /// Bytes handed to the transport so far
    pub bytes_sent: u64,
    /// Total size of the file being uploaded
    pub total_bytes: u64,
}

/// Callback invoked with each upload progress event
pub type ProgressCallback = Arc<dyn Fn(UploadProgress) + Send + Sync>;

/// A raw device file to upload as a new activity
#[derive(Debug, Clone)]
pub struct ActivityUpload {
    /// File name sent with the multipart part
    pub file_name: String,
    /// Raw file contents
    pub bytes: Bytes,
    /// Title for the created activity
    pub title: String,
    /// Whether to flag the created activity as a race
    pub race: bool,
}

impl ApiClient {
    /// List activities matching the given filters.
    ///
    /// # Errors
    ///
    /// Returns a [`crate::errors::ClientError`] on transport failure,
    /// non-2xx response, or a malformed body.
    pub async fn list_activities(
        &self,
        params: &ActivityListParams,
    ) -> ClientResult<ActivitiesResponse> {
        self.get_decoded("/activities/", &params.to_query_pairs())
            .await
    }

    /// Fetch one activity with its full trace.
    ///
    /// # Errors
    ///
    /// Returns a [`crate::errors::ClientError`] on transport failure,
    /// non-2xx response, or a malformed body.
    pub async fn get_activity(&self, id: Uuid) -> ClientResult<Activity> {
        self.get_decoded(&format!("/activities/{id}/"), &[]).await
    }

    /// Fetch the most recent activities with the backend's default
    /// ordering and page size.
    ///
    /// # Errors
    ///
    /// Returns a [`crate::errors::ClientError`] on transport failure,
    /// non-2xx response, or a malformed body.
    pub async fn latest_activities(&self) -> ClientResult<Vec<Activity>> {
        let page: ActivitiesResponse = self.get_decoded("/activities/", &[]).await?;
        Ok(page.activities)
    }

    /// Upload a raw device file as a new activity.
    ///
    /// The file streams in fixed-size chunks; `progress` (when given)
    /// fires once per chunk with cumulative byte counts. Returns the
    /// created activity as decoded from the response.
    ///
    /// # Errors
    ///
    /// Returns a [`crate::errors::ClientError`] on transport failure,
    /// non-2xx response, or a malformed body.
    pub async fn upload_activity(
        &self,
        upload: ActivityUpload,
        progress: Option<ProgressCallback>,
    ) -> ClientResult<Activity> {
        let url = self.endpoint("/activities/", &[])?;
        let token = self.bearer()?;

        let total = upload.bytes.len() as u64;
        let body = reqwest::Body::wrap_stream(chunked(upload.bytes, progress));
        let part = multipart::Part::stream_with_length(body, total)
            .file_name(upload.file_name.clone());
        let form = multipart::Form::new()
            .part("fit_file", part)
            .text("title", upload.title.clone())
            .text("race", upload.race.to_string());

        tracing::debug!(%url, total_bytes = total, "POST (multipart)");
        let response = self
            .http
            .post(url)
            .bearer_auth(token)
            .multipart(form)
            .send()
            .await?;

        let value = Self::read_json(response).await?;
        decode(value).map_err(Into::into)
    }

    /// Edit an activity's mutable fields.
    ///
    /// # Errors
    ///
    /// Returns a [`crate::errors::ClientError`] on transport failure,
    /// non-2xx response, or a malformed body.
    pub async fn update_activity(
        &self,
        id: Uuid,
        update: &ActivityUpdate,
    ) -> ClientResult<Activity> {
        let value = self
            .patch_value(&format!("/activities/{id}/"), update)
            .await?;
        decode(value).map_err(Into::into)
    }
}

/// Split the file into upload chunks, firing the progress callback with
/// cumulative counts as each chunk is pulled by the transport
fn chunked(
    bytes: Bytes,
    progress: Option<ProgressCallback>,
) -> impl Stream<Item = Result<Bytes, std::io::Error>> {
    let total = bytes.len() as u64;
    let chunks: Vec<Bytes> = (0..bytes.len())
        .step_by(UPLOAD_CHUNK_SIZE)
        .map(|start| bytes.slice(start..bytes.len().min(start + UPLOAD_CHUNK_SIZE)))
        .collect();

    let mut sent = 0_u64;
    stream::iter(chunks.into_iter().map(move |chunk| {
        sent += chunk.len() as u64;
        if let Some(callback) = &progress {
            callback(UploadProgress {
                bytes_sent: sent,
                total_bytes: total,
            });
        }
        Ok(chunk)
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures_util::StreamExt;
    use std::sync::Mutex;

    #[tokio::test]
    async fn chunked_reports_cumulative_progress() {
        let payload = Bytes::from(vec![0_u8; UPLOAD_CHUNK_SIZE + 10]);
        let events = Arc::new(Mutex::new(Vec::new()));
        let seen = events.clone();
        let callback: ProgressCallback = Arc::new(move |p| {
            seen.lock().unwrap().push(p);
        });

        let chunks: Vec<_> = chunked(payload, Some(callback)).collect().await;
        assert_eq!(chunks.len(), 2);

        let events = events.lock().unwrap();
        assert_eq!(events.len(), 2);
        assert_eq!(events[0].bytes_sent, UPLOAD_CHUNK_SIZE as u64);
        assert_eq!(events[1].bytes_sent, events[1].total_bytes);
    }

    #[tokio::test]
    async fn chunked_empty_file_produces_no_events() {
        let chunks: Vec<_> = chunked(Bytes::new(), None).collect().await;
        assert!(chunks.is_empty());
    }
}
