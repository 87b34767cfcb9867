// --- File: crates/schedulify_dashboard/src/service.rs ---
//! Upload service implementation.
//!
//! This module provides an implementation of the UploadService trait for a
//! generic HTTP image host: the image bytes are posted to the configured
//! endpoint and the host answers with the public URL.

use schedulify_common::services::{BoxFuture, UploadService, UploadedImage};
use schedulify_common::HTTP_CLIENT;
use schedulify_config::UploadConfig;
use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

/// Errors that can occur when talking to the image host.
#[derive(Error, Debug)]
pub enum UploadServiceError {
    #[error("Upload transport error: {0}")]
    TransportError(#[from] reqwest::Error),
    #[error("Upload rejected: {0}")]
    Rejected(String),
    #[error("Unexpected upload response: {0}")]
    BadResponse(String),
}

#[derive(Deserialize, Debug)]
struct UploadHostResponse {
    url: String,
    #[serde(default)]
    size: Option<u64>,
}

/// HTTP-backed upload service.
pub struct HttpUploadService {
    endpoint: String,
}

impl HttpUploadService {
    /// Create a new upload service for the configured host.
    pub fn new(config: &UploadConfig) -> Self {
        Self {
            endpoint: config.endpoint.clone(),
        }
    }
}

impl UploadService for HttpUploadService {
    type Error = UploadServiceError;

    fn upload_image(
        &self,
        file_name: &str,
        bytes: Vec<u8>,
    ) -> BoxFuture<'_, UploadedImage, Self::Error> {
        let file_name = file_name.to_string();
        Box::pin(async move {
            debug!("Uploading {} ({} bytes)", file_name, bytes.len());

            let response = HTTP_CLIENT
                .post(&self.endpoint)
                .query(&[("file_name", file_name.as_str())])
                .body(bytes)
                .send()
                .await?;

            if !response.status().is_success() {
                let status = response.status();
                let message = response.text().await.unwrap_or_default();
                return Err(UploadServiceError::Rejected(format!(
                    "{}: {}",
                    status, message
                )));
            }

            let parsed: UploadHostResponse = response
                .json()
                .await
                .map_err(|e| UploadServiceError::BadResponse(e.to_string()))?;

            Ok(UploadedImage {
                url: parsed.url,
                size_bytes: parsed.size,
            })
        })
    }
}
