//! Cloudinary signed upload

use axum::body::Bytes;
use chrono::Utc;
use reqwest::multipart::{Form, Part};
use serde::Deserialize;
use sha1::{Digest, Sha1};
use shared::error::{AppError, AppResult};

use crate::catalog::MediaHost;

const UPLOAD_API_BASE: &str = "https://api.cloudinary.com/v1_1";

#[derive(Debug, Deserialize)]
struct UploadResponse {
    secure_url: String,
}

/// The string Cloudinary expects to be signed: all non-credential params,
/// sorted by name, joined with `&`
fn string_to_sign(folder: &str, timestamp: i64) -> String {
    format!("folder={folder}&timestamp={timestamp}")
}

/// SHA-1 hex digest of the param string with the API secret appended
fn signature(params: &str, api_secret: &str) -> String {
    let mut hasher = Sha1::new();
    hasher.update(params.as_bytes());
    hasher.update(api_secret.as_bytes());
    hex::encode(hasher.finalize())
}

/// Cloudinary upload API client
pub struct CloudinaryClient {
    http: reqwest::Client,
    cloud_name: String,
    api_key: String,
    api_secret: String,
}

impl CloudinaryClient {
    pub fn new(
        http: reqwest::Client,
        cloud_name: impl Into<String>,
        api_key: impl Into<String>,
        api_secret: impl Into<String>,
    ) -> Self {
        Self {
            http,
            cloud_name: cloud_name.into(),
            api_key: api_key.into(),
            api_secret: api_secret.into(),
        }
    }

    fn upload_url(&self) -> String {
        format!("{UPLOAD_API_BASE}/{}/image/upload", self.cloud_name)
    }
}

#[async_trait::async_trait]
impl MediaHost for CloudinaryClient {
    async fn upload(&self, data: Bytes, media_type: &str, folder: &str) -> AppResult<String> {
        let timestamp = Utc::now().timestamp();
        let signature = signature(&string_to_sign(folder, timestamp), &self.api_secret);

        let file = Part::bytes(data.to_vec())
            .file_name("upload")
            .mime_str(media_type)
            .map_err(|e| {
                AppError::upload("Unusable media type for upload").with_cause(e.to_string())
            })?;

        let form = Form::new()
            .text("api_key", self.api_key.clone())
            .text("timestamp", timestamp.to_string())
            .text("folder", folder.to_string())
            .text("signature", signature)
            .part("file", file);

        let response = self
            .http
            .post(self.upload_url())
            .multipart(form)
            .send()
            .await
            .map_err(|e| {
                AppError::upload("Failed to reach media host").with_cause(e.to_string())
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::error!(folder = %folder, status = %status, body = %body, "Media upload failed");
            return Err(
                AppError::upload("Media host rejected the upload").with_cause(format!("HTTP {status}"))
            );
        }

        let uploaded: UploadResponse = response.json().await.map_err(|e| {
            AppError::upload("Media host returned an unexpected body").with_cause(e.to_string())
        })?;

        Ok(uploaded.secure_url)
    }
}
