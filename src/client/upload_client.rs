use std::path::Path;

use futures::future::try_join_all;
use reqwest::multipart::{Form, Part};

use crate::error::{PixGenError, Result};
use crate::http::HttpClient;
use crate::models::ImageReference;

/// Multipart field name the upload endpoint reads the file from.
pub const UPLOAD_FIELD: &str = "file";

/// Sends files to the backend's upload endpoint, one multipart request per
/// file. Count limits (combine bounds, reference cap) are the caller's
/// responsibility; this adapter does not enforce them.
#[derive(Clone)]
pub struct UploadClient {
    http: HttpClient,
}

impl UploadClient {
    pub fn new(http: HttpClient) -> Self {
        Self { http }
    }

    pub async fn upload(
        &self,
        filename: impl Into<String>,
        bytes: Vec<u8>,
    ) -> Result<ImageReference> {
        let filename = filename.into();
        log::debug!("Uploading {} ({} bytes)", filename, bytes.len());

        let part = Part::bytes(bytes).file_name(filename);
        let form = Form::new().part(UPLOAD_FIELD, part);

        self.http.post_multipart("/upload", form).await
    }

    pub async fn upload_path(&self, path: &Path) -> Result<ImageReference> {
        let filename = path
            .file_name()
            .and_then(|name| name.to_str())
            .ok_or_else(|| {
                PixGenError::ValidationError(format!("Invalid file name: {}", path.display()))
            })?
            .to_string();

        let bytes = tokio::fs::read(path).await.map_err(|e| {
            PixGenError::RequestError(format!("Failed to read {}: {}", path.display(), e))
        })?;

        self.upload(filename, bytes).await
    }

    /// Uploads every file concurrently. The batch is all-or-nothing: a
    /// single failure aborts it with one error and no partial result set.
    pub async fn upload_many(
        &self,
        files: Vec<(String, Vec<u8>)>,
    ) -> Result<Vec<ImageReference>> {
        try_join_all(
            files
                .into_iter()
                .map(|(filename, bytes)| self.upload(filename, bytes)),
        )
        .await
    }

    pub async fn upload_paths(&self, paths: &[&Path]) -> Result<Vec<ImageReference>> {
        try_join_all(paths.iter().map(|path| self.upload_path(path))).await
    }
}
