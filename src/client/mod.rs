pub mod gallery_client;
pub mod image_client;
pub mod upload_client;

use serde_json::json;

use crate::config::PixGenConfig;
use crate::error::Result;
use crate::http::HttpClient;
use crate::models::{BalanceResponse, GenerateRequest, GenerationResponse};
use crate::normalize;

pub use gallery_client::GalleryClient;
pub use image_client::ImageClient;
pub use upload_client::UploadClient;

/// Facade over the backend API. Sub-clients share one HTTP client; the API
/// key may be absent at construction and is validated when a request that
/// needs it is made.
#[derive(Clone)]
pub struct PixGenClient {
    config: PixGenConfig,
    http: HttpClient,
    image_client: ImageClient,
    gallery_client: GalleryClient,
    upload_client: UploadClient,
}

impl PixGenClient {
    pub fn new(config: PixGenConfig) -> Self {
        let http = HttpClient::new(config.base_url.clone());
        let api_key = config.api_key.clone().unwrap_or_default();

        Self {
            image_client: ImageClient::new(http.clone(), api_key),
            gallery_client: GalleryClient::new(http.clone()),
            upload_client: UploadClient::new(http.clone()),
            http,
            config,
        }
    }

    pub fn from_env() -> Self {
        Self::new(PixGenConfig::from_env())
    }

    pub fn config(&self) -> &PixGenConfig {
        &self.config
    }

    pub fn images(&self) -> &ImageClient {
        &self.image_client
    }

    pub fn gallery(&self) -> &GalleryClient {
        &self.gallery_client
    }

    pub fn uploads(&self) -> &UploadClient {
        &self.upload_client
    }

    pub async fn check_balance(&self) -> Result<BalanceResponse> {
        let api_key = self.config.api_key.as_deref().unwrap_or_default();
        image_client::require_api_key(api_key)?;

        self.http
            .post("/balance", &json!({ "api_key": api_key }))
            .await
    }

    /// Resolve an image path returned by the backend against this client's
    /// base URL.
    pub fn image_url(&self, image_path: &str) -> String {
        normalize::image_url(&self.config.base_url, image_path)
    }

    /// Generate an image and pair the response with a resolved display URL
    /// (empty when the backend returned no image).
    pub async fn generate_resolved(
        &self,
        request: &GenerateRequest,
    ) -> Result<(GenerationResponse, String)> {
        let response = self.image_client.generate(request).await?;
        let url = response
            .image_path
            .as_deref()
            .map(|path| self.image_url(path))
            .unwrap_or_default();

        Ok((response, url))
    }
}
