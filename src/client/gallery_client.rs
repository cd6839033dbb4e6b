use crate::error::Result;
use crate::http::HttpClient;
use crate::models::{
    DeleteResponse, GalleryQuery, GalleryResponse, GenerationEnvelope, StatisticsResponse,
};

/// Read/delete access to the backend's gallery of past generations. The
/// records live entirely on the backend; nothing is cached here.
#[derive(Clone)]
pub struct GalleryClient {
    http: HttpClient,
}

impl GalleryClient {
    pub fn new(http: HttpClient) -> Self {
        Self { http }
    }

    pub async fn list(&self, query: &GalleryQuery) -> Result<GalleryResponse> {
        self.http.get("/gallery", &query.to_query_pairs()).await
    }

    pub async fn get(&self, id: i64) -> Result<GenerationEnvelope> {
        self.http.get(&format!("/gallery/{}", id), &[]).await
    }

    pub async fn delete(&self, id: i64) -> Result<DeleteResponse> {
        log::info!("Deleting generation {}", id);
        self.http.delete(&format!("/gallery/{}", id)).await
    }

    pub async fn statistics(&self) -> Result<StatisticsResponse> {
        self.http.get("/gallery/statistics", &[]).await
    }
}
