use futures::future::join_all;
use serde::Serialize;
use serde_json::Value;

use crate::error::{PixGenError, Result};
use crate::http::HttpClient;
use crate::models::{
    CombineRequest, EditRequest, GenerateRequest, GenerationResponse, MAX_COMBINE_IMAGES,
    MAX_REFERENCE_IMAGES, MIN_COMBINE_IMAGES,
};

#[derive(Clone)]
pub struct ImageClient {
    http: HttpClient,
    api_key: String,
}

impl ImageClient {
    pub fn new(http: HttpClient, api_key: String) -> Self {
        Self { http, api_key }
    }

    pub async fn generate(&self, request: &GenerateRequest) -> Result<GenerationResponse> {
        let payload = build_generate_payload(&self.api_key, request)?;
        log::info!("Generating image with model: {}", request.model);
        self.http.post("/generate", &payload).await
    }

    pub async fn edit(&self, request: &EditRequest) -> Result<GenerationResponse> {
        let payload = build_edit_payload(&self.api_key, request)?;
        log::info!("Editing image: {}", request.image_path);
        self.http.post("/edit", &payload).await
    }

    /// Applies one edit per request, all issued concurrently. Per-item
    /// failures are dropped in favor of the successful subset; the batch
    /// errors out only when every item failed.
    pub async fn edit_batch(&self, requests: &[EditRequest]) -> Result<Vec<GenerationResponse>> {
        if requests.is_empty() {
            return Err(PixGenError::ValidationError("No images to edit".into()));
        }

        let results = join_all(requests.iter().map(|request| self.edit(request))).await;
        keep_successful(results)
    }

    pub async fn combine(&self, request: &CombineRequest) -> Result<GenerationResponse> {
        let payload = build_combine_payload(&self.api_key, request)?;
        log::info!("Combining {} images", request.image_paths.len());
        self.http.post("/combine", &payload).await
    }
}

pub(crate) fn require_api_key(api_key: &str) -> Result<()> {
    if api_key.trim().is_empty() {
        return Err(PixGenError::ValidationError("API key is not set".into()));
    }
    Ok(())
}

fn require_prompt(prompt: &str) -> Result<()> {
    if prompt.trim().is_empty() {
        return Err(PixGenError::ValidationError(
            "Prompt cannot be empty".into(),
        ));
    }
    Ok(())
}

/// Serialize a request and inject the API key beside its fields, the shape
/// every generation endpoint expects.
fn with_api_key<R: Serialize>(api_key: &str, request: &R) -> Result<Value> {
    let mut payload = serde_json::to_value(request)
        .map_err(|e| PixGenError::SerializationError(e.to_string()))?;
    payload["api_key"] = Value::String(api_key.to_string());
    Ok(payload)
}

fn build_generate_payload(api_key: &str, request: &GenerateRequest) -> Result<Value> {
    require_api_key(api_key)?;
    require_prompt(&request.prompt)?;

    if let Some(references) = &request.reference_images {
        if references.len() > MAX_REFERENCE_IMAGES {
            return Err(PixGenError::ValidationError(format!(
                "At most {} reference images are allowed",
                MAX_REFERENCE_IMAGES
            )));
        }
    }

    with_api_key(api_key, request)
}

fn build_edit_payload(api_key: &str, request: &EditRequest) -> Result<Value> {
    require_api_key(api_key)?;
    require_prompt(&request.prompt)?;

    if request.image_path.trim().is_empty() {
        return Err(PixGenError::ValidationError(
            "Image path cannot be empty".into(),
        ));
    }

    with_api_key(api_key, request)
}

fn build_combine_payload(api_key: &str, request: &CombineRequest) -> Result<Value> {
    require_api_key(api_key)?;
    require_prompt(&request.prompt)?;

    if request.image_paths.len() < MIN_COMBINE_IMAGES {
        return Err(PixGenError::ValidationError(format!(
            "At least {} images are required to combine",
            MIN_COMBINE_IMAGES
        )));
    }
    if request.image_paths.len() > MAX_COMBINE_IMAGES {
        return Err(PixGenError::ValidationError(format!(
            "At most {} images can be combined",
            MAX_COMBINE_IMAGES
        )));
    }

    with_api_key(api_key, request)
}

fn keep_successful(results: Vec<Result<GenerationResponse>>) -> Result<Vec<GenerationResponse>> {
    let total = results.len();
    let successful: Vec<GenerationResponse> = results
        .into_iter()
        .filter_map(|result| result.ok())
        .filter(|response| response.success)
        .collect();

    if successful.is_empty() && total > 0 {
        return Err(PixGenError::ApiError(
            "Failed to edit any of the images".into(),
        ));
    }

    Ok(successful)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ModelTier;

    fn ok_response(id: i64) -> GenerationResponse {
        GenerationResponse {
            success: true,
            image_path: Some(format!("generated/{}.png", id)),
            image_url: None,
            id: Some(id),
            error: None,
        }
    }

    fn failed_response() -> GenerationResponse {
        GenerationResponse {
            success: false,
            image_path: None,
            image_url: None,
            id: None,
            error: Some("Generation failed".to_string()),
        }
    }

    #[test]
    fn generate_payload_injects_api_key_beside_params() {
        let request = GenerateRequest::new("cat")
            .with_model(ModelTier::Flash)
            .with_resolution("1024");
        let payload = build_generate_payload("sk-test", &request).unwrap();

        assert_eq!(payload["api_key"], "sk-test");
        assert_eq!(payload["prompt"], "cat");
        assert_eq!(payload["model"], "flash");
        assert_eq!(payload["resolution"], "1024");
        assert_eq!(payload["aspect_ratio"], "1:1");
        assert_eq!(payload["crop_to_aspect"], false);
    }

    #[test]
    fn empty_prompt_blocks_generation() {
        let request = GenerateRequest::new("   ");
        assert!(build_generate_payload("sk-test", &request).is_err());
    }

    #[test]
    fn missing_api_key_blocks_every_builder() {
        assert!(build_generate_payload("", &GenerateRequest::new("cat")).is_err());
        assert!(build_edit_payload("", &EditRequest::new("user/a.png", "hat")).is_err());

        let paths = vec!["user/a.png".to_string(), "user/b.png".to_string()];
        assert!(build_combine_payload("", &CombineRequest::new(paths, "merge")).is_err());
    }

    #[test]
    fn too_many_reference_images_block_generation() {
        let references: Vec<String> = (0..9).map(|i| format!("user/{}.png", i)).collect();
        let request = GenerateRequest::new("cat").with_reference_images(references);

        assert!(build_generate_payload("sk-test", &request).is_err());
    }

    #[test]
    fn combine_requires_two_to_eight_images() {
        let one = CombineRequest::new(vec!["user/a.png".to_string()], "merge");
        assert!(build_combine_payload("sk-test", &one).is_err());

        let nine: Vec<String> = (0..9).map(|i| format!("user/{}.png", i)).collect();
        assert!(build_combine_payload("sk-test", &CombineRequest::new(nine, "merge")).is_err());

        let two = vec!["user/a.png".to_string(), "user/b.png".to_string()];
        let payload = build_combine_payload("sk-test", &CombineRequest::new(two, "merge")).unwrap();
        assert_eq!(payload["image_paths"].as_array().unwrap().len(), 2);
    }

    #[test]
    fn batch_keeps_exactly_the_successful_subset() {
        let results = vec![
            Ok(ok_response(1)),
            Ok(failed_response()),
            Err(PixGenError::RequestError("connection reset".into())),
            Ok(ok_response(2)),
        ];

        let kept = keep_successful(results).unwrap();
        assert_eq!(kept.len(), 2);
        assert_eq!(kept[0].id, Some(1));
        assert_eq!(kept[1].id, Some(2));
    }

    #[test]
    fn batch_errors_only_when_everything_failed() {
        let results = vec![
            Ok(failed_response()),
            Err(PixGenError::RequestError("timed out".into())),
        ];
        assert!(keep_successful(results).is_err());
    }
}
