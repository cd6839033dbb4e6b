use serde::{Deserialize, Serialize};

use super::common::ModelTier;

/// Parameters for a text-to-image generation. Defaults match the backend:
/// flash tier, 2048 resolution, square aspect, no cropping.
#[derive(Debug, Clone, Serialize)]
pub struct GenerateRequest {
    pub prompt: String,
    pub model: ModelTier,
    pub resolution: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub negative_prompt: Option<String>,
    pub aspect_ratio: String,
    pub crop_to_aspect: bool,
    /// Server-relative storage paths of previously uploaded reference
    /// images. Only the pro tier uses these; they pass through untouched
    /// for flash.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reference_images: Option<Vec<String>>,
}

impl GenerateRequest {
    pub fn new(prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            model: ModelTier::Flash,
            resolution: "2048".to_string(),
            negative_prompt: None,
            aspect_ratio: "1:1".to_string(),
            crop_to_aspect: false,
            reference_images: None,
        }
    }

    pub fn with_model(mut self, model: ModelTier) -> Self {
        self.model = model;
        self
    }

    pub fn with_resolution(mut self, resolution: impl Into<String>) -> Self {
        self.resolution = resolution.into();
        self
    }

    pub fn with_negative_prompt(mut self, negative_prompt: impl Into<String>) -> Self {
        self.negative_prompt = Some(negative_prompt.into());
        self
    }

    pub fn with_aspect_ratio(mut self, aspect_ratio: impl Into<String>) -> Self {
        self.aspect_ratio = aspect_ratio.into();
        self
    }

    pub fn with_crop_to_aspect(mut self, crop_to_aspect: bool) -> Self {
        self.crop_to_aspect = crop_to_aspect;
        self
    }

    pub fn with_reference_images(mut self, reference_images: Vec<String>) -> Self {
        self.reference_images = Some(reference_images);
        self
    }
}

/// Parameters for editing one uploaded image. Resolution is optional here;
/// the backend keeps the source resolution when it is absent.
#[derive(Debug, Clone, Serialize)]
pub struct EditRequest {
    pub image_path: String,
    pub prompt: String,
    pub model: ModelTier,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resolution: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub negative_prompt: Option<String>,
    pub aspect_ratio: String,
    pub crop_to_aspect: bool,
}

impl EditRequest {
    pub fn new(image_path: impl Into<String>, prompt: impl Into<String>) -> Self {
        Self {
            image_path: image_path.into(),
            prompt: prompt.into(),
            model: ModelTier::Flash,
            resolution: None,
            negative_prompt: None,
            aspect_ratio: "1:1".to_string(),
            crop_to_aspect: false,
        }
    }

    pub fn with_model(mut self, model: ModelTier) -> Self {
        self.model = model;
        self
    }

    pub fn with_resolution(mut self, resolution: impl Into<String>) -> Self {
        self.resolution = Some(resolution.into());
        self
    }

    pub fn with_negative_prompt(mut self, negative_prompt: impl Into<String>) -> Self {
        self.negative_prompt = Some(negative_prompt.into());
        self
    }

    pub fn with_aspect_ratio(mut self, aspect_ratio: impl Into<String>) -> Self {
        self.aspect_ratio = aspect_ratio.into();
        self
    }

    pub fn with_crop_to_aspect(mut self, crop_to_aspect: bool) -> Self {
        self.crop_to_aspect = crop_to_aspect;
        self
    }
}

/// Parameters for combining several uploaded images into one result.
/// Combination defaults to the pro tier, the only one the backend routes
/// multi-image prompts to.
#[derive(Debug, Clone, Serialize)]
pub struct CombineRequest {
    pub image_paths: Vec<String>,
    pub prompt: String,
    pub model: ModelTier,
    pub resolution: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub negative_prompt: Option<String>,
    pub aspect_ratio: String,
    pub crop_to_aspect: bool,
}

impl CombineRequest {
    pub fn new(image_paths: Vec<String>, prompt: impl Into<String>) -> Self {
        Self {
            image_paths,
            prompt: prompt.into(),
            model: ModelTier::Pro,
            resolution: "2048".to_string(),
            negative_prompt: None,
            aspect_ratio: "1:1".to_string(),
            crop_to_aspect: false,
        }
    }

    pub fn with_model(mut self, model: ModelTier) -> Self {
        self.model = model;
        self
    }

    pub fn with_resolution(mut self, resolution: impl Into<String>) -> Self {
        self.resolution = resolution.into();
        self
    }

    pub fn with_negative_prompt(mut self, negative_prompt: impl Into<String>) -> Self {
        self.negative_prompt = Some(negative_prompt.into());
        self
    }

    pub fn with_aspect_ratio(mut self, aspect_ratio: impl Into<String>) -> Self {
        self.aspect_ratio = aspect_ratio.into();
        self
    }

    pub fn with_crop_to_aspect(mut self, crop_to_aspect: bool) -> Self {
        self.crop_to_aspect = crop_to_aspect;
        self
    }
}

/// Envelope returned by the generate, edit and combine endpoints. A
/// `success: false` body on a 2xx status is a normal payload; `error`
/// carries the user-facing message in that case.
#[derive(Debug, Clone, Deserialize)]
pub struct GenerationResponse {
    #[serde(default)]
    pub success: bool,
    pub image_path: Option<String>,
    pub image_url: Option<String>,
    pub id: Option<i64>,
    pub error: Option<String>,
}

impl GenerationResponse {
    pub fn error_message(&self) -> &str {
        self.error.as_deref().unwrap_or("Unknown error")
    }
}

/// Envelope returned by the balance endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct BalanceResponse {
    #[serde(default)]
    pub success: bool,
    pub credits: Option<f64>,
    pub message: Option<String>,
    pub error: Option<String>,
}
