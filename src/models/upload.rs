use serde::{Deserialize, Serialize};

use super::common::MAX_REFERENCE_IMAGES;
use crate::error::{PixGenError, Result};

/// Descriptor for one uploaded image, exactly as the upload endpoint
/// returns it: the stored filename, the server-relative storage path used
/// in later requests, and the display URL.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageReference {
    pub filename: String,
    pub path: String,
    pub url: String,
}

/// Transient, session-local list of reference images, capped at
/// [`MAX_REFERENCE_IMAGES`]. Adding past the cap fails and leaves the list
/// untouched.
#[derive(Debug, Clone, Default)]
pub struct ReferenceImages {
    images: Vec<ImageReference>,
}

impl ReferenceImages {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, image: ImageReference) -> Result<()> {
        self.extend(vec![image])
    }

    pub fn extend(&mut self, images: Vec<ImageReference>) -> Result<()> {
        if self.images.len() + images.len() > MAX_REFERENCE_IMAGES {
            return Err(PixGenError::ValidationError(format!(
                "At most {} reference images are allowed",
                MAX_REFERENCE_IMAGES
            )));
        }
        self.images.extend(images);
        Ok(())
    }

    pub fn remove(&mut self, index: usize) -> Option<ImageReference> {
        if index < self.images.len() {
            Some(self.images.remove(index))
        } else {
            None
        }
    }

    /// Storage paths in insertion order, the form request payloads want.
    pub fn paths(&self) -> Vec<String> {
        self.images.iter().map(|image| image.path.clone()).collect()
    }

    pub fn as_slice(&self) -> &[ImageReference] {
        &self.images
    }

    pub fn len(&self) -> usize {
        self.images.len()
    }

    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reference(name: &str) -> ImageReference {
        ImageReference {
            filename: name.to_string(),
            path: format!("user/{}", name),
            url: format!("/api/images/user/{}", name),
        }
    }

    #[test]
    fn upload_response_parses_verbatim() {
        let image: ImageReference = serde_json::from_str(
            r#"{"success": true, "filename": "a.png", "path": "user/a.png", "url": "/api/images/user/a.png"}"#,
        )
        .unwrap();

        assert_eq!(image.filename, "a.png");
        assert_eq!(image.path, "user/a.png");
        assert_eq!(image.url, "/api/images/user/a.png");
    }

    #[test]
    fn list_caps_at_eight_and_stays_unchanged_on_overflow() {
        let mut list = ReferenceImages::new();
        for i in 0..MAX_REFERENCE_IMAGES {
            list.push(reference(&format!("{}.png", i))).unwrap();
        }

        let before = list.paths();
        assert!(list.push(reference("overflow.png")).is_err());
        assert_eq!(list.paths(), before);
        assert_eq!(list.len(), MAX_REFERENCE_IMAGES);
    }

    #[test]
    fn bulk_extend_past_the_cap_adds_nothing() {
        let mut list = ReferenceImages::new();
        list.extend(vec![reference("a.png"), reference("b.png")])
            .unwrap();

        let too_many: Vec<_> = (0..8).map(|i| reference(&format!("x{}.png", i))).collect();
        assert!(list.extend(too_many).is_err());
        assert_eq!(list.len(), 2);
    }

    #[test]
    fn remove_by_index() {
        let mut list = ReferenceImages::new();
        list.extend(vec![reference("a.png"), reference("b.png")])
            .unwrap();

        let removed = list.remove(0).unwrap();
        assert_eq!(removed.filename, "a.png");
        assert_eq!(list.paths(), vec!["user/b.png".to_string()]);
        assert!(list.remove(5).is_none());
    }
}
