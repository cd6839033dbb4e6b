use serde::Deserialize;

use super::common::GenerationKind;

/// One persisted generation, owned by the backend. The client only reads,
/// filters and deletes these.
#[derive(Debug, Clone, Deserialize)]
pub struct GenerationRecord {
    pub id: i64,
    #[serde(rename = "type")]
    pub kind: GenerationKind,
    pub prompt: String,
    pub model: Option<String>,
    pub resolution: Option<String>,
    pub negative_prompt: Option<String>,
    pub image_path: Option<String>,
    pub image_url: Option<String>,
    pub created_at: Option<String>,
}

/// Filters for the gallery listing. All fields are optional; the backend
/// defaults to the hundred most recent records.
#[derive(Debug, Clone, Default)]
pub struct GalleryQuery {
    pub search: Option<String>,
    pub kind: Option<GenerationKind>,
    pub limit: Option<u32>,
    pub offset: Option<u32>,
}

impl GalleryQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = Some(search.into());
        self
    }

    pub fn with_kind(mut self, kind: GenerationKind) -> Self {
        self.kind = Some(kind);
        self
    }

    pub fn with_limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn with_offset(mut self, offset: u32) -> Self {
        self.offset = Some(offset);
        self
    }

    pub fn to_query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(search) = &self.search {
            pairs.push(("search", search.clone()));
        }
        if let Some(kind) = self.kind {
            pairs.push(("type", kind.to_string()));
        }
        if let Some(limit) = self.limit {
            pairs.push(("limit", limit.to_string()));
        }
        if let Some(offset) = self.offset {
            pairs.push(("offset", offset.to_string()));
        }
        pairs
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct GalleryResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub generations: Vec<GenerationRecord>,
    pub error: Option<String>,
}

/// Envelope for a single gallery record.
#[derive(Debug, Clone, Deserialize)]
pub struct GenerationEnvelope {
    #[serde(default)]
    pub success: bool,
    pub generation: Option<GenerationRecord>,
    pub error: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DeleteResponse {
    #[serde(default)]
    pub success: bool,
    pub error: Option<String>,
}

/// Per-kind generation counts. The backend omits kinds with no records.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TypeCounts {
    #[serde(default)]
    pub generate: u64,
    #[serde(default)]
    pub edit: u64,
    #[serde(default)]
    pub combine: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Statistics {
    pub total: u64,
    #[serde(default)]
    pub by_type: TypeCounts,
    #[serde(default)]
    pub total_credits: f64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct StatisticsResponse {
    #[serde(default)]
    pub success: bool,
    pub statistics: Option<Statistics>,
    pub error: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn query_pairs_only_contain_set_filters() {
        let query = GalleryQuery::new()
            .with_search("cat")
            .with_kind(GenerationKind::Edit);

        assert_eq!(
            query.to_query_pairs(),
            vec![("search", "cat".to_string()), ("type", "edit".to_string())]
        );
        assert!(GalleryQuery::new().to_query_pairs().is_empty());
    }

    #[test]
    fn record_parses_backend_row() {
        let record: GenerationRecord = serde_json::from_value(json!({
            "id": 7,
            "type": "generate",
            "prompt": "cat",
            "model": "flash",
            "image_path": "generated/x.png",
            "image_url": "/api/images/generated/x.png",
            "created_at": "2026-08-01 10:00:00"
        }))
        .unwrap();

        assert_eq!(record.id, 7);
        assert_eq!(record.kind, GenerationKind::Generate);
        assert_eq!(record.image_path.as_deref(), Some("generated/x.png"));
    }

    #[test]
    fn rejected_delete_parses_as_normal_payload() {
        let response: DeleteResponse = serde_json::from_value(json!({
            "success": false,
            "error": "Generation not found"
        }))
        .unwrap();

        assert!(!response.success);
        assert_eq!(response.error.as_deref(), Some("Generation not found"));
    }

    #[test]
    fn statistics_tolerate_missing_kind_counts() {
        let response: StatisticsResponse = serde_json::from_value(json!({
            "success": true,
            "statistics": {"total": 3, "by_type": {"generate": 3}}
        }))
        .unwrap();

        let stats = response.statistics.unwrap();
        assert_eq!(stats.total, 3);
        assert_eq!(stats.by_type.generate, 3);
        assert_eq!(stats.by_type.combine, 0);
        assert_eq!(stats.total_credits, 0.0);
    }
}
