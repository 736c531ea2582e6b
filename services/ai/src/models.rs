use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// An item submitted for analysis. Only lives for the duration of a request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ItemPayload {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub content: Option<String>,
}

impl ItemPayload {
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            content: None,
        }
    }

    pub fn with_content(mut self, content: impl Into<String>) -> Self {
        self.content = Some(content.into());
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    pub status: String,
}

impl HealthResponse {
    pub fn ok() -> Self {
        Self {
            status: "ok".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct CategorizeResponse {
    pub category: String,
    pub confidence: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct PrioritizeResponse {
    pub priority: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct EmbedResponse {
    pub vector: Vec<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    pub detail: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_payload_content_may_be_absent_or_null() {
        let absent: ItemPayload = serde_json::from_value(json!({"id": "1", "title": "a"})).unwrap();
        let null: ItemPayload =
            serde_json::from_value(json!({"id": "1", "title": "a", "content": null})).unwrap();

        assert_eq!(absent.content, None);
        assert_eq!(absent, null);
    }

    #[test]
    fn test_payload_ignores_unknown_fields() {
        let item: ItemPayload =
            serde_json::from_value(json!({"id": "1", "title": "a", "source": "email"})).unwrap();
        assert_eq!(item, ItemPayload::new("1", "a"));
    }

    #[test]
    fn test_payload_requires_id_and_title() {
        assert!(serde_json::from_value::<ItemPayload>(json!({"title": "a"})).is_err());
        assert!(serde_json::from_value::<ItemPayload>(json!({"id": "1"})).is_err());
    }

    #[test]
    fn test_payload_rejects_wrong_types() {
        assert!(serde_json::from_value::<ItemPayload>(json!({"id": 1, "title": "a"})).is_err());
        assert!(serde_json::from_value::<ItemPayload>(json!({"id": "1", "title": 2})).is_err());
        assert!(
            serde_json::from_value::<ItemPayload>(json!({"id": "1", "title": "a", "content": []}))
                .is_err()
        );
    }
}
