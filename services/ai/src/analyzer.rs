use crate::models::{CategorizeResponse, ItemPayload};

pub const DEFAULT_CATEGORY: &str = "inbox";
pub const DEFAULT_CONFIDENCE: f64 = 0.6;
pub const PLACEHOLDER_VECTOR: [f64; 3] = [0.0, 0.1, 0.2];

#[derive(Debug, Clone, PartialEq)]
pub struct Categorization {
    pub category: String,
    pub confidence: f64,
}

impl From<Categorization> for CategorizeResponse {
    fn from(c: Categorization) -> Self {
        Self {
            category: c.category,
            confidence: c.confidence,
        }
    }
}

/// Produces categories, priority scores and embeddings for items.
///
/// Implementations must be pure: the same item always yields the same result.
pub trait ItemAnalyzer: Send + Sync {
    fn categorize(&self, item: &ItemPayload) -> Categorization;

    fn prioritize(&self, item: &ItemPayload) -> i64;

    fn embed(&self, item: &ItemPayload) -> Vec<f64>;
}

/// Stand-in analyzer returning fixed answers until a real model exists.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlaceholderAnalyzer;

impl ItemAnalyzer for PlaceholderAnalyzer {
    fn categorize(&self, _item: &ItemPayload) -> Categorization {
        Categorization {
            category: DEFAULT_CATEGORY.to_string(),
            confidence: DEFAULT_CONFIDENCE,
        }
    }

    fn prioritize(&self, item: &ItemPayload) -> i64 {
        let mut score = 1;
        if !item.title.is_empty() {
            score += 1;
        }
        score
    }

    fn embed(&self, _item: &ItemPayload) -> Vec<f64> {
        PLACEHOLDER_VECTOR.to_vec()
    }
}
