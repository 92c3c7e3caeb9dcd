use serde::{Deserialize, Serialize};

use super::MentalModel;

/// Ranked recommendation payload, serialized directly as the API response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecommendationResult {
    /// Ranked models, at most `limit` entries.
    pub models: Vec<MentalModel>,
    /// Display names of transformations whose pattern weight crossed the
    /// report threshold. Empty on the fallback path.
    pub matched_patterns: Vec<String>,
    /// Up to 10 expanded keywords, in discovery order. Empty on fallback.
    pub keywords_used: Vec<String>,
}

impl RecommendationResult {
    /// Fallback payload: the given models with no pattern or keyword echo.
    pub fn fallback(models: Vec<MentalModel>) -> Self {
        Self {
            models,
            matched_patterns: Vec::new(),
            keywords_used: Vec::new(),
        }
    }
}
