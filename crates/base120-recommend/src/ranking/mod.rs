//! Catalog ranking: score every model, filter, stable-sort, truncate.

pub mod scorer;

use std::cmp::Ordering;

use base120_core::{Limit, MentalModel, RecommendConfig};

use crate::expansion::KeywordSet;
use crate::patterns::BoostMap;
use crate::vocabulary::Vocabulary;

pub use scorer::score_model;

/// A catalog model with its computed relevance score.
#[derive(Debug, Clone)]
pub struct ScoredModel {
    pub model: MentalModel,
    pub score: f64,
}

/// Score the whole catalog and select the top `limit` models.
///
/// Only models with score > 0 survive. The sort is descending and STABLE:
/// equal scores keep their original catalog order, which makes the output a
/// deterministic function of the input. An empty return means the caller
/// should take the fallback path.
pub fn rank_catalog(
    catalog: &[MentalModel],
    expanded: &KeywordSet,
    boosts: &BoostMap,
    vocabulary: &Vocabulary,
    config: &RecommendConfig,
    limit: Limit,
) -> Vec<MentalModel> {
    let mut scored: Vec<ScoredModel> = catalog
        .iter()
        .map(|model| ScoredModel {
            model: model.clone(),
            score: score_model(model, expanded, boosts, vocabulary, config),
        })
        .filter(|s| s.score > 0.0)
        .collect();

    // Vec::sort_by is stable; ties preserve catalog order.
    scored.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal));
    scored.truncate(limit.value());

    scored.into_iter().map(|s| s.model).collect()
}

/// Fallback selection: the priority-1 subset in catalog order.
pub fn fallback_models(catalog: &[MentalModel], limit: Limit) -> Vec<MentalModel> {
    catalog
        .iter()
        .filter(|m| m.priority == 1)
        .take(limit.value())
        .cloned()
        .collect()
}
