//! Per-model relevance scoring.
//!
//! Three components, applied in order: pairwise keyword containment, raw
//! substring bonus, then the multiplicative transformation boost and an
//! additive priority bonus.

use base120_core::{MentalModel, RecommendConfig};

use crate::patterns::{boost_for, BoostMap};
use crate::text::extract_keywords;
use crate::vocabulary::Vocabulary;

/// Score one model against the expanded keyword set and boost map.
///
/// The pairwise loop counts every qualifying (query keyword, model keyword)
/// pair independently, and the raw-text bonus can re-reward a pair the loop
/// already counted. Both overlaps are intentional — relative ranking across
/// the catalog depends on them — and are pinned by regression test.
pub fn score_model(
    model: &MentalModel,
    expanded: &crate::expansion::KeywordSet,
    boosts: &BoostMap,
    vocabulary: &Vocabulary,
    config: &RecommendConfig,
) -> f64 {
    let model_text = format!("{} {}", model.name, model.definition).to_lowercase();
    let model_keywords = extract_keywords(&model_text, vocabulary.stopwords(), true, config);

    let mut score = 0.0;
    for keyword in expanded.iter() {
        for model_keyword in &model_keywords {
            if model_keyword.contains(keyword) || keyword.contains(model_keyword.as_str()) {
                score += 1.0;
            }
        }
        // Raw text can contain the keyword even when extraction dropped the
        // surrounding token (stopword, short token, hyphenated phrase).
        if model_text.contains(keyword) {
            score += 0.5;
        }
    }

    // Models with no keyword overlap stay at exactly 0 so the ranker's
    // score > 0 filter can route degenerate queries to the fallback. The
    // priority bonus therefore only applies once something matched, and
    // always after the multiplicative boost.
    if score > 0.0 {
        score *= boost_for(boosts, model.transformation());
        // Priority 1 → +1.0, priority 5 → +0.2.
        score += (6.0 - f64::from(model.priority)) * config.priority_bonus_step;
    }

    score
}
