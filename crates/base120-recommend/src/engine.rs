//! RecommendEngine: orchestrates the full recommendation pipeline.
//!
//! problem text → keyword extraction (raw + stemmed) → synonym expansion +
//! pattern detection → per-model scoring → stable ranking → result, with a
//! priority-1 fallback when nothing in the catalog scores above zero.

use base120_core::constants::KEYWORDS_USED_SAMPLE;
use base120_core::{Limit, MentalModel, RecommendConfig, RecommendationResult};
use tracing::{debug, info};

use crate::expansion;
use crate::patterns;
use crate::ranking;
use crate::text::extract_keywords;
use crate::vocabulary::Vocabulary;

/// The recommendation engine.
///
/// Holds the immutable vocabulary and config; carries no per-request state.
/// `recommend` is a pure function of its arguments, so one engine can serve
/// any number of concurrent callers without locks.
pub struct RecommendEngine {
    vocabulary: Vocabulary,
    config: RecommendConfig,
}

impl RecommendEngine {
    /// Engine with the built-in vocabulary and default config.
    pub fn new() -> Self {
        Self::with_config(RecommendConfig::default())
    }

    pub fn with_config(config: RecommendConfig) -> Self {
        Self {
            vocabulary: Vocabulary::default_vocabulary(),
            config,
        }
    }

    pub fn config(&self) -> &RecommendConfig {
        &self.config
    }

    pub fn vocabulary(&self) -> &Vocabulary {
        &self.vocabulary
    }

    /// Recommend up to `limit` catalog models for a problem description.
    ///
    /// Total for any UTF-8 input: degenerate text (empty, all stopwords, no
    /// vocabulary overlap) routes to the priority-1 fallback rather than
    /// erroring. The catalog is read-only; its order breaks score ties.
    pub fn recommend(
        &self,
        problem: &str,
        catalog: &[MentalModel],
        limit: Limit,
    ) -> RecommendationResult {
        // Step 1: Extract keywords twice — raw for pattern detection,
        // stemmed for model matching.
        let raw_keywords =
            extract_keywords(problem, self.vocabulary.stopwords(), false, &self.config);
        let stemmed_keywords =
            extract_keywords(problem, self.vocabulary.stopwords(), true, &self.config);
        debug!(
            raw = raw_keywords.len(),
            stemmed = stemmed_keywords.len(),
            "extracted keywords"
        );

        // Step 2: Expand the stemmed set with synonyms.
        let expanded = expansion::expand(&stemmed_keywords, &self.vocabulary);

        // Step 3: Detect problem patterns on the raw keywords.
        let boosts = patterns::detect_patterns(&raw_keywords, &self.vocabulary);
        debug!(
            expanded = expanded.len(),
            boosted_transformations = boosts.len(),
            "expansion and pattern detection complete"
        );

        // Step 4: Score and rank the catalog.
        let ranked = ranking::rank_catalog(
            catalog,
            &expanded,
            &boosts,
            &self.vocabulary,
            &self.config,
            limit,
        );

        // Step 5: Fallback to the most fundamental models when nothing scored.
        if ranked.is_empty() {
            let fallback = ranking::fallback_models(catalog, limit);
            info!(
                models = fallback.len(),
                "no catalog matches, returning priority-1 fallback"
            );
            return RecommendationResult::fallback(fallback);
        }

        let matched_patterns =
            patterns::matched_pattern_names(&boosts, self.config.pattern_report_threshold);
        info!(
            models = ranked.len(),
            patterns = matched_patterns.len(),
            "recommendation complete"
        );

        RecommendationResult {
            models: ranked,
            matched_patterns,
            keywords_used: expanded.sample(KEYWORDS_USED_SAMPLE),
        }
    }
}

impl Default for RecommendEngine {
    fn default() -> Self {
        Self::new()
    }
}
