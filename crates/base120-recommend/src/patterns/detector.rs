//! Match raw query keywords against curated problem patterns.

use std::collections::BTreeMap;

use base120_core::TransformationType;

use crate::text::stem;
use crate::vocabulary::Vocabulary;

/// Accumulated boost per transformation. Absent entries mean 1.0 (neutral).
///
/// Keyed by a `BTreeMap` so iteration follows the enum's declaration order —
/// that pins the reporting order of matched patterns, which a hash map would
/// leave nondeterministic.
pub type BoostMap = BTreeMap<TransformationType, f64>;

/// Per-match increment; a pattern with N distinct keyword hits contributes
/// `min(N * 0.5, pattern.boost)` to each of its transformations.
const MATCH_INCREMENT: f64 = 0.5;

/// Detect which problem patterns the query matches and accumulate boosts.
///
/// Input is the RAW (unstemmed, lowercased, stopword-filtered) keyword list.
/// A pattern keyword counts as hit if any query keyword equals it, equals its
/// stem, or overlaps it as a substring in either direction (against both the
/// raw phrase and its stem). Distinct pattern keywords are counted once each.
///
/// Boosts accumulate ADDITIVELY across patterns targeting the same
/// transformation, each starting from the 1.0 baseline.
pub fn detect_patterns(raw_keywords: &[String], vocabulary: &Vocabulary) -> BoostMap {
    let mut boosts = BoostMap::new();

    for pattern in vocabulary.patterns() {
        let mut match_count = 0usize;

        for pk in pattern.keywords {
            let stemmed_pk = stem(pk);
            let has_match = raw_keywords.iter().any(|k| {
                k == pk
                    || *k == stemmed_pk
                    || k.contains(&stemmed_pk)
                    || stemmed_pk.contains(k.as_str())
                    || pk.contains(k.as_str())
                    || k.contains(pk)
            });
            if has_match {
                match_count += 1;
            }
        }

        if match_count > 0 {
            let increment = (match_count as f64 * MATCH_INCREMENT).min(pattern.boost);
            for &transformation in pattern.transformations {
                let current = boosts.get(&transformation).copied().unwrap_or(1.0);
                boosts.insert(transformation, current + increment);
            }
        }
    }

    boosts
}

/// Boost multiplier for a transformation; 1.0 when no pattern touched it.
pub fn boost_for(boosts: &BoostMap, transformation: TransformationType) -> f64 {
    boosts.get(&transformation).copied().unwrap_or(1.0)
}

/// Display names of transformations whose accumulated weight crossed the
/// report threshold, deduplicated, in canonical transformation order.
pub fn matched_pattern_names(boosts: &BoostMap, threshold: f64) -> Vec<String> {
    boosts
        .iter()
        .filter(|(_, weight)| **weight > threshold)
        .map(|(transformation, _)| transformation.display_name().to_string())
        .collect()
}
