//! Keyword extraction: lowercase, sanitize, split, drop noise, stem.

use std::collections::HashSet;

use base120_core::RecommendConfig;

use super::stemmer::stem;

/// Extract meaningful keywords from free text.
///
/// Steps: lowercase; replace every character outside `[a-z0-9\s-]` with a
/// space; split on whitespace runs; drop tokens shorter than
/// `config.min_token_len`; drop stopwords; optionally stem survivors.
/// Order and duplicates are preserved — deduplication happens later, in the
/// synonym expansion stage.
///
/// Extraction stops after `config.keyword_cap` surviving tokens. That cap is
/// a deliberate hardening bound on adversarially long input, keeping scoring
/// cost O(cap × catalog) rather than O(text length × catalog).
///
/// Total for any UTF-8 input: empty or all-stopword text yields an empty vec.
pub fn extract_keywords(
    text: &str,
    stopwords: &HashSet<&'static str>,
    apply_stemming: bool,
    config: &RecommendConfig,
) -> Vec<String> {
    let sanitized: String = text
        .to_lowercase()
        .chars()
        .map(|c| {
            if c.is_ascii_lowercase() || c.is_ascii_digit() || c.is_whitespace() || c == '-' {
                c
            } else {
                ' '
            }
        })
        .collect();

    let mut keywords = Vec::new();
    for token in sanitized.split_whitespace() {
        if token.len() < config.min_token_len || stopwords.contains(token) {
            continue;
        }
        if apply_stemming {
            keywords.push(stem(token));
        } else {
            keywords.push(token.to_string());
        }
        if keywords.len() >= config.keyword_cap {
            break;
        }
    }

    keywords
}
