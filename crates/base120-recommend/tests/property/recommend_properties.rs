use base120_core::{Limit, RecommendConfig};
use base120_recommend::text::{extract_keywords, stem};
use base120_recommend::{RecommendEngine, Vocabulary};
use proptest::prelude::*;
use test_fixtures::sample_catalog;

proptest! {
    // The engine is total: any UTF-8 input must produce a result, never a panic.
    #[test]
    fn recommend_never_panics(problem in ".{0,400}", raw_limit in any::<i64>()) {
        let engine = RecommendEngine::new();
        let catalog = sample_catalog();
        let limit = Limit::from_raw(Some(raw_limit));
        let result = engine.recommend(&problem, &catalog, limit);
        prop_assert!(result.models.len() <= limit.value());
        prop_assert!(result.keywords_used.len() <= 10);
    }

    #[test]
    fn recommend_is_deterministic(problem in ".{0,200}") {
        let engine = RecommendEngine::new();
        let catalog = sample_catalog();
        let a = engine.recommend(&problem, &catalog, Limit::default());
        let b = engine.recommend(&problem, &catalog, Limit::default());
        prop_assert_eq!(a, b);
    }

    #[test]
    fn extraction_output_is_clean(text in ".{0,300}") {
        let vocabulary = Vocabulary::default_vocabulary();
        let config = RecommendConfig::default();
        let keywords = extract_keywords(&text, vocabulary.stopwords(), false, &config);
        prop_assert!(keywords.len() <= config.keyword_cap);
        for k in &keywords {
            prop_assert!(k.len() >= config.min_token_len);
            prop_assert!(!vocabulary.stopwords().contains(k.as_str()));
            prop_assert!(k.chars().all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-'));
        }
    }

    // Stemming strips at most one suffix, so output never grows.
    #[test]
    fn stem_never_lengthens(word in "[a-z]{1,30}") {
        let stemmed = stem(&word);
        prop_assert!(stemmed.len() <= word.len());
        prop_assert!(!stemmed.is_empty());
    }

    // A stripped suffix always leaves a base longer than 2 characters.
    #[test]
    fn stem_leaves_a_usable_base(word in "[a-z]{3,30}") {
        let stemmed = stem(&word);
        prop_assert!(stemmed.len() > 2 || stemmed == word);
    }
}
