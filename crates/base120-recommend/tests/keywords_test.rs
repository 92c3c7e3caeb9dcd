use base120_core::RecommendConfig;
use base120_recommend::text::extract_keywords;
use base120_recommend::Vocabulary;

fn extract(text: &str, apply_stemming: bool) -> Vec<String> {
    let vocabulary = Vocabulary::default_vocabulary();
    let config = RecommendConfig::default();
    extract_keywords(text, vocabulary.stopwords(), apply_stemming, &config)
}

#[test]
fn lowercases_and_strips_punctuation() {
    assert_eq!(extract("Hello, World!", false), vec!["hello", "world"]);
    assert_eq!(
        extract("Scale?! (the) [platform]...", false),
        vec!["scale", "platform"]
    );
}

#[test]
fn non_ascii_characters_become_separators() {
    assert_eq!(extract("caf\u{e9} scene", false), vec!["caf", "scene"]);
    assert_eq!(extract("\u{3053}\u{3093}\u{306b}\u{3061}\u{306f}", false), Vec::<String>::new());
}

#[test]
fn drops_stopwords_and_short_tokens() {
    // "i", "to", "down", "this" are stopwords; "need" is in the filler tail.
    assert_eq!(
        extract("I need to break down this complex problem", false),
        vec!["break", "complex", "problem"]
    );
    assert_eq!(extract("go at it", false), Vec::<String>::new());
}

#[test]
fn hyphens_and_digits_survive() {
    assert_eq!(
        extract("trade-off analysis 8020", false),
        vec!["trade-off", "analysis", "8020"]
    );
}

#[test]
fn duplicates_and_order_are_preserved() {
    assert_eq!(
        extract("scale scale scale", false),
        vec!["scale", "scale", "scale"]
    );
    assert_eq!(
        extract("platform before scale", false),
        vec!["platform", "scale"]
    );
}

#[test]
fn stemming_is_applied_when_requested() {
    assert_eq!(
        extract("planning iterations", true),
        vec!["plann", "iteration"]
    );
    assert_eq!(
        extract("planning iterations", false),
        vec!["planning", "iterations"]
    );
}

#[test]
fn empty_and_whitespace_input_yield_empty() {
    assert_eq!(extract("", false), Vec::<String>::new());
    assert_eq!(extract("   \t\n  ", true), Vec::<String>::new());
}

#[test]
fn keyword_cap_bounds_output() {
    let vocabulary = Vocabulary::default_vocabulary();
    let config = RecommendConfig {
        keyword_cap: 4,
        ..RecommendConfig::default()
    };
    let text = "alpha bravo charlie delta echo foxtrot golf";
    let keywords = extract_keywords(text, vocabulary.stopwords(), false, &config);
    assert_eq!(keywords, vec!["alpha", "bravo", "charlie", "delta"]);

    let long_input = "scale ".repeat(10_000);
    let config = RecommendConfig::default();
    let keywords = extract_keywords(&long_input, vocabulary.stopwords(), false, &config);
    assert_eq!(keywords.len(), config.keyword_cap);
}
