use base120_recommend::text::stem;

#[test]
fn strips_common_suffixes() {
    assert_eq!(stem("planning"), "plann");
    assert_eq!(stem("blocked"), "block");
    assert_eq!(stem("iteration"), "itera");
    assert_eq!(stem("improvement"), "improve");
    assert_eq!(stem("decision"), "deci");
    assert_eq!(stem("systems"), "system");
}

#[test]
fn suffix_order_is_a_tie_break() {
    // "ing" is tried before "s", so "improving" loses "ing", not "s"-ish tails.
    assert_eq!(stem("improving"), "improv");
    // "less" is tried before "s", so "restless" loses the whole suffix.
    assert_eq!(stem("restless"), "rest");
    // "tion" is tried before "al" or "s".
    assert_eq!(stem("calibration"), "calibra");
}

#[test]
fn short_words_and_short_bases_are_left_alone() {
    // Stripping must leave a base longer than 2 characters.
    assert_eq!(stem("sing"), "sing");
    assert_eq!(stem("red"), "red");
    assert_eq!(stem("bus"), "bus");
    assert_eq!(stem("is"), "is");
}

#[test]
fn unmatched_words_pass_through_lowercased() {
    assert_eq!(stem("Scale"), "scale");
    assert_eq!(stem("BREAK"), "break");
    assert_eq!(stem("complex"), "complex");
}

#[test]
fn at_most_one_suffix_is_removed() {
    // "ly" then "ful" would leave "care"; only "ly" comes off.
    assert_eq!(stem("carefully"), "careful");
    assert_eq!(stem("hopelessly"), "hopeless");
}

#[test]
fn restemming_covered_words_is_a_noop() {
    for word in [
        "planning", "blocked", "iteration", "improvement", "systems", "smaller", "feedback",
        "stakeholder",
    ] {
        let once = stem(word);
        assert_eq!(stem(&once), once, "restem changed {once:?}");
    }
}
