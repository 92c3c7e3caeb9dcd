//! Crude suffix-stripping stemmer.
//!
//! Not a Porter stemmer: one pass, first matching suffix wins, no
//! recoding. Good enough to fold "planning"/"planned"/"plans" onto "plan"
//! for vocabulary matching, and cheap enough to call in inner loops.

/// Suffixes tried strictly in this order. The order is a tie-break rule
/// ("tion" must win over "s", "ing" over "er"), not an optimization.
const SUFFIXES: [&str; 17] = [
    "ing", "ed", "ly", "tion", "sion", "ness", "ment", "able", "ible", "ful", "less", "ous",
    "ive", "al", "er", "est", "s",
];

/// Stem a single word.
///
/// Lowercases the input, then strips the first suffix in [`SUFFIXES`] that
/// leaves a base longer than 2 characters. At most one suffix is removed;
/// words with no qualifying suffix come back (lowercased) unchanged.
pub fn stem(word: &str) -> String {
    let lowered = word.to_lowercase();

    for suffix in SUFFIXES {
        if lowered.len() > suffix.len() + 2 && lowered.ends_with(suffix) {
            return lowered[..lowered.len() - suffix.len()].to_string();
        }
    }

    lowered
}
