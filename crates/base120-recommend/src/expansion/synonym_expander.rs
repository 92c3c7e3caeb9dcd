//! Grow a stemmed keyword set using the synonym table.

use crate::text::stem;
use crate::vocabulary::Vocabulary;

use super::KeywordSet;

/// Expand stemmed query keywords with synonym-table discoveries.
///
/// The result set is seeded with the input keywords (insertion order
/// preserved, duplicates collapsed). A keyword triggers a row when it equals
/// the row's base or any of its synonyms LITERALLY — the keyword arrives
/// stemmed but the table stores unstemmed terms, so inflected queries can
/// miss rows their plain forms would hit ("improving" stems to "improv",
/// which matches neither "improve" nor its synonyms). That asymmetry is
/// intentional, pinned by test, and must not be "fixed" casually: it shifts
/// relative scores across the whole catalog.
///
/// Triggered rows insert the stemmed base and all stemmed synonyms.
pub fn expand(stemmed_keywords: &[String], vocabulary: &Vocabulary) -> KeywordSet {
    let mut expanded = KeywordSet::new();
    for keyword in stemmed_keywords {
        expanded.insert(keyword.clone());
    }

    for keyword in stemmed_keywords {
        for row in vocabulary.synonyms() {
            let triggered =
                row.base == keyword || row.synonyms.iter().any(|s| s == keyword);
            if triggered {
                expanded.insert(stem(row.base));
                for synonym in row.synonyms {
                    expanded.insert(stem(synonym));
                }
            }
        }
    }

    expanded
}
