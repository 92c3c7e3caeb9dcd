//! Static vocabulary shared by all recommendation calls.
//!
//! Tables are compiled in and assembled once into a [`Vocabulary`] at engine
//! construction. There is no runtime write path; a `Vocabulary` is immutable
//! for the process lifetime, so concurrent readers need no locking.

pub mod patterns;
pub mod stopwords;
pub mod synonyms;

use std::collections::HashSet;

pub use patterns::ProblemPattern;
pub use synonyms::SynonymRow;

/// Read-only vocabulary: stopwords, synonym table, problem patterns.
#[derive(Debug, Clone)]
pub struct Vocabulary {
    stopwords: HashSet<&'static str>,
    synonyms: &'static [SynonymRow],
    patterns: &'static [ProblemPattern],
}

impl Vocabulary {
    /// Assemble the built-in vocabulary.
    pub fn default_vocabulary() -> Self {
        Self {
            stopwords: stopwords::STOPWORDS.iter().copied().collect(),
            synonyms: synonyms::SYNONYMS,
            patterns: patterns::PROBLEM_PATTERNS,
        }
    }

    pub fn stopwords(&self) -> &HashSet<&'static str> {
        &self.stopwords
    }

    pub fn synonyms(&self) -> &'static [SynonymRow] {
        self.synonyms
    }

    pub fn patterns(&self) -> &'static [ProblemPattern] {
        self.patterns
    }
}

impl Default for Vocabulary {
    fn default() -> Self {
        Self::default_vocabulary()
    }
}
