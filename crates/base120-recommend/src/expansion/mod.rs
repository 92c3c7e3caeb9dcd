//! Synonym expansion of the stemmed query keyword set.

pub mod keyword_set;
pub mod synonym_expander;

pub use keyword_set::KeywordSet;
pub use synonym_expander::expand;
