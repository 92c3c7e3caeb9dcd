//! Tokenization primitives: suffix stemming and keyword extraction.

pub mod keywords;
pub mod stemmer;

pub use keywords::extract_keywords;
pub use stemmer::stem;
