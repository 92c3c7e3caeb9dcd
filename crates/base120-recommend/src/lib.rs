//! # base120-recommend
//!
//! Text-based recommendation engine for the Base120 mental model catalog.
//!
//! Pipeline: problem text → keyword extraction (raw + stemmed) → synonym
//! expansion (stemmed) + problem-pattern detection (raw) → per-model scoring
//! with transformation boosts → stable ranking with a priority-1 fallback.
//!
//! The engine is a pure function of `(text, catalog, limit, static tables)`:
//! no I/O, no interior mutability, safe for unlimited concurrent callers.

pub mod engine;
pub mod expansion;
pub mod patterns;
pub mod ranking;
pub mod text;
pub mod vocabulary;

pub use engine::RecommendEngine;
pub use vocabulary::Vocabulary;
