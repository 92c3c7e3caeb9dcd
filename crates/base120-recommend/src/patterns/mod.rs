//! Problem-pattern detection and per-transformation boost accumulation.

pub mod detector;

pub use detector::{boost_for, detect_patterns, matched_pattern_names, BoostMap};
