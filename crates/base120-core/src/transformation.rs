//! The six-transformation taxonomy of the Base120 framework.
//!
//! Every mental model belongs to exactly one transformation, derived from its
//! code prefix (`DE1` → Decomposition, `SY16` → Systems, …).

use std::fmt;

use serde::{Deserialize, Serialize};

/// A cognitive transformation category. Closed set of 6.
///
/// Declaration order matters twice: it is the serialization/reporting order
/// (a `BTreeMap` keyed by this type iterates P, IN, CO, DE, RE, SY), and it
/// mirrors the catalog's canonical domain order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum TransformationType {
    /// Shifting viewpoints and reframing problems.
    #[serde(rename = "P")]
    Perspective,
    /// Reverse thinking and contrarian analysis.
    #[serde(rename = "IN")]
    Inversion,
    /// Combining and synthesizing elements.
    #[serde(rename = "CO")]
    Composition,
    /// Breaking down complex problems.
    #[serde(rename = "DE")]
    Decomposition,
    /// Self-referential and iterative patterns.
    #[serde(rename = "RE")]
    Recursion,
    /// Holistic and interconnected thinking.
    #[serde(rename = "SY")]
    Systems,
}

impl TransformationType {
    /// All transformations, in canonical order.
    pub const ALL: [TransformationType; 6] = [
        TransformationType::Perspective,
        TransformationType::Inversion,
        TransformationType::Composition,
        TransformationType::Decomposition,
        TransformationType::Recursion,
        TransformationType::Systems,
    ];

    /// Number of transformations.
    pub const COUNT: usize = 6;

    /// Short code used as a model-code prefix.
    pub fn code(self) -> &'static str {
        match self {
            TransformationType::Perspective => "P",
            TransformationType::Inversion => "IN",
            TransformationType::Composition => "CO",
            TransformationType::Decomposition => "DE",
            TransformationType::Recursion => "RE",
            TransformationType::Systems => "SY",
        }
    }

    /// Human-readable display name, used in API responses.
    pub fn display_name(self) -> &'static str {
        match self {
            TransformationType::Perspective => "Perspective",
            TransformationType::Inversion => "Inversion",
            TransformationType::Composition => "Composition",
            TransformationType::Decomposition => "Decomposition",
            TransformationType::Recursion => "Recursion",
            TransformationType::Systems => "Systems",
        }
    }

    /// Classify a model code by its prefix.
    ///
    /// The chain is checked in a fixed priority order (`IN`, `CO`, `DE`,
    /// `RE`, `SY`, else `P`). Prefixes are not guaranteed mutually exclusive
    /// for future codes, so this stays an ordered conditional chain rather
    /// than a map lookup.
    pub fn from_model_code(code: &str) -> TransformationType {
        if code.starts_with("IN") {
            TransformationType::Inversion
        } else if code.starts_with("CO") {
            TransformationType::Composition
        } else if code.starts_with("DE") {
            TransformationType::Decomposition
        } else if code.starts_with("RE") {
            TransformationType::Recursion
        } else if code.starts_with("SY") {
            TransformationType::Systems
        } else {
            TransformationType::Perspective
        }
    }
}

impl fmt::Display for TransformationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}
