use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::constants::{PRIORITY_MAX, PRIORITY_MIN};
use crate::errors::{Base120Error, Base120Result};
use crate::transformation::TransformationType;

/// One catalog entry: a named, defined unit of guidance.
///
/// Loaded externally and never mutated by the engine. The code prefix implies
/// the transformation (`DE1` → Decomposition); priority 1 is most fundamental.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MentalModel {
    pub code: String,
    pub name: String,
    pub definition: String,
    pub priority: u8,
}

impl MentalModel {
    /// The transformation this model belongs to, from its code prefix.
    pub fn transformation(&self) -> TransformationType {
        TransformationType::from_model_code(&self.code)
    }
}

/// Validate an externally loaded catalog: non-empty, unique codes,
/// priorities within 1..=5.
///
/// The engine itself assumes a valid catalog; callers run this once at load
/// time, not per request.
pub fn validate_catalog(catalog: &[MentalModel]) -> Base120Result<()> {
    if catalog.is_empty() {
        return Err(Base120Error::EmptyCatalog);
    }

    let mut seen: HashSet<&str> = HashSet::with_capacity(catalog.len());
    for model in catalog {
        if !seen.insert(&model.code) {
            return Err(Base120Error::DuplicateModelCode {
                code: model.code.clone(),
            });
        }
        if model.priority < PRIORITY_MIN || model.priority > PRIORITY_MAX {
            return Err(Base120Error::PriorityOutOfRange {
                code: model.code.clone(),
                priority: model.priority,
            });
        }
    }

    Ok(())
}
