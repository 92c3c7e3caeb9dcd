//! # base120-core
//!
//! Foundation crate for the Base120 mental model framework.
//! Defines the domain types, transformation taxonomy, config, constants,
//! and errors. Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod limit;
pub mod models;
pub mod transformation;

// Re-export the most commonly used types at the crate root.
pub use config::RecommendConfig;
pub use errors::{Base120Error, Base120Result};
pub use limit::Limit;
pub use models::{validate_catalog, MentalModel, RecommendationResult};
pub use transformation::TransformationType;
