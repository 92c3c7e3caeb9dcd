pub mod mental_model;
pub mod recommendation;

pub use mental_model::{validate_catalog, MentalModel};
pub use recommendation::RecommendationResult;
