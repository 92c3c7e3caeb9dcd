//! Workspace-wide error types.
//!
//! The recommendation path itself is total — it always returns a result for
//! any UTF-8 input. Errors exist only at the edges: catalog validation at
//! load time and config parsing.

/// Result alias used across the workspace.
pub type Base120Result<T> = Result<T, Base120Error>;

/// Base120 error type.
#[derive(Debug, thiserror::Error)]
pub enum Base120Error {
    #[error("catalog is empty")]
    EmptyCatalog,

    #[error("duplicate model code in catalog: {code}")]
    DuplicateModelCode { code: String },

    #[error("model {code} has priority {priority}, expected 1..=5")]
    PriorityOutOfRange { code: String, priority: u8 },

    #[error("failed to parse config: {0}")]
    ConfigParse(#[from] toml::de::Error),
}
