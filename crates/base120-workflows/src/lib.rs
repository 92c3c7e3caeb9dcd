//! # base120-workflows
//!
//! Curated multi-step thinking workflows: fixed sequences of mental models
//! that work well together for a recurring class of problem, plus a keyword
//! matcher that routes a free-text problem to the best-fitting workflows.
//!
//! Workflows are compiled in and immutable. The matcher is independent of the
//! recommendation engine's vocabulary: workflow routing keys on a small set of
//! trigger phrases per workflow, not on the synonym or stopword tables.

pub mod catalog;
pub mod matcher;

pub use catalog::{all_workflows, workflow_by_id, Workflow, WorkflowStep};
pub use matcher::{match_workflows, DEFAULT_WORKFLOW_LIMIT};
