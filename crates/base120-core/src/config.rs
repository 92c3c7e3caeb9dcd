//! Recommendation engine configuration.
//!
//! All knobs default to the values in [`crate::constants`]; a deployment can
//! override them from a TOML fragment. The vocabulary tables are compiled in
//! and have no config surface, and result-count limits are owned entirely by
//! [`crate::limit::Limit`] — only knobs the scoring pipeline actually reads
//! live here.

use serde::{Deserialize, Serialize};

use crate::constants;
use crate::errors::Base120Result;

/// Tunable knobs for the recommendation engine.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RecommendConfig {
    /// Tokens shorter than this are dropped during extraction.
    pub min_token_len: usize,
    /// Hard cap on extracted keywords per request.
    pub keyword_cap: usize,
    /// Accumulated boost above which a pattern is reported as matched.
    pub pattern_report_threshold: f64,
    /// Score bonus per priority step below 6.
    pub priority_bonus_step: f64,
}

impl Default for RecommendConfig {
    fn default() -> Self {
        Self {
            min_token_len: constants::MIN_TOKEN_LEN,
            keyword_cap: constants::KEYWORD_CAP,
            pattern_report_threshold: constants::PATTERN_REPORT_THRESHOLD,
            priority_bonus_step: constants::PRIORITY_BONUS_STEP,
        }
    }
}

impl RecommendConfig {
    /// Parse a config from a TOML string. Missing fields take defaults.
    pub fn from_toml(input: &str) -> Base120Result<Self> {
        Ok(toml::from_str(input)?)
    }
}
