//! Keyword routing from a free-text problem to workflows.

use std::cmp::Ordering;

use tracing::debug;

use crate::catalog::{Workflow, WORKFLOWS};

/// Workflows returned when the caller supplies no limit.
pub const DEFAULT_WORKFLOW_LIMIT: usize = 3;

/// Match a problem description against the workflow catalog.
///
/// Scoring per workflow: +1 for each trigger phrase contained in the
/// lowercased problem, +0.5 more when that phrase also sits on word
/// boundaries. Workflows with score > 0 are returned best-first; the sort is
/// stable, so equal scores keep catalog order.
pub fn match_workflows(problem: &str, limit: usize) -> Vec<&'static Workflow> {
    let lowered = problem.to_lowercase();

    let mut scored: Vec<(&'static Workflow, f64)> = Vec::new();
    for workflow in WORKFLOWS {
        let mut score = 0.0;
        for keyword in workflow.problem_types {
            if lowered.contains(keyword) {
                score += 1.0;
                if contains_whole_word(&lowered, keyword) {
                    score += 0.5;
                }
            }
        }
        if score > 0.0 {
            scored.push((workflow, score));
        }
    }

    scored.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(Ordering::Equal));
    scored.truncate(limit);

    debug!(
        matched = scored.len(),
        limit,
        "workflow matching complete"
    );
    scored.into_iter().map(|(w, _)| w).collect()
}

/// True when `keyword` occurs in `text` flanked by non-word characters (or
/// the string edges). Word characters are ASCII alphanumerics and `_`; all
/// trigger phrases are ASCII, so byte positions around a hit are safe to
/// inspect directly.
fn contains_whole_word(text: &str, keyword: &str) -> bool {
    let bytes = text.as_bytes();
    let mut from = 0;
    while let Some(offset) = text[from..].find(keyword) {
        let begin = from + offset;
        let end = begin + keyword.len();
        let left_ok = begin == 0 || !is_word_byte(bytes[begin - 1]);
        let right_ok = end == bytes.len() || !is_word_byte(bytes[end]);
        if left_ok && right_ok {
            return true;
        }
        from = begin + 1;
    }
    false
}

fn is_word_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_'
}
