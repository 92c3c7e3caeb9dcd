//! Curated problem patterns.
//!
//! Each pattern maps a cluster of problem-description keywords to the
//! transformations that address it. Single-transformation patterns carry a
//! 2.0 boost ceiling; cross-cutting patterns (decisions, communication,
//! planning) carry 1.5.

use base120_core::TransformationType;

/// One problem pattern: trigger keywords, target transformations, boost cap.
#[derive(Debug, Clone, Copy)]
pub struct ProblemPattern {
    /// Human label, used in logs.
    pub name: &'static str,
    /// Raw (unstemmed) trigger phrases.
    pub keywords: &'static [&'static str],
    /// Transformations boosted when this pattern fires.
    pub transformations: &'static [TransformationType],
    /// Ceiling on the accumulated increment this pattern may contribute.
    /// Invariant: >= 1.
    pub boost: f64,
}

pub(crate) const PROBLEM_PATTERNS: &[ProblemPattern] = &[
    // Need to see the situation differently.
    ProblemPattern {
        name: "perspective",
        keywords: &[
            "perspective", "viewpoint", "angle", "frame", "reframe", "see", "view",
            "understand", "interpret", "meaning", "context", "stakeholder", "audience",
            "empathy", "bias", "assumption", "blind", "spot",
        ],
        transformations: &[TransformationType::Perspective],
        boost: 2.0,
    },
    // Stuck, need to flip the approach.
    ProblemPattern {
        name: "inversion",
        keywords: &[
            "stuck", "blocked", "obstacle", "barrier", "cant", "unable", "fail", "failure",
            "wrong", "mistake", "error", "avoid", "prevent", "risk", "worst", "opposite",
            "reverse", "flip", "invert", "negative", "critique", "devil", "advocate",
            "premortem", "postmortem",
        ],
        transformations: &[TransformationType::Inversion],
        boost: 2.0,
    },
    // Need to combine or integrate parts.
    ProblemPattern {
        name: "composition",
        keywords: &[
            "combine", "integrate", "merge", "synthesize", "connect", "link", "bridge",
            "unify", "together", "collaborate", "team", "synergy", "holistic", "whole",
            "complete", "network", "ecosystem", "platform",
        ],
        transformations: &[TransformationType::Composition],
        boost: 2.0,
    },
    // Complexity that needs breaking down.
    ProblemPattern {
        name: "decomposition",
        keywords: &[
            "complex", "complicated", "overwhelming", "confusing", "unclear", "break",
            "breakdown", "analyze", "analysis", "dissect", "separate", "isolate", "root",
            "cause", "why", "factor", "component", "part", "piece", "simplify",
            "prioritize", "priority", "important", "critical", "essential", "pareto",
            "80/20",
        ],
        transformations: &[TransformationType::Decomposition],
        boost: 2.0,
    },
    // Improvement, learning, iteration.
    ProblemPattern {
        name: "recursion",
        keywords: &[
            "improve", "improvement", "better", "iterate", "iteration", "learn",
            "learning", "feedback", "loop", "cycle", "repeat", "refine", "optimize",
            "continuous", "progress", "grow", "growth", "develop", "evolve", "adapt",
            "calibrate", "update", "version",
        ],
        transformations: &[TransformationType::Recursion],
        boost: 2.0,
    },
    // Coordination, strategy, big picture.
    ProblemPattern {
        name: "systems",
        keywords: &[
            "system", "systems", "strategy", "strategic", "coordinate", "coordination",
            "align", "alignment", "govern", "governance", "policy", "incentive",
            "leverage", "scale", "organization", "organizational", "structure",
            "architecture", "design", "ecosystem", "dynamics", "equilibrium", "tipping",
            "threshold", "emergent", "emergence",
        ],
        transformations: &[TransformationType::Systems],
        boost: 2.0,
    },
    // Decision-making spans several transformations.
    ProblemPattern {
        name: "decision-making",
        keywords: &[
            "decide", "decision", "choice", "choose", "option", "alternative",
            "tradeoff", "trade-off", "evaluate", "compare", "weigh", "uncertain",
            "uncertainty", "risk",
        ],
        transformations: &[
            TransformationType::Decomposition,
            TransformationType::Inversion,
            TransformationType::Perspective,
        ],
        boost: 1.5,
    },
    ProblemPattern {
        name: "communication",
        keywords: &[
            "communicate", "communication", "explain", "present", "presentation",
            "convince", "persuade", "narrative", "story", "message", "audience",
        ],
        transformations: &[
            TransformationType::Perspective,
            TransformationType::Composition,
        ],
        boost: 1.5,
    },
    ProblemPattern {
        name: "planning",
        keywords: &[
            "plan", "planning", "roadmap", "timeline", "schedule", "milestone",
            "project", "execute", "execution", "implement", "implementation",
        ],
        transformations: &[
            TransformationType::Decomposition,
            TransformationType::Recursion,
            TransformationType::Systems,
        ],
        boost: 1.5,
    },
];
