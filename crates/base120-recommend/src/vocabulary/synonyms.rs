//! Base-term → synonym table for query expansion.
//!
//! Table literals are stored unstemmed; matching compares the (stemmed)
//! query keyword against these literals, and insertions into the expanded
//! set are stemmed. See the expander for the exact semantics.

/// One synonym row: a base term and its related terms.
#[derive(Debug, Clone, Copy)]
pub struct SynonymRow {
    pub base: &'static str,
    pub synonyms: &'static [&'static str],
}

pub(crate) const SYNONYMS: &[SynonymRow] = &[
    SynonymRow {
        base: "problem",
        synonyms: &["issue", "challenge", "difficulty", "trouble", "obstacle"],
    },
    SynonymRow {
        base: "solution",
        synonyms: &["answer", "fix", "resolution", "remedy"],
    },
    SynonymRow {
        base: "analyze",
        synonyms: &["examine", "study", "investigate", "assess", "evaluate"],
    },
    SynonymRow {
        base: "understand",
        synonyms: &["comprehend", "grasp", "fathom", "perceive"],
    },
    SynonymRow {
        base: "decide",
        synonyms: &["choose", "determine", "select", "pick"],
    },
    SynonymRow {
        base: "improve",
        synonyms: &["enhance", "better", "upgrade", "optimize", "refine"],
    },
    SynonymRow {
        base: "break",
        synonyms: &["decompose", "divide", "split", "separate", "dissect"],
    },
    SynonymRow {
        base: "combine",
        synonyms: &["merge", "integrate", "unite", "synthesize", "blend"],
    },
    SynonymRow {
        base: "stuck",
        synonyms: &["blocked", "stalled", "halted", "trapped", "gridlocked"],
    },
    SynonymRow {
        base: "complex",
        synonyms: &["complicated", "intricate", "convoluted", "elaborate"],
    },
    SynonymRow {
        base: "simple",
        synonyms: &["basic", "straightforward", "elementary", "fundamental"],
    },
    SynonymRow {
        base: "strategy",
        synonyms: &["plan", "approach", "tactic", "method"],
    },
    SynonymRow {
        base: "team",
        synonyms: &["group", "crew", "squad", "staff", "colleagues"],
    },
    SynonymRow {
        base: "goal",
        synonyms: &["objective", "target", "aim", "purpose", "mission"],
    },
    SynonymRow {
        base: "feedback",
        synonyms: &["response", "input", "reaction", "critique"],
    },
    SynonymRow {
        base: "risk",
        synonyms: &["danger", "threat", "hazard", "peril"],
    },
    SynonymRow {
        base: "opportunity",
        synonyms: &["chance", "possibility", "opening", "prospect"],
    },
];
