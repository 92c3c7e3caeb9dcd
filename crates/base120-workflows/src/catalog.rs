//! The built-in workflow catalog.
//!
//! Each workflow is a proven five-step thinking sequence. Step model codes
//! refer to the Base120 catalog; `WorkflowStep::transformation` recovers the
//! transformation family from the code prefix.

use base120_core::TransformationType;
use serde::Serialize;

/// A curated sequence of mental models for a recurring problem class.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Workflow {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    /// Trigger phrases; any substring hit routes a problem here.
    pub problem_types: &'static [&'static str],
    pub steps: &'static [WorkflowStep],
}

/// One stage of a workflow: which model to apply and why at this point.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WorkflowStep {
    pub order: u8,
    pub model_code: &'static str,
    pub purpose: &'static str,
}

impl WorkflowStep {
    /// Transformation family of this step's model, from the code prefix.
    pub fn transformation(&self) -> TransformationType {
        TransformationType::from_model_code(self.model_code)
    }
}

pub static WORKFLOWS: &[Workflow] = &[
    Workflow {
        id: "strategic-decision",
        name: "Strategic Decision Making",
        description: "Navigate complex decisions with multiple stakeholders and long-term consequences",
        problem_types: &[
            "decision", "strategy", "strategic", "choose", "choice", "option", "direction", "path",
        ],
        steps: &[
            WorkflowStep { order: 1, model_code: "DE1", purpose: "Break down to fundamental truths" },
            WorkflowStep { order: 2, model_code: "P2", purpose: "Map all stakeholders and their interests" },
            WorkflowStep { order: 3, model_code: "IN1", purpose: "Invert to find hidden risks" },
            WorkflowStep { order: 4, model_code: "SY3", purpose: "Trace second and third-order effects" },
            WorkflowStep { order: 5, model_code: "DE15", purpose: "Map decision branches and consequences" },
        ],
    },
    Workflow {
        id: "root-cause",
        name: "Root Cause Analysis",
        description: "Dig past symptoms to find the true source of problems",
        problem_types: &[
            "root", "cause", "why", "diagnose", "symptom", "underlying", "source", "origin",
            "keeps happening",
        ],
        steps: &[
            WorkflowStep { order: 1, model_code: "DE2", purpose: "Ask \"why\" repeatedly to reach root cause" },
            WorkflowStep { order: 2, model_code: "DE7", purpose: "Separate signal from noise" },
            WorkflowStep { order: 3, model_code: "IN5", purpose: "Conduct failure post-mortem" },
            WorkflowStep { order: 4, model_code: "SY1", purpose: "Map the feedback loops at play" },
            WorkflowStep { order: 5, model_code: "RE1", purpose: "Establish continuous improvement" },
        ],
    },
    Workflow {
        id: "stakeholder-alignment",
        name: "Stakeholder Alignment",
        description: "Build consensus and align diverse interests toward common goals",
        problem_types: &[
            "stakeholder", "align", "consensus", "buy-in", "convince", "persuade", "agreement",
            "politics", "conflict",
        ],
        steps: &[
            WorkflowStep { order: 1, model_code: "P2", purpose: "Identify all stakeholders and interests" },
            WorkflowStep { order: 2, model_code: "P1", purpose: "See situation from each perspective" },
            WorkflowStep { order: 3, model_code: "IN11", purpose: "Surface objections through devil's advocate" },
            WorkflowStep { order: 4, model_code: "CO3", purpose: "Find common ground and shared interests" },
            WorkflowStep { order: 5, model_code: "SY16", purpose: "Position within the broader ecosystem" },
        ],
    },
    Workflow {
        id: "innovation",
        name: "Innovation Sprint",
        description: "Generate breakthrough ideas by challenging assumptions and combining concepts",
        problem_types: &[
            "innovate", "innovation", "creative", "new", "idea", "brainstorm", "breakthrough",
            "disrupt", "invent",
        ],
        steps: &[
            WorkflowStep { order: 1, model_code: "DE1", purpose: "Question every assumption" },
            WorkflowStep { order: 2, model_code: "P3", purpose: "Reframe the problem entirely" },
            WorkflowStep { order: 3, model_code: "IN3", purpose: "Ask what would make this impossible" },
            WorkflowStep { order: 4, model_code: "CO1", purpose: "Combine ideas from different domains" },
            WorkflowStep { order: 5, model_code: "RE3", purpose: "Prototype and iterate rapidly" },
        ],
    },
    Workflow {
        id: "crisis-response",
        name: "Crisis Response",
        description: "Navigate urgent situations with clarity and systematic action",
        problem_types: &[
            "crisis", "urgent", "emergency", "fire", "disaster", "critical", "immediate",
            "failing", "broken",
        ],
        steps: &[
            WorkflowStep { order: 1, model_code: "DE4", purpose: "Focus on what you can control" },
            WorkflowStep { order: 2, model_code: "DE3", purpose: "Identify the vital few priorities" },
            WorkflowStep { order: 3, model_code: "IN2", purpose: "Define the must-not-fail constraints" },
            WorkflowStep { order: 4, model_code: "RE4", purpose: "Establish tight feedback loops" },
            WorkflowStep { order: 5, model_code: "CO7", purpose: "Build redundancy for resilience" },
        ],
    },
    Workflow {
        id: "team-performance",
        name: "Team Performance",
        description: "Diagnose and improve how teams work together",
        problem_types: &[
            "team", "collaborate", "coordination", "dysfunction", "conflict", "productivity",
            "morale", "culture",
        ],
        steps: &[
            WorkflowStep { order: 1, model_code: "SY1", purpose: "Identify the feedback loops affecting behavior" },
            WorkflowStep { order: 2, model_code: "SY9", purpose: "Understand how incentives shape actions" },
            WorkflowStep { order: 3, model_code: "P2", purpose: "Map stakeholders and their real interests" },
            WorkflowStep { order: 4, model_code: "IN8", purpose: "Surface assumptions through steel-manning" },
            WorkflowStep { order: 5, model_code: "RE11", purpose: "Build calibration and feedback mechanisms" },
        ],
    },
    Workflow {
        id: "complexity-taming",
        name: "Taming Complexity",
        description: "Make sense of complex systems with many interacting parts",
        problem_types: &[
            "complex", "complicated", "overwhelm", "confusing", "tangled", "messy", "chaos",
            "too many",
        ],
        steps: &[
            WorkflowStep { order: 1, model_code: "DE6", purpose: "Find natural boundaries and seams" },
            WorkflowStep { order: 2, model_code: "DE3", purpose: "Identify the vital few that matter most" },
            WorkflowStep { order: 3, model_code: "SY2", purpose: "Understand how parts interact" },
            WorkflowStep { order: 4, model_code: "CO4", purpose: "See the forest and the trees" },
            WorkflowStep { order: 5, model_code: "SY6", purpose: "Find leverage points for change" },
        ],
    },
    Workflow {
        id: "risk-assessment",
        name: "Risk Assessment",
        description: "Identify, evaluate, and prepare for potential failures",
        problem_types: &[
            "risk", "danger", "threat", "vulnerability", "failure", "worst case", "downside",
            "protect",
        ],
        steps: &[
            WorkflowStep { order: 1, model_code: "IN4", purpose: "Imagine everything going wrong" },
            WorkflowStep { order: 2, model_code: "IN1", purpose: "Think backwards from failure" },
            WorkflowStep { order: 3, model_code: "SY3", purpose: "Trace cascading consequences" },
            WorkflowStep { order: 4, model_code: "DE5", purpose: "Distinguish reversible from irreversible" },
            WorkflowStep { order: 5, model_code: "CO7", purpose: "Build redundancy and resilience" },
        ],
    },
    Workflow {
        id: "learning-growth",
        name: "Learning & Growth",
        description: "Accelerate personal or organizational learning",
        problem_types: &[
            "learn", "growth", "improve", "skill", "develop", "master", "better", "progress",
            "stuck",
        ],
        steps: &[
            WorkflowStep { order: 1, model_code: "RE1", purpose: "Commit to continuous small improvements" },
            WorkflowStep { order: 2, model_code: "RE4", purpose: "Create fast feedback loops" },
            WorkflowStep { order: 3, model_code: "IN5", purpose: "Learn from failures systematically" },
            WorkflowStep { order: 4, model_code: "P6", purpose: "Seek out opposing perspectives" },
            WorkflowStep { order: 5, model_code: "RE11", purpose: "Build calibration mechanisms" },
        ],
    },
    Workflow {
        id: "system-design",
        name: "System Design",
        description: "Architect robust systems that scale and adapt",
        problem_types: &[
            "design", "architect", "build", "system", "scale", "infrastructure", "platform",
            "structure",
        ],
        steps: &[
            WorkflowStep { order: 1, model_code: "DE6", purpose: "Define clean interfaces and boundaries" },
            WorkflowStep { order: 2, model_code: "CO5", purpose: "Create modular, composable parts" },
            WorkflowStep { order: 3, model_code: "SY1", purpose: "Design healthy feedback loops" },
            WorkflowStep { order: 4, model_code: "CO7", purpose: "Build in redundancy and fault tolerance" },
            WorkflowStep { order: 5, model_code: "SY7", purpose: "Consider path dependence and lock-in" },
        ],
    },
];

/// Look up a workflow by its stable id.
pub fn workflow_by_id(id: &str) -> Option<&'static Workflow> {
    WORKFLOWS.iter().find(|w| w.id == id)
}

/// Every workflow, in catalog order.
pub fn all_workflows() -> &'static [Workflow] {
    WORKFLOWS
}
