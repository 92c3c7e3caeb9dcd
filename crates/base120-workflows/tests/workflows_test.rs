use base120_core::TransformationType;
use base120_workflows::{
    all_workflows, match_workflows, workflow_by_id, DEFAULT_WORKFLOW_LIMIT,
};
use proptest::prelude::*;

#[test]
fn catalog_is_well_formed() {
    let workflows = all_workflows();
    assert_eq!(workflows.len(), 10);

    let mut ids: Vec<&str> = workflows.iter().map(|w| w.id).collect();
    ids.sort_unstable();
    ids.dedup();
    assert_eq!(ids.len(), 10, "workflow ids must be unique");

    for workflow in workflows {
        assert!(!workflow.problem_types.is_empty());
        assert_eq!(workflow.steps.len(), 5, "{} step count", workflow.id);
        for (i, step) in workflow.steps.iter().enumerate() {
            assert_eq!(step.order as usize, i + 1, "{} step order", workflow.id);
            assert!(!step.purpose.is_empty());
        }
    }
}

#[test]
fn lookup_by_id() {
    let workflow = workflow_by_id("root-cause").unwrap();
    assert_eq!(workflow.name, "Root Cause Analysis");
    assert!(workflow_by_id("no-such-workflow").is_none());
}

#[test]
fn step_codes_map_to_transformations() {
    let workflow = workflow_by_id("strategic-decision").unwrap();
    let families: Vec<TransformationType> =
        workflow.steps.iter().map(|s| s.transformation()).collect();
    assert_eq!(
        families,
        vec![
            TransformationType::Decomposition,
            TransformationType::Perspective,
            TransformationType::Inversion,
            TransformationType::Systems,
            TransformationType::Decomposition,
        ]
    );
}

#[test]
fn routes_a_strategic_problem() {
    let matched = match_workflows(
        "we need to make a strategic decision about which direction to take",
        DEFAULT_WORKFLOW_LIMIT,
    );
    let ids: Vec<&str> = matched.iter().map(|w| w.id).collect();
    // "strategic", "decision", and "direction" all hit on word boundaries.
    assert_eq!(ids, vec!["strategic-decision"]);
}

#[test]
fn matching_is_case_insensitive() {
    let matched = match_workflows("STRATEGIC DECISION", DEFAULT_WORKFLOW_LIMIT);
    assert_eq!(matched[0].id, "strategic-decision");
}

#[test]
fn whole_word_hits_outrank_substring_hits() {
    // "risk" sits on word boundaries (1.5); "option" only appears inside
    // "optional" (1.0), so risk-assessment ranks first despite coming later
    // in the catalog.
    let matched = match_workflows(
        "there is risk in these optional extras",
        DEFAULT_WORKFLOW_LIMIT,
    );
    let ids: Vec<&str> = matched.iter().map(|w| w.id).collect();
    assert_eq!(ids, vec!["risk-assessment", "strategic-decision"]);
}

#[test]
fn multi_word_triggers_match_across_spaces() {
    let matched = match_workflows("this keeps happening every week", DEFAULT_WORKFLOW_LIMIT);
    assert_eq!(matched[0].id, "root-cause");
}

#[test]
fn equal_scores_keep_catalog_order_and_limit_truncates() {
    // "crisis", "team", and "risk" each score 1.5 for their workflow.
    let problem = "our team is in crisis and at risk";
    let matched = match_workflows(problem, DEFAULT_WORKFLOW_LIMIT);
    let ids: Vec<&str> = matched.iter().map(|w| w.id).collect();
    assert_eq!(
        ids,
        vec!["crisis-response", "team-performance", "risk-assessment"]
    );

    let matched = match_workflows(problem, 1);
    assert_eq!(matched.len(), 1);
    assert_eq!(matched[0].id, "crisis-response");
}

#[test]
fn unmatched_problems_return_nothing() {
    assert!(match_workflows("xyzzy", DEFAULT_WORKFLOW_LIMIT).is_empty());
    assert!(match_workflows("", DEFAULT_WORKFLOW_LIMIT).is_empty());
}

#[test]
fn workflows_serialize_with_stable_field_names() {
    let workflow = workflow_by_id("system-design").unwrap();
    let json = serde_json::to_value(workflow).unwrap();
    assert_eq!(json["id"], "system-design");
    assert_eq!(json["steps"][0]["model_code"], "DE6");
    assert_eq!(json["steps"][0]["order"], 1);
    assert!(json["problem_types"].is_array());
}

proptest! {
    #[test]
    fn matcher_never_panics(problem in ".{0,300}", limit in 0usize..10) {
        let matched = match_workflows(&problem, limit);
        prop_assert!(matched.len() <= limit);
    }
}
