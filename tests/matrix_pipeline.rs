//! Integration tests for the decision matrix pipeline.
//!
//! These tests drive the public API the way a presentation layer would:
//! 1. Edit criteria and options in a `DecisionMatrix`
//! 2. Evaluate after every change (normalize weights, score, rank, validate)
//! 3. Surface each notice once through a `NotificationLatch`

use decision_matrix::application::{evaluate, DecisionMatrix, Notice, NotificationLatch};
use decision_matrix::domain::foundation::{numeric, CriterionId, CriterionType, OptionId};
use decision_matrix::domain::matrix::{
    Criterion, DecisionOption, FindingKind, ScoringEngine, Validator, WeightNormalizer,
};

const EPS: f64 = 1e-9;

// =============================================================================
// Helpers
// =============================================================================

fn ranked_names(matrix: &DecisionMatrix) -> Vec<String> {
    matrix
        .evaluate(&Validator::new())
        .ranked
        .iter()
        .map(|s| s.name().to_string())
        .collect()
}

// =============================================================================
// Scenarios
// =============================================================================

#[test]
fn trip_scenario_end_to_end() {
    let matrix = DecisionMatrix::sample();
    let evaluation = matrix.evaluate(&Validator::new());

    let tokyo = &evaluation.ranked[0];
    let paris = &evaluation.ranked[1];
    assert_eq!(tokyo.name(), "Tokyo");
    assert_eq!(paris.name(), "Paris");
    assert!((tokyo.score - 0.7).abs() < EPS);
    assert!((paris.score - 0.3).abs() < EPS);

    assert_eq!(paris.breakdown_for("c1").unwrap().normalized, 1.0);
    assert_eq!(tokyo.breakdown_for("c1").unwrap().normalized, 0.0);
    assert!((tokyo.breakdown_for("c3").unwrap().contribution - 0.4).abs() < EPS);

    assert!(evaluation.report.valid);
    assert!(evaluation.report.findings().is_empty());
}

#[test]
fn single_option_scores_one() {
    let mut matrix = DecisionMatrix::sample();
    matrix.remove_option(&OptionId::new("o2")).unwrap();

    let evaluation = matrix.evaluate(&Validator::new());
    assert_eq!(evaluation.ranked.len(), 1);
    assert!((evaluation.ranked[0].score - 1.0).abs() < EPS);
}

#[test]
fn disabling_criteria_changes_the_outcome() {
    let mut matrix = DecisionMatrix::sample();
    matrix.set_enabled(&CriterionId::new("c2"), false).unwrap();
    matrix.set_enabled(&CriterionId::new("c3"), false).unwrap();

    // Only Budget remains: the cheaper option wins outright.
    assert_eq!(ranked_names(&matrix), vec!["Paris", "Tokyo"]);

    let evaluation = matrix.evaluate(&Validator::new());
    assert!(evaluation.report.has(FindingKind::Dominance));
    assert_eq!(evaluation.criteria.len(), 1);
    assert!((evaluation.criteria.weight_sum() - 1.0).abs() < EPS);
}

#[test]
fn flipping_criterion_direction_inverts_its_normalization() {
    let mut matrix = DecisionMatrix::sample();
    matrix
        .set_criterion_type(&CriterionId::new("c1"), CriterionType::Benefit)
        .unwrap();

    let evaluation = matrix.evaluate(&Validator::new());
    let tokyo = evaluation
        .ranked
        .iter()
        .find(|s| s.id() == &OptionId::new("o2"))
        .unwrap();
    assert_eq!(tokyo.breakdown_for("c1").unwrap().normalized, 1.0);
    assert!((tokyo.score - 1.0).abs() < EPS);
}

#[test]
fn degenerate_configurations_still_produce_scores() {
    let mut matrix = DecisionMatrix::sample();
    for id in ["c1", "c2", "c3"] {
        matrix.set_weight(&CriterionId::new(id), 0.0).unwrap();
    }

    let evaluation = matrix.evaluate(&Validator::new());
    assert!(evaluation.report.zero_total_weight);
    assert!(!evaluation.report.valid);
    assert!(evaluation.ranked.iter().all(|s| s.score == 0.0));
    // Equal scores keep input order.
    assert_eq!(evaluation.winner().unwrap().name(), "Paris");
}

#[test]
fn new_rows_follow_form_defaults() {
    let mut matrix = DecisionMatrix::sample();
    let criterion = matrix.add_criterion();
    let option = matrix.add_option();

    let evaluation = matrix.evaluate(&Validator::new());
    assert_eq!(evaluation.ranked.len(), 3);
    assert_eq!(
        matrix.option(&option).unwrap().values.raw(criterion.as_str()),
        Some(0.0)
    );
    // The new criterion has weight 0, so it contributes nothing.
    assert!(evaluation
        .ranked
        .iter()
        .all(|s| s.breakdown_for(criterion.as_str()).unwrap().contribution == 0.0));
}

#[test]
fn form_input_is_coerced_consistently() {
    let criteria = vec![
        Criterion::benefit("c1", "Speed", numeric::parse_input("2")),
        Criterion::benefit("c2", "Comfort", numeric::parse_input("two")),
    ];
    let options = vec![
        DecisionOption::new("o1", "Car").with_value("c1", numeric::parse_input("120")),
        DecisionOption::new("o2", "Bike").with_value("c1", numeric::parse_input("")),
    ];

    let evaluation = evaluate(&criteria, &options, &Validator::new());
    assert!(evaluation.report.invalid_weight);
    assert_eq!(evaluation.criteria.get("c2").unwrap().weight, 0.0);
    assert_eq!(evaluation.winner().unwrap().name(), "Car");
    assert!(evaluation.ranked.iter().all(|s| s.score.is_finite()));
}

#[test]
fn extreme_magnitudes_rank_like_ordinary_ones() {
    let criteria = vec![
        Criterion::benefit("c1", "Reach", 1e308),
        Criterion::benefit("c2", "Depth", 1e308),
    ];
    let options = vec![
        DecisionOption::new("o1", "Low")
            .with_value("c1", -1e308)
            .with_value("c2", -1e308),
        DecisionOption::new("o2", "High")
            .with_value("c1", 1e308)
            .with_value("c2", 1e308),
    ];

    let evaluation = evaluate(&criteria, &options, &Validator::new());
    assert!(evaluation.report.valid);
    assert!((evaluation.criteria.weight_sum() - 1.0).abs() < EPS);
    assert_eq!(evaluation.winner().unwrap().name(), "High");
    assert!((evaluation.ranked[0].score - 1.0).abs() < EPS);
    assert_eq!(evaluation.ranked[1].score, 0.0);
}

#[test]
fn pipeline_stages_compose() {
    let matrix = DecisionMatrix::sample();
    let normalized = WeightNormalizer::normalize(matrix.criteria());
    let scored = ScoringEngine::score_options(matrix.options(), &normalized);
    let ranked = ScoringEngine::rank(&scored);

    assert_eq!(ranked, matrix.evaluate(&Validator::new()).ranked);
    // Scoring keeps input order; ranking returns a new order.
    assert_eq!(scored[0].name(), "Paris");
    assert_eq!(ranked[0].name(), "Tokyo");
}

#[test]
fn json_payload_from_a_form_is_scored() {
    let criteria: Vec<Criterion> = serde_json::from_str(
        r#"[
            {"id":"c1","name":"Budget","weight":"0.3","type":"cost"},
            {"id":"c2","name":"Weather","weight":0.3,"type":"benefit"},
            {"id":"c3","name":"Safety","weight":0.4,"type":"benefit","enabled":true}
        ]"#,
    )
    .unwrap();
    let options: Vec<DecisionOption> = serde_json::from_str(
        r#"[
            {"id":"o1","name":"Paris","values":{"c1":1500,"c2":8,"c3":7}},
            {"id":"o2","name":"Tokyo","values":{"c1":"2000","c2":9,"c3":9}}
        ]"#,
    )
    .unwrap();

    let evaluation = evaluate(&criteria, &options, &Validator::new());
    assert_eq!(evaluation.winner().unwrap().id(), &OptionId::new("o2"));

    let json = serde_json::to_value(&evaluation.ranked[0]).unwrap();
    assert_eq!(json["name"], "Tokyo");
    assert!(json["breakdown"]["c2"]["contribution"].is_number());
}

// =============================================================================
// Notifications
// =============================================================================

#[test]
fn identical_options_notice_is_shown_once_until_resolved() {
    let mut matrix = DecisionMatrix::sample();
    let mut latch = NotificationLatch::new();
    let validator = Validator::new();

    assert!(latch
        .observe_evaluation(&matrix.evaluate(&validator))
        .is_empty());

    // Make Tokyo a copy of Paris.
    let tokyo = OptionId::new("o2");
    for (c, v) in [("c1", 1500.0), ("c2", 8.0), ("c3", 7.0)] {
        matrix.set_value(&tokyo, &CriterionId::new(c), v).unwrap();
    }
    assert_eq!(
        latch.observe_evaluation(&matrix.evaluate(&validator)),
        vec![Notice::IdenticalOptions]
    );

    // Re-evaluating without a fix does not repeat the notice.
    assert!(latch
        .observe_evaluation(&matrix.evaluate(&validator))
        .is_empty());

    // Fix, then break again: the notice comes back.
    matrix.set_value(&tokyo, &CriterionId::new("c1"), 1600.0).unwrap();
    assert!(latch
        .observe_evaluation(&matrix.evaluate(&validator))
        .is_empty());
    matrix.set_value(&tokyo, &CriterionId::new("c1"), 1500.0).unwrap();
    assert_eq!(
        latch.observe_evaluation(&matrix.evaluate(&validator)),
        vec![Notice::IdenticalOptions]
    );
}

#[test]
fn clearing_everything_raises_no_enabled_criteria() {
    let mut matrix = DecisionMatrix::sample();
    let mut latch = NotificationLatch::new();
    matrix.clear();

    let evaluation = matrix.evaluate(&Validator::new());
    assert!(evaluation.ranked.is_empty());
    assert_eq!(
        latch.observe_evaluation(&evaluation),
        vec![Notice::Finding(FindingKind::NoEnabledCriteria)]
    );
}
