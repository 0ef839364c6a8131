use lineupforge_core::{Candidate, CandidatePool, FlexRule, PositionRule, RuleSet};
use lineupforge_test::{classic_rules, classic_slate, tiny_rules, tiny_slate, CLASSIC_BUDGET};

use crate::builder::{ModelBuilder, ModelError};
use crate::constraint::{ConstraintKind, Relation};

#[test]
fn objective_follows_pool_order() {
    let pool = tiny_slate();
    let rules = tiny_rules();
    let model = ModelBuilder::new(&pool, &rules, 15_000).build().unwrap();
    assert_eq!(model.variable_count(), 4);
    assert_eq!(model.objective(), [20.0, 15.0, 12.0, 25.0]);
}

#[test]
fn constraints_follow_declaration_order() {
    let pool = tiny_slate();
    let rules = tiny_rules();
    let model = ModelBuilder::new(&pool, &rules, 15_000).build().unwrap();

    let shapes: Vec<(&ConstraintKind, Relation, f64)> = model
        .constraints()
        .iter()
        .map(|c| (c.kind(), c.relation(), c.rhs()))
        .collect();
    assert_eq!(
        shapes,
        [
            (&ConstraintKind::Budget, Relation::LessEq, 15_000.0),
            (
                &ConstraintKind::Position("QB".into()),
                Relation::Equal,
                1.0
            ),
            (
                &ConstraintKind::Position("RB".into()),
                Relation::LessEq,
                2.0
            ),
            (
                &ConstraintKind::Position("RB".into()),
                Relation::GreaterEq,
                1.0
            ),
            (
                &ConstraintKind::Position("WR".into()),
                Relation::Equal,
                1.0
            ),
        ]
    );
}

#[test]
fn budget_terms_carry_costs() {
    let pool = tiny_slate();
    let rules = tiny_rules();
    let model = ModelBuilder::new(&pool, &rules, 15_000).build().unwrap();
    let budget = &model.constraints()[0];
    assert_eq!(
        budget.terms(),
        [(0, 5000.0), (1, 4000.0), (2, 3000.0), (3, 6000.0)]
    );
}

#[test]
fn flex_constraint_spans_contributing_positions() {
    let pool = classic_slate();
    let rules = classic_rules();
    let model = ModelBuilder::new(&pool, &rules, CLASSIC_BUDGET).build().unwrap();

    let flex = model
        .constraints()
        .iter()
        .find(|c| c.kind() == &ConstraintKind::Flex)
        .expect("flex constraint present");
    assert_eq!(flex.relation(), Relation::Equal);
    assert_eq!(flex.rhs(), 7.0);
    // Every RB, WR and TE contributes one unit term; QBs and defenses do not.
    let contributing = pool
        .iter()
        .filter(|(_, c)| matches!(c.position.as_str(), "RB" | "WR" | "TE"))
        .count();
    assert_eq!(flex.terms().len(), contributing);
    assert!(flex.terms().iter().all(|&(_, coefficient)| coefficient == 1.0));
}

#[test]
fn no_flex_constraint_without_contributors() {
    let pool = tiny_slate();
    let rules = tiny_rules();
    let model = ModelBuilder::new(&pool, &rules, 15_000).build().unwrap();
    assert!(model
        .constraints()
        .iter()
        .all(|c| c.kind() != &ConstraintKind::Flex));
}

#[test]
fn rebuilding_is_idempotent() {
    let pool = classic_slate();
    let rules = classic_rules();
    let first = ModelBuilder::new(&pool, &rules, CLASSIC_BUDGET).build().unwrap();
    let second = ModelBuilder::new(&pool, &rules, CLASSIC_BUDGET).build().unwrap();
    assert_eq!(first, second);
}

#[test]
fn empty_pool_is_rejected() {
    let pool = CandidatePool::new();
    let rules = tiny_rules();
    let err = ModelBuilder::new(&pool, &rules, 15_000).build().unwrap_err();
    assert_eq!(err, ModelError::EmptyPool);
}

#[test]
fn rule_for_absent_position_is_rejected() {
    let pool = CandidatePool::from_groups([("QB", vec![Candidate::new("A", "QB", 5000, 20.0)])]);
    let rules = RuleSet::new(
        vec![PositionRule::exact("QB", 1), PositionRule::exact("RB", 1)],
        FlexRule::none(),
    )
    .unwrap();
    let err = ModelBuilder::new(&pool, &rules, 15_000).build().unwrap_err();
    assert_eq!(
        err,
        ModelError::UnknownPosition {
            position: "RB".into(),
        }
    );
}

#[test]
fn unruled_pool_position_is_rejected() {
    let pool = CandidatePool::from_groups([
        ("QB", vec![Candidate::new("A", "QB", 5000, 20.0)]),
        ("K", vec![Candidate::new("E", "K", 2000, 6.0)]),
    ]);
    let rules = RuleSet::new(vec![PositionRule::exact("QB", 1)], FlexRule::none()).unwrap();
    let err = ModelBuilder::new(&pool, &rules, 15_000).build().unwrap_err();
    assert_eq!(
        err,
        ModelError::UnruledPosition {
            position: "K".into(),
        }
    );
}
