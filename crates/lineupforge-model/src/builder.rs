//! Translates a candidate pool and rule set into a [`Model`].

use lineupforge_core::{CandidatePool, PositionRule, RuleError, RuleSet};
use thiserror::Error;

use crate::constraint::{ConstraintKind, LinearConstraint, Relation};
use crate::model::Model;

/// Rejected model construction. Fatal; raised before any solve.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ModelError {
    /// The candidate pool holds no candidates.
    #[error("candidate pool is empty")]
    EmptyPool,

    /// A rule references a position no candidate carries.
    #[error("rule references position {position} absent from the pool")]
    UnknownPosition { position: String },

    /// A pool position has no rule, so its candidates could be selected
    /// without any slot to hold them.
    #[error("pool position {position} has no rule")]
    UnruledPosition { position: String },

    /// The rule set itself failed validation.
    #[error(transparent)]
    Rule(#[from] RuleError),
}

/// Builds the binary integer program for one run.
///
/// Candidates keep their pool insertion-order ids as variable indices.
/// Constraint order is deterministic: budget first, then each position
/// rule in declaration order (`==` when exact, otherwise `<= max` followed
/// by `>= min`), then the flex constraint. Rebuilding from unchanged
/// inputs yields a structurally identical model.
///
/// # Example
///
/// ```
/// use lineupforge_core::{Candidate, CandidatePool, FlexRule, PositionRule, RuleSet};
/// use lineupforge_model::ModelBuilder;
///
/// let pool = CandidatePool::from_groups([
///     ("QB", vec![Candidate::new("A", "QB", 5000, 20.0)]),
/// ]);
/// let rules = RuleSet::new(vec![PositionRule::exact("QB", 1)], FlexRule::none()).unwrap();
/// let model = ModelBuilder::new(&pool, &rules, 10_000).build().unwrap();
/// assert_eq!(model.variable_count(), 1);
/// ```
#[derive(Debug)]
pub struct ModelBuilder<'a> {
    pool: &'a CandidatePool,
    rules: &'a RuleSet,
    budget: u64,
}

impl<'a> ModelBuilder<'a> {
    /// Creates a builder over the given pool, rules and budget ceiling.
    pub fn new(pool: &'a CandidatePool, rules: &'a RuleSet, budget: u64) -> Self {
        Self {
            pool,
            rules,
            budget,
        }
    }

    /// Produces the model, or a [`ModelError`] when pool and rules disagree.
    pub fn build(&self) -> Result<Model, ModelError> {
        if self.pool.is_empty() {
            return Err(ModelError::EmptyPool);
        }
        for rule in self.rules.positions() {
            if !self.pool.contains_position(rule.position()) {
                return Err(ModelError::UnknownPosition {
                    position: rule.position().to_string(),
                });
            }
        }
        for position in self.pool.positions() {
            if self.rules.rule(position).is_none() {
                return Err(ModelError::UnruledPosition {
                    position: position.to_string(),
                });
            }
        }

        let objective: Vec<f64> = self.pool.iter().map(|(_, c)| c.value).collect();
        let mut constraints = Vec::new();

        let budget_terms: Vec<(usize, f64)> = self
            .pool
            .iter()
            .map(|(id, candidate)| (id.index(), candidate.cost as f64))
            .collect();
        constraints.push(LinearConstraint::new(
            ConstraintKind::Budget,
            budget_terms,
            Relation::LessEq,
            self.budget as f64,
        ));

        for rule in self.rules.positions() {
            self.push_position_constraints(rule, &mut constraints);
        }

        let flex = self.rules.flex();
        if !flex.positions().is_empty() {
            let terms: Vec<(usize, f64)> = self
                .pool
                .iter()
                .filter(|(_, candidate)| flex.contributes(&candidate.position))
                .map(|(id, _)| (id.index(), 1.0))
                .collect();
            constraints.push(LinearConstraint::new(
                ConstraintKind::Flex,
                terms,
                Relation::Equal,
                f64::from(flex.target()),
            ));
        }

        Ok(Model::new(objective, constraints))
    }

    fn push_position_constraints(
        &self,
        rule: &PositionRule,
        constraints: &mut Vec<LinearConstraint>,
    ) {
        let terms: Vec<(usize, f64)> = self
            .pool
            .ids_at(rule.position())
            .map(|id| (id.index(), 1.0))
            .collect();
        let kind = ConstraintKind::Position(rule.position().to_string());
        if rule.is_exact() {
            constraints.push(LinearConstraint::new(
                kind,
                terms,
                Relation::Equal,
                f64::from(rule.min()),
            ));
        } else {
            constraints.push(LinearConstraint::new(
                kind.clone(),
                terms.clone(),
                Relation::LessEq,
                f64::from(rule.max()),
            ));
            constraints.push(LinearConstraint::new(
                kind,
                terms,
                Relation::GreaterEq,
                f64::from(rule.min()),
            ));
        }
    }
}
