//! The binary integer-program model and solver assignments.

use lineupforge_core::CandidateId;

use crate::constraint::{ConstraintKind, LinearConstraint, Relation};

/// A binary integer program: maximize `objective . x` subject to the
/// constraint list, `x` binary.
///
/// Built once per run by [`ModelBuilder`](crate::ModelBuilder); the only
/// permitted mutation is [`Model::exclude`], which appends an exclusion
/// constraint. Constraints accumulate monotonically and are never removed,
/// so each solve sees a feasible region no larger than the previous one.
#[derive(Debug, Clone, PartialEq)]
pub struct Model {
    objective: Vec<f64>,
    constraints: Vec<LinearConstraint>,
    exclusion_count: usize,
}

impl Model {
    pub(crate) fn new(objective: Vec<f64>, constraints: Vec<LinearConstraint>) -> Self {
        Self {
            objective,
            constraints,
            exclusion_count: 0,
        }
    }

    /// Number of binary decision variables (one per candidate).
    pub fn variable_count(&self) -> usize {
        self.objective.len()
    }

    /// Objective coefficient per variable, indexed by candidate id.
    pub fn objective(&self) -> &[f64] {
        &self.objective
    }

    /// All constraints, in build order followed by exclusion order.
    pub fn constraints(&self) -> &[LinearConstraint] {
        &self.constraints
    }

    /// Number of exclusion constraints appended so far.
    pub fn exclusion_count(&self) -> usize {
        self.exclusion_count
    }

    /// Forbids reproducing too much of a previous selection: appends
    /// `sum(x[id]) <= len - uniques` over the given ids.
    ///
    /// `uniques` is the uniqueness threshold U (>= 1): at least that many
    /// candidates of any later solution must differ from this one.
    pub fn exclude(&mut self, ids: &[CandidateId], uniques: u32) {
        let terms: Vec<(usize, f64)> = ids.iter().map(|id| (id.index(), 1.0)).collect();
        let rhs = ids.len() as f64 - f64::from(uniques);
        self.constraints.push(LinearConstraint::new(
            ConstraintKind::Exclusion(self.exclusion_count),
            terms,
            Relation::LessEq,
            rhs,
        ));
        self.exclusion_count += 1;
    }

    /// Objective value of a 0/1 selection vector.
    pub fn objective_value(&self, selected: &[bool]) -> f64 {
        self.objective
            .iter()
            .zip(selected)
            .filter(|(_, &chosen)| chosen)
            .map(|(coefficient, _)| coefficient)
            .sum()
    }

    /// Constraints violated by a 0/1 selection vector.
    pub fn violations(&self, selected: &[bool]) -> Vec<&LinearConstraint> {
        self.constraints
            .iter()
            .filter(|constraint| !constraint.satisfied_by(selected))
            .collect()
    }
}

/// A solver's optimal 0/1 assignment for one model snapshot.
///
/// Read-only once returned.
#[derive(Debug, Clone, PartialEq)]
pub struct Assignment {
    selected: Vec<bool>,
    objective: f64,
}

impl Assignment {
    /// Wraps a selection vector and the objective value it achieves.
    pub fn new(selected: Vec<bool>, objective: f64) -> Self {
        Self {
            selected,
            objective,
        }
    }

    /// One entry per candidate id.
    pub fn selected(&self) -> &[bool] {
        &self.selected
    }

    /// Number of variables covered by this assignment.
    pub fn len(&self) -> usize {
        self.selected.len()
    }

    /// Returns true when no variable is covered.
    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    /// Returns true when the given candidate is selected.
    pub fn is_selected(&self, id: CandidateId) -> bool {
        self.selected.get(id.index()).copied().unwrap_or(false)
    }

    /// Selected candidate ids, ascending.
    pub fn selected_ids(&self) -> Vec<CandidateId> {
        self.selected
            .iter()
            .enumerate()
            .filter(|(_, &chosen)| chosen)
            .map(|(index, _)| CandidateId::new(index))
            .collect()
    }

    /// The objective value the solver reported.
    pub fn objective(&self) -> f64 {
        self.objective
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn model() -> Model {
        Model::new(
            vec![20.0, 15.0, 12.0],
            vec![LinearConstraint::new(
                ConstraintKind::Budget,
                vec![(0, 5000.0), (1, 4000.0), (2, 3000.0)],
                Relation::LessEq,
                8000.0,
            )],
        )
    }

    #[test]
    fn exclude_appends_monotonically() {
        let mut model = model();
        let baseline = model.constraints().len();

        model.exclude(&[CandidateId::new(0), CandidateId::new(2)], 1);
        model.exclude(&[CandidateId::new(1)], 1);

        assert_eq!(model.constraints().len(), baseline + 2);
        assert_eq!(model.exclusion_count(), 2);

        let first = &model.constraints()[baseline];
        assert_eq!(first.kind(), &ConstraintKind::Exclusion(0));
        assert_eq!(first.relation(), Relation::LessEq);
        assert_eq!(first.rhs(), 1.0);
        assert_eq!(first.terms(), [(0, 1.0), (2, 1.0)]);
    }

    #[test]
    fn exclusion_rejects_identical_reselection() {
        let mut model = model();
        model.exclude(&[CandidateId::new(0), CandidateId::new(1)], 1);
        let exclusion = model.constraints().last().unwrap();
        assert!(!exclusion.satisfied_by(&[true, true, false]));
        assert!(exclusion.satisfied_by(&[true, false, true]));
    }

    #[test]
    fn objective_value_sums_selected_coefficients() {
        let model = model();
        assert_eq!(model.objective_value(&[true, false, true]), 32.0);
    }

    #[test]
    fn violations_lists_unsatisfied_constraints() {
        let model = model();
        assert!(model.violations(&[true, false, true]).is_empty());
        let over_budget = model.violations(&[true, true, true]);
        assert_eq!(over_budget.len(), 1);
        assert_eq!(over_budget[0].kind(), &ConstraintKind::Budget);
    }

    #[test]
    fn assignment_exposes_selected_ids() {
        let assignment = Assignment::new(vec![false, true, true], 27.0);
        let ids: Vec<usize> = assignment
            .selected_ids()
            .iter()
            .map(|id| id.index())
            .collect();
        assert_eq!(ids, [1, 2]);
        assert!(assignment.is_selected(CandidateId::new(1)));
        assert!(!assignment.is_selected(CandidateId::new(0)));
        assert!(!assignment.is_selected(CandidateId::new(9)));
    }
}
