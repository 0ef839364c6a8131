//! Linear constraints over binary selection variables.

/// Tolerance when evaluating a constraint against a 0/1 vector.
const FEASIBILITY_EPSILON: f64 = 1e-6;

/// Relation between a constraint's left-hand side and its bound.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Relation {
    /// `lhs <= rhs`
    LessEq,
    /// `lhs >= rhs`
    GreaterEq,
    /// `lhs == rhs`
    Equal,
}

/// What a constraint encodes, for diagnostics and structural tests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConstraintKind {
    /// The spending ceiling over all candidates.
    Budget,
    /// A count bound for one position.
    Position(String),
    /// The flex total across contributing positions.
    Flex,
    /// The n-th exclusion appended by the diversification loop.
    Exclusion(usize),
}

/// One sparse linear constraint: `sum(coefficient * x[index]) <relation> rhs`.
#[derive(Debug, Clone, PartialEq)]
pub struct LinearConstraint {
    kind: ConstraintKind,
    terms: Vec<(usize, f64)>,
    relation: Relation,
    rhs: f64,
}

impl LinearConstraint {
    /// Creates a constraint from sparse `(variable index, coefficient)` terms.
    pub fn new(
        kind: ConstraintKind,
        terms: Vec<(usize, f64)>,
        relation: Relation,
        rhs: f64,
    ) -> Self {
        Self {
            kind,
            terms,
            relation,
            rhs,
        }
    }

    /// What this constraint encodes.
    pub fn kind(&self) -> &ConstraintKind {
        &self.kind
    }

    /// Sparse terms, in variable-index order.
    pub fn terms(&self) -> &[(usize, f64)] {
        &self.terms
    }

    /// The relation against the bound.
    pub fn relation(&self) -> Relation {
        self.relation
    }

    /// The right-hand-side bound.
    pub fn rhs(&self) -> f64 {
        self.rhs
    }

    /// Left-hand-side value for a 0/1 selection vector.
    pub fn lhs_value(&self, selected: &[bool]) -> f64 {
        self.terms
            .iter()
            .filter(|(index, _)| selected.get(*index).copied().unwrap_or(false))
            .map(|(_, coefficient)| coefficient)
            .sum()
    }

    /// Returns true when the selection vector satisfies this constraint.
    pub fn satisfied_by(&self, selected: &[bool]) -> bool {
        let lhs = self.lhs_value(selected);
        match self.relation {
            Relation::LessEq => lhs <= self.rhs + FEASIBILITY_EPSILON,
            Relation::GreaterEq => lhs >= self.rhs - FEASIBILITY_EPSILON,
            Relation::Equal => (lhs - self.rhs).abs() <= FEASIBILITY_EPSILON,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn count_constraint(relation: Relation, rhs: f64) -> LinearConstraint {
        LinearConstraint::new(
            ConstraintKind::Position("RB".into()),
            vec![(0, 1.0), (1, 1.0), (2, 1.0)],
            relation,
            rhs,
        )
    }

    #[test]
    fn lhs_sums_selected_terms_only() {
        let constraint = count_constraint(Relation::LessEq, 2.0);
        assert_eq!(constraint.lhs_value(&[true, false, true]), 2.0);
        assert_eq!(constraint.lhs_value(&[false, false, false]), 0.0);
    }

    #[test]
    fn lhs_tolerates_short_selection_vectors() {
        let constraint = count_constraint(Relation::LessEq, 2.0);
        assert_eq!(constraint.lhs_value(&[true]), 1.0);
    }

    #[test]
    fn satisfied_by_honours_each_relation() {
        let selected = [true, true, false];
        assert!(count_constraint(Relation::LessEq, 2.0).satisfied_by(&selected));
        assert!(!count_constraint(Relation::LessEq, 1.0).satisfied_by(&selected));
        assert!(count_constraint(Relation::GreaterEq, 2.0).satisfied_by(&selected));
        assert!(!count_constraint(Relation::GreaterEq, 3.0).satisfied_by(&selected));
        assert!(count_constraint(Relation::Equal, 2.0).satisfied_by(&selected));
        assert!(!count_constraint(Relation::Equal, 1.0).satisfied_by(&selected));
    }
}
