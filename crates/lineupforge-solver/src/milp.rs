//! `good_lp`-backed solver adapter.
//!
//! Each call translates the model snapshot into a fresh `good_lp` problem,
//! so accumulated exclusion constraints are always part of what the
//! backend sees. The default `microlp` backend is pure Rust and
//! deterministic for a fixed model; enable the `coin_cbc` feature to
//! route through CBC instead for larger pools.

use good_lp::{
    default_solver, variable, variables, Expression, ResolutionError, Solution, SolverModel,
    Variable,
};
use lineupforge_model::{Assignment, Model, Relation};

use crate::solver::{IlpSolver, SolveError};

/// Threshold for reading a binary variable back from the relaxed solution
/// values a backend reports.
const SELECTION_THRESHOLD: f64 = 0.5;

/// The shipped [`IlpSolver`] implementation.
#[derive(Debug, Clone, Copy, Default)]
pub struct GoodLpSolver;

impl GoodLpSolver {
    /// Creates the adapter.
    pub fn new() -> Self {
        Self
    }
}

impl IlpSolver for GoodLpSolver {
    fn solve(&self, model: &Model) -> Result<Assignment, SolveError> {
        let mut vars = variables!();
        let xs: Vec<Variable> = (0..model.variable_count())
            .map(|_| vars.add(variable().binary()))
            .collect();

        let mut objective = Expression::with_capacity(model.variable_count());
        for (index, &coefficient) in model.objective().iter().enumerate() {
            objective.add_mul(coefficient, xs[index]);
        }

        let mut problem = vars.maximise(objective).using(default_solver);
        for constraint in model.constraints() {
            let mut lhs = Expression::with_capacity(constraint.terms().len());
            for &(index, coefficient) in constraint.terms() {
                lhs.add_mul(coefficient, xs[index]);
            }
            problem = problem.with(match constraint.relation() {
                Relation::LessEq => lhs.leq(constraint.rhs()),
                Relation::GreaterEq => lhs.geq(constraint.rhs()),
                Relation::Equal => lhs.eq(constraint.rhs()),
            });
        }

        let solution = match problem.solve() {
            Ok(solution) => solution,
            Err(ResolutionError::Infeasible) => return Err(SolveError::Infeasible),
            Err(ResolutionError::Unbounded) => return Err(SolveError::Unbounded),
            Err(other) => return Err(SolveError::Backend(other.to_string())),
        };

        let selected: Vec<bool> = xs
            .iter()
            .map(|&x| solution.value(x) > SELECTION_THRESHOLD)
            .collect();
        let objective_value = model.objective_value(&selected);
        Ok(Assignment::new(selected, objective_value))
    }

    fn name(&self) -> &'static str {
        if cfg!(feature = "coin_cbc") {
            "good_lp/cbc"
        } else {
            "good_lp/microlp"
        }
    }
}
