//! The solver capability boundary.

use lineupforge_model::{Assignment, Model};
use thiserror::Error;

/// Failure reported by a solver backend for one model snapshot.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SolveError {
    /// No assignment satisfies the constraint set.
    #[error("no feasible assignment exists")]
    Infeasible,

    /// The objective is unbounded; cannot happen for a well-formed binary
    /// model and is treated as a backend defect by the engine.
    #[error("objective is unbounded")]
    Unbounded,

    /// The backend itself failed (unavailable, timed out, internal error).
    /// Re-solving an unchanged model deterministically fails identically,
    /// so the engine never retries.
    #[error("solver backend failure: {0}")]
    Backend(String),
}

/// An integer-program backend.
///
/// Implementations receive a read-only [`Model`] snapshot and either
/// return an optimal [`Assignment`] or signal why none exists. The engine
/// requires determinism: the same model must always yield the same
/// assignment, including the choice among multiple optima — this is what
/// makes diversification runs reproducible.
pub trait IlpSolver {
    /// Solves one model snapshot to optimality.
    fn solve(&self, model: &Model) -> Result<Assignment, SolveError>;

    /// Backend name, for logging.
    fn name(&self) -> &'static str {
        "unnamed"
    }
}
