//! The diversification loop.
//!
//! Repeatedly solves the growing model, assembles each optimal assignment
//! into a lineup, and appends an exclusion constraint before the next
//! solve. Exclusions only shrink the feasible region, so lineups arrive
//! in non-increasing value order.
//!
//! Logging levels:
//! - **INFO**: run start/end, each emitted lineup
//! - **DEBUG**: constraint accumulation between iterations
//! - **WARN**: the candidate supply running dry before the target count

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use lineupforge_core::{CandidatePool, Lineup, RuleSet};
use lineupforge_model::{assemble_lineup, AssembleError, ModelBuilder, ModelError};
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::solver::{IlpSolver, SolveError};

/// Loop-level failure.
///
/// First-solve infeasibility is not represented here: the loop reports it
/// through [`SolveReport::state`] with an empty lineup list.
#[derive(Debug, Error)]
pub enum SolverError {
    /// The model could not be built from the pool and rules.
    #[error(transparent)]
    Model(#[from] ModelError),

    /// Slot accounting failed while assembling an optimal assignment;
    /// the constraint set and slot capacities have drifted out of sync.
    #[error("lineup assembly failed at iteration {iteration}: {source}")]
    Assemble {
        iteration: usize,
        source: AssembleError,
    },

    /// The backend failed outright (not infeasibility). Never retried.
    #[error("solver backend failed at iteration {iteration}: {source}")]
    Backend {
        iteration: usize,
        source: SolveError,
    },
}

/// Where the loop ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchState {
    /// No solve has run yet.
    Ready,
    /// At least one lineup produced, target not yet reached.
    Solved,
    /// The target lineup count was reached (or a stop was requested).
    Exhausted,
    /// The model became infeasible; no further distinct lineup exists.
    Failed,
}

/// Outcome of one diversification run.
#[derive(Debug, Clone)]
pub struct SolveReport {
    lineups: Vec<Lineup>,
    state: SearchState,
    iterations: usize,
}

impl SolveReport {
    /// Lineups in production order, non-increasing by total value.
    pub fn lineups(&self) -> &[Lineup] {
        &self.lineups
    }

    /// Consumes the report, yielding the lineups.
    pub fn into_lineups(self) -> Vec<Lineup> {
        self.lineups
    }

    /// Terminal state of the loop.
    pub fn state(&self) -> SearchState {
        self.state
    }

    /// Number of solve calls made.
    pub fn iterations(&self) -> usize {
        self.iterations
    }

    /// Returns true when no lineup could be produced at all.
    pub fn is_empty(&self) -> bool {
        self.lineups.is_empty()
    }
}

/// The diversification engine.
///
/// Owns the growing model for the duration of one [`solve`](Self::solve)
/// call; each iteration's backend call sees the current snapshot. The
/// engine is single-threaded and synchronous; an optional stop flag is
/// checked between iterations only, never mid-solve.
///
/// # Example
///
/// ```no_run
/// use lineupforge_core::{CandidatePool, FlexRule, PositionRule, RuleSet};
/// use lineupforge_solver::{GoodLpSolver, LineupSolver};
///
/// # fn pool() -> CandidatePool { CandidatePool::new() }
/// let rules = RuleSet::new(vec![PositionRule::exact("QB", 1)], FlexRule::none()).unwrap();
/// let engine = LineupSolver::new(GoodLpSolver::new(), 50_000)
///     .with_lineup_count(5)
///     .with_uniques(1);
/// let report = engine.solve(&pool(), &rules).unwrap();
/// for lineup in report.lineups() {
///     println!("{} for {}", lineup.total_value(), lineup.total_cost());
/// }
/// ```
#[derive(Debug)]
pub struct LineupSolver<B> {
    backend: B,
    budget: u64,
    lineup_count: usize,
    uniques: u32,
    stop_flag: Option<Arc<AtomicBool>>,
}

impl<B: IlpSolver> LineupSolver<B> {
    /// Creates an engine over the given backend and budget ceiling,
    /// targeting a single lineup with uniqueness threshold 1.
    pub fn new(backend: B, budget: u64) -> Self {
        Self {
            backend,
            budget,
            lineup_count: 1,
            uniques: 1,
            stop_flag: None,
        }
    }

    /// Sets the target lineup count K.
    pub fn with_lineup_count(mut self, lineup_count: usize) -> Self {
        self.lineup_count = lineup_count;
        self
    }

    /// Sets the uniqueness threshold U: every later lineup must differ
    /// from each earlier one by at least this many candidates. Must be
    /// at least 1; [`validate`](lineupforge_config::OptimizerConfig::validate)
    /// enforces this on the configuration path.
    pub fn with_uniques(mut self, uniques: u32) -> Self {
        self.uniques = uniques;
        self
    }

    /// Installs a cooperative stop flag, checked between iterations.
    pub fn with_stop_flag(mut self, flag: Arc<AtomicBool>) -> Self {
        self.stop_flag = Some(flag);
        self
    }

    /// The backend this engine solves with.
    pub fn backend(&self) -> &B {
        &self.backend
    }

    fn stop_requested(&self) -> bool {
        self.stop_flag
            .as_ref()
            .is_some_and(|flag| flag.load(Ordering::Relaxed))
    }

    /// Runs the diversification loop.
    ///
    /// Returns up to `lineup_count` lineups in non-increasing value
    /// order. Infeasibility at any iteration ends the loop with the
    /// partial sequence (possibly empty) and state
    /// [`SearchState::Failed`]; backend and assembly failures are fatal.
    pub fn solve(&self, pool: &CandidatePool, rules: &RuleSet) -> Result<SolveReport, SolverError> {
        let mut model = ModelBuilder::new(pool, rules, self.budget).build()?;
        info!(
            event = "solve_start",
            backend = self.backend.name(),
            candidates = pool.len(),
            constraints = model.constraints().len(),
            lineup_count = self.lineup_count,
            uniques = self.uniques,
        );

        let mut lineups: Vec<Lineup> = Vec::with_capacity(self.lineup_count);
        let mut state = SearchState::Ready;
        let mut iterations = 0;

        while lineups.len() < self.lineup_count {
            if self.stop_requested() {
                info!(event = "stop_requested", iteration = iterations);
                state = SearchState::Exhausted;
                break;
            }

            iterations += 1;
            let assignment = match self.backend.solve(&model) {
                Ok(assignment) => assignment,
                Err(SolveError::Infeasible) => {
                    if lineups.is_empty() {
                        info!(event = "infeasible", iteration = iterations);
                    } else {
                        warn!(
                            event = "supply_exhausted",
                            iteration = iterations,
                            lineups = lineups.len(),
                        );
                    }
                    state = SearchState::Failed;
                    break;
                }
                Err(source) => {
                    return Err(SolverError::Backend {
                        iteration: iterations,
                        source,
                    })
                }
            };

            let lineup = assemble_lineup(pool, rules, &assignment).map_err(|source| {
                SolverError::Assemble {
                    iteration: iterations,
                    source,
                }
            })?;
            info!(
                event = "lineup_found",
                iteration = iterations,
                value = lineup.total_value(),
                cost = lineup.total_cost(),
            );

            model.exclude(lineup.selected(), self.uniques);
            debug!(
                event = "exclusion_added",
                exclusions = model.exclusion_count(),
                constraints = model.constraints().len(),
            );
            lineups.push(lineup);
            state = SearchState::Solved;
        }

        if lineups.len() >= self.lineup_count {
            state = SearchState::Exhausted;
        }
        info!(
            event = "solve_end",
            lineups = lineups.len(),
            iterations = iterations,
        );
        Ok(SolveReport {
            lineups,
            state,
            iterations,
        })
    }
}
