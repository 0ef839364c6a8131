//! LineupForge - A diversifying lineup optimizer
//!
//! LineupForge selects the highest-value combination of candidates under
//! a budget ceiling and per-position count rules, then keeps re-solving
//! under accumulated exclusion constraints to produce K distinct
//! lineups in non-increasing value order.
//!
//! # Example
//!
//! ```
//! use lineupforge::{
//!     Candidate, CandidatePool, FlexRule, GoodLpSolver, LineupSolver, PositionRule, RuleSet,
//! };
//!
//! let pool = CandidatePool::from_groups([
//!     ("QB", vec![Candidate::new("A", "QB", 5000, 20.0)]),
//!     (
//!         "RB",
//!         vec![
//!             Candidate::new("B", "RB", 4000, 15.0),
//!             Candidate::new("C", "RB", 3000, 12.0),
//!         ],
//!     ),
//!     ("WR", vec![Candidate::new("D", "WR", 6000, 25.0)]),
//! ]);
//! let rules = RuleSet::new(
//!     vec![
//!         PositionRule::exact("QB", 1),
//!         PositionRule::bounded("RB", 1, 2).with_fixed_slots(2),
//!         PositionRule::exact("WR", 1),
//!     ],
//!     FlexRule::none(),
//! )
//! .unwrap();
//!
//! let report = LineupSolver::new(GoodLpSolver::new(), 15_000)
//!     .with_lineup_count(2)
//!     .solve(&pool, &rules)
//!     .unwrap();
//! assert_eq!(report.lineups().len(), 2);
//! ```

pub use lineupforge_config::{ConfigError, FlexConfig, OptimizerConfig, PositionConfig};
pub use lineupforge_core::{
    Candidate, CandidateId, CandidatePool, FlexRule, Lineup, PositionRule, RuleError, RuleSet,
    Slot, SlotKind,
};
pub use lineupforge_model::{
    assemble_lineup, AssembleError, Assignment, ConstraintKind, LinearConstraint, Model,
    ModelBuilder, ModelError, Relation,
};
pub use lineupforge_solver::{
    rule_set_from, GoodLpSolver, IlpSolver, LineupSolver, SearchState, SolveError, SolveReport,
    SolverError,
};
