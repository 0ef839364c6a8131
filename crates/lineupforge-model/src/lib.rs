//! LineupForge Model - Binary integer-program construction
//!
//! This crate turns a candidate pool plus a rule set into a binary
//! integer-program [`Model`] (objective, budget constraint, position
//! constraints, flex constraint) and maps a solver's 0/1 [`Assignment`]
//! back into a slot-labelled [`Lineup`](lineupforge_core::Lineup).
//!
//! The model is built once per run and mutated only by appending exclusion
//! constraints between diversification iterations.

pub mod assemble;
pub mod builder;
pub mod constraint;
pub mod model;

#[cfg(test)]
mod builder_tests;

pub use assemble::{assemble_lineup, AssembleError};
pub use builder::{ModelBuilder, ModelError};
pub use constraint::{ConstraintKind, LinearConstraint, Relation};
pub use model::{Assignment, Model};
