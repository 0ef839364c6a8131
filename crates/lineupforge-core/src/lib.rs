//! LineupForge Core - Domain types for lineup optimization
//!
//! This crate provides the fundamental types shared by the LineupForge
//! crates:
//! - Candidates and the insertion-ordered candidate pool
//! - Position and flex rules with upfront validation
//! - Assembled lineups with slot-level detail
//!
//! It has no knowledge of the integer-program model or of any solver
//! backend; those live in `lineupforge-model` and `lineupforge-solver`.

pub mod candidate;
pub mod error;
pub mod lineup;
pub mod rules;

pub use candidate::{Candidate, CandidateId, CandidatePool};
pub use error::RuleError;
pub use lineup::{Lineup, Slot, SlotKind};
pub use rules::{FlexRule, PositionRule, RuleSet};
