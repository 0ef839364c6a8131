//! Maps a solver assignment back into a slot-labelled lineup.
//!
//! Fixed slots fill first, in candidate-id order, up to each position's
//! fixed-slot count; the remainder of flex-eligible positions merges into
//! the flex slots, again in candidate-id order. The model never decides
//! which physical slot a candidate occupies — this deterministic fill
//! order does, and a post-hoc count check catches any drift between the
//! constraint set and the slot capacities.

use lineupforge_core::{CandidateId, CandidatePool, Lineup, RuleSet, Slot, SlotKind};
use smallvec::SmallVec;
use thiserror::Error;

use crate::model::Assignment;

/// Slot accounting failed; a programming defect in constraint/slot-capacity
/// alignment, never silently recovered.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AssembleError {
    /// Fixed plus flex slots could not hold every selected candidate.
    #[error("slot mismatch: {selected} candidates selected but {placed} placed")]
    SlotMismatch { selected: usize, placed: usize },

    /// The assignment covers a different variable count than the pool.
    #[error("assignment covers {actual} variables, pool holds {expected}")]
    LengthMismatch { expected: usize, actual: usize },
}

/// Assembles the lineup for one assignment. Pure transformation.
pub fn assemble_lineup(
    pool: &CandidatePool,
    rules: &RuleSet,
    assignment: &Assignment,
) -> Result<Lineup, AssembleError> {
    if assignment.len() != pool.len() {
        return Err(AssembleError::LengthMismatch {
            expected: pool.len(),
            actual: assignment.len(),
        });
    }

    let selected_count = assignment.selected_ids().len();
    let mut slots = Vec::with_capacity(selected_count);
    let mut flex_queue: SmallVec<[CandidateId; 8]> = SmallVec::new();

    for rule in rules.positions() {
        let fixed = rule.fixed_slots() as usize;
        let mut filled = 0;
        for id in pool.ids_at(rule.position()) {
            if !assignment.is_selected(id) {
                continue;
            }
            if filled < fixed {
                let candidate = pool.get(id).expect("id came from this pool");
                slots.push(Slot {
                    kind: SlotKind::Position(rule.position().to_string()),
                    id,
                    candidate: candidate.clone(),
                });
                filled += 1;
            } else if rules.flex().contributes(rule.position()) {
                flex_queue.push(id);
            }
            // Otherwise the candidate exceeds the fixed slots of a
            // non-flex position; the count check below surfaces it.
        }
    }

    flex_queue.sort_unstable();
    let flex_cap = rules.flex_slot_count() as usize;
    for &id in flex_queue.iter().take(flex_cap) {
        let candidate = pool.get(id).expect("id came from this pool");
        slots.push(Slot {
            kind: SlotKind::Flex,
            id,
            candidate: candidate.clone(),
        });
    }

    if slots.len() != selected_count {
        return Err(AssembleError::SlotMismatch {
            selected: selected_count,
            placed: slots.len(),
        });
    }
    Ok(Lineup::new(slots))
}
