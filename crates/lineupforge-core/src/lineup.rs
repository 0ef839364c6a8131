//! Assembled lineups.
//!
//! A [`Lineup`] is the final, slot-labelled form of one solver assignment.
//! It is produced fresh each diversification iteration and retained only in
//! the output sequence.

#[cfg(feature = "serde")]
use serde::Serialize;

use crate::candidate::{Candidate, CandidateId};

/// The kind of slot a selected candidate occupies.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub enum SlotKind {
    /// A dedicated slot for one position.
    Position(String),
    /// The shared flex slot.
    Flex,
}

impl std::fmt::Display for SlotKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SlotKind::Position(label) => f.write_str(label),
            SlotKind::Flex => f.write_str("FLEX"),
        }
    }
}

/// One filled slot.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct Slot {
    /// Which slot the candidate occupies.
    pub kind: SlotKind,
    /// Identity of the candidate inside the pool.
    pub id: CandidateId,
    /// The candidate itself.
    pub candidate: Candidate,
}

/// A fully assembled selection of candidates meeting all rules.
///
/// Slots are ordered by rule declaration (fixed slots per position, in
/// candidate-id order within a position) followed by the flex slots.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct Lineup {
    slots: Vec<Slot>,
    selected: Vec<CandidateId>,
    total_cost: u64,
    total_value: f64,
}

impl Lineup {
    /// Builds a lineup from filled slots, deriving totals and the sorted
    /// selected-id list.
    pub fn new(slots: Vec<Slot>) -> Self {
        let total_cost = slots.iter().map(|slot| slot.candidate.cost).sum();
        let total_value = slots.iter().map(|slot| slot.candidate.value).sum();
        let mut selected: Vec<CandidateId> = slots.iter().map(|slot| slot.id).collect();
        selected.sort_unstable();
        Self {
            slots,
            selected,
            total_cost,
            total_value,
        }
    }

    /// Filled slots in display order.
    pub fn slots(&self) -> &[Slot] {
        &self.slots
    }

    /// Selected candidate ids, ascending.
    pub fn selected(&self) -> &[CandidateId] {
        &self.selected
    }

    /// Number of filled slots.
    pub fn size(&self) -> usize {
        self.slots.len()
    }

    /// Sum of slot costs.
    pub fn total_cost(&self) -> u64 {
        self.total_cost
    }

    /// Sum of slot values, the objective this lineup achieved.
    pub fn total_value(&self) -> f64 {
        self.total_value
    }

    /// Number of candidate ids shared with another lineup.
    pub fn overlap(&self, other: &Lineup) -> usize {
        // Both id lists are sorted; walk them together.
        let (mut i, mut j, mut shared) = (0, 0, 0);
        while i < self.selected.len() && j < other.selected.len() {
            match self.selected[i].cmp(&other.selected[j]) {
                std::cmp::Ordering::Less => i += 1,
                std::cmp::Ordering::Greater => j += 1,
                std::cmp::Ordering::Equal => {
                    shared += 1;
                    i += 1;
                    j += 1;
                }
            }
        }
        shared
    }

    /// Count of slots whose candidate carries the given position label,
    /// regardless of the slot kind they landed in.
    pub fn position_count(&self, position: &str) -> usize {
        self.slots
            .iter()
            .filter(|slot| slot.candidate.position == position)
            .count()
    }
}
