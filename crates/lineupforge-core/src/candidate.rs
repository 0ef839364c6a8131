//! Candidates and the candidate pool.
//!
//! A [`CandidatePool`] is built once from external input and never mutated
//! afterwards. Candidates are identified by their [`CandidateId`], the
//! insertion-order index into the pool; the model builder, the solver and
//! the lineup assembler all share this identity.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Stable identity of a candidate inside a pool.
///
/// Assigned in insertion order and reused unchanged as the decision-variable
/// index of the integer-program model.
///
/// # Example
///
/// ```
/// use lineupforge_core::CandidateId;
///
/// let id = CandidateId::new(3);
/// assert_eq!(id.index(), 3);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(transparent))]
pub struct CandidateId(usize);

impl CandidateId {
    /// Creates an id from a raw pool index.
    pub fn new(index: usize) -> Self {
        Self(index)
    }

    /// Returns the raw pool index.
    pub fn index(self) -> usize {
        self.0
    }
}

impl std::fmt::Display for CandidateId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A selectable entity with a cost and a projected value.
///
/// Immutable once admitted to a pool.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Candidate {
    /// Display name.
    pub name: String,
    /// Position label grouping this candidate. May be omitted in
    /// serialized input; the pool's group label is authoritative.
    #[cfg_attr(feature = "serde", serde(default))]
    pub position: String,
    /// Cost charged against the budget ceiling.
    pub cost: u64,
    /// Projected value, the objective coefficient.
    pub value: f64,
    /// Free-form source grouping (the original data's team column).
    #[cfg_attr(feature = "serde", serde(default))]
    pub origin: String,
}

impl Candidate {
    /// Creates a candidate with an empty origin tag.
    pub fn new(
        name: impl Into<String>,
        position: impl Into<String>,
        cost: u64,
        value: f64,
    ) -> Self {
        Self {
            name: name.into(),
            position: position.into(),
            cost,
            value,
            origin: String::new(),
        }
    }

    /// Sets the origin tag.
    pub fn with_origin(mut self, origin: impl Into<String>) -> Self {
        self.origin = origin.into();
        self
    }
}

/// An insertion-ordered, immutable collection of candidates.
///
/// Input arrives as position-labelled groups; flattening preserves group
/// order and then record order, so candidate ids are reproducible across
/// runs regardless of how the input mapping iterates.
///
/// # Example
///
/// ```
/// use lineupforge_core::{Candidate, CandidatePool};
///
/// let pool = CandidatePool::from_groups([
///     ("QB", vec![Candidate::new("A", "QB", 5000, 20.0)]),
///     ("RB", vec![Candidate::new("B", "RB", 4000, 15.0)]),
/// ]);
/// assert_eq!(pool.len(), 2);
/// assert_eq!(pool.positions(), ["QB", "RB"]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct CandidatePool {
    candidates: Vec<Candidate>,
}

impl CandidatePool {
    /// Creates an empty pool.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a pool from position-labelled groups.
    ///
    /// The group label is authoritative: each record's position is set to
    /// the label of the group it arrived under.
    pub fn from_groups<L, G>(groups: G) -> Self
    where
        L: Into<String>,
        G: IntoIterator<Item = (L, Vec<Candidate>)>,
    {
        let mut pool = Self::new();
        for (label, members) in groups {
            let label = label.into();
            for mut candidate in members {
                candidate.position = label.clone();
                pool.push(candidate);
            }
        }
        pool
    }

    /// Appends a candidate, assigning it the next id.
    pub fn push(&mut self, candidate: Candidate) -> CandidateId {
        let id = CandidateId::new(self.candidates.len());
        self.candidates.push(candidate);
        id
    }

    /// Number of candidates in the pool.
    pub fn len(&self) -> usize {
        self.candidates.len()
    }

    /// Returns true if the pool holds no candidates.
    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }

    /// Looks up a candidate by id.
    pub fn get(&self, id: CandidateId) -> Option<&Candidate> {
        self.candidates.get(id.index())
    }

    /// Iterates candidates in id order.
    pub fn iter(&self) -> impl Iterator<Item = (CandidateId, &Candidate)> {
        self.candidates
            .iter()
            .enumerate()
            .map(|(index, candidate)| (CandidateId::new(index), candidate))
    }

    /// Distinct position labels in first-seen order.
    pub fn positions(&self) -> Vec<&str> {
        let mut seen = Vec::new();
        for candidate in &self.candidates {
            if !seen.contains(&candidate.position.as_str()) {
                seen.push(candidate.position.as_str());
            }
        }
        seen
    }

    /// Returns true if any candidate carries the given position label.
    pub fn contains_position(&self, position: &str) -> bool {
        self.candidates
            .iter()
            .any(|candidate| candidate.position == position)
    }

    /// Ids of candidates at the given position, ascending.
    pub fn ids_at<'a>(&'a self, position: &'a str) -> impl Iterator<Item = CandidateId> + 'a {
        self.iter()
            .filter(move |(_, candidate)| candidate.position == position)
            .map(|(id, _)| id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pool() -> CandidatePool {
        CandidatePool::from_groups([
            (
                "QB",
                vec![
                    Candidate::new("Rodgers", "QB", 7000, 22.1).with_origin("GB"),
                    Candidate::new("Newton", "QB", 6400, 19.8).with_origin("CAR"),
                ],
            ),
            ("RB", vec![Candidate::new("Kamara", "RB", 8800, 24.5)]),
        ])
    }

    #[test]
    fn ids_follow_insertion_order() {
        let pool = pool();
        let names: Vec<&str> = pool.iter().map(|(_, c)| c.name.as_str()).collect();
        assert_eq!(names, ["Rodgers", "Newton", "Kamara"]);
        assert_eq!(pool.get(CandidateId::new(2)).unwrap().name, "Kamara");
    }

    #[test]
    fn group_label_overrides_record_position() {
        let pool = CandidatePool::from_groups([(
            "WR",
            vec![Candidate::new("Moore", "mislabelled", 6100, 17.3)],
        )]);
        assert_eq!(pool.get(CandidateId::new(0)).unwrap().position, "WR");
    }

    #[test]
    fn positions_are_first_seen_order() {
        assert_eq!(pool().positions(), ["QB", "RB"]);
    }

    #[test]
    fn ids_at_filters_by_position() {
        let pool = pool();
        let qbs: Vec<usize> = pool.ids_at("QB").map(CandidateId::index).collect();
        assert_eq!(qbs, [0, 1]);
        assert!(pool.ids_at("TE").next().is_none());
    }

    #[test]
    fn empty_pool_reports_empty() {
        let pool = CandidatePool::new();
        assert!(pool.is_empty());
        assert!(pool.get(CandidateId::new(0)).is_none());
    }
}
