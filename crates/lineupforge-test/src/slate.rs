//! Candidate pool and rule-set fixtures.
//!
//! `tiny_*` is a four-candidate slate small enough for exact assertions;
//! `classic_*` is a full football slate sized for diversification runs;
//! [`random_slate`] generates reproducible pools from a seed.

use lineupforge_core::{Candidate, CandidatePool, FlexRule, PositionRule, RuleSet};
use rand::Rng;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Budget ceiling for the tiny slate.
pub const TINY_BUDGET: u64 = 15_000;

/// Budget ceiling for the classic slate.
pub const CLASSIC_BUDGET: u64 = 50_000;

/// Four candidates across three positions; the optimum under
/// [`TINY_BUDGET`] is A + B + D at value 60.
pub fn tiny_slate() -> CandidatePool {
    CandidatePool::from_groups([
        ("QB", vec![Candidate::new("A", "QB", 5000, 20.0)]),
        (
            "RB",
            vec![
                Candidate::new("B", "RB", 4000, 15.0),
                Candidate::new("C", "RB", 3000, 12.0),
            ],
        ),
        ("WR", vec![Candidate::new("D", "WR", 6000, 25.0)]),
    ])
}

/// Rules for the tiny slate: exactly 1 QB, 1-2 RB (both fixed), exactly
/// 1 WR, no flex slot.
pub fn tiny_rules() -> RuleSet {
    RuleSet::new(
        vec![
            PositionRule::exact("QB", 1),
            PositionRule::bounded("RB", 1, 2).with_fixed_slots(2),
            PositionRule::exact("WR", 1),
        ],
        FlexRule::none(),
    )
    .unwrap()
}

/// A full football slate: 2 QBs, 4 RBs, 5 WRs, 3 TEs, 2 defenses.
pub fn classic_slate() -> CandidatePool {
    CandidatePool::from_groups([
        (
            "QB",
            vec![
                Candidate::new("Aaron Rodgers", "QB", 6800, 21.5).with_origin("GB"),
                Candidate::new("Cam Newton", "QB", 6200, 19.4).with_origin("CAR"),
            ],
        ),
        (
            "RB",
            vec![
                Candidate::new("Christian McCaffrey", "RB", 9200, 26.3).with_origin("CAR"),
                Candidate::new("Alvin Kamara", "RB", 8800, 24.7).with_origin("NO"),
                Candidate::new("Saquon Barkley", "RB", 8500, 23.9).with_origin("NYG"),
                Candidate::new("Jordan Howard", "RB", 4600, 11.2).with_origin("CHI"),
            ],
        ),
        (
            "WR",
            vec![
                Candidate::new("DJ Moore", "WR", 6400, 16.8).with_origin("CAR"),
                Candidate::new("Curtis Samuel", "WR", 5300, 13.5).with_origin("CAR"),
                Candidate::new("Davante Adams", "WR", 7900, 21.1).with_origin("GB"),
                Candidate::new("Jarius Wright", "WR", 3600, 8.9).with_origin("CAR"),
                Candidate::new("Sterling Shepard", "WR", 5100, 12.7).with_origin("NYG"),
            ],
        ),
        (
            "TE",
            vec![
                Candidate::new("Greg Olsen", "TE", 4900, 12.1).with_origin("CAR"),
                Candidate::new("Ian Thomas", "TE", 3200, 7.4).with_origin("CAR"),
                Candidate::new("Jimmy Graham", "TE", 4100, 9.8).with_origin("GB"),
            ],
        ),
        (
            "DST",
            vec![
                Candidate::new("Carolina", "DST", 3300, 8.0).with_origin("CAR"),
                Candidate::new("Chicago", "DST", 3900, 10.5).with_origin("CHI"),
            ],
        ),
    ])
}

/// The classic slate's rules: 1 QB, 2-3 RB, 3-4 WR, 1-2 TE, 1 DST, and a
/// flex total of 7 across RB/WR/TE (one physical flex slot).
pub fn classic_rules() -> RuleSet {
    RuleSet::new(
        vec![
            PositionRule::exact("QB", 1),
            PositionRule::bounded("RB", 2, 3),
            PositionRule::bounded("WR", 3, 4),
            PositionRule::bounded("TE", 1, 2),
            PositionRule::exact("DST", 1),
        ],
        FlexRule::new(["RB", "WR", "TE"], 7),
    )
    .unwrap()
}

/// Generates a pool shaped like the classic slate from a seed.
///
/// Costs land in `3000..=8000` and values in `5.0..=30.0`, so any
/// classic-rules lineup stays comfortably affordable under
/// [`CLASSIC_BUDGET`]. The same seed always yields the same pool.
pub fn random_slate(seed: u64) -> CandidatePool {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let shape = [("QB", 5), ("RB", 8), ("WR", 10), ("TE", 5), ("DST", 4)];
    let mut groups = Vec::new();
    for (position, count) in shape {
        let members = (0..count)
            .map(|index| {
                let cost = rng.random_range(3000..=8000u64);
                let value = f64::from(rng.random_range(50..=300u32)) / 10.0;
                Candidate::new(format!("{position}{index}"), position, cost, value)
            })
            .collect();
        groups.push((position, members));
    }
    CandidatePool::from_groups(groups)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tiny_slate_matches_its_rules() {
        let pool = tiny_slate();
        let rules = tiny_rules();
        for rule in rules.positions() {
            assert!(pool.contains_position(rule.position()));
        }
        assert_eq!(rules.flex_slot_count(), 0);
    }

    #[test]
    fn classic_slate_covers_every_ruled_position() {
        let pool = classic_slate();
        for rule in classic_rules().positions() {
            assert!(pool.contains_position(rule.position()));
        }
        assert_eq!(classic_rules().flex_slot_count(), 1);
    }

    #[test]
    fn random_slate_is_reproducible() {
        let first = random_slate(7);
        let second = random_slate(7);
        assert_eq!(first.len(), second.len());
        for ((_, a), (_, b)) in first.iter().zip(second.iter()) {
            assert_eq!(a, b);
        }
    }

    #[test]
    fn random_slates_differ_across_seeds() {
        let a = random_slate(1);
        let b = random_slate(2);
        let differs = a
            .iter()
            .zip(b.iter())
            .any(|((_, left), (_, right))| left != right);
        assert!(differs);
    }
}
