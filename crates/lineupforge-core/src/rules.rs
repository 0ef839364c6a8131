//! Position count rules and the shared flex slot.
//!
//! A [`RuleSet`] is constructed once from configuration and never mutated.
//! Validation happens up front so every later stage can rely on the
//! invariants: `min <= max` per rule, fixed-slot counts within bounds,
//! distinct labels, and a flex target large enough to cover the fixed
//! slots of its contributing positions.

use crate::error::RuleError;

/// Count bounds for one position.
///
/// `min == max` is an equality requirement; otherwise the model carries a
/// pair of inequality constraints. The fixed-slot count decides how many
/// selections of this position occupy dedicated slots during assembly;
/// anything beyond it is routed to the flex slot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PositionRule {
    position: String,
    min: u32,
    max: u32,
    fixed_slots: Option<u32>,
}

impl PositionRule {
    /// A rule requiring exactly `count` selections.
    pub fn exact(position: impl Into<String>, count: u32) -> Self {
        Self::bounded(position, count, count)
    }

    /// A rule requiring between `min` and `max` selections.
    pub fn bounded(position: impl Into<String>, min: u32, max: u32) -> Self {
        Self {
            position: position.into(),
            min,
            max,
            fixed_slots: None,
        }
    }

    /// Overrides the fixed-slot count (defaults to `min`).
    pub fn with_fixed_slots(mut self, fixed_slots: u32) -> Self {
        self.fixed_slots = Some(fixed_slots);
        self
    }

    /// The position label.
    pub fn position(&self) -> &str {
        &self.position
    }

    /// Minimum required count.
    pub fn min(&self) -> u32 {
        self.min
    }

    /// Maximum allowed count.
    pub fn max(&self) -> u32 {
        self.max
    }

    /// Returns true when the rule pins the count exactly.
    pub fn is_exact(&self) -> bool {
        self.min == self.max
    }

    /// Number of dedicated slots filled before the flex slot.
    pub fn fixed_slots(&self) -> u32 {
        self.fixed_slots.unwrap_or(self.min)
    }

    fn validate(&self) -> Result<(), RuleError> {
        if self.min > self.max {
            return Err(RuleError::InvalidRule {
                position: self.position.clone(),
                min: self.min,
                max: self.max,
            });
        }
        let fixed = self.fixed_slots();
        if fixed < self.min || fixed > self.max {
            return Err(RuleError::InvalidFixedSlots {
                position: self.position.clone(),
                fixed,
                min: self.min,
                max: self.max,
            });
        }
        Ok(())
    }
}

/// The shared flex slot drawn from several positions.
///
/// The target counts every selection across the contributing positions,
/// fixed slots included; the number of physical flex slots is the target
/// minus the contributing fixed-slot total.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FlexRule {
    positions: Vec<String>,
    target: u32,
}

impl FlexRule {
    /// A flex slot fed by the given positions, totalling `target`.
    pub fn new<L: Into<String>>(positions: impl IntoIterator<Item = L>, target: u32) -> Self {
        Self {
            positions: positions.into_iter().map(Into::into).collect(),
            target,
        }
    }

    /// No flex slot at all.
    pub fn none() -> Self {
        Self::default()
    }

    /// Contributing position labels.
    pub fn positions(&self) -> &[String] {
        &self.positions
    }

    /// Total selections required across the contributing positions.
    pub fn target(&self) -> u32 {
        self.target
    }

    /// Returns true if the given position feeds the flex slot.
    pub fn contributes(&self, position: &str) -> bool {
        self.positions.iter().any(|label| label == position)
    }
}

/// A validated set of position rules plus the flex rule.
///
/// # Example
///
/// ```
/// use lineupforge_core::{FlexRule, PositionRule, RuleSet};
///
/// let rules = RuleSet::new(
///     vec![
///         PositionRule::exact("QB", 1),
///         PositionRule::bounded("RB", 2, 3),
///     ],
///     FlexRule::new(["RB"], 3),
/// )
/// .unwrap();
/// assert_eq!(rules.flex_slot_count(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleSet {
    positions: Vec<PositionRule>,
    flex: FlexRule,
}

impl RuleSet {
    /// Validates and assembles a rule set.
    pub fn new(positions: Vec<PositionRule>, flex: FlexRule) -> Result<Self, RuleError> {
        for (index, rule) in positions.iter().enumerate() {
            rule.validate()?;
            if positions[..index]
                .iter()
                .any(|earlier| earlier.position() == rule.position())
            {
                return Err(RuleError::DuplicatePosition {
                    position: rule.position().to_string(),
                });
            }
        }
        for label in flex.positions() {
            if !positions.iter().any(|rule| rule.position() == label) {
                return Err(RuleError::UnknownFlexPosition {
                    position: label.clone(),
                });
            }
        }
        let contributing_fixed: u32 = positions
            .iter()
            .filter(|rule| flex.contributes(rule.position()))
            .map(PositionRule::fixed_slots)
            .sum();
        if flex.target() < contributing_fixed {
            return Err(RuleError::FlexBelowFixed {
                target: flex.target(),
                fixed: contributing_fixed,
            });
        }
        Ok(Self { positions, flex })
    }

    /// Rules in declaration order.
    pub fn positions(&self) -> &[PositionRule] {
        &self.positions
    }

    /// The flex rule.
    pub fn flex(&self) -> &FlexRule {
        &self.flex
    }

    /// Looks up the rule for a position label.
    pub fn rule(&self, position: &str) -> Option<&PositionRule> {
        self.positions
            .iter()
            .find(|rule| rule.position() == position)
    }

    /// Number of physical flex slots.
    pub fn flex_slot_count(&self) -> u32 {
        let contributing_fixed: u32 = self
            .positions
            .iter()
            .filter(|rule| self.flex.contributes(rule.position()))
            .map(PositionRule::fixed_slots)
            .sum();
        self.flex.target() - contributing_fixed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exact_rule_is_equality() {
        let rule = PositionRule::exact("QB", 1);
        assert!(rule.is_exact());
        assert_eq!(rule.fixed_slots(), 1);
    }

    #[test]
    fn fixed_slots_default_to_min() {
        let rule = PositionRule::bounded("RB", 2, 3);
        assert_eq!(rule.fixed_slots(), 2);
        assert_eq!(rule.with_fixed_slots(3).fixed_slots(), 3);
    }

    #[test]
    fn rejects_min_above_max() {
        let err = RuleSet::new(vec![PositionRule::bounded("RB", 3, 2)], FlexRule::none())
            .unwrap_err();
        assert_eq!(
            err,
            RuleError::InvalidRule {
                position: "RB".into(),
                min: 3,
                max: 2,
            }
        );
    }

    #[test]
    fn rejects_fixed_slots_outside_bounds() {
        let rules = vec![PositionRule::bounded("WR", 3, 4).with_fixed_slots(5)];
        let err = RuleSet::new(rules, FlexRule::none()).unwrap_err();
        assert!(matches!(err, RuleError::InvalidFixedSlots { fixed: 5, .. }));
    }

    #[test]
    fn rejects_duplicate_positions() {
        let rules = vec![PositionRule::exact("QB", 1), PositionRule::exact("QB", 1)];
        let err = RuleSet::new(rules, FlexRule::none()).unwrap_err();
        assert!(matches!(err, RuleError::DuplicatePosition { .. }));
    }

    #[test]
    fn rejects_unknown_flex_position() {
        let err = RuleSet::new(
            vec![PositionRule::exact("QB", 1)],
            FlexRule::new(["RB"], 2),
        )
        .unwrap_err();
        assert!(matches!(err, RuleError::UnknownFlexPosition { .. }));
    }

    #[test]
    fn rejects_flex_target_below_fixed_total() {
        let err = RuleSet::new(
            vec![
                PositionRule::bounded("RB", 2, 3),
                PositionRule::bounded("WR", 3, 4),
            ],
            FlexRule::new(["RB", "WR"], 4),
        )
        .unwrap_err();
        assert_eq!(
            err,
            RuleError::FlexBelowFixed {
                target: 4,
                fixed: 5,
            }
        );
    }

    #[test]
    fn flex_slot_count_subtracts_contributing_fixed() {
        let rules = RuleSet::new(
            vec![
                PositionRule::exact("QB", 1),
                PositionRule::bounded("RB", 2, 3),
                PositionRule::bounded("WR", 3, 4),
                PositionRule::bounded("TE", 1, 2),
            ],
            FlexRule::new(["RB", "WR", "TE"], 7),
        )
        .unwrap();
        assert_eq!(rules.flex_slot_count(), 1);
    }
}
