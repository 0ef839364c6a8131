//! Configuration wiring.
//!
//! Turns a deserialized [`OptimizerConfig`] into the core rule set and a
//! ready-to-run [`LineupSolver`].

use lineupforge_config::OptimizerConfig;
use lineupforge_core::{FlexRule, PositionRule, RuleError, RuleSet};

use crate::engine::LineupSolver;
use crate::solver::IlpSolver;

/// Builds the validated rule set a configuration describes.
pub fn rule_set_from(config: &OptimizerConfig) -> Result<RuleSet, RuleError> {
    let positions = config
        .positions
        .iter()
        .map(|position| {
            let rule = PositionRule::bounded(position.label.clone(), position.min, position.max);
            match position.fixed_slots {
                Some(fixed) => rule.with_fixed_slots(fixed),
                None => rule,
            }
        })
        .collect();
    let flex = FlexRule::new(config.flex.positions.iter().cloned(), config.flex.count);
    RuleSet::new(positions, flex)
}

impl<B: IlpSolver> LineupSolver<B> {
    /// Creates an engine from a configuration's budget and
    /// diversification targets.
    pub fn from_config(backend: B, config: &OptimizerConfig) -> Self {
        Self::new(backend, config.budget)
            .with_lineup_count(config.lineup_count)
            .with_uniques(config.uniques)
    }
}
