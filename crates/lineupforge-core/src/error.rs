//! Error types for rule validation.

use thiserror::Error;

/// Rejected rule-set construction.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RuleError {
    /// A rule's minimum exceeds its maximum.
    #[error("invalid rule for position {position}: min {min} > max {max}")]
    InvalidRule {
        /// Offending position label.
        position: String,
        min: u32,
        max: u32,
    },

    /// A configured fixed-slot count falls outside the rule's bounds.
    #[error(
        "invalid fixed slot count for position {position}: {fixed} not within [{min}, {max}]"
    )]
    InvalidFixedSlots {
        /// Offending position label.
        position: String,
        fixed: u32,
        min: u32,
        max: u32,
    },

    /// The same position label appears in more than one rule.
    #[error("duplicate rule for position {position}")]
    DuplicatePosition { position: String },

    /// The flex rule names a position with no rule of its own.
    #[error("flex rule references unknown position {position}")]
    UnknownFlexPosition { position: String },

    /// The flex target cannot cover the contributing fixed slots.
    #[error("flex target {target} is below the contributing fixed slot total {fixed}")]
    FlexBelowFixed { target: u32, fixed: u32 },
}
