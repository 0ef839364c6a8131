//! Shared test fixtures for LineupForge crates.
//!
//! This crate provides candidate pools and rule sets for testing. It
//! depends only on `lineupforge-core` to avoid circular dependencies.
//!
//! - [`slate`] - Candidate pool and rule-set fixtures
//!
//! # Usage
//!
//! Add as a dev-dependency in your crate's `Cargo.toml`:
//!
//! ```toml
//! [dev-dependencies]
//! lineupforge-test = { workspace = true }
//! ```

pub mod slate;

pub use slate::{
    classic_rules, classic_slate, random_slate, tiny_rules, tiny_slate, CLASSIC_BUDGET,
    TINY_BUDGET,
};
