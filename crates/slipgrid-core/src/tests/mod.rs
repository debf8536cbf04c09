//! Cross-module test suites for the puzzle engine.
//!
//! - `determinism.rs`: same seed, same deal, same move outcomes
//! - `integration.rs`: concrete 4×4 scenarios and a full play-through
//! - `properties.rs`: randomized properties (proptest)
//! - `helpers.rs`: RNG stubs and shared assertions

mod determinism;
mod helpers;

pub use helpers::*;
