//! # Slipgrid Core
//!
//! Sliding-tile ("15-puzzle") core engine for Slipgrid.
//!
//! This crate provides the deterministic puzzle logic: dealing a
//! randomized-but-solvable starting arrangement, resolving a player's cell
//! selection into a move (single slide or row/column group push), committing
//! that move as ordered swaps, and detecting the solved state. Rendering,
//! gesture interpretation, and animation live in a presentation layer that
//! consumes this engine.
//!
//! ## Architecture
//!
//! - [`grid::GridState`]: owns the tile permutation and the blank position;
//!   answers solvability (inversion parity) and solved-state queries.
//! - [`resolver::MoveResolver`]: pure translation of a selected cell into a
//!   [`resolver::MoveIntent`], plus the commit path that realizes it as
//!   ordered adjacent swaps.
//! - [`session::PuzzleSession`]: per-puzzle orchestrator owning the grid and
//!   a seeded RNG stream.
//!
//! ## Determinism
//!
//! Randomness is an injected capability: shuffling takes any [`rand::Rng`],
//! and sessions own a `ChaCha8Rng` seeded from a caller-supplied `u64`.
//! The same seed always produces the same deal and the same move outcomes.
//!
//! ## Usage
//!
//! ```
//! use slipgrid_core::grid::GridState;
//! use slipgrid_core::resolver::MoveResolver;
//!
//! # fn main() -> Result<(), slipgrid_core::error::GridError> {
//! let mut grid = GridState::new_solved(4)?;
//! assert!(grid.is_solved());
//!
//! // The blank starts bottom-right (flat index 15); its left neighbor slides in.
//! let intent = MoveResolver::resolve(&grid, 14)?;
//! let applied = MoveResolver::apply(&mut grid, &intent)?;
//! assert_eq!(applied.steps.len(), 1);
//! assert_eq!(grid.blank_index(), 14);
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod error;
pub mod grid;
pub mod resolver;
pub mod session;
pub mod tile;

// Re-exports for convenience
pub use error::GridError;
pub use grid::{GridPos, GridState};
pub use resolver::{AppliedMove, MoveIntent, MoveResolver, MoveStep, PushDirection};
pub use session::{Phase, PuzzleSession};
pub use tile::{PayloadId, Tile};

#[cfg(test)]
mod tests;
