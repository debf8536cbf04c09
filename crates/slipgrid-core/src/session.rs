//! Per-puzzle session orchestration.
//!
//! A [`PuzzleSession`] owns one [`GridState`] plus the seeded RNG stream
//! that deals it, and drives the puzzle lifecycle:
//!
//! ```text
//! deal (shuffle until solvable) → Playable ⇄ Playable → Solved → deal …
//! ```
//!
//! Shuffling and the solvability check run synchronously inside
//! [`PuzzleSession::new`] and [`PuzzleSession::reshuffle`], so the
//! observable phases are just [`Phase::Playable`] and [`Phase::Solved`].
//! `Solved` is entered exactly when a committed move leaves every tile on
//! its home cell, never spontaneously.
//!
//! The session is single-threaded and synchronous; it is the caller's job
//! to serialize selections (e.g. ignore taps while an animation settles).
//!
//! # Determinism
//!
//! Sessions seed a `ChaCha8Rng` from a caller-supplied `u64`. The same seed
//! produces the same deal, and reshuffles continue the same stream, so a
//! whole play-through is reproducible from `(seed, selections)`.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::GridError;
use crate::grid::{GridPos, GridState};
use crate::resolver::{AppliedMove, MoveResolver};

/// Observable lifecycle phase of a puzzle session.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    /// The puzzle accepts selections.
    Playable,
    /// Every tile is home; selections are ignored until a reshuffle.
    Solved,
}

/// A single puzzle play-through.
#[derive(Debug, Clone)]
pub struct PuzzleSession {
    /// The live tile permutation.
    grid: GridState,
    /// Deterministic RNG stream for deals and re-deals.
    rng: ChaCha8Rng,
    /// Seed the stream was created from, kept for replay.
    seed: u64,
    /// Current lifecycle phase.
    phase: Phase,
    /// Committed moves since the last deal.
    moves_taken: u64,
}

impl PuzzleSession {
    /// Deals a new shuffled, solvable puzzle.
    ///
    /// # Errors
    ///
    /// [`GridError::DegenerateEdge`] if `edge < 2`.
    pub fn new(edge: usize, seed: u64) -> Result<Self, GridError> {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let grid = GridState::new_shuffled_solvable(edge, &mut rng)?;
        debug!(edge, seed, "dealt new puzzle session");
        Ok(Self {
            grid,
            rng,
            seed,
            phase: Phase::Playable,
            moves_taken: 0,
        })
    }

    /// Handles a player's cell selection.
    ///
    /// Resolves the selection against the current grid and commits the
    /// resulting move. Returns `None` when the selection produces no move,
    /// including any selection while the puzzle is already solved; the
    /// presentation layer shows no change for `None`. A committed move that
    /// leaves every tile home flips the session to [`Phase::Solved`].
    ///
    /// # Errors
    ///
    /// [`GridError::IndexOutOfRange`] for an out-of-bounds position.
    pub fn select(&mut self, pos: GridPos) -> Result<Option<AppliedMove>, GridError> {
        if self.phase == Phase::Solved {
            return Ok(None);
        }
        let Some(applied) = MoveResolver::try_move(&mut self.grid, pos)? else {
            return Ok(None);
        };
        self.moves_taken += 1;
        if applied.solved {
            self.phase = Phase::Solved;
            info!(moves = self.moves_taken, "puzzle solved");
        }
        Ok(Some(applied))
    }

    /// Deals a fresh solvable grid from the session's RNG stream and
    /// re-enters [`Phase::Playable`]. This is the replay edge out of
    /// `Solved`, and also works mid-game.
    ///
    /// # Errors
    ///
    /// Propagates grid construction errors; the edge never changes, so in
    /// practice this cannot fail for a session that was constructed.
    pub fn reshuffle(&mut self) -> Result<(), GridError> {
        self.grid = GridState::new_shuffled_solvable(self.grid.edge(), &mut self.rng)?;
        self.phase = Phase::Playable;
        self.moves_taken = 0;
        debug!(seed = self.seed, "reshuffled puzzle session");
        Ok(())
    }

    /// Returns a read-only view of the current grid.
    #[must_use]
    pub fn grid(&self) -> &GridState {
        &self.grid
    }

    /// Returns a mutable reference to the grid.
    ///
    /// For presentation-layer setup and tests. Avoid mutating the grid
    /// between a resolve and its apply; go through [`PuzzleSession::select`]
    /// during play.
    ///
    /// Replacing the grid wholesale does not touch [`Phase`] or the move
    /// counter: a session left in [`Phase::Solved`] keeps ignoring
    /// selections regardless of the grid it now holds. The caller owns
    /// that consistency; [`PuzzleSession::reshuffle`] resets both.
    #[must_use]
    pub fn grid_mut(&mut self) -> &mut GridState {
        &mut self.grid
    }

    /// Returns the current lifecycle phase.
    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Returns the seed this session's RNG stream was created from.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Returns the number of committed moves since the last deal.
    #[must_use]
    pub fn moves_taken(&self) -> u64 {
        self.moves_taken
    }

    /// Returns true if the grid is currently solved.
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.grid.is_solved()
    }
}

// =============================================================================
// Tests
// =============================================================================
