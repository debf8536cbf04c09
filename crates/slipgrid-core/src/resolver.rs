//! Move resolution and application.
//!
//! [`MoveResolver`] is the only path from a player's cell selection to a
//! grid mutation. [`MoveResolver::resolve`] is a pure function of state plus
//! target producing a [`MoveIntent`]; [`MoveResolver::apply`] commits that
//! intent through [`GridState::swap`] and reports the steps for the
//! presentation layer to animate.
//!
//! # Invariants
//!
//! - `resolve` never mutates the grid.
//! - Adjacency and row/column membership are decided from coordinates,
//!   never from flat-index arithmetic; indices that differ by 1 across a
//!   row boundary are not a move.
//! - `apply` commits a push as adjacent pairwise swaps from the
//!   blank-adjacent end toward the selected cell, so every intermediate
//!   state is a valid permutation. The order is load-bearing; the swaps
//!   cannot be reordered or batched.
//!
//! # Example
//!
//! ```
//! use slipgrid_core::grid::{GridPos, GridState};
//! use slipgrid_core::resolver::{MoveIntent, MoveResolver, PushDirection};
//!
//! # fn main() -> Result<(), slipgrid_core::error::GridError> {
//! // Walk the blank from (3,3) to (1,1), then select (3,1): a row push.
//! let mut grid = GridState::new_solved(4)?;
//! grid.swap(GridPos::new(3, 3), GridPos::new(1, 3))?;
//! grid.swap(GridPos::new(1, 3), GridPos::new(1, 1))?;
//!
//! let intent = MoveResolver::resolve(&grid, 7)?;
//! assert_eq!(
//!     intent,
//!     MoveIntent::Push { cells: vec![7, 6], direction: PushDirection::Right }
//! );
//!
//! let applied = MoveResolver::apply(&mut grid, &intent)?;
//! assert_eq!(grid.blank_index(), 7);
//! assert_eq!(applied.steps.len(), 2);
//! # Ok(())
//! # }
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::trace;

use crate::error::GridError;
use crate::grid::{GridPos, GridState};

// =============================================================================
// Intent types
// =============================================================================

/// Which side of the blank the selected cell sits on; equivalently, the
/// direction the blank travels when the push is committed.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PushDirection {
    /// Selected cell is left of the blank in the same row.
    Left,
    /// Selected cell is right of the blank in the same row.
    Right,
    /// Selected cell is above the blank in the same column.
    Up,
    /// Selected cell is below the blank in the same column.
    Down,
}

impl fmt::Display for PushDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Left => write!(f, "left"),
            Self::Right => write!(f, "right"),
            Self::Up => write!(f, "up"),
            Self::Down => write!(f, "down"),
        }
    }
}

/// A resolved move intent.
///
/// Intents are transient: resolved against one grid state and meaningful
/// only until that state next mutates. Applying an intent against a grid
/// whose blank has moved fails with [`GridError::StaleIntent`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum MoveIntent {
    /// The selection produces no move. A distinct success case, never an
    /// error: the presentation layer simply shows no change.
    NoMove,
    /// A single tile slides from `from` into the adjacent blank at `to`.
    Slide {
        /// Flat index of the sliding tile.
        from: usize,
        /// Flat index of the blank it slides into.
        to: usize,
    },
    /// Every tile between the selected cell and the blank shifts one cell
    /// toward the blank, and the blank lands on the selected cell.
    Push {
        /// Flat indices from the selected cell toward the blank, blank
        /// excluded. Commit order is the reverse: blank-adjacent end first.
        cells: Vec<usize>,
        /// The side of the blank the selection sits on.
        direction: PushDirection,
    },
}

/// One committed swap: the tile previously at `from` now sits at `to`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveStep {
    /// Where the tile was.
    pub from: usize,
    /// Where it ended up (the cell the blank vacated).
    pub to: usize,
}

/// The outcome of a committed move: the `(source, dest)` steps in commit
/// order for the caller to animate, plus whether the grid is now solved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppliedMove {
    /// Tile movements in the order they were committed.
    pub steps: Vec<MoveStep>,
    /// True if the move left every tile on its home cell.
    pub solved: bool,
}

// =============================================================================
// MoveResolver
// =============================================================================

/// Translates cell selections into move intents and commits them.
///
/// All functions are associated; the resolver carries no state of its own
/// and reads the grid only through its query surface.
#[derive(Debug, Copy, Clone, Default)]
pub struct MoveResolver;

impl MoveResolver {
    /// Resolves a selected flat index against the current grid.
    ///
    /// In order: the blank itself is [`MoveIntent::NoMove`]; one of the four
    /// grid neighbors of the blank is a [`MoveIntent::Slide`]; another cell
    /// in the blank's row or column is a [`MoveIntent::Push`]; anything else
    /// is `NoMove`.
    ///
    /// # Errors
    ///
    /// [`GridError::IndexOutOfRange`] if `target` is outside the grid.
    pub fn resolve(state: &GridState, target: usize) -> Result<MoveIntent, GridError> {
        let target = state.checked_index(target)?;
        let blank = state.blank_index();
        if target == blank {
            return Ok(MoveIntent::NoMove);
        }

        let edge = state.edge();
        let t = GridPos::from_index(target, edge);
        let b = GridPos::from_index(blank, edge);

        if t.is_adjacent(b) {
            return Ok(MoveIntent::Slide {
                from: target,
                to: blank,
            });
        }

        if t.y == b.y {
            let direction = if t.x < b.x {
                PushDirection::Left
            } else {
                PushDirection::Right
            };
            return Ok(MoveIntent::Push {
                cells: Self::cells_between(target, blank, 1),
                direction,
            });
        }

        if t.x == b.x {
            let direction = if t.y < b.y {
                PushDirection::Up
            } else {
                PushDirection::Down
            };
            return Ok(MoveIntent::Push {
                cells: Self::cells_between(target, blank, edge),
                direction,
            });
        }

        Ok(MoveIntent::NoMove)
    }

    /// Walks from the selected cell toward the blank along one row or
    /// column, collecting every cell up to but excluding the blank.
    fn cells_between(target: usize, blank: usize, stride: usize) -> Vec<usize> {
        let mut cells = Vec::new();
        let mut cursor = target;
        while cursor != blank {
            cells.push(cursor);
            cursor = if target < blank {
                cursor + stride
            } else {
                cursor - stride
            };
        }
        cells
    }

    /// Commits a resolved intent against the grid.
    ///
    /// A slide is one swap. A push is committed blank-adjacent end first:
    /// each swap advances the blank one cell toward the selected cell and
    /// hands the vacated cell to the pushed tile, so the net effect is every
    /// intervening tile shifting one cell toward the old blank and the blank
    /// finishing on the selected cell.
    ///
    /// # Errors
    ///
    /// [`GridError::StaleIntent`] if the intent does not line up with the
    /// grid's current blank; the grid is untouched in that case for slides,
    /// and a stale push fails on its first mismatched swap.
    pub fn apply(state: &mut GridState, intent: &MoveIntent) -> Result<AppliedMove, GridError> {
        let edge = state.edge();
        let steps = match intent {
            MoveIntent::NoMove => Vec::new(),
            MoveIntent::Slide { from, to } => {
                if *to != state.blank_index() {
                    return Err(GridError::StaleIntent);
                }
                let a = GridPos::from_index(*from, edge);
                let b = GridPos::from_index(*to, edge);
                if !a.is_adjacent(b) {
                    return Err(GridError::StaleIntent);
                }
                state.swap(a, b)?;
                vec![MoveStep {
                    from: *from,
                    to: *to,
                }]
            }
            MoveIntent::Push { cells, .. } => {
                let mut steps = Vec::with_capacity(cells.len());
                // Stored order runs from the selected cell toward the blank;
                // commit order is the reverse.
                for &cell in cells.iter().rev() {
                    let blank = state.blank_index();
                    let a = GridPos::from_index(cell, edge);
                    let b = GridPos::from_index(blank, edge);
                    if !a.in_bounds(edge) || !a.is_adjacent(b) {
                        return Err(GridError::StaleIntent);
                    }
                    state.swap(a, b)?;
                    steps.push(MoveStep {
                        from: cell,
                        to: blank,
                    });
                }
                steps
            }
        };

        let solved = state.is_solved();
        trace!(steps = steps.len(), solved, "move committed");
        Ok(AppliedMove { steps, solved })
    }

    /// Resolves and commits a selection in one call.
    ///
    /// Returns `None` when the selection produces no move; otherwise the
    /// committed steps in animation order.
    ///
    /// # Errors
    ///
    /// [`GridError::IndexOutOfRange`] for an out-of-bounds position.
    pub fn try_move(
        state: &mut GridState,
        pos: GridPos,
    ) -> Result<Option<AppliedMove>, GridError> {
        let target = state.index_of(pos)?;
        let intent = Self::resolve(state, target)?;
        if intent == MoveIntent::NoMove {
            return Ok(None);
        }
        Ok(Some(Self::apply(state, &intent)?))
    }
}

// =============================================================================
// Tests
// =============================================================================
