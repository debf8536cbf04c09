//! Grid state: the tile permutation and its queries.
//!
//! [`GridState`] owns the flat row-major array of tiles plus the blank's
//! position. It is mutated only through [`GridState::swap`] (directly or via
//! the move resolver) and answers the two questions the rest of the engine
//! is built on: *is this arrangement solvable* (inversion parity, no search)
//! and *is it solved*.
//!
//! # Flat indexing
//!
//! The grid is a flat array read as 2D through `n = y * edge + x`. That
//! conversion lives in exactly one place, [`GridPos`], because conflating
//! "same row" with "flat index differs by 1" is the classic boundary bug in
//! this logic. Adjacency is always decided on coordinates.
//!
//! # Example
//!
//! ```
//! use slipgrid_core::grid::{GridPos, GridState};
//!
//! # fn main() -> Result<(), slipgrid_core::error::GridError> {
//! let mut grid = GridState::new_solved(4)?;
//! assert!(grid.is_solved());
//! assert_eq!(grid.sum_inversions(), 0);
//!
//! // Swapping two tiles breaks solvability for an even edge.
//! grid.swap(GridPos::new(0, 0), GridPos::new(1, 0))?;
//! assert_eq!(grid.sum_inversions(), 1);
//! assert!(!grid.is_solvable());
//! # Ok(())
//! # }
//! ```

use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

use crate::error::GridError;
use crate::tile::{PayloadId, Tile};

// =============================================================================
// GridPos
// =============================================================================

/// A cell position on the grid, 0-indexed from the top-left.
///
/// `GridPos` is the single home of the flat-index conversion
/// (`n = y * edge + x`) and of coordinate-based adjacency.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GridPos {
    /// Column, `0 ≤ x < edge`.
    pub x: usize,
    /// Row, `0 ≤ y < edge`.
    pub y: usize,
}

impl GridPos {
    /// Creates a position from column and row.
    #[must_use]
    pub const fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }

    /// Converts this position to its row-major flat index.
    #[must_use]
    pub const fn to_index(self, edge: usize) -> usize {
        self.y * edge + self.x
    }

    /// Converts a row-major flat index back to a position.
    #[must_use]
    pub const fn from_index(index: usize, edge: usize) -> Self {
        Self {
            x: index % edge,
            y: index / edge,
        }
    }

    /// Returns true if both coordinates are inside a grid of the given edge.
    #[must_use]
    pub const fn in_bounds(self, edge: usize) -> bool {
        self.x < edge && self.y < edge
    }

    /// Returns true if `other` is one of the four grid neighbors of `self`.
    ///
    /// Computed from coordinates, never from flat-index arithmetic: flat
    /// indices that differ by 1 across a row boundary are *not* adjacent.
    #[must_use]
    pub fn is_adjacent(self, other: Self) -> bool {
        self.x.abs_diff(other.x) + self.y.abs_diff(other.y) == 1
    }
}

impl fmt::Display for GridPos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

// =============================================================================
// Parity rule
// =============================================================================

/// The classic 15-puzzle parity rule, on raw numbers.
///
/// For an odd edge the arrangement is solvable iff the inversion count is
/// even. For an even edge it is solvable iff
/// `(inversions + edge - blank_row) % 2 == 0`, where `blank_row` is the
/// blank's current row 1-indexed from the top (`blank.y + 1`). The parity
/// theorem is sensitive to exactly this offset, so the arithmetic is kept
/// verbatim here and [`GridState::is_solvable`] supplies the row.
#[must_use]
pub fn solvable_by_parity(edge: usize, inversions: usize, blank_row: usize) -> bool {
    if edge % 2 == 1 {
        inversions % 2 == 0
    } else {
        (inversions + edge - blank_row) % 2 == 0
    }
}

// =============================================================================
// GridState
// =============================================================================

/// The tile permutation of one puzzle.
///
/// `GridState` holds `edge * edge` tiles flattened row-major and keeps
/// `blank` pointing at the one blank tile after every mutation. It is
/// created per puzzle session, mutated only through [`GridState::swap`]
/// (shuffling and committed moves both reduce to swaps), and replaced
/// wholesale on replay.
///
/// # Invariants
///
/// - `tiles` is always a permutation: one blank plus `edge² - 1` distinct
///   tiles whose home cells cover every non-blank cell exactly once.
/// - `tiles[blank]` is the blank tile after every mutation.
///
/// Out-of-bounds coordinates are programming errors and fail fast with
/// [`GridError::IndexOutOfRange`]; nothing is clamped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridState {
    /// Grid edge length N (the grid is N×N).
    edge: usize,
    /// Row-major tiles, `tiles[y * edge + x]`.
    tiles: Vec<Tile>,
    /// Current flat index of the blank tile.
    blank: usize,
}

impl GridState {
    /// Creates the canonical solved grid.
    ///
    /// Payload ids are assigned in solved-rank order (`0 ..= edge² - 2`) and
    /// the blank sits bottom-right, its home cell.
    ///
    /// # Errors
    ///
    /// [`GridError::DegenerateEdge`] if `edge < 2`.
    pub fn new_solved(edge: usize) -> Result<Self, GridError> {
        if edge < 2 {
            return Err(GridError::DegenerateEdge { edge });
        }
        let count = edge * edge;
        let mut tiles = Vec::with_capacity(count);
        for n in 0..count - 1 {
            // Payload ids fit easily: edge² - 1 tiles, edges are small.
            #[allow(clippy::cast_possible_truncation)]
            tiles.push(Tile::new(GridPos::from_index(n, edge), PayloadId::new(n as u32)));
        }
        tiles.push(Tile::blank(GridPos::from_index(count - 1, edge)));
        Ok(Self {
            edge,
            tiles,
            blank: count - 1,
        })
    }

    /// Deals a shuffled, guaranteed-solvable grid.
    ///
    /// Repeats (shuffle → parity check) until the arrangement is solvable.
    /// Parity is a fair coin flip per reshuffle, so the expected number of
    /// attempts is at most 2. There is deliberately no shortcut around the
    /// check: even a degenerate random source goes through it, because
    /// skipping it is how unsolvable deals ship.
    ///
    /// # Errors
    ///
    /// [`GridError::DegenerateEdge`] if `edge < 2`.
    pub fn new_shuffled_solvable<R: Rng + ?Sized>(
        edge: usize,
        rng: &mut R,
    ) -> Result<Self, GridError> {
        let mut grid = Self::new_solved(edge)?;
        let mut attempts = 0u32;
        loop {
            grid.shuffle(rng);
            attempts += 1;
            if grid.is_solvable() {
                debug!(edge, attempts, "shuffle converged on a solvable deal");
                return Ok(grid);
            }
        }
    }

    /// Returns the grid edge length N.
    #[must_use]
    pub const fn edge(&self) -> usize {
        self.edge
    }

    /// Returns the number of cells, `edge * edge`.
    #[must_use]
    pub const fn tile_count(&self) -> usize {
        self.edge * self.edge
    }

    /// Returns the tile currently at the given position.
    ///
    /// # Errors
    ///
    /// [`GridError::IndexOutOfRange`] for an out-of-bounds position.
    pub fn tile_at(&self, pos: GridPos) -> Result<&Tile, GridError> {
        let n = self.index_of(pos)?;
        Ok(&self.tiles[n])
    }

    /// Returns the tile currently at the given flat index.
    ///
    /// # Errors
    ///
    /// [`GridError::IndexOutOfRange`] for an out-of-bounds index.
    pub fn tile_at_index(&self, index: usize) -> Result<&Tile, GridError> {
        let n = self.checked_index(index)?;
        Ok(&self.tiles[n])
    }

    /// Iterates over all cells in row-major order with their positions.
    ///
    /// This is the renderer's walk: each tile's payload says what to draw at
    /// the yielded position.
    pub fn tiles(&self) -> impl Iterator<Item = (GridPos, &Tile)> + '_ {
        self.tiles
            .iter()
            .enumerate()
            .map(|(n, tile)| (GridPos::from_index(n, self.edge), tile))
    }

    /// Returns the blank's current flat index.
    #[must_use]
    pub const fn blank_index(&self) -> usize {
        self.blank
    }

    /// Returns the blank's current position.
    #[must_use]
    pub const fn blank_position(&self) -> GridPos {
        GridPos::from_index(self.blank, self.edge)
    }

    /// Converts a position to its flat index, bounds-checked.
    ///
    /// # Errors
    ///
    /// [`GridError::IndexOutOfRange`] for an out-of-bounds position.
    pub fn index_of(&self, pos: GridPos) -> Result<usize, GridError> {
        if pos.x >= self.edge {
            return Err(GridError::IndexOutOfRange {
                index: pos.x,
                limit: self.edge,
            });
        }
        if pos.y >= self.edge {
            return Err(GridError::IndexOutOfRange {
                index: pos.y,
                limit: self.edge,
            });
        }
        Ok(pos.to_index(self.edge))
    }

    /// Bounds-checks a flat index.
    ///
    /// # Errors
    ///
    /// [`GridError::IndexOutOfRange`] if `index >= tile_count()`.
    pub fn checked_index(&self, index: usize) -> Result<usize, GridError> {
        if index >= self.tile_count() {
            return Err(GridError::IndexOutOfRange {
                index,
                limit: self.tile_count(),
            });
        }
        Ok(index)
    }

    /// Exchanges the tiles at two positions.
    ///
    /// No adjacency constraint: shuffling and committed moves both funnel
    /// through here. If either side is the blank, the blank index follows it.
    ///
    /// Swapping the same arguments twice is an identity operation.
    ///
    /// # Errors
    ///
    /// [`GridError::IndexOutOfRange`] for an out-of-bounds position; the
    /// grid is untouched in that case.
    pub fn swap(&mut self, a: GridPos, b: GridPos) -> Result<(), GridError> {
        let ai = self.index_of(a)?;
        let bi = self.index_of(b)?;
        self.swap_flat(ai, bi);
        Ok(())
    }

    /// Swap on pre-validated flat indices; keeps `blank` consistent.
    fn swap_flat(&mut self, ai: usize, bi: usize) {
        self.tiles.swap(ai, bi);
        if self.blank == ai {
            self.blank = bi;
        } else if self.blank == bi {
            self.blank = ai;
        }
    }

    /// Shuffles the grid in place with a Fisher–Yates pass.
    ///
    /// For each flat index `i` from `edge² - 1` down to `1`, draws `j`
    /// uniformly from `[0, i]` and swaps the two cells: exactly `edge² - 1`
    /// draws, each bounded by the current `i`. The shrinking bound is what
    /// makes the permutation uniform; a fixed bound would bias it.
    ///
    /// The result is *not* checked for solvability here; use
    /// [`GridState::new_shuffled_solvable`] for a playable deal.
    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        for i in (1..self.tile_count()).rev() {
            let j = rng.gen_range(0..=i);
            self.swap_flat(i, j);
        }
    }

    /// Counts the inversions contributed by the tile at `pos`.
    ///
    /// A tile's rank is the flat index of its home cell. The tile at `pos`
    /// contributes one inversion for every later flat index holding a tile
    /// of smaller rank. The blank (rank `edge² - 1`) never counts as the
    /// larger value.
    ///
    /// # Errors
    ///
    /// [`GridError::IndexOutOfRange`] for an out-of-bounds position.
    pub fn count_inversions(&self, pos: GridPos) -> Result<usize, GridError> {
        let n = self.index_of(pos)?;
        Ok(self.inversions_after(n))
    }

    fn inversions_after(&self, n: usize) -> usize {
        let rank = self.tiles[n].solved_rank(self.edge);
        if rank == self.tile_count() - 1 {
            // The blank is excluded from contributing as a larger value.
            return 0;
        }
        self.tiles[n + 1..]
            .iter()
            .filter(|tile| tile.solved_rank(self.edge) < rank)
            .count()
    }

    /// Returns the total inversion count of the grid.
    ///
    /// Direct definition over all position pairs, O(edge⁴). Fine at puzzle
    /// sizes; a merge-count would drop it to O(edge² log edge) if ever
    /// needed.
    #[must_use]
    pub fn sum_inversions(&self) -> usize {
        (0..self.tile_count())
            .map(|n| self.inversions_after(n))
            .sum()
    }

    /// Returns true if this arrangement can reach the solved state through
    /// legal slides.
    ///
    /// Applies [`solvable_by_parity`] to the current inversion count and the
    /// blank's current row (1-indexed from the top).
    #[must_use]
    pub fn is_solvable(&self) -> bool {
        solvable_by_parity(self.edge, self.sum_inversions(), self.blank_position().y + 1)
    }

    /// Returns true if every tile sits on its home cell.
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.tiles
            .iter()
            .enumerate()
            .all(|(n, tile)| tile.home().to_index(self.edge) == n)
    }
}

impl fmt::Display for GridState {
    /// Renders the grid as solved ranks, the blank as `.`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in 0..self.edge {
            for x in 0..self.edge {
                let tile = &self.tiles[GridPos::new(x, y).to_index(self.edge)];
                if tile.is_blank() {
                    write!(f, "  . ")?;
                } else {
                    write!(f, "{:3} ", tile.solved_rank(self.edge))?;
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

// =============================================================================
// Tests
// =============================================================================
