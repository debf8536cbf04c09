//! Tile types for the puzzle grid.
//!
//! A [`Tile`] remembers only its home cell in the solved layout plus an
//! opaque [`PayloadId`] the presentation layer maps to content (an image
//! slice, a glyph). The engine never interprets the payload; it only passes
//! it through unchanged. The one tile with no payload is the blank.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::grid::GridPos;

/// Opaque handle to presentation-layer content for one tile.
///
/// `PayloadId` is a newtype wrapper around `u32`. The engine assigns payloads
/// in solved-rank order when a grid is constructed and then treats them as
/// opaque; the presentation layer decides what each one looks like.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct PayloadId(u32);

impl PayloadId {
    /// Creates a new `PayloadId` from a raw `u32` value.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Returns the raw `u32` value of this identifier.
    #[must_use]
    pub const fn as_u32(self) -> u32 {
        self.0
    }
}

impl fmt::Debug for PayloadId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PayloadId({})", self.0)
    }
}

impl fmt::Display for PayloadId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for PayloadId {
    fn from(id: u32) -> Self {
        Self::new(id)
    }
}

/// One cell's occupant: its home coordinates in the solved layout plus an
/// opaque payload.
///
/// Exactly one tile per grid is blank (`payload == None`); by convention its
/// home is the bottom-right cell `(N-1, N-1)`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tile {
    /// Home coordinates in the solved layout (0-indexed).
    home: GridPos,
    /// Presentation payload; `None` marks the blank.
    payload: Option<PayloadId>,
}

impl Tile {
    /// Creates a tile with the given home cell and payload.
    #[must_use]
    pub const fn new(home: GridPos, payload: PayloadId) -> Self {
        Self {
            home,
            payload: Some(payload),
        }
    }

    /// Creates the blank tile with the given home cell.
    #[must_use]
    pub const fn blank(home: GridPos) -> Self {
        Self {
            home,
            payload: None,
        }
    }

    /// Returns this tile's home coordinates in the solved layout.
    #[must_use]
    pub const fn home(&self) -> GridPos {
        self.home
    }

    /// Returns this tile's payload, or `None` for the blank.
    #[must_use]
    pub const fn payload(&self) -> Option<PayloadId> {
        self.payload
    }

    /// Returns true if this is the blank tile.
    #[must_use]
    pub const fn is_blank(&self) -> bool {
        self.payload.is_none()
    }

    /// Returns this tile's solved rank: the row-major flat index of its home
    /// cell (`home.y * edge + home.x`).
    ///
    /// Ranks order tiles for inversion counting; the blank's rank is always
    /// `edge * edge - 1`.
    #[must_use]
    pub const fn solved_rank(&self, edge: usize) -> usize {
        self.home.y * edge + self.home.x
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn payload_id_roundtrip() {
        let id = PayloadId::new(7);
        assert_eq!(id.as_u32(), 7);
        assert_eq!(PayloadId::from(7), id);
        assert_eq!(format!("{id:?}"), "PayloadId(7)");
        assert_eq!(id.to_string(), "7");
    }

    #[test]
    fn blank_has_no_payload() {
        let tile = Tile::blank(GridPos::new(3, 3));
        assert!(tile.is_blank());
        assert!(tile.payload().is_none());
    }

    #[test]
    fn solved_rank_is_row_major() {
        let tile = Tile::new(GridPos::new(2, 1), PayloadId::new(0));
        assert_eq!(tile.solved_rank(4), 6);

        let blank = Tile::blank(GridPos::new(3, 3));
        assert_eq!(blank.solved_rank(4), 15);
    }

    #[test]
    fn serialization_roundtrip() {
        let tile = Tile::new(GridPos::new(1, 2), PayloadId::new(9));
        let json = serde_json::to_string(&tile).unwrap();
        let back: Tile = serde_json::from_str(&json).unwrap();
        assert_eq!(back, tile);
    }
}
