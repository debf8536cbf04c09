//! Error types for the puzzle engine.
//!
//! The engine has no recoverable failures: every variant here marks a
//! programming error at the call boundary, and the engine fails fast rather
//! than silently clamping, since clamping would corrupt the permutation
//! invariant. A selection that resolves to no move is *not* an error; it is
//! the [`crate::resolver::MoveIntent::NoMove`] success case.

use thiserror::Error;

/// Errors surfaced by the puzzle engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GridError {
    /// A coordinate or flat index fell outside the grid.
    ///
    /// For a coordinate the limit is the grid edge; for a flat index it is
    /// the cell count.
    #[error("index {index} outside the valid range 0..{limit}")]
    IndexOutOfRange {
        /// The offending coordinate or flat index.
        index: usize,
        /// The exclusive upper bound it violated.
        limit: usize,
    },

    /// The requested grid edge cannot form a puzzle.
    #[error("grid edge must be at least 2, got {edge}")]
    DegenerateEdge {
        /// The rejected edge length.
        edge: usize,
    },

    /// A move intent was applied against a state it was not resolved from.
    #[error("move intent does not match the current blank position")]
    StaleIntent,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_out_of_range_message_names_both_values() {
        let err = GridError::IndexOutOfRange {
            index: 16,
            limit: 16,
        };
        assert_eq!(err.to_string(), "index 16 outside the valid range 0..16");
    }

    #[test]
    fn degenerate_edge_message() {
        let err = GridError::DegenerateEdge { edge: 1 };
        assert_eq!(err.to_string(), "grid edge must be at least 2, got 1");
    }
}
