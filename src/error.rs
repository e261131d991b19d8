//! Errors surfaced by move generation and path search. Step-level exhaustion
//! (walking off the board, a ray running out of squares) is ordinary control
//! flow and never reaches this type.

use crate::chess::core::{PieceKind, Square};

/// Failures that are deterministic functions of the query input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The piece's movement rule is undefined at the queried square, e.g. a
    /// white pawn standing on its own back rank.
    #[error("{square} is not a valid position for a {kind}")]
    IllegalPosition {
        #[allow(missing_docs)]
        kind: PieceKind,
        #[allow(missing_docs)]
        square: Square,
    },

    /// The search exhausted every branch without reaching the target.
    #[error("no path from {from} to {to}")]
    NoPathToTarget {
        #[allow(missing_docs)]
        from: Square,
        #[allow(missing_docs)]
        to: Square,
    },

    /// The piece cannot reach every target the tour would have to visit
    /// (bishops are bound to one square color, pawns only move forward).
    #[error("a {kind} cannot capture every enemy on the board")]
    UnsupportedTour {
        #[allow(missing_docs)]
        kind: PieceKind,
    },
}
