use serde::{Deserialize, Serialize};

use crate::{Cell, PieceId};

/// The error type for addressing or editing the board.
///
/// These indicate a programming error in the caller, not an ordinary
/// game-flow rejection. See [`Rejection`] for the latter.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DraughtsError {
    OutOfBounds { x: i8, y: i8 },
    LightSquare { cell: Cell },
    CellOccupied { cell: Cell },
    PieceNotOnBoard { id: PieceId },
}

impl std::error::Error for DraughtsError {}

impl std::fmt::Display for DraughtsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DraughtsError::OutOfBounds { x, y } => {
                write!(f, "Coordinate ({}, {}) is outside of the 8x8 board", x, y)
            }
            DraughtsError::LightSquare { cell } => {
                write!(f, "Pieces can only stand on dark squares, but {} is light", cell)
            }
            DraughtsError::CellOccupied { cell } => {
                write!(f, "There is already a piece on {}", cell)
            }
            DraughtsError::PieceNotOnBoard { id } => {
                write!(f, "Piece #{} is not on the board", id.0)
            }
        }
    }
}

/// Why an attempted move was not carried out.
///
/// A rejection leaves the game state untouched, including the selection.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Rejection {
    /// No piece was selected.
    NoSelection,
    /// The target is neither a simple step nor a capture for the selected piece.
    IllegalMove,
    /// The move has a legal shape, but another piece stands on the target.
    TargetOccupied,
}

impl std::fmt::Display for Rejection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Rejection::NoSelection => write!(f, "Tried to move without selecting a piece"),
            Rejection::IllegalMove => write!(
                f,
                "The target is neither a diagonal step nor a jump over an opposing piece"
            ),
            Rejection::TargetOccupied => write!(f, "The target square is not empty"),
        }
    }
}
