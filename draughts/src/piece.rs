use serde::{Deserialize, Serialize};

use crate::Cell;

/// One of the two players.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    /// Starts on rows 0 to 2 and moves first by default.
    #[default]
    Black,
    /// Starts on rows 5 to 7.
    White,
}

impl Side {
    pub fn opponent(self) -> Side {
        match self {
            Side::Black => Side::White,
            Side::White => Side::Black,
        }
    }
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Side::Black => write!(f, "Black"),
            Side::White => write!(f, "White"),
        }
    }
}

/// Identifies a piece for the whole game, also after it has been captured.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct PieceId(pub usize);

/// A single piece and everything the rules need to know about it.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Piece {
    pub id: PieceId,
    pub side: Side,
    pub crowned: bool,
    /// Where the piece stands. Stale once `captured` is set.
    pub position: Cell,
    pub captured: bool,
}

impl Piece {
    /// Single-character rendering, uppercase when crowned.
    pub fn symbol(&self) -> char {
        match (self.side, self.crowned) {
            (Side::Black, false) => 'b',
            (Side::Black, true) => 'B',
            (Side::White, false) => 'w',
            (Side::White, true) => 'W',
        }
    }
}
