use serde::{Deserialize, Serialize};

use crate::DraughtsError;

/// The number of rows and of columns of the board.
pub const BOARD_SIZE: i8 = 8;

/// A square on the board.
///
/// `x` is the column and `y` the row, both counted from zero. Row 0 is
/// Black's home row, row 7 is White's.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Cell {
    pub x: i8,
    pub y: i8,
}

impl std::fmt::Display for Cell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl Cell {
    pub const fn new(x: i8, y: i8) -> Self {
        Self { x, y }
    }

    pub fn is_in_bounds(self) -> bool {
        (0..BOARD_SIZE).contains(&self.x) && (0..BOARD_SIZE).contains(&self.y)
    }

    /// Returns [`DraughtsError::OutOfBounds`] if this cell is not on the board.
    pub fn ensure_in_bounds(self) -> Result<(), DraughtsError> {
        if self.is_in_bounds() {
            Ok(())
        } else {
            Err(DraughtsError::OutOfBounds {
                x: self.x,
                y: self.y,
            })
        }
    }

    /// Only the dark squares are playable.
    pub fn is_dark(self) -> bool {
        (self.x + self.y).rem_euclid(2) == 1
    }

    /// Is this cell on the first or the last row?
    pub fn is_edge_row(self) -> bool {
        self.y == 0 || self.y == BOARD_SIZE - 1
    }

    /// Index into a row-major array of all 64 cells.
    pub(crate) fn index(self) -> Option<usize> {
        if !self.is_in_bounds() {
            return None;
        }
        Some((self.y * BOARD_SIZE + self.x) as usize)
    }

    /// All cells of the board in row-major order.
    pub fn all() -> impl Iterator<Item = Cell> {
        (0..BOARD_SIZE).flat_map(|y| (0..BOARD_SIZE).map(move |x| Cell::new(x, y)))
    }
}
