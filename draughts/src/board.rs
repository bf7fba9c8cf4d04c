mod cell;

pub use cell::*;

use crate::{DraughtsError, Piece, PieceId, Side};

/// The 8x8 board, plus every piece that has been on it during the game.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    /// The piece standing on each cell, in row-major order.
    ///
    /// Derived from `pieces`: a cell refers to a piece exactly when that
    /// piece is not captured and its position is that cell.
    squares: [Option<PieceId>; 64],
    /// Indexed by [`PieceId`]. Captured pieces are never removed from here.
    pieces: Vec<Piece>,
    /// Captured pieces of both sides, in the order they were taken.
    taken: Vec<PieceId>,
}

impl Board {
    /// A board without any pieces, for setting up custom positions.
    pub fn empty() -> Self {
        Self {
            squares: [None; 64],
            pieces: Vec::with_capacity(24),
            taken: Vec::new(),
        }
    }

    /// The starting layout: twelve Black pieces on the dark squares of rows
    /// 0 to 2 and twelve White pieces on rows 5 to 7.
    pub fn standard() -> Self {
        let mut board = Self::empty();
        for cell in Cell::all() {
            if cell.is_dark() && cell.y != 3 && cell.y != 4 {
                let side = if cell.y < 4 { Side::Black } else { Side::White };
                board.insert(side, false, cell);
            }
        }
        board
    }

    /// Puts a new piece on an empty dark square.
    pub fn add_piece(
        &mut self,
        side: Side,
        crowned: bool,
        cell: Cell,
    ) -> Result<PieceId, DraughtsError> {
        self.ensure_free(cell)?;
        Ok(self.insert(side, crowned, cell))
    }

    /// Sets up a custom position from `(side, crowned, cell)` triples.
    ///
    /// Pieces get ids in the order given. Fails on the first placement that
    /// [`add_piece`](Self::add_piece) rejects.
    pub fn from_pieces(
        pieces: impl IntoIterator<Item = (Side, bool, Cell)>,
    ) -> Result<Board, DraughtsError> {
        let mut board = Self::empty();
        for (side, crowned, cell) in pieces {
            board.add_piece(side, crowned, cell)?;
        }
        Ok(board)
    }

    /// Returns the piece on this cell, if any.
    pub fn piece_at(&self, cell: Cell) -> Result<Option<&Piece>, DraughtsError> {
        cell.ensure_in_bounds()?;
        Ok(self.occupant(cell))
    }

    /// Looks up a piece by id, whether it is on the board or captured.
    pub fn get(&self, id: PieceId) -> Option<&Piece> {
        self.pieces.get(id.0)
    }

    /// Moves a piece that is still in play to an empty dark square.
    ///
    /// This does not check any movement rules.
    pub fn place(&mut self, id: PieceId, cell: Cell) -> Result<(), DraughtsError> {
        let piece = self
            .get(id)
            .filter(|p| !p.captured)
            .ok_or(DraughtsError::PieceNotOnBoard { id })?;
        if piece.position == cell {
            return Ok(());
        }
        self.ensure_free(cell)?;
        self.relocate(id, cell);
        Ok(())
    }

    /// Takes a piece off the board into its owner's captured-pieces area.
    ///
    /// Returns the piece's slot in that area, or `None` if the piece is unknown
    /// or was already captured.
    pub fn remove(&mut self, id: PieceId) -> Option<usize> {
        let piece = self.pieces.get_mut(id.0)?;
        if piece.captured {
            return None;
        }
        piece.captured = true;
        let (side, position) = (piece.side, piece.position);
        if let Some(idx) = position.index() {
            self.squares[idx] = None;
        }
        let slot = self.captured(side).count();
        self.taken.push(id);
        Some(slot)
    }

    /// The pieces still in play.
    pub fn pieces(&self) -> impl Iterator<Item = &Piece> + '_ {
        self.pieces.iter().filter(|p| !p.captured)
    }

    /// The captured pieces of one side, in the order they were taken.
    pub fn captured(&self, side: Side) -> impl Iterator<Item = &Piece> + '_ {
        self.taken
            .iter()
            .map(move |id| &self.pieces[id.0])
            .filter(move |p| p.side == side)
    }

    /// How many pieces of this side are still in play.
    pub fn count(&self, side: Side) -> usize {
        self.pieces().filter(|p| p.side == side).count()
    }

    // Like piece_at(), but treats cells outside of the board as empty.
    pub(crate) fn occupant(&self, cell: Cell) -> Option<&Piece> {
        let id = self.squares[cell.index()?]?;
        Some(&self.pieces[id.0])
    }

    // Moves a piece without any validation. The id must come from this board.
    pub(crate) fn relocate(&mut self, id: PieceId, cell: Cell) {
        let from = self.pieces[id.0].position;
        if let Some(idx) = from.index() {
            self.squares[idx] = None;
        }
        if let Some(idx) = cell.index() {
            self.squares[idx] = Some(id);
        }
        self.pieces[id.0].position = cell;
    }

    // Returns true if the piece was not crowned before.
    pub(crate) fn crown(&mut self, id: PieceId) -> bool {
        !std::mem::replace(&mut self.pieces[id.0].crowned, true)
    }

    fn ensure_free(&self, cell: Cell) -> Result<(), DraughtsError> {
        cell.ensure_in_bounds()?;
        if !cell.is_dark() {
            return Err(DraughtsError::LightSquare { cell });
        }
        if self.occupant(cell).is_some() {
            return Err(DraughtsError::CellOccupied { cell });
        }
        Ok(())
    }

    fn insert(&mut self, side: Side, crowned: bool, cell: Cell) -> PieceId {
        let id = PieceId(self.pieces.len());
        self.pieces.push(Piece {
            id,
            side,
            crowned,
            position: cell,
            captured: false,
        });
        if let Some(idx) = cell.index() {
            self.squares[idx] = Some(id);
        }
        id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_layout() {
        let board = Board::standard();
        assert_eq!(board.count(Side::Black), 12);
        assert_eq!(board.count(Side::White), 12);
        for piece in board.pieces() {
            assert!(piece.position.is_dark());
            assert!(!piece.crowned);
            match piece.side {
                Side::Black => assert!((0..=2).contains(&piece.position.y)),
                Side::White => assert!((5..=7).contains(&piece.position.y)),
            }
        }
        for x in 0..BOARD_SIZE {
            assert_eq!(board.piece_at(Cell::new(x, 3)), Ok(None));
            assert_eq!(board.piece_at(Cell::new(x, 4)), Ok(None));
        }
        assert_eq!(
            board.piece_at(Cell::new(1, 2)).unwrap().map(|p| p.side),
            Some(Side::Black)
        );
    }

    #[test]
    fn out_of_bounds_lookup() {
        let board = Board::standard();
        assert_eq!(
            board.piece_at(Cell::new(8, 1)),
            Err(DraughtsError::OutOfBounds { x: 8, y: 1 })
        );
        assert_eq!(
            board.piece_at(Cell::new(0, -1)),
            Err(DraughtsError::OutOfBounds { x: 0, y: -1 })
        );
    }

    #[test]
    fn add_piece_validates_the_square() {
        let mut board = Board::empty();
        board.add_piece(Side::Black, false, Cell::new(2, 3)).unwrap();
        assert_eq!(
            board.add_piece(Side::White, false, Cell::new(2, 3)),
            Err(DraughtsError::CellOccupied {
                cell: Cell::new(2, 3)
            })
        );
        assert_eq!(
            board.add_piece(Side::White, false, Cell::new(2, 2)),
            Err(DraughtsError::LightSquare {
                cell: Cell::new(2, 2)
            })
        );
        assert_eq!(
            board.add_piece(Side::White, false, Cell::new(9, 0)),
            Err(DraughtsError::OutOfBounds { x: 9, y: 0 })
        );
    }

    #[test]
    fn from_pieces_rejects_invalid_positions() {
        let board = Board::from_pieces([
            (Side::Black, false, Cell::new(1, 0)),
            (Side::White, true, Cell::new(2, 7)),
        ])
        .unwrap();
        assert_eq!(board.get(PieceId(1)).map(|p| p.crowned), Some(true));

        assert_eq!(
            Board::from_pieces([
                (Side::Black, false, Cell::new(1, 0)),
                (Side::White, false, Cell::new(1, 0)),
            ]),
            Err(DraughtsError::CellOccupied {
                cell: Cell::new(1, 0)
            })
        );
        assert_eq!(
            Board::from_pieces([(Side::Black, false, Cell::new(2, 2))]),
            Err(DraughtsError::LightSquare {
                cell: Cell::new(2, 2)
            })
        );
        assert_eq!(
            Board::from_pieces([
                (Side::Black, false, Cell::new(1, 0)),
                (Side::White, false, Cell::new(8, 1)),
            ]),
            Err(DraughtsError::OutOfBounds { x: 8, y: 1 })
        );
    }

    #[test]
    fn place_keeps_squares_in_sync() {
        let mut board = Board::empty();
        let id = board.add_piece(Side::White, false, Cell::new(5, 6)).unwrap();
        board.place(id, Cell::new(4, 5)).unwrap();
        assert_eq!(board.piece_at(Cell::new(5, 6)), Ok(None));
        assert_eq!(
            board.piece_at(Cell::new(4, 5)).unwrap().map(|p| p.id),
            Some(id)
        );
        assert_eq!(board.get(id).map(|p| p.position), Some(Cell::new(4, 5)));
    }

    #[test]
    fn remove_marks_captured_once() {
        let mut board = Board::empty();
        let first = board.add_piece(Side::White, false, Cell::new(3, 4)).unwrap();
        let second = board.add_piece(Side::White, true, Cell::new(5, 4)).unwrap();
        let black = board.add_piece(Side::Black, false, Cell::new(0, 1)).unwrap();

        assert_eq!(board.remove(first), Some(0));
        assert_eq!(board.remove(black), Some(0));
        assert_eq!(board.remove(second), Some(1));
        assert_eq!(board.remove(first), None);

        assert_eq!(board.piece_at(Cell::new(3, 4)), Ok(None));
        assert_eq!(board.count(Side::White), 0);
        let taken: Vec<PieceId> = board.captured(Side::White).map(|p| p.id).collect();
        assert_eq!(taken, vec![first, second]);
        assert!(board.get(first).unwrap().captured);
        assert_eq!(
            board.place(first, Cell::new(3, 4)),
            Err(DraughtsError::PieceNotOnBoard { id: first })
        );
    }
}
