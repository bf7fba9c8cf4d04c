//! Movement, capture and promotion rules.
//!
//! Every function in here is a pure check against a [`Board`]; applying the
//! result is up to [`GameState`](crate::GameState).
//!
//! Directions follow one convention throughout: a piece moving in direction
//! `d` goes from row `y` to row `y - d`. Black's direction is `-1` (towards
//! White's home rows), White's is `+1`.

use crate::{Board, Cell, Piece, PieceId, Side};

/// What kind of move a legal target amounts to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MoveKind {
    /// One diagonal step.
    Simple,
    /// A jump over the given opposing piece.
    Capture { jumped: PieceId },
}

/// The vertical directions the piece may move in.
pub fn permitted_directions(piece: &Piece) -> &'static [i8] {
    match (piece.crowned, piece.side) {
        (true, _) => &[1, -1],
        (false, Side::Black) => &[-1],
        (false, Side::White) => &[1],
    }
}

/// Is `target` exactly one diagonal step away, in a permitted direction?
///
/// Cells outside of the board are never a legal step.
pub fn is_simple_move(piece: &Piece, target: Cell) -> bool {
    if !target.is_in_bounds() || !piece.position.is_in_bounds() {
        return false;
    }
    let Cell { x, y } = piece.position;
    permitted_directions(piece)
        .iter()
        .any(|&d| target.y == y - d && (target.x == x - d || target.x == x + d))
}

/// Returns the piece that would be jumped by moving to `target`.
///
/// The target must be two columns and two rows away, in a permitted direction,
/// and the cell in between must hold a piece of the other side. Whether the
/// target itself is free is not checked here. Cells outside of the board
/// never yield a jump.
pub fn jumped_piece(board: &Board, piece: &Piece, target: Cell) -> Option<PieceId> {
    if !target.is_in_bounds() || !piece.position.is_in_bounds() {
        return None;
    }
    let dx = target.x - piece.position.x;
    let dy = target.y - piece.position.y;
    if dx.abs() != 2 || dy.abs() != 2 {
        return None;
    }
    let (x_diff, y_diff) = (dx / 2, dy / 2);
    if !permitted_directions(piece).contains(&-y_diff) {
        return None;
    }
    board
        .occupant(Cell::new(target.x - x_diff, target.y - y_diff))
        .filter(|jumped| jumped.side != piece.side)
        .map(|jumped| jumped.id)
}

/// Classifies a move of `piece` to `target`, or returns `None` if it is illegal.
///
/// The simple-step and capture checks are independent; at most one of them
/// can hold for a given target.
pub fn classify(board: &Board, piece: &Piece, target: Cell) -> Option<MoveKind> {
    if is_simple_move(piece, target) {
        Some(MoveKind::Simple)
    } else {
        jumped_piece(board, piece, target).map(|jumped| MoveKind::Capture { jumped })
    }
}

/// Does landing on `target` crown this piece?
///
/// Both edge rows crown, regardless of side. A crowned piece is never
/// crowned again.
pub fn promotes(piece: &Piece, target: Cell) -> bool {
    target.is_edge_row() && !piece.crowned
}
