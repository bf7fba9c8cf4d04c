use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::rules::{self, MoveKind};
use crate::{Board, Cell, DraughtsError, PieceId, Rejection, RuleConfig, Side};

/// The number of opposing pieces each side has captured.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scores {
    /// Black pieces captured by White.
    pub white: u32,
    /// White pieces captured by Black.
    pub black: u32,
}

impl Scores {
    /// How many pieces `side` has captured.
    pub fn of(&self, side: Side) -> u32 {
        match side {
            Side::Black => self.black,
            Side::White => self.white,
        }
    }

    fn increment(&mut self, side: Side) {
        match side {
            Side::Black => self.black += 1,
            Side::White => self.white += 1,
        }
    }
}

/// Summarizes what an attempted move did.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum MoveOutcome {
    /// Nothing changed.
    Rejected { reason: Rejection },
    MovedSimple,
    /// A piece of the `captured` side was jumped and taken off the board.
    MovedWithCapture { captured: Side },
}

impl MoveOutcome {
    pub fn is_accepted(&self) -> bool {
        !matches!(self, MoveOutcome::Rejected { .. })
    }
}

/// The complete state of one game.
///
/// Operations don't mutate a state in place, they return the successor state.
/// There is no terminal state: the game goes on as long as the caller wants.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameState {
    board: Board,
    turn: Side,
    scores: Scores,
    /// If set, a piece of the side to move stands on this cell.
    selection: Option<Cell>,
}

/// Starts a game in the standard layout, with Black to move.
pub fn new_game() -> GameState {
    GameState::new()
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

impl GameState {
    pub fn new() -> Self {
        Self::with_config(&RuleConfig::default())
    }

    /// Starts a game in the standard layout.
    pub fn with_config(config: &RuleConfig) -> Self {
        Self::from_board(Board::standard(), config.first_turn)
    }

    /// Continues from a custom position, with no selection and zero scores.
    pub fn from_board(board: Board, turn: Side) -> Self {
        Self {
            board,
            turn,
            scores: Scores::default(),
            selection: None,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The side that may select and move a piece.
    pub fn current_turn(&self) -> Side {
        self.turn
    }

    pub fn scores(&self) -> Scores {
        self.scores
    }

    pub fn selection(&self) -> Option<Cell> {
        self.selection
    }

    /// E.g. "Black's Turn".
    pub fn turn_label(&self) -> String {
        format!("{}'s Turn", self.turn)
    }

    /// Selects the piece on `cell` for the next move.
    ///
    /// Only pieces of the side to move can be selected; selecting one replaces
    /// the previous selection. Anything else, including an empty cell, keeps
    /// the previous selection.
    pub fn select(&self, cell: Cell) -> Result<GameState, DraughtsError> {
        let mut next = self.clone();
        match self.board.piece_at(cell)? {
            Some(piece) if piece.side == self.turn => {
                debug!(%cell, side = %piece.side, "Selected piece");
                next.selection = Some(cell);
            }
            _ => trace!(%cell, turn = %self.turn, "Ignored selection"),
        }
        Ok(next)
    }

    /// Tries to move the selected piece to `target`.
    ///
    /// On success, the jumped piece (if any) is captured, the moved piece may be
    /// crowned, the selection is cleared and the turn passes to the other side.
    /// A rejected move returns an unchanged copy of the state.
    pub fn attempt_move(&self, target: Cell) -> Result<(GameState, MoveOutcome), DraughtsError> {
        target.ensure_in_bounds()?;
        match self.calculate_move(target) {
            Ok(plan) => Ok(plan.execute()),
            Err(reason) => {
                trace!(%target, %reason, "Rejected move");
                Ok((self.clone(), MoveOutcome::Rejected { reason }))
            }
        }
    }

    /// Every cell the selected piece could move to right now.
    pub fn targets(&self) -> Vec<Cell> {
        let Some(origin) = self.selection else {
            return Vec::new();
        };
        [
            (1, 1),
            (-1, 1),
            (1, -1),
            (-1, -1),
            (2, 2),
            (-2, 2),
            (2, -2),
            (-2, -2),
        ]
        .into_iter()
        .map(|(dx, dy)| Cell::new(origin.x + dx, origin.y + dy))
        .filter(|&target| target.is_in_bounds() && self.calculate_move(target).is_ok())
        .collect()
    }

    // The target must be in bounds.
    fn calculate_move(&self, target: Cell) -> Result<MovePlan<'_>, Rejection> {
        let piece = self
            .selection
            .and_then(|cell| self.board.occupant(cell))
            .ok_or(Rejection::NoSelection)?;
        let kind = rules::classify(&self.board, piece, target).ok_or(Rejection::IllegalMove)?;
        if self.board.occupant(target).is_some() {
            return Err(Rejection::TargetOccupied);
        }
        Ok(MovePlan {
            state: self,
            piece: piece.id,
            target,
            kind,
        })
    }

    /// Takes a jumped piece off the board and credits the capturing side.
    ///
    /// Returns the side of the captured piece.
    fn take_piece(&mut self, id: PieceId, capturer: Side) -> Side {
        let slot = self.board.remove(id);
        self.scores.increment(capturer);
        debug!(piece = id.0, ?slot, %capturer, "Captured piece");
        capturer.opponent()
    }
}

/// A validated move, tied to the state it was calculated from.
struct MovePlan<'a> {
    state: &'a GameState,
    piece: PieceId,
    target: Cell,
    kind: MoveKind,
}

impl MovePlan<'_> {
    fn execute(self) -> (GameState, MoveOutcome) {
        let mut next = self.state.clone();
        let mover = next.turn;

        let outcome = match self.kind {
            MoveKind::Simple => MoveOutcome::MovedSimple,
            MoveKind::Capture { jumped } => MoveOutcome::MovedWithCapture {
                captured: next.take_piece(jumped, mover),
            },
        };

        let promotes = next
            .board
            .get(self.piece)
            .is_some_and(|piece| rules::promotes(piece, self.target));
        if promotes && next.board.crown(self.piece) {
            debug!(piece = self.piece.0, cell = %self.target, "Crowned piece");
        }

        next.board.relocate(self.piece, self.target);
        next.selection = None;
        next.turn = mover.opponent();
        debug!(piece = self.piece.0, to = %self.target, ?outcome, "Moved piece");
        (next, outcome)
    }
}
