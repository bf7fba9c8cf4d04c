use serde::{Deserialize, Serialize};

use crate::{Cell, GameState, MoveOutcome, Piece, Scores, Side};

/// Request from a front end to the engine.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Request {
    /// Discard the current game and set up a new one.
    ///
    /// The response is an [`Response::Okay`].
    NewGame,
    /// Select the piece on this cell.
    ///
    /// The response is a [`Response::Selected`].
    Select { cell: Cell },
    /// Move the selected piece to this cell.
    ///
    /// The response is a [`Response::Moved`], also if the move was rejected.
    Move { target: Cell },
    /// Describe the whole game state.
    ///
    /// The response is a [`Response::State`].
    State,
    /// The front end is done. There is no response.
    Bye,
}

/// Response of the engine to a [`Request`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Response {
    Okay,
    Selected {
        /// The selection after the request, which may be the previous one.
        selection: Option<Cell>,
    },
    Moved {
        outcome: MoveOutcome,
        /// Whose turn it is now.
        turn: Side,
        scores: Scores,
    },
    State(StateSnapshot),
    /// The request could not be processed. The game state is unchanged.
    Error { message: String },
}

/// Everything a front end needs to draw the game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StateSnapshot {
    /// The pieces in play, sorted by their id.
    pub pieces: Vec<Piece>,
    /// The captured pieces of both sides, in the order they were taken.
    pub captured_black: Vec<Piece>,
    pub captured_white: Vec<Piece>,
    pub turn: Side,
    pub turn_label: String,
    pub scores: Scores,
    pub selection: Option<Cell>,
}

impl From<&GameState> for StateSnapshot {
    fn from(state: &GameState) -> Self {
        let board = state.board();
        Self {
            pieces: board.pieces().copied().collect(),
            captured_black: board.captured(Side::Black).copied().collect(),
            captured_white: board.captured(Side::White).copied().collect(),
            turn: state.current_turn(),
            turn_label: state.turn_label(),
            scores: state.scores(),
            selection: state.selection(),
        }
    }
}
