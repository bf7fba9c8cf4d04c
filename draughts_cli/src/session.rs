use std::io::{BufRead, Write};

use draughts::{GameState, Request, Response, RuleConfig, StateSnapshot};
use tracing::{debug, info, trace, warn};

use crate::recording::Recorder;

/// One front end talking to the engine.
///
/// The session owns the only game state and handles one request at a time.
pub struct Session {
    config: RuleConfig,
    state: GameState,
    recorder: Option<Recorder>,
}

impl Session {
    pub fn new(config: RuleConfig, recorder: Option<Recorder>) -> Self {
        let state = GameState::with_config(&config);
        Self {
            config,
            state,
            recorder,
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Applies a single request to the game.
    ///
    /// Returns `None` for [`Request::Bye`], which has no response.
    fn handle(&mut self, req: &Request) -> Option<Response> {
        let response = match *req {
            Request::NewGame => {
                self.state = GameState::with_config(&self.config);
                info!(first_turn = %self.state.current_turn(), "New game");
                Response::Okay
            }
            Request::Select { cell } => match self.state.select(cell) {
                Ok(next) => {
                    self.state = next;
                    Response::Selected {
                        selection: self.state.selection(),
                    }
                }
                Err(err) => error_response(err),
            },
            Request::Move { target } => match self.state.attempt_move(target) {
                Ok((next, outcome)) => {
                    self.state = next;
                    if outcome.is_accepted() {
                        debug!("{}\n{}", self.state.turn_label(), self.state.board());
                    }
                    Response::Moved {
                        outcome,
                        turn: self.state.current_turn(),
                        scores: self.state.scores(),
                    }
                }
                Err(err) => error_response(err),
            },
            Request::State => Response::State(StateSnapshot::from(&self.state)),
            Request::Bye => return None,
        };
        Some(response)
    }

    /// Serves JSON requests line by line until [`Request::Bye`] or the end of input.
    ///
    /// Returns an error only on I/O failure. Malformed requests get a
    /// [`Response::Error`] and the session goes on.
    pub fn run(&mut self, input: impl BufRead, mut output: impl Write) -> anyhow::Result<()> {
        for line in input.lines() {
            let line = line?;
            let line = line.trim();
            if line.is_empty() {
                continue;
            }

            let response = match serde_json::from_str::<Request>(line) {
                Ok(req) => {
                    if req == Request::NewGame {
                        self.finish_recording()?;
                    }
                    self.handle(&req)
                }
                Err(err) => {
                    warn!(%err, request = line, "Malformed request");
                    Some(Response::Error {
                        message: format!("Malformed request: {}", err),
                    })
                }
            };

            if let Some(recorder) = &mut self.recorder {
                recorder.store_exchange(line, response.as_ref())?;
            }
            let Some(response) = response else {
                debug!("Front end said bye");
                break;
            };

            let response_json = serde_json::to_string(&response)?;
            trace!(request = line, response = %response_json, "Handled request");
            writeln!(output, "{}", response_json)?;
            output.flush()?;
        }
        self.finish_recording()
    }

    fn finish_recording(&mut self) -> anyhow::Result<()> {
        if let Some(recorder) = &mut self.recorder {
            if let Some(path) = recorder.write_game_recording()? {
                info!(path = %path.display(), "Wrote game recording");
            }
        }
        Ok(())
    }
}

fn error_response(err: draughts::DraughtsError) -> Response {
    warn!(%err, "Request failed");
    Response::Error {
        message: err.to_string(),
    }
}
