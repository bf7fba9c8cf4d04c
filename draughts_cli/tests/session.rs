use std::io::Cursor;

use draughts::{Cell, MoveOutcome, Rejection, Response, RuleConfig, Scores, Side};
use draughts_cli::{Recorder, Session};

fn run_session(session: &mut Session, requests: &[&str]) -> Vec<Response> {
    let input = requests.join("\n");
    let mut output = Vec::new();
    session.run(Cursor::new(input), &mut output).unwrap();
    String::from_utf8(output)
        .unwrap()
        .lines()
        .map(|line| serde_json::from_str(line).unwrap())
        .collect()
}

#[test]
fn opening_move() {
    let mut session = Session::new(RuleConfig::default(), None);
    let responses = run_session(
        &mut session,
        &[
            r#"{"type":"Select","cell":{"x":1,"y":2}}"#,
            r#"{"type":"Move","target":{"x":2,"y":3}}"#,
        ],
    );
    assert_eq!(
        responses,
        vec![
            Response::Selected {
                selection: Some(Cell::new(1, 2))
            },
            Response::Moved {
                outcome: MoveOutcome::MovedSimple,
                turn: Side::White,
                scores: Scores::default(),
            },
        ]
    );
    assert_eq!(session.state().current_turn(), Side::White);
}

#[test]
fn bad_requests_do_not_end_the_session() {
    let mut session = Session::new(RuleConfig::default(), None);
    let responses = run_session(
        &mut session,
        &[
            r#"{"type":"Select","cell":{"x":9,"y":2}}"#,
            "not json",
            r#"{"type":"Move","target":{"x":2,"y":3}}"#,
            "",
            r#"{"type":"State"}"#,
        ],
    );
    assert_eq!(responses.len(), 4);
    assert!(matches!(responses[0], Response::Error { .. }));
    assert!(matches!(responses[1], Response::Error { .. }));
    assert_eq!(
        responses[2],
        Response::Moved {
            outcome: MoveOutcome::Rejected {
                reason: Rejection::NoSelection
            },
            turn: Side::Black,
            scores: Scores::default(),
        }
    );
    match &responses[3] {
        Response::State(snapshot) => {
            assert_eq!(snapshot.pieces.len(), 24);
            assert_eq!(snapshot.turn, Side::Black);
            assert_eq!(snapshot.selection, None);
        }
        other => panic!("Expected a state response, got {:?}", other),
    }
}

#[test]
fn bye_ends_the_session_and_new_game_resets() {
    let mut session = Session::new(
        RuleConfig {
            first_turn: Side::White,
        },
        None,
    );
    let responses = run_session(
        &mut session,
        &[
            r#"{"type":"Select","cell":{"x":0,"y":5}}"#,
            r#"{"type":"Move","target":{"x":1,"y":4}}"#,
            r#"{"type":"NewGame"}"#,
            r#"{"type":"Bye"}"#,
            r#"{"type":"State"}"#,
        ],
    );
    assert_eq!(responses.len(), 3);
    assert_eq!(responses[2], Response::Okay);
    assert_eq!(session.state().current_turn(), Side::White);
    assert!(session
        .state()
        .board()
        .piece_at(Cell::new(1, 4))
        .unwrap()
        .is_none());
}

#[test]
fn games_are_recorded() {
    let dir = std::env::temp_dir().join(format!("draughts_recording_{}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    let recorder = Recorder::new(dir.clone()).unwrap();
    let mut session = Session::new(RuleConfig::default(), Some(recorder));
    run_session(
        &mut session,
        &[
            r#"{"type":"Select","cell":{"x":1,"y":2}}"#,
            r#"{"type":"NewGame"}"#,
            r#"{"type":"State"}"#,
            r#"{"type":"Bye"}"#,
        ],
    );

    let first: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(dir.join("game_000001.json")).unwrap())
            .unwrap();
    assert_eq!(first.as_array().map(Vec::len), Some(1));
    assert_eq!(first[0]["response"]["type"], "Selected");

    let second: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(dir.join("game_000002.json")).unwrap())
            .unwrap();
    assert_eq!(second.as_array().map(Vec::len), Some(3));
    assert_eq!(second[2]["request"]["type"], "Bye");
    assert!(second[2].get("response").is_none());

    std::fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn recorder_needs_an_existing_directory() {
    assert!(Recorder::new(std::env::temp_dir().join("draughts_no_such_directory")).is_err());
}
