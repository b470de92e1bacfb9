//! Integration tests for the line protocol
//!
//! Drives a [`Session`] with an in-memory writer and a shallow search so
//! every scenario runs quickly. Game logs go to a fresh directory under the
//! system temp dir.

use amazons::notation::{format_move, parse_move};
use amazons::{Control, EngineConfig, ProtocolError, Session};
use amazons_engine::{generate_moves, Board, CellState, Color};
use std::fs;
use std::io::Cursor;
use std::path::{Path, PathBuf};

fn temp_record_dir() -> PathBuf {
    std::env::temp_dir().join(format!("amazons-test-{}", uuid::Uuid::new_v4()))
}

fn session_recording_to(record_dir: PathBuf) -> Session<Vec<u8>> {
    let config = EngineConfig {
        name: "Tester".to_string(),
        record_dir,
        max_depth: Some(1),
        ..EngineConfig::default()
    };
    Session::new(config, Vec::new())
}

fn test_session() -> Session<Vec<u8>> {
    session_recording_to(temp_record_dir())
}

fn record_files(record_dir: &Path) -> Vec<PathBuf> {
    fs::read_dir(record_dir)
        .unwrap()
        .map(|entry| entry.unwrap().path())
        .collect()
}

fn output_lines(session: &Session<Vec<u8>>) -> Vec<String> {
    String::from_utf8(session.output().clone())
        .unwrap()
        .lines()
        .map(str::to_string)
        .collect()
}

/// Decode a `move XXXXXX` reply line
fn reply_move(line: &str) -> amazons_engine::Move {
    let text = line.strip_prefix("move ").expect("reply should start with 'move '");
    assert_eq!(text.len(), 6);
    parse_move(text).unwrap()
}

#[test]
fn test_name_query() {
    let mut session = test_session();
    assert_eq!(session.handle_line("name?").unwrap(), Control::Continue);
    assert_eq!(output_lines(&session), vec!["name Tester"]);
}

#[test]
fn test_quit() {
    let mut session = test_session();
    assert_eq!(session.handle_line("quit").unwrap(), Control::Quit);
    assert!(output_lines(&session).is_empty());
}

#[test]
fn test_new_black_engine_moves_first() {
    let mut session = test_session();
    session.handle_line("new black").unwrap();

    let lines = output_lines(&session);
    assert_eq!(lines.len(), 1);
    let mv = reply_move(&lines[0]);
    assert!(Board::initial().validate_move(mv, Color::Black).is_ok());
    assert_eq!(session.board().cell_at(mv.to), CellState::Black);
    assert_eq!(session.board().arrow_count(), 1);
    assert_eq!(session.step(), 2);
    assert_eq!(session.history().len(), 1);
}

#[test]
fn test_new_white_waits_for_opponent() {
    let mut session = test_session();
    session.handle_line("new white").unwrap();
    assert!(output_lines(&session).is_empty());
    assert_eq!(session.color(), Some(Color::White));
    assert_eq!(session.step(), 1);
}

#[test]
fn test_protocol_round_trip() {
    // Sample white replies spread across the whole move list
    for pick in [0usize, 333, 901, 1500, 2100] {
        let mut session = test_session();
        session.handle_line("new black").unwrap();

        let white_moves = generate_moves(session.board(), Color::White);
        let reply = white_moves[pick % white_moves.len()];
        session
            .handle_line(&format!("move {}", format_move(&reply)))
            .unwrap();

        let lines = output_lines(&session);
        assert_eq!(lines.len(), 2, "expected exactly one reply to the move");
        let engine_mv = reply_move(&lines[1]);
        assert_eq!(session.board().cell_at(engine_mv.arrow), CellState::Arrow);
        assert_eq!(session.board().arrow_count(), 3);
        assert_eq!(session.step(), 4);
    }
}

#[test]
fn test_opponent_move_as_white_engine() {
    let mut session = test_session();
    session.handle_line("new white").unwrap();
    // d1 -> d5, arrow back to d1
    session.handle_line("move DJDFDJ").unwrap();

    let lines = output_lines(&session);
    assert_eq!(lines.len(), 1);
    let mv = reply_move(&lines[0]);
    assert_eq!(session.board().cell_at(mv.to), CellState::White);
    let opening = parse_move("DJDFDJ").unwrap();
    assert_eq!(session.board().cell_at(opening.arrow), CellState::Arrow);
    assert_eq!(session.history().len(), 2);
}

#[test]
fn test_malformed_move_is_rejected() {
    let mut session = test_session();
    session.handle_line("new white").unwrap();
    let before = session.board().clone();

    for line in ["move AB", "move DJDFDJX", "move DJ?FDJ", "move KJDFDJ"] {
        assert!(
            matches!(session.handle_line(line), Err(ProtocolError::MalformedMove { .. })),
            "{line:?}"
        );
    }
    assert!(matches!(
        session.handle_line("move"),
        Err(ProtocolError::MissingArgument { command: "move" })
    ));
    assert_eq!(session.board(), &before);
    assert!(output_lines(&session).is_empty());
}

#[test]
fn test_illegal_move_is_rejected() {
    let mut session = test_session();
    session.handle_line("new white").unwrap();
    let before = session.board().clone();

    // white amazon on d10 is not the opponent's to move
    assert!(matches!(
        session.handle_line("move DADBDC"),
        Err(ProtocolError::IllegalMove(_))
    ));
    assert_eq!(session.board(), &before);
    assert!(session.history().is_empty());
}

#[test]
fn test_move_before_new() {
    let mut session = test_session();
    assert!(matches!(
        session.handle_line("move DJDFDJ"),
        Err(ProtocolError::NoGameInProgress)
    ));
}

#[test]
fn test_unknown_color() {
    let mut session = test_session();
    assert!(matches!(
        session.handle_line("new purple"),
        Err(ProtocolError::UnknownColor(_))
    ));
    assert!(matches!(
        session.handle_line("new"),
        Err(ProtocolError::MissingArgument { command: "new" })
    ));
}

#[test]
fn test_end_writes_game_log() {
    let record_dir = temp_record_dir();
    let mut session = session_recording_to(record_dir.clone());
    session.handle_line("new white").unwrap();
    session.handle_line("move DJDFDJ").unwrap();
    session.handle_line("end").unwrap();
    assert!(session.history().is_empty());

    let files = record_files(&record_dir);
    assert_eq!(files.len(), 1);
    let name = files[0].file_name().unwrap().to_string_lossy().to_string();
    assert!(name.starts_with("opponent vs Tester-"), "{name}");
    // <YYYYmmdd-HHMMSS.mmm>.txt
    let stamp = name
        .trim_start_matches("opponent vs Tester-")
        .trim_end_matches(".txt");
    assert_eq!(stamp.len(), 19, "{name}");
    assert_eq!(&stamp[8..9], "-");
    assert_eq!(&stamp[15..16], ".");

    let text = fs::read_to_string(&files[0]).unwrap();
    let lines: Vec<&str> = text.split("\r\n").collect();
    assert!(lines[0].starts_with("#[AM][opponent][Tester][unfinished]"));
    assert!(lines[1].starts_with("1 d1d5(d1) "));
    assert_eq!(lines[2], "");

    // a second end has nothing left to write
    session.handle_line("end").unwrap();
    assert_eq!(fs::read_dir(&record_dir).unwrap().count(), 1);
    fs::remove_dir_all(&record_dir).unwrap();
}

#[test]
fn test_failed_save_keeps_moves_for_retry() {
    // A regular file where the record directory's parent should be
    let blocker = temp_record_dir();
    fs::write(&blocker, b"not a directory").unwrap();
    let record_dir = blocker.join("records");

    let mut session = session_recording_to(record_dir.clone());
    session.handle_line("new white").unwrap();
    session.handle_line("move DJDFDJ").unwrap();
    assert!(matches!(
        session.handle_line("end"),
        Err(ProtocolError::Record(_))
    ));
    assert_eq!(session.history().len(), 2);

    // Any other line retries the save too
    assert!(session.handle_line("hello").is_err());
    assert_eq!(session.history().len(), 2);

    fs::remove_file(&blocker).unwrap();
    session.handle_line("end").unwrap();
    assert!(session.history().is_empty());
    assert_eq!(record_files(&record_dir).len(), 1);
    fs::remove_dir_all(&blocker).unwrap();
}

#[test]
fn test_unrecognised_line_saves_game_log() {
    let record_dir = temp_record_dir();
    let mut session = session_recording_to(record_dir.clone());
    session.handle_line("new white").unwrap();
    session.handle_line("move DJDFDJ").unwrap();

    assert_eq!(session.handle_line("hello").unwrap(), Control::Continue);
    assert!(session.history().is_empty());
    assert_eq!(record_files(&record_dir).len(), 1);
    fs::remove_dir_all(&record_dir).unwrap();
}

#[test]
fn test_new_game_saves_previous_moves() {
    let record_dir = temp_record_dir();
    let mut session = session_recording_to(record_dir.clone());
    session.handle_line("new white").unwrap();
    session.handle_line("move DJDFDJ").unwrap();
    assert_eq!(session.history().len(), 2);

    session.handle_line("new white").unwrap();
    assert!(session.history().is_empty());
    assert_eq!(session.board(), &Board::initial());
    assert_eq!(session.step(), 1);

    let files = record_files(&record_dir);
    assert_eq!(files.len(), 1);
    let text = fs::read_to_string(&files[0]).unwrap();
    assert!(text.contains("1 d1d5(d1) "), "{text}");
    fs::remove_dir_all(&record_dir).unwrap();
}

#[test]
fn test_run_script() {
    let mut session = test_session();
    let script = "name?\nnew white\nmove DJDFDJ\nmove garbage\nquit\nname?\n";
    session.run(Cursor::new(script)).unwrap();

    let lines = output_lines(&session);
    assert_eq!(lines.len(), 2, "{lines:?}");
    assert_eq!(lines[0], "name Tester");
    assert!(lines[1].starts_with("move "));
}
