//! Error types for the protocol front end
//!
//! Provides custom error types for protocol parsing, game log persistence
//! and configuration loading. None of them is fatal to a running session.

use amazons_engine::AmazonsError;
use thiserror::Error;

/// Errors raised while handling one protocol line
#[derive(Error, Debug)]
pub enum ProtocolError {
    /// `move` argument that is not six letters A-J
    #[error("Malformed move '{text}': {reason}")]
    MalformedMove { text: String, reason: &'static str },

    /// `new` with something other than black or white
    #[error("Unknown color '{0}' (expected black or white)")]
    UnknownColor(String),

    /// Command given without its argument
    #[error("Missing argument for '{command}'")]
    MissingArgument { command: &'static str },

    /// `move` received before any `new`
    #[error("No game in progress, send 'new black' or 'new white' first")]
    NoGameInProgress,

    /// Opponent move rejected by the rules
    #[error("Illegal move: {0}")]
    IllegalMove(#[from] AmazonsError),

    /// Search came back without a move for the engine
    #[error("Engine cannot move: {0}")]
    EngineStalled(#[source] AmazonsError),

    /// Game log could not be written
    #[error("Game log error: {0}")]
    Record(#[from] RecordError),

    /// Reading commands or writing replies failed
    #[error("Protocol I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors that can occur while saving a game log
#[derive(Error, Debug)]
pub enum RecordError {
    #[error("Failed to write game log: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors that can occur while loading the engine configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Config I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Config parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Result type alias for protocol operations
pub type ProtocolResult<T> = Result<T, ProtocolError>;
