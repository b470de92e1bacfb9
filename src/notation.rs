//! Move notation at the protocol boundary
//!
//! The codecs live on [`Move`] itself: `str::parse` and
//! [`Move::to_protocol`] for the six-letter protocol text, `Display` for the
//! record form written to game logs (`d1d5(g5)`). This module only lifts
//! parse failures into [`ProtocolError`] so a bad `move` line is reported as
//! malformed input rather than an illegal move.

use crate::error::{ProtocolError, ProtocolResult};
use amazons_engine::{AmazonsError, Move};

/// Decode a protocol move such as `DJDFGF`
pub fn parse_move(text: &str) -> ProtocolResult<Move> {
    text.parse::<Move>().map_err(|e| match e {
        AmazonsError::MalformedMove { text, reason } => {
            ProtocolError::MalformedMove { text, reason }
        }
        other => ProtocolError::IllegalMove(other),
    })
}

/// Encode a move for the protocol
pub fn format_move(mv: &Move) -> String {
    mv.to_protocol()
}
