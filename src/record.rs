//! Game log
//!
//! [`MoveHistory`] collects the moves of the current game in play order
//! (Black first) and writes them to a text file when the front end asks.
//!
//! # File Format
//!
//! ```text
//! #[AM][Amazonia][opponent][black wins]2026.10.18 14:03;
//! 1 d1d5(g5) g10g6(j6)
//! 2 a4c2(c8) ...
//! ```
//!
//! Lines end in `\r\n`. Files are named
//! `<black> vs <white>-<YYYYmmdd-HHMMSS.mmm>.txt`.
//!
//! # Error Handling
//!
//! A failed write is returned to the caller and the moves stay in memory,
//! so a later `end` can retry. Only a successful write clears the history.

use crate::error::RecordError;
use amazons_engine::{Color, Move};
use chrono::{DateTime, Local};
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Names and outcome written into the log header
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameHeader {
    pub black: String,
    pub white: String,
    /// Winner, if the game finished
    pub winner: Option<Color>,
}

impl GameHeader {
    fn result(&self) -> &'static str {
        match self.winner {
            Some(Color::Black) => "black wins",
            Some(Color::White) => "white wins",
            None => "unfinished",
        }
    }
}

/// Moves of the current game
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MoveHistory {
    pub moves: Vec<Move>,
}

impl MoveHistory {
    pub fn add_move(&mut self, mv: Move) {
        self.moves.push(mv);
    }

    pub fn len(&self) -> usize {
        self.moves.len()
    }

    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    pub fn clear(&mut self) {
        self.moves.clear();
    }

    /// Full log text
    pub fn render(&self, header: &GameHeader, now: DateTime<Local>) -> String {
        let mut text = format!(
            "#[AM][{}][{}][{}]{};\r\n",
            header.black,
            header.white,
            header.result(),
            now.format("%Y.%m.%d %H:%M")
        );
        for (i, pair) in self.moves.chunks(2).enumerate() {
            let line: Vec<String> = pair.iter().map(Move::to_string).collect();
            text.push_str(&format!("{} {}\r\n", i + 1, line.join(" ")));
        }
        text
    }

    /// Write the log into `dir` and clear the history.
    ///
    /// Returns the file written, or `None` when there was nothing to save.
    pub fn save(
        &mut self,
        dir: &Path,
        header: &GameHeader,
    ) -> Result<Option<PathBuf>, RecordError> {
        if self.is_empty() {
            debug!("[RECORD] Nothing to save");
            return Ok(None);
        }

        fs::create_dir_all(dir)?;
        let now = Local::now();
        let path = dir.join(format!(
            "{} vs {}-{}.txt",
            header.black,
            header.white,
            now.format("%Y%m%d-%H%M%S%.3f")
        ));

        let mut writer = BufWriter::new(File::create(&path)?);
        writer.write_all(self.render(header, now).as_bytes())?;
        writer.flush()?;

        info!("[RECORD] Saved {} moves to {:?}", self.len(), path);
        self.clear();
        Ok(Some(path))
    }
}
