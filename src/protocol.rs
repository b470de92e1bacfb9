//! Line protocol session
//!
//! One command per line on the input, replies on the output:
//!
//! | Command              | Effect                                              |
//! |----------------------|-----------------------------------------------------|
//! | `name?`              | reply `name <engine name>`                          |
//! | `quit`               | stop the session                                    |
//! | `new black`/`white`  | fresh board, step 1; as black the engine moves now  |
//! | `move <6 letters>`   | apply the opponent move, reply unless game over     |
//! | `end` / anything else| write the game log and clear it                     |
//!
//! Errors are returned per line; [`Session::run`] logs them and keeps going,
//! so a garbled line never takes the engine down. Diagnostics go through
//! `tracing`, never to the reply stream.

use crate::error::{ProtocolError, ProtocolResult};
use crate::notation::{format_move, parse_move};
use crate::record::{GameHeader, MoveHistory};
use crate::settings::EngineConfig;
use amazons_engine::{
    find_best_move, AmazonsError, AmazonsGame, Board, Color, SearchOptions, TerritoryEvaluator,
};
use std::io::{BufRead, Write};
use tracing::{debug, error, info, warn};

/// Label for the side the engine does not play
const OPPONENT_NAME: &str = "opponent";

/// What the caller should do after a line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    Continue,
    Quit,
}

/// State of one protocol conversation
pub struct Session<W: Write> {
    out: W,
    config: EngineConfig,
    evaluator: TerritoryEvaluator,
    board: Board,
    /// Ply number of the position on the board, starting at 1
    step: u32,
    /// Side the engine plays, `None` before the first `new`
    color: Option<Color>,
    history: MoveHistory,
}

impl<W: Write> Session<W> {
    pub fn new(config: EngineConfig, out: W) -> Self {
        Self {
            out,
            config,
            evaluator: TerritoryEvaluator::default(),
            board: Board::initial(),
            step: 1,
            color: None,
            history: MoveHistory::default(),
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn step(&self) -> u32 {
        self.step
    }

    pub fn color(&self) -> Option<Color> {
        self.color
    }

    pub fn history(&self) -> &MoveHistory {
        &self.history
    }

    pub fn output(&self) -> &W {
        &self.out
    }

    pub fn into_output(self) -> W {
        self.out
    }

    /// Read commands until `quit` or end of input
    pub fn run<R: BufRead>(&mut self, input: R) -> ProtocolResult<()> {
        for line in input.lines() {
            let line = line?;
            match self.handle_line(&line) {
                Ok(Control::Quit) => {
                    info!("[PROTOCOL] Quit received");
                    return Ok(());
                }
                Ok(Control::Continue) => {}
                Err(ProtocolError::Io(e)) => return Err(ProtocolError::Io(e)),
                Err(e) => warn!("[PROTOCOL] {:?}: {}", line, e),
            }
        }
        info!("[PROTOCOL] Input closed");
        Ok(())
    }

    /// Handle a single command line
    pub fn handle_line(&mut self, line: &str) -> ProtocolResult<Control> {
        let line = line.trim();
        debug!("[PROTOCOL] <- {}", line);

        let mut words = line.split_whitespace();
        match (line, words.next()) {
            ("name?", _) => {
                writeln!(self.out, "name {}", self.config.name)?;
                self.out.flush()?;
            }
            ("quit", _) => return Ok(Control::Quit),
            (_, Some("new")) => {
                let color = words
                    .next()
                    .ok_or(ProtocolError::MissingArgument { command: "new" })?;
                self.new_game(color)?;
            }
            (_, Some("move")) => {
                let text = words
                    .next()
                    .ok_or(ProtocolError::MissingArgument { command: "move" })?;
                self.opponent_move(text)?;
            }
            _ => {
                if line != "end" {
                    debug!("[PROTOCOL] Unrecognised line, saving game log");
                }
                self.save_history()?;
            }
        }
        Ok(Control::Continue)
    }

    fn new_game(&mut self, color: &str) -> ProtocolResult<()> {
        let color = match color.to_ascii_lowercase().as_str() {
            "black" => Color::Black,
            "white" => Color::White,
            _ => return Err(ProtocolError::UnknownColor(color.to_string())),
        };

        if !self.history.is_empty() {
            if let Err(e) = self.save_history() {
                error!("[RECORD] Dropping unsaved moves of the previous game: {}", e);
            }
            self.history.clear();
        }

        self.board = Board::initial();
        self.step = 1;
        self.color = Some(color);
        info!("[PROTOCOL] New game, engine plays {}", color);

        if color == Color::Black {
            self.engine_move()?;
        }
        Ok(())
    }

    fn opponent_move(&mut self, text: &str) -> ProtocolResult<()> {
        let color = self.color.ok_or(ProtocolError::NoGameInProgress)?;
        let mv = parse_move(text)?;
        self.board.play(mv, color.opponent())?;
        self.history.add_move(mv);
        self.step += 1;
        debug!("[PROTOCOL] Opponent played {}", mv);

        if self.board.is_over() {
            info!(
                "[PROTOCOL] Game over after step {}, winner {:?}",
                self.step - 1,
                self.board.winner()
            );
            return Ok(());
        }
        self.engine_move()
    }

    /// Search, play and announce the engine's move
    fn engine_move(&mut self) -> ProtocolResult<()> {
        let color = self.color.ok_or(ProtocolError::NoGameInProgress)?;
        let options = SearchOptions {
            depth: self.config.depth_for_step(self.step),
            step: self.step,
            is_max_player: color.is_max_player(),
        };

        let mut game = AmazonsGame::with_evaluator(self.board.clone(), self.evaluator);
        let outcome = find_best_move(&mut game, &options);
        let mv = outcome
            .best_move
            .ok_or_else(|| ProtocolError::EngineStalled(AmazonsError::NoLegalMoves { color }))?;

        self.board.apply(mv);
        writeln!(self.out, "move {}", format_move(&mv))?;
        self.out.flush()?;
        self.history.add_move(mv);
        self.step += 1;
        info!(
            "[PROTOCOL] Played {} (score {:.3}, depth {}, nodes {})",
            mv,
            outcome.score,
            outcome.depth,
            outcome.nodes
        );
        Ok(())
    }

    fn header(&self) -> GameHeader {
        let engine = self.config.name.clone();
        let opponent = OPPONENT_NAME.to_string();
        let (black, white) = match self.color {
            Some(Color::White) => (opponent, engine),
            _ => (engine, opponent),
        };
        GameHeader {
            black,
            white,
            winner: self.board.winner(),
        }
    }

    fn save_history(&mut self) -> ProtocolResult<()> {
        if self.history.is_empty() {
            return Ok(());
        }
        let header = self.header();
        self.history.save(&self.config.record_dir, &header)?;
        Ok(())
    }
}
