//! Engine facade: game state, move validation, and the decision API
//!
//! The engine owns everything one game needs (the board, the Zobrist
//! table, the transposition cache, and the configuration) as an explicit
//! value. Nothing lives in process-wide state; two engines in one process
//! never interfere.
//!
//! One decision is one synchronous call: [`Engine::choose_move`] runs the
//! full search to completion and returns the chosen cell. The caller is
//! expected to apply it back through [`Engine::apply_move`], which is also
//! how the opposing side's moves enter the engine.
//!
//! # Example
//!
//! ```
//! use omok::{Engine, Outcome, Pos, Stone, FULL_BOARD_SIZE};
//!
//! let mut engine = Engine::new_game(FULL_BOARD_SIZE, Stone::Black);
//!
//! // The opening move on an empty board is the center
//! let pos = engine.choose_move_with_depth(Stone::Black, 2).unwrap();
//! assert_eq!(pos, Pos::new(7, 7));
//!
//! let outcome = engine.apply_move(pos, Stone::Black).unwrap();
//! assert_eq!(outcome, Outcome::Ongoing);
//! assert_eq!(engine.side_to_move(), Stone::White);
//! ```

use std::time::Instant;

use log::debug;
use thiserror::Error;

use crate::board::{Board, Pos, Stone};
use crate::config::EngineConfig;
use crate::rules::has_five_through;
use crate::search::{Searcher, TranspositionTable, ZobristTable};

/// Errors surfaced at the engine boundary.
///
/// All are local, recoverable conditions: a rejected move is simply not
/// applied, and the caller decides what to do next.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    /// Out-of-bounds coordinates or an occupied cell. The game state is
    /// untouched; a rejected move is never partially applied.
    #[error("invalid move: {0}")]
    InvalidMove(String),
    /// Candidate generation found nothing at the root. The board is full;
    /// treat as a draw signal.
    #[error("no legal moves available")]
    NoLegalMoves,
    /// The operation does not make sense in the current game state, such
    /// as asking for a move after the game has been won.
    #[error("engine misuse: {0}")]
    EngineMisuse(String),
}

/// What a successfully applied move did to the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The move completed five in a row.
    Win,
    /// The move filled the last cell without a win.
    Draw,
    /// The game continues.
    Ongoing,
}

/// Current game state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    Won(Stone),
}

/// A single game's engine state.
///
/// The Zobrist table is generated once per engine lifetime; the
/// transposition cache is scoped to one game and cleared by
/// [`Engine::restart`]. During a decision the board is mutated in place by
/// the search and restored before the call returns.
pub struct Engine {
    board: Board,
    zobrist: ZobristTable,
    tt: TranspositionTable,
    config: EngineConfig,
    status: GameStatus,
    to_move: Stone,
    moves_played: u32,
}

impl Engine {
    /// Start a new game on a `board_size` x `board_size` board with
    /// `start_side` to move. Uses the default configuration otherwise.
    #[must_use]
    pub fn new_game(board_size: usize, start_side: Stone) -> Self {
        let config = EngineConfig {
            board_size,
            ..EngineConfig::default()
        };
        Self::with_config(config, start_side)
    }

    /// Start a new game with a custom configuration.
    #[must_use]
    pub fn with_config(config: EngineConfig, start_side: Stone) -> Self {
        debug_assert!(start_side != Stone::Empty);
        let board = Board::new(config.board_size);
        let zobrist = ZobristTable::new(board.cell_count());
        Self {
            board,
            zobrist,
            tt: TranspositionTable::new(),
            config,
            status: GameStatus::InProgress,
            to_move: start_side,
            moves_played: 0,
        }
    }

    /// Reset for a fresh game: empty board, cleared transposition cache.
    ///
    /// The Zobrist table is kept: its constants are valid for the whole
    /// engine lifetime, and reusing them costs nothing.
    pub fn restart(&mut self, start_side: Stone) {
        debug_assert!(start_side != Stone::Empty);
        self.board.clear();
        self.tt.clear();
        self.status = GameStatus::InProgress;
        self.to_move = start_side;
        self.moves_played = 0;
    }

    /// Current board position.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Active configuration.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Current game status.
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Side whose turn it is, per strict alternation from the start side.
    pub fn side_to_move(&self) -> Stone {
        self.to_move
    }

    /// Moves applied since game start.
    pub fn moves_played(&self) -> u32 {
        self.moves_played
    }

    /// Positions currently held in the transposition cache.
    pub fn cached_positions(&self) -> usize {
        self.tt.len()
    }

    /// Apply a move for `side`, validating it first.
    ///
    /// Returns whether the move won the game, drew it by filling the
    /// board, or left it ongoing. Rejected moves leave the state exactly
    /// as it was.
    pub fn apply_move(&mut self, pos: Pos, side: Stone) -> Result<Outcome, EngineError> {
        if let GameStatus::Won(winner) = self.status {
            return Err(EngineError::EngineMisuse(format!(
                "game is already won by {winner:?}"
            )));
        }
        if side == Stone::Empty {
            return Err(EngineError::InvalidMove(
                "side must be Black or White".to_string(),
            ));
        }
        if !self
            .board
            .in_bounds(i32::from(pos.row), i32::from(pos.col))
        {
            return Err(EngineError::InvalidMove(format!("{pos} is out of bounds")));
        }
        if !self.board.is_empty_at(pos) {
            return Err(EngineError::InvalidMove(format!("{pos} is occupied")));
        }

        self.board.place_stone(pos, side);
        self.moves_played += 1;
        self.to_move = side.opponent();

        if has_five_through(&self.board, pos, side) {
            self.status = GameStatus::Won(side);
            return Ok(Outcome::Win);
        }
        if self.board.is_full() {
            return Ok(Outcome::Draw);
        }
        Ok(Outcome::Ongoing)
    }

    /// Choose a move for `side` at the configured default depth.
    ///
    /// The returned move is not applied; the caller feeds it back through
    /// [`Engine::apply_move`].
    pub fn choose_move(&mut self, side: Stone) -> Result<Pos, EngineError> {
        self.choose_move_with_depth(side, self.config.search_depth)
    }

    /// Choose a move for `side`, searching to an explicit depth.
    ///
    /// Runs to completion at the given depth; there is no cancellation.
    /// Callers with a time budget should drive this with decreasing depths
    /// themselves.
    pub fn choose_move_with_depth(&mut self, side: Stone, depth: u8) -> Result<Pos, EngineError> {
        if let GameStatus::Won(winner) = self.status {
            return Err(EngineError::EngineMisuse(format!(
                "cannot choose a move, game is already won by {winner:?}"
            )));
        }
        if side == Stone::Empty {
            return Err(EngineError::EngineMisuse(
                "side must be Black or White".to_string(),
            ));
        }

        let start = Instant::now();
        let mut searcher = Searcher::new(&self.zobrist, &mut self.tt, &self.config, side);
        let result = searcher.best_move(&mut self.board, depth);
        let nodes = searcher.nodes();

        match result {
            Some((pos, score)) => {
                debug!(
                    "chose {pos} for {side:?}: score {score}, {nodes} nodes, depth {depth}, {}ms",
                    start.elapsed().as_millis()
                );
                Ok(pos)
            }
            None => Err(EngineError::NoLegalMoves),
        }
    }
}
