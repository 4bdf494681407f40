//! Turn management for one game.
//!
//! The controller owns the board, checks every move against the legal move
//! list before committing it, asks the configured engine for moves on its
//! turns, and recomputes the outcome after each committed move.

use chess_core::{
    legal_moves, parse_uci_move, to_san, Board, Color, Engine, IllegalMoveError,
    IllegalMoveReason, Move, SearchResult, UndoToken,
};
use minimax_engine::MinimaxEngine;
use tracing::{info, warn};

use crate::config::{GameConfig, PlayerConfig};
use crate::error::GameError;
use crate::outcome::{DrawRule, GameOutcome};
use crate::record::GameRecord;

/// A committed move with its notation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayedMove {
    pub mv: Move,
    pub san: String,
    token: UndoToken,
}

struct EngineSeat {
    engine: Box<dyn Engine>,
    depth: u8,
}

pub struct GameController {
    board: Board,
    config: GameConfig,
    seats: [Option<EngineSeat>; 2],
    start_fen: String,
    history: Vec<PlayedMove>,
    /// Position hashes, starting position first, one more per ply.
    hashes: Vec<u64>,
    outcome: GameOutcome,
}

impl GameController {
    pub fn new(config: GameConfig) -> Self {
        Self::with_board(config, Board::startpos())
    }

    pub fn from_fen(config: GameConfig, fen: &str) -> Result<Self, GameError> {
        Ok(Self::with_board(config, Board::from_fen(fen)?))
    }

    pub fn with_board(config: GameConfig, board: Board) -> Self {
        let seats = Color::ALL.map(|color| match config.player(color) {
            PlayerConfig::Human => None,
            PlayerConfig::Engine(settings) => Some(EngineSeat {
                engine: Box::new(MinimaxEngine::new(settings.search_config())),
                depth: settings.depth(),
            }),
        });
        let mut controller = Self {
            start_fen: board.to_fen(),
            hashes: vec![board.hash()],
            board,
            config,
            seats,
            history: Vec::new(),
            outcome: GameOutcome::Ongoing,
        };
        controller.outcome = controller.compute_outcome();
        controller
    }

    /// Seat a different engine for `color`, searching `depth` plies.
    pub fn set_engine(&mut self, color: Color, engine: Box<dyn Engine>, depth: u8) {
        self.seats[color.idx()] = Some(EngineSeat { engine, depth });
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn side_to_move(&self) -> Color {
        self.board.side_to_move()
    }

    pub fn legal_moves(&self) -> Vec<Move> {
        legal_moves(&self.board)
    }

    pub fn is_engine_turn(&self) -> bool {
        self.seats[self.side_to_move().idx()].is_some()
    }

    pub fn outcome(&self) -> GameOutcome {
        self.outcome
    }

    pub fn history(&self) -> &[PlayedMove] {
        &self.history
    }

    /// Commit `mv` if it is legal. On error the board is unchanged.
    pub fn submit_move(&mut self, mv: Move) -> Result<GameOutcome, GameError> {
        if self.outcome.is_over() {
            return Err(GameError::GameOver(self.outcome));
        }
        if !self.legal_moves().contains(&mv) {
            let err = self.rejection(mv);
            warn!(%mv, reason = %err.reason, "rejected move");
            return Err(err.into());
        }
        Ok(self.commit(mv))
    }

    /// Parse coordinate notation (`e2e4`, `e7e8n`) and submit it.
    pub fn submit_uci(&mut self, text: &str) -> Result<GameOutcome, GameError> {
        if self.outcome.is_over() {
            return Err(GameError::GameOver(self.outcome));
        }
        let mv = parse_uci_move(&self.board, text).map_err(|err| {
            warn!(input = text, %err, "rejected move input");
            GameError::from(err)
        })?;
        self.submit_move(mv)
    }

    /// Let the engine for the side to move pick and commit a move.
    pub fn play_engine_turn(&mut self) -> Result<SearchResult, GameError> {
        if self.outcome.is_over() {
            return Err(GameError::GameOver(self.outcome));
        }
        let side = self.side_to_move();
        let seat = self.seats[side.idx()]
            .as_mut()
            .ok_or(GameError::NotEngineTurn(side))?;

        let result = seat.engine.search(&self.board, seat.depth);
        let Some(mv) = result.best_move else {
            return Err(GameError::GameOver(self.outcome));
        };
        info!(
            engine = seat.engine.name(),
            depth = result.depth,
            nodes = result.nodes,
            score = result.score,
            "engine move"
        );
        self.commit(mv);
        Ok(result)
    }

    /// Play engine turns until the game ends or `max_plies` more plies have
    /// been played. Stops with `NotEngineTurn` when a human is to move.
    pub fn run(&mut self, max_plies: u32) -> Result<GameOutcome, GameError> {
        for _ in 0..max_plies {
            if self.outcome.is_over() {
                break;
            }
            self.play_engine_turn()?;
        }
        if !self.outcome.is_over() {
            info!(plies = self.history.len(), "ply limit reached");
        }
        Ok(self.outcome)
    }

    /// Undo the last committed move. Returns it, or `None` at the start.
    pub fn take_back(&mut self) -> Option<Move> {
        let played = self.history.pop()?;
        self.hashes.pop();
        self.board.undo(played.token);
        self.outcome = self.compute_outcome();
        info!(mv = %played.mv, "took back move");
        Some(played.mv)
    }

    pub fn record(&self) -> GameRecord {
        let name = |color: Color| match self.config.player(color) {
            PlayerConfig::Human => "human".to_string(),
            PlayerConfig::Engine(settings) => {
                let engine = self.seats[color.idx()]
                    .as_ref()
                    .map_or("engine", |seat| seat.engine.name());
                format!("{engine} (depth {})", settings.depth())
            }
        };
        GameRecord {
            white: name(Color::White),
            black: name(Color::Black),
            start_fen: self.start_fen.clone(),
            moves: self.history.iter().map(|p| p.mv.to_string()).collect(),
            san: self.history.iter().map(|p| p.san.clone()).collect(),
            outcome: self.outcome,
            result: self.outcome.result_tag().to_string(),
        }
    }

    fn commit(&mut self, mv: Move) -> GameOutcome {
        let mover = self.side_to_move();
        let san = to_san(&self.board, mv);
        let token = self.board.make_move(mv);
        self.hashes.push(self.board.hash());
        info!(ply = self.history.len() + 1, side = %mover, %san, uci = %mv, "move played");
        self.history.push(PlayedMove { mv, san, token });

        self.outcome = self.compute_outcome();
        if self.outcome.is_over() {
            info!(outcome = %self.outcome, result = self.outcome.result_tag(), "game over");
        }
        self.outcome
    }

    /// Why `mv` is not legal here.
    fn rejection(&self, mv: Move) -> IllegalMoveError {
        let mut scratch = self.board.clone();
        match scratch.apply(mv) {
            Err(err) => err,
            Ok(_) => IllegalMoveError::new(mv, IllegalMoveReason::LeavesKingInCheck),
        }
    }

    fn compute_outcome(&self) -> GameOutcome {
        let side = self.side_to_move();
        if self.legal_moves().is_empty() {
            return if self.board.in_check(side) {
                GameOutcome::Checkmate(side.other())
            } else {
                GameOutcome::Stalemate
            };
        }
        if !self.config.draw_rules {
            return GameOutcome::Ongoing;
        }
        if self.board.is_fifty_move_draw() {
            return GameOutcome::DrawByRule(DrawRule::FiftyMoves);
        }
        let current = self.board.hash();
        if self.hashes.iter().filter(|&&h| h == current).count() >= 3 {
            return GameOutcome::DrawByRule(DrawRule::ThreefoldRepetition);
        }
        if self.board.is_insufficient_material() {
            return GameOutcome::DrawByRule(DrawRule::InsufficientMaterial);
        }
        GameOutcome::Ongoing
    }
}

#[cfg(test)]
#[path = "controller_tests.rs"]
mod controller_tests;
