//! Serializable record of a finished or interrupted game.

use chess_core::{parse_uci_move, Board};
use serde::{Deserialize, Serialize};

use crate::error::GameError;
use crate::outcome::GameOutcome;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRecord {
    pub white: String,
    pub black: String,
    pub start_fen: String,
    /// Coordinate notation, one entry per ply.
    pub moves: Vec<String>,
    /// Standard algebraic notation, parallel to `moves`.
    pub san: Vec<String>,
    pub outcome: GameOutcome,
    /// `1-0`, `0-1`, `1/2-1/2` or `*`.
    pub result: String,
}

impl GameRecord {
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    /// Replay the moves from the start position, checking each is legal.
    pub fn replay(&self) -> Result<Board, GameError> {
        let mut board = Board::from_fen(&self.start_fen)?;
        for txt in &self.moves {
            let mv = parse_uci_move(&board, txt)?;
            board.apply(mv)?;
        }
        Ok(board)
    }

    /// Move list as numbered SAN, e.g. `1. e4 e5 2. Nf3`.
    pub fn movetext(&self) -> String {
        let Ok(start) = Board::from_fen(&self.start_fen) else {
            return self.san.join(" ");
        };
        let mut number = start.fullmove_number();
        let mut white_to_move = start.side_to_move() == chess_core::Color::White;
        let mut parts = Vec::with_capacity(self.san.len() * 3 / 2 + 1);

        for (i, san) in self.san.iter().enumerate() {
            if white_to_move {
                parts.push(format!("{number}."));
            } else if i == 0 {
                parts.push(format!("{number}..."));
            }
            parts.push(san.clone());
            if !white_to_move {
                number += 1;
            }
            white_to_move = !white_to_move;
        }
        parts.join(" ")
    }
}
