use std::fmt;

use chess_core::Color;
use serde::{Deserialize, Serialize};

/// Draws that the rules declare without a stalemate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DrawRule {
    /// 100 half-moves without a pawn move or capture.
    FiftyMoves,
    /// The same position with the same side to move, castling rights and
    /// en-passant file for the third time.
    ThreefoldRepetition,
    /// Neither side has the material to mate.
    InsufficientMaterial,
}

/// State of the game after the latest committed move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GameOutcome {
    #[default]
    Ongoing,
    /// The winner; the side to move is mated.
    Checkmate(Color),
    Stalemate,
    DrawByRule(DrawRule),
}

impl GameOutcome {
    pub fn is_over(self) -> bool {
        self != GameOutcome::Ongoing
    }

    pub fn winner(self) -> Option<Color> {
        match self {
            GameOutcome::Checkmate(winner) => Some(winner),
            _ => None,
        }
    }

    /// PGN-style result tag.
    pub fn result_tag(self) -> &'static str {
        match self {
            GameOutcome::Ongoing => "*",
            GameOutcome::Checkmate(Color::White) => "1-0",
            GameOutcome::Checkmate(Color::Black) => "0-1",
            GameOutcome::Stalemate | GameOutcome::DrawByRule(_) => "1/2-1/2",
        }
    }
}

impl fmt::Display for GameOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameOutcome::Ongoing => write!(f, "game in progress"),
            GameOutcome::Checkmate(winner) => write!(f, "checkmate, {winner} wins"),
            GameOutcome::Stalemate => write!(f, "stalemate"),
            GameOutcome::DrawByRule(DrawRule::FiftyMoves) => write!(f, "draw by the fifty-move rule"),
            GameOutcome::DrawByRule(DrawRule::ThreefoldRepetition) => {
                write!(f, "draw by threefold repetition")
            }
            GameOutcome::DrawByRule(DrawRule::InsufficientMaterial) => {
                write!(f, "draw by insufficient material")
            }
        }
    }
}
