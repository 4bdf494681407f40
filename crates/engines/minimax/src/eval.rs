//! Static evaluation using bitboards.
//!
//! Every term is computed White minus Black and only flipped at the end, so
//! `score(b, White) == -score(b, Black)` holds for any board.

use chess_core::attacks::piece_attacks;
use chess_core::{Bitboard, Board, Color, Piece, PieceKind};
use serde::{Deserialize, Serialize};

/// Material values in centipawns, indexed by `PieceKind::idx()`.
/// Order: Pawn, Knight, Bishop, Rook, Queen, King
pub const PIECE_VALUES: [i32; 6] = [100, 320, 330, 500, 900, 0];

/// Weights of the positional terms, in centipawns per unit. Zero disables
/// a term.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EvalWeights {
    /// Per attacked square not occupied by an own piece (minor and major
    /// pieces only).
    pub mobility: i32,
    /// Per own pawn on the three squares directly in front of the king.
    pub king_shield: i32,
}

impl EvalWeights {
    /// Material only.
    pub const MATERIAL_ONLY: EvalWeights = EvalWeights {
        mobility: 0,
        king_shield: 0,
    };
}

impl Default for EvalWeights {
    fn default() -> Self {
        Self {
            mobility: 2,
            king_shield: 10,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Evaluator {
    weights: EvalWeights,
}

impl Evaluator {
    pub fn new(weights: EvalWeights) -> Self {
        Self { weights }
    }

    pub fn weights(&self) -> EvalWeights {
        self.weights
    }

    /// Score of `board` in centipawns from `perspective`'s point of view.
    /// Positive means `perspective` is better off. Only meant for
    /// non-terminal positions; mate and stalemate are the search's job.
    pub fn score(&self, board: &Board, perspective: Color) -> i32 {
        let white = self.side_total(board, Color::White);
        let black = self.side_total(board, Color::Black);
        let score = white - black;
        match perspective {
            Color::White => score,
            Color::Black => -score,
        }
    }

    fn side_total(&self, board: &Board, color: Color) -> i32 {
        let mut total = material(board, color);
        if self.weights.mobility != 0 {
            total += self.weights.mobility * mobility(board, color);
        }
        if self.weights.king_shield != 0 {
            total += self.weights.king_shield * king_shield(board, color);
        }
        total
    }
}

/// Material of one side using bitboard popcounts.
pub fn material(board: &Board, color: Color) -> i32 {
    PieceKind::ALL
        .iter()
        .map(|&kind| PIECE_VALUES[kind.idx()] * board.pieces(color, kind).popcount() as i32)
        .sum()
}

/// Squares attacked by knights, bishops, rooks and queens of `color` that
/// are not occupied by its own pieces.
pub fn mobility(board: &Board, color: Color) -> i32 {
    const MOBILE: [PieceKind; 4] = [
        PieceKind::Knight,
        PieceKind::Bishop,
        PieceKind::Rook,
        PieceKind::Queen,
    ];
    let occupied = board.occupied();
    let own = board.occupancy(color);
    let mut count = 0u32;
    for kind in MOBILE {
        let piece = Piece::new(color, kind);
        for sq in board.pieces(color, kind) {
            count += (piece_attacks(piece, sq, occupied) & !own).popcount();
        }
    }
    count as i32
}

/// Own pawns on the three squares in front of the king.
pub fn king_shield(board: &Board, color: Color) -> i32 {
    let king = board.king_square(color);
    let dir = color.pawn_direction();
    let mut front = Bitboard::EMPTY;
    for df in -1..=1 {
        if let Some(sq) = king.offset(df, dir) {
            front.set(sq);
        }
    }
    (front & board.pieces(color, PieceKind::Pawn)).popcount() as i32
}

#[cfg(test)]
#[path = "eval_tests.rs"]
mod eval_tests;
