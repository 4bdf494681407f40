//! Castling rights and the fixed board geometry of the two castling moves.

use serde::{Deserialize, Serialize};

use crate::bitboard::Bitboard;
use crate::types::{Color, MoveKind, Square};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CastleSide {
    King,
    Queen,
}

impl CastleSide {
    pub const BOTH: [CastleSide; 2] = [CastleSide::King, CastleSide::Queen];

    pub fn move_kind(self) -> MoveKind {
        match self {
            CastleSide::King => MoveKind::KingSideCastle,
            CastleSide::Queen => MoveKind::QueenSideCastle,
        }
    }
}

/// Four independent rights. A right only says the king and that rook have not
/// moved (or been captured); whether castling is playable now is decided by
/// the move generator.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct CastlingRights {
    pub white_king_side: bool,
    pub white_queen_side: bool,
    pub black_king_side: bool,
    pub black_queen_side: bool,
}

impl CastlingRights {
    pub const ALL: CastlingRights = CastlingRights {
        white_king_side: true,
        white_queen_side: true,
        black_king_side: true,
        black_queen_side: true,
    };

    pub const NONE: CastlingRights = CastlingRights {
        white_king_side: false,
        white_queen_side: false,
        black_king_side: false,
        black_queen_side: false,
    };

    pub fn has(&self, color: Color, side: CastleSide) -> bool {
        match (color, side) {
            (Color::White, CastleSide::King) => self.white_king_side,
            (Color::White, CastleSide::Queen) => self.white_queen_side,
            (Color::Black, CastleSide::King) => self.black_king_side,
            (Color::Black, CastleSide::Queen) => self.black_queen_side,
        }
    }

    pub fn set(&mut self, color: Color, side: CastleSide, allowed: bool) {
        let slot = match (color, side) {
            (Color::White, CastleSide::King) => &mut self.white_king_side,
            (Color::White, CastleSide::Queen) => &mut self.white_queen_side,
            (Color::Black, CastleSide::King) => &mut self.black_king_side,
            (Color::Black, CastleSide::Queen) => &mut self.black_queen_side,
        };
        *slot = allowed;
    }

    /// Drop every right tied to `sq`: a king home square clears both rights of
    /// that color, a rook corner clears the matching one. Called with both the
    /// origin and destination of every move, which covers king moves, rook moves
    /// and rook captures.
    pub fn revoke_touching(&mut self, sq: Square) {
        match sq {
            Square::E1 => {
                self.white_king_side = false;
                self.white_queen_side = false;
            }
            Square::E8 => {
                self.black_king_side = false;
                self.black_queen_side = false;
            }
            Square::H1 => self.white_king_side = false,
            Square::A1 => self.white_queen_side = false,
            Square::H8 => self.black_king_side = false,
            Square::A8 => self.black_queen_side = false,
            _ => {}
        }
    }

    /// Index order used by FEN and zobrist keys: K, Q, k, q.
    pub fn flags(&self) -> [bool; 4] {
        [
            self.white_king_side,
            self.white_queen_side,
            self.black_king_side,
            self.black_queen_side,
        ]
    }
}

/// Squares involved in one castling move.
#[derive(Clone, Copy, Debug)]
pub struct CastlePath {
    pub king_from: Square,
    pub king_to: Square,
    pub rook_from: Square,
    pub rook_to: Square,
    /// Must be empty: everything strictly between king and rook.
    pub between: Bitboard,
    /// Must not be attacked: the squares the king crosses and lands on.
    pub transit: [Square; 2],
}

pub fn castle_path(color: Color, side: CastleSide) -> CastlePath {
    let rank = color.home_rank();
    let at = |file: u8| Square::new(file, rank);
    match side {
        CastleSide::King => CastlePath {
            king_from: at(4),
            king_to: at(6),
            rook_from: at(7),
            rook_to: at(5),
            between: Bitboard::from_square(at(5)) | Bitboard::from_square(at(6)),
            transit: [at(5), at(6)],
        },
        CastleSide::Queen => CastlePath {
            king_from: at(4),
            king_to: at(2),
            rook_from: at(0),
            rook_to: at(3),
            between: Bitboard::from_square(at(1))
                | Bitboard::from_square(at(2))
                | Bitboard::from_square(at(3)),
            transit: [at(3), at(2)],
        },
    }
}
