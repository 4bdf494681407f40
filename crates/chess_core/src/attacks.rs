//! Pre-computed attack tables.
//!
//! Leaper tables (knight, king, pawn) are built at compile time from their
//! step offsets. Sliders use classical rays: take the ray, find the first
//! blocker, cut everything behind it.

use crate::bitboard::Bitboard;
use crate::types::{Color, Piece, PieceKind, Square};

const KNIGHT_STEPS: [(i8, i8); 8] = [
    (1, 2),
    (2, 1),
    (-1, 2),
    (-2, 1),
    (1, -2),
    (2, -1),
    (-1, -2),
    (-2, -1),
];

const KING_STEPS: [(i8, i8); 8] = [
    (1, 1),
    (1, 0),
    (1, -1),
    (0, 1),
    (0, -1),
    (-1, 1),
    (-1, 0),
    (-1, -1),
];

/// Ray directions. The first four walk toward higher indices, so their
/// nearest blocker is the lowest set bit; the last four walk downward.
const DIRECTIONS: [(i8, i8); 8] = [
    (0, 1),   // N
    (1, 1),   // NE
    (1, 0),   // E
    (-1, 1),  // NW
    (0, -1),  // S
    (-1, -1), // SW
    (-1, 0),  // W
    (1, -1),  // SE
];

const ROOK_DIRS: [usize; 4] = [0, 2, 4, 6];
const BISHOP_DIRS: [usize; 4] = [1, 3, 5, 7];

const fn on_board(file: i8, rank: i8) -> bool {
    file >= 0 && file < 8 && rank >= 0 && rank < 8
}

const fn leaper_table(steps: &[(i8, i8)]) -> [Bitboard; 64] {
    let mut table = [Bitboard::EMPTY; 64];
    let mut sq = 0;
    while sq < 64 {
        let file = (sq % 8) as i8;
        let rank = (sq / 8) as i8;
        let mut bits = 0u64;
        let mut i = 0;
        while i < steps.len() {
            let f = file + steps[i].0;
            let r = rank + steps[i].1;
            if on_board(f, r) {
                bits |= 1u64 << (r * 8 + f);
            }
            i += 1;
        }
        table[sq] = Bitboard(bits);
        sq += 1;
    }
    table
}

const fn ray_table() -> [[Bitboard; 64]; 8] {
    let mut rays = [[Bitboard::EMPTY; 64]; 8];
    let mut dir = 0;
    while dir < 8 {
        let (df, dr) = DIRECTIONS[dir];
        let mut sq = 0;
        while sq < 64 {
            let mut f = (sq % 8) as i8 + df;
            let mut r = (sq / 8) as i8 + dr;
            let mut bits = 0u64;
            while on_board(f, r) {
                bits |= 1u64 << (r * 8 + f);
                f += df;
                r += dr;
            }
            rays[dir][sq] = Bitboard(bits);
            sq += 1;
        }
        dir += 1;
    }
    rays
}

pub static KNIGHT_ATTACKS: [Bitboard; 64] = leaper_table(&KNIGHT_STEPS);
pub static KING_ATTACKS: [Bitboard; 64] = leaper_table(&KING_STEPS);

/// Squares a pawn of each color attacks from a given square, `[color][square]`.
pub static PAWN_ATTACKS: [[Bitboard; 64]; 2] = [
    leaper_table(&[(-1, 1), (1, 1)]),
    leaper_table(&[(-1, -1), (1, -1)]),
];

/// `RAYS[dir][sq]`: every square from `sq` in direction `dir`, excluding `sq`.
pub static RAYS: [[Bitboard; 64]; 8] = ray_table();

#[inline(always)]
pub fn knight_attacks(sq: Square) -> Bitboard {
    KNIGHT_ATTACKS[sq.index()]
}

#[inline(always)]
pub fn king_attacks(sq: Square) -> Bitboard {
    KING_ATTACKS[sq.index()]
}

#[inline(always)]
pub fn pawn_attacks(color: Color, sq: Square) -> Bitboard {
    PAWN_ATTACKS[color.idx()][sq.index()]
}

#[inline]
fn slide(sq: Square, occupied: Bitboard, dirs: [usize; 4]) -> Bitboard {
    let mut attacks = Bitboard::EMPTY;
    for dir in dirs {
        let ray = RAYS[dir][sq.index()];
        let blockers = ray & occupied;
        let first = if dir < 4 { blockers.lsb() } else { blockers.msb() };
        attacks |= match first {
            // Keep the blocker itself, drop everything beyond it.
            Some(blocker) => ray & !RAYS[dir][blocker.index()],
            None => ray,
        };
    }
    attacks
}

#[inline]
pub fn bishop_attacks(sq: Square, occupied: Bitboard) -> Bitboard {
    slide(sq, occupied, BISHOP_DIRS)
}

#[inline]
pub fn rook_attacks(sq: Square, occupied: Bitboard) -> Bitboard {
    slide(sq, occupied, ROOK_DIRS)
}

#[inline]
pub fn queen_attacks(sq: Square, occupied: Bitboard) -> Bitboard {
    bishop_attacks(sq, occupied) | rook_attacks(sq, occupied)
}

/// Squares `piece` standing on `sq` attacks (not moves: pawns only capture
/// diagonally, own pieces are not masked out).
pub fn piece_attacks(piece: Piece, sq: Square, occupied: Bitboard) -> Bitboard {
    match piece.kind {
        PieceKind::Pawn => pawn_attacks(piece.color, sq),
        PieceKind::Knight => knight_attacks(sq),
        PieceKind::Bishop => bishop_attacks(sq, occupied),
        PieceKind::Rook => rook_attacks(sq, occupied),
        PieceKind::Queen => queen_attacks(sq, occupied),
        PieceKind::King => king_attacks(sq),
    }
}

#[cfg(test)]
#[path = "attacks_tests.rs"]
mod attacks_tests;
