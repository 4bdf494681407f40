//! Legal move generation.
//!
//! Pseudo-legal moves come from a table of generator functions indexed by
//! `PieceKind::idx()`; legality is checked afterwards by playing each move on
//! the board and asking whether the mover's king is attacked.
//!
//! Output order is deterministic: origin squares a1..h8, targets ascending,
//! promotions Q/R/B/N, castling after ordinary king steps.

use crate::attacks::{bishop_attacks, king_attacks, knight_attacks, pawn_attacks, queen_attacks, rook_attacks};
use crate::bitboard::Bitboard;
use crate::board::Board;
use crate::castling::{castle_path, CastleSide};
use crate::types::*;

type Generator = fn(&Board, Square, Color, &mut Vec<Move>);

const GENERATORS: [Generator; 6] = [
    gen_pawn,   // Pawn
    gen_knight, // Knight
    gen_bishop, // Bishop
    gen_rook,   // Rook
    gen_queen,  // Queen
    gen_king,   // King
];

/// Generate all legal moves, returning a freshly allocated vector.
/// Clones the board once and delegates to `legal_moves_into`.
pub fn legal_moves(board: &Board) -> Vec<Move> {
    let mut scratch = board.clone();
    let mut out = Vec::with_capacity(64);
    legal_moves_into(&mut scratch, &mut out);
    out
}

/// Generate all legal moves into `out`, reusing its allocation. The board is
/// mutated while filtering and restored before returning.
pub fn legal_moves_into(board: &mut Board, out: &mut Vec<Move>) {
    out.clear();
    pseudo_moves(board, out);

    let mover = board.side_to_move();
    out.retain(|&mv| {
        let token = board.make_move(mv);
        let exposed = board.in_check(mover);
        board.undo(token);
        !exposed
    });
}

/// Moves that follow piece movement rules but may leave the own king attacked.
pub fn pseudo_legal_moves(board: &Board) -> Vec<Move> {
    let mut out = Vec::with_capacity(64);
    pseudo_moves(board, &mut out);
    out
}

fn pseudo_moves(board: &Board, out: &mut Vec<Move>) {
    let us = board.side_to_move();
    for from in board.occupancy(us) {
        pseudo_moves_from(board, from, out);
    }
}

/// Pseudo-legal moves of the piece on `from` (nothing if the square is empty).
pub(crate) fn pseudo_moves_from(board: &Board, from: Square, out: &mut Vec<Move>) {
    if let Some(piece) = board.piece_at(from) {
        GENERATORS[piece.kind.idx()](board, from, piece.color, out);
    }
}

fn push_targets(from: Square, targets: Bitboard, out: &mut Vec<Move>) {
    out.extend(targets.map(|to| Move::new(from, to)));
}

fn push_pawn_move(from: Square, to: Square, us: Color, out: &mut Vec<Move>) {
    if to.rank() == us.promotion_rank() {
        out.extend(PieceKind::PROMOTIONS.iter().map(|&kind| Move::promotion(from, to, kind)));
    } else {
        out.push(Move::new(from, to));
    }
}

fn gen_pawn(board: &Board, from: Square, us: Color, out: &mut Vec<Move>) {
    let occupied = board.occupied();
    let dir = us.pawn_direction();

    if let Some(one) = from.offset(0, dir) {
        if !occupied.contains(one) {
            push_pawn_move(from, one, us, out);
            if from.rank() == us.pawn_start_rank() {
                if let Some(two) = from.offset(0, 2 * dir) {
                    if !occupied.contains(two) {
                        out.push(Move::with_kind(from, two, MoveKind::DoublePawnPush));
                    }
                }
            }
        }
    }

    let attacks = pawn_attacks(us, from);
    for to in attacks & board.occupancy(us.other()) {
        push_pawn_move(from, to, us, out);
    }
    if let Some(ep) = board.en_passant() {
        if attacks.contains(ep) {
            out.push(Move::with_kind(from, ep, MoveKind::EnPassant));
        }
    }
}

fn gen_knight(board: &Board, from: Square, us: Color, out: &mut Vec<Move>) {
    push_targets(from, knight_attacks(from) & !board.occupancy(us), out);
}

fn gen_bishop(board: &Board, from: Square, us: Color, out: &mut Vec<Move>) {
    push_targets(from, bishop_attacks(from, board.occupied()) & !board.occupancy(us), out);
}

fn gen_rook(board: &Board, from: Square, us: Color, out: &mut Vec<Move>) {
    push_targets(from, rook_attacks(from, board.occupied()) & !board.occupancy(us), out);
}

fn gen_queen(board: &Board, from: Square, us: Color, out: &mut Vec<Move>) {
    push_targets(from, queen_attacks(from, board.occupied()) & !board.occupancy(us), out);
}

fn gen_king(board: &Board, from: Square, us: Color, out: &mut Vec<Move>) {
    push_targets(from, king_attacks(from) & !board.occupancy(us), out);
    gen_castles(board, from, us, out);
}

/// Castling needs: the right, king and rook on their home squares, nothing
/// between them, and no attacked square on the king's start, transit or
/// landing square.
fn gen_castles(board: &Board, from: Square, us: Color, out: &mut Vec<Move>) {
    let rights = board.castling();
    let them = us.other();
    let rook = Piece::new(us, PieceKind::Rook);

    let mut checked_in_check = false;
    for side in CastleSide::BOTH {
        if !rights.has(us, side) {
            continue;
        }
        let path = castle_path(us, side);
        if from != path.king_from
            || board.piece_at(path.rook_from) != Some(rook)
            || (board.occupied() & path.between).any()
        {
            continue;
        }
        if !checked_in_check {
            if board.is_square_attacked(from, them) {
                return;
            }
            checked_in_check = true;
        }
        if path.transit.iter().any(|&sq| board.is_square_attacked(sq, them)) {
            continue;
        }
        out.push(Move::with_kind(path.king_from, path.king_to, side.move_kind()));
    }
}

#[cfg(test)]
#[path = "movegen_tests.rs"]
mod movegen_tests;
