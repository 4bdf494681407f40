use std::fmt;
use std::ops::{Deref, DerefMut};

use crate::attacks::{bishop_attacks, king_attacks, knight_attacks, pawn_attacks, rook_attacks};
use crate::bitboard::Bitboard;
use crate::castling::{castle_path, CastlingRights};
use crate::error::{IllegalMoveError, IllegalMoveReason};
use crate::movegen::pseudo_moves_from;
use crate::types::*;
use crate::zobrist::ZOBRIST;

/// A chess position.
///
/// The mailbox (`squares`) is the source of truth; the per-piece bitboards are
/// a cache kept in sync by `put_piece`/`remove_piece`, the only two places
/// that touch placement.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    squares: [Option<Piece>; 64],
    side_to_move: Color,
    castling: CastlingRights,
    en_passant: Option<Square>, // square behind a pawn that just advanced 2
    halfmove_clock: u32,
    fullmove_number: u32,
    pieces: [[Bitboard; 6]; 2],
    occupancy: [Bitboard; 2],
}

/// Everything `Board::undo` needs to reverse one move.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct UndoToken {
    pub mv: Move,
    pub moved: Piece,
    pub captured: Option<Piece>,
    /// Differs from `mv.to` only for en passant.
    pub captured_square: Square,
    pub castling: CastlingRights,
    pub en_passant: Option<Square>,
    pub halfmove_clock: u32,
    pub fullmove_number: u32,
}

impl Default for Board {
    fn default() -> Self {
        Self::startpos()
    }
}

impl Board {
    /// A board with no pieces, White to move. Only reachable inside the crate;
    /// callers get boards from `startpos` or a validated FEN.
    pub(crate) fn empty() -> Self {
        Board {
            squares: [None; 64],
            side_to_move: Color::White,
            castling: CastlingRights::NONE,
            en_passant: None,
            halfmove_clock: 0,
            fullmove_number: 1,
            pieces: [[Bitboard::EMPTY; 6]; 2],
            occupancy: [Bitboard::EMPTY; 2],
        }
    }

    pub fn startpos() -> Self {
        let mut b = Board::empty();
        let back = [
            PieceKind::Rook,
            PieceKind::Knight,
            PieceKind::Bishop,
            PieceKind::Queen,
            PieceKind::King,
            PieceKind::Bishop,
            PieceKind::Knight,
            PieceKind::Rook,
        ];
        for (file, &kind) in back.iter().enumerate() {
            let file = file as u8;
            b.put_piece(Square::new(file, 0), Piece::new(Color::White, kind));
            b.put_piece(Square::new(file, 1), Piece::new(Color::White, PieceKind::Pawn));
            b.put_piece(Square::new(file, 6), Piece::new(Color::Black, PieceKind::Pawn));
            b.put_piece(Square::new(file, 7), Piece::new(Color::Black, kind));
        }
        b.castling = CastlingRights::ALL;
        b
    }

    // ---------------------------------------------------------------------
    // Accessors
    // ---------------------------------------------------------------------

    #[inline]
    pub fn piece_at(&self, sq: Square) -> Option<Piece> {
        self.squares[sq.index()]
    }

    #[inline]
    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    #[inline]
    pub fn castling(&self) -> CastlingRights {
        self.castling
    }

    #[inline]
    pub fn en_passant(&self) -> Option<Square> {
        self.en_passant
    }

    #[inline]
    pub fn halfmove_clock(&self) -> u32 {
        self.halfmove_clock
    }

    #[inline]
    pub fn fullmove_number(&self) -> u32 {
        self.fullmove_number
    }

    #[inline]
    pub fn pieces(&self, color: Color, kind: PieceKind) -> Bitboard {
        self.pieces[color.idx()][kind.idx()]
    }

    #[inline]
    pub fn occupancy(&self, color: Color) -> Bitboard {
        self.occupancy[color.idx()]
    }

    #[inline]
    pub fn occupied(&self) -> Bitboard {
        self.occupancy[0] | self.occupancy[1]
    }

    /// Square of `color`'s king. Every constructible board has exactly one.
    pub fn king_square(&self, color: Color) -> Square {
        self.pieces(color, PieceKind::King)
            .lsb()
            .expect("board invariant: one king per color")
    }

    pub fn in_check(&self, color: Color) -> bool {
        self.is_square_attacked(self.king_square(color), color.other())
    }

    /// True if any piece of `by` attacks `target`, regardless of what stands
    /// on `target` and of pins on the attacker.
    pub fn is_square_attacked(&self, target: Square, by: Color) -> bool {
        let occupied = self.occupied();
        let queens = self.pieces(by, PieceKind::Queen);

        // A pawn of `by` attacks `target` exactly when a pawn of the other
        // color on `target` would attack the pawn's square.
        (pawn_attacks(by.other(), target) & self.pieces(by, PieceKind::Pawn)).any()
            || (knight_attacks(target) & self.pieces(by, PieceKind::Knight)).any()
            || (king_attacks(target) & self.pieces(by, PieceKind::King)).any()
            || (bishop_attacks(target, occupied) & (self.pieces(by, PieceKind::Bishop) | queens))
                .any()
            || (rook_attacks(target, occupied) & (self.pieces(by, PieceKind::Rook) | queens)).any()
    }

    // ---------------------------------------------------------------------
    // Placement primitives (crate-internal, used by FEN setup and make/undo)
    // ---------------------------------------------------------------------

    pub(crate) fn put_piece(&mut self, sq: Square, piece: Piece) {
        debug_assert!(self.squares[sq.index()].is_none(), "put_piece on occupied {sq}");
        self.squares[sq.index()] = Some(piece);
        self.pieces[piece.color.idx()][piece.kind.idx()].set(sq);
        self.occupancy[piece.color.idx()].set(sq);
    }

    pub(crate) fn remove_piece(&mut self, sq: Square) -> Option<Piece> {
        let piece = self.squares[sq.index()].take()?;
        self.pieces[piece.color.idx()][piece.kind.idx()].clear(sq);
        self.occupancy[piece.color.idx()].clear(sq);
        Some(piece)
    }

    pub(crate) fn set_state(
        &mut self,
        side_to_move: Color,
        castling: CastlingRights,
        en_passant: Option<Square>,
        halfmove_clock: u32,
        fullmove_number: u32,
    ) {
        self.side_to_move = side_to_move;
        self.castling = castling;
        self.en_passant = en_passant;
        self.halfmove_clock = halfmove_clock;
        self.fullmove_number = fullmove_number;
    }

    // ---------------------------------------------------------------------
    // Make / undo
    // ---------------------------------------------------------------------

    /// Apply `mv` after checking it is pseudo-legal here: a piece of the side
    /// to move stands on `mv.from` and the move (kind and promotion included)
    /// is one that piece can make. Leaving the own king in check is not
    /// checked; use `legal_moves` for that. On error nothing changes.
    pub fn apply(&mut self, mv: Move) -> Result<UndoToken, IllegalMoveError> {
        let piece = self
            .piece_at(mv.from)
            .ok_or(IllegalMoveError::new(mv, IllegalMoveReason::EmptySource))?;
        if piece.color != self.side_to_move {
            return Err(IllegalMoveError::new(mv, IllegalMoveReason::NotSideToMove));
        }
        let mut candidates = Vec::with_capacity(32);
        pseudo_moves_from(self, mv.from, &mut candidates);
        if !candidates.contains(&mv) {
            return Err(IllegalMoveError::new(mv, IllegalMoveReason::NotPseudoLegal));
        }
        Ok(self.make_move(mv))
    }

    /// Apply a move produced by the move generator for this exact position.
    /// No validation; anything else corrupts the board.
    pub fn make_move(&mut self, mv: Move) -> UndoToken {
        let us = self.side_to_move;
        let moved = self.squares[mv.from.index()].expect("make_move: no piece on source square");

        let captured_square = if mv.kind == MoveKind::EnPassant {
            Square::new(mv.to.file(), mv.from.rank())
        } else {
            mv.to
        };

        let token = UndoToken {
            mv,
            moved,
            captured: self.remove_piece(captured_square),
            captured_square,
            castling: self.castling,
            en_passant: self.en_passant,
            halfmove_clock: self.halfmove_clock,
            fullmove_number: self.fullmove_number,
        };

        self.remove_piece(mv.from);
        let placed = match mv.promotion {
            Some(kind) => Piece::new(us, kind),
            None => moved,
        };
        self.put_piece(mv.to, placed);

        if let Some(side) = mv.kind.castle_side() {
            let path = castle_path(us, side);
            if let Some(rook) = self.remove_piece(path.rook_from) {
                self.put_piece(path.rook_to, rook);
            }
        }

        self.castling.revoke_touching(mv.from);
        self.castling.revoke_touching(mv.to);

        self.en_passant = if mv.kind == MoveKind::DoublePawnPush {
            Some(Square::new(mv.from.file(), (mv.from.rank() + mv.to.rank()) / 2))
        } else {
            None
        };

        self.halfmove_clock = if moved.kind == PieceKind::Pawn || token.captured.is_some() {
            0
        } else {
            self.halfmove_clock + 1
        };
        if us == Color::Black {
            self.fullmove_number += 1;
        }
        self.side_to_move = us.other();

        token
    }

    /// Restore the position exactly as it was before the move in `token`.
    pub fn undo(&mut self, token: UndoToken) {
        let mv = token.mv;
        let us = token.moved.color;

        if let Some(side) = mv.kind.castle_side() {
            let path = castle_path(us, side);
            if let Some(rook) = self.remove_piece(path.rook_to) {
                self.put_piece(path.rook_from, rook);
            }
        }

        self.remove_piece(mv.to);
        self.put_piece(mv.from, token.moved);
        if let Some(captured) = token.captured {
            self.put_piece(token.captured_square, captured);
        }

        self.side_to_move = us;
        self.castling = token.castling;
        self.en_passant = token.en_passant;
        self.halfmove_clock = token.halfmove_clock;
        self.fullmove_number = token.fullmove_number;
    }

    /// Make `mv` for the lifetime of the returned guard; dropping the guard
    /// undoes it. Unwinding and early returns restore the board too.
    pub fn scoped(&mut self, mv: Move) -> ScopedMove<'_> {
        let token = self.make_move(mv);
        ScopedMove { board: self, token }
    }

    // ---------------------------------------------------------------------
    // Draw conditions
    // ---------------------------------------------------------------------

    pub fn is_fifty_move_draw(&self) -> bool {
        self.halfmove_clock >= 100
    }

    /// Neither side can possibly mate: bare kings, a single minor piece, or
    /// only bishops that all stand on one square color.
    pub fn is_insufficient_material(&self) -> bool {
        let heavy_or_pawns = Color::ALL.iter().any(|&c| {
            (self.pieces(c, PieceKind::Pawn)
                | self.pieces(c, PieceKind::Rook)
                | self.pieces(c, PieceKind::Queen))
            .any()
        });
        if heavy_or_pawns {
            return false;
        }

        let knights = self.pieces(Color::White, PieceKind::Knight)
            | self.pieces(Color::Black, PieceKind::Knight);
        let bishops = self.pieces(Color::White, PieceKind::Bishop)
            | self.pieces(Color::Black, PieceKind::Bishop);
        let minors = knights.popcount() + bishops.popcount();

        if minors <= 1 {
            return true;
        }
        if knights.any() {
            return false;
        }
        (bishops & Bitboard::LIGHT_SQUARES).is_empty() || (bishops & !Bitboard::LIGHT_SQUARES).is_empty()
    }

    /// Zobrist hash of placement, side to move, castling rights and, when a
    /// pawn can actually take there, the en-passant file.
    pub fn hash(&self) -> u64 {
        let mut h = 0u64;
        for sq in self.occupied() {
            if let Some(piece) = self.piece_at(sq) {
                h ^= ZOBRIST.piece_key(piece, sq);
            }
        }
        if self.side_to_move == Color::Black {
            h ^= ZOBRIST.side_to_move;
        }
        for (i, allowed) in self.castling.flags().into_iter().enumerate() {
            if allowed {
                h ^= ZOBRIST.castling_key(i);
            }
        }
        if let Some(ep) = self.en_passant {
            let takers = pawn_attacks(self.side_to_move.other(), ep)
                & self.pieces(self.side_to_move, PieceKind::Pawn);
            if takers.any() {
                h ^= ZOBRIST.ep_key(ep.file());
            }
        }
        h
    }
}

/// ASCII diagram, rank 8 at the top.
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for rank in (0..8u8).rev() {
            write!(f, "{} ", rank + 1)?;
            for file in 0..8u8 {
                let c = self
                    .piece_at(Square::new(file, rank))
                    .map_or('.', Piece::to_fen_char);
                write!(f, " {c}")?;
            }
            writeln!(f)?;
        }
        write!(f, "   a b c d e f g h")
    }
}

/// A move that stays on the board until this guard is dropped.
pub struct ScopedMove<'a> {
    board: &'a mut Board,
    token: UndoToken,
}

impl ScopedMove<'_> {
    pub fn token(&self) -> &UndoToken {
        &self.token
    }
}

impl Deref for ScopedMove<'_> {
    type Target = Board;

    fn deref(&self) -> &Board {
        self.board
    }
}

impl DerefMut for ScopedMove<'_> {
    fn deref_mut(&mut self) -> &mut Board {
        self.board
    }
}

impl Drop for ScopedMove<'_> {
    fn drop(&mut self) {
        self.board.undo(self.token);
    }
}

#[cfg(test)]
#[path = "board_tests.rs"]
mod board_tests;
