//! Forsyth-Edwards Notation: board setup for tests, configs and game records.

use std::str::FromStr;

use crate::bitboard::Bitboard;
use crate::board::Board;
use crate::castling::CastlingRights;
use crate::error::FenError;
use crate::types::*;

pub const STARTPOS_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

impl Board {
    /// Parse a FEN string. The half-move and full-move fields may be omitted
    /// and default to `0 1`. Rejects positions without exactly one king per
    /// color, with pawns on the back ranks, with an en-passant target no
    /// double push could have produced, or where the side that just moved
    /// left its king in check.
    pub fn from_fen(fen: &str) -> Result<Board, FenError> {
        let fields: Vec<&str> = fen.split_whitespace().collect();
        if fields.len() < 4 {
            return Err(FenError::TooFewFields { found: fields.len() });
        }

        let mut board = Board::empty();
        parse_placement(&mut board, fields[0])?;

        let side_to_move = match fields[1] {
            "w" => Color::White,
            "b" => Color::Black,
            other => return Err(FenError::InvalidSideToMove(other.to_string())),
        };
        let castling = parse_castling(fields[2])?;
        let en_passant = parse_en_passant(fields[3], side_to_move)?;
        let halfmove_clock = parse_counter(fields.get(4).copied().unwrap_or("0"))?;
        let fullmove_number = parse_counter(fields.get(5).copied().unwrap_or("1"))?.max(1);

        for color in Color::ALL {
            let count = board.pieces(color, PieceKind::King).popcount();
            if count != 1 {
                return Err(FenError::KingCount { color, count });
            }
        }
        let pawns =
            board.pieces(Color::White, PieceKind::Pawn) | board.pieces(Color::Black, PieceKind::Pawn);
        if (pawns & (Bitboard::RANK_1 | Bitboard::RANK_8)).any() {
            return Err(FenError::PawnOnBackRank);
        }

        if let Some(target) = en_passant {
            check_en_passant(&board, target, side_to_move)?;
        }

        board.set_state(side_to_move, castling, en_passant, halfmove_clock, fullmove_number);
        if board.in_check(side_to_move.other()) {
            return Err(FenError::OpponentInCheck(side_to_move.other()));
        }
        Ok(board)
    }

    pub fn to_fen(&self) -> String {
        let mut placement = String::with_capacity(64);
        for rank in (0..8u8).rev() {
            let mut empty = 0;
            for file in 0..8u8 {
                match self.piece_at(Square::new(file, rank)) {
                    Some(piece) => {
                        if empty > 0 {
                            placement.push_str(&empty.to_string());
                            empty = 0;
                        }
                        placement.push(piece.to_fen_char());
                    }
                    None => empty += 1,
                }
            }
            if empty > 0 {
                placement.push_str(&empty.to_string());
            }
            if rank > 0 {
                placement.push('/');
            }
        }

        let side = match self.side_to_move() {
            Color::White => "w",
            Color::Black => "b",
        };

        let castling: String = self
            .castling()
            .flags()
            .iter()
            .zip(['K', 'Q', 'k', 'q'])
            .filter(|(allowed, _)| **allowed)
            .map(|(_, c)| c)
            .collect();
        let castling = if castling.is_empty() { "-".to_string() } else { castling };

        let ep = self
            .en_passant()
            .map_or_else(|| "-".to_string(), |sq| sq.to_string());

        format!(
            "{placement} {side} {castling} {ep} {} {}",
            self.halfmove_clock(),
            self.fullmove_number()
        )
    }
}

impl FromStr for Board {
    type Err = FenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Board::from_fen(s)
    }
}

fn parse_placement(board: &mut Board, field: &str) -> Result<(), FenError> {
    let ranks: Vec<&str> = field.split('/').collect();
    if ranks.len() != 8 {
        return Err(FenError::RankCount { found: ranks.len() });
    }

    // FEN lists rank 8 first.
    for (i, rank_str) in ranks.iter().enumerate() {
        let rank = 7 - i as u8;
        let mut file = 0usize;
        for ch in rank_str.chars() {
            if let Some(skip) = ch.to_digit(10) {
                file += skip as usize;
            } else {
                let piece = Piece::from_fen_char(ch).ok_or(FenError::InvalidPiece(ch))?;
                if file >= 8 {
                    return Err(FenError::RankWidth { rank: rank + 1, files: file + 1 });
                }
                board.put_piece(Square::new(file as u8, rank), piece);
                file += 1;
            }
        }
        if file != 8 {
            return Err(FenError::RankWidth { rank: rank + 1, files: file });
        }
    }
    Ok(())
}

fn parse_castling(field: &str) -> Result<CastlingRights, FenError> {
    let mut rights = CastlingRights::NONE;
    if field == "-" {
        return Ok(rights);
    }
    for c in field.chars() {
        let slot = match c {
            'K' => &mut rights.white_king_side,
            'Q' => &mut rights.white_queen_side,
            'k' => &mut rights.black_king_side,
            'q' => &mut rights.black_queen_side,
            _ => return Err(FenError::InvalidCastling(field.to_string())),
        };
        if *slot {
            return Err(FenError::InvalidCastling(field.to_string()));
        }
        *slot = true;
    }
    Ok(rights)
}

/// The target must sit on the rank the opponent's pawn just skipped.
fn parse_en_passant(field: &str, side_to_move: Color) -> Result<Option<Square>, FenError> {
    if field == "-" {
        return Ok(None);
    }
    let sq: Square = field
        .parse()
        .map_err(|_| FenError::InvalidEnPassant(field.to_string()))?;
    let expected_rank = match side_to_move {
        Color::White => 5,
        Color::Black => 2,
    };
    if sq.rank() != expected_rank {
        return Err(FenError::InvalidEnPassant(field.to_string()));
    }
    Ok(Some(sq))
}

/// The target and the square the pawn left must be empty, and the pawn that
/// just moved must stand behind the target.
fn check_en_passant(board: &Board, target: Square, side_to_move: Color) -> Result<(), FenError> {
    let dir = side_to_move.pawn_direction();
    let passed = Piece::new(side_to_move.other(), PieceKind::Pawn);
    let valid = board.piece_at(target).is_none()
        && target.offset(0, dir).is_some_and(|from| board.piece_at(from).is_none())
        && target.offset(0, -dir).and_then(|sq| board.piece_at(sq)) == Some(passed);
    if valid {
        Ok(())
    } else {
        Err(FenError::InvalidEnPassant(target.to_string()))
    }
}

fn parse_counter(field: &str) -> Result<u32, FenError> {
    field
        .parse()
        .map_err(|_| FenError::InvalidCounter(field.to_string()))
}

#[cfg(test)]
#[path = "fen_tests.rs"]
mod fen_tests;
