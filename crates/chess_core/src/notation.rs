//! Move notation: coordinate form (`e2e4`, `e7e8q`) for input and records,
//! standard algebraic notation (`Nxf7+`, `O-O`, `exd6`) for move history.

use crate::board::Board;
use crate::castling::CastleSide;
use crate::error::MoveParseError;
use crate::movegen::{legal_moves, legal_moves_into};
use crate::types::*;

/// Coordinate notation of `mv`; same as its `Display` impl.
pub fn move_to_uci(mv: Move) -> String {
    mv.to_string()
}

/// Resolve coordinate notation against the legal moves of `board`, so the
/// returned move carries the right kind (castle, en passant, double push).
/// A pawn reaching the last rank without a suffix promotes to a queen.
pub fn parse_uci_move(board: &Board, txt: &str) -> Result<Move, MoveParseError> {
    let txt = txt.trim();
    if !(4..=5).contains(&txt.len()) || !txt.is_ascii() {
        return Err(MoveParseError::InvalidLength(txt.to_string()));
    }
    let from: Square = txt[0..2].parse()?;
    let to: Square = txt[2..4].parse()?;
    let promotion = match txt[4..].chars().next() {
        None => None,
        Some(c) => match PieceKind::from_char(c) {
            Some(kind) if PieceKind::PROMOTIONS.contains(&kind) => Some(kind),
            _ => return Err(MoveParseError::InvalidPromotion(c)),
        },
    };

    legal_moves(board)
        .into_iter()
        .filter(|m| m.from == from && m.to == to)
        .find(|m| match promotion {
            Some(kind) => m.promotion == Some(kind),
            None => m.promotion.is_none() || m.promotion == Some(PieceKind::Queen),
        })
        .ok_or_else(|| MoveParseError::NotLegal(txt.to_string()))
}

/// Standard algebraic notation of `mv`, which must be legal on `board`.
pub fn to_san(board: &Board, mv: Move) -> String {
    let mut san = match mv.kind.castle_side() {
        Some(CastleSide::King) => "O-O".to_string(),
        Some(CastleSide::Queen) => "O-O-O".to_string(),
        None => piece_move_san(board, mv),
    };

    let mut scratch = board.clone();
    scratch.make_move(mv);
    let them = scratch.side_to_move();
    if scratch.in_check(them) {
        let mut replies = Vec::new();
        legal_moves_into(&mut scratch, &mut replies);
        san.push(if replies.is_empty() { '#' } else { '+' });
    }
    san
}

fn piece_move_san(board: &Board, mv: Move) -> String {
    let Some(piece) = board.piece_at(mv.from) else {
        return mv.to_string();
    };
    let is_capture = board.piece_at(mv.to).is_some() || mv.is_en_passant();
    let mut san = String::with_capacity(8);

    if piece.kind == PieceKind::Pawn {
        if is_capture {
            san.push((b'a' + mv.from.file()) as char);
        }
    } else {
        san.push(piece.kind.to_char().to_ascii_uppercase());
        san.push_str(&disambiguation(board, mv, piece.kind));
    }

    if is_capture {
        san.push('x');
    }
    san.push_str(&mv.to.to_string());

    if let Some(promo) = mv.promotion {
        san.push('=');
        san.push(promo.to_char().to_ascii_uppercase());
    }
    san
}

/// File, rank or full origin square, whichever first separates `mv` from
/// other pieces of the same kind that can reach the same square.
fn disambiguation(board: &Board, mv: Move, kind: PieceKind) -> String {
    let rivals: Vec<Square> = legal_moves(board)
        .into_iter()
        .filter(|m| m.to == mv.to && m.from != mv.from)
        .filter(|m| board.piece_at(m.from).map(|p| p.kind) == Some(kind))
        .map(|m| m.from)
        .collect();

    if rivals.is_empty() {
        return String::new();
    }
    let file = (b'a' + mv.from.file()) as char;
    if rivals.iter().all(|sq| sq.file() != mv.from.file()) {
        return file.to_string();
    }
    if rivals.iter().all(|sq| sq.rank() != mv.from.rank()) {
        return ((b'1' + mv.from.rank()) as char).to_string();
    }
    mv.from.to_string()
}

#[cfg(test)]
#[path = "notation_tests.rs"]
mod notation_tests;
