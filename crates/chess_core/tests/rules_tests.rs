//! Whole-game rule scenarios played through the public API.

use chess_core::{legal_moves, parse_uci_move, to_san, Board, Color};

fn play(board: &mut Board, moves: &[&str]) -> Vec<String> {
    let mut sans = Vec::new();
    for txt in moves {
        let mv = parse_uci_move(board, txt).unwrap_or_else(|e| panic!("{txt}: {e}"));
        sans.push(to_san(board, mv));
        board.apply(mv).unwrap();
    }
    sans
}

#[test]
fn test_fools_mate() {
    let mut board = Board::startpos();
    let sans = play(&mut board, &["f2f3", "e7e5", "g2g4", "d8h4"]);
    assert_eq!(sans, ["f3", "e5", "g4", "Qh4#"]);
    assert!(board.in_check(Color::White));
    assert!(legal_moves(&board).is_empty());
}

#[test]
fn test_stalemate_king_in_corner() {
    let board = Board::from_fen("k7/2K5/1Q6/8/8/8/8/8 b - - 0 1").unwrap();
    assert!(legal_moves(&board).is_empty());
    assert!(!board.in_check(Color::Black));
}

#[test]
fn test_stalemate_king_and_pawn() {
    let board = Board::from_fen("6k1/6P1/6K1/8/8/8/8/8 b - - 0 1").unwrap();
    assert!(legal_moves(&board).is_empty());
    assert!(!board.in_check(Color::Black));
}

#[test]
fn test_scholars_mate_is_not_stalemate() {
    let board =
        Board::from_fen("r1bqkb1r/pppp1Qpp/2n2n2/4p3/2B1P3/8/PPPP1PPP/RNB1K1NR b KQkq - 0 4")
            .unwrap();
    assert!(board.in_check(Color::Black));
    assert!(legal_moves(&board).is_empty());
}

#[test]
fn test_check_with_escape() {
    let board =
        Board::from_fen("rnbqkbnr/ppppp1pp/8/5p1Q/4P3/8/PPPP1PPP/RNB1KBNR b KQkq - 1 2").unwrap();
    assert!(board.in_check(Color::Black));
    assert_eq!(legal_moves(&board).len(), 1);
}

#[test]
fn test_en_passant_sequence() {
    let mut board = Board::startpos();
    let sans = play(&mut board, &["e2e4", "a7a6", "e4e5", "d7d5", "e5d6"]);
    assert_eq!(sans.last().map(String::as_str), Some("exd6"));
    assert!(board.piece_at("d5".parse().unwrap()).is_none());
}

#[test]
fn test_castling_after_development() {
    let mut board = Board::startpos();
    let sans = play(
        &mut board,
        &["e2e4", "e7e5", "g1f3", "b8c6", "f1c4", "g8f6", "e1g1"],
    );
    assert_eq!(sans.last().map(String::as_str), Some("O-O"));
    assert!(!board.castling().white_king_side);
    assert!(board.castling().black_king_side);
}

#[test]
fn test_knight_shuffle_repeats_hash() {
    let mut board = Board::startpos();
    let start = board.hash();
    play(&mut board, &["g1f3", "g8f6", "f3g1", "f6g8"]);
    assert_eq!(board.hash(), start);
    // Counters differ but the position is the same.
    assert_eq!(board.halfmove_clock(), 4);
    assert_ne!(board, Board::startpos());
}

#[test]
fn test_fifty_move_clock_resets_on_pawn_move() {
    let mut board = Board::from_fen("8/8/8/4k3/8/3K4/4P3/8 w - - 99 60").unwrap();
    play(&mut board, &["e2e3"]);
    assert_eq!(board.halfmove_clock(), 0);
    assert!(!board.is_fifty_move_draw());
}
