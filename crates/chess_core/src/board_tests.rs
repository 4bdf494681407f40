use super::*;
use crate::fen::STARTPOS_FEN;
use crate::movegen::legal_moves;
use crate::notation::parse_uci_move;

const KIWIPETE: &str = "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1";

fn board(fen: &str) -> Board {
    Board::from_fen(fen).unwrap()
}

fn sq(name: &str) -> Square {
    name.parse().unwrap()
}

fn uci(b: &Board, txt: &str) -> Move {
    parse_uci_move(b, txt).unwrap()
}

#[test]
fn test_startpos_layout() {
    let b = Board::startpos();
    assert_eq!(b.to_fen(), STARTPOS_FEN);
    assert_eq!(b.king_square(Color::White), Square::E1);
    assert_eq!(b.king_square(Color::Black), Square::E8);
    assert_eq!(b.occupied().popcount(), 32);
    assert_eq!(b.pieces(Color::Black, PieceKind::Pawn).popcount(), 8);
    assert!(!b.in_check(Color::White));
}

#[test]
fn test_undo_restores_every_kiwipete_move() {
    let original = board(KIWIPETE);
    let mut b = original.clone();
    for mv in legal_moves(&original) {
        let token = b.apply(mv).unwrap();
        assert_ne!(b, original, "{mv} did not change the board");
        b.undo(token);
        assert_eq!(b, original, "undo of {mv} did not restore the board");
    }
}

#[test]
fn test_apply_rejects_empty_square() {
    let mut b = Board::startpos();
    let before = b.clone();
    let err = b.apply(Move::new(sq("e4"), sq("e5"))).unwrap_err();
    assert_eq!(err.reason, IllegalMoveReason::EmptySource);
    assert_eq!(b, before);
}

#[test]
fn test_apply_rejects_opponent_piece() {
    let mut b = Board::startpos();
    let before = b.clone();
    let err = b.apply(Move::new(sq("e7"), sq("e5"))).unwrap_err();
    assert_eq!(err.reason, IllegalMoveReason::NotSideToMove);
    assert_eq!(b, before);
}

#[test]
fn test_apply_rejects_impossible_geometry() {
    let mut b = Board::startpos();
    let before = b.clone();
    let err = b.apply(Move::new(sq("e2"), sq("e5"))).unwrap_err();
    assert_eq!(err.reason, IllegalMoveReason::NotPseudoLegal);
    // Right squares, wrong kind flag.
    let err = b.apply(Move::new(sq("e2"), sq("e4"))).unwrap_err();
    assert_eq!(err.reason, IllegalMoveReason::NotPseudoLegal);
    assert_eq!(b, before);
}

#[test]
fn test_double_push_sets_en_passant_target() {
    let mut b = Board::startpos();
    b.apply(Move::with_kind(sq("e2"), sq("e4"), MoveKind::DoublePawnPush))
        .unwrap();
    assert_eq!(b.en_passant(), Some(sq("e3")));
    assert_eq!(b.side_to_move(), Color::Black);
    assert_eq!(b.halfmove_clock(), 0);
    assert_eq!(b.fullmove_number(), 1);

    let reply = uci(&b, "g8f6");
    b.apply(reply).unwrap();
    assert_eq!(b.en_passant(), None);
    assert_eq!(b.halfmove_clock(), 1);
    assert_eq!(b.fullmove_number(), 2);
}

#[test]
fn test_en_passant_capture_removes_passed_pawn() {
    let original = board("rnbqkbnr/ppp1p1pp/8/3pPp2/8/8/PPPP1PPP/RNBQKBNR w KQkq f6 0 3");
    let mut b = original.clone();
    let mv = uci(&b, "e5f6");
    assert!(mv.is_en_passant());

    let token = b.apply(mv).unwrap();
    assert_eq!(b.piece_at(sq("f5")), None);
    assert_eq!(
        b.piece_at(sq("f6")),
        Some(Piece::new(Color::White, PieceKind::Pawn))
    );
    assert_eq!(token.captured_square, sq("f5"));

    b.undo(token);
    assert_eq!(b, original);
}

#[test]
fn test_castling_relocates_rook() {
    let original = board("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 3 10");
    let mut b = original.clone();

    let token = b.apply(uci(&b, "e1g1")).unwrap();
    assert_eq!(b.piece_at(Square::G1).map(|p| p.kind), Some(PieceKind::King));
    assert_eq!(b.piece_at(Square::F1).map(|p| p.kind), Some(PieceKind::Rook));
    assert_eq!(b.piece_at(Square::H1), None);
    assert!(!b.castling().white_king_side);
    assert!(!b.castling().white_queen_side);
    assert!(b.castling().black_king_side);
    assert_eq!(b.halfmove_clock(), 4);
    b.undo(token);
    assert_eq!(b, original);

    b.apply(uci(&b, "e1g1")).unwrap();
    let token = b.apply(uci(&b, "e8c8")).unwrap();
    assert_eq!(b.piece_at(Square::C8).map(|p| p.kind), Some(PieceKind::King));
    assert_eq!(b.piece_at(Square::D8).map(|p| p.kind), Some(PieceKind::Rook));
    assert_eq!(b.piece_at(Square::A8), None);
    assert_eq!(b.castling(), CastlingRights::NONE);
    b.undo(token);
    assert!(b.castling().black_queen_side);
}

#[test]
fn test_rook_capture_on_corner_revokes_right() {
    let mut b = board("r3k2r/8/8/8/8/8/6B1/R3K2R w KQkq - 0 1");
    b.apply(uci(&b, "g2a8")).unwrap();
    assert!(!b.castling().black_queen_side);
    assert!(b.castling().black_king_side);
    assert!(b.castling().white_king_side);
}

#[test]
fn test_promotion_substitutes_piece() {
    let original = board("1r5k/P7/8/8/8/8/8/K7 w - - 5 40");
    let mut b = original.clone();

    let token = b.apply(uci(&b, "a7b8n")).unwrap();
    assert_eq!(
        b.piece_at(sq("b8")),
        Some(Piece::new(Color::White, PieceKind::Knight))
    );
    assert_eq!(b.pieces(Color::White, PieceKind::Pawn), Bitboard::EMPTY);
    assert_eq!(b.halfmove_clock(), 0);
    b.undo(token);
    assert_eq!(b, original);
}

#[test]
fn test_scoped_move_undoes_on_drop() {
    let original = Board::startpos();
    let mut b = original.clone();
    let mv = uci(&b, "g1f3");
    {
        let inner = b.scoped(mv);
        assert_eq!(inner.side_to_move(), Color::Black);
        assert!(inner.piece_at(sq("f3")).is_some());
    }
    assert_eq!(b, original);
}

#[test]
fn test_scoped_move_undoes_on_unwind() {
    let original = Board::startpos();
    let mut b = original.clone();
    let mv = uci(&b, "e2e4");
    let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
        let _guard = b.scoped(mv);
        panic!("search blew up");
    }));
    assert!(result.is_err());
    assert_eq!(b, original);
}

#[test]
fn test_square_attacked_by_each_piece_kind() {
    let b = board("4k3/8/8/3q4/8/1N6/4P3/4K3 w - - 0 1");
    // Pawn on e2 covers d3 and f3.
    assert!(b.is_square_attacked(sq("d3"), Color::White));
    assert!(b.is_square_attacked(sq("f3"), Color::White));
    assert!(!b.is_square_attacked(sq("e3"), Color::White));
    // Knight on b3.
    assert!(b.is_square_attacked(sq("c5"), Color::White));
    // Queen on d5 along file, diagonal and rank, stopping at blockers.
    assert!(b.is_square_attacked(sq("d1"), Color::Black));
    assert!(b.is_square_attacked(sq("g2"), Color::Black));
    // The b3 knight shields a2.
    assert!(!b.is_square_attacked(sq("a2"), Color::Black));
    assert!(b.is_square_attacked(sq("h5"), Color::Black));
    assert!(!b.is_square_attacked(sq("f1"), Color::Black));
    // Kings.
    assert!(b.is_square_attacked(sq("d7"), Color::Black));
    assert!(b.is_square_attacked(sq("f2"), Color::White));
}

#[test]
fn test_in_check_detects_slider_check() {
    let b = board("4k3/8/8/8/8/8/8/4K2r w - - 0 1");
    assert!(b.in_check(Color::White));
    assert!(!b.in_check(Color::Black));
}

#[test]
fn test_insufficient_material() {
    assert!(board("8/8/8/4k3/8/4K3/8/8 w - - 0 1").is_insufficient_material());
    assert!(board("8/8/8/4k3/8/4KB2/8/8 w - - 0 1").is_insufficient_material());
    assert!(board("8/8/4n3/4k3/8/4K3/8/8 w - - 0 1").is_insufficient_material());
    // Bishops on same-colored squares.
    assert!(board("5b2/8/8/4k3/8/4K3/8/2B5 w - - 0 1").is_insufficient_material());
    // Bishops on opposite colors, two knights, or any pawn can still mate.
    assert!(!board("2b5/8/8/4k3/8/4K3/8/2B5 w - - 0 1").is_insufficient_material());
    assert!(!board("8/8/8/4k3/8/4K3/3NN3/8 w - - 0 1").is_insufficient_material());
    assert!(!board("8/8/8/4k3/8/4K3/4P3/8 w - - 0 1").is_insufficient_material());
}

#[test]
fn test_fifty_move_threshold() {
    assert!(!board("8/8/8/4k3/8/4K3/8/8 w - - 99 60").is_fifty_move_draw());
    assert!(board("8/8/8/4k3/8/4K3/8/8 w - - 100 60").is_fifty_move_draw());
}

#[test]
fn test_display_draws_ranks_top_down() {
    let text = Board::startpos().to_string();
    let first = text.lines().next().unwrap();
    assert_eq!(first, "8  r n b q k b n r");
    assert!(text.ends_with("a b c d e f g h"));
}
