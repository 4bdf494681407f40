use super::*;

#[test]
fn test_round_trip_known_positions() {
    for fen in [
        STARTPOS_FEN,
        "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1",
        "rnbqkbnr/ppp1p1pp/8/3pPp2/8/8/PPPP1PPP/RNBQKBNR w KQkq f6 0 3",
        "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - - 0 1",
        "r3k2r/Pppp1ppp/1b3nbN/nP6/BBP1P3/q4N2/Pp1P2PP/R2Q1RK1 w kq - 0 1",
        "rnbq1k1r/pp1Pbppp/2p5/8/2B5/8/PPP1NnPP/RNBQK2R w KQ - 1 8",
    ] {
        let board = Board::from_fen(fen).unwrap();
        assert_eq!(board.to_fen(), fen);
    }
}

#[test]
fn test_counters_default_when_omitted() {
    let board = Board::from_fen("4k3/8/8/8/8/8/8/4K3 b - -").unwrap();
    assert_eq!(board.halfmove_clock(), 0);
    assert_eq!(board.fullmove_number(), 1);
    assert_eq!(board.side_to_move(), Color::Black);
}

#[test]
fn test_from_str_matches_from_fen() {
    let parsed: Board = STARTPOS_FEN.parse().unwrap();
    assert_eq!(parsed, Board::startpos());
}

#[test]
fn test_field_errors() {
    assert_eq!(
        Board::from_fen("8/8/8/8 w -"),
        Err(FenError::TooFewFields { found: 3 })
    );
    assert_eq!(
        Board::from_fen("8/8/8/8/8/8/8 w - -"),
        Err(FenError::RankCount { found: 7 })
    );
    assert_eq!(
        Board::from_fen("4k3/8/8/8/8/8/8/4K3 x - -"),
        Err(FenError::InvalidSideToMove("x".to_string()))
    );
    assert_eq!(
        Board::from_fen("4k3/8/8/8/8/8/8/4K3 w KX -"),
        Err(FenError::InvalidCastling("KX".to_string()))
    );
    assert_eq!(
        Board::from_fen("4k3/8/8/8/8/8/8/4K3 w KK -"),
        Err(FenError::InvalidCastling("KK".to_string()))
    );
    assert_eq!(
        Board::from_fen("4k3/8/8/8/8/8/8/4K3 w - - x 1"),
        Err(FenError::InvalidCounter("x".to_string()))
    );
}

#[test]
fn test_placement_errors() {
    assert_eq!(
        Board::from_fen("4k3/8/8/8/8/8/8/4K2 w - -"),
        Err(FenError::RankWidth { rank: 1, files: 7 })
    );
    assert_eq!(
        Board::from_fen("4k3/8/8/8/8/8/8/4K3R w - -"),
        Err(FenError::RankWidth { rank: 1, files: 9 })
    );
    assert_eq!(
        Board::from_fen("4k3/8/8/8/8/8/8/4X3 w - -"),
        Err(FenError::InvalidPiece('X'))
    );
}

#[test]
fn test_rejects_wrong_king_count() {
    assert_eq!(
        Board::from_fen("8/8/8/8/8/8/8/4K3 w - -"),
        Err(FenError::KingCount { color: Color::Black, count: 0 })
    );
    assert_eq!(
        Board::from_fen("4k3/8/8/8/8/8/8/3KK3 w - -"),
        Err(FenError::KingCount { color: Color::White, count: 2 })
    );
}

#[test]
fn test_rejects_pawn_on_back_rank() {
    assert_eq!(
        Board::from_fen("P3k3/8/8/8/8/8/8/4K3 w - -"),
        Err(FenError::PawnOnBackRank)
    );
}

#[test]
fn test_en_passant_rank_must_match_side() {
    // White to move: target must be on the sixth rank.
    assert!(Board::from_fen("4k3/8/8/3pP3/8/8/8/4K3 w - d6").is_ok());
    assert_eq!(
        Board::from_fen("4k3/8/8/3pP3/8/8/8/4K3 w - d3"),
        Err(FenError::InvalidEnPassant("d3".to_string()))
    );
    assert_eq!(
        Board::from_fen("4k3/8/8/8/8/8/8/4K3 w - z9"),
        Err(FenError::InvalidEnPassant("z9".to_string()))
    );
}

#[test]
fn test_rejects_side_not_on_move_in_check() {
    assert_eq!(
        Board::from_fen("4k3/8/8/8/8/8/8/4R1K1 w - - 0 1"),
        Err(FenError::OpponentInCheck(Color::Black))
    );
    // Same placement with Black to move is an ordinary check.
    let board = Board::from_fen("4k3/8/8/8/8/8/8/4R1K1 b - - 0 1").unwrap();
    assert!(board.in_check(Color::Black));
}

#[test]
fn test_en_passant_target_needs_a_passed_pawn() {
    let bad = |fen: &str, ep: &str| {
        assert_eq!(
            Board::from_fen(fen),
            Err(FenError::InvalidEnPassant(ep.to_string())),
            "{fen}"
        );
    };
    // Target occupied.
    bad("4k3/8/4n3/3P4/8/8/8/4K3 w - e6 0 1", "e6");
    // Square the pawn came from still occupied.
    bad("4k3/4r3/8/3Pp3/8/8/8/4K3 w - e6 0 1", "e6");
    // No pawn behind the target.
    bad("4k3/8/8/3P4/8/8/8/4K3 w - e6 0 1", "e6");
    // Own pawn behind the target.
    bad("4k3/8/8/3PP3/8/8/8/4K3 w - e6 0 1", "e6");
    bad("4k3/8/8/8/4p3/8/4P3/4K3 b - e3 0 1", "e3");

    let board = Board::from_fen("4k3/8/8/8/4P3/8/8/4K3 b - e3 0 1").unwrap();
    assert_eq!(board.en_passant(), Some("e3".parse().unwrap()));
}
