//! Property tests over random legal games.

use chess_core::{legal_moves, pseudo_legal_moves, Board, UndoToken};
use proptest::prelude::*;
use rand::prelude::*;

fn seed_strategy() -> impl Strategy<Value = u64> {
    any::<u64>()
}

fn random_walk(seed: u64, plies: usize) -> Board {
    let mut board = Board::startpos();
    let mut rng = StdRng::seed_from_u64(seed);
    for _ in 0..plies {
        let moves = legal_moves(&board);
        let Some(&mv) = moves.choose(&mut rng) else {
            break;
        };
        board.make_move(mv);
    }
    board
}

proptest! {
    /// Undoing a sequence of moves in reverse restores the exact board.
    #[test]
    fn prop_make_undo_restores_state(seed in seed_strategy(), num_moves in 1..=40usize) {
        let mut board = Board::startpos();
        let mut rng = StdRng::seed_from_u64(seed);
        let initial = board.clone();

        let mut history: Vec<UndoToken> = Vec::new();
        for _ in 0..num_moves {
            let moves = legal_moves(&board);
            let Some(&mv) = moves.choose(&mut rng) else {
                break;
            };
            history.push(board.make_move(mv));
        }

        while let Some(token) = history.pop() {
            board.undo(token);
        }
        prop_assert_eq!(board.to_fen(), initial.to_fen());
        prop_assert_eq!(board, initial);
    }

    /// No generated legal move leaves the mover's king attacked, and every
    /// pseudo-legal move that does is filtered out.
    #[test]
    fn prop_legal_moves_never_expose_king(seed in seed_strategy(), plies in 0..=30usize) {
        let board = random_walk(seed, plies);
        let mover = board.side_to_move();
        let legal = legal_moves(&board);

        for mv in pseudo_legal_moves(&board) {
            let mut scratch = board.clone();
            scratch.make_move(mv);
            prop_assert_eq!(!scratch.in_check(mover), legal.contains(&mv));
        }
    }

    /// FEN output parses back to the same board.
    #[test]
    fn prop_fen_roundtrip(seed in seed_strategy(), plies in 0..=30usize) {
        let board = random_walk(seed, plies);
        let reparsed = Board::from_fen(&board.to_fen()).unwrap();
        prop_assert_eq!(reparsed, board);
    }

    /// `apply` accepts every legal move and agrees with `make_move`.
    #[test]
    fn prop_apply_matches_make_move(seed in seed_strategy(), plies in 0..=30usize) {
        let board = random_walk(seed, plies);
        for mv in legal_moves(&board) {
            let mut checked = board.clone();
            let mut unchecked = board.clone();
            prop_assert!(checked.apply(mv).is_ok());
            unchecked.make_move(mv);
            prop_assert_eq!(checked, unchecked);
        }
    }
}
