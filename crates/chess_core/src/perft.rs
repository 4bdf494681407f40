use crate::{board::Board, movegen::legal_moves_into, types::Move};

/// Leaf count of the legal move tree `depth` plies below `board`.
/// The board is restored before returning.
pub fn perft(board: &mut Board, depth: u8) -> u64 {
    // One reusable move buffer per ply keeps the walk allocation-free.
    fn walk(board: &mut Board, depth: u8, layers: &mut [Vec<Move>]) -> u64 {
        let Some((buf, rest)) = layers.split_first_mut() else {
            return 1;
        };
        legal_moves_into(board, buf);
        if depth == 1 {
            return buf.len() as u64;
        }

        let mut nodes = 0u64;
        for &mv in buf.iter() {
            let token = board.make_move(mv);
            nodes += walk(board, depth - 1, rest);
            board.undo(token);
        }
        nodes
    }

    let mut layers = vec![Vec::with_capacity(64); depth as usize];
    walk(board, depth, &mut layers)
}

/// Per-root-move leaf counts, in generator order. Handy for locating a
/// move generator bug against a reference engine.
pub fn perft_divide(board: &mut Board, depth: u8) -> Vec<(Move, u64)> {
    let mut roots = Vec::with_capacity(64);
    legal_moves_into(board, &mut roots);
    roots
        .into_iter()
        .map(|mv| {
            let token = board.make_move(mv);
            let nodes = perft(board, depth.saturating_sub(1));
            board.undo(token);
            (mv, nodes)
        })
        .collect()
}
