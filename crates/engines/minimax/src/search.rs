//! Fixed-depth tree search.
//!
//! Two formulations of the same game-tree value:
//!
//! - `minimax` scores every node from one fixed side's perspective and
//!   alternates maximizing and minimizing plies.
//! - `negamax` scores every node from the side to move and negates child
//!   values, `value(node) = max(-value(child))`.
//!
//! Both report the score from the requested side's perspective and pick the
//! first move in generator order among equally scored moves, so they agree
//! move for move. Alpha-beta pruning is optional; with strict comparisons at
//! every node it never changes the root move or score.

use chess_core::{legal_moves_into, Board, Color, Move, SearchResult};

use crate::eval::Evaluator;

/// Score of being mated at the root. A mate found `ply` plies down scores
/// `MATE - ply`, so shorter mates win and every mate outranks material.
pub const MATE: i32 = 1_000_000;

/// Longest mate distance still recognised by `mate_distance`.
const MATE_HORIZON: i32 = 1_000;

const INF: i32 = MATE + 1;

/// Plies to the mate encoded in `score`: positive if the scoring side mates,
/// negative if it gets mated, `None` for ordinary scores.
pub fn mate_distance(score: i32) -> Option<i32> {
    if score >= MATE - MATE_HORIZON {
        Some(MATE - score)
    } else if score <= -(MATE - MATE_HORIZON) {
        Some(-(MATE + score))
    } else {
        None
    }
}

#[derive(Debug, Clone)]
pub struct SearchEngine {
    evaluator: Evaluator,
    alpha_beta: bool,
    nodes: u64,
}

impl Default for SearchEngine {
    fn default() -> Self {
        Self::new(Evaluator::default())
    }
}

impl SearchEngine {
    /// A searcher with alpha-beta pruning enabled.
    pub fn new(evaluator: Evaluator) -> Self {
        Self {
            evaluator,
            alpha_beta: true,
            nodes: 0,
        }
    }

    pub fn with_alpha_beta(mut self, enabled: bool) -> Self {
        self.alpha_beta = enabled;
        self
    }

    pub fn alpha_beta(&self) -> bool {
        self.alpha_beta
    }

    pub fn evaluator(&self) -> &Evaluator {
        &self.evaluator
    }

    /// Nodes visited by the last search.
    pub fn nodes(&self) -> u64 {
        self.nodes
    }

    /// Minimax to `depth` plies with every score seen from `maximizing`.
    /// The returned move is the best one for the side to move, whichever
    /// side that is. Depth 0 only evaluates and returns no move.
    pub fn minimax(&mut self, board: &Board, depth: u8, maximizing: Color) -> SearchResult {
        self.nodes = 0;
        let mut scratch = board.clone();
        let (score, best_move) = self.minimax_node(&mut scratch, depth, 0, maximizing, -INF, INF);
        self.finish("minimax", depth, score, best_move)
    }

    /// Negamax to `depth` plies; the score is reported from `side`'s
    /// perspective.
    pub fn negamax(&mut self, board: &Board, depth: u8, side: Color) -> SearchResult {
        self.nodes = 0;
        let mut scratch = board.clone();
        let (score, best_move) = self.negamax_node(&mut scratch, depth, 0, -INF, INF);
        let score = if side == board.side_to_move() { score } else { -score };
        self.finish("negamax", depth, score, best_move)
    }

    fn finish(
        &self,
        algorithm: &'static str,
        depth: u8,
        score: i32,
        best_move: Option<Move>,
    ) -> SearchResult {
        tracing::debug!(
            algorithm,
            depth,
            nodes = self.nodes,
            score,
            best_move = ?best_move.map(|mv| mv.to_string()),
            alpha_beta = self.alpha_beta,
            "search finished"
        );
        SearchResult {
            best_move,
            score,
            depth,
            nodes: self.nodes,
        }
    }

    /// Score of a node without legal moves from `perspective`: mated side
    /// to move loses, otherwise stalemate.
    fn terminal_score(board: &Board, ply: i32, perspective: Color) -> i32 {
        let mover = board.side_to_move();
        if !board.in_check(mover) {
            return 0;
        }
        let mated = -(MATE - ply);
        if mover == perspective {
            mated
        } else {
            -mated
        }
    }

    fn minimax_node(
        &mut self,
        board: &mut Board,
        depth: u8,
        ply: i32,
        maximizing: Color,
        mut alpha: i32,
        mut beta: i32,
    ) -> (i32, Option<Move>) {
        self.nodes += 1;

        let mut moves = Vec::with_capacity(64);
        legal_moves_into(board, &mut moves);
        if moves.is_empty() {
            return (Self::terminal_score(board, ply, maximizing), None);
        }
        if depth == 0 {
            return (self.evaluator.score(board, maximizing), None);
        }

        let maximize = board.side_to_move() == maximizing;
        let mut best_score = if maximize { -INF } else { INF };
        let mut best_move = None;

        for mv in moves {
            let (score, _) = {
                let mut child = board.scoped(mv);
                self.minimax_node(&mut child, depth - 1, ply + 1, maximizing, alpha, beta)
            };

            if maximize {
                if score > best_score {
                    best_score = score;
                    best_move = Some(mv);
                }
                alpha = alpha.max(best_score);
            } else {
                if score < best_score {
                    best_score = score;
                    best_move = Some(mv);
                }
                beta = beta.min(best_score);
            }
            if self.alpha_beta && alpha >= beta {
                break;
            }
        }
        (best_score, best_move)
    }

    fn negamax_node(
        &mut self,
        board: &mut Board,
        depth: u8,
        ply: i32,
        mut alpha: i32,
        beta: i32,
    ) -> (i32, Option<Move>) {
        self.nodes += 1;

        let mut moves = Vec::with_capacity(64);
        legal_moves_into(board, &mut moves);
        if moves.is_empty() {
            let mover = board.side_to_move();
            return (Self::terminal_score(board, ply, mover), None);
        }
        if depth == 0 {
            return (self.evaluator.score(board, board.side_to_move()), None);
        }

        let mut best_score = -INF;
        let mut best_move = None;

        for mv in moves {
            let (child_score, _) = {
                let mut child = board.scoped(mv);
                self.negamax_node(&mut child, depth - 1, ply + 1, -beta, -alpha)
            };
            let score = -child_score;

            if score > best_score {
                best_score = score;
                best_move = Some(mv);
            }
            alpha = alpha.max(best_score);
            if self.alpha_beta && alpha >= beta {
                break;
            }
        }
        (best_score, best_move)
    }
}

#[cfg(test)]
#[path = "search_tests.rs"]
mod search_tests;
