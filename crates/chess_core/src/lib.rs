pub mod attacks;
pub mod bitboard;
pub mod board;
pub mod castling;
pub mod error;
pub mod fen;
pub mod movegen;
pub mod notation;
pub mod perft;
pub mod types;
pub mod zobrist;

// Re-export core game logic (not engine-specific)
pub use bitboard::Bitboard;
pub use board::{Board, ScopedMove, UndoToken};
pub use castling::{CastleSide, CastlingRights};
pub use error::*;
pub use fen::STARTPOS_FEN;
pub use movegen::{legal_moves, legal_moves_into, pseudo_legal_moves};
pub use notation::{move_to_uci, parse_uci_move, to_san};
pub use perft::{perft, perft_divide};
pub use types::*;
pub use zobrist::ZOBRIST;

// =============================================================================
// Engine trait: implemented by every move-choosing engine
// =============================================================================

/// Result of a search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchResult {
    /// The best move found (None if the side to move has no legal moves)
    pub best_move: Option<Move>,
    /// Score from the searching side's perspective
    pub score: i32,
    /// Depth searched in plies
    pub depth: u8,
    /// Number of nodes visited
    pub nodes: u64,
}

/// Trait that all chess engines implement.
///
/// Engines are `Send` so a caller can run a blocking search on a worker
/// thread with its own copy of the board.
pub trait Engine: Send {
    /// Search `board` to exactly `depth` plies and report the best move for
    /// the side to move.
    fn search(&mut self, board: &Board, depth: u8) -> SearchResult;

    /// Returns the engine's display name
    fn name(&self) -> &str;

    /// Reset internal state for a new game
    fn new_game(&mut self) {}
}
