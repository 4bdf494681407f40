//! Minimax Chess Engine
//!
//! Fixed-depth minimax or negamax search with optional alpha-beta pruning
//! over a material, mobility and king-shield evaluation.

mod config;
pub mod eval;
pub mod search;

use chess_core::{Board, Engine, SearchResult};

pub use config::{Algorithm, SearchConfig, Strength};
pub use eval::{EvalWeights, Evaluator, PIECE_VALUES};
pub use search::{mate_distance, SearchEngine, MATE};

/// `Engine` wrapper choosing between the two search formulations.
///
/// Scores are always reported for the side to move of the searched board.
#[derive(Debug, Clone)]
pub struct MinimaxEngine {
    config: SearchConfig,
    searcher: SearchEngine,
}

impl Default for MinimaxEngine {
    fn default() -> Self {
        Self::new(SearchConfig::default())
    }
}

impl MinimaxEngine {
    pub fn new(config: SearchConfig) -> Self {
        let searcher =
            SearchEngine::new(Evaluator::new(config.weights)).with_alpha_beta(config.alpha_beta);
        Self { config, searcher }
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }
}

impl Engine for MinimaxEngine {
    fn search(&mut self, board: &Board, depth: u8) -> SearchResult {
        let side = board.side_to_move();
        match self.config.algorithm {
            Algorithm::Minimax => self.searcher.minimax(board, depth, side),
            Algorithm::Negamax => self.searcher.negamax(board, depth, side),
        }
    }

    fn name(&self) -> &str {
        match self.config.algorithm {
            Algorithm::Minimax => "Minimax v1.0",
            Algorithm::Negamax => "Negamax v1.0",
        }
    }

    fn new_game(&mut self) {
        *self = Self::new(self.config);
    }
}
