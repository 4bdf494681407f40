//! Search settings, loadable from TOML.

use serde::{Deserialize, Serialize};

use crate::eval::EvalWeights;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Algorithm {
    Minimax,
    #[default]
    Negamax,
}

/// Named search depths.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Strength {
    #[default]
    Weak,
    Strong,
    Custom(u8),
}

impl Strength {
    pub const WEAK_DEPTH: u8 = 2;
    pub const STRONG_DEPTH: u8 = 5;

    /// Search depth in plies, never below 1 so an engine always moves.
    pub fn depth(self) -> u8 {
        match self {
            Strength::Weak => Self::WEAK_DEPTH,
            Strength::Strong => Self::STRONG_DEPTH,
            Strength::Custom(n) => n.max(1),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    pub algorithm: Algorithm,
    pub alpha_beta: bool,
    pub weights: EvalWeights,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            algorithm: Algorithm::Negamax,
            alpha_beta: true,
            weights: EvalWeights::default(),
        }
    }
}
