//! Game setup: who plays each color and which draw rules apply.
//!
//! ```toml
//! draw_rules = true
//! max_plies = 200
//!
//! [white]
//! type = "human"
//!
//! [black]
//! type = "engine"
//! strength = "strong"
//! algorithm = "minimax"
//! ```

use std::path::Path;

use chess_core::Color;
use minimax_engine::{Algorithm, EvalWeights, SearchConfig, Strength};
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Engine options for one seat.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineSettings {
    pub strength: Strength,
    pub algorithm: Algorithm,
    pub alpha_beta: bool,
    pub weights: EvalWeights,
}

impl Default for EngineSettings {
    fn default() -> Self {
        let search = SearchConfig::default();
        Self {
            strength: Strength::default(),
            algorithm: search.algorithm,
            alpha_beta: search.alpha_beta,
            weights: search.weights,
        }
    }
}

impl EngineSettings {
    pub fn with_strength(strength: Strength) -> Self {
        Self {
            strength,
            ..Default::default()
        }
    }

    pub fn depth(&self) -> u8 {
        self.strength.depth()
    }

    pub fn search_config(&self) -> SearchConfig {
        SearchConfig {
            algorithm: self.algorithm,
            alpha_beta: self.alpha_beta,
            weights: self.weights,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum PlayerConfig {
    Human,
    Engine(EngineSettings),
}

impl PlayerConfig {
    pub fn engine(strength: Strength) -> Self {
        PlayerConfig::Engine(EngineSettings::with_strength(strength))
    }

    pub fn is_human(&self) -> bool {
        matches!(self, PlayerConfig::Human)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub white: PlayerConfig,
    pub black: PlayerConfig,
    /// Fifty-move rule, threefold repetition and insufficient material.
    pub draw_rules: bool,
    /// Ply cap for engine-only games.
    pub max_plies: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::human_vs_engine(Color::White, Strength::Weak)
    }
}

impl GameConfig {
    pub const DEFAULT_MAX_PLIES: u32 = 300;

    /// Weak engine with White against strong engine with Black.
    pub fn spectate() -> Self {
        Self {
            white: PlayerConfig::engine(Strength::Weak),
            black: PlayerConfig::engine(Strength::Strong),
            draw_rules: true,
            max_plies: Self::DEFAULT_MAX_PLIES,
        }
    }

    pub fn human_vs_engine(human: Color, strength: Strength) -> Self {
        let (white, black) = match human {
            Color::White => (PlayerConfig::Human, PlayerConfig::engine(strength)),
            Color::Black => (PlayerConfig::engine(strength), PlayerConfig::Human),
        };
        Self {
            white,
            black,
            draw_rules: true,
            max_plies: Self::DEFAULT_MAX_PLIES,
        }
    }

    /// Two humans sharing the board.
    pub fn practice() -> Self {
        Self {
            white: PlayerConfig::Human,
            black: PlayerConfig::Human,
            draw_rules: true,
            max_plies: Self::DEFAULT_MAX_PLIES,
        }
    }

    pub fn player(&self, color: Color) -> &PlayerConfig {
        match color {
            Color::White => &self.white,
            Color::Black => &self.black,
        }
    }

    pub fn player_mut(&mut self, color: Color) -> &mut PlayerConfig {
        match color {
            Color::White => &mut self.white,
            Color::Black => &mut self.black,
        }
    }

    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(text)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&text)
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod config_tests;
