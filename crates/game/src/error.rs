//! Error types for the game controller and configuration loading.

use std::path::PathBuf;

use chess_core::{FenError, IllegalMoveError, MoveParseError};
use thiserror::Error;

use crate::outcome::GameOutcome;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    /// The move is not among the legal moves; the board is unchanged.
    #[error(transparent)]
    IllegalMove(#[from] IllegalMoveError),

    /// Coordinate input could not be read or matched to a legal move.
    #[error("could not read move: {0}")]
    Parse(#[from] MoveParseError),

    #[error("invalid start position: {0}")]
    Fen(#[from] FenError),

    #[error("{0} is played by a human")]
    NotEngineTurn(chess_core::Color),

    #[error("the game is over: {0}")]
    GameOver(GameOutcome),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config: {0}")]
    Toml(#[from] toml::de::Error),
}
