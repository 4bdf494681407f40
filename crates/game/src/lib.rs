//! Game controller for human and engine players.
//!
//! Wires the board from `chess_core` to the searchers in `minimax_engine`:
//! per-color player configuration, move validation, outcome detection
//! (checkmate, stalemate, draw rules), take-back and JSON game records.

pub mod config;
pub mod controller;
pub mod error;
pub mod outcome;
pub mod record;
pub mod session;

pub use config::{EngineSettings, GameConfig, PlayerConfig};
pub use controller::{GameController, PlayedMove};
pub use error::{ConfigError, GameError};
pub use outcome::{DrawRule, GameOutcome};
pub use record::GameRecord;
