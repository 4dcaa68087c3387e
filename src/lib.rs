//! Flappy - Terminal Flappy Bird Library
//!
//! This module exposes the simulation, configuration, input mapping and
//! rendering for the binary and for tests.

pub mod config;
pub mod constants;
pub mod error;
pub mod flappy;
pub mod input;
pub mod ui;
pub mod utils;

pub use config::GameConfig;
pub use constants::*;
pub use error::{ConfigError, PersistenceError};
pub use flappy::{FlappyGame, FlappyInput, FrameSnapshot, GameMode};
pub use utils::persistence::{FileHighScoreStore, HighScoreStore};
