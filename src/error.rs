//! Error types for the fallible edges of the game: files and configuration.
//!
//! The simulation itself never fails; only the high-score file and the
//! optional config file can.

use std::io;
use std::num::ParseIntError;

/// Failure reading or writing a file in the working directory.
#[derive(thiserror::Error, Debug)]
pub enum PersistenceError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("Malformed high score: {0}")]
    Parse(#[from] ParseIntError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// A configuration value that would make the game unplayable.
#[derive(thiserror::Error, Debug, PartialEq)]
pub enum ConfigError {
    #[error("{field} must be positive, got {value}")]
    NotPositive { field: &'static str, value: f64 },

    #[error("Pipe gap of {gap} does not fit between the gap band and the ground")]
    GapTooLarge { gap: u32 },

    #[error("Play field height {0} is too tall")]
    FieldTooTall(f64),

    #[error("Bird x {0} lies outside the play field")]
    BirdOutsideField(f64),
}
