//! File persistence in the working directory: the high-score file and the
//! optional JSON config.
//!
//! The high score is stored as a bare decimal string. Failures never reach
//! the player: a bad read counts as "no high score", a bad write is dropped.

use crate::constants::HIGH_SCORE_FILE;
use crate::error::PersistenceError;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Where the best score lives between sessions.
pub trait HighScoreStore {
    /// Stored high score, or 0 if absent or unreadable.
    fn load(&self) -> u32;

    /// Persist a new high score. Best effort.
    fn save(&mut self, score: u32);
}

/// Stores the high score as plain text in a single file.
#[derive(Debug, Clone)]
pub struct FileHighScoreStore {
    path: PathBuf,
}

impl FileHighScoreStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// `flappy_highscore.txt` in the working directory.
    pub fn in_working_dir() -> Self {
        Self::new(HIGH_SCORE_FILE)
    }
}

impl HighScoreStore for FileHighScoreStore {
    fn load(&self) -> u32 {
        match read_high_score(&self.path) {
            Ok(score) => {
                tracing::info!(score, "Loaded high score");
                score
            }
            Err(PersistenceError::Io(e)) if e.kind() == io::ErrorKind::NotFound => {
                tracing::debug!("No high score file yet");
                0
            }
            Err(e) => {
                tracing::warn!(path = %self.path.display(), error = %e, "Ignoring high score file");
                0
            }
        }
    }

    fn save(&mut self, score: u32) {
        match write_high_score(&self.path, score) {
            Ok(()) => tracing::info!(score, "High score saved"),
            Err(e) => tracing::warn!(path = %self.path.display(), error = %e, "Could not save high score"),
        }
    }
}

/// Parse the high-score file (surrounding whitespace allowed).
pub fn read_high_score(path: &Path) -> Result<u32, PersistenceError> {
    let text = fs::read_to_string(path)?;
    Ok(text.trim().parse()?)
}

/// Write the score as a decimal string.
pub fn write_high_score(path: &Path, score: u32) -> Result<(), PersistenceError> {
    fs::write(path, score.to_string())?;
    Ok(())
}

/// Read a JSON file. A missing file is `Ok(None)`.
pub fn read_json<T: serde::de::DeserializeOwned>(
    path: &Path,
) -> Result<Option<T>, PersistenceError> {
    let json = match fs::read_to_string(path) {
        Ok(json) => json,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
        Err(e) => return Err(e.into()),
    };
    Ok(Some(serde_json::from_str(&json)?))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("flappy_persist_{}_{}", std::process::id(), name))
    }

    #[test]
    fn test_missing_file_loads_zero() {
        let store = FileHighScoreStore::new(temp_path("missing.txt"));
        assert_eq!(store.load(), 0);
    }

    #[test]
    fn test_save_and_load_roundtrip() {
        let path = temp_path("roundtrip.txt");
        let mut store = FileHighScoreStore::new(&path);
        store.save(42);

        assert_eq!(fs::read_to_string(&path).unwrap(), "42");
        assert_eq!(store.load(), 42);

        fs::remove_file(path).ok();
    }

    #[test]
    fn test_whitespace_is_tolerated() {
        let path = temp_path("whitespace.txt");
        fs::write(&path, "  17\n").unwrap();
        assert_eq!(read_high_score(&path).unwrap(), 17);
        fs::remove_file(path).ok();
    }

    #[test]
    fn test_malformed_file_loads_zero() {
        let path = temp_path("malformed.txt");
        fs::write(&path, "lots").unwrap();

        assert!(matches!(
            read_high_score(&path),
            Err(PersistenceError::Parse(_))
        ));
        assert_eq!(FileHighScoreStore::new(&path).load(), 0);

        fs::remove_file(path).ok();
    }

    #[test]
    fn test_negative_value_is_malformed() {
        let path = temp_path("negative.txt");
        fs::write(&path, "-3").unwrap();
        assert_eq!(FileHighScoreStore::new(&path).load(), 0);
        fs::remove_file(path).ok();
    }

    #[test]
    fn test_save_failure_is_swallowed() {
        // A directory cannot be written as a file
        let dir = temp_path("as_dir");
        fs::create_dir_all(&dir).unwrap();
        let mut store = FileHighScoreStore::new(&dir);
        store.save(5);
        assert_eq!(store.load(), 0);
        fs::remove_dir_all(dir).ok();
    }

    #[test]
    fn test_read_json_missing_is_none() {
        let value: Option<Vec<u32>> = read_json(&temp_path("missing.json")).unwrap();
        assert!(value.is_none());
    }

    #[test]
    fn test_read_json_invalid_is_error() {
        let path = temp_path("invalid.json");
        fs::write(&path, "{").unwrap();
        let result: Result<Option<Vec<u32>>, _> = read_json(&path);
        assert!(matches!(result, Err(PersistenceError::Json(_))));
        fs::remove_file(path).ok();
    }
}
