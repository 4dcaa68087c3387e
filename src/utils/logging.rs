//! Tracing setup.
//!
//! The terminal belongs to the game, so log lines go to a plain-text file in
//! the working directory instead of stderr.

use crate::constants::LOG_FILE;
use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

/// Filter used when `RUST_LOG` is unset.
pub fn default_filter() -> String {
    format!("warn,{name}=info", name = env!("CARGO_CRATE_NAME"))
}

/// Route `tracing` output to `path`. Returns false (and logs nothing) if the
/// file cannot be opened or a subscriber is already installed.
pub fn setup_logging_to(path: &Path) -> bool {
    let file = match OpenOptions::new().create(true).append(true).open(path) {
        Ok(file) => file,
        Err(_) => return false,
    };

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter()));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(true)
        .try_init()
        .is_ok()
}

/// Log to `flappy.log` in the working directory.
pub fn setup_logging() -> bool {
    setup_logging_to(Path::new(LOG_FILE))
}
