//! Flappy simulation core.
//!
//! The player keeps a bird aloft by flapping while pipes scroll in from the
//! right. Gravity pulls the bird down every tick; touching a pipe, the
//! ground, or the ceiling ends the attempt. Rendering and storage live
//! elsewhere and only see a `FrameSnapshot` and a `HighScoreStore`.

pub mod logic;
pub mod types;

pub use logic::*;
pub use types::*;
