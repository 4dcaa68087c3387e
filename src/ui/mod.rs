//! Terminal rendering. Reads a `FrameSnapshot`, never the live game.

pub mod flappy_scene;
pub mod game_common;

use crate::flappy::FrameSnapshot;
use ratatui::Frame;

/// Draw one frame of the game.
pub fn draw_ui(frame: &mut Frame, snapshot: &FrameSnapshot) {
    let area = frame.size();
    flappy_scene::render_flappy(frame, area, snapshot);
}
