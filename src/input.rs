//! Input handling: turns terminal key events into game commands.

use crate::flappy::{process_input, FlappyGame, FlappyInput};
use crate::utils::persistence::HighScoreStore;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Result of handling a key event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputResult {
    /// Keep running the game loop.
    Continue,
    /// Leave the game. The caller restores the terminal.
    Quit,
}

/// Unified key → FlappyInput mapping. `None` means quit.
pub fn map_key(key: &KeyEvent) -> Option<FlappyInput> {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return None;
    }
    let input = match key.code {
        KeyCode::Esc => return None,
        KeyCode::Char(' ') | KeyCode::Up => FlappyInput::Flap,
        KeyCode::Char('p') | KeyCode::Char('P') => FlappyInput::TogglePause,
        KeyCode::Char('r') | KeyCode::Char('R') => FlappyInput::Reset,
        _ => FlappyInput::Other,
    };
    Some(input)
}

/// Main dispatcher for key events.
pub fn handle_key<S: HighScoreStore>(key: KeyEvent, game: &mut FlappyGame<S>) -> InputResult {
    // Terminals that report key releases would otherwise flap twice
    if key.kind == KeyEventKind::Release {
        return InputResult::Continue;
    }

    match map_key(&key) {
        Some(input) => {
            process_input(game, input);
            InputResult::Continue
        }
        None => InputResult::Quit,
    }
}
