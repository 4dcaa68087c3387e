//! UI rendering for Flappy.
//!
//! World coordinates are scaled onto whatever terminal area is available;
//! each character cell samples the world at its center.

use crate::flappy::{FrameSnapshot, GameMode};
use crate::ui::game_common::{
    create_game_layout, render_info_panel_frame, render_message_box, render_status_bar,
};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Pipe caps are this many world units tall.
const CAP_HEIGHT: f64 = 20.0;
/// Ground bumps cover this share of each ground tile.
const BUMP_RATIO: f64 = 0.75;
/// Bumps only appear near the top of the ground strip.
const BUMP_BAND: f64 = 0.35;

/// What occupies a point of the play field (the bird is drawn on top).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cell {
    Sky,
    Pipe,
    PipeCap,
    Ground,
    GroundBump,
}

impl Cell {
    fn span(self) -> Span<'static> {
        match self {
            Cell::Sky => Span::styled(" ", Style::default().bg(Color::Blue)),
            Cell::Pipe => Span::styled("█", Style::default().fg(Color::Green)),
            Cell::PipeCap => Span::styled("█", Style::default().fg(Color::Rgb(40, 120, 70))),
            Cell::Ground => Span::styled("░", Style::default().fg(Color::Rgb(232, 219, 182))),
            Cell::GroundBump => Span::styled("▓", Style::default().fg(Color::Rgb(210, 200, 165))),
        }
    }
}

/// Classify the world point (`x`, `y`).
pub fn cell_at(snapshot: &FrameSnapshot, x: f64, y: f64) -> Cell {
    if y >= snapshot.ground_line {
        let depth = y - snapshot.ground_line;
        let ground_height = snapshot.height - snapshot.ground_line;
        if depth < ground_height * BUMP_BAND && is_bump(snapshot, x) {
            return Cell::GroundBump;
        }
        return Cell::Ground;
    }

    for pipe in &snapshot.pipes {
        if x < pipe.x || x >= pipe.x + snapshot.pipe_width {
            continue;
        }
        let top_end = pipe.gap_center as f64 - snapshot.half_gap as f64;
        let bottom_start = pipe.gap_center as f64 + snapshot.half_gap as f64;
        if y < top_end {
            return if y >= top_end - CAP_HEIGHT {
                Cell::PipeCap
            } else {
                Cell::Pipe
            };
        }
        if y >= bottom_start {
            return if y < bottom_start + CAP_HEIGHT {
                Cell::PipeCap
            } else {
                Cell::Pipe
            };
        }
        return Cell::Sky;
    }

    Cell::Sky
}

fn is_bump(snapshot: &FrameSnapshot, x: f64) -> bool {
    let tile = snapshot.ground_tile_width;
    (x - snapshot.ground_offset).rem_euclid(tile) < tile * BUMP_RATIO
}

/// Bird glyph from its tilt.
pub fn bird_glyph(snapshot: &FrameSnapshot) -> &'static str {
    let bird = &snapshot.bird;
    if !bird.alive {
        "✖"
    } else if bird.angle > 10.0 {
        "▲"
    } else if bird.angle < -10.0 {
        "▼"
    } else {
        "►"
    }
}

/// Map a world point to a (col, row) cell in an area of `cols` x `rows`.
pub fn world_to_cell(snapshot: &FrameSnapshot, x: f64, y: f64, cols: u16, rows: u16) -> (u16, u16) {
    let col = (x / snapshot.width * cols as f64).floor();
    let row = (y / snapshot.height * rows as f64).floor();
    (
        col.clamp(0.0, cols.saturating_sub(1) as f64) as u16,
        row.clamp(0.0, rows.saturating_sub(1) as f64) as u16,
    )
}

/// Render the whole Flappy screen.
pub fn render_flappy(frame: &mut Frame, area: Rect, snapshot: &FrameSnapshot) {
    let layout = create_game_layout(frame, area, " Flappy Bird ", Color::Cyan, 10, 22);

    render_play_area(frame, layout.content, snapshot);
    render_hud(frame, layout.content, snapshot);
    render_status_bar_content(frame, layout.status_bar, snapshot);
    render_info_panel(frame, layout.info_panel, snapshot);
    render_mode_overlay(frame, layout.content, snapshot);
}

/// Render the sky, pipes, ground and bird.
fn render_play_area(frame: &mut Frame, area: Rect, snapshot: &FrameSnapshot) {
    let cols = area.width;
    let rows = area.height;
    if cols == 0 || rows == 0 {
        return;
    }

    let x_scale = snapshot.width / cols as f64;
    let y_scale = snapshot.height / rows as f64;
    let (bird_col, bird_row) =
        world_to_cell(snapshot, snapshot.bird.x, snapshot.bird.y, cols, rows);

    let bird_color = if snapshot.bird.wing_offset > 0.0 {
        Color::Yellow
    } else {
        Color::LightYellow
    };

    let mut lines = Vec::with_capacity(rows as usize);
    for row in 0..rows {
        let y = (row as f64 + 0.5) * y_scale;
        let mut spans = Vec::with_capacity(cols as usize);
        for col in 0..cols {
            if row == bird_row && col == bird_col {
                spans.push(Span::styled(
                    bird_glyph(snapshot),
                    Style::default()
                        .fg(bird_color)
                        .bg(Color::Blue)
                        .add_modifier(Modifier::BOLD),
                ));
                continue;
            }
            let x = (col as f64 + 0.5) * x_scale;
            spans.push(cell_at(snapshot, x, y).span());
        }
        lines.push(Line::from(spans));
    }

    frame.render_widget(Paragraph::new(lines), area);
}

/// Best score in the top-left corner, current score centered on top.
fn render_hud(frame: &mut Frame, area: Rect, snapshot: &FrameSnapshot) {
    if area.height < 2 {
        return;
    }

    let hi = Paragraph::new(Span::styled(
        format!(" HI {}", snapshot.high_score),
        Style::default().fg(Color::White).bg(Color::Blue),
    ));
    frame.render_widget(hi, Rect { height: 1, ..area });

    if matches!(snapshot.mode, GameMode::Ready | GameMode::Playing) {
        let score = Paragraph::new(Span::styled(
            snapshot.score.to_string(),
            Style::default()
                .fg(Color::White)
                .bg(Color::Blue)
                .add_modifier(Modifier::BOLD),
        ))
        .alignment(Alignment::Center);
        frame.render_widget(
            score,
            Rect {
                y: area.y + 1,
                height: 1,
                ..area
            },
        );
    }
}

/// Render the status bar at the bottom.
fn render_status_bar_content(frame: &mut Frame, area: Rect, snapshot: &FrameSnapshot) {
    match snapshot.mode {
        GameMode::Ready => render_status_bar(
            frame,
            area,
            "Press Space to start!",
            Color::Yellow,
            &[("[Space/Up]", "Flap"), ("[P]", "Pause"), ("[Esc]", "Quit")],
        ),
        GameMode::Playing => render_status_bar(
            frame,
            area,
            &format!("Score: {}", snapshot.score),
            Color::Green,
            &[("[Space/Up]", "Flap"), ("[P]", "Pause"), ("[R]", "Restart")],
        ),
        GameMode::Paused => render_status_bar(
            frame,
            area,
            "Paused",
            Color::Yellow,
            &[("[P]", "Resume"), ("[R]", "Restart"), ("[Esc]", "Quit")],
        ),
        GameMode::GameOver => render_status_bar(
            frame,
            area,
            &format!("Crashed with {} pipes", snapshot.score),
            Color::Red,
            &[("[R]", "Restart"), ("[Esc]", "Quit")],
        ),
    }
}

/// Render the info panel on the right.
fn render_info_panel(frame: &mut Frame, area: Rect, snapshot: &FrameSnapshot) {
    let inner = render_info_panel_frame(frame, area);

    if inner.height < 2 || inner.width < 4 {
        return;
    }

    let label = Style::default().fg(Color::DarkGray);
    let lines = vec![
        Line::from(Span::styled(
            " Flappy Bird ",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled(" Score: ", label),
            Span::styled(
                snapshot.score.to_string(),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(vec![
            Span::styled(" Best: ", label),
            Span::styled(
                snapshot.high_score.to_string(),
                Style::default().fg(Color::Yellow),
            ),
        ]),
        Line::from(""),
        Line::from(vec![
            Span::styled(" Status: ", label),
            Span::styled(snapshot.mode.name(), Style::default().fg(Color::Green)),
        ]),
    ];

    frame.render_widget(Paragraph::new(lines), inner);
}

/// Title card, pause card, or game-over card, depending on the mode.
fn render_mode_overlay(frame: &mut Frame, area: Rect, snapshot: &FrameSnapshot) {
    match snapshot.mode {
        GameMode::Ready => render_message_box(
            frame,
            area,
            Color::Yellow,
            "FLAPPY BIRD",
            &[
                "Press SPACE to flap".to_string(),
                "P: pause  R: restart  ESC: quit".to_string(),
            ],
        ),
        GameMode::Paused => render_message_box(frame, area, Color::White, "PAUSED", &[]),
        GameMode::GameOver => {
            let mut body = vec![format!("Score: {}", snapshot.score)];
            if snapshot.score > snapshot.high_score {
                body.push("New best!".to_string());
            }
            body.push("Press R to restart".to_string());
            render_message_box(frame, area, Color::Red, "GAME OVER", &body);
        }
        GameMode::Playing => {}
    }
}
