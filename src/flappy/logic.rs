//! Game logic for Flappy: the mode state machine, the per-tick update,
//! scoring, and collision resolution.

use super::types::*;
use crate::config::GameConfig;
use crate::constants::{SPAWN_OFFSET, STARTER_PIPE_OFFSETS};
use crate::utils::persistence::HighScoreStore;
use rand::rngs::StdRng;
use rand::SeedableRng;

/// UI-agnostic input actions. Quitting is handled by the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlappyInput {
    /// Space or Up.
    Flap,
    /// P.
    TogglePause,
    /// R.
    Reset,
    /// Any other key.
    Other,
}

/// Process player input.
pub fn process_input<S: HighScoreStore>(game: &mut FlappyGame<S>, input: FlappyInput) {
    match input {
        FlappyInput::Flap => game.flap(),
        FlappyInput::TogglePause => game.toggle_pause(),
        FlappyInput::Reset => game.reset(),
        FlappyInput::Other => {}
    }
}

/// A play session: the bird, the pipes, the score, and the best score so far.
pub struct FlappyGame<S: HighScoreStore> {
    config: GameConfig,
    mode: GameMode,
    bird: Bird,
    /// Active pipes in spawn order.
    pipes: Vec<Pipe>,
    score: u32,
    high_score: u32,
    /// Milliseconds since the last spawn.
    spawn_timer_ms: u64,
    /// Cosmetic ground scroll, in [0, ground_tile_width).
    ground_offset: f64,
    rng: StdRng,
    store: S,
}

impl<S: HighScoreStore> FlappyGame<S> {
    /// New session in `Ready`. Reads the high score from `store` once.
    pub fn new(config: GameConfig, store: S) -> Self {
        Self::with_rng(config, store, StdRng::from_entropy())
    }

    /// Deterministic session for replays and tests.
    pub fn with_seed(config: GameConfig, store: S, seed: u64) -> Self {
        Self::with_rng(config, store, StdRng::seed_from_u64(seed))
    }

    fn with_rng(config: GameConfig, store: S, rng: StdRng) -> Self {
        let high_score = store.load();
        Self {
            bird: Bird::new(&config),
            config,
            mode: GameMode::Ready,
            pipes: Vec::new(),
            score: 0,
            high_score,
            spawn_timer_ms: 0,
            ground_offset: 0.0,
            rng,
            store,
        }
    }

    /// Place the decorative pipes shown behind the title screen.
    /// They are cleared when the first attempt starts.
    pub fn seed_starter_pipes(&mut self) {
        for offset in STARTER_PIPE_OFFSETS {
            let pipe = Pipe::new(self.config.width + offset, &self.config, &mut self.rng);
            self.pipes.push(pipe);
        }
    }

    pub fn mode(&self) -> GameMode {
        self.mode
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn high_score(&self) -> u32 {
        self.high_score
    }

    pub fn bird(&self) -> &Bird {
        &self.bird
    }

    pub fn pipes(&self) -> &[Pipe] {
        &self.pipes
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn spawn_timer_ms(&self) -> u64 {
        self.spawn_timer_ms
    }

    pub fn ground_offset(&self) -> f64 {
        self.ground_offset
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Ready: start an attempt, then flap. Playing: flap. Otherwise ignored.
    pub fn flap(&mut self) {
        if self.mode == GameMode::Ready {
            self.start();
        }
        if self.mode == GameMode::Playing {
            self.bird.flap(&self.config);
        }
    }

    /// Playing <-> Paused. Ignored in other modes.
    pub fn toggle_pause(&mut self) {
        let next = match self.mode {
            GameMode::Playing => GameMode::Paused,
            GameMode::Paused => GameMode::Playing,
            GameMode::Ready | GameMode::GameOver => return,
        };
        tracing::debug!(from = self.mode.name(), to = next.name(), "Pause toggled");
        self.mode = next;
    }

    /// Commit the score, then return to `Ready` with a fresh field.
    /// Valid from every mode.
    pub fn reset(&mut self) {
        self.commit_high_score();
        self.mode = GameMode::Ready;
        self.clear_attempt();
        self.ground_offset = 0.0;
        tracing::debug!("Reset to ready");
    }

    /// Commit the current score before the process exits.
    pub fn finish(&mut self) {
        self.commit_high_score();
    }

    /// Advance one frame. `dt_ms` feeds the spawn timer and the animation
    /// clock; bird physics and pipe motion move a fixed step per call.
    /// Does nothing unless playing.
    pub fn update(&mut self, dt_ms: u64) {
        if self.mode != GameMode::Playing {
            return;
        }

        // 1. Spawn
        self.spawn_timer_ms += dt_ms;
        if self.spawn_timer_ms >= self.config.spawn_interval_ms {
            self.spawn_timer_ms = 0;
            let x = self.config.width + SPAWN_OFFSET;
            let pipe = Pipe::new(x, &self.config, &mut self.rng);
            tracing::trace!(x, gap_center = pipe.gap_center, "Spawned pipe");
            self.pipes.push(pipe);
        }

        // 2-3. Move bird and pipes
        self.bird.update(dt_ms as f64 / 1000.0, &self.config);
        for pipe in &mut self.pipes {
            pipe.update(&self.config);
        }

        // 4. Drop pipes that left the screen
        let config = &self.config;
        self.pipes.retain(|p| !p.is_offscreen(config));

        // 5. Score pipes the bird has cleared
        for pipe in &mut self.pipes {
            if !pipe.passed && pipe.trailing_edge(&self.config) < self.bird.x {
                pipe.passed = true;
                self.score += 1;
            }
        }

        // 6. Pipe collisions
        let hitbox = self.bird.bounding_box(&self.config);
        if self
            .pipes
            .iter()
            .any(|p| p.collides_with(&hitbox, &self.config))
        {
            self.end_attempt("pipe");
        }

        // 7. Ground and ceiling
        if self.mode == GameMode::Playing
            && (hitbox.bottom() >= self.config.ground_line() || hitbox.y <= 0.0)
        {
            self.end_attempt("boundary");
        }

        // 8. Ground scroll
        self.ground_offset = (self.ground_offset - self.config.pipe_speed)
            .rem_euclid(self.config.ground_tile_width);
    }

    /// Read-only copy for the renderer.
    pub fn snapshot(&self) -> FrameSnapshot {
        FrameSnapshot {
            mode: self.mode,
            score: self.score,
            high_score: self.high_score,
            bird: BirdView {
                x: self.bird.x,
                y: self.bird.y,
                angle: self.bird.angle,
                wing_offset: self.bird.wing_offset(),
                alive: self.bird.alive,
            },
            pipes: self
                .pipes
                .iter()
                .map(|p| PipeView {
                    x: p.x,
                    gap_center: p.gap_center,
                    passed: p.passed,
                })
                .collect(),
            ground_offset: self.ground_offset,
            ground_tile_width: self.config.ground_tile_width,
            width: self.config.width,
            height: self.config.height,
            ground_line: self.config.ground_line(),
            pipe_width: self.config.pipe_width,
            half_gap: self.config.half_gap(),
        }
    }

    fn start(&mut self) {
        self.mode = GameMode::Playing;
        self.clear_attempt();
        tracing::info!(high_score = self.high_score, "Attempt started");
    }

    fn clear_attempt(&mut self) {
        self.bird.reset(&self.config);
        self.pipes.clear();
        self.score = 0;
        self.spawn_timer_ms = 0;
    }

    fn end_attempt(&mut self, cause: &'static str) {
        self.mode = GameMode::GameOver;
        self.bird.alive = false;
        tracing::info!(score = self.score, cause, "Attempt over");
    }

    /// Raise and persist the high score if this attempt beat it.
    fn commit_high_score(&mut self) {
        if self.score > self.high_score {
            self.high_score = self.score;
            self.store.save(self.high_score);
        }
    }
}
