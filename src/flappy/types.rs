//! Flappy data structures: the bird, the pipes, and what the renderer sees.

use crate::config::GameConfig;
use crate::constants::*;
use rand::Rng;

/// What the simulation is currently doing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameMode {
    /// Title screen, waiting for the first flap.
    Ready,
    Playing,
    Paused,
    /// The bird hit something. Waits for a reset.
    GameOver,
}

impl GameMode {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Ready => "ready",
            Self::Playing => "playing",
            Self::Paused => "paused",
            Self::GameOver => "gameover",
        }
    }
}

/// Axis-aligned rectangle in world units (y grows downward).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    pub fn is_empty(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }

    /// Strict overlap: rectangles that only share an edge do not intersect,
    /// and empty rectangles never intersect anything.
    pub fn intersects(&self, other: &Rect) -> bool {
        !self.is_empty()
            && !other.is_empty()
            && self.x < other.right()
            && other.x < self.right()
            && self.y < other.bottom()
            && other.y < self.bottom()
    }
}

/// The player's bird.
#[derive(Debug, Clone, PartialEq)]
pub struct Bird {
    /// Fixed horizontal position.
    pub x: f64,
    /// Vertical center position.
    pub y: f64,
    /// Vertical velocity in units/tick (positive = downward).
    pub velocity: f64,
    pub alive: bool,
    /// Display tilt in degrees (positive = nose up).
    pub angle: f64,
    /// Seconds of animation, drives the wing beat.
    pub anim_time: f64,
}

impl Bird {
    pub fn new(config: &GameConfig) -> Self {
        Self {
            x: config.bird_x,
            y: Self::start_y(config),
            velocity: 0.0,
            alive: true,
            angle: 0.0,
            anim_time: 0.0,
        }
    }

    fn start_y(config: &GameConfig) -> f64 {
        config.height * BIRD_START_RATIO
    }

    /// Back to the starting position, alive and at rest.
    pub fn reset(&mut self, config: &GameConfig) {
        *self = Self::new(config);
    }

    /// Velocity is replaced, not added to.
    pub fn flap(&mut self, config: &GameConfig) {
        self.velocity = config.flap_velocity;
    }

    /// One physics tick. Gravity and motion are per tick; `dt_secs` only
    /// advances the animation clock.
    pub fn update(&mut self, dt_secs: f64, config: &GameConfig) {
        if !self.alive {
            return;
        }
        self.velocity = (self.velocity + config.gravity).min(config.max_fall_speed);
        self.y += self.velocity;
        self.angle = (-self.velocity * TILT_PER_VELOCITY).clamp(TILT_MIN_DEG, TILT_MAX_DEG);
        self.anim_time += dt_secs;
    }

    /// Collision square, inset from the drawn sprite.
    pub fn bounding_box(&self, config: &GameConfig) -> Rect {
        let half = config.hitbox_half_extent();
        Rect::new(self.x - half, self.y - half, half * 2.0, half * 2.0)
    }

    /// Vertical wing displacement for drawing, in [-3, 3].
    pub fn wing_offset(&self) -> f64 {
        3.0 * (self.anim_time * 8.0).sin()
    }
}

/// A single pipe obstacle (top + bottom column around a gap).
#[derive(Debug, Clone, PartialEq)]
pub struct Pipe {
    /// Left edge.
    pub x: f64,
    /// Row of the gap's vertical midpoint. Never changes.
    pub gap_center: u32,
    /// Whether the bird has cleared this pipe (for scoring).
    pub passed: bool,
}

impl Pipe {
    /// New pipe at `x` with a random gap center from the configured band.
    pub fn new<R: Rng>(x: f64, config: &GameConfig, rng: &mut R) -> Self {
        let (min_center, max_center) = config.gap_band();
        Self {
            x,
            gap_center: rng.gen_range(min_center..=max_center.max(min_center)),
            passed: false,
        }
    }

    /// Constant leftward step, independent of elapsed time.
    pub fn update(&mut self, config: &GameConfig) {
        self.x -= config.pipe_speed;
    }

    pub fn trailing_edge(&self, config: &GameConfig) -> f64 {
        self.x + config.pipe_width
    }

    pub fn is_offscreen(&self, config: &GameConfig) -> bool {
        self.trailing_edge(config) < -OFFSCREEN_MARGIN
    }

    /// Column from the ceiling down to the gap.
    pub fn top_rect(&self, config: &GameConfig) -> Rect {
        let top_height = self.gap_center as f64 - config.half_gap() as f64;
        Rect::new(self.x, 0.0, config.pipe_width, top_height)
    }

    /// Column from the gap down to the ground.
    pub fn bottom_rect(&self, config: &GameConfig) -> Rect {
        let bottom_y = self.gap_center as f64 + config.half_gap() as f64;
        Rect::new(
            self.x,
            bottom_y,
            config.pipe_width,
            config.ground_line() - bottom_y,
        )
    }

    pub fn collides_with(&self, rect: &Rect, config: &GameConfig) -> bool {
        rect.intersects(&self.top_rect(config)) || rect.intersects(&self.bottom_rect(config))
    }
}

/// Bird state as the renderer needs it.
#[derive(Debug, Clone, PartialEq)]
pub struct BirdView {
    pub x: f64,
    pub y: f64,
    pub angle: f64,
    pub wing_offset: f64,
    pub alive: bool,
}

/// Pipe state as the renderer needs it.
#[derive(Debug, Clone, PartialEq)]
pub struct PipeView {
    pub x: f64,
    pub gap_center: u32,
    pub passed: bool,
}

/// Read-only copy of everything drawn in one frame.
#[derive(Debug, Clone, PartialEq)]
pub struct FrameSnapshot {
    pub mode: GameMode,
    pub score: u32,
    pub high_score: u32,
    pub bird: BirdView,
    pub pipes: Vec<PipeView>,
    pub ground_offset: f64,
    pub ground_tile_width: f64,

    // Geometry for scaling world units onto the screen
    pub width: f64,
    pub height: f64,
    pub ground_line: f64,
    pub pipe_width: f64,
    pub half_gap: u32,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_rect_overlap() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        assert!(a.intersects(&Rect::new(5.0, 5.0, 10.0, 10.0)));
        assert!(a.intersects(&Rect::new(2.0, 2.0, 2.0, 2.0)));
        assert!(!a.intersects(&Rect::new(20.0, 0.0, 5.0, 5.0)));
    }

    #[test]
    fn test_rect_touching_edges_do_not_collide() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        assert!(!a.intersects(&Rect::new(10.0, 0.0, 5.0, 5.0)));
        assert!(!a.intersects(&Rect::new(0.0, 10.0, 5.0, 5.0)));
    }

    #[test]
    fn test_empty_rect_never_collides() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        assert!(!a.intersects(&Rect::new(5.0, 5.0, 0.0, 10.0)));
    }

    #[test]
    fn test_new_bird_defaults() {
        let config = GameConfig::default();
        let bird = Bird::new(&config);
        assert!((bird.x - 90.0).abs() < f64::EPSILON);
        assert!((bird.y - 306.0).abs() < 1e-9);
        assert_eq!(bird.velocity, 0.0);
        assert!(bird.alive);
    }

    #[test]
    fn test_flap_sets_velocity() {
        let config = GameConfig::default();
        let mut bird = Bird::new(&config);
        bird.velocity = 5.0;
        bird.flap(&config);
        assert_eq!(bird.velocity, FLAP_VELOCITY);
    }

    #[test]
    fn test_gravity_pulls_bird_down() {
        let config = GameConfig::default();
        let mut bird = Bird::new(&config);
        let start_y = bird.y;
        bird.update(0.016, &config);
        assert!((bird.velocity - GRAVITY).abs() < 1e-9);
        assert!((bird.y - (start_y + GRAVITY)).abs() < 1e-9);
        assert!((bird.anim_time - 0.016).abs() < 1e-9);
    }

    #[test]
    fn test_velocity_capped() {
        let config = GameConfig::default();
        let mut bird = Bird::new(&config);
        bird.velocity = 100.0;
        bird.update(0.016, &config);
        assert_eq!(bird.velocity, MAX_FALL_SPEED);
    }

    #[test]
    fn test_tilt_clamped() {
        let config = GameConfig::default();
        let mut bird = Bird::new(&config);

        // Diving: nose down, limited to -25
        bird.velocity = 9.0;
        bird.update(0.0, &config);
        assert_eq!(bird.angle, TILT_MIN_DEG);

        // Flap: nose up
        bird.flap(&config);
        bird.update(0.0, &config);
        let expected = -(FLAP_VELOCITY + GRAVITY) * TILT_PER_VELOCITY;
        assert!((bird.angle - expected).abs() < 1e-9);
        assert!(bird.angle <= TILT_MAX_DEG);
    }

    #[test]
    fn test_dead_bird_does_not_move() {
        let config = GameConfig::default();
        let mut bird = Bird::new(&config);
        bird.alive = false;
        let before = bird.clone();
        bird.update(1.0, &config);
        assert_eq!(bird, before);
    }

    #[test]
    fn test_bounding_box_is_inset() {
        let config = GameConfig::default();
        let bird = Bird::new(&config);
        let rect = bird.bounding_box(&config);
        assert!((rect.width - 40.0).abs() < f64::EPSILON);
        assert!((rect.x - 70.0).abs() < f64::EPSILON);
        assert!((rect.y - (bird.y - 20.0)).abs() < 1e-9);
        assert!(rect.width < config.bird_size * 2.0);
    }

    #[test]
    fn test_gap_center_within_band() {
        let config = GameConfig::default();
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let (min, max) = config.gap_band();
        for _ in 0..500 {
            let pipe = Pipe::new(0.0, &config, &mut rng);
            assert!(pipe.gap_center >= min && pipe.gap_center <= max);
            assert!(!pipe.passed);
        }
    }

    #[test]
    fn test_pipe_moves_fixed_step() {
        let config = GameConfig::default();
        let mut pipe = Pipe {
            x: 200.0,
            gap_center: 300,
            passed: false,
        };
        pipe.update(&config);
        pipe.update(&config);
        assert!((pipe.x - (200.0 - 2.0 * PIPE_SPEED)).abs() < 1e-9);
        assert_eq!(pipe.gap_center, 300);
    }

    #[test]
    fn test_pipe_offscreen_margin() {
        let config = GameConfig::default();
        let mut pipe = Pipe {
            x: -74.0,
            gap_center: 300,
            passed: false,
        };
        assert!(!pipe.is_offscreen(&config));
        pipe.x = -74.5;
        assert!(pipe.is_offscreen(&config));
    }

    #[test]
    fn test_pipe_columns() {
        let config = GameConfig::default();
        let pipe = Pipe {
            x: 100.0,
            gap_center: 300,
            passed: false,
        };
        let top = pipe.top_rect(&config);
        assert_eq!(top, Rect::new(100.0, 0.0, 70.0, 215.0));
        let bottom = pipe.bottom_rect(&config);
        assert_eq!(bottom, Rect::new(100.0, 385.0, 70.0, 205.0));
    }

    #[test]
    fn test_bottom_rect_at_max_gap_center() {
        let config = GameConfig::default();
        let pipe = Pipe {
            x: 0.0,
            gap_center: u32::MAX,
            passed: false,
        };
        let bottom = pipe.bottom_rect(&config);
        assert_eq!(bottom.y, u32::MAX as f64 + 85.0);
        assert!(bottom.is_empty());
    }

    #[test]
    fn test_pipe_collision() {
        let config = GameConfig::default();
        let pipe = Pipe {
            x: 80.0,
            gap_center: 300,
            passed: false,
        };
        // Inside the gap
        assert!(!pipe.collides_with(&Rect::new(90.0, 280.0, 20.0, 20.0), &config));
        // Clipping the top column
        assert!(pipe.collides_with(&Rect::new(90.0, 200.0, 20.0, 20.0), &config));
        // Clipping the bottom column
        assert!(pipe.collides_with(&Rect::new(90.0, 380.0, 20.0, 20.0), &config));
        // Left of the pipe entirely
        assert!(!pipe.collides_with(&Rect::new(0.0, 0.0, 20.0, 20.0), &config));
    }
}
