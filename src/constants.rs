// Play field (world units, origin top-left, y grows downward)
pub const FIELD_WIDTH: f64 = 420.0;
pub const FIELD_HEIGHT: f64 = 680.0;
pub const GROUND_HEIGHT: f64 = 90.0;

// Frame pacing
pub const TARGET_FPS: u32 = 60;

// Pipe constants
pub const PIPE_WIDTH: f64 = 70.0;
pub const PIPE_GAP: u32 = 170;
pub const PIPE_SPEED: f64 = 3.2; // world units per tick
pub const SPAWN_INTERVAL_MS: u64 = 1500;
/// Pipes spawn this far beyond the right edge.
pub const SPAWN_OFFSET: f64 = 10.0;
/// A pipe is dropped once its trailing edge is this far past the left edge.
pub const OFFSCREEN_MARGIN: f64 = 4.0;
/// Gap center band as fractions of the field height.
pub const GAP_BAND_MIN: f64 = 0.25;
pub const GAP_BAND_MAX: f64 = 0.65;

// Starter pipes shown on the ready screen
pub const STARTER_PIPE_OFFSETS: [f64; 2] = [120.0, 320.0];

// Bird constants
pub const BIRD_X: f64 = 90.0;
pub const BIRD_SIZE: f64 = 26.0;
pub const BIRD_START_RATIO: f64 = 0.45;
/// Collision box is inset from the sprite radius by this much.
pub const BIRD_HITBOX_INSET: f64 = 6.0;
pub const GRAVITY: f64 = 0.42; // velocity gained per tick
pub const FLAP_VELOCITY: f64 = -8.5;
pub const MAX_FALL_SPEED: f64 = 10.0;

// Tilt animation (degrees)
pub const TILT_MIN_DEG: f64 = -25.0;
pub const TILT_MAX_DEG: f64 = 60.0;
pub const TILT_PER_VELOCITY: f64 = 3.0;

// Ground scroll
pub const GROUND_TILE_WIDTH: f64 = 40.0;

// Files in the working directory
pub const HIGH_SCORE_FILE: &str = "flappy_highscore.txt";
pub const CONFIG_FILE: &str = "flappy_config.json";
pub const LOG_FILE: &str = "flappy.log";
