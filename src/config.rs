//! Tunable game parameters.
//!
//! Defaults reproduce the classic feel. An optional `flappy_config.json` in
//! the working directory may override any subset of fields.

use crate::constants::*;
use crate::error::ConfigError;
use crate::utils::persistence::read_json;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

/// Physics and layout parameters for one session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub width: f64,
    pub height: f64,
    pub ground_height: f64,

    pub pipe_width: f64,
    pub pipe_gap: u32,
    /// World units per tick.
    pub pipe_speed: f64,
    pub spawn_interval_ms: u64,

    pub bird_x: f64,
    pub bird_size: f64,
    /// Velocity gained per tick.
    pub gravity: f64,
    /// Velocity set by a flap (negative = upward).
    pub flap_velocity: f64,
    pub max_fall_speed: f64,

    pub fps: u32,
    pub ground_tile_width: f64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            width: FIELD_WIDTH,
            height: FIELD_HEIGHT,
            ground_height: GROUND_HEIGHT,

            pipe_width: PIPE_WIDTH,
            pipe_gap: PIPE_GAP,
            pipe_speed: PIPE_SPEED,
            spawn_interval_ms: SPAWN_INTERVAL_MS,

            bird_x: BIRD_X,
            bird_size: BIRD_SIZE,
            gravity: GRAVITY,
            flap_velocity: FLAP_VELOCITY,
            max_fall_speed: MAX_FALL_SPEED,

            fps: TARGET_FPS,
            ground_tile_width: GROUND_TILE_WIDTH,
        }
    }
}

impl GameConfig {
    /// Load overrides from `path`, falling back to defaults when the file is
    /// missing, unreadable, or describes an unplayable game.
    pub fn load_from(path: &Path) -> Self {
        let config = match read_json::<GameConfig>(path) {
            Ok(Some(config)) => config,
            Ok(None) => {
                tracing::debug!(path = %path.display(), "No config file, using defaults");
                return Self::default();
            }
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "Ignoring unreadable config");
                return Self::default();
            }
        };

        match config.validate() {
            Ok(()) => {
                tracing::info!(path = %path.display(), "Loaded config overrides");
                config
            }
            Err(e) => {
                tracing::warn!(error = %e, "Invalid config, using defaults");
                Self::default()
            }
        }
    }

    /// Load `flappy_config.json` from the working directory.
    pub fn load() -> Self {
        Self::load_from(Path::new(CONFIG_FILE))
    }

    /// Reject values that would break the simulation.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let positives = [
            ("width", self.width),
            ("height", self.height),
            ("pipe_width", self.pipe_width),
            ("pipe_speed", self.pipe_speed),
            ("gravity", self.gravity),
            ("max_fall_speed", self.max_fall_speed),
            ("ground_tile_width", self.ground_tile_width),
            ("hitbox", self.hitbox_half_extent()),
            ("play_height", self.ground_line()),
            ("spawn_interval_ms", self.spawn_interval_ms as f64),
            ("fps", self.fps as f64),
        ];
        for (field, value) in positives {
            if value <= 0.0 {
                return Err(ConfigError::NotPositive { field, value });
            }
        }

        if self.height * GAP_BAND_MAX > u32::MAX as f64 {
            return Err(ConfigError::FieldTooTall(self.height));
        }

        let half_gap = self.half_gap() as f64;
        let (band_min, band_max) = self.gap_band();
        if (band_min as f64) < half_gap || band_max as f64 + half_gap > self.ground_line() {
            return Err(ConfigError::GapTooLarge { gap: self.pipe_gap });
        }

        if self.bird_x <= 0.0 || self.bird_x >= self.width {
            return Err(ConfigError::BirdOutsideField(self.bird_x));
        }

        Ok(())
    }

    /// Y coordinate of the top of the ground strip.
    pub fn ground_line(&self) -> f64 {
        self.height - self.ground_height
    }

    /// Inclusive range of allowed gap centers.
    pub fn gap_band(&self) -> (u32, u32) {
        (
            (self.height * GAP_BAND_MIN) as u32,
            (self.height * GAP_BAND_MAX) as u32,
        )
    }

    /// Half the gap, rounded down.
    pub fn half_gap(&self) -> u32 {
        self.pipe_gap / 2
    }

    /// Half the side of the bird's collision square.
    pub fn hitbox_half_extent(&self) -> f64 {
        self.bird_size - BIRD_HITBOX_INSET
    }

    /// Wall-clock length of one frame at the target rate.
    pub fn frame_duration(&self) -> Duration {
        Duration::from_secs_f64(1.0 / self.fps.max(1) as f64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_defaults_are_valid() {
        let config = GameConfig::default();
        assert_eq!(config.validate(), Ok(()));
        assert_eq!(config.gap_band(), (170, 442));
        assert_eq!(config.half_gap(), 85);
        assert!((config.ground_line() - 590.0).abs() < f64::EPSILON);
        assert!((config.hitbox_half_extent() - 20.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_frame_duration() {
        let config = GameConfig::default();
        let ms = config.frame_duration().as_secs_f64() * 1000.0;
        assert!((ms - 16.666).abs() < 0.01);
    }

    #[test]
    fn test_validate_rejects_negative_gravity() {
        let config = GameConfig {
            gravity: -0.1,
            ..GameConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::NotPositive {
                field: "gravity",
                ..
            })
        ));
    }

    #[test]
    fn test_validate_rejects_huge_gap() {
        let config = GameConfig {
            pipe_gap: 400,
            ..GameConfig::default()
        };
        assert_eq!(
            config.validate(),
            Err(ConfigError::GapTooLarge { gap: 400 })
        );
    }

    #[test]
    fn test_validate_rejects_field_too_tall() {
        let config = GameConfig {
            height: 1e10,
            ..GameConfig::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::FieldTooTall(1e10)));
    }

    #[test]
    fn test_validate_rejects_gap_at_band_limit() {
        // Largest gap center plus half gap would overflow a u32
        let config = GameConfig {
            height: u32::MAX as f64 / GAP_BAND_MAX,
            pipe_gap: u32::MAX,
            ..GameConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_load_huge_height_falls_back() {
        let path = std::env::temp_dir().join("flappy_config_tall_test.json");
        fs::write(&path, r#"{ "height": 1e10 }"#).unwrap();
        assert_eq!(GameConfig::load_from(&path), GameConfig::default());
        fs::remove_file(path).ok();
    }

    #[test]
    fn test_validate_rejects_bird_outside() {
        let config = GameConfig {
            bird_x: 500.0,
            ..GameConfig::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::BirdOutsideField(500.0)));
    }

    #[test]
    fn test_load_missing_file_uses_defaults() {
        let path = std::env::temp_dir().join("flappy_config_missing_12345.json");
        let _ = fs::remove_file(&path);
        assert_eq!(GameConfig::load_from(&path), GameConfig::default());
    }

    #[test]
    fn test_load_partial_override() {
        let path = std::env::temp_dir().join("flappy_config_partial_test.json");
        fs::write(&path, r#"{ "pipe_gap": 200, "gravity": 0.5 }"#).unwrap();

        let config = GameConfig::load_from(&path);
        assert_eq!(config.pipe_gap, 200);
        assert!((config.gravity - 0.5).abs() < f64::EPSILON);
        assert!((config.pipe_speed - PIPE_SPEED).abs() < f64::EPSILON);

        fs::remove_file(path).ok();
    }

    #[test]
    fn test_load_invalid_values_fall_back() {
        let path = std::env::temp_dir().join("flappy_config_invalid_test.json");
        fs::write(&path, r#"{ "fps": 0 }"#).unwrap();
        assert_eq!(GameConfig::load_from(&path), GameConfig::default());
        fs::remove_file(path).ok();
    }

    #[test]
    fn test_load_garbage_falls_back() {
        let path = std::env::temp_dir().join("flappy_config_garbage_test.json");
        fs::write(&path, "not json at all").unwrap();
        assert_eq!(GameConfig::load_from(&path), GameConfig::default());
        fs::remove_file(path).ok();
    }
}
