use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use serde::Deserialize;

use crate::error::LoadError;
use crate::state::{
    AIR_FRICTION, BRAKE_IMPULSE, DASH, FASTFALL, FULL_HOP_MS, FULL_HOP_VELOCITY, GRAVITY,
    GROUND_FRICTION, JUMP_RELEASE_MS, JUMP_VELOCITY, MAX_JUMPS, PLAYER_SIZE, SCALE,
    SHORT_HOP_MS, SHORT_HOP_VELOCITY, SLOWFALL, SPEED, STOP_THRESHOLD, TAP_WINDOW_MS, Vec2,
    WALK,
};

/// Movement tuning. Every field falls back to the compiled-in constant when
/// missing from the tuning file.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Tuning {
    pub walk_speed: f32,
    pub dash_speed: f32,
    pub acceleration: f32,
    pub brake_impulse: f32,
    pub ground_friction: f32,
    pub air_friction: f32,
    pub stop_threshold: f32,
    pub gravity: f32,
    pub slow_fall: f32,
    pub fast_fall: f32,
    pub max_jumps: u8,
    pub jump_velocity: f32,
    // Both hop windows ship with the same velocity; kept apart so they can be
    // tuned independently.
    pub short_hop_velocity: f32,
    pub full_hop_velocity: f32,
    pub short_hop_ms: f32,
    pub full_hop_ms: f32,
    pub jump_release_ms: f32,
    pub tap_window_ms: f32,
    pub scale: f32,
    pub player_size: Vec2,
}

impl Default for Tuning {
    fn default() -> Self {
        Tuning {
            walk_speed: WALK,
            dash_speed: DASH,
            acceleration: SPEED,
            brake_impulse: BRAKE_IMPULSE,
            ground_friction: GROUND_FRICTION,
            air_friction: AIR_FRICTION,
            stop_threshold: STOP_THRESHOLD,
            gravity: GRAVITY,
            slow_fall: SLOWFALL,
            fast_fall: FASTFALL,
            max_jumps: MAX_JUMPS,
            jump_velocity: JUMP_VELOCITY,
            short_hop_velocity: SHORT_HOP_VELOCITY,
            full_hop_velocity: FULL_HOP_VELOCITY,
            short_hop_ms: SHORT_HOP_MS,
            full_hop_ms: FULL_HOP_MS,
            jump_release_ms: JUMP_RELEASE_MS,
            tap_window_ms: TAP_WINDOW_MS,
            scale: SCALE,
            player_size: PLAYER_SIZE,
        }
    }
}

impl Tuning {
    pub fn from_json_str(s: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str::<Tuning>(s)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, LoadError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| LoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&content).map_err(|source| LoadError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Loads `path` if it exists. A missing file is not an error; an unreadable
    /// or malformed one is logged and replaced by the defaults.
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        match Self::load(path) {
            Ok(tuning) => tuning,
            Err(LoadError::Io { source, .. }) if source.kind() == ErrorKind::NotFound => {
                Tuning::default()
            }
            Err(e) => {
                tracing::warn!("using default tuning: {e}");
                Tuning::default()
            }
        }
    }

    /// Horizontal speed cap for the current gait.
    pub fn speed_cap(&self, dashing: bool) -> f32 {
        if dashing {
            self.dash_speed
        } else {
            self.walk_speed
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_fields_use_defaults() {
        let tuning = Tuning::from_json_str(r#"{ "dash_speed": 2.0, "max_jumps": 3 }"#).unwrap();

        assert_eq!(tuning.dash_speed, 2.0);
        assert_eq!(tuning.max_jumps, 3);
        assert_eq!(tuning.walk_speed, WALK, "Unset fields should keep defaults");
        assert_eq!(tuning.gravity, GRAVITY);
        assert_eq!(tuning.player_size, PLAYER_SIZE);
    }

    #[test]
    fn test_hop_velocities_default_equal() {
        let tuning = Tuning::default();
        assert_eq!(tuning.short_hop_velocity, tuning.full_hop_velocity);
        assert!(tuning.short_hop_ms < tuning.full_hop_ms);
    }

    #[test]
    fn test_load_missing_file_is_io_error() {
        let result = Tuning::load("does/not/exist.json");
        assert!(matches!(result, Err(LoadError::Io { .. })));
        assert_eq!(
            Tuning::load_or_default("does/not/exist.json"),
            Tuning::default()
        );
    }

    #[test]
    fn test_malformed_json_is_parse_error() {
        assert!(Tuning::from_json_str("{ \"walk_speed\": ").is_err());
    }

    #[test]
    fn test_speed_cap() {
        let tuning = Tuning::default();
        assert_eq!(tuning.speed_cap(false), WALK);
        assert_eq!(tuning.speed_cap(true), DASH);
    }
}
