mod animation;
mod cursor;
mod gesture;
mod mutate;
mod physics;

pub use animation::{Animation, FrameRect, RenderHint, TextureVariant};
pub use cursor::Cursor;
pub use gesture::{Axis, DoubleTap};
pub use physics::advance;

use crate::config::Tuning;
use crate::error::LoadError;
use serde::Deserialize;
use std::fmt::Display;
use std::fs;
use std::ops::{Add, AddAssign, Mul, Sub};
use std::path::Path;

// Settings
pub const SCREEN_HEIGHT: f32 = 720.0;
pub const SCREEN_WIDTH: f32 = 1280.0;
pub const SCALE: f32 = 2.0;

// Player
pub const MAX_JUMPS: u8 = 2;
pub const WALK: f32 = 0.5;
pub const DASH: f32 = 1.5;
pub const SPEED: f32 = 0.1;
pub const BRAKE_IMPULSE: f32 = 0.25;
pub const PLAYER_SIZE: Vec2 = Vec2 { x: 28.0, y: 42.0 };

// Physics
pub const GRAVITY: f32 = 0.0981;
pub const SLOWFALL: f32 = 2.5;
pub const FASTFALL: f32 = 14.0;
pub const GROUND_FRICTION: f32 = 0.4;
pub const AIR_FRICTION: f32 = 0.02;
pub const STOP_THRESHOLD: f32 = 0.1;

// Jump
pub const JUMP_VELOCITY: f32 = -1.5;
pub const SHORT_HOP_VELOCITY: f32 = -1.55;
pub const FULL_HOP_VELOCITY: f32 = -1.55;
pub const SHORT_HOP_MS: f32 = 125.0;
pub const FULL_HOP_MS: f32 = 150.0;
pub const JUMP_RELEASE_MS: f32 = 200.0;

// Gestures
pub const TAP_WINDOW_MS: f32 = 50.0;

#[derive(Debug, Clone, Copy, PartialEq, Default, Deserialize)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Display for Vec2 {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl Vec2 {
    pub fn new(x: f32, y: f32) -> Self {
        Vec2 { x, y }
    }

    pub const ZERO: Vec2 = Vec2 { x: 0.0, y: 0.0 };

    pub fn length(self) -> f32 {
        (self.x * self.x + self.y * self.y).sqrt()
    }
}

impl Sub for Vec2 {
    type Output = Vec2;

    fn sub(self, other: Vec2) -> Vec2 {
        Vec2 {
            x: self.x - other.x,
            y: self.y - other.y,
        }
    }
}

impl Add for Vec2 {
    type Output = Vec2;

    fn add(self, other: Vec2) -> Vec2 {
        Vec2 {
            x: self.x + other.x,
            y: self.y + other.y,
        }
    }
}

impl AddAssign for Vec2 {
    fn add_assign(&mut self, other: Vec2) {
        self.x += other.x;
        self.y += other.y;
    }
}

impl Mul<f32> for Vec2 {
    type Output = Vec2;

    fn mul(self, other: f32) -> Vec2 {
        Vec2 {
            x: self.x * other,
            y: self.y * other,
        }
    }
}

/// Axis-aligned rectangle, top-left origin, +y down.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

/// Slack allowed when deciding that a body rests on a platform top.
const CONTACT_EPSILON: f32 = 1e-3;

impl Rect {
    pub fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Rect { x, y, w, h }
    }

    pub fn left(&self) -> f32 {
        self.x
    }

    pub fn right(&self) -> f32 {
        self.x + self.w
    }

    pub fn top(&self) -> f32 {
        self.y
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.h
    }

    /// Overlap test where a body resting exactly on `other`'s top edge counts
    /// as touching it.
    pub fn touches(&self, other: &Rect) -> bool {
        self.left() < other.right()
            && other.left() < self.right()
            && self.top() < other.bottom()
            && other.top() <= self.bottom() + CONTACT_EPSILON
    }
}

pub type Platform = Rect;

/// One frame of controller input. Stick axes are in `[-1, 1]` with +y up.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct InputSample {
    pub left_stick: Vec2,
    pub right_stick_x: f32,
    pub jump: bool,
}

impl InputSample {
    pub fn neutral() -> Self {
        InputSample::default()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Facing {
    Left,
    #[default]
    Right,
}

/// Whether the player stands on a platform. Fast-fall only exists in the air.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Footing {
    Grounded,
    Airborne { fast_falling: bool },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Gait {
    #[default]
    Walk,
    Dash,
}

/// Jump bookkeeping, orthogonal to footing.
#[derive(Debug, Clone, PartialEq)]
pub struct JumpState {
    /// Jumps spent since the player last stood on a platform.
    pub used: u8,
    /// Button currently held.
    pub held: bool,
    /// Button released since the last consumed jump.
    pub ready: bool,
    pub timer_ms: f32,
}

impl Default for JumpState {
    fn default() -> Self {
        JumpState {
            used: 0,
            held: false,
            ready: true,
            timer_ms: 0.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PlayerState {
    pub index: usize,
    pub pos: Vec2,
    pub vel: Vec2,
    pub size: Vec2,
    pub rotation: f32,
    pub facing: Facing,
    pub footing: Footing,
    pub gait: Gait,
    pub jumps: JumpState,
    pub dash_tap: DoubleTap,
    pub fast_fall_tap: DoubleTap,
    pub animation: Animation,
}

impl PlayerState {
    pub fn new(index: usize, spawn_point: &SpawnPoint, tuning: &Tuning) -> PlayerState {
        PlayerState {
            index,
            pos: Vec2::new(spawn_point.x, spawn_point.y),
            vel: Vec2::ZERO,
            size: tuning.player_size,
            rotation: 0.0,
            facing: Facing::default(),
            footing: Footing::Grounded,
            gait: Gait::default(),
            jumps: JumpState::default(),
            dash_tap: DoubleTap::new(Axis::Horizontal, true, tuning.tap_window_ms),
            fast_fall_tap: DoubleTap::new(Axis::Vertical, false, tuning.tap_window_ms),
            animation: Animation::default(),
        }
    }

    pub fn is_floating(&self) -> bool {
        matches!(self.footing, Footing::Airborne { .. })
    }

    pub fn is_fast_falling(&self) -> bool {
        matches!(self.footing, Footing::Airborne { fast_falling: true })
    }

    pub fn is_dashing(&self) -> bool {
        self.gait == Gait::Dash
    }

    /// Sprite origin in sprite pixels (centre of the body).
    pub fn origin(&self) -> Vec2 {
        self.size * 0.5
    }

    /// World-space collision box.
    pub fn bounds(&self, scale: f32) -> Rect {
        let half = self.origin() * scale;
        Rect::new(
            self.pos.x - half.x,
            self.pos.y - half.y,
            self.size.x * scale,
            self.size.y * scale,
        )
    }

    /// Becomes airborne without touching an existing fast-fall.
    fn lift_off(&mut self) {
        if self.footing == Footing::Grounded {
            self.footing = Footing::Airborne {
                fast_falling: false,
            };
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct SpawnPoint {
    pub x: f32,
    pub y: f32,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Scene {
    #[serde(default)]
    pub name: String,
    pub width: f32,
    pub height: f32,
    pub spawn_points: Vec<SpawnPoint>,
    // Order is significant: the first platform touched wins.
    #[serde(default)]
    pub platforms: Vec<Platform>,
}

impl Default for Scene {
    fn default() -> Self {
        Scene {
            name: "default".to_string(),
            width: SCREEN_WIDTH,
            height: SCREEN_HEIGHT,
            spawn_points: vec![SpawnPoint { x: 100.0, y: 0.0 }],
            platforms: vec![Rect::new(50.0, 500.0, 1000.0, 30.0)],
        }
    }
}

impl Scene {
    pub fn from_json_str(s: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str::<Scene>(s)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, LoadError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| LoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let scene = Self::from_json_str(&content).map_err(|source| LoadError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        if scene.spawn_points.is_empty() {
            return Err(LoadError::EmptyScene(path.display().to_string()));
        }
        Ok(scene)
    }
}

/// A running match: players and platforms in stable order.
#[derive(Debug, Clone)]
pub struct GameState {
    pub players: Vec<PlayerState>,
    pub platforms: Vec<Platform>,
    pub spawn_points: Vec<SpawnPoint>,
    pub width: f32,
    pub height: f32,
    pub tuning: Tuning,
}

impl GameState {
    pub fn from_scene(scene: &Scene, tuning: Tuning) -> GameState {
        let players = scene
            .spawn_points
            .iter()
            .enumerate()
            .map(|(index, spawn_point)| PlayerState::new(index, spawn_point, &tuning))
            .collect();

        GameState {
            players,
            platforms: scene.platforms.clone(),
            spawn_points: scene.spawn_points.clone(),
            width: scene.width,
            height: scene.height,
            tuning,
        }
    }

    pub fn render_hints(&self) -> Vec<RenderHint> {
        self.players
            .iter()
            .map(|player| RenderHint::for_player(player, self.tuning.scale))
            .collect()
    }
}
