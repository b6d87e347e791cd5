//! Flip-book animation clocks and render hints.
//!
//! Animation runs on its own timers and never feeds back into motion. The
//! host picks a texture from [`TextureVariant`] and a source rectangle from
//! [`FrameRect`]; no asset handles live here.

use super::{Facing, PlayerState, Vec2};

pub const WALK_FRAME_MS: f32 = 250.0;
pub const WALK_FRAMES: u8 = 4;
pub const DASH_FRAME_MS: f32 = 100.0;
pub const JUMP_FRAME_MS: f32 = 200.0;

const WALK_FRAME_SIZE: (f32, f32) = (29.0, 44.0);
const DASH_FRAME_SIZE: (f32, f32) = (34.0, 50.0);
const JUMP_FRAME_SIZE: (f32, f32) = (28.0, 42.0);

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Animation {
    pub walk_frame: u8,
    pub walk_timer_ms: f32,
    pub dash_frame: u8,
    pub dash_timer_ms: f32,
    pub jump_frame: u8,
    pub jump_timer_ms: f32,
}

impl Animation {
    pub fn tick_walk(&mut self, elapsed_ms: f32) {
        self.walk_timer_ms += elapsed_ms;
        if self.walk_timer_ms >= WALK_FRAME_MS {
            self.walk_timer_ms = 0.0;
            self.walk_frame = (self.walk_frame + 1) % WALK_FRAMES;
        }
    }

    pub fn tick_dash(&mut self, elapsed_ms: f32) {
        self.dash_timer_ms += elapsed_ms;
        if self.dash_timer_ms >= DASH_FRAME_MS {
            self.dash_timer_ms = 0.0;
            self.dash_frame = 1 - self.dash_frame;
        }
    }

    pub fn tick_jump(&mut self, elapsed_ms: f32) {
        self.jump_timer_ms += elapsed_ms;
        if self.jump_timer_ms > JUMP_FRAME_MS {
            self.jump_frame = 1;
        }
    }

    pub fn restart_jump(&mut self) {
        self.jump_frame = 0;
        self.jump_timer_ms = 0.0;
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextureVariant {
    Idle,
    IdleLeft,
    WalkLeft,
    WalkRight,
    DashLeft,
    DashRight,
    JumpLeft,
    JumpRight,
}

impl TextureVariant {
    pub fn asset_name(self) -> &'static str {
        match self {
            TextureVariant::Idle => "Idle",
            TextureVariant::IdleLeft => "Idle_Left",
            TextureVariant::WalkLeft => "Move_Left",
            TextureVariant::WalkRight => "Move_Right",
            TextureVariant::DashLeft => "Dash_Left",
            TextureVariant::DashRight => "Dash_Right",
            TextureVariant::JumpLeft => "Jump_Left",
            TextureVariant::JumpRight => "Jump_Right",
        }
    }
}

/// Source rectangle inside a sprite strip, in texture pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameRect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl FrameRect {
    fn strip(frame: u8, (w, h): (f32, f32)) -> Self {
        FrameRect {
            x: w * frame as f32,
            y: 0.0,
            w,
            h,
        }
    }
}

/// Everything the host needs to draw one player this frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderHint {
    pub variant: TextureVariant,
    /// `None` draws the whole texture.
    pub frame: Option<FrameRect>,
    pub position: Vec2,
    pub origin: Vec2,
    pub rotation: f32,
    pub scale: f32,
}

impl RenderHint {
    /// Priority: jumping, dashing, walking, idle.
    pub fn for_player(player: &PlayerState, scale: f32) -> RenderHint {
        let left = player.facing == Facing::Left;
        let anim = &player.animation;

        let (variant, frame) = if player.jumps.held {
            let variant = if left {
                TextureVariant::JumpLeft
            } else {
                TextureVariant::JumpRight
            };
            (variant, Some(FrameRect::strip(anim.jump_frame, JUMP_FRAME_SIZE)))
        } else if player.is_dashing() {
            let variant = if left {
                TextureVariant::DashLeft
            } else {
                TextureVariant::DashRight
            };
            (variant, Some(FrameRect::strip(anim.dash_frame, DASH_FRAME_SIZE)))
        } else if player.vel.x.abs() > 0.0 {
            let variant = if left {
                TextureVariant::WalkLeft
            } else {
                TextureVariant::WalkRight
            };
            (variant, Some(FrameRect::strip(anim.walk_frame, WALK_FRAME_SIZE)))
        } else if left {
            (TextureVariant::IdleLeft, None)
        } else {
            (TextureVariant::Idle, None)
        };

        RenderHint {
            variant,
            frame,
            position: player.pos,
            origin: player.origin(),
            rotation: player.rotation,
            scale,
        }
    }
}
