use std::f32::consts::PI;

use super::{Facing, Footing, Gait, InputSample, Platform, PlayerState};
use crate::config::Tuning;

/// Per-frame motion update for one player. Returns the next state and leaves
/// the input untouched.
pub fn advance(
    player: &PlayerState,
    input: &InputSample,
    elapsed_ms: f32,
    platforms: &[Platform],
    tuning: &Tuning,
) -> PlayerState {
    let mut next = player.clone();
    next.step(input, elapsed_ms, platforms, tuning);
    next
}

impl PlayerState {
    /// In-place form of [`advance`]. Phases run in a fixed order; several of
    /// them read flags written by an earlier phase of the same frame.
    pub fn step(
        &mut self,
        input: &InputSample,
        elapsed_ms: f32,
        platforms: &[Platform],
        tuning: &Tuning,
    ) {
        self.integrate(input);
        self.animate(input, elapsed_ms);
        self.dash_gesture(input);
        self.walk(input, tuning);
        self.dash_tap.tick(elapsed_ms);
        self.apply_friction(input, tuning);
        self.detect_ground(platforms, tuning);
        self.jump(input, elapsed_ms, tuning);
        self.fast_fall_gesture(input);
        self.apply_gravity(elapsed_ms, tuning);
    }

    fn integrate(&mut self, input: &InputSample) {
        self.pos += self.vel;
        self.rotation += input.right_stick_x * PI / 10.0;
    }

    fn animate(&mut self, input: &InputSample, elapsed_ms: f32) {
        let lx = input.left_stick.x;
        if lx.abs() > 0.0 {
            self.animation.tick_walk(elapsed_ms);
        }

        if lx > 0.0 {
            self.facing = Facing::Right;
        } else if lx < 0.0 {
            self.facing = Facing::Left;
        }

        if self.jumps.held {
            self.animation.tick_jump(elapsed_ms);
        }
        if self.is_dashing() {
            self.animation.tick_dash(elapsed_ms);
        }
    }

    fn dash_gesture(&mut self, input: &InputSample) {
        match self.dash_tap.deflection(input.left_stick) {
            Some(dir) => {
                if self.dash_tap.press(dir) {
                    tracing::debug!(player = self.index, dir, "dash");
                    self.gait = Gait::Dash;
                }
            }
            None => self.dash_tap.release(),
        }
    }

    fn walk(&mut self, input: &InputSample, tuning: &Tuning) {
        let lx = input.left_stick.x;
        if lx < 0.0 && self.vel.x > 0.0 {
            self.vel.x -= tuning.brake_impulse;
        } else if lx > 0.0 && self.vel.x < 0.0 {
            self.vel.x += tuning.brake_impulse;
        } else {
            let cap = tuning.speed_cap(self.is_dashing());
            self.vel.x = (self.vel.x + lx * tuning.acceleration).clamp(-cap, cap);
        }
    }

    fn apply_friction(&mut self, input: &InputSample, tuning: &Tuning) {
        if input.left_stick.length() != 0.0 {
            return;
        }

        let coeff = if self.is_floating() {
            tuning.air_friction
        } else {
            tuning.ground_friction
        };
        if self.vel.x.abs() >= tuning.stop_threshold {
            self.vel.x -= self.vel.x * coeff;
        } else {
            self.vel.x = 0.0;
            self.gait = Gait::Walk;
            self.dash_tap.clear();
        }
    }

    /// First platform touched wins, in list order.
    fn detect_ground(&mut self, platforms: &[Platform], tuning: &Tuning) {
        let body = self.bounds(tuning.scale);
        let Some(platform) = platforms.iter().find(|p| body.touches(p)) else {
            self.lift_off();
            return;
        };

        if body.bottom() <= platform.bottom() && self.vel.y > 0.0 {
            self.pos.y = platform.top() - self.origin().y * tuning.scale;
            if self.is_floating() {
                tracing::debug!(player = self.index, y = self.pos.y, "landed");
            }
            self.footing = Footing::Grounded;
            self.jumps.used = 0;
            self.jumps.timer_ms = 0.0;
        }
    }

    fn jump(&mut self, input: &InputSample, elapsed_ms: f32, tuning: &Tuning) {
        if !input.jump {
            self.jumps.ready = true;
            self.jumps.timer_ms = tuning.jump_release_ms;
            self.jumps.held = false;
            return;
        }

        self.jumps.held = true;
        if self.jumps.ready && self.jumps.used < tuning.max_jumps {
            self.jumps.timer_ms = 0.0;
            self.jumps.used += 1;
            self.jumps.ready = false;
            self.vel.y = tuning.jump_velocity;
            self.footing = Footing::Airborne {
                fast_falling: false,
            };
            self.animation.restart_jump();
            tracing::debug!(player = self.index, used = self.jumps.used, "jump");
        } else if self.is_floating() {
            tracing::trace!(player = self.index, timer_ms = self.jumps.timer_ms, "jump held");
            // TODO: confirm whether short and full hop are meant to differ;
            // both windows currently share one velocity.
            if self.jumps.timer_ms < tuning.short_hop_ms {
                self.vel.y = tuning.short_hop_velocity;
            } else if self.jumps.timer_ms < tuning.full_hop_ms {
                self.vel.y = tuning.full_hop_velocity;
            }
        }
        self.jumps.timer_ms += elapsed_ms;
    }

    fn fast_fall_gesture(&mut self, input: &InputSample) {
        let deflection = self
            .fast_fall_tap
            .deflection(input.left_stick)
            .filter(|_| self.is_floating());
        match deflection {
            Some(dir) => {
                if self.fast_fall_tap.press(dir) {
                    tracing::debug!(player = self.index, "fast fall");
                    self.footing = Footing::Airborne { fast_falling: true };
                }
            }
            None => self.fast_fall_tap.release(),
        }
    }

    fn apply_gravity(&mut self, elapsed_ms: f32, tuning: &Tuning) {
        match self.footing {
            Footing::Airborne { fast_falling: true } => {
                self.vel.y += tuning.fast_fall * tuning.gravity;
            }
            Footing::Airborne {
                fast_falling: false,
            } => {
                self.vel.y += tuning.slow_fall * tuning.gravity;
                self.jumps.timer_ms += elapsed_ms;
                self.fast_fall_tap.tick(elapsed_ms);
            }
            Footing::Grounded => {
                self.jumps.used = 0;
                self.vel.y = 0.0;
                self.fast_fall_tap.reset();
            }
        }
    }
}
