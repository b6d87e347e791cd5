use macroquad::input::{KeyCode, is_key_down};
use macroquad::math::Vec2;
use shared::state::{self, InputSample};

use crate::game_logic::Screen;

/// Keyboard layout for one player. Keys give full deflection, so tap
/// gestures work the same as on a pinned analog stick.
pub struct KeyMap {
    pub left: KeyCode,
    pub right: KeyCode,
    pub up: KeyCode,
    pub down: KeyCode,
    pub jump: KeyCode,
    pub spin_left: KeyCode,
    pub spin_right: KeyCode,
}

pub const KEY_MAPS: [KeyMap; 2] = [
    KeyMap {
        left: KeyCode::A,
        right: KeyCode::D,
        up: KeyCode::W,
        down: KeyCode::S,
        jump: KeyCode::Space,
        spin_left: KeyCode::Q,
        spin_right: KeyCode::E,
    },
    KeyMap {
        left: KeyCode::Left,
        right: KeyCode::Right,
        up: KeyCode::Up,
        down: KeyCode::Down,
        jump: KeyCode::Enter,
        spin_left: KeyCode::Comma,
        spin_right: KeyCode::Period,
    },
];

fn axis(negative: KeyCode, positive: KeyCode) -> f32 {
    digital_axis(is_key_down(negative), is_key_down(positive))
}

fn digital_axis(negative: bool, positive: bool) -> f32 {
    match (negative, positive) {
        (true, false) => -1.0,
        (false, true) => 1.0,
        _ => 0.0,
    }
}

impl KeyMap {
    pub fn sample(&self) -> InputSample {
        InputSample {
            left_stick: state::Vec2::new(axis(self.left, self.right), axis(self.down, self.up)),
            right_stick_x: axis(self.spin_left, self.spin_right),
            jump: is_key_down(self.jump),
        }
    }
}

/// One sample per player, in player order.
pub fn sample_inputs(players: usize) -> Vec<InputSample> {
    KEY_MAPS.iter().take(players).map(KeyMap::sample).collect()
}

/// True when any player pressed jump this frame.
pub fn jump_pressed(inputs: &[InputSample], previous: &[InputSample]) -> bool {
    inputs
        .iter()
        .enumerate()
        .any(|(i, input)| input.jump && !previous.get(i).is_some_and(|p| p.jump))
}

/// UI pointer and click for `screen`. In game the mouse drives the HUD and
/// jump stays a jump; menus use the stick cursor and let jump confirm.
pub fn ui_pointer(
    screen: Screen,
    cursor: Vec2,
    mouse: Vec2,
    mouse_clicked: bool,
    jump_edge: bool,
) -> (Vec2, bool) {
    match screen {
        Screen::InGame => (mouse, mouse_clicked),
        Screen::MainMenu | Screen::PauseMenu => (cursor, mouse_clicked || jump_edge),
    }
}
