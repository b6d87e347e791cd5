use crate::ui::style::Theme;
use macroquad::math::Vec2;
use macroquad::prelude::*;

/// A drawing command recorded by the UI, executed at the end of the frame.
pub enum DrawCmd {
    Rect {
        rect: Rect,
        color: Color,
    },
    Text {
        text: String,
        pos: Vec2,
        font_size: f32,
        color: Color,
    },
}

impl DrawCmd {
    pub fn execute(&self) {
        match self {
            DrawCmd::Rect { rect, color } => {
                draw_rectangle(rect.x, rect.y, rect.w, rect.h, *color);
            }
            DrawCmd::Text {
                text,
                pos,
                font_size,
                color,
            } => {
                draw_text(text, pos.x, pos.y, *font_size, *color);
            }
        }
    }
}

/// Immediate-mode UI state. The pointer comes from the host, which drives it
/// with either the mouse or the stick cursor.
pub struct UiContext {
    pub pointer: Vec2,
    pub clicked: bool,
    pub font_size: f32,
    pub theme: Theme,
    draw_commands: Vec<DrawCmd>,
}

impl UiContext {
    pub fn new() -> Self {
        Self {
            pointer: Vec2::ZERO,
            clicked: false,
            font_size: 24.0,
            theme: Theme::default(),
            draw_commands: Vec::new(),
        }
    }

    pub fn begin_frame(&mut self, pointer: Vec2, clicked: bool) {
        self.pointer = pointer;
        self.clicked = clicked;
        self.draw_commands.clear();
    }

    pub fn push_cmd(&mut self, cmd: DrawCmd) {
        self.draw_commands.push(cmd);
    }

    pub fn end_frame(&mut self) {
        for cmd in &self.draw_commands {
            cmd.execute();
        }
    }

    pub fn hovered(&self, area: Rect) -> bool {
        area.contains(self.pointer)
    }
}
