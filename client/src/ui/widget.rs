use crate::ui::context::DrawCmd;
use crate::ui::context::UiContext;
use macroquad::math::{Rect, Vec2};

#[derive(Debug, PartialEq, Eq)]
pub enum UiResponse {
    None,
    Clicked,
}

pub trait Widget {
    /// Handle input and record draw commands for this frame.
    fn ui(&mut self, ctx: &mut UiContext, area: Rect) -> UiResponse;
}

#[derive(Debug, Clone)]
pub struct Label {
    pub text: String,
}

impl Label {
    pub fn new<T: Into<String>>(text: T) -> Self {
        Label { text: text.into() }
    }
}

impl Widget for Label {
    fn ui(&mut self, ctx: &mut UiContext, area: Rect) -> UiResponse {
        ctx.push_cmd(DrawCmd::Text {
            text: self.text.clone(),
            pos: Vec2::new(area.x, area.y + ctx.font_size),
            font_size: ctx.font_size,
            color: ctx.theme.text_color,
        });
        UiResponse::None
    }
}

#[derive(Debug, Clone)]
pub struct Button {
    pub label: String,
}

impl Button {
    pub fn new<T: Into<String>>(label: T) -> Self {
        Button {
            label: label.into(),
        }
    }
}

impl Widget for Button {
    fn ui(&mut self, ctx: &mut UiContext, area: Rect) -> UiResponse {
        let hovered = ctx.hovered(area);
        let bg = if hovered {
            ctx.theme.button_hover_bg
        } else {
            ctx.theme.button_bg
        };
        ctx.push_cmd(DrawCmd::Rect {
            rect: area,
            color: bg,
        });

        // rough centring; macroquad's default font is about half as wide as tall
        let text_w = self.label.len() as f32 * ctx.font_size * 0.5;
        let pos = Vec2::new(
            area.x + (area.w - text_w) / 2.0,
            area.y + (area.h + ctx.font_size) / 2.0,
        );
        ctx.push_cmd(DrawCmd::Text {
            text: self.label.clone(),
            pos,
            font_size: ctx.font_size,
            color: ctx.theme.text_color,
        });

        if hovered && ctx.clicked {
            UiResponse::Clicked
        } else {
            UiResponse::None
        }
    }
}
