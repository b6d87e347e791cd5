use macroquad::math::{Rect, Vec2};

/// Stacks items top to bottom, horizontally centred in the area.
pub struct VBox {
    area: Rect,
    padding: f32,
    spacing: f32,
    cursor_y: f32,
}

impl VBox {
    pub fn new(area: Rect, padding: f32, spacing: f32) -> Self {
        Self {
            area,
            padding,
            spacing,
            cursor_y: area.y + padding,
        }
    }

    /// Reserves the next slot; width is clamped to the padded area.
    pub fn item(&mut self, desired: Vec2) -> Rect {
        let width = desired.x.min((self.area.w - 2.0 * self.padding).max(0.0));
        let x = self.area.x + (self.area.w - width) / 2.0;
        let rect = Rect::new(x, self.cursor_y, width, desired.y);
        self.cursor_y += desired.y + self.spacing;
        rect
    }
}
