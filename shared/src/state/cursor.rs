use super::{InputSample, Rect, Vec2};

/// Menu pointer steered by the left stick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cursor {
    pub pos: Vec2,
}

impl Cursor {
    pub fn new(pos: Vec2) -> Self {
        Cursor { pos }
    }

    /// Moves one pixel per millisecond at full deflection. Stick +y is up,
    /// screen +y is down.
    pub fn update(&mut self, input: &InputSample, elapsed_ms: f32, bounds: &Rect) {
        let stick = input.left_stick;
        self.pos += Vec2::new(stick.x, -stick.y) * elapsed_ms;
        self.pos.x = self.pos.x.clamp(bounds.left(), bounds.right());
        self.pos.y = self.pos.y.clamp(bounds.top(), bounds.bottom());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn screen() -> Rect {
        Rect::new(0.0, 0.0, 640.0, 360.0)
    }

    #[test]
    fn test_stick_moves_cursor() {
        let mut cursor = Cursor::new(Vec2::new(100.0, 100.0));
        let input = InputSample {
            left_stick: Vec2::new(0.5, 1.0),
            ..InputSample::default()
        };

        cursor.update(&input, 10.0, &screen());

        assert_eq!(cursor.pos, Vec2::new(105.0, 90.0), "Stick up moves the cursor up");
    }

    #[test]
    fn test_cursor_stays_on_screen() {
        let mut cursor = Cursor::new(Vec2::new(10.0, 350.0));
        let input = InputSample {
            left_stick: Vec2::new(-1.0, -1.0),
            ..InputSample::default()
        };

        cursor.update(&input, 100.0, &screen());

        assert_eq!(cursor.pos, Vec2::new(0.0, 360.0));
    }
}
