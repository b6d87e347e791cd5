use macroquad::prelude::Color;

/// Colours for menus and the HUD.
#[derive(Clone, Debug)]
pub struct Theme {
    pub text_color: Color,
    pub button_bg: Color,
    pub button_hover_bg: Color,
    pub panel_bg: Color,
    pub cursor_color: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Theme {
            text_color: Color::from_rgba(255, 255, 255, 255),
            button_bg: Color::from_rgba(40, 40, 40, 200),
            button_hover_bg: Color::from_rgba(90, 90, 90, 220),
            panel_bg: Color::from_rgba(20, 20, 20, 180),
            cursor_color: Color::from_rgba(255, 210, 60, 255),
        }
    }
}
