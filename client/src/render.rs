use macroquad::color::{Color, WHITE};
use macroquad::math::{Vec2, vec2};
use macroquad::shapes::{DrawRectangleParams, draw_circle, draw_rectangle, draw_rectangle_ex};
use macroquad::text::draw_text;
use macroquad::window::{clear_background, screen_height, screen_width};
use shared::state::{self, GameState, RenderHint, TextureVariant};

const BORDER_COLOR: Color = Color::new(0.05, 0.05, 0.08, 1.0);
const BACKGROUND_COLOR: Color = Color::new(0.16, 0.18, 0.26, 1.0);
const PLATFORM_COLOR: Color = Color::new(0.55, 0.58, 0.62, 1.0);
const LABEL_SIZE: f32 = 18.0;

/// Maps stage space onto the window, letterboxed.
pub struct View {
    pub scale: f32,
    pub offset: Vec2,
}

impl View {
    pub fn fit(stage_width: f32, stage_height: f32) -> Self {
        let w = screen_width();
        let h = screen_height();
        let scale = (w / stage_width).min(h / stage_height);
        let offset = vec2(
            (w - stage_width * scale) / 2.0,
            (h - stage_height * scale) / 2.0,
        );
        View { scale, offset }
    }

    pub fn to_screen(&self, p: state::Vec2) -> Vec2 {
        vec2(
            self.offset.x + p.x * self.scale,
            self.offset.y + p.y * self.scale,
        )
    }
}

/// Stand-in colour per sprite strip until real textures are loaded.
fn variant_color(variant: TextureVariant) -> Color {
    match variant {
        TextureVariant::Idle | TextureVariant::IdleLeft => Color::new(0.85, 0.85, 0.9, 1.0),
        TextureVariant::WalkLeft | TextureVariant::WalkRight => Color::new(0.3, 0.75, 0.4, 1.0),
        TextureVariant::DashLeft | TextureVariant::DashRight => Color::new(0.95, 0.55, 0.2, 1.0),
        TextureVariant::JumpLeft | TextureVariant::JumpRight => Color::new(0.35, 0.55, 0.95, 1.0),
    }
}

fn draw_player(view: &View, index: usize, hint: &RenderHint, body: state::Vec2) {
    let (frame_w, frame_h, frame_index) = match hint.frame {
        Some(frame) => (frame.w, frame.h, (frame.x / frame.w) as u32),
        None => (body.x, body.y, 0),
    };
    let w = frame_w * hint.scale * view.scale;
    let h = frame_h * hint.scale * view.scale;
    let center = view.to_screen(hint.position);

    draw_rectangle_ex(
        center.x,
        center.y,
        w,
        h,
        DrawRectangleParams {
            offset: vec2(hint.origin.x / frame_w, hint.origin.y / frame_h),
            rotation: hint.rotation,
            color: variant_color(hint.variant),
        },
    );

    // marks the current flip-book frame
    let pip = 3.0 * view.scale;
    draw_circle(
        center.x - w / 2.0 + pip * (2.0 + 3.0 * frame_index as f32),
        center.y - h / 2.0 - pip * 2.0,
        pip,
        WHITE,
    );

    let label = format!("P{} {}", index + 1, hint.variant.asset_name());
    draw_text(
        &label,
        center.x - w / 2.0,
        center.y - h / 2.0 - pip * 4.0,
        LABEL_SIZE * view.scale.max(0.5),
        WHITE,
    );
}

pub fn render(game_state: &GameState) {
    let view = View::fit(game_state.width, game_state.height);
    clear_background(BORDER_COLOR);

    draw_rectangle(
        view.offset.x,
        view.offset.y,
        game_state.width * view.scale,
        game_state.height * view.scale,
        BACKGROUND_COLOR,
    );

    for platform in &game_state.platforms {
        let top_left = view.to_screen(state::Vec2::new(platform.x, platform.y));
        draw_rectangle(
            top_left.x,
            top_left.y,
            platform.w * view.scale,
            platform.h * view.scale,
            PLATFORM_COLOR,
        );
    }

    for (player, hint) in game_state.players.iter().zip(game_state.render_hints()) {
        draw_player(&view, player.index, &hint, player.size);
    }
}
