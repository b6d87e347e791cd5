use crate::game_logic::{Screen, UiState};
use crate::ui::{Button, DrawCmd, Label, UiContext, UiResponse, VBox, Widget};
use macroquad::math::{Rect, vec2};
use macroquad::time::{get_fps, get_time};
use macroquad::window::{screen_height, screen_width};
use shared::state::{Footing, GameState, PlayerState};

const FPS_UPDATE_INTERVAL: f64 = 0.2;

/// Throttles the FPS readout so it stays legible.
#[derive(Debug, Default)]
pub struct FpsMeter {
    last_update: f64,
    display_fps: i32,
}

impl FpsMeter {
    fn sample(&mut self) -> i32 {
        let now = get_time();
        if now - self.last_update > FPS_UPDATE_INTERVAL {
            self.display_fps = get_fps();
            self.last_update = now;
        }
        self.display_fps
    }
}

fn full_screen() -> Rect {
    Rect::new(0.0, 0.0, screen_width(), screen_height())
}

/// Title screen. `on_start` runs before the match screen is pushed.
pub fn main_menu(ctx: &mut UiContext, state: &mut UiState, mut on_start: impl FnMut()) {
    let mut menu = VBox::new(full_screen(), 40.0, 12.0);

    Label::new("BRAWL").ui(ctx, menu.item(vec2(120.0, 50.0)));

    if Button::new("Start Match").ui(ctx, menu.item(vec2(240.0, 50.0))) == UiResponse::Clicked {
        on_start();
        state.push(Screen::InGame);
    }

    if Button::new("Quit").ui(ctx, menu.item(vec2(240.0, 50.0))) == UiResponse::Clicked {
        tracing::info!("quit from main menu");
        std::process::exit(0);
    }
}

pub fn pause_menu(ctx: &mut UiContext, state: &mut UiState, mut on_restart: impl FnMut()) {
    ctx.push_cmd(DrawCmd::Rect {
        rect: full_screen(),
        color: ctx.theme.panel_bg,
    });
    let mut menu = VBox::new(full_screen(), 40.0, 12.0);

    Label::new("Paused").ui(ctx, menu.item(vec2(120.0, 50.0)));

    if Button::new("Resume").ui(ctx, menu.item(vec2(240.0, 50.0))) == UiResponse::Clicked {
        state.pop();
    }

    if Button::new("Restart").ui(ctx, menu.item(vec2(240.0, 50.0))) == UiResponse::Clicked {
        on_restart();
        state.pop();
    }

    if Button::new("Main Menu").ui(ctx, menu.item(vec2(240.0, 50.0))) == UiResponse::Clicked {
        state.reset(Screen::MainMenu);
    }
}

fn describe(player: &PlayerState, max_jumps: u8) -> String {
    let footing = match player.footing {
        Footing::Grounded => "ground",
        Footing::Airborne { fast_falling: true } => "fast fall",
        Footing::Airborne {
            fast_falling: false,
        } => "air",
    };
    let gait = if player.is_dashing() { " dash" } else { "" };
    format!(
        "P{}  jumps {}/{}  {}{}",
        player.index + 1,
        player.jumps.used,
        max_jumps,
        footing,
        gait
    )
}

/// In-match overlay: FPS and one status line per player.
pub fn hud(ctx: &mut UiContext, state: &mut UiState, game_state: &GameState, fps: &mut FpsMeter) {
    let line_height = ctx.font_size * 1.2;
    let mut lines = vec![format!("FPS: {}", fps.sample())];
    lines.extend(
        game_state
            .players
            .iter()
            .map(|player| describe(player, game_state.tuning.max_jumps)),
    );

    for (i, text) in lines.into_iter().enumerate() {
        ctx.push_cmd(DrawCmd::Text {
            text,
            pos: vec2(10.0, 10.0 + line_height * (i as f32 + 1.0)),
            font_size: ctx.font_size,
            color: ctx.theme.text_color,
        });
    }

    let pause_size = vec2(90.0, 36.0);
    let pause_area = Rect::new(
        screen_width() - pause_size.x - 10.0,
        10.0,
        pause_size.x,
        pause_size.y,
    );
    if Button::new("Pause").ui(ctx, pause_area) == UiResponse::Clicked {
        state.push(Screen::PauseMenu);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::Tuning;
    use shared::state::SpawnPoint;

    #[test]
    fn test_player_status_line() {
        let mut player = PlayerState::new(1, &SpawnPoint { x: 0.0, y: 0.0 }, &Tuning::default());
        assert_eq!(describe(&player, 2), "P2  jumps 0/2  ground");

        player.footing = Footing::Airborne { fast_falling: true };
        player.jumps.used = 2;
        assert_eq!(describe(&player, 2), "P2  jumps 2/2  fast fall");
    }
}
