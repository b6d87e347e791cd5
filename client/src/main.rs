mod game_logic;
mod input;
mod render;
mod ui;

use macroquad::prelude::*;
use shared::Tuning;
use shared::state::{self, Cursor, GameState, InputSample, Scene};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, fmt};

use crate::game_logic::{Screen, UiState};
use crate::input::{jump_pressed, sample_inputs, ui_pointer};
use crate::render::render;
use crate::ui::{FpsMeter, UiContext, hud, main_menu, pause_menu};

const SCENE_NAME: &str = "stage_1";
const CONFIG_PATH: &str = "config.json";
const TICK_MS: f32 = 1000.0 / 60.0;
// Longest frame we try to catch up on after a stall.
const MAX_FRAME_MS: f32 = 250.0;
const CURSOR_RADIUS: f32 = 6.0;
const FULLSCREEN: bool = false;

fn window_conf() -> Conf {
    Conf {
        window_title: "Brawl".to_owned(),
        window_width: state::SCREEN_WIDTH as i32,
        window_height: state::SCREEN_HEIGHT as i32,
        high_dpi: false,
        fullscreen: FULLSCREEN,
        sample_count: 1,
        window_resizable: true,
        ..Default::default()
    }
}

fn init_tracing() {
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("brawl_client=info,shared=info")),
        )
        .init();
}

fn load_scene() -> Scene {
    let project_root = env!("CARGO_MANIFEST_DIR");
    let path = format!("{}/../scenes/{}.json", project_root, SCENE_NAME);
    match Scene::load(&path) {
        Ok(scene) => scene,
        Err(e) => {
            tracing::error!(error = %e, "falling back to built-in stage");
            Scene::default()
        }
    }
}

fn screen_bounds() -> state::Rect {
    state::Rect::new(0.0, 0.0, screen_width(), screen_height())
}

#[macroquad::main(window_conf)]
async fn main() {
    init_tracing();

    let scene = load_scene();
    let tuning = Tuning::load_or_default(CONFIG_PATH);
    tracing::info!(
        scene = %scene.name,
        players = scene.spawn_points.len(),
        platforms = scene.platforms.len(),
        "starting"
    );
    let mut game_state = GameState::from_scene(&scene, tuning.clone());

    let mut ui = UiContext::new();
    let mut ui_state = UiState::new();
    let mut fps = FpsMeter::default();
    let mut cursor = Cursor::new(state::Vec2::new(screen_width() / 2.0, screen_height() / 2.0));
    let mut previous_inputs: Vec<InputSample> = Vec::new();
    let mut accumulator_ms = 0.0;

    loop {
        let frame_ms = (get_frame_time() * 1000.0).min(MAX_FRAME_MS);
        let inputs = sample_inputs(game_state.players.len());

        if is_key_pressed(KeyCode::Escape) {
            ui_state.handle_escape();
        }

        match ui_state.current_screen() {
            Screen::InGame => {
                accumulator_ms += frame_ms;
                while accumulator_ms >= TICK_MS {
                    game_state.mutate(&inputs, TICK_MS);
                    accumulator_ms -= TICK_MS;
                }
            }
            Screen::MainMenu | Screen::PauseMenu => {
                accumulator_ms = 0.0;
                for input in &inputs {
                    cursor.update(input, frame_ms, &screen_bounds());
                }
                if mouse_delta_position() != Vec2::ZERO {
                    let (x, y) = mouse_position();
                    cursor.pos = state::Vec2::new(x, y);
                }
            }
        }

        let (mouse_x, mouse_y) = mouse_position();
        let (pointer, clicked) = ui_pointer(
            ui_state.current_screen(),
            vec2(cursor.pos.x, cursor.pos.y),
            vec2(mouse_x, mouse_y),
            is_mouse_button_pressed(MouseButton::Left),
            jump_pressed(&inputs, &previous_inputs),
        );
        previous_inputs = inputs;

        render(&game_state);

        ui.begin_frame(pointer, clicked);
        match ui_state.current_screen() {
            Screen::MainMenu => main_menu(&mut ui, &mut ui_state, || {
                game_state = GameState::from_scene(&scene, tuning.clone());
            }),
            Screen::InGame => hud(&mut ui, &mut ui_state, &game_state, &mut fps),
            Screen::PauseMenu => pause_menu(&mut ui, &mut ui_state, || {
                tracing::info!("match restarted");
                game_state = GameState::from_scene(&scene, tuning.clone());
            }),
        }
        ui.end_frame();

        if ui_state.current_screen() != Screen::InGame {
            draw_circle(cursor.pos.x, cursor.pos.y, CURSOR_RADIUS, ui.theme.cursor_color);
        }

        next_frame().await;
    }
}
