use shared::state::{GameState, InputSample, RenderHint, Scene, TextureVariant, Vec2};
use shared::{LoadError, Tuning};

const FRAME_MS: f32 = 16.0;

fn scene_path(name: &str) -> String {
    let project_root = env!("CARGO_MANIFEST_DIR");
    format!("{}/../scenes/{}.json", project_root, name)
}

fn create_flat_state() -> GameState {
    let scene = Scene::from_json_str(
        r#"{
            "width": 800.0,
            "height": 600.0,
            "spawn_points": [{ "x": 200.0, "y": 300.0 }],
            "platforms": [{ "x": 0.0, "y": 500.0, "w": 800.0, "h": 30.0 }]
        }"#,
    )
    .unwrap();
    GameState::from_scene(&scene, Tuning::default())
}

/// Lets the spawned players drop onto the floor.
fn settle(state: &mut GameState) {
    for _ in 0..120 {
        state.mutate(&[], FRAME_MS);
    }
    assert!(state.players.iter().all(|p| !p.is_floating()));
}

fn input(x: f32, y: f32, jump: bool) -> InputSample {
    InputSample {
        left_stick: Vec2::new(x, y),
        right_stick_x: 0.0,
        jump,
    }
}

#[test]
fn test_stage_file_loads_in_order() {
    let scene = Scene::load(scene_path("stage_1")).unwrap();

    assert_eq!(scene.name, "stage_1");
    assert_eq!(scene.spawn_points.len(), 2);
    assert_eq!(scene.platforms.len(), 4);
    assert_eq!(scene.platforms[0].w, 1000.0, "Main stage must stay first");
    assert_eq!(scene.platforms[3].y, 260.0);
}

#[test]
fn test_missing_scene_is_io_error() {
    let result = Scene::load(scene_path("no_such_stage"));
    assert!(matches!(result, Err(LoadError::Io { .. })));
}

#[test]
fn test_scene_without_spawns_is_rejected() {
    let dir = std::env::temp_dir().join("brawl_empty_scene.json");
    std::fs::write(
        &dir,
        r#"{ "width": 10.0, "height": 10.0, "spawn_points": [] }"#,
    )
    .unwrap();

    let result = Scene::load(&dir);

    assert!(matches!(result, Err(LoadError::EmptyScene(_))));
    let _ = std::fs::remove_file(&dir);
}

#[test]
fn test_jump_round_trip_lands_with_zero_jumps() {
    let mut state = create_flat_state();
    settle(&mut state);
    let floor_y = state.players[0].pos.y;

    state.mutate(&[input(0.0, 0.0, true)], FRAME_MS);
    assert_eq!(state.players[0].jumps.used, 1);
    assert!(state.players[0].is_floating());

    let mut peak = floor_y;
    let mut frames = 0;
    loop {
        state.mutate(&[input(0.0, 0.0, false)], FRAME_MS);
        peak = peak.min(state.players[0].pos.y);
        frames += 1;
        if !state.players[0].is_floating() {
            break;
        }
        assert!(frames < 500, "Player never landed");
    }

    let player = &state.players[0];
    assert!(peak < floor_y, "Player should have risen");
    assert_eq!(player.jumps.used, 0);
    assert_eq!(player.vel.y, 0.0);
    assert_eq!(player.pos.y, floor_y, "Player lands back on the floor");
}

#[test]
fn test_double_jump_then_no_third() {
    let mut state = create_flat_state();
    settle(&mut state);

    state.mutate(&[input(0.0, 0.0, true)], FRAME_MS);
    state.mutate(&[input(0.0, 0.0, false)], FRAME_MS);
    state.mutate(&[input(0.0, 0.0, true)], FRAME_MS);
    assert_eq!(state.players[0].jumps.used, 2);
    let vy = state.players[0].vel.y;
    assert!(vy < 0.0, "Second jump launches upward again");

    for _ in 0..3 {
        state.mutate(&[input(0.0, 0.0, false)], FRAME_MS);
    }
    assert!(state.players[0].is_floating());
    let before = state.players[0].vel.y;
    state.mutate(&[input(0.0, 0.0, true)], FRAME_MS);

    assert_eq!(state.players[0].jumps.used, 2, "Third jump must be refused");
    assert!(state.players[0].vel.y > before, "Gravity keeps pulling");
}

#[test]
fn test_fast_fall_from_jump() {
    let mut state = create_flat_state();
    settle(&mut state);

    state.mutate(&[input(0.0, 0.0, true)], FRAME_MS);
    state.mutate(&[input(0.0, -1.0, false)], FRAME_MS);
    state.mutate(&[input(0.0, 0.0, false)], FRAME_MS);
    state.mutate(&[input(0.0, -1.0, false)], FRAME_MS);

    assert!(state.players[0].is_fast_falling());

    for _ in 0..200 {
        state.mutate(&[input(0.0, 0.0, false)], FRAME_MS);
    }
    assert!(!state.players[0].is_fast_falling(), "Landing clears fast fall");
    assert!(!state.players[0].is_floating());
}

#[test]
fn test_dash_renders_and_stops() {
    let mut state = create_flat_state();
    settle(&mut state);

    state.mutate(&[input(-1.0, 0.0, false)], FRAME_MS);
    state.mutate(&[input(0.0, 0.0, false)], FRAME_MS);
    state.mutate(&[input(-1.0, 0.0, false)], FRAME_MS);
    assert!(state.players[0].is_dashing());

    let hint: RenderHint = state.render_hints()[0];
    assert_eq!(hint.variant, TextureVariant::DashLeft);

    for _ in 0..60 {
        state.mutate(&[input(0.0, 0.0, false)], FRAME_MS);
    }
    let player = &state.players[0];
    assert_eq!(player.vel.x, 0.0);
    assert!(!player.is_dashing());
    assert_eq!(
        state.render_hints()[0].variant,
        TextureVariant::IdleLeft,
        "Stopped player idles facing left"
    );
}
