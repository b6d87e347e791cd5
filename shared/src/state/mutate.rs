use super::{GameState, InputSample, PlayerState};

/// Distance below the stage at which a falling player is respawned.
const BLAST_MARGIN: f32 = 200.0;

impl GameState {
    /// Steps every player once, in list order. Player `i` reads `inputs[i]`;
    /// players without a sample get a neutral one.
    pub fn mutate(&mut self, inputs: &[InputSample], elapsed_ms: f32) {
        let platforms = self.platforms.as_slice();
        let neutral = InputSample::neutral();

        for (i, player) in self.players.iter_mut().enumerate() {
            let input = inputs.get(i).unwrap_or(&neutral);
            player.step(input, elapsed_ms, platforms, &self.tuning);
        }

        for i in 0..self.players.len() {
            if self.is_out_of_bounds(&self.players[i]) {
                self.respawn(i);
            }
        }
    }

    pub fn is_out_of_bounds(&self, player: &PlayerState) -> bool {
        player.pos.y > self.height + BLAST_MARGIN
    }

    /// Puts a player back on its spawn point with fresh motion state.
    pub fn respawn(&mut self, index: usize) {
        let Some(spawn_point) = self.spawn_points.get(index % self.spawn_points.len().max(1))
        else {
            return;
        };
        tracing::info!(player = index, "respawn");
        self.players[index] = PlayerState::new(index, spawn_point, &self.tuning);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Tuning;
    use crate::state::{Rect, Scene, SpawnPoint, Vec2};

    fn create_test_state() -> GameState {
        let scene = Scene {
            name: "test".to_string(),
            width: 800.0,
            height: 600.0,
            spawn_points: vec![SpawnPoint { x: 100.0, y: 0.0 }, SpawnPoint { x: 400.0, y: 0.0 }],
            platforms: vec![Rect::new(0.0, 500.0, 800.0, 30.0)],
        };
        GameState::from_scene(&scene, Tuning::default())
    }

    #[test]
    fn test_players_spawn_in_order() {
        let state = create_test_state();
        assert_eq!(state.players.len(), 2);
        assert_eq!(state.players[0].index, 0);
        assert_eq!(state.players[1].pos, Vec2::new(400.0, 0.0));
    }

    #[test]
    fn test_missing_input_is_neutral() {
        let mut state = create_test_state();
        let push_right = InputSample {
            left_stick: Vec2::new(1.0, 0.0),
            ..InputSample::default()
        };

        state.mutate(&[push_right], 16.0);

        assert!(state.players[0].vel.x > 0.0);
        assert_eq!(state.players[1].vel.x, 0.0, "Second player had no input");
    }

    #[test]
    fn test_players_fall_onto_platform() {
        let mut state = create_test_state();
        for _ in 0..200 {
            state.mutate(&[], 16.0);
        }

        for player in &state.players {
            assert!(!player.is_floating(), "Player {} should have landed", player.index);
            assert_eq!(player.bounds(state.tuning.scale).bottom(), 500.0);
            assert_eq!(player.vel.y, 0.0);
        }
    }

    #[test]
    fn test_fall_off_stage_respawns() {
        let mut state = create_test_state();
        state.players[0].pos = Vec2::new(-500.0, 790.0);
        state.players[0].vel = Vec2::new(0.0, 20.0);
        state.players[0].jumps.used = 2;

        state.mutate(&[], 16.0);

        let player = &state.players[0];
        assert_eq!(player.pos, Vec2::new(100.0, 0.0));
        assert_eq!(player.vel, Vec2::ZERO);
        assert_eq!(player.jumps.used, 0);
    }

    #[test]
    fn test_render_hint_per_player() {
        let state = create_test_state();
        let hints = state.render_hints();
        assert_eq!(hints.len(), 2);
        assert_eq!(hints[1].position, state.players[1].pos);
        assert_eq!(hints[0].scale, 2.0);
    }
}
