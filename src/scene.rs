//! Renderer handoff
//!
//! After each tick the renderer gets final positions only; meshes,
//! materials and lights are its own business.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::sim::Game;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SceneSnapshot {
    pub player: Vec3,
    /// Obstacle centres in pool order
    pub obstacles: Vec<Vec3>,
    pub camera_pos: Vec3,
    pub camera_target: Vec3,
    pub show_axes: bool,
}

impl SceneSnapshot {
    pub fn capture(game: &Game) -> Self {
        Self {
            player: game.player.pos,
            obstacles: game.obstacles.iter().map(|o| o.pos).collect(),
            camera_pos: game.camera.pos,
            camera_target: game.camera.target,
            show_axes: game.state.show_axes,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::{CAMERA_OFFSET, GROUND_Y, OBSTACLE_COUNT};

    #[test]
    fn test_capture_new_game() {
        let game = Game::default();
        let snapshot = SceneSnapshot::capture(&game);

        assert_eq!(snapshot.player, Vec3::new(0.0, GROUND_Y, 0.0));
        assert_eq!(snapshot.obstacles.len(), OBSTACLE_COUNT);
        assert_eq!(snapshot.obstacles[0].z, -5.0);
        assert_eq!(snapshot.camera_pos, CAMERA_OFFSET);
        assert_eq!(snapshot.camera_target, snapshot.player);
        assert!(snapshot.show_axes);
    }

    #[test]
    fn test_axes_toggle_is_reflected() {
        let mut game = Game::default();
        game.state.show_axes = false;
        assert!(!SceneSnapshot::capture(&game).show_axes);
    }
}
