//! Trailing camera pose
//!
//! Pure function of the player position; the renderer owns projection.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use super::state::Player;
use crate::consts::CAMERA_OFFSET;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Camera {
    pub pos: Vec3,
    /// Look-at point
    pub target: Vec3,
}

impl Camera {
    pub fn following(player: &Player) -> Self {
        let mut camera = Self {
            pos: Vec3::ZERO,
            target: Vec3::ZERO,
        };
        camera.follow(player);
        camera
    }

    /// Sit behind and above the player along z, looking at it
    pub fn follow(&mut self, player: &Player) {
        self.pos = Vec3::new(CAMERA_OFFSET.x, CAMERA_OFFSET.y, player.pos.z + CAMERA_OFFSET.z);
        self.target = player.pos;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_follow_tracks_player_z_only() {
        let mut player = Player::default();
        player.pos.y = 2.0;
        player.pos.z = -3.0;

        let camera = Camera::following(&player);
        assert_eq!(camera.pos, Vec3::new(0.0, 5.0, 7.0));
        assert_eq!(camera.target, player.pos);
    }
}
