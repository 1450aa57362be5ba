//! Fixed-size obstacle pool
//!
//! Obstacles are never spawned or despawned. Once one slides past the player
//! it is recycled to the far end of the track and counts as dodged.

use std::ops::Deref;

use serde::{Deserialize, Serialize};

use super::state::{GameEvent, GameObserver, GameState, Obstacle};
use crate::consts::PASS_Z;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ObstaclePool {
    /// Insertion order is iteration order
    obstacles: Vec<Obstacle>,
}

impl ObstaclePool {
    /// `count` obstacles at z = -spacing, -2 * spacing, ...
    pub fn new(count: usize, spacing: f32) -> Self {
        let obstacles = (0..count)
            .map(|i| Obstacle::new(i as u32, -((i + 1) as f32) * spacing))
            .collect();
        Self { obstacles }
    }

    pub fn from_positions(zs: &[f32]) -> Self {
        let obstacles = zs
            .iter()
            .enumerate()
            .map(|(i, &z)| Obstacle::new(i as u32, z))
            .collect();
        Self { obstacles }
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Obstacle> {
        self.obstacles.iter_mut()
    }

    /// Move every obstacle toward the player, recycling (and scoring) the
    /// ones that went past
    pub fn advance_all(&mut self, state: &mut GameState, observer: &mut dyn GameObserver) {
        for obstacle in &mut self.obstacles {
            obstacle.pos.z += state.speed;

            if obstacle.pos.z >= PASS_Z {
                obstacle.recycle();
                state.score += 1;
                log::debug!("Obstacle {} dodged, score {}", obstacle.id, state.score);
                observer.on_event(GameEvent::ScoreChanged { score: state.score });
            }
        }
    }
}

/// Read-only view in pool order
impl Deref for ObstaclePool {
    type Target = [Obstacle];

    fn deref(&self) -> &[Obstacle] {
        &self.obstacles
    }
}
