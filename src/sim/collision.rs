//! Player vs obstacle hits
//!
//! The test is an axis-wise distance threshold on z and y, deliberately looser
//! than a real box overlap. Keep it that way: gameplay is tuned around it.

use glam::Vec3;

use super::pool::ObstaclePool;
use super::state::{GameEvent, GameObserver, GameState, Player};
use crate::consts::{COLLISION_RADIUS_Y, COLLISION_RADIUS_Z};

/// Whether an obstacle centred at `obstacle` touches the player at `player`
#[inline]
pub fn is_hit(obstacle: Vec3, player: Vec3) -> bool {
    (obstacle.z - player.z).abs() < COLLISION_RADIUS_Z
        && (obstacle.y - player.y).abs() < COLLISION_RADIUS_Y
}

/// Test every obstacle against the player and apply damage
///
/// A hit costs one life and recycles the obstacle so it cannot hit again next
/// frame. The hit that drains the last life ends the run instead; nothing
/// after it in the same pass is considered.
pub fn resolve(
    state: &mut GameState,
    player: &Player,
    obstacles: &mut ObstaclePool,
    observer: &mut dyn GameObserver,
) {
    for obstacle in obstacles.iter_mut() {
        if state.game_over {
            break;
        }
        if !is_hit(obstacle.pos, player.pos) {
            continue;
        }

        state.life = state.life.saturating_sub(1);
        log::debug!("Hit by obstacle {}, life {}", obstacle.id, state.life);
        observer.on_event(GameEvent::LifeChanged { life: state.life });

        if state.life == 0 {
            state.end_run(observer);
        } else {
            obstacle.recycle();
        }
    }
}
