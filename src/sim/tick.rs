//! Per-frame simulation tick
//!
//! Exactly one call per display refresh. Movement is per frame, not per
//! second, so the game runs faster on faster displays.

use super::collision;
use super::kinematics;
use super::state::{Game, GameObserver, GamePhase};

/// Closest obstacle distance (z, relative to the player) that makes the
/// autopilot jump
const IDLE_TRIGGER_NEAR: f32 = -0.6;
/// Farthest obstacle distance that makes the autopilot jump
const IDLE_TRIGGER_FAR: f32 = -1.2;

/// Input commands for a single tick
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Jump trigger (click/tap/space)
    pub jump: bool,
    /// Pause toggle
    pub pause: bool,
    /// Idle/demo mode - autopilot jumps over incoming obstacles
    pub idle_mode: bool,
}

/// Advance the game by one frame
pub fn tick(game: &mut Game, input: &TickInput, observer: &mut dyn GameObserver) {
    // Handle pause toggle
    if input.pause && !game.state.game_over {
        game.state.is_paused = !game.state.is_paused;
        log::info!("{}", if game.state.is_paused { "Paused" } else { "Resumed" });
    }

    // Don't tick if paused or game over
    match game.phase() {
        GamePhase::Paused | GamePhase::GameOver => return,
        GamePhase::Running => {}
    }

    // Zero life can only come from settings or a control-panel edit
    if game.state.life == 0 {
        game.state.end_run(observer);
        return;
    }

    if input.jump || (input.idle_mode && autopilot_wants_jump(game)) {
        kinematics::try_start_jump(&mut game.state, &mut game.player, observer);
    }

    game.time_ticks += 1;

    kinematics::advance(&mut game.state, &mut game.player);
    game.obstacles.advance_all(&mut game.state, observer);
    collision::resolve(&mut game.state, &game.player, &mut game.obstacles, observer);
    game.camera.follow(&game.player);
}

/// Jump when an obstacle is just about to reach the player
fn autopilot_wants_jump(game: &Game) -> bool {
    if game.state.is_jumping || !game.player.on_ground() {
        return false;
    }
    game.obstacles.iter().any(|o| {
        let dz = o.pos.z - game.player.pos.z;
        (IDLE_TRIGGER_FAR..=IDLE_TRIGGER_NEAR).contains(&dz)
    })
}
