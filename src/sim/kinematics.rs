//! Player jump arc
//!
//! One upward impulse, then constant per-frame gravity until ground contact.
//! Integration is symplectic Euler per frame and is not scaled by elapsed time.

use super::state::{GameEvent, GameObserver, GameState, Player};
use crate::consts::GROUND_Y;

/// Start a jump if the game is live and the player is grounded
pub fn try_start_jump(
    state: &mut GameState,
    player: &mut Player,
    observer: &mut dyn GameObserver,
) -> bool {
    if state.is_paused || state.game_over || state.is_jumping {
        return false;
    }
    state.is_jumping = true;
    player.vel_y = state.jump_power;
    observer.on_event(GameEvent::Jumped);
    true
}

/// Advance the jump arc by one frame (no-op while grounded)
pub fn advance(state: &mut GameState, player: &mut Player) {
    if !state.is_jumping {
        return;
    }

    player.pos.y += player.vel_y;
    player.vel_y += state.gravity;

    if player.pos.y <= GROUND_Y {
        player.pos.y = GROUND_Y;
        player.vel_y = 0.0;
        state.is_jumping = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_jump_sets_velocity() {
        let mut state = GameState::default();
        let mut player = Player::default();
        let mut events = Vec::new();

        assert!(try_start_jump(&mut state, &mut player, &mut events));
        assert!(state.is_jumping);
        assert_eq!(player.vel_y, state.jump_power);
        assert_eq!(events, vec![GameEvent::Jumped]);
    }

    #[test]
    fn test_jump_rejected_mid_air_paused_or_over() {
        let mut player = Player::default();

        let mut state = GameState::default();
        assert!(try_start_jump(&mut state, &mut player, &mut ()));
        player.vel_y = 0.05;
        assert!(!try_start_jump(&mut state, &mut player, &mut ()));
        assert_eq!(player.vel_y, 0.05);

        let mut state = GameState {
            is_paused: true,
            ..Default::default()
        };
        assert!(!try_start_jump(&mut state, &mut player, &mut ()));
        assert!(!state.is_jumping);

        let mut state = GameState {
            game_over: true,
            ..Default::default()
        };
        assert!(!try_start_jump(&mut state, &mut player, &mut ()));
        assert!(!state.is_jumping);
    }

    #[test]
    fn test_advance_grounded_is_noop() {
        let mut state = GameState::default();
        let mut player = Player::default();
        advance(&mut state, &mut player);
        assert_eq!(player, Player::default());
    }

    #[test]
    fn test_first_step_rises_by_jump_power() {
        let mut state = GameState::default();
        let mut player = Player::default();
        try_start_jump(&mut state, &mut player, &mut ());

        advance(&mut state, &mut player);
        assert!((player.pos.y - (GROUND_Y + 0.2)).abs() < 1e-6);
        assert!((player.vel_y - (0.2 - 0.01)).abs() < 1e-6);
        assert!(state.is_jumping);
    }

    #[test]
    fn test_full_arc_lands() {
        let mut state = GameState::default();
        let mut player = Player::default();
        try_start_jump(&mut state, &mut player, &mut ());

        let mut apex = GROUND_Y;
        let mut frames = 0;
        while state.is_jumping {
            advance(&mut state, &mut player);
            apex = apex.max(player.pos.y);
            frames += 1;
            assert!(frames < 1000, "jump never landed");
        }

        // 0.2 impulse under -0.01/frame: about 41 frames, apex about 2.5
        assert!((40..=42).contains(&frames), "frames = {frames}");
        assert!(apex > 2.4 && apex < 2.6, "apex = {apex}");
        assert_eq!(player.pos.y, GROUND_Y);
        assert_eq!(player.vel_y, 0.0);
    }

    proptest! {
        #[test]
        fn prop_never_below_ground(
            jump_power in 0.01f32..1.0,
            gravity in -0.5f32..-0.001,
            frames in 1usize..400,
        ) {
            let mut state = GameState { jump_power, gravity, ..Default::default() };
            let mut player = Player::default();
            try_start_jump(&mut state, &mut player, &mut ());

            for _ in 0..frames {
                advance(&mut state, &mut player);
                prop_assert!(player.pos.y >= GROUND_Y);
                if !state.is_jumping {
                    prop_assert_eq!(player.pos.y, GROUND_Y);
                    prop_assert_eq!(player.vel_y, 0.0);
                }
            }
        }
    }
}
