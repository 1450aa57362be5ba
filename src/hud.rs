//! Status display
//!
//! Rebuilds the on-screen texts as soon as the simulation reports a change.
//! The web shell copies them into the DOM once per frame.

use crate::sim::{Game, GameEvent, GameObserver};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Hud {
    pub score_text: String,
    pub life_text: String,
    pub game_over_visible: bool,
    /// Final score shown on the game-over banner
    pub final_score: Option<u32>,
    /// Set whenever a text changed; cleared by [`Hud::take_dirty`]
    dirty: bool,
}

impl Hud {
    pub fn new(game: &Game) -> Self {
        let mut hud = Self::default();
        hud.reset(game);
        hud
    }

    /// Resync with a (new) game, hiding the game-over banner
    pub fn reset(&mut self, game: &Game) {
        self.score_text = format_score(game.state.score);
        self.life_text = format_life(game.state.life);
        self.game_over_visible = game.state.game_over;
        self.final_score = game.state.game_over.then_some(game.state.score);
        self.dirty = true;
    }

    /// Whether anything changed since the last call
    pub fn take_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }
}

impl GameObserver for Hud {
    fn on_event(&mut self, event: GameEvent) {
        match event {
            GameEvent::ScoreChanged { score } => {
                self.score_text = format_score(score);
                self.dirty = true;
            }
            GameEvent::LifeChanged { life } => {
                self.life_text = format_life(life);
                self.dirty = true;
            }
            GameEvent::GameOver { score } => {
                if !self.game_over_visible {
                    self.game_over_visible = true;
                    self.final_score = Some(score);
                    self.dirty = true;
                }
            }
            GameEvent::Jumped => {}
        }
    }
}

pub fn format_score(score: u32) -> String {
    format!("Score: {}", score)
}

pub fn format_life(life: u32) -> String {
    format!("Life: {}", life)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::{ObstaclePool, TickInput, tick};

    #[test]
    fn test_initial_texts() {
        let mut hud = Hud::new(&Game::default());
        assert_eq!(hud.score_text, "Score: 0");
        assert_eq!(hud.life_text, "Life: 3");
        assert!(!hud.game_over_visible);
        assert!(hud.take_dirty());
        assert!(!hud.take_dirty());
    }

    #[test]
    fn test_updates_follow_events() {
        let mut game = Game::default();
        game.obstacles = ObstaclePool::from_positions(&[4.95, -0.1]);
        let mut hud = Hud::new(&game);
        hud.take_dirty();

        tick(&mut game, &TickInput::default(), &mut hud);

        assert_eq!(hud.score_text, "Score: 1");
        assert_eq!(hud.life_text, "Life: 2");
        assert!(hud.take_dirty());
    }

    #[test]
    fn test_game_over_banner_shown_once() {
        let mut hud = Hud::new(&Game::default());
        hud.take_dirty();

        hud.on_event(GameEvent::GameOver { score: 7 });
        assert!(hud.game_over_visible);
        assert_eq!(hud.final_score, Some(7));
        assert!(hud.take_dirty());

        hud.on_event(GameEvent::GameOver { score: 9 });
        assert_eq!(hud.final_score, Some(7));
        assert!(!hud.take_dirty());
    }

    #[test]
    fn test_reset_hides_banner() {
        let mut game = Game::default();
        let mut hud = Hud::new(&game);
        hud.on_event(GameEvent::GameOver { score: 3 });

        game.restart();
        hud.reset(&game);
        assert!(!hud.game_over_visible);
        assert_eq!(hud.final_score, None);
    }
}
