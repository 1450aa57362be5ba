//! Game state and core simulation types
//!
//! Everything the per-frame update touches lives here and is owned by [`Game`].

use glam::Vec3;
use serde::{Deserialize, Serialize};

use super::camera::Camera;
use super::pool::ObstaclePool;
use crate::consts::*;
use crate::settings::Settings;

/// Current phase of gameplay, derived from the pause/game-over flags
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Active gameplay
    Running,
    /// Game is paused (control panel toggle)
    Paused,
    /// Run ended, terminal
    GameOver,
}

/// Notifications raised by the simulation, delivered right after the mutation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// A jump was started
    Jumped,
    /// An obstacle went past the player
    ScoreChanged { score: u32 },
    /// The player was hit
    LifeChanged { life: u32 },
    /// Life ran out; raised once per run
    GameOver { score: u32 },
}

/// Receiver for [`GameEvent`]s (status display, game-over banner, audio...)
pub trait GameObserver {
    fn on_event(&mut self, event: GameEvent);
}

impl GameObserver for Vec<GameEvent> {
    fn on_event(&mut self, event: GameEvent) {
        self.push(event);
    }
}

/// Discards every event
impl GameObserver for () {
    fn on_event(&mut self, _event: GameEvent) {}
}

/// Tunables and counters
///
/// The control panel may rewrite `speed`, `is_paused` and `show_axes` between
/// any two ticks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameState {
    /// Obstacle movement (units/frame)
    pub speed: f32,
    /// Initial upward velocity of a jump
    pub jump_power: f32,
    /// Vertical acceleration (units/frame², negative)
    pub gravity: f32,
    pub is_jumping: bool,
    pub life: u32,
    pub score: u32,
    pub game_over: bool,
    pub is_paused: bool,
    /// Axes helper visibility (presentation only)
    pub show_axes: bool,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(&Settings::default())
    }
}

impl GameState {
    pub fn new(settings: &Settings) -> Self {
        Self {
            speed: settings.speed,
            jump_power: settings.jump_power,
            gravity: settings.gravity,
            is_jumping: false,
            life: settings.initial_life,
            score: 0,
            game_over: false,
            is_paused: false,
            show_axes: settings.show_axes,
        }
    }

    pub fn phase(&self) -> GamePhase {
        if self.game_over {
            GamePhase::GameOver
        } else if self.is_paused {
            GamePhase::Paused
        } else {
            GamePhase::Running
        }
    }

    /// Enter the terminal state. Returns false if already over.
    pub fn end_run(&mut self, observer: &mut dyn GameObserver) -> bool {
        if self.game_over {
            return false;
        }
        self.game_over = true;
        log::info!("Game over with score {}", self.score);
        observer.on_event(GameEvent::GameOver { score: self.score });
        true
    }

    /// Step the obstacle speed by `delta`, kept within the panel's range
    pub fn adjust_speed(&mut self, delta: f32) -> f32 {
        self.speed = (self.speed + delta).clamp(MIN_SPEED, MAX_SPEED);
        self.speed
    }
}

/// The player's robot. Only `pos.y` ever moves.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub pos: Vec3,
    pub vel_y: f32,
}

impl Default for Player {
    fn default() -> Self {
        Self {
            pos: Vec3::new(0.0, GROUND_Y, 0.0),
            vel_y: 0.0,
        }
    }
}

impl Player {
    pub fn on_ground(&self) -> bool {
        self.pos.y <= GROUND_Y
    }
}

/// A box sliding toward the player along +z
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Obstacle {
    pub id: u32,
    pub pos: Vec3,
}

impl Obstacle {
    pub fn new(id: u32, z: f32) -> Self {
        Self {
            id,
            pos: Vec3::new(0.0, OBSTACLE_Y, z),
        }
    }

    /// Teleport back to the far end of the track
    pub fn recycle(&mut self) {
        self.pos.z = FAR_Z;
    }
}

/// Complete session: everything the loop owns
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Game {
    pub state: GameState,
    pub player: Player,
    pub obstacles: ObstaclePool,
    pub camera: Camera,
    /// Running ticks simulated so far
    pub time_ticks: u64,
    /// Settings the session was built from (reused by restart)
    settings: Settings,
}

impl Default for Game {
    fn default() -> Self {
        Self::new(Settings::default())
    }
}

impl Game {
    pub fn new(settings: Settings) -> Self {
        let player = Player::default();
        Self {
            state: GameState::new(&settings),
            player,
            obstacles: ObstaclePool::new(settings.obstacle_count, settings.obstacle_spacing),
            camera: Camera::following(&player),
            time_ticks: 0,
            settings,
        }
    }

    /// Fold live panel edits back into the stored settings and return them
    ///
    /// Only the tunables the panel can change mid-run are taken over; the
    /// rest stay as the session was built.
    pub fn sync_settings(&mut self) -> &Settings {
        self.settings.speed = self.state.speed;
        self.settings.show_axes = self.state.show_axes;
        &self.settings
    }

    /// Start a fresh run with the same settings
    pub fn restart(&mut self) {
        log::info!("Restarting after {} ticks (score {})", self.time_ticks, self.state.score);
        *self = Self::new(self.settings.clone());
    }

    pub fn phase(&self) -> GamePhase {
        self.state.phase()
    }

    /// Control-panel style pause switch
    pub fn set_paused(&mut self, paused: bool) {
        self.state.is_paused = paused;
    }
}
