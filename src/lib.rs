//! Obstacle Dash - jump over the boxes rolling toward you
//!
//! Core modules:
//! - `sim`: Deterministic per-frame simulation (jump arc, obstacle pool, collisions)
//! - `scene`: Positions handed to the external renderer each frame
//! - `hud`: Status text and game-over banner driven by simulation events
//! - `settings`: Tunable parameters (JSON, LocalStorage on web)
//! - `highscores`: Best runs (JSON file on native, LocalStorage on web)

pub mod highscores;
pub mod hud;
pub mod scene;
pub mod settings;
pub mod sim;

pub use highscores::{HighScores, HighScoresError, Run};
pub use hud::Hud;
pub use scene::SceneSnapshot;
pub use settings::{Settings, SettingsError};

/// Game configuration constants
///
/// All distances are world units, all rates are per frame.
pub mod consts {
    use glam::Vec3;

    /// Resting height of the player's centre
    pub const GROUND_Y: f32 = 0.4;
    /// Centre height of every obstacle box
    pub const OBSTACLE_Y: f32 = 0.5;

    /// Obstacles at or past this z have gone behind the player
    pub const PASS_Z: f32 = 5.0;
    /// Where recycled obstacles are teleported to
    pub const FAR_Z: f32 = -50.0;

    /// Collision half-extents (axis-wise distance thresholds)
    pub const COLLISION_RADIUS_Z: f32 = 0.5;
    pub const COLLISION_RADIUS_Y: f32 = 0.5;

    /// Defaults for the tunable parameters
    pub const DEFAULT_SPEED: f32 = 0.1;
    /// Range the speed keys can move the obstacle speed within
    pub const MIN_SPEED: f32 = 0.02;
    pub const MAX_SPEED: f32 = 1.0;
    /// Speed change per key press
    pub const SPEED_STEP: f32 = 0.02;
    pub const DEFAULT_JUMP_POWER: f32 = 0.2;
    pub const DEFAULT_GRAVITY: f32 = -0.01;
    pub const DEFAULT_LIFE: u32 = 3;
    pub const OBSTACLE_COUNT: usize = 10;
    pub const OBSTACLE_SPACING: f32 = 5.0;

    /// Camera trails the player by this offset, always looking at it
    pub const CAMERA_OFFSET: Vec3 = Vec3::new(0.0, 5.0, 10.0);
}
