//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One tick per frame, no wall-clock time
//! - Stable iteration order (pool insertion order)
//! - No rendering or platform dependencies

pub mod camera;
pub mod collision;
pub mod kinematics;
pub mod pool;
pub mod state;
pub mod tick;

pub use camera::Camera;
pub use collision::is_hit;
pub use pool::ObstaclePool;
pub use state::{Game, GameEvent, GameObserver, GamePhase, GameState, Obstacle, Player};
pub use tick::{TickInput, tick};
