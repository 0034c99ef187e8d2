//! Lunar Lander - a small arcade lander game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (entities, collisions, fixed timestep)
//! - `renderer`: Backend-agnostic draw lists (textured quads, glyph runs)
//! - `input`: Key/event state sampled once per frame
//! - `level`: Static level layout data
//! - `settings`: Physics tuning and runner configuration
//! - `pilot`: Seeded autopilot for headless runs

pub mod error;
pub mod input;
pub mod level;
pub mod pilot;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use error::LanderError;
pub use level::Level;
pub use settings::Settings;

/// Game configuration constants
pub mod consts {
    /// Fixed simulation timestep (~60 Hz)
    pub const FIXED_STEP: f32 = 0.016_666_6;

    /// Constant downward acceleration applied to the lander
    pub const GRAVITY: f32 = -0.02;
    /// Lateral acceleration while a direction key is held
    pub const LATERAL_THRUST: f32 = 0.15;

    /// Lander defaults
    pub const PLAYER_SPEED: f32 = 1.5;
    pub const PLAYER_SIZE: f32 = 0.95;
    pub const PLAYER_START: (f32, f32) = (0.0, 3.25);

    /// Obstacle tiles are unit squares
    pub const TILE_SIZE: f32 = 1.0;

    /// Orthographic view half-extents
    pub const VIEW_HALF_WIDTH: f32 = 5.0;
    pub const VIEW_HALF_HEIGHT: f32 = 3.75;
}
