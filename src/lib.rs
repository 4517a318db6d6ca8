//! Brick Game - a brick-breaker simulation core
//!
//! Core modules:
//! - `sim`: Deterministic simulation (vector math, shapes, collision, game state)
//! - `layouts`: Level layout grids and the built-in level rotation
//! - `render`: Draw intents for whatever surface hosts the game
//! - `settings`: Runtime configuration

pub mod error;
pub mod layouts;
pub mod render;
pub mod settings;
pub mod sim;

pub use error::{Error, Result};
pub use layouts::{LayoutBook, LevelLayout};
pub use settings::{CollisionPolicy, Settings};

/// Game configuration constants
pub mod consts {
    /// Fixed simulation timestep (60 Hz, one tick per display frame)
    pub const SIM_DT: f32 = 1.0 / 60.0;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 4;

    /// Layout grid cell size in pixels
    pub const GRID_SIZE: f32 = 16.0;
    /// Columns in every level layout
    pub const GRID_COLUMNS: usize = 9;

    /// Playfield: nine two-cell bricks wide, 32 cells tall
    pub const SCREEN_WIDTH: f32 = 2.0 * GRID_COLUMNS as f32 * GRID_SIZE;
    pub const SCREEN_HEIGHT: f32 = 2.0 * 16.0 * GRID_SIZE;
    /// Score strip across the top; the ball bounces off its lower edge
    pub const HUD_HEIGHT: f32 = 2.0 * GRID_SIZE;

    /// Brick defaults
    pub const BRICK_WIDTH: f32 = 2.0 * GRID_SIZE;
    pub const BRICK_HEIGHT: f32 = GRID_SIZE;

    /// Ball defaults
    pub const BALL_RADIUS: f32 = 8.0;
    /// Launch speed, pixels/s
    pub const BALL_SPEED: f32 = 240.0;
    /// Launch direction on respawn (degrees, screen space: down and right)
    pub const BALL_LAUNCH_ANGLE_DEG: f32 = 60.0;
    /// Random spread around the launch direction on level load (degrees)
    pub const BALL_LAUNCH_JITTER_DEG: f32 = 20.0;

    /// Paddle defaults
    pub const PADDLE_WIDTH: f32 = 4.0 * GRID_SIZE;
    pub const PADDLE_HEIGHT: f32 = GRID_SIZE / 2.0;
    /// Distance from the bottom of the screen to the paddle's top edge
    pub const PADDLE_BOTTOM_OFFSET: f32 = 3.0 * GRID_SIZE;
    /// Paddle speed under keyboard control, pixels/s
    pub const PADDLE_SPEED: f32 = 360.0;
    /// Rebound angles at the paddle's left and right ends (degrees, upward)
    pub const PADDLE_BOUNCE_MIN_DEG: f32 = -160.0;
    pub const PADDLE_BOUNCE_MAX_DEG: f32 = -20.0;

    /// Tolerance for contact classification
    pub const CONTACT_EPSILON: f32 = 1e-4;
    /// Ticks spent in the cleared state before the next level loads
    pub const LEVEL_CLEAR_DELAY_TICKS: u32 = 60;
}
