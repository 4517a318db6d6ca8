//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Seeded RNG only
//! - Stable iteration order (layout order for bricks)
//! - No rendering or platform dependencies

pub mod collision;
pub mod shapes;
pub mod state;
pub mod tick;
pub mod vector;

pub use collision::{
    BoundaryOutcome, CollisionResult, ContactKind, ScreenBounds, ball_rect_collision,
    collision_response, paddle_bounce, paddle_bounce_angle, screen_collision, separate,
};
pub use shapes::{AxisAlignedRect, Circle, Triangle};
pub use state::{
    Ball, Brick, BrickGeometry, BrickGroup, BrickHit, BrickKind, GameEvent, GamePhase,
    GameSession, Paddle,
};
pub use tick::{TickInput, tick};
pub use vector::{FALLBACK_UNIT, VectorExt, from_polar};
