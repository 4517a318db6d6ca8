//! Game settings
//!
//! Loaded from a JSON file on native; every field falls back to the
//! defaults in [`crate::consts`].

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::{Error, Result};
use crate::sim::collision::ScreenBounds;

/// How many bricks the ball may hit in a single tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum CollisionPolicy {
    /// Resolve only the nearest overlapping brick
    #[default]
    NearestOnly,
    /// Resolve every overlapping brick, nearest first
    AllOverlapping,
}

impl CollisionPolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            CollisionPolicy::NearestOnly => "NearestOnly",
            CollisionPolicy::AllOverlapping => "AllOverlapping",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "nearest" | "nearestonly" | "nearest-only" => Some(CollisionPolicy::NearestOnly),
            "all" | "alloverlapping" | "all-overlapping" => Some(CollisionPolicy::AllOverlapping),
            _ => None,
        }
    }
}

/// Game settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Playfield ===
    pub screen_width: f32,
    pub screen_height: f32,
    pub hud_height: f32,

    // === Bricks ===
    pub brick_width: f32,
    pub brick_height: f32,

    // === Ball ===
    pub ball_radius: f32,
    /// Launch speed, pixels/s
    pub ball_speed: f32,
    /// Respawn launch direction (degrees, screen space)
    pub launch_angle_deg: f32,
    /// Spread applied to the launch direction on level load (degrees)
    pub launch_jitter_deg: f32,

    // === Paddle ===
    pub paddle_width: f32,
    pub paddle_height: f32,
    pub paddle_bottom_offset: f32,
    pub paddle_speed: f32,
    pub bounce_min_deg: f32,
    pub bounce_max_deg: f32,

    // === Physics ===
    pub contact_epsilon: f32,
    pub collision_policy: CollisionPolicy,

    // === Session ===
    pub level_clear_delay_ticks: u32,
    /// Seed for launch jitter
    pub seed: u64,
    /// Keep emitting frames while paused
    pub draw_while_paused: bool,
    /// Emit velocity and nearest-point lines
    pub debug_draw: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            screen_width: SCREEN_WIDTH,
            screen_height: SCREEN_HEIGHT,
            hud_height: HUD_HEIGHT,

            brick_width: BRICK_WIDTH,
            brick_height: BRICK_HEIGHT,

            ball_radius: BALL_RADIUS,
            ball_speed: BALL_SPEED,
            launch_angle_deg: BALL_LAUNCH_ANGLE_DEG,
            launch_jitter_deg: BALL_LAUNCH_JITTER_DEG,

            paddle_width: PADDLE_WIDTH,
            paddle_height: PADDLE_HEIGHT,
            paddle_bottom_offset: PADDLE_BOTTOM_OFFSET,
            paddle_speed: PADDLE_SPEED,
            bounce_min_deg: PADDLE_BOUNCE_MIN_DEG,
            bounce_max_deg: PADDLE_BOUNCE_MAX_DEG,

            contact_epsilon: CONTACT_EPSILON,
            collision_policy: CollisionPolicy::NearestOnly,

            level_clear_delay_ticks: LEVEL_CLEAR_DELAY_TICKS,
            seed: 0,
            draw_while_paused: true,
            debug_draw: false,
        }
    }
}

impl Settings {
    /// Parse and validate settings from JSON. Missing fields take defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        let settings: Settings = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Load settings from a JSON file, falling back to defaults on any error
    pub fn load(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        match std::fs::read_to_string(path)
            .map_err(Error::from)
            .and_then(|json| Self::from_json(&json))
        {
            Ok(settings) => {
                log::info!("Loaded settings from {}", path.display());
                settings
            }
            Err(e) => {
                log::warn!("Using default settings ({}: {e})", path.display());
                Self::default()
            }
        }
    }

    /// Reject extents the shapes cannot represent
    pub fn validate(&self) -> Result<()> {
        let positive = [
            ("screen_width", self.screen_width),
            ("screen_height", self.screen_height),
            ("brick_width", self.brick_width),
            ("brick_height", self.brick_height),
            ("ball_radius", self.ball_radius),
            ("paddle_width", self.paddle_width),
            ("paddle_height", self.paddle_height),
        ];
        for (name, value) in positive {
            if !(value > 0.0 && value.is_finite()) {
                return Err(Error::InvalidShape(format!("{name} must be positive, got {value}")));
            }
        }
        if !(0.0..self.screen_height).contains(&self.hud_height) {
            return Err(Error::InvalidShape(format!(
                "hud_height {} outside the screen",
                self.hud_height
            )));
        }
        if self.paddle_width >= self.screen_width {
            return Err(Error::InvalidShape("paddle wider than the screen".into()));
        }
        if !self.ball_speed.is_finite() || !self.contact_epsilon.is_finite() {
            return Err(Error::InvalidShape("non-finite ball speed or epsilon".into()));
        }
        Ok(())
    }

    /// Edges the ball bounces off
    pub fn bounds(&self) -> ScreenBounds {
        ScreenBounds {
            left: 0.0,
            right: self.screen_width,
            top: self.hud_height,
            bottom: self.screen_height,
        }
    }

    /// Fixed velocity used on respawn and for non-finite recovery
    pub fn launch_velocity(&self) -> glam::Vec2 {
        crate::sim::vector::from_polar(self.ball_speed, self.launch_angle_deg.to_radians())
    }

    /// Where the ball (re)appears: centered, halfway down the screen
    pub fn spawn_point(&self) -> glam::Vec2 {
        glam::Vec2::new(self.screen_width / 2.0, self.screen_height / 2.0)
    }

    /// Top edge of the paddle
    pub fn paddle_y(&self) -> f32 {
        self.screen_height - self.paddle_bottom_offset
    }
}
