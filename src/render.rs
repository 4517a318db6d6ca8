//! Draw intents
//!
//! The simulation never touches a canvas. Each frame it emits a list of
//! [`DrawCommand`]s in painter's order and the host replays them on
//! whatever 2D surface it has.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::sim::collision::paddle_bounce_angle;
use crate::sim::shapes::Triangle;
use crate::sim::state::{GamePhase, GameSession};

/// 8-bit RGBA color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const WHITE: Color = Color::rgb(255, 255, 255);
    pub const RED: Color = Color::rgb(255, 0, 0);
    pub const GREEN: Color = Color::rgb(30, 255, 0);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub const fn gray(v: u8) -> Self {
        Self::rgb(v, v, v)
    }

    pub const fn with_alpha(self, a: u8) -> Self {
        Self { a, ..self }
    }
}

/// One primitive for the host to draw
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum DrawCommand {
    Clear(Color),
    Rect {
        origin: Vec2,
        size: Vec2,
        fill: Option<Color>,
        stroke: Option<Color>,
    },
    Circle {
        center: Vec2,
        radius: f32,
        fill: Option<Color>,
        stroke: Option<Color>,
    },
    Triangle {
        points: [Vec2; 3],
        fill: Color,
    },
    Line {
        from: Vec2,
        to: Vec2,
        color: Color,
    },
    Text {
        pos: Vec2,
        text: String,
        size: f32,
        color: Color,
    },
}

/// Seconds of travel drawn for the debug velocity line
const DEBUG_VELOCITY_SECONDS: f32 = 0.25;

/// Build the draw list for the current frame.
///
/// Returns `None` while paused if the session is configured to freeze
/// drawing too; the host should keep showing its previous frame.
pub fn frame(session: &GameSession) -> Option<Vec<DrawCommand>> {
    let paused = session.phase == GamePhase::Paused;
    if paused && !session.settings.draw_while_paused {
        return None;
    }

    let settings = &session.settings;
    let mut cmds = Vec::with_capacity(session.bricks.len() + 8);
    cmds.push(DrawCommand::Clear(Color::BLACK));

    for brick in session.bricks.live_bricks() {
        cmds.push(DrawCommand::Rect {
            origin: brick.rect.origin,
            size: brick.rect.size(),
            fill: Some(brick.color),
            stroke: Some(Color::WHITE),
        });
    }

    let ball = &session.ball;
    cmds.push(DrawCommand::Circle {
        center: ball.pos(),
        radius: ball.radius(),
        fill: None,
        stroke: Some(Color::WHITE),
    });

    let paddle = &session.paddle.rect;
    cmds.push(DrawCommand::Rect {
        origin: paddle.origin,
        size: paddle.size(),
        fill: Some(Color::WHITE),
        stroke: None,
    });

    // Aim indicator: where a ball at the current x would rebound
    let aim = paddle_bounce_angle(
        ball.pos().x,
        paddle,
        settings.bounce_min_deg.to_radians(),
        settings.bounce_max_deg.to_radians(),
    );
    let indicator = Triangle::new(
        Vec2::new(paddle.center().x, paddle.origin.y - paddle.height),
        paddle.height * 0.75,
        aim,
    );
    cmds.push(DrawCommand::Triangle {
        points: indicator.points(),
        fill: Color::gray(200),
    });

    cmds.extend(hud(session));

    if settings.debug_draw {
        cmds.push(DrawCommand::Line {
            from: ball.pos(),
            to: ball.pos() + ball.vel * DEBUG_VELOCITY_SECONDS,
            color: Color::GREEN,
        });
        for brick in session.bricks.live_bricks() {
            cmds.push(DrawCommand::Line {
                from: ball.pos(),
                to: brick.rect.closest_point(ball.pos()),
                color: Color::RED.with_alpha(96),
            });
        }
    }

    if paused {
        cmds.push(DrawCommand::Rect {
            origin: Vec2::ZERO,
            size: Vec2::new(settings.screen_width, settings.screen_height),
            fill: Some(Color::BLACK.with_alpha(160)),
            stroke: None,
        });
        cmds.push(DrawCommand::Text {
            pos: Vec2::new(settings.screen_width / 2.0, settings.screen_height / 2.0),
            text: "PAUSED".into(),
            size: 24.0,
            color: Color::WHITE,
        });
    }

    Some(cmds)
}

fn hud(session: &GameSession) -> [DrawCommand; 3] {
    let settings = &session.settings;
    let baseline = settings.hud_height * 0.65;
    let status = match session.phase {
        GamePhase::LevelCleared => "CLEARED".to_string(),
        _ => format!(
            "{}/{}",
            session.bricks.score(),
            session.bricks.destructible_count()
        ),
    };

    [
        DrawCommand::Line {
            from: Vec2::new(0.0, settings.hud_height),
            to: Vec2::new(settings.screen_width, settings.hud_height),
            color: Color::gray(128),
        },
        DrawCommand::Text {
            pos: Vec2::new(8.0, baseline),
            text: format!(
                "L{} {}",
                session.level_index + 1,
                session.current_layout().name
            ),
            size: 12.0,
            color: Color::WHITE,
        },
        DrawCommand::Text {
            pos: Vec2::new(settings.screen_width - 96.0, baseline),
            text: format!("{} {}", session.total_score, status),
            size: 12.0,
            color: Color::WHITE,
        },
    ]
}
