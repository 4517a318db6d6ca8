//! Fixed timestep simulation tick
//!
//! Core game loop that advances a session deterministically. The host
//! samples input once per frame, calls [`tick`], then draws.

use super::collision;
use super::state::{GameEvent, GamePhase, GameSession};

/// Input commands for a single tick
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Left arrow held
    pub move_left: bool,
    /// Right arrow held
    pub move_right: bool,
    /// Pointer x position; overrides the keys when present
    pub pointer_x: Option<f32>,
    /// Pause toggle (space bar or the pause button)
    pub pause: bool,
    /// Skip to the next level (debug/testing)
    pub skip_level: bool,
}

/// Advance the session by one fixed timestep
pub fn tick(session: &mut GameSession, input: &TickInput, dt: f32) {
    // Handle pause toggle
    if input.pause {
        match session.phase {
            GamePhase::Playing => {
                session.phase = GamePhase::Paused;
                session.events.push(GameEvent::Paused);
                log::info!("Paused");
                return;
            }
            GamePhase::Paused => {
                session.phase = GamePhase::Playing;
                session.events.push(GameEvent::Resumed);
                log::info!("Resumed");
            }
            _ => {}
        }
    }

    match session.phase {
        GamePhase::Paused => return,
        GamePhase::Loading => {
            if let Err(e) = session.load_level() {
                log::error!("Failed to load level {}: {e}", session.level_index + 1);
            }
            return;
        }
        GamePhase::LevelCleared => {
            session.clear_ticks = session.clear_ticks.saturating_sub(1);
            if session.clear_ticks == 0 {
                advance_level(session);
            }
            return;
        }
        GamePhase::Playing => {}
    }

    // Debug: skip to next level
    if input.skip_level {
        log::info!("Skipping level {}", session.level_index + 1);
        advance_level(session);
        return;
    }

    session.time_ticks += 1;

    move_paddle(session, input, dt);
    move_ball(session, dt);

    if session.bricks.is_cleared() {
        session.phase = GamePhase::LevelCleared;
        session.levels_cleared += 1;
        session.clear_ticks = session.settings.level_clear_delay_ticks;
        session.events.push(GameEvent::LevelCleared {
            index: session.level_index,
        });
        log::info!(
            "Level {} '{}' cleared (total score {})",
            session.level_index + 1,
            session.current_layout().name,
            session.total_score
        );
    }
}

/// Queue the next layout in the rotation for loading
fn advance_level(session: &mut GameSession) {
    session.level_index = session.layouts.next_index(session.level_index);
    session.phase = GamePhase::Loading;
}

fn move_paddle(session: &mut GameSession, input: &TickInput, dt: f32) {
    let settings = &session.settings;
    let (left, right) = (0.0, settings.screen_width);

    if let Some(x) = input.pointer_x {
        session.paddle.move_to(x, left, right, dt);
    } else {
        let direction = match (input.move_left, input.move_right) {
            (true, false) => -1.0,
            (false, true) => 1.0,
            _ => 0.0,
        };
        session
            .paddle
            .steer(direction, settings.paddle_speed, left, right, dt);
    }
}

fn move_ball(session: &mut GameSession, dt: f32) {
    let eps = session.settings.contact_epsilon;
    let launch = session.settings.launch_velocity();

    if session.ball.guard_velocity(launch) {
        session.events.push(GameEvent::VelocityReset);
    }
    session.ball.integrate(dt);

    // Paddle: generic push-out, then the player-controlled rebound angle
    // for hits on the top face only
    let ball = &mut session.ball;
    let paddle = &session.paddle.rect;
    let contact = collision::ball_rect_collision(ball.pos(), ball.radius(), paddle, eps);
    if contact.hit {
        ball.shape.center = collision::separate(ball.shape.center, &contact);
        let on_top = contact.normal.y < 0.0 && contact.point.y <= paddle.origin.y + eps;
        if on_top {
            let incoming = if ball.vel.length_squared() > 0.0 {
                ball.vel
            } else {
                launch
            };
            ball.vel = collision::paddle_bounce(
                ball.pos().x,
                incoming,
                paddle,
                session.settings.bounce_min_deg.to_radians(),
                session.settings.bounce_max_deg.to_radians(),
            );
        } else if ball.vel.dot(contact.normal) < 0.0 {
            // Side or underside: plain rebound, and only when still closing in
            ball.vel = collision::collision_response(ball.vel, &contact);
        }
        session.events.push(GameEvent::PaddleHit);
    }

    // Bricks
    let hits = session
        .bricks
        .update(&mut session.ball, session.settings.collision_policy, eps);
    for hit in hits {
        if hit.destroyed {
            session.total_score += 1;
            session.events.push(GameEvent::BrickDestroyed { cell: hit.cell });
        } else {
            session.events.push(GameEvent::ConcreteHit { cell: hit.cell });
        }
    }

    // Screen edges
    let bounds = session.settings.bounds();
    let ball = &mut session.ball;
    let radius = ball.radius();
    let outcome =
        collision::screen_collision(&mut ball.shape.center, &mut ball.vel, radius, &bounds, dt);
    if outcome.wall || outcome.ceiling {
        session.events.push(GameEvent::WallBounce);
    }
    if outcome.missed {
        log::debug!("Ball lost at x={:.1}, respawning", ball.pos().x);
        session.respawn_ball();
        session.events.push(GameEvent::BallLost);
    }
}
