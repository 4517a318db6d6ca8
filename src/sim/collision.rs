//! Collision detection and response for a circular ball
//!
//! The tricky part of the game: finding the nearest point of an
//! axis-aligned brick or paddle to the ball, deciding which kind of contact
//! it is (face, exact diagonal, genuine corner), then reflecting the
//! velocity and pushing the ball back out of the rectangle.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::shapes::AxisAlignedRect;
use super::vector::{VectorExt, from_polar};

/// How the ball touched a rectangle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ContactKind {
    /// Nearest point lies straight above/below the ball center: a top or
    /// bottom face. Flips the vertical velocity.
    HorizontalFace,
    /// Nearest point lies straight left/right of the ball center: a side
    /// face. Flips the horizontal velocity.
    VerticalFace,
    /// Corner hit at exactly 45°: both velocity axes flip.
    Diagonal,
    /// Corner hit at any other angle: reflect about the contact normal.
    Corner,
    /// Ball center is inside the rectangle; resolved against the
    /// shallowest face.
    Embedded,
}

/// Result of a collision check
#[derive(Debug, Clone)]
pub struct CollisionResult {
    /// Whether a collision occurred
    pub hit: bool,
    /// Nearest point of the rectangle to the ball center
    pub point: Vec2,
    /// Unit contact normal pointing from the rectangle toward the ball
    pub normal: Vec2,
    /// Overlap depth (for position correction)
    pub penetration: f32,
    /// Squared distance from the ball center to `point`
    pub distance_sq: f32,
    /// Contact category, `None` on a miss
    pub kind: Option<ContactKind>,
}

impl CollisionResult {
    pub fn miss(point: Vec2, distance_sq: f32) -> Self {
        Self {
            hit: false,
            point,
            normal: Vec2::ZERO,
            penetration: 0.0,
            distance_sq,
            kind: None,
        }
    }
}

/// Check collision between a ball and an axis-aligned rectangle
///
/// A ball exactly tangent to the rectangle (`|d| == r`) does not collide.
/// `epsilon` is the tolerance used to classify the contact; exact float
/// equality misses face contacts after a few ticks of drift.
pub fn ball_rect_collision(
    center: Vec2,
    radius: f32,
    rect: &AxisAlignedRect,
    epsilon: f32,
) -> CollisionResult {
    let nearest = rect.closest_point(center);
    let d = nearest - center;
    let distance_sq = d.length_squared();

    if distance_sq >= radius * radius {
        return CollisionResult::miss(nearest, distance_sq);
    }

    if distance_sq <= epsilon * epsilon {
        return embedded_contact(center, radius, rect, distance_sq);
    }

    let distance = distance_sq.sqrt();
    let (ax, ay) = (d.x.abs(), d.y.abs());

    let (kind, normal) = if (ax - ay).abs() <= epsilon {
        (ContactKind::Diagonal, -d / distance)
    } else if ax <= epsilon {
        (ContactKind::HorizontalFace, Vec2::new(0.0, -d.y.signum()))
    } else if ay <= epsilon {
        (ContactKind::VerticalFace, Vec2::new(-d.x.signum(), 0.0))
    } else {
        (ContactKind::Corner, (-d).normalize_or_fallback())
    };

    CollisionResult {
        hit: true,
        point: nearest,
        normal,
        penetration: radius - distance,
        distance_sq,
        kind: Some(kind),
    }
}

/// Ball center inside (or on the edge of) the rectangle: push out through
/// the face with the least overlap
fn embedded_contact(
    center: Vec2,
    radius: f32,
    rect: &AxisAlignedRect,
    distance_sq: f32,
) -> CollisionResult {
    let c2 = rect.corner2();
    let faces = [
        (center.x - rect.origin.x, Vec2::NEG_X),
        (c2.x - center.x, Vec2::X),
        (center.y - rect.origin.y, Vec2::NEG_Y),
        (c2.y - center.y, Vec2::Y),
    ];

    let (depth, normal) = faces
        .into_iter()
        .min_by(|a, b| a.0.total_cmp(&b.0))
        .unwrap_or((0.0, Vec2::NEG_Y));

    CollisionResult {
        hit: true,
        point: center - normal * depth,
        normal,
        penetration: depth + radius,
        distance_sq,
        kind: Some(ContactKind::Embedded),
    }
}

/// Velocity after a contact
///
/// Face contacts flip one axis, an exact diagonal flips both, a genuine
/// corner reflects about the contact normal.
pub fn collision_response(velocity: Vec2, contact: &CollisionResult) -> Vec2 {
    match contact.kind {
        None => velocity,
        Some(ContactKind::HorizontalFace) => Vec2::new(velocity.x, -velocity.y),
        Some(ContactKind::VerticalFace) => Vec2::new(-velocity.x, velocity.y),
        Some(ContactKind::Diagonal) => -velocity,
        Some(ContactKind::Corner) => velocity.reflect_across(contact.normal),
        Some(ContactKind::Embedded) => {
            if contact.normal.x != 0.0 {
                Vec2::new(-velocity.x, velocity.y)
            } else {
                Vec2::new(velocity.x, -velocity.y)
            }
        }
    }
}

/// Ball position pushed out along the contact normal so it no longer
/// overlaps the rectangle
#[inline]
pub fn separate(position: Vec2, contact: &CollisionResult) -> Vec2 {
    if contact.hit {
        position + contact.normal * contact.penetration
    } else {
        position
    }
}

/// Rebound angle off the paddle
///
/// The ball's horizontal offset across the paddle maps linearly onto
/// `[min_angle, max_angle]` (radians, screen space, so negative angles
/// point up). Offsets past either end clamp to the end angle.
pub fn paddle_bounce_angle(
    ball_x: f32,
    paddle: &AxisAlignedRect,
    min_angle: f32,
    max_angle: f32,
) -> f32 {
    let t = ((ball_x - paddle.origin.x) / paddle.width).clamp(0.0, 1.0);
    min_angle + t * (max_angle - min_angle)
}

/// Velocity after a paddle hit: same speed, direction chosen by where the
/// ball struck the paddle
pub fn paddle_bounce(
    ball_x: f32,
    velocity: Vec2,
    paddle: &AxisAlignedRect,
    min_angle: f32,
    max_angle: f32,
) -> Vec2 {
    let angle = paddle_bounce_angle(ball_x, paddle, min_angle, max_angle);
    from_polar(velocity.magnitude(), angle)
}

/// Playfield edges. `top` sits below the HUD.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScreenBounds {
    pub left: f32,
    pub right: f32,
    pub top: f32,
    pub bottom: f32,
}

/// What the screen edges did to the ball this tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BoundaryOutcome {
    /// Bounced off the left or right edge
    pub wall: bool,
    /// Bounced off the HUD boundary
    pub ceiling: bool,
    /// Fell past the bottom edge
    pub missed: bool,
}

/// Bounce the ball off the side and top edges
///
/// Uses the projected next position (`position + velocity * dt`) so the
/// flip happens before the ball leaves the playfield. A ball whose top edge
/// is already below `bounds.bottom` is reported as missed and left alone;
/// the caller respawns it.
pub fn screen_collision(
    position: &mut Vec2,
    velocity: &mut Vec2,
    radius: f32,
    bounds: &ScreenBounds,
    dt: f32,
) -> BoundaryOutcome {
    let mut outcome = BoundaryOutcome::default();

    if position.y - radius > bounds.bottom {
        outcome.missed = true;
        return outcome;
    }

    let next = *position + *velocity * dt;

    if next.x - radius <= bounds.left || next.x + radius >= bounds.right {
        velocity.x = -velocity.x;
        position.x = position
            .x
            .clamp(bounds.left + radius, (bounds.right - radius).max(bounds.left + radius));
        outcome.wall = true;
    }

    if next.y - radius <= bounds.top {
        velocity.y = -velocity.y;
        position.y = position.y.max(bounds.top + radius);
        outcome.ceiling = true;
    }

    outcome
}
