//! Polar accessors and reflection math on top of `glam::Vec2`
//!
//! glam covers add/sub/scale/dot. Everything the ball physics needs beyond
//! that lives on [`VectorExt`], so there is exactly one reflection formula
//! in the crate.

use glam::Vec2;

use crate::error::{Error, Result};

/// Unit vector substituted when a zero-length vector is normalized.
/// Points down the screen (screen y grows downward).
pub const FALLBACK_UNIT: Vec2 = Vec2::Y;

/// Squared length below which a vector is treated as zero
const DEGENERATE_LENGTH_SQ: f32 = 1e-12;

/// Build a vector from magnitude and direction (radians)
#[inline]
pub fn from_polar(magnitude: f32, direction: f32) -> Vec2 {
    Vec2::new(magnitude * direction.cos(), magnitude * direction.sin())
}

/// Vector2 operations used by the collision resolver and entities
pub trait VectorExt: Sized {
    /// Euclidean length
    fn magnitude(self) -> f32;

    /// Angle from the positive x axis, `atan2(y, x)`
    fn direction(self) -> f32;

    /// Same direction, new length. Fails on a zero vector (no direction).
    fn try_with_magnitude(self, magnitude: f32) -> Result<Vec2>;

    /// Same direction, new length. A zero vector takes [`FALLBACK_UNIT`]'s
    /// direction and logs a warning.
    fn with_magnitude(self, magnitude: f32) -> Vec2;

    /// Same length, new direction
    fn with_direction(self, direction: f32) -> Vec2;

    /// Unit vector, or [`Error::DegenerateVector`] for a zero vector
    fn try_unit(self) -> Result<Vec2>;

    /// Unit vector, or [`FALLBACK_UNIT`] with a logged warning
    fn normalize_or_fallback(self) -> Vec2;

    /// Reflect across a unit normal: `v - 2(v·n)n`
    fn reflect_across(self, normal: Vec2) -> Vec2;

    /// Rotate counter-clockwise by `angle` radians
    fn rotated_by(self, angle: f32) -> Vec2;

    /// Distance between two points
    fn distance_to(self, other: Vec2) -> f32;

    /// `self.direction() - other.direction()`, not wrapped
    fn heading_difference(self, other: Vec2) -> f32;
}

impl VectorExt for Vec2 {
    #[inline]
    fn magnitude(self) -> f32 {
        self.length()
    }

    #[inline]
    fn direction(self) -> f32 {
        self.y.atan2(self.x)
    }

    fn try_with_magnitude(self, magnitude: f32) -> Result<Vec2> {
        if self.length_squared() < DEGENERATE_LENGTH_SQ {
            return Err(Error::DegenerateVector);
        }
        Ok(from_polar(magnitude, self.direction()))
    }

    fn with_magnitude(self, magnitude: f32) -> Vec2 {
        self.try_with_magnitude(magnitude).unwrap_or_else(|_| {
            log::warn!("set magnitude on zero vector, using fallback direction");
            FALLBACK_UNIT * magnitude
        })
    }

    #[inline]
    fn with_direction(self, direction: f32) -> Vec2 {
        from_polar(self.length(), direction)
    }

    fn try_unit(self) -> Result<Vec2> {
        let len_sq = self.length_squared();
        if len_sq < DEGENERATE_LENGTH_SQ || !len_sq.is_finite() {
            return Err(Error::DegenerateVector);
        }
        Ok(self / len_sq.sqrt())
    }

    fn normalize_or_fallback(self) -> Vec2 {
        self.try_unit().unwrap_or_else(|_| {
            log::warn!("normalize of degenerate vector {self}, using fallback {FALLBACK_UNIT}");
            FALLBACK_UNIT
        })
    }

    #[inline]
    fn reflect_across(self, normal: Vec2) -> Vec2 {
        self - 2.0 * self.dot(normal) * normal
    }

    #[inline]
    fn rotated_by(self, angle: f32) -> Vec2 {
        Vec2::from_angle(angle).rotate(self)
    }

    #[inline]
    fn distance_to(self, other: Vec2) -> f32 {
        (self - other).length()
    }

    #[inline]
    fn heading_difference(self, other: Vec2) -> f32 {
        self.direction() - other.direction()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::{FRAC_PI_2, FRAC_PI_4, PI};

    fn approx(a: Vec2, b: Vec2) -> bool {
        (a - b).length() < 1e-4
    }

    #[test]
    fn test_polar_accessors() {
        let v = Vec2::new(3.0, 4.0);
        assert!((v.magnitude() - 5.0).abs() < 1e-6);
        assert!((Vec2::new(0.0, 2.0).direction() - FRAC_PI_2).abs() < 1e-6);
        assert!(approx(from_polar(2.0, PI), Vec2::new(-2.0, 0.0)));
    }

    #[test]
    fn test_with_magnitude_keeps_direction() {
        let v = Vec2::new(3.0, 4.0).with_magnitude(10.0);
        assert!(approx(v, Vec2::new(6.0, 8.0)));
    }

    #[test]
    fn test_with_magnitude_zero_vector() {
        assert!(matches!(
            Vec2::ZERO.try_with_magnitude(3.0),
            Err(Error::DegenerateVector)
        ));
        assert!(approx(Vec2::ZERO.with_magnitude(3.0), FALLBACK_UNIT * 3.0));
    }

    #[test]
    fn test_with_direction_keeps_length() {
        let v = Vec2::new(0.0, 5.0).with_direction(0.0);
        assert!(approx(v, Vec2::new(5.0, 0.0)));
    }

    #[test]
    fn test_normalize_fallback() {
        assert!(Vec2::ZERO.try_unit().is_err());
        assert_eq!(Vec2::ZERO.normalize_or_fallback(), FALLBACK_UNIT);
        assert!(approx(Vec2::new(0.0, -4.0).normalize_or_fallback(), Vec2::new(0.0, -1.0)));
    }

    #[test]
    fn test_reflect_off_floor() {
        // Moving down-right onto a floor whose normal points up
        let v = Vec2::new(2.0, 3.0).reflect_across(Vec2::new(0.0, -1.0));
        assert!(approx(v, Vec2::new(2.0, -3.0)));
    }

    #[test]
    fn test_reflect_45_degree_normal() {
        let n = Vec2::new(1.0, 1.0).normalize();
        let v = Vec2::new(3.0, 4.0).reflect_across(n);
        assert!(approx(v, Vec2::new(-4.0, -3.0)));
        assert!((v.magnitude() - 5.0).abs() < 1e-4);
    }

    #[test]
    fn test_rotate_and_heading() {
        let v = Vec2::X.rotated_by(FRAC_PI_2);
        assert!(approx(v, Vec2::Y));

        let a = from_polar(1.0, FRAC_PI_2);
        let b = from_polar(1.0, FRAC_PI_4);
        assert!((a.heading_difference(b) - FRAC_PI_4).abs() < 1e-5);
    }

    #[test]
    fn test_distance() {
        assert!((Vec2::new(1.0, 1.0).distance_to(Vec2::new(4.0, 5.0)) - 5.0).abs() < 1e-6);
    }
}
