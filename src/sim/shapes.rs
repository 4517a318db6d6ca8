//! Geometric primitives: axis-aligned rectangles, circles and triangles
//!
//! Screen coordinates: origin top-left, y grows downward.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// An axis-aligned rectangle anchored at its top-left corner
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AxisAlignedRect {
    /// Top-left corner
    pub origin: Vec2,
    pub width: f32,
    pub height: f32,
}

impl AxisAlignedRect {
    pub fn new(origin: Vec2, width: f32, height: f32) -> Result<Self> {
        if !(width > 0.0 && height > 0.0) {
            return Err(Error::InvalidShape(format!(
                "rectangle extent must be positive, got {width}x{height}"
            )));
        }
        Ok(Self {
            origin,
            width,
            height,
        })
    }

    /// Bottom-right corner
    #[inline]
    pub fn corner2(&self) -> Vec2 {
        self.origin + Vec2::new(self.width, self.height)
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        self.origin + Vec2::new(self.width, self.height) * 0.5
    }

    #[inline]
    pub fn size(&self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }

    /// Move so the center sits at `center`
    pub fn set_center(&mut self, center: Vec2) {
        self.origin = center - self.size() * 0.5;
    }

    /// Nearest point in the rectangle (boundary or interior) to `p`.
    ///
    /// Clamps each axis independently, so a point already inside the
    /// rectangle's range on an axis keeps that coordinate.
    #[inline]
    pub fn closest_point(&self, p: Vec2) -> Vec2 {
        p.clamp(self.origin, self.corner2())
    }

    /// Strict interior test (points on the boundary are outside)
    pub fn contains(&self, p: Vec2) -> bool {
        let c2 = self.corner2();
        p.x > self.origin.x && p.x < c2.x && p.y > self.origin.y && p.y < c2.y
    }
}

/// A circle
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Circle {
    pub center: Vec2,
    pub radius: f32,
}

impl Circle {
    pub fn new(center: Vec2, radius: f32) -> Result<Self> {
        if !(radius > 0.0) {
            return Err(Error::InvalidShape(format!(
                "circle radius must be positive, got {radius}"
            )));
        }
        Ok(Self { center, radius })
    }

    /// Inclusive containment (points on the circumference are inside)
    pub fn contains(&self, p: Vec2) -> bool {
        self.center.distance_squared(p) <= self.radius * self.radius
    }
}

/// An equilateral triangle inscribed in a circle of radius `r`, with its
/// first vertex at `angle`. Only used as a direction indicator.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Triangle {
    pub center: Vec2,
    pub r: f32,
    pub angle: f32,
}

impl Triangle {
    pub fn new(center: Vec2, r: f32, angle: f32) -> Self {
        Self { center, r, angle }
    }

    /// The three vertices, tip first
    pub fn points(&self) -> [Vec2; 3] {
        let third = std::f32::consts::TAU / 3.0;
        [0.0, third, -third].map(|offset| {
            let a = self.angle + offset;
            self.center + Vec2::new(a.cos(), a.sin()) * self.r
        })
    }

    /// Point-in-triangle by edge sign test; boundary points are inside
    pub fn contains(&self, p: Vec2) -> bool {
        let [a, b, c] = self.points();
        let d1 = edge_sign(p, a, b);
        let d2 = edge_sign(p, b, c);
        let d3 = edge_sign(p, c, a);

        let has_neg = d1 < 0.0 || d2 < 0.0 || d3 < 0.0;
        let has_pos = d1 > 0.0 || d2 > 0.0 || d3 > 0.0;
        !(has_neg && has_pos)
    }
}

#[inline]
fn edge_sign(p: Vec2, a: Vec2, b: Vec2) -> f32 {
    (p.x - b.x) * (a.y - b.y) - (a.x - b.x) * (p.y - b.y)
}
