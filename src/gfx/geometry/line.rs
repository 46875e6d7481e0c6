//! Infinite lines (and rays) in world space.

use cgmath::{InnerSpace, Vector3};

use super::EPSILON;

/// An infinite line through `point` along a unit `direction`.
///
/// The direction is normalized once at construction and never again.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Line {
    point: Vector3<f32>,
    direction: Vector3<f32>,
}

/// Closest point of one line to another
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClosestApproach {
    /// Closest point on the line `closest_to_line` was called on
    pub point: Vector3<f32>,
    /// False when the matching point on the other line lies behind its origin
    pub forward: bool,
}

impl Line {
    /// Create a line from a point and a direction.
    ///
    /// The direction must have non-zero length.
    pub fn new(point: Vector3<f32>, direction: Vector3<f32>) -> Self {
        debug_assert!(
            direction.magnitude2() > 0.0,
            "line direction must have non-zero length"
        );
        Self {
            point,
            direction: direction.normalize(),
        }
    }

    /// Like [`Line::new`], but returns `None` for zero-length or non-finite directions
    pub fn try_new(point: Vector3<f32>, direction: Vector3<f32>) -> Option<Self> {
        let length2 = direction.magnitude2();
        if !length2.is_finite() || length2 < EPSILON * EPSILON {
            return None;
        }
        Some(Self {
            point,
            direction: direction / length2.sqrt(),
        })
    }

    pub fn point(&self) -> Vector3<f32> {
        self.point
    }

    pub fn direction(&self) -> Vector3<f32> {
        self.direction
    }

    /// Get the point on the line at parameter t
    pub fn at(&self, t: f32) -> Vector3<f32> {
        self.point + self.direction * t
    }

    /// Project `p` onto the line
    pub fn closest_point(&self, p: Vector3<f32>) -> Vector3<f32> {
        let t = (p - self.point).dot(self.direction);
        self.at(t)
    }

    /// Closest point on this line to `other`.
    ///
    /// Returns `None` when the lines are parallel, since the closest-approach
    /// system has no unique solution there.
    pub fn closest_to_line(&self, other: &Line) -> Option<ClosestApproach> {
        let p0 = self.point - other.point;
        let a = self.direction.dot(other.direction);
        let b = self.direction.dot(p0);
        let c = other.direction.dot(p0);

        let denom = 1.0 - a * a;
        if denom.abs() < EPSILON {
            return None;
        }

        let t0 = (a * c - b) / denom;
        let t1 = (c - a * b) / denom;
        Some(ClosestApproach {
            point: self.at(t0),
            forward: t1 >= 0.0,
        })
    }
}
