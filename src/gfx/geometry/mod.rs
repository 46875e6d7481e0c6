//! # Geometric Primitives
//!
//! Value types used by picking and gizmo manipulation: infinite lines, planes and
//! axis-aligned bounding boxes. All of them sit on top of `cgmath::Vector3<f32>`
//! and are freely copied.
//!
//! ## Degenerate geometry
//!
//! Intersections that would divide by (almost) zero return `None` instead of a
//! NaN-bearing point. Callers skip the update for that frame.
//!
//! ## Usage
//!
//! ```rust
//! use scene_pick::gfx::geometry::{Line, Plane};
//! use cgmath::Vector3;
//!
//! let ray = Line::new(Vector3::new(0.0, 0.0, 5.0), Vector3::new(0.0, 0.0, -1.0));
//! let plane = Plane::new(Vector3::new(0.0, 0.0, 0.0), Vector3::new(0.0, 0.0, 1.0));
//! let hit = plane.intersect(&ray).unwrap();
//! assert!(hit.z.abs() < 1e-6);
//! ```

pub mod bbox;
pub mod line;
pub mod plane;

pub use bbox::{project_bounds, AABB};
pub use line::{ClosestApproach, Line};
pub use plane::Plane;

use cgmath::{Vector2, Vector3};

/// Tolerance for near-zero denominators in intersection math
pub const EPSILON: f32 = 1e-6;

/// Component-wise minimum of two vectors
pub fn vec_min(a: Vector3<f32>, b: Vector3<f32>) -> Vector3<f32> {
    Vector3::new(a.x.min(b.x), a.y.min(b.y), a.z.min(b.z))
}

/// Component-wise maximum of two vectors
pub fn vec_max(a: Vector3<f32>, b: Vector3<f32>) -> Vector3<f32> {
    Vector3::new(a.x.max(b.x), a.y.max(b.y), a.z.max(b.z))
}

pub(crate) fn vec2_min(a: Vector2<f32>, b: Vector2<f32>) -> Vector2<f32> {
    Vector2::new(a.x.min(b.x), a.y.min(b.y))
}

pub(crate) fn vec2_max(a: Vector2<f32>, b: Vector2<f32>) -> Vector2<f32> {
    Vector2::new(a.x.max(b.x), a.y.max(b.y))
}

/// True when every component is finite
pub fn is_finite(v: Vector3<f32>) -> bool {
    v.x.is_finite() && v.y.is_finite() && v.z.is_finite()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_component_min_max() {
        let a = Vector3::new(1.0, -2.0, 3.0);
        let b = Vector3::new(-1.0, 2.0, 3.5);
        assert_eq!(vec_min(a, b), Vector3::new(-1.0, -2.0, 3.0));
        assert_eq!(vec_max(a, b), Vector3::new(1.0, 2.0, 3.5));
    }

    #[test]
    fn test_is_finite() {
        assert!(is_finite(Vector3::new(0.0, 1.0, -1.0)));
        assert!(!is_finite(Vector3::new(f32::NAN, 0.0, 0.0)));
        assert!(!is_finite(Vector3::new(0.0, f32::INFINITY, 0.0)));
    }
}
