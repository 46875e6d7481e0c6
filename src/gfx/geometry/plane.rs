//! Infinite planes, used as ray intersection targets.

use cgmath::{InnerSpace, Vector3};

use super::{is_finite, Line, EPSILON};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Plane {
    pub point: Vector3<f32>,
    /// Unit normal
    pub normal: Vector3<f32>,
}

impl Plane {
    pub fn new(point: Vector3<f32>, normal: Vector3<f32>) -> Self {
        Self {
            point,
            normal: normal.normalize(),
        }
    }

    /// Intersect a ray with the plane.
    ///
    /// Returns `None` if the ray runs parallel to the plane or the plane lies
    /// behind the ray origin.
    pub fn intersect(&self, ray: &Line) -> Option<Vector3<f32>> {
        let denom = self.normal.dot(ray.direction());
        if denom.abs() < EPSILON {
            return None;
        }

        let t = (self.point - ray.point()).dot(self.normal) / denom;
        if t < 0.0 || !t.is_finite() {
            return None;
        }

        let hit = ray.at(t);
        is_finite(hit).then_some(hit)
    }
}
