//! Axis-aligned bounding boxes and their screen-space projection.

use cgmath::{Matrix4, Vector2, Vector3, Vector4};

use super::{vec2_max, vec2_min, vec_max, vec_min};

/// Axis-aligned bounding box.
///
/// An empty box has `min = +inf` and `max = -inf`, so enclosing the first point
/// snaps both corners onto it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AABB {
    /// Minimum corner of the bounding box
    pub min: Vector3<f32>,
    /// Maximum corner of the bounding box
    pub max: Vector3<f32>,
}

impl Default for AABB {
    fn default() -> Self {
        Self::empty()
    }
}

impl AABB {
    /// Create a new AABB
    pub fn new(min: Vector3<f32>, max: Vector3<f32>) -> Self {
        Self { min, max }
    }

    /// A box containing nothing
    pub fn empty() -> Self {
        Self {
            min: Vector3::new(f32::INFINITY, f32::INFINITY, f32::INFINITY),
            max: Vector3::new(f32::NEG_INFINITY, f32::NEG_INFINITY, f32::NEG_INFINITY),
        }
    }

    /// Create AABB from a set of vertices
    pub fn from_vertices(vertices: &[[f32; 3]]) -> Self {
        let mut aabb = Self::empty();
        for vertex in vertices {
            aabb.enclose(Vector3::new(vertex[0], vertex[1], vertex[2]));
        }
        aabb
    }

    pub fn is_empty(&self) -> bool {
        self.min.x > self.max.x || self.min.y > self.max.y || self.min.z > self.max.z
    }

    pub fn reset(&mut self) {
        *self = Self::empty();
    }

    /// Grow the box to contain `point`
    pub fn enclose(&mut self, point: Vector3<f32>) {
        self.min = vec_min(self.min, point);
        self.max = vec_max(self.max, point);
    }

    pub fn center(&self) -> Vector3<f32> {
        (self.min + self.max) * 0.5
    }

    /// The 8 corners, in a fixed order:
    /// `---, +--, -+-, --+, ++-, -++, +-+, +++` (sign per x, y, z; `-` = min).
    pub fn corners(&self) -> [Vector3<f32>; 8] {
        let (min, max) = (self.min, self.max);
        [
            Vector3::new(min.x, min.y, min.z),
            Vector3::new(max.x, min.y, min.z),
            Vector3::new(min.x, max.y, min.z),
            Vector3::new(min.x, min.y, max.z),
            Vector3::new(max.x, max.y, min.z),
            Vector3::new(min.x, max.y, max.z),
            Vector3::new(max.x, min.y, max.z),
            Vector3::new(max.x, max.y, max.z),
        ]
    }

    /// World-space box around the 8 corners under `matrix`
    pub fn transformed(&self, matrix: &Matrix4<f32>) -> Self {
        if self.is_empty() {
            return *self;
        }
        let mut out = Self::empty();
        for corner in self.corners() {
            let p = matrix * Vector4::new(corner.x, corner.y, corner.z, 1.0);
            out.enclose(Vector3::new(p.x, p.y, p.z));
        }
        out
    }

    /// Screen-space rectangle covered by the box under `transform`.
    ///
    /// A corner is behind the camera when its transformed `z` is negative.
    /// No clipping is performed:
    /// - all corners behind: `(0, 0)-(0, 0)`
    /// - some corners behind: the whole screen, `(-1, -1)-(1, 1)`
    /// - otherwise the tight rectangle around the projected corners
    pub fn screen_rect(&self, transform: &Matrix4<f32>) -> (Vector2<f32>, Vector2<f32>) {
        let mut min_out = Vector2::new(f32::INFINITY, f32::INFINITY);
        let mut max_out = Vector2::new(f32::NEG_INFINITY, f32::NEG_INFINITY);
        let mut any_behind = false;
        let mut all_behind = true;

        for corner in self.corners() {
            let p = transform * Vector4::new(corner.x, corner.y, corner.z, 1.0);
            if p.z < 0.0 {
                any_behind = true;
            } else {
                all_behind = false;
            }

            let projected = if p.w != 0.0 {
                Vector2::new(p.x / p.w, p.y / p.w)
            } else {
                Vector2::new(p.x, p.y)
            };
            min_out = vec2_min(min_out, projected);
            max_out = vec2_max(max_out, projected);
        }

        if all_behind {
            (Vector2::new(0.0, 0.0), Vector2::new(0.0, 0.0))
        } else if any_behind {
            (Vector2::new(-1.0, -1.0), Vector2::new(1.0, 1.0))
        } else {
            (min_out, max_out)
        }
    }
}

/// Screen-space rectangle of `aabb` under `view_proj`, for outline overlays
pub fn project_bounds(aabb: &AABB, view_proj: &Matrix4<f32>) -> (Vector2<f32>, Vector2<f32>) {
    aabb.screen_rect(view_proj)
}
