use cgmath::{Deg, Matrix4, Vector3};

use crate::gfx::geometry::AABB;
use crate::gfx::picking::id::ObjectId;

/// Position, Euler rotation (degrees) and per-axis scale
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pose {
    pub position: Vector3<f32>,
    pub euler: Vector3<f32>,
    pub scale: Vector3<f32>,
}

impl Default for Pose {
    fn default() -> Self {
        Self {
            position: Vector3::new(0.0, 0.0, 0.0),
            euler: Vector3::new(0.0, 0.0, 0.0),
            scale: Vector3::new(1.0, 1.0, 1.0),
        }
    }
}

impl Pose {
    pub fn at(position: Vector3<f32>) -> Self {
        Self {
            position,
            ..Default::default()
        }
    }

    pub fn rotation_matrix(&self) -> Matrix4<f32> {
        Matrix4::from_angle_x(Deg(self.euler.x))
            * Matrix4::from_angle_y(Deg(self.euler.y))
            * Matrix4::from_angle_z(Deg(self.euler.z))
    }

    /// Model matrix: T * R * S
    pub fn transform(&self) -> Matrix4<f32> {
        let t = Matrix4::from_translation(self.position);
        let s = Matrix4::from_nonuniform_scale(self.scale.x, self.scale.y, self.scale.z);
        t * self.rotation_matrix() * s
    }
}

/// A user-placed object in the scene
#[derive(Debug, Clone)]
pub struct SceneObject {
    id: ObjectId,
    pub name: String,
    pub pose: Pose,
    /// Mesh bounds in object space
    bounds: AABB,
    pub visible: bool,
}

impl SceneObject {
    pub fn new(id: ObjectId, name: impl Into<String>, pose: Pose, bounds: AABB) -> Self {
        Self {
            id,
            name: name.into(),
            pose,
            bounds,
            visible: true,
        }
    }

    pub fn id(&self) -> ObjectId {
        self.id
    }

    pub fn bounds(&self) -> &AABB {
        &self.bounds
    }

    pub fn set_bounds(&mut self, bounds: AABB) {
        self.bounds = bounds;
    }

    pub fn set_translation(&mut self, translation: Vector3<f32>) {
        self.pose.position = translation;
    }

    pub fn transform(&self) -> Matrix4<f32> {
        self.pose.transform()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cgmath::{InnerSpace, Vector4};

    #[test]
    fn test_default_pose_is_identity() {
        use cgmath::SquareMatrix;
        assert_eq!(Pose::default().transform(), Matrix4::identity());
    }

    #[test]
    fn test_transform_order() {
        let pose = Pose {
            position: Vector3::new(1.0, 2.0, 3.0),
            euler: Vector3::new(0.0, 90.0, 0.0),
            scale: Vector3::new(2.0, 1.0, 1.0),
        };
        // Scale first (x -> 2), then rotate +90 about Y (x -> -z), then translate
        let p = pose.transform() * Vector4::new(1.0, 0.0, 0.0, 1.0);
        let p = Vector3::new(p.x, p.y, p.z);
        assert!((p - Vector3::new(1.0, 2.0, 1.0)).magnitude() < 1e-5);
    }
}
