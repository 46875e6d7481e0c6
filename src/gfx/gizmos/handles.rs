//! # Gizmo Handles
//!
//! The nine transform handles (move/rotate/scale × X/Y/Z), their reserved
//! IDs in the ID buffer, and where they are placed around the selected object.

use cgmath::{Deg, InnerSpace, Matrix4, Vector3};

use crate::config::EditorSettings;
use crate::gfx::picking::id::ObjectId;

/// Number of reserved handle IDs (`1..=HANDLE_COUNT`)
pub const HANDLE_COUNT: u32 = 9;

/// First ID handed out to user objects
pub const FIRST_USER_ID: ObjectId = ObjectId(HANDLE_COUNT + 1);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum GizmoAction {
    #[default]
    Move,
    Rotate,
    Scale,
}

impl GizmoAction {
    pub const ALL: [GizmoAction; 3] = [GizmoAction::Move, GizmoAction::Rotate, GizmoAction::Scale];

    fn index(self) -> u32 {
        match self {
            GizmoAction::Move => 0,
            GizmoAction::Rotate => 1,
            GizmoAction::Scale => 2,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            GizmoAction::Move => "Move",
            GizmoAction::Rotate => "Rotate",
            GizmoAction::Scale => "Scale",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum GizmoAxis {
    #[default]
    X,
    Y,
    Z,
}

impl GizmoAxis {
    pub const ALL: [GizmoAxis; 3] = [GizmoAxis::X, GizmoAxis::Y, GizmoAxis::Z];

    /// Component index, for axis-generic vector access
    pub fn index(self) -> usize {
        match self {
            GizmoAxis::X => 0,
            GizmoAxis::Y => 1,
            GizmoAxis::Z => 2,
        }
    }

    pub fn unit(self) -> Vector3<f32> {
        let mut v = Vector3::new(0.0, 0.0, 0.0);
        v[self.index()] = 1.0;
        v
    }

    pub fn color(self) -> [f32; 3] {
        match self {
            GizmoAxis::X => [1.0, 0.2, 0.2],
            GizmoAxis::Y => [0.2, 1.0, 0.2],
            GizmoAxis::Z => [0.2, 0.2, 1.0],
        }
    }

    /// Euler rotation (degrees) turning a +Y-aligned handle mesh onto this axis
    pub fn handle_rotation(self) -> Vector3<f32> {
        match self {
            GizmoAxis::X => Vector3::new(0.0, 0.0, -90.0),
            GizmoAxis::Y => Vector3::new(0.0, 0.0, 0.0),
            GizmoAxis::Z => Vector3::new(90.0, 0.0, 0.0),
        }
    }
}

/// One transform handle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GizmoHandle {
    pub action: GizmoAction,
    pub axis: GizmoAxis,
}

impl GizmoHandle {
    pub fn new(action: GizmoAction, axis: GizmoAxis) -> Self {
        Self { action, axis }
    }

    /// Reserved ID: move X/Y/Z = 1..3, rotate = 4..6, scale = 7..9
    pub fn id(self) -> ObjectId {
        ObjectId(1 + self.action.index() * 3 + self.axis.index() as u32)
    }

    pub fn from_id(id: ObjectId) -> Option<Self> {
        if id.0 == 0 || id.0 > HANDLE_COUNT {
            return None;
        }
        let n = id.0 - 1;
        Some(Self {
            action: GizmoAction::ALL[(n / 3) as usize],
            axis: GizmoAxis::ALL[(n % 3) as usize],
        })
    }

    pub fn all() -> impl Iterator<Item = GizmoHandle> {
        GizmoAction::ALL
            .into_iter()
            .flat_map(|action| GizmoAxis::ALL.into_iter().map(move |axis| Self::new(action, axis)))
    }
}

/// A handle positioned for the current frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HandlePlacement {
    pub handle: GizmoHandle,
    pub position: Vector3<f32>,
    /// Uniform scale
    pub scale: f32,
    /// Euler rotation in degrees
    pub rotation: Vector3<f32>,
    pub color: [f32; 3],
}

impl HandlePlacement {
    pub fn id(&self) -> ObjectId {
        self.handle.id()
    }

    pub fn transform(&self) -> Matrix4<f32> {
        Matrix4::from_translation(self.position)
            * Matrix4::from_angle_x(Deg(self.rotation.x))
            * Matrix4::from_angle_y(Deg(self.rotation.y))
            * Matrix4::from_angle_z(Deg(self.rotation.z))
            * Matrix4::from_scale(self.scale)
    }
}

/// Handle scale so gizmos keep a constant on-screen size
pub fn gizmo_scale(object_position: Vector3<f32>, camera_position: Vector3<f32>, divisor: f32) -> f32 {
    (camera_position - object_position).magnitude() / divisor
}

/// Place the three handles of `action` around an object.
///
/// Move and scale handles sit slightly off the object origin along their
/// axis; rotation rings are centered on it.
pub fn place_handles(
    action: GizmoAction,
    object_position: Vector3<f32>,
    camera_position: Vector3<f32>,
    settings: &EditorSettings,
) -> [HandlePlacement; 3] {
    let scale = gizmo_scale(object_position, camera_position, settings.gizmo_distance_divisor);
    GizmoAxis::ALL.map(|axis| {
        let offset = match action {
            GizmoAction::Move | GizmoAction::Scale => axis.unit() * (settings.gizmo_offset * scale),
            GizmoAction::Rotate => Vector3::new(0.0, 0.0, 0.0),
        };
        HandlePlacement {
            handle: GizmoHandle::new(action, axis),
            position: object_position + offset,
            scale,
            rotation: axis.handle_rotation(),
            color: axis.color(),
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_handle_ids_are_reserved_range() {
        let ids: Vec<u32> = GizmoHandle::all().map(|h| h.id().0).collect();
        assert_eq!(ids, (1..=9).collect::<Vec<_>>());
        assert_eq!(FIRST_USER_ID, ObjectId(10));
    }

    #[test]
    fn test_id_round_trip() {
        for handle in GizmoHandle::all() {
            assert_eq!(GizmoHandle::from_id(handle.id()), Some(handle));
        }
        assert_eq!(GizmoHandle::from_id(ObjectId(0)), None);
        assert_eq!(GizmoHandle::from_id(ObjectId(10)), None);
        assert_eq!(
            GizmoHandle::from_id(ObjectId(5)),
            Some(GizmoHandle::new(GizmoAction::Rotate, GizmoAxis::Y))
        );
    }

    #[test]
    fn test_axis_units() {
        assert_eq!(GizmoAxis::X.unit(), Vector3::new(1.0, 0.0, 0.0));
        assert_eq!(GizmoAxis::Y.unit(), Vector3::new(0.0, 1.0, 0.0));
        assert_eq!(GizmoAxis::Z.unit(), Vector3::new(0.0, 0.0, 1.0));
    }

    #[test]
    fn test_move_handles_are_offset() {
        let settings = EditorSettings::default();
        let object = Vector3::new(1.0, 0.0, 0.0);
        let camera = Vector3::new(1.0, 0.0, 10.0);
        let handles = place_handles(GizmoAction::Move, object, camera, &settings);

        // Distance 10 / divisor 5 = scale 2, offset 0.15 * 2
        for placement in &handles {
            assert!((placement.scale - 2.0).abs() < 1e-6);
        }
        assert!((handles[0].position - Vector3::new(1.3, 0.0, 0.0)).magnitude() < 1e-5);
        assert!((handles[1].position - Vector3::new(1.0, 0.3, 0.0)).magnitude() < 1e-5);
        assert!((handles[2].position - Vector3::new(1.0, 0.0, 0.3)).magnitude() < 1e-5);
        assert_eq!(handles[0].id(), ObjectId(1));
    }

    #[test]
    fn test_rotate_handles_are_centered() {
        let settings = EditorSettings::default();
        let object = Vector3::new(0.0, 2.0, 0.0);
        let handles = place_handles(GizmoAction::Rotate, object, Vector3::new(0.0, 2.0, 5.0), &settings);
        for placement in &handles {
            assert_eq!(placement.position, object);
            assert_eq!(placement.handle.action, GizmoAction::Rotate);
        }
        assert_eq!(handles[2].id(), ObjectId(6));
    }

    #[test]
    fn test_handle_transform_orients_mesh() {
        let settings = EditorSettings::default();
        let handles = place_handles(
            GizmoAction::Scale,
            Vector3::new(0.0, 0.0, 0.0),
            Vector3::new(0.0, 0.0, 5.0),
            &settings,
        );
        // The X handle's local +Y should point along world +X
        let tip = handles[0].transform() * cgmath::Vector4::new(0.0, 1.0, 0.0, 0.0);
        assert!((tip.x - 1.0).abs() < 1e-5);
        assert!(tip.y.abs() < 1e-5);
    }
}
