//! Object identifiers and their flat-color encoding in the ID buffer.

use std::fmt;

use crate::gfx::gizmos::handles::{GizmoAction, GizmoAxis, GizmoHandle};

/// Identifier of something that can be drawn into the ID buffer.
///
/// `0` is reserved for "nothing", IDs `1..=9` are the gizmo handles and
/// everything above belongs to user objects. Only the low 24 bits survive the
/// trip through an RGB pixel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct ObjectId(pub u32);

impl ObjectId {
    pub const NONE: ObjectId = ObjectId(0);
    /// Largest ID representable in an RGB8 pixel
    pub const MAX: ObjectId = ObjectId(0x00FF_FFFF);

    pub fn is_none(self) -> bool {
        self == Self::NONE
    }

    pub fn is_some(self) -> bool {
        self != Self::NONE
    }
}

impl fmt::Display for ObjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Pack an ID into a little-endian RGB triple
pub fn encode_id(id: ObjectId) -> [u8; 3] {
    [
        (id.0 & 0xFF) as u8,
        ((id.0 >> 8) & 0xFF) as u8,
        ((id.0 >> 16) & 0xFF) as u8,
    ]
}

/// Unpack an RGB triple read back from the ID buffer
pub fn decode_id(rgb: [u8; 3]) -> ObjectId {
    ObjectId(rgb[0] as u32 | (rgb[1] as u32) << 8 | (rgb[2] as u32) << 16)
}

/// Flat shading color for the ID pass, normalized for an `Rgba8Unorm` target
pub fn id_color(id: ObjectId) -> [f32; 4] {
    let [r, g, b] = encode_id(id);
    [
        r as f32 / 255.0,
        g as f32 / 255.0,
        b as f32 / 255.0,
        1.0,
    ]
}

/// What a decoded ID refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PickTarget {
    None,
    GizmoHandle {
        action: GizmoAction,
        axis: GizmoAxis,
    },
    UserObject(ObjectId),
}

impl PickTarget {
    pub fn from_id(id: ObjectId) -> Self {
        if id.is_none() {
            return PickTarget::None;
        }
        match GizmoHandle::from_id(id) {
            Some(handle) => PickTarget::GizmoHandle {
                action: handle.action,
                axis: handle.axis,
            },
            None => PickTarget::UserObject(id),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;

    #[test]
    fn test_encode_is_little_endian() {
        assert_eq!(encode_id(ObjectId(0x0A0B0C)), [0x0C, 0x0B, 0x0A]);
        assert_eq!(decode_id([0x0C, 0x0B, 0x0A]), ObjectId(0x0A0B0C));
        assert_eq!(decode_id([0, 0, 0]), ObjectId::NONE);
    }

    #[test]
    fn test_round_trip() {
        for id in [0, 1, 9, 10, 255, 256, 65535, 65536, ObjectId::MAX.0] {
            assert_eq!(decode_id(encode_id(ObjectId(id))), ObjectId(id));
        }

        let mut rng = rand::rng();
        for _ in 0..10_000 {
            let id = ObjectId(rng.random_range(0..=ObjectId::MAX.0));
            assert_eq!(decode_id(encode_id(id)), id);
        }
    }

    #[test]
    fn test_id_color() {
        assert_eq!(id_color(ObjectId::NONE), [0.0, 0.0, 0.0, 1.0]);
        assert_eq!(id_color(ObjectId(255)), [1.0, 0.0, 0.0, 1.0]);
    }

    #[test]
    fn test_pick_target() {
        assert_eq!(PickTarget::from_id(ObjectId::NONE), PickTarget::None);
        assert_eq!(
            PickTarget::from_id(ObjectId(1)),
            PickTarget::GizmoHandle {
                action: GizmoAction::Move,
                axis: GizmoAxis::X
            }
        );
        assert_eq!(
            PickTarget::from_id(ObjectId(9)),
            PickTarget::GizmoHandle {
                action: GizmoAction::Scale,
                axis: GizmoAxis::Z
            }
        );
        assert_eq!(
            PickTarget::from_id(ObjectId(10)),
            PickTarget::UserObject(ObjectId(10))
        );
    }
}
