//! # Object Picking System
//!
//! This module resolves what the user clicked on. It uses a GPU-rendered ID
//! buffer and turns cursor positions into world-space rays for dragging.
//!
//! ## How it works
//!
//! 1. **ID Pass**: Every object and gizmo handle is drawn in a flat color that
//!    encodes its [`ObjectId`] (see [`id_target`])
//! 2. **Readback**: The ID texture is copied into an [`IdBuffer`] once per frame
//! 3. **Resolve**: The pixel under the cursor is decoded into a [`PickTarget`]
//! 4. **Mouse to Ray**: [`cast_ray`] converts the cursor into a world-space line
//!    for gizmo drags
//!
//! ## Usage
//!
//! ```rust
//! use scene_pick::gfx::picking::{resolve_pick, IdBuffer, ObjectId, PickTarget};
//! use cgmath::Vector2;
//!
//! let mut buffer = IdBuffer::new(640, 480).unwrap();
//! buffer.write(320, 240, ObjectId(12));
//!
//! let id = resolve_pick(&buffer, Vector2::new(320.0, 240.0), (640, 480));
//! assert_eq!(PickTarget::from_id(id), PickTarget::UserObject(ObjectId(12)));
//! ```

pub mod id;
pub mod id_buffer;
pub mod id_target;
pub mod ray;

// Re-export main types
pub use id::{decode_id, encode_id, id_color, ObjectId, PickTarget};
pub use id_buffer::{resolve_pick, IdBuffer};
pub use id_target::{IdTarget, IdUniform};
pub use ray::{cast_ray, cursor_to_ndc};
