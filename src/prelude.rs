//! # Scene Pick Prelude
//!
//! Commonly used types in one import.
//!
//! ## Usage
//!
//! ```rust
//! use scene_pick::prelude::*;
//! use cgmath::{Vector2, Vector3};
//!
//! let mut editor = Editor::new(800, 600, EditorSettings::default()).unwrap();
//! let cube = AABB::new(Vector3::new(-0.5, -0.5, -0.5), Vector3::new(0.5, 0.5, 0.5));
//! let id = editor.add_object("Cube", Pose::default(), cube);
//!
//! editor.id_buffer_mut().write(400, 300, id);
//! editor.on_mouse_down(Vector2::new(400.0, 300.0));
//! assert_eq!(editor.selected().map(|o| o.id()), Some(id));
//! ```

// Editor context
pub use crate::config::EditorSettings;
pub use crate::editor::Editor;
pub use crate::error::{EditorError, Result};
pub use crate::input::{InputAdapter, InputEvent};

// Camera
pub use crate::gfx::camera::{Camera, CameraManager, OrbitCamera, ViewState};

// Geometry
pub use crate::gfx::geometry::{Line, Plane, AABB};

// Gizmos
pub use crate::gfx::gizmos::{GizmoAction, GizmoAxis, GizmoHandle, Manipulator, ManipulatorState};

// Picking
pub use crate::gfx::picking::{cast_ray, resolve_pick, IdBuffer, IdTarget, ObjectId, PickTarget};

// Scene
pub use crate::gfx::scene::{Pose, Scene, SceneObject};
