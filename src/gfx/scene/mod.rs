//! # Scene Management Module
//!
//! The scene store the editor manipulates: user-placed objects with a pose and
//! object-space bounds, keyed by the [`ObjectId`] they are drawn with in the
//! ID buffer.
//!
//! ## Key Components
//!
//! - [`Scene`] - Object container handing out monotonically increasing IDs
//! - [`SceneObject`] - A named object with a [`Pose`] and bounding box
//! - [`Pose`] - Position, Euler rotation and scale
//!
//! ## Usage
//!
//! ```rust
//! use scene_pick::gfx::scene::{Pose, Scene};
//! use scene_pick::gfx::geometry::AABB;
//! use cgmath::Vector3;
//!
//! let mut scene = Scene::new();
//! let bounds = AABB::new(Vector3::new(-1.0, -1.0, -1.0), Vector3::new(1.0, 1.0, 1.0));
//! let id = scene.add_object("Cube", Pose::default(), bounds);
//! assert!(scene.get(id).is_some());
//! ```
//!
//! [`ObjectId`]: crate::gfx::picking::ObjectId

pub mod object;
pub mod scene;

// Re-export main types
pub use object::{Pose, SceneObject};
pub use scene::Scene;
