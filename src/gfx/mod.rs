//! # Graphics Module
//!
//! Everything between the window and the scene: cameras, geometry, picking and
//! gizmos.
//!
//! ## Architecture Overview
//!
//! - **Camera System** ([`camera`]) - Orbit camera producing a per-frame [`ViewState`]
//! - **Geometry** ([`geometry`]) - Lines, planes and bounding boxes
//! - **Picking** ([`picking`]) - ID buffer, pick resolution and cursor rays
//! - **Gizmos** ([`gizmos`]) - Transform handles and the drag state machine
//! - **Scene Management** ([`scene`]) - Objects keyed by their pick ID
//!
//! ## Data Flow
//!
//! ```text
//! cursor ──▶ picking::resolve_pick ──▶ gizmos::Manipulator ──▶ scene
//!   │                                      ▲
//!   └──▶ picking::cast_ray ◀── camera ─────┘
//! ```
//!
//! [`ViewState`]: camera::ViewState

pub mod camera;
pub mod geometry;
pub mod gizmos;
pub mod picking;
pub mod scene;

// Re-export commonly used types
pub use camera::orbit_camera::OrbitCamera;
pub use scene::Scene;
