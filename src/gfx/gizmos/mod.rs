//! # Transform Gizmos
//!
//! Handles shown around the selected object and the state machine that turns
//! handle drags into pose edits.
//!
//! ## Key Components
//!
//! - [`GizmoHandle`] - One of the nine move/rotate/scale × X/Y/Z handles, with a reserved pick ID
//! - [`place_handles`] - Positions the active handle set around an object
//! - [`Manipulator`] - Selection and drag state machine
//!
//! ## Usage
//!
//! ```rust
//! use scene_pick::gfx::gizmos::{GizmoAction, GizmoAxis, GizmoHandle};
//! use scene_pick::gfx::picking::ObjectId;
//!
//! let handle = GizmoHandle::new(GizmoAction::Move, GizmoAxis::X);
//! assert_eq!(handle.id(), ObjectId(1));
//! ```

pub mod handles;
pub mod manipulator;

// Re-export main types
pub use handles::{
    gizmo_scale, place_handles, GizmoAction, GizmoAxis, GizmoHandle, HandlePlacement, FIRST_USER_ID,
    HANDLE_COUNT,
};
pub use manipulator::{InteractionState, Manipulator, ManipulatorState};
