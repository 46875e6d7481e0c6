// src/lib.rs
//! Scene Pick
//!
//! Object picking and transform gizmos for a 3D scene editor, built on wgpu and winit.

pub mod config;
pub mod editor;
pub mod error;
pub mod gfx;
pub mod input;
pub mod prelude;

// Re-export main types for convenience
pub use editor::Editor;
pub use error::{EditorError, Result};
