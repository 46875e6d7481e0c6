//! # Editor Errors
//!
//! Errors surfaced by the parts of the editor that talk to the GPU or validate
//! window state. Geometric degeneracies and bad picks are not errors: they
//! resolve locally to `None` / [`ObjectId::NONE`](crate::gfx::picking::ObjectId::NONE).

use thiserror::Error;

/// Result type for fallible editor operations
pub type Result<T> = std::result::Result<T, EditorError>;

/// Errors that can occur in the editor core
#[derive(Error, Debug)]
pub enum EditorError {
    /// Window dimensions that cannot back an ID buffer
    #[error("Invalid window size: {width}x{height}")]
    InvalidWindowSize {
        /// Requested width in pixels
        width: u32,
        /// Requested height in pixels
        height: u32,
    },

    /// The ID buffer and the GPU target disagree on size
    #[error("ID buffer is {buffer_width}x{buffer_height} but the target is {target_width}x{target_height}")]
    SizeMismatch {
        /// CPU buffer width
        buffer_width: u32,
        /// CPU buffer height
        buffer_height: u32,
        /// GPU target width
        target_width: u32,
        /// GPU target height
        target_height: u32,
    },

    /// Mapping the readback buffer failed
    #[error("Failed to map ID readback buffer: {0}")]
    BufferMap(#[from] wgpu::BufferAsyncError),

    /// The map callback was dropped before it reported back
    #[error("ID readback was cancelled before completion")]
    ReadbackCancelled,
}
