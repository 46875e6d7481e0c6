//! CPU copy of the ID buffer, read once per frame after the ID pass.

use cgmath::Vector2;
use log::warn;

use super::id::{decode_id, encode_id, ObjectId};
use crate::error::{EditorError, Result};

/// Bytes per pixel in the ID buffer
pub const ID_PIXEL_SIZE: usize = 3;

/// RGB8 pixels, rows stored bottom to top.
///
/// The buffer always holds exactly `width * height * 3` bytes. Resizing
/// reallocates and clears it, so picks never run against stale dimensions.
#[derive(Debug, Clone)]
pub struct IdBuffer {
    width: u32,
    height: u32,
    pixels: Vec<u8>,
}

impl IdBuffer {
    pub fn new(width: u32, height: u32) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(EditorError::InvalidWindowSize { width, height });
        }
        Ok(Self {
            width,
            height,
            pixels: vec![0; width as usize * height as usize * ID_PIXEL_SIZE],
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    pub fn pixels_mut(&mut self) -> &mut [u8] {
        &mut self.pixels
    }

    /// Reallocate the backing store for a new window size
    pub fn resize(&mut self, width: u32, height: u32) -> Result<()> {
        if width == 0 || height == 0 {
            return Err(EditorError::InvalidWindowSize { width, height });
        }
        self.width = width;
        self.height = height;
        self.pixels.clear();
        self.pixels
            .resize(width as usize * height as usize * ID_PIXEL_SIZE, 0);
        Ok(())
    }

    /// Zero every pixel (the background ID)
    pub fn clear(&mut self) {
        self.pixels.fill(0);
    }

    /// Byte offset of window pixel `(x, y)`, with `y` measured from the top
    fn offset(&self, x: u32, y: u32) -> Option<usize> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let row = (self.height - y - 1) as usize;
        Some((row * self.width as usize + x as usize) * ID_PIXEL_SIZE)
    }

    /// Write `id` at window pixel `(x, y)`; out-of-range writes are ignored
    pub fn write(&mut self, x: u32, y: u32, id: ObjectId) {
        if let Some(idx) = self.offset(x, y) {
            self.pixels[idx..idx + ID_PIXEL_SIZE].copy_from_slice(&encode_id(id));
        }
    }

    /// Fill a window-space rectangle, clipped to the buffer
    pub fn fill_rect(&mut self, x0: u32, y0: u32, x1: u32, y1: u32, id: ObjectId) {
        for y in y0..y1.min(self.height) {
            for x in x0..x1.min(self.width) {
                self.write(x, y, id);
            }
        }
    }

    /// ID under window pixel `(x, y)`, or `NONE` outside the buffer
    pub fn read(&self, x: u32, y: u32) -> ObjectId {
        match self.offset(x, y) {
            Some(idx) => decode_id([self.pixels[idx], self.pixels[idx + 1], self.pixels[idx + 2]]),
            None => ObjectId::NONE,
        }
    }

    /// ID under a cursor position in window pixels
    pub fn read_cursor(&self, cursor: Vector2<f32>) -> ObjectId {
        if !(cursor.x.is_finite() && cursor.y.is_finite()) || cursor.x < 0.0 || cursor.y < 0.0 {
            return ObjectId::NONE;
        }
        self.read(cursor.x as u32, cursor.y as u32)
    }
}

/// Resolve the ID under `cursor`.
///
/// A buffer whose size does not match the window has not been reallocated
/// since the last resize; such picks resolve to `NONE`.
pub fn resolve_pick(buffer: &IdBuffer, cursor: Vector2<f32>, window_size: (u32, u32)) -> ObjectId {
    if buffer.size() != window_size {
        warn!(
            "Pick against stale ID buffer: buffer {:?}, window {:?}",
            buffer.size(),
            window_size
        );
        return ObjectId::NONE;
    }
    buffer.read_cursor(cursor)
}
