//! # GPU ID Target
//!
//! Offscreen render target for the ID pass, plus the blocking readback that
//! copies it into an [`IdBuffer`] once per frame.
//!
//! Every object and gizmo handle is drawn flat-shaded with [`id_color`] into a
//! single-sampled `Rgba8Unorm` texture cleared to black (ID 0). After the pass
//! is submitted, [`IdTarget::read_into`] copies the texture to a mappable
//! buffer, waits for the map, and repacks the padded RGBA rows into the
//! bottom-to-top RGB layout picking reads from.
//!
//! [`id_color`]: super::id::id_color

use log::{debug, warn};

use super::id::{id_color, ObjectId};
use super::id_buffer::{IdBuffer, ID_PIXEL_SIZE};
use crate::error::{EditorError, Result};

/// Color format of the ID texture
pub const ID_TEXTURE_FORMAT: wgpu::TextureFormat = wgpu::TextureFormat::Rgba8Unorm;
/// Depth format used so that nearer IDs win
pub const ID_DEPTH_FORMAT: wgpu::TextureFormat = wgpu::TextureFormat::Depth32Float;

const TEXEL_SIZE: u32 = 4;

/// Per-draw uniform for the flat ID shader
#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct IdUniform {
    pub model: [[f32; 4]; 4],
    pub color: [f32; 4],
}

impl IdUniform {
    pub fn new(model: cgmath::Matrix4<f32>, id: ObjectId) -> Self {
        Self {
            model: model.into(),
            color: id_color(id),
        }
    }
}

/// Row pitch of the readback buffer, padded to wgpu's copy alignment
pub fn padded_bytes_per_row(width: u32) -> u32 {
    let unpadded = width * TEXEL_SIZE;
    let align = wgpu::COPY_BYTES_PER_ROW_ALIGNMENT;
    unpadded.div_ceil(align) * align
}

/// Repack padded top-to-bottom RGBA rows into bottom-to-top RGB rows
pub fn repack_rows(padded: &[u8], width: u32, height: u32, out: &mut [u8]) {
    let pitch = padded_bytes_per_row(width) as usize;
    let (width, height) = (width as usize, height as usize);
    for y in 0..height {
        let src_row = &padded[y * pitch..y * pitch + width * TEXEL_SIZE as usize];
        let dst_start = (height - y - 1) * width * ID_PIXEL_SIZE;
        let dst_row = &mut out[dst_start..dst_start + width * ID_PIXEL_SIZE];
        for (dst, src) in dst_row
            .chunks_exact_mut(ID_PIXEL_SIZE)
            .zip(src_row.chunks_exact(TEXEL_SIZE as usize))
        {
            dst.copy_from_slice(&src[..ID_PIXEL_SIZE]);
        }
    }
}

pub struct IdTarget {
    width: u32,
    height: u32,
    texture: wgpu::Texture,
    view: wgpu::TextureView,
    depth_view: wgpu::TextureView,
    readback: wgpu::Buffer,
}

impl IdTarget {
    pub fn new(device: &wgpu::Device, width: u32, height: u32) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(EditorError::InvalidWindowSize { width, height });
        }

        let size = wgpu::Extent3d {
            width,
            height,
            depth_or_array_layers: 1,
        };

        let texture = device.create_texture(&wgpu::TextureDescriptor {
            label: Some("ID Target"),
            size,
            mip_level_count: 1,
            sample_count: 1,
            dimension: wgpu::TextureDimension::D2,
            format: ID_TEXTURE_FORMAT,
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT | wgpu::TextureUsages::COPY_SRC,
            view_formats: &[],
        });
        let view = texture.create_view(&wgpu::TextureViewDescriptor::default());

        let depth = device.create_texture(&wgpu::TextureDescriptor {
            label: Some("ID Target Depth"),
            size,
            mip_level_count: 1,
            sample_count: 1,
            dimension: wgpu::TextureDimension::D2,
            format: ID_DEPTH_FORMAT,
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            view_formats: &[],
        });
        let depth_view = depth.create_view(&wgpu::TextureViewDescriptor::default());

        let readback = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("ID Readback"),
            size: padded_bytes_per_row(width) as u64 * height as u64,
            usage: wgpu::BufferUsages::COPY_DST | wgpu::BufferUsages::MAP_READ,
            mapped_at_creation: false,
        });

        debug!("Created {}x{} ID target", width, height);

        Ok(Self {
            width,
            height,
            texture,
            view,
            depth_view,
            readback,
        })
    }

    pub fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Recreate the GPU resources for a new window size
    pub fn resize(&mut self, device: &wgpu::Device, width: u32, height: u32) -> Result<()> {
        if (width, height) == self.size() {
            return Ok(());
        }
        *self = Self::new(device, width, height)?;
        Ok(())
    }

    /// Begin the ID pass, clearing to ID 0 and the far plane
    pub fn begin_pass<'a>(&'a self, encoder: &'a mut wgpu::CommandEncoder) -> wgpu::RenderPass<'a> {
        encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
            label: Some("ID Pass"),
            color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                view: &self.view,
                resolve_target: None,
                ops: wgpu::Operations {
                    load: wgpu::LoadOp::Clear(wgpu::Color::BLACK),
                    store: wgpu::StoreOp::Store,
                },
            })],
            depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                view: &self.depth_view,
                depth_ops: Some(wgpu::Operations {
                    load: wgpu::LoadOp::Clear(1.0),
                    store: wgpu::StoreOp::Store,
                }),
                stencil_ops: None,
            }),
            occlusion_query_set: None,
            timestamp_writes: None,
        })
    }

    /// Copy the rendered IDs into `buffer` (blocking).
    ///
    /// On error the buffer is left untouched, so picks keep resolving against
    /// the previous frame.
    pub fn read_into(
        &self,
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        buffer: &mut IdBuffer,
    ) -> Result<()> {
        if buffer.size() != self.size() {
            return Err(EditorError::SizeMismatch {
                buffer_width: buffer.width(),
                buffer_height: buffer.height(),
                target_width: self.width,
                target_height: self.height,
            });
        }

        let mut encoder = device.create_command_encoder(&wgpu::CommandEncoderDescriptor {
            label: Some("ID Readback Encoder"),
        });
        encoder.copy_texture_to_buffer(
            wgpu::TexelCopyTextureInfo {
                texture: &self.texture,
                mip_level: 0,
                origin: wgpu::Origin3d::ZERO,
                aspect: wgpu::TextureAspect::All,
            },
            wgpu::TexelCopyBufferInfo {
                buffer: &self.readback,
                layout: wgpu::TexelCopyBufferLayout {
                    offset: 0,
                    bytes_per_row: Some(padded_bytes_per_row(self.width)),
                    rows_per_image: Some(self.height),
                },
            },
            wgpu::Extent3d {
                width: self.width,
                height: self.height,
                depth_or_array_layers: 1,
            },
        );
        queue.submit(std::iter::once(encoder.finish()));

        let slice = self.readback.slice(..);
        let (tx, rx) = futures::channel::oneshot::channel();
        slice.map_async(wgpu::MapMode::Read, move |result| {
            let _ = tx.send(result);
        });

        if let Err(err) = device.poll(wgpu::PollType::Wait) {
            warn!("Device poll failed during ID readback: {err}");
        }

        match pollster::block_on(rx) {
            Ok(Ok(())) => {
                {
                    let mapped = slice.get_mapped_range();
                    repack_rows(&mapped, self.width, self.height, buffer.pixels_mut());
                }
                self.readback.unmap();
                Ok(())
            }
            Ok(Err(err)) => Err(EditorError::BufferMap(err)),
            Err(_) => Err(EditorError::ReadbackCancelled),
        }
    }
}
