use cgmath::{Matrix4, SquareMatrix, Vector3};
use log::warn;

use super::{camera_controller::CameraController, orbit_camera::OrbitCamera};
use crate::input::InputEvent;

#[rustfmt::skip]
pub const OPENGL_TO_WGPU_MATRIX: cgmath::Matrix4<f32> = cgmath::Matrix4::new(
    1.0, 0.0, 0.0, 0.0,
    0.0, 1.0, 0.0, 0.0,
    0.0, 0.0, 0.5, 0.0,
    0.0, 0.0, 0.5, 1.0,
);

pub struct CameraManager {
    pub camera: OrbitCamera,
    pub controller: CameraController,
}

impl CameraManager {
    pub fn new(camera: OrbitCamera, controller: CameraController) -> Self {
        Self { camera, controller }
    }

    /// Feed an input event to the camera controls. Returns true if consumed.
    pub fn process_input(&mut self, event: &InputEvent) -> bool {
        self.controller.process_input(event, &mut self.camera)
    }

    pub fn view_state(&self) -> ViewState {
        self.camera.view_state()
    }
}

pub trait Camera: Sized {
    fn view_state(&self) -> ViewState;
}

/// Snapshot of the camera for one frame.
///
/// `view_proj` and `inverse_view_proj` use the GL clip-space convention that
/// picking unprojects through. `clip_from_world` is the same transform remapped
/// to the wgpu depth range (z in 0..1) and is what gets rendered and projected
/// for overlays.
#[derive(Debug, Clone, Copy)]
pub struct ViewState {
    pub view: Matrix4<f32>,
    pub proj: Matrix4<f32>,
    pub view_proj: Matrix4<f32>,
    pub inverse_view_proj: Matrix4<f32>,
    pub clip_from_world: Matrix4<f32>,
    /// Camera position in world space
    pub position: Vector3<f32>,
    /// Unit view direction
    pub forward: Vector3<f32>,
}

impl ViewState {
    pub fn new(
        view: Matrix4<f32>,
        proj: Matrix4<f32>,
        position: Vector3<f32>,
        forward: Vector3<f32>,
    ) -> Self {
        let view_proj = proj * view;
        let inverse_view_proj = view_proj.invert().unwrap_or_else(|| {
            warn!("View-projection matrix is singular, picking will use identity");
            Matrix4::identity()
        });
        Self {
            view,
            proj,
            view_proj,
            inverse_view_proj,
            clip_from_world: OPENGL_TO_WGPU_MATRIX * view_proj,
            position,
            forward,
        }
    }
}

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable, Debug)]
pub struct CameraUniform {
    /// The eye position of the camera in homogenous coordinates.
    ///
    /// Homogenous coordinates are used to fullfill the 16 byte alignment requirement.
    pub view_position: [f32; 4],

    /// Contains the view projection matrix.
    pub view_proj: [[f32; 4]; 4],
}

impl Default for CameraUniform {
    /// Creates a default [CameraUniform].
    fn default() -> Self {
        Self {
            view_position: [0.0; 4],
            view_proj: Matrix4::identity().into(),
        }
    }
}

impl From<&ViewState> for CameraUniform {
    fn from(view: &ViewState) -> Self {
        Self {
            view_position: [view.position.x, view.position.y, view.position.z, 1.0],
            view_proj: view.clip_from_world.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cgmath::{InnerSpace, Vector4};

    #[test]
    fn test_wgpu_depth_range() {
        let camera = OrbitCamera::looking_at(
            Vector3::new(0.0, 0.0, 5.0),
            Vector3::new(0.0, 0.0, 0.0),
            1.0,
        );
        let view = camera.view_state();

        // A point on the near plane lands at depth 0, the far plane at depth 1
        let near = view.clip_from_world * Vector4::new(0.0, 0.0, 5.0 - camera.znear, 1.0);
        let far = view.clip_from_world * Vector4::new(0.0, 0.0, 5.0 - camera.zfar, 1.0);
        assert!((near.z / near.w).abs() < 1e-4);
        assert!((far.z / far.w - 1.0).abs() < 1e-3);
    }

    #[test]
    fn test_uniform_from_view() {
        let camera = OrbitCamera::looking_at(
            Vector3::new(1.0, 2.0, 3.0),
            Vector3::new(0.0, 0.0, 0.0),
            1.0,
        );
        let view = camera.view_state();
        let uniform = CameraUniform::from(&view);
        assert_eq!(uniform.view_position[3], 1.0);
        assert!((view.forward.magnitude() - 1.0).abs() < 1e-5);
        assert!((uniform.view_position[0] - 1.0).abs() < 1e-4);
    }
}
