use cgmath::Vector2;
use winit::event::MouseButton;

use super::orbit_camera::OrbitCamera;
use crate::input::InputEvent;

/// Orbit/pan/zoom controls.
///
/// Right drag orbits, middle drag (or shift + right drag) pans and the wheel
/// zooms. The left button is left alone for picking.
pub struct CameraController {
    pub rotate_speed: f32,
    pub zoom_speed: f32,
    pub pan_speed: f32,
    is_orbiting: bool,
    is_panning: bool,
    is_shift_held: bool,
    last_cursor: Option<Vector2<f32>>,
}

impl CameraController {
    pub fn new(rotate_speed: f32, zoom_speed: f32) -> Self {
        Self {
            rotate_speed,
            zoom_speed,
            pan_speed: 0.01,
            is_orbiting: false,
            is_panning: false,
            is_shift_held: false,
            last_cursor: None,
        }
    }

    /// Returns true if the event drove the camera
    pub fn process_input(&mut self, event: &InputEvent, camera: &mut OrbitCamera) -> bool {
        match *event {
            InputEvent::MouseDown { button, position } => {
                self.last_cursor = Some(position);
                match button {
                    MouseButton::Right if self.is_shift_held => self.is_panning = true,
                    MouseButton::Right => self.is_orbiting = true,
                    MouseButton::Middle => self.is_panning = true,
                    _ => return false,
                }
                true
            }
            InputEvent::MouseUp { button } => match button {
                MouseButton::Right | MouseButton::Middle => {
                    let was_active = self.is_active();
                    self.is_orbiting = false;
                    self.is_panning = false;
                    was_active
                }
                _ => false,
            },
            InputEvent::MouseMove { position } => {
                let delta = self
                    .last_cursor
                    .map(|last| position - last)
                    .unwrap_or(Vector2::new(0.0, 0.0));
                self.last_cursor = Some(position);

                if self.is_panning {
                    camera.pan((-delta.x * self.pan_speed, delta.y * self.pan_speed));
                    true
                } else if self.is_orbiting {
                    camera.add_yaw(-delta.x * self.rotate_speed);
                    camera.add_pitch(delta.y * self.rotate_speed);
                    true
                } else {
                    false
                }
            }
            InputEvent::Scroll { delta } => {
                camera.add_distance(-delta * self.zoom_speed);
                true
            }
            InputEvent::Modifiers { shift } => {
                self.is_shift_held = shift;
                false
            }
            InputEvent::Resized { width, height } => {
                camera.resize_projection(width, height);
                false
            }
        }
    }

    pub fn is_active(&self) -> bool {
        self.is_orbiting || self.is_panning
    }

    /// Returns true if currently panning
    pub fn is_panning(&self) -> bool {
        self.is_panning
    }

    /// Returns true if currently rotating
    pub fn is_rotating(&self) -> bool {
        self.is_orbiting
    }

    /// Adjust panning sensitivity
    pub fn set_pan_speed(&mut self, speed: f32) {
        self.pan_speed = speed;
    }
}
