//! # Editor Context
//!
//! [`Editor`] ties one editing session together: the scene, the orbit camera,
//! the CPU copy of the ID buffer and the manipulator. It is passed around by
//! reference; there is no global editor state.
//!
//! A frame is expected to run in this order:
//!
//! 1. feed window events through [`Editor::handle_input`]
//! 2. render the ID pass from [`Editor::id_draw_list`] into an [`IdTarget`]
//! 3. copy the result back with [`Editor::read_ids`]
//!
//! Picks always resolve against the most recent readback.

use cgmath::{Vector2, Vector3};
use log::{debug, info, warn};
use winit::event::MouseButton;

use crate::config::EditorSettings;
use crate::error::Result;
use crate::gfx::{
    camera::{CameraController, CameraManager, OrbitCamera, ViewState},
    geometry::{project_bounds, AABB},
    gizmos::{place_handles, GizmoAction, HandlePlacement, Manipulator},
    picking::{resolve_pick, IdBuffer, IdTarget, IdUniform, ObjectId},
    scene::{Pose, Scene, SceneObject},
};
use crate::input::InputEvent;

pub struct Editor {
    settings: EditorSettings,
    window_size: (u32, u32),
    pub scene: Scene,
    pub camera_manager: CameraManager,
    id_buffer: IdBuffer,
    manipulator: Manipulator,
}

impl Editor {
    pub fn new(width: u32, height: u32, settings: EditorSettings) -> Result<Self> {
        let settings = settings.sanitized();
        let id_buffer = IdBuffer::new(width, height)?;

        let camera = OrbitCamera::new(
            5.0,
            0.4,
            0.2,
            Vector3::new(0.0, 0.0, 0.0),
            width as f32 / height as f32,
        );
        let mut controller = CameraController::new(settings.camera_rotate_speed, settings.camera_zoom_speed);
        controller.set_pan_speed(settings.camera_pan_speed);

        info!("Editor created at {}x{}", width, height);
        Ok(Self {
            settings,
            window_size: (width, height),
            scene: Scene::new(),
            camera_manager: CameraManager::new(camera, controller),
            id_buffer,
            manipulator: Manipulator::new(settings.unproject_depth),
        })
    }

    pub fn settings(&self) -> &EditorSettings {
        &self.settings
    }

    pub fn window_size(&self) -> (u32, u32) {
        self.window_size
    }

    /// Reallocate the ID buffer and update the camera aspect for a new window size
    pub fn resize(&mut self, width: u32, height: u32) -> Result<()> {
        self.id_buffer.resize(width, height)?;
        self.window_size = (width, height);
        self.camera_manager.camera.resize_projection(width, height);
        debug!("Resized to {}x{}", width, height);
        Ok(())
    }

    pub fn view_state(&self) -> ViewState {
        self.camera_manager.view_state()
    }

    pub fn id_buffer(&self) -> &IdBuffer {
        &self.id_buffer
    }

    pub fn id_buffer_mut(&mut self) -> &mut IdBuffer {
        &mut self.id_buffer
    }

    pub fn manipulator(&self) -> &Manipulator {
        &self.manipulator
    }

    /// Copy the last rendered ID pass into the CPU buffer.
    ///
    /// Failures are logged and the previous buffer is kept.
    pub fn read_ids(&mut self, target: &IdTarget, device: &wgpu::Device, queue: &wgpu::Queue) -> bool {
        match target.read_into(device, queue, &mut self.id_buffer) {
            Ok(()) => true,
            Err(err) => {
                warn!("ID readback failed, keeping previous buffer: {err}");
                false
            }
        }
    }

    /// Route an input event to picking/dragging (left button) or the camera.
    ///
    /// Returns true if the event changed anything.
    pub fn handle_input(&mut self, event: &InputEvent) -> bool {
        match *event {
            InputEvent::MouseDown {
                button: MouseButton::Left,
                position,
            } => self.on_mouse_down(position),
            InputEvent::MouseUp {
                button: MouseButton::Left,
            } => {
                let was_dragging = self.manipulator.is_dragging();
                self.on_mouse_up();
                was_dragging
            }
            InputEvent::MouseMove { position } => {
                let moved = self.on_mouse_move(position);
                // The camera still needs the cursor to compute its own deltas
                let camera = self.camera_manager.process_input(event);
                moved || camera
            }
            InputEvent::Resized { width, height } => match self.resize(width, height) {
                Ok(()) => true,
                Err(err) => {
                    warn!("Ignoring resize: {err}");
                    false
                }
            },
            _ => self.camera_manager.process_input(event),
        }
    }

    /// Pick under `cursor`. Returns true if a handle drag started.
    pub fn on_mouse_down(&mut self, cursor: Vector2<f32>) -> bool {
        let clicked = resolve_pick(&self.id_buffer, cursor, self.window_size);
        let view = self.view_state();
        self.manipulator
            .on_mouse_down(clicked, cursor, self.window_size, &view, &self.scene)
    }

    /// Returns true if the selected object moved
    pub fn on_mouse_move(&mut self, cursor: Vector2<f32>) -> bool {
        if !self.manipulator.is_dragging() {
            return false;
        }
        let view = self.view_state();
        self.manipulator
            .on_mouse_move(cursor, self.window_size, &view, &mut self.scene)
    }

    pub fn on_mouse_up(&mut self) {
        self.manipulator.on_mouse_up();
    }

    pub fn selected(&self) -> Option<&SceneObject> {
        self.scene.get(self.manipulator.selected())
    }

    pub fn set_action(&mut self, action: GizmoAction) {
        self.manipulator.set_action(action);
    }

    pub fn select(&mut self, id: ObjectId) {
        self.manipulator.select(id);
    }

    pub fn deselect(&mut self) {
        self.manipulator.deselect();
    }

    /// Clip-space rectangle around the selected object, for the outline overlay
    pub fn selection_outline(&self) -> Option<(Vector2<f32>, Vector2<f32>)> {
        let object = self.selected()?;
        let view = self.view_state();
        Some(project_bounds(object.bounds(), &(view.clip_from_world * object.transform())))
    }

    /// Handles of the active action around the selected object
    pub fn gizmo_handles(&self) -> Option<[HandlePlacement; 3]> {
        let object = self.selected()?;
        Some(place_handles(
            self.manipulator.state().action,
            object.pose.position,
            self.view_state().position,
            &self.settings,
        ))
    }

    /// Per-draw uniforms for the ID pass: visible objects first, then the handles
    pub fn id_draw_list(&self) -> Vec<IdUniform> {
        let mut draws: Vec<IdUniform> = self
            .scene
            .iter()
            .filter(|(_, object)| object.visible)
            .map(|(id, object)| IdUniform::new(object.transform(), id))
            .collect();
        if let Some(handles) = self.gizmo_handles() {
            draws.extend(handles.iter().map(|h| IdUniform::new(h.transform(), h.id())));
        }
        draws
    }

    pub fn add_object(&mut self, name: &str, pose: Pose, bounds: AABB) -> ObjectId {
        self.scene.add_object(name, pose, bounds)
    }

    pub fn remove_object(&mut self, id: ObjectId) -> Option<SceneObject> {
        if self.manipulator.selected() == id {
            self.manipulator.deselect();
        }
        self.scene.remove_object(id)
    }
}
