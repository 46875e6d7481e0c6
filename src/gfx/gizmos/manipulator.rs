//! # Manipulation State Machine
//!
//! Turns pick results and cursor motion into pose edits on the selected object.
//!
//! ```text
//!            click user object / background
//!          ┌──────────────────────────────┐
//!          ▼                              │
//!        Idle ── click gizmo handle ──▶ Dragging(action, axis)
//!          ▲                              │
//!          └────────── mouse up ──────────┘
//! ```
//!
//! Selection itself is resolved inside the mouse-down call, so there is no
//! observable in-between state.

use cgmath::{Vector2, Vector3};
use log::debug;

use crate::gfx::camera::ViewState;
use crate::gfx::geometry::{is_finite, Line, Plane};
use crate::gfx::picking::{cast_ray, ObjectId, PickTarget};
use crate::gfx::scene::Scene;

use super::handles::{GizmoAction, GizmoAxis};

/// Observable phase of the manipulator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ManipulatorState {
    #[default]
    Idle,
    Dragging { action: GizmoAction, axis: GizmoAxis },
}

/// Selection and drag bookkeeping for one editor session
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InteractionState {
    /// Which handle set is shown for the selection
    pub action: GizmoAction,
    /// Axis of the handle being dragged
    pub axis: GizmoAxis,
    pub selected: ObjectId,
    pub dragging: bool,
    /// Where on the axis the handle was grabbed, relative to the object position
    pub grab_offset: Vector3<f32>,
}

impl Default for InteractionState {
    fn default() -> Self {
        Self {
            action: GizmoAction::Move,
            axis: GizmoAxis::X,
            selected: ObjectId::NONE,
            dragging: false,
            grab_offset: Vector3::new(0.0, 0.0, 0.0),
        }
    }
}

pub struct Manipulator {
    state: InteractionState,
    unproject_depth: f32,
}

impl Manipulator {
    /// `unproject_depth` is the clip-space depth cursor rays are unprojected at
    pub fn new(unproject_depth: f32) -> Self {
        Self {
            state: InteractionState::default(),
            unproject_depth,
        }
    }

    pub fn state(&self) -> &InteractionState {
        &self.state
    }

    pub fn phase(&self) -> ManipulatorState {
        if self.state.dragging {
            ManipulatorState::Dragging {
                action: self.state.action,
                axis: self.state.axis,
            }
        } else {
            ManipulatorState::Idle
        }
    }

    pub fn selected(&self) -> ObjectId {
        self.state.selected
    }

    pub fn is_dragging(&self) -> bool {
        self.state.dragging
    }

    /// Switch the handle set shown for the selection. Ignored mid-drag.
    pub fn set_action(&mut self, action: GizmoAction) {
        if self.state.dragging {
            debug!("Ignoring action change to {} while dragging", action.label());
            return;
        }
        self.state.action = action;
    }

    pub fn select(&mut self, id: ObjectId) {
        if self.state.dragging {
            return;
        }
        self.state.selected = id;
    }

    /// Drop the selection and reset to defaults
    pub fn deselect(&mut self) {
        self.state = InteractionState::default();
    }

    /// Handle a click that resolved to `clicked`.
    ///
    /// Returns true if a drag started.
    pub fn on_mouse_down(
        &mut self,
        clicked: ObjectId,
        cursor: Vector2<f32>,
        window_size: (u32, u32),
        view: &ViewState,
        scene: &Scene,
    ) -> bool {
        match PickTarget::from_id(clicked) {
            PickTarget::GizmoHandle { action, axis } => {
                let Some(object) = scene.get(self.state.selected) else {
                    debug!("Handle {} clicked with nothing selected", clicked);
                    return false;
                };
                let position = object.pose.position;

                self.state.action = action;
                self.state.axis = axis;
                self.state.dragging = true;
                self.state.grab_offset = self
                    .axis_hit(position, axis, cursor, window_size, view)
                    .map(|hit| hit - position)
                    .unwrap_or(Vector3::new(0.0, 0.0, 0.0));

                debug!(
                    "Dragging {} along {:?}, grab offset {:?}",
                    action.label(),
                    axis,
                    self.state.grab_offset
                );
                true
            }
            PickTarget::UserObject(id) if !scene.contains(id) => {
                debug!("Clicked unknown object {}, clearing selection", id);
                self.state.selected = ObjectId::NONE;
                self.state.dragging = false;
                false
            }
            PickTarget::UserObject(id) => {
                debug!("Selected object {}", id);
                self.state.selected = id;
                self.state.dragging = false;
                false
            }
            PickTarget::None => {
                self.state.selected = ObjectId::NONE;
                self.state.dragging = false;
                false
            }
        }
    }

    /// Apply the drag for this cursor position. Returns true if the pose changed.
    pub fn on_mouse_move(
        &mut self,
        cursor: Vector2<f32>,
        window_size: (u32, u32),
        view: &ViewState,
        scene: &mut Scene,
    ) -> bool {
        if !self.state.dragging {
            return false;
        }
        let Some(object) = scene.get_mut(self.state.selected) else {
            return false;
        };

        match self.state.action {
            GizmoAction::Move => {
                let position = object.pose.position;
                let Some(hit) = self.axis_hit(position, self.state.axis, cursor, window_size, view) else {
                    return false;
                };
                let target = hit - self.state.grab_offset;
                if !is_finite(target) {
                    return false;
                }
                object.set_translation(target);
                true
            }
            // No drag rule for rotation or scale yet; the pose stays as is.
            GizmoAction::Rotate | GizmoAction::Scale => false,
        }
    }

    pub fn on_mouse_up(&mut self) {
        if self.state.dragging {
            debug!("Drag finished on {}", self.state.selected);
        }
        self.state.dragging = false;
    }

    /// Cursor ray against a camera-facing plane through `position`, projected onto the axis
    fn axis_hit(
        &self,
        position: Vector3<f32>,
        axis: GizmoAxis,
        cursor: Vector2<f32>,
        window_size: (u32, u32),
        view: &ViewState,
    ) -> Option<Vector3<f32>> {
        let axis_line = Line::new(position, axis.unit());
        let drag_plane = Plane::new(position, -view.forward);
        let ray = cast_ray(
            cursor,
            window_size,
            &view.inverse_view_proj,
            view.position,
            self.unproject_depth,
        )?;
        let hit = drag_plane.intersect(&ray)?;
        Some(axis_line.closest_point(hit))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gfx::camera::{Camera, OrbitCamera};
    use crate::gfx::geometry::AABB;
    use crate::gfx::scene::Pose;

    const WINDOW: (u32, u32) = (800, 600);

    fn unit_box() -> AABB {
        AABB::new(Vector3::new(-0.5, -0.5, -0.5), Vector3::new(0.5, 0.5, 0.5))
    }

    fn front_view() -> ViewState {
        OrbitCamera::looking_at(
            Vector3::new(0.0, 0.0, 5.0),
            Vector3::new(0.0, 0.0, 0.0),
            WINDOW.0 as f32 / WINDOW.1 as f32,
        )
        .view_state()
    }

    fn setup() -> (Manipulator, Scene, ObjectId) {
        let mut scene = Scene::new();
        let id = scene.add_object("Cube", Pose::default(), unit_box());
        let mut manipulator = Manipulator::new(-1.0);
        manipulator.select(id);
        (manipulator, scene, id)
    }

    #[test]
    fn test_pick_move_x_handle_starts_drag() {
        let (mut manipulator, scene, id) = setup();
        let view = front_view();
        assert!(manipulator.on_mouse_down(ObjectId(1), Vector2::new(440.0, 300.0), WINDOW, &view, &scene));
        assert_eq!(
            manipulator.phase(),
            ManipulatorState::Dragging {
                action: GizmoAction::Move,
                axis: GizmoAxis::X
            }
        );
        assert_eq!(manipulator.selected(), id);
        assert!(manipulator.state().grab_offset.x > 0.0);
    }

    #[test]
    fn test_drag_right_increases_x() {
        let (mut manipulator, mut scene, id) = setup();
        let view = front_view();
        manipulator.on_mouse_down(ObjectId(1), Vector2::new(440.0, 300.0), WINDOW, &view, &scene);

        let mut last_x = scene.get(id).unwrap().pose.position.x;
        assert_eq!(last_x, 0.0);
        for step in 1..=5 {
            let cursor = Vector2::new(440.0 + 20.0 * step as f32, 300.0);
            assert!(manipulator.on_mouse_move(cursor, WINDOW, &view, &mut scene));
            let position = scene.get(id).unwrap().pose.position;
            assert!(position.x > last_x);
            assert!(position.y.abs() < 1e-5 && position.z.abs() < 1e-5);
            last_x = position.x;
        }
    }

    #[test]
    fn test_first_move_does_not_jump() {
        let (mut manipulator, mut scene, id) = setup();
        let view = front_view();
        let cursor = Vector2::new(460.0, 310.0);
        manipulator.on_mouse_down(ObjectId(1), cursor, WINDOW, &view, &scene);
        manipulator.on_mouse_move(cursor, WINDOW, &view, &mut scene);
        assert!(scene.get(id).unwrap().pose.position.x.abs() < 1e-4);
    }

    #[test]
    fn test_rotate_and_scale_leave_pose_unchanged() {
        for handle in [ObjectId(4), ObjectId(8)] {
            let (mut manipulator, mut scene, id) = setup();
            let view = front_view();
            let before = scene.get(id).unwrap().pose;
            assert!(manipulator.on_mouse_down(handle, Vector2::new(400.0, 300.0), WINDOW, &view, &scene));
            assert!(!manipulator.on_mouse_move(Vector2::new(600.0, 100.0), WINDOW, &view, &mut scene));
            assert_eq!(scene.get(id).unwrap().pose, before);
        }
    }

    #[test]
    fn test_mouse_up_keeps_selection() {
        let (mut manipulator, scene, id) = setup();
        let view = front_view();
        manipulator.on_mouse_down(ObjectId(2), Vector2::new(400.0, 250.0), WINDOW, &view, &scene);
        manipulator.on_mouse_up();
        assert_eq!(manipulator.phase(), ManipulatorState::Idle);
        assert_eq!(manipulator.selected(), id);
    }

    #[test]
    fn test_handle_without_selection_does_not_drag() {
        let (mut manipulator, scene, _) = setup();
        manipulator.deselect();
        let view = front_view();
        assert!(!manipulator.on_mouse_down(ObjectId(1), Vector2::new(440.0, 300.0), WINDOW, &view, &scene));
        assert_eq!(manipulator.phase(), ManipulatorState::Idle);
    }

    #[test]
    fn test_click_selects_and_background_clears() {
        let (mut manipulator, mut scene, id) = setup();
        let other = scene.add_object("Sphere", Pose::default(), unit_box());
        let view = front_view();

        manipulator.on_mouse_down(other, Vector2::new(0.0, 0.0), WINDOW, &view, &scene);
        assert_eq!(manipulator.selected(), other);

        manipulator.on_mouse_down(ObjectId(999), Vector2::new(0.0, 0.0), WINDOW, &view, &scene);
        assert_eq!(manipulator.selected(), ObjectId::NONE);

        manipulator.select(id);
        manipulator.on_mouse_down(ObjectId::NONE, Vector2::new(0.0, 0.0), WINDOW, &view, &scene);
        assert_eq!(manipulator.selected(), ObjectId::NONE);
        assert!(!manipulator.is_dragging());
    }

    #[test]
    fn test_parallel_ray_skips_frame() {
        let (mut manipulator, mut scene, id) = setup();
        // A forward of -Y makes the drag plane horizontal, and the center ray lies in it
        let view = front_view();
        manipulator.on_mouse_down(ObjectId(1), Vector2::new(440.0, 300.0), WINDOW, &view, &scene);
        let degenerate = ViewState::new(view.view, view.proj, view.position, Vector3::new(0.0, -1.0, 0.0));
        assert!(!manipulator.on_mouse_move(Vector2::new(400.0, 300.0), WINDOW, &degenerate, &mut scene));
        assert_eq!(scene.get(id).unwrap().pose.position, Vector3::new(0.0, 0.0, 0.0));
    }

    #[test]
    fn test_action_change_ignored_while_dragging() {
        let (mut manipulator, scene, _) = setup();
        let view = front_view();
        manipulator.set_action(GizmoAction::Scale);
        assert_eq!(manipulator.state().action, GizmoAction::Scale);
        manipulator.on_mouse_down(ObjectId(1), Vector2::new(440.0, 300.0), WINDOW, &view, &scene);
        manipulator.set_action(GizmoAction::Rotate);
        assert_eq!(manipulator.state().action, GizmoAction::Move);
    }
}
