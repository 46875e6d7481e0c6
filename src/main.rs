//! Headless walkthrough of a pick-and-drag session.
//!
//! There is no GPU here: the ID pass is approximated by filling each object's
//! projected bounding rectangle into the ID buffer. Run with
//! `RUST_LOG=debug` to see the state machine transitions.

use anyhow::{bail, Context};
use cgmath::{Vector2, Vector3};
use log::info;
use winit::event::MouseButton;

use scene_pick::gfx::geometry::project_bounds;
use scene_pick::prelude::*;

const WIDTH: u32 = 1200;
const HEIGHT: u32 = 800;

/// Clip-space rectangle to window pixels (x0, y0, x1, y1), Y down
fn to_pixels(min: Vector2<f32>, max: Vector2<f32>) -> (u32, u32, u32, u32) {
    let px = |x: f32| (((x + 1.0) * 0.5 * WIDTH as f32).max(0.0)) as u32;
    let py = |y: f32| (((1.0 - y) * 0.5 * HEIGHT as f32).max(0.0)) as u32;
    (px(min.x), py(max.y), px(max.x), py(min.y))
}

fn rasterize(editor: &mut Editor) {
    let view = editor.view_state();
    let mut rects = Vec::new();
    for (id, object) in editor.scene.iter().filter(|(_, o)| o.visible) {
        let (min, max) = project_bounds(object.bounds(), &(view.clip_from_world * object.transform()));
        rects.push((to_pixels(min, max), id));
    }
    // Handles are drawn last so they win over the object they sit on
    for handle in editor.gizmo_handles().into_iter().flatten() {
        let knob = AABB::new(Vector3::new(-0.1, -0.1, -0.1), Vector3::new(0.1, 0.1, 0.1));
        let (min, max) = project_bounds(&knob, &(view.clip_from_world * handle.transform()));
        rects.push((to_pixels(min, max), handle.id()));
    }

    let buffer = editor.id_buffer_mut();
    buffer.clear();
    for ((x0, y0, x1, y1), id) in rects {
        buffer.fill_rect(x0, y0, x1, y1, id);
    }
}

/// Window pixel at the center of a world point
fn screen_point(editor: &Editor, world: Vector3<f32>) -> Vector2<f32> {
    let clip = editor.view_state().clip_from_world * world.extend(1.0);
    let (width, height) = editor.window_size();
    Vector2::new(
        (clip.x / clip.w + 1.0) * 0.5 * width as f32,
        (1.0 - clip.y / clip.w) * 0.5 * height as f32,
    )
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let mut editor = Editor::new(WIDTH, HEIGHT, EditorSettings::default()).context("creating editor")?;
    editor.camera_manager.camera =
        OrbitCamera::looking_at(Vector3::new(0.0, 2.0, 8.0), Vector3::new(0.0, 0.0, 0.0), WIDTH as f32 / HEIGHT as f32);

    let unit = AABB::new(Vector3::new(-0.5, -0.5, -0.5), Vector3::new(0.5, 0.5, 0.5));
    let cube = editor.add_object("Cube", Pose::default(), unit);
    editor.add_object("Cube", Pose::at(Vector3::new(-2.5, 0.0, 0.0)), unit);

    // Click the cube to select it
    rasterize(&mut editor);
    let cube_center = screen_point(&editor, Vector3::new(0.0, 0.0, 0.0));
    editor.handle_input(&InputEvent::MouseDown {
        button: MouseButton::Left,
        position: cube_center,
    });
    editor.handle_input(&InputEvent::MouseUp { button: MouseButton::Left });
    if editor.selected().map(|o| o.id()) != Some(cube) {
        bail!("click at {:?} did not select {}", cube_center, cube);
    }

    // Re-render with the move handles visible, then grab the X handle
    rasterize(&mut editor);
    let handles = editor.gizmo_handles().context("no handles for selection")?;
    let grab = screen_point(&editor, handles[0].position);
    if !editor.on_mouse_down(grab) {
        bail!("no handle under {:?}", grab);
    }
    info!("Phase after grabbing: {:?}", editor.manipulator().phase());

    for step in 1..=10 {
        let cursor = grab + Vector2::new(15.0 * step as f32, 0.0);
        editor.handle_input(&InputEvent::MouseMove { position: cursor });
        if let Some(object) = editor.selected() {
            info!("step {step:2}: {} at {:?}", object.name, object.pose.position);
        }
    }
    editor.on_mouse_up();

    if let Some((min, max)) = editor.selection_outline() {
        info!("Selection outline: {:?} - {:?}", min, max);
    }
    for (id, object) in editor.scene.iter() {
        info!("{id} '{}' -> {:?}", object.name, object.pose.position);
    }
    Ok(())
}
