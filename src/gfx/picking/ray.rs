//! Cursor positions to world-space rays.

use cgmath::{Matrix4, Vector2, Vector3, Vector4};

use crate::gfx::geometry::{is_finite, Line};

/// Convert window pixels to normalized device coordinates (Y up)
pub fn cursor_to_ndc(cursor: Vector2<f32>, window_size: (u32, u32)) -> Vector2<f32> {
    let (width, height) = (window_size.0 as f32, window_size.1 as f32);
    Vector2::new(2.0 * cursor.x / width - 1.0, 1.0 - 2.0 * cursor.y / height)
}

/// Transform a clip-space point back into the world, with perspective divide
pub fn unproject(inverse_view_proj: &Matrix4<f32>, ndc: Vector3<f32>) -> Option<Vector3<f32>> {
    let world = inverse_view_proj * Vector4::new(ndc.x, ndc.y, ndc.z, 1.0);
    if world.w == 0.0 {
        return None;
    }
    let point = Vector3::new(world.x / world.w, world.y / world.w, world.z / world.w);
    is_finite(point).then_some(point)
}

/// Cast a ray from the camera through the cursor.
///
/// The cursor is unprojected at clip-space `depth` and joined with the camera
/// position. Returns `None` if the window has no area or the unprojected point
/// coincides with the camera.
pub fn cast_ray(
    cursor: Vector2<f32>,
    window_size: (u32, u32),
    inverse_view_proj: &Matrix4<f32>,
    camera_position: Vector3<f32>,
    depth: f32,
) -> Option<Line> {
    if window_size.0 == 0 || window_size.1 == 0 {
        return None;
    }
    let ndc = cursor_to_ndc(cursor, window_size);
    let world = unproject(inverse_view_proj, Vector3::new(ndc.x, ndc.y, depth))?;
    Line::try_new(camera_position, world - camera_position)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gfx::camera::{Camera, OrbitCamera};
    use cgmath::{InnerSpace, SquareMatrix};

    #[test]
    fn test_cursor_to_ndc() {
        let window = (800, 600);
        assert_eq!(cursor_to_ndc(Vector2::new(400.0, 300.0), window), Vector2::new(0.0, 0.0));
        assert_eq!(cursor_to_ndc(Vector2::new(0.0, 0.0), window), Vector2::new(-1.0, 1.0));
        assert_eq!(cursor_to_ndc(Vector2::new(800.0, 600.0), window), Vector2::new(1.0, -1.0));
    }

    #[test]
    fn test_center_ray_with_identity() {
        let ray = cast_ray(
            Vector2::new(400.0, 300.0),
            (800, 600),
            &Matrix4::identity(),
            Vector3::new(0.0, 0.0, 0.0),
            -1.0,
        )
        .unwrap();
        assert!((ray.direction() - Vector3::new(0.0, 0.0, -1.0)).magnitude() < 1e-6);
        assert_eq!(ray.point(), Vector3::new(0.0, 0.0, 0.0));
    }

    #[test]
    fn test_center_ray_follows_camera_forward() {
        let camera = OrbitCamera::new(5.0, 0.3, 0.7, Vector3::new(1.0, 0.0, -2.0), 4.0 / 3.0);
        let view = camera.view_state();
        let ray = cast_ray(
            Vector2::new(400.0, 300.0),
            (800, 600),
            &view.inverse_view_proj,
            view.position,
            -1.0,
        )
        .unwrap();
        assert!((ray.direction() - view.forward).magnitude() < 1e-3);
    }

    #[test]
    fn test_right_of_center_points_right() {
        let camera = OrbitCamera::looking_at(
            Vector3::new(0.0, 0.0, 5.0),
            Vector3::new(0.0, 0.0, 0.0),
            1.0,
        );
        let view = camera.view_state();
        let ray = cast_ray(
            Vector2::new(600.0, 400.0),
            (800, 800),
            &view.inverse_view_proj,
            view.position,
            -1.0,
        )
        .unwrap();
        assert!(ray.direction().x > 0.0);
        assert!(ray.direction().y.abs() < 1e-4);
        assert!(ray.direction().z < 0.0);
    }

    #[test]
    fn test_degenerate_window() {
        assert!(cast_ray(
            Vector2::new(0.0, 0.0),
            (0, 600),
            &Matrix4::identity(),
            Vector3::new(0.0, 0.0, 0.0),
            -1.0
        )
        .is_none());
    }
}
