//! # Editor Settings
//!
//! Tunable knobs for picking, gizmo layout and camera controls. Everything has a
//! sensible default; callers only override what they care about.

/// Smallest accepted multisample count
pub const MIN_SAMPLES: u32 = 1;
/// Largest accepted multisample count
pub const MAX_SAMPLES: u32 = 16;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EditorSettings {
    /// Multisample count for the color pass. The ID pass is always single-sampled.
    pub msaa_samples: u32,
    /// Clip-space depth at which cursor positions are unprojected into the world.
    ///
    /// The default is the near plane in the GL convention, which lies in front of
    /// the eye for any perspective projection.
    pub unproject_depth: f32,
    /// Offset of the move/scale handles from the object origin, in gizmo units
    pub gizmo_offset: f32,
    /// Gizmos are scaled by `camera distance / gizmo_distance_divisor`
    pub gizmo_distance_divisor: f32,
    pub camera_rotate_speed: f32,
    pub camera_zoom_speed: f32,
    pub camera_pan_speed: f32,
}

impl Default for EditorSettings {
    fn default() -> Self {
        Self {
            msaa_samples: 4,
            unproject_depth: -1.0,
            gizmo_offset: 0.15,
            gizmo_distance_divisor: 5.0,
            camera_rotate_speed: 0.005,
            camera_zoom_speed: 0.1,
            camera_pan_speed: 0.01,
        }
    }
}

impl EditorSettings {
    /// Sets the multisample count, clamped to the supported range
    pub fn set_msaa_samples(&mut self, samples: u32) {
        self.msaa_samples = samples.clamp(MIN_SAMPLES, MAX_SAMPLES);
    }

    /// Returns a copy with all fields forced into their valid ranges
    pub fn sanitized(mut self) -> Self {
        self.set_msaa_samples(self.msaa_samples);
        if self.gizmo_distance_divisor.is_nan() || self.gizmo_distance_divisor <= 0.0 {
            self.gizmo_distance_divisor = Self::default().gizmo_distance_divisor;
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_samples_are_clamped() {
        let mut settings = EditorSettings::default();
        settings.set_msaa_samples(0);
        assert_eq!(settings.msaa_samples, 1);
        settings.set_msaa_samples(64);
        assert_eq!(settings.msaa_samples, 16);
        settings.set_msaa_samples(8);
        assert_eq!(settings.msaa_samples, 8);
    }

    #[test]
    fn test_sanitized_restores_bad_divisor() {
        let settings = EditorSettings {
            gizmo_distance_divisor: 0.0,
            msaa_samples: 99,
            ..Default::default()
        }
        .sanitized();
        assert_eq!(settings.gizmo_distance_divisor, 5.0);
        assert_eq!(settings.msaa_samples, MAX_SAMPLES);
    }
}
