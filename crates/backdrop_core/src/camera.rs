//! Perspective camera
//!
//! A fixed camera looking down -Z at the origin. Only the aspect ratio
//! changes at runtime, in response to viewport resizes.

use backdrop_math::{mat4, Mat4, Vec3};

/// Perspective projection parameters and camera placement
#[derive(Clone, Debug, PartialEq)]
pub struct PerspectiveCamera {
    /// Vertical field of view in degrees
    pub fov_y: f32,
    /// Width / height of the viewport
    pub aspect: f32,
    /// Near clipping plane
    pub near: f32,
    /// Far clipping plane
    pub far: f32,
    /// Camera position
    pub position: Vec3,
    /// Point the camera looks at
    pub target: Vec3,
}

impl Default for PerspectiveCamera {
    fn default() -> Self {
        Self::new(75.0, 1.0, 0.1, 1000.0, 30.0)
    }
}

impl PerspectiveCamera {
    /// Create a camera `distance` units along +Z, looking at the origin
    pub fn new(fov_y: f32, aspect: f32, near: f32, far: f32, distance: f32) -> Self {
        Self {
            fov_y,
            aspect,
            near,
            far,
            position: Vec3::new(0.0, 0.0, distance),
            target: Vec3::ZERO,
        }
    }

    /// Update the aspect ratio for a viewport of the given size
    ///
    /// Zero-height viewports are ignored.
    pub fn set_viewport(&mut self, width: u32, height: u32) {
        if height > 0 {
            self.aspect = width as f32 / height as f32;
        }
    }

    /// World to view transform
    pub fn view_matrix(&self) -> Mat4 {
        mat4::look_at(self.position, self.target, Vec3::Y)
    }

    /// View to clip transform
    pub fn projection_matrix(&self) -> Mat4 {
        mat4::perspective(self.fov_y.to_radians(), self.aspect, self.near, self.far)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_camera_default_position() {
        let cam = PerspectiveCamera::default();
        assert_eq!(cam.position, Vec3::new(0.0, 0.0, 30.0));
        assert_eq!(cam.fov_y, 75.0);
    }

    #[test]
    fn test_set_viewport() {
        let mut cam = PerspectiveCamera::default();
        cam.set_viewport(1920, 1080);
        assert!((cam.aspect - 1920.0 / 1080.0).abs() < 1e-6);
    }

    #[test]
    fn test_set_viewport_zero_height_ignored() {
        let mut cam = PerspectiveCamera::default();
        cam.set_viewport(800, 600);
        cam.set_viewport(800, 0);
        assert!((cam.aspect - 800.0 / 600.0).abs() < 1e-6);
    }

    #[test]
    fn test_projection_uses_aspect() {
        let mut cam = PerspectiveCamera::default();
        cam.set_viewport(200, 100);
        let proj = cam.projection_matrix();
        // x scale is y scale divided by aspect
        assert!((proj[0][0] * 2.0 - proj[1][1]).abs() < 1e-5);
    }
}
