//! Seam between the animator and a rendering backend
//!
//! The animator only knows this trait; the wgpu implementation lives in
//! `backdrop_render`. Keeping the seam here lets the animator run headless in
//! tests.

use crate::model::Model;
use crate::scene::{AssetKey, Scene};

/// Size of a render surface in physical pixels
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SurfaceSize {
    pub width: u32,
    pub height: u32,
}

impl SurfaceSize {
    /// Create a new surface size
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Whether either dimension is zero
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Width / height, or 1.0 for an empty size
    pub fn aspect_ratio(&self) -> f32 {
        if self.is_empty() {
            1.0
        } else {
            self.width as f32 / self.height as f32
        }
    }
}

/// The region the render surface gets attached to
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MountPoint {
    pub size: SurfaceSize,
}

impl MountPoint {
    /// Create a mount point of the given size
    pub const fn new(width: u32, height: u32) -> Self {
        Self {
            size: SurfaceSize::new(width, height),
        }
    }
}

/// A rendering backend driven by the animator
///
/// The animator calls [`upload`](SceneRenderer::upload) once per registered
/// asset and [`release`](SceneRenderer::release) once per asset at teardown,
/// followed by a single [`dispose`](SceneRenderer::dispose).
pub trait SceneRenderer {
    /// Backend error type
    type Error: std::error::Error;

    /// Allocate geometry and material resources for a new asset
    fn upload(&mut self, key: AssetKey, model: &Model) -> Result<(), Self::Error>;

    /// Resize the render surface
    fn resize(&mut self, size: SurfaceSize);

    /// Draw one frame of the scene
    fn render(&mut self, scene: &Scene) -> Result<(), Self::Error>;

    /// Free the resources of one asset
    fn release(&mut self, key: AssetKey);

    /// Free the renderer's own resources and detach the surface
    fn dispose(&mut self);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_surface_size_aspect() {
        assert_eq!(SurfaceSize::new(1600, 800).aspect_ratio(), 2.0);
        assert_eq!(SurfaceSize::new(0, 800).aspect_ratio(), 1.0);
    }

    #[test]
    fn test_surface_size_empty() {
        assert!(SurfaceSize::new(0, 10).is_empty());
        assert!(SurfaceSize::new(10, 0).is_empty());
        assert!(!SurfaceSize::new(1, 1).is_empty());
    }
}
