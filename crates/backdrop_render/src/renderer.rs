//! wgpu implementation of [`SceneRenderer`]

use std::collections::HashMap;
use std::sync::Arc;

use backdrop_core::{AssetKey, Model, Scene, SceneRenderer, SurfaceSize};
use winit::dpi::PhysicalSize;
use winit::window::Window;

use crate::context::RenderContext;
use crate::error::RenderError;
use crate::mesh::GpuMesh;
use crate::pipeline::{FrameUniforms, MeshPipeline, MeshUniforms};

/// Renderer options
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RendererSettings {
    pub vsync: bool,
    /// RGBA clear color
    pub clear_color: [f32; 4],
}

impl Default for RendererSettings {
    fn default() -> Self {
        Self {
            vsync: true,
            clear_color: [0.02, 0.02, 0.05, 1.0],
        }
    }
}

/// Convert an RGBA array to a wgpu clear color
pub fn clear_color(rgba: [f32; 4]) -> wgpu::Color {
    wgpu::Color {
        r: rgba[0] as f64,
        g: rgba[1] as f64,
        b: rgba[2] as f64,
        a: rgba[3] as f64,
    }
}

/// Surface-bound GPU state, dropped on dispose
struct Gpu {
    context: RenderContext,
    pipeline: MeshPipeline,
}

/// Draws the scene into a window surface
pub struct WgpuRenderer {
    gpu: Option<Gpu>,
    meshes: HashMap<AssetKey, GpuMesh>,
    clear_color: wgpu::Color,
}

impl WgpuRenderer {
    /// Attach to a window, blocking until the device is ready
    pub fn new(window: Arc<Window>, settings: RendererSettings) -> Result<Self, RenderError> {
        let context = pollster::block_on(RenderContext::with_vsync(window, settings.vsync))?;
        let mut pipeline = MeshPipeline::new(&context.device, context.config.format);
        pipeline.ensure_depth_texture(&context.device, context.config.width, context.config.height);

        log::info!(
            "Renderer ready: {}x{} {:?}",
            context.config.width,
            context.config.height,
            context.config.format
        );

        Ok(Self {
            gpu: Some(Gpu { context, pipeline }),
            meshes: HashMap::new(),
            clear_color: clear_color(settings.clear_color),
        })
    }
}

impl SceneRenderer for WgpuRenderer {
    type Error = RenderError;

    fn upload(&mut self, key: AssetKey, model: &Model) -> Result<(), RenderError> {
        let gpu = self.gpu.as_ref().ok_or(RenderError::Disposed)?;
        let mesh = GpuMesh::new(&gpu.context.device, gpu.pipeline.mesh_bind_group_layout(), model);

        log::debug!(
            "Uploaded '{}': {} vertices, {} triangles",
            model.name,
            model.vertex_count(),
            model.triangle_count()
        );

        if let Some(old) = self.meshes.insert(key, mesh) {
            old.destroy();
        }
        Ok(())
    }

    fn resize(&mut self, size: SurfaceSize) {
        let Some(gpu) = self.gpu.as_mut() else {
            return;
        };
        if size.is_empty() {
            return;
        }
        gpu.context.resize(PhysicalSize::new(size.width, size.height));
        gpu.pipeline
            .ensure_depth_texture(&gpu.context.device, size.width, size.height);
    }

    fn render(&mut self, scene: &Scene) -> Result<(), RenderError> {
        let gpu = self.gpu.as_mut().ok_or(RenderError::Disposed)?;

        gpu.pipeline
            .update_frame_uniforms(&gpu.context.queue, &FrameUniforms::from_scene(scene));

        let mut visible = Vec::with_capacity(self.meshes.len());
        for (key, asset) in scene.iter() {
            if let Some(mesh) = self.meshes.get(&key) {
                mesh.update(&gpu.context.queue, &MeshUniforms::from_asset(asset));
                visible.push(mesh);
            }
        }

        let output = match gpu.context.surface.get_current_texture() {
            Ok(output) => output,
            Err(wgpu::SurfaceError::Lost) | Err(wgpu::SurfaceError::Outdated) => {
                gpu.context.reconfigure();
                return Err(RenderError::SurfaceLost);
            }
            Err(wgpu::SurfaceError::OutOfMemory) => return Err(RenderError::OutOfMemory),
            Err(e) => return Err(RenderError::Other(format!("{:?}", e))),
        };

        let view = output
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let mut encoder = gpu
            .context
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("Frame Encoder"),
            });

        gpu.pipeline
            .render(&mut encoder, &view, visible, self.clear_color);

        gpu.context.queue.submit(std::iter::once(encoder.finish()));
        output.present();

        Ok(())
    }

    fn release(&mut self, key: AssetKey) {
        if let Some(mesh) = self.meshes.remove(&key) {
            mesh.destroy();
        }
    }

    fn dispose(&mut self) {
        // Anything not released individually goes now
        let leftover = self.meshes.len();
        for (_key, mesh) in self.meshes.drain() {
            mesh.destroy();
        }
        if leftover > 0 {
            log::debug!("Destroyed {} unreleased meshes on dispose", leftover);
        }

        if let Some(mut gpu) = self.gpu.take() {
            gpu.pipeline.release_depth_texture();
            log::debug!("Render surface detached");
        }
    }
}

impl Drop for WgpuRenderer {
    fn drop(&mut self) {
        self.dispose();
    }
}
