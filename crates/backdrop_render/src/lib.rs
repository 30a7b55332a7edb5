//! wgpu rendering backend for the backdrop animator
//!
//! ## Key Components
//!
//! - [`context::RenderContext`] - WGPU device, queue, and surface management
//! - [`pipeline::MeshPipeline`] - Lit mesh pipeline with a depth target
//! - [`mesh::GpuMesh`] - Per-asset geometry and material buffers
//! - [`WgpuRenderer`] - [`backdrop_core::SceneRenderer`] over a window surface

pub mod context;
pub mod error;
pub mod mesh;
pub mod pipeline;
pub mod renderer;

pub use error::RenderError;
pub use renderer::{clear_color, RendererSettings, WgpuRenderer};
