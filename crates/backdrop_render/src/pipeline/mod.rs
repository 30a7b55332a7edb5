//! Rendering pipeline components

pub mod mesh_pipeline;
pub mod types;

pub use mesh_pipeline::{MeshPipeline, DEPTH_FORMAT};
pub use types::{FrameUniforms, MeshUniforms, Vertex3D};
