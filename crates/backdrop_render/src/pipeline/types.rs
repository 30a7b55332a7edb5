//! GPU-compatible data types for the mesh pipeline
//!
//! These types are designed to match the shader layouts exactly.
//! All types derive Pod and Zeroable for safe GPU buffer operations.

use backdrop_core::{Asset, ModelVertex, Scene};
use backdrop_math::mat4::{self, Mat4};
use bytemuck::{Pod, Zeroable};

/// A mesh vertex as uploaded to the GPU
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Pod, Zeroable)]
pub struct Vertex3D {
    /// Position in model space
    pub position: [f32; 3],
    /// Surface normal for lighting
    pub normal: [f32; 3],
}

impl From<&ModelVertex> for Vertex3D {
    fn from(v: &ModelVertex) -> Self {
        Self {
            position: v.position,
            normal: v.normal,
        }
    }
}

/// Per-frame uniforms shared by every mesh (group 0)
/// Layout: 176 bytes total (must match mesh.wgsl FrameUniforms)
#[repr(C)]
#[derive(Clone, Copy, Debug, Pod, Zeroable)]
pub struct FrameUniforms {
    /// View matrix (64 bytes)
    pub view_matrix: Mat4,
    /// Projection matrix (64 bytes)
    pub projection_matrix: Mat4,
    /// Direction towards the directional light, normalized (12 bytes)
    pub light_dir: [f32; 3],
    pub ambient_intensity: f32,
    /// Directional light (16 bytes)
    pub light_color: [f32; 3],
    pub light_intensity: f32,
    /// Ambient light color + padding (16 bytes)
    pub ambient_color: [f32; 3],
    pub _padding: f32,
}

impl FrameUniforms {
    /// Gather camera and lighting from the scene
    pub fn from_scene(scene: &Scene) -> Self {
        let lighting = &scene.lighting;
        Self {
            view_matrix: scene.camera.view_matrix(),
            projection_matrix: scene.camera.projection_matrix(),
            light_dir: lighting.directional.direction().to_array(),
            ambient_intensity: lighting.ambient.intensity,
            light_color: lighting.directional.color,
            light_intensity: lighting.directional.intensity,
            ambient_color: lighting.ambient.color,
            _padding: 0.0,
        }
    }
}

impl Default for FrameUniforms {
    fn default() -> Self {
        Self {
            view_matrix: mat4::IDENTITY,
            projection_matrix: mat4::IDENTITY,
            light_dir: [0.0, 1.0, 0.0],
            ambient_intensity: 0.6,
            light_color: [1.0; 3],
            light_intensity: 1.0,
            ambient_color: [1.0; 3],
            _padding: 0.0,
        }
    }
}

/// Per-mesh uniforms (group 1)
/// Layout: 80 bytes total (must match mesh.wgsl MeshUniforms)
#[repr(C)]
#[derive(Clone, Copy, Debug, Pod, Zeroable)]
pub struct MeshUniforms {
    /// Object-to-world matrix (64 bytes)
    pub model_matrix: Mat4,
    /// RGBA base color (16 bytes)
    pub base_color: [f32; 4],
}

impl MeshUniforms {
    /// Uniforms for an asset at its current placement
    pub fn from_asset(asset: &Asset) -> Self {
        Self {
            model_matrix: asset.model_matrix(),
            base_color: asset.model.base_color,
        }
    }
}

impl Default for MeshUniforms {
    fn default() -> Self {
        Self {
            model_matrix: mat4::IDENTITY,
            base_color: [1.0; 4],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use backdrop_core::{DriftBody, Model, Vec3};
    use std::mem::size_of;
    use std::sync::Arc;

    #[test]
    fn test_vertex3d_size() {
        // 3 floats position + 3 floats normal = 24 bytes
        assert_eq!(size_of::<Vertex3D>(), 24);
    }

    #[test]
    fn test_frame_uniforms_size() {
        // 2 matrices + 3 vec4-sized light blocks = 176 bytes
        assert_eq!(size_of::<FrameUniforms>(), 176);
    }

    #[test]
    fn test_mesh_uniforms_size() {
        assert_eq!(size_of::<MeshUniforms>(), 80);
    }

    #[test]
    fn test_alignment() {
        assert_eq!(std::mem::align_of::<Vertex3D>(), 4);
        assert_eq!(std::mem::align_of::<FrameUniforms>(), 4);
        assert_eq!(std::mem::align_of::<MeshUniforms>(), 4);
    }

    #[test]
    fn test_vertex_from_model_vertex() {
        let v = ModelVertex {
            position: [1.0, 2.0, 3.0],
            normal: [0.0, 1.0, 0.0],
        };
        let gpu = Vertex3D::from(&v);
        assert_eq!(gpu.position, [1.0, 2.0, 3.0]);
        assert_eq!(gpu.normal, [0.0, 1.0, 0.0]);
    }

    #[test]
    fn test_frame_uniforms_from_default_scene() {
        let scene = Scene::default();
        let uniforms = FrameUniforms::from_scene(&scene);

        assert_eq!(uniforms.ambient_intensity, 0.6);
        assert_eq!(uniforms.light_intensity, 1.0);
        let d = uniforms.light_dir;
        let len = (d[0] * d[0] + d[1] * d[1] + d[2] * d[2]).sqrt();
        assert!((len - 1.0).abs() < 1e-5);
        assert_eq!(uniforms.view_matrix, scene.camera.view_matrix());
    }

    #[test]
    fn test_mesh_uniforms_from_asset() {
        let model = Arc::new(Model::new("m", Vec::new(), Vec::new(), [0.2, 0.4, 0.6, 1.0]));
        let asset = Asset::new(model, 2.0, DriftBody::at(Vec3::new(1.0, 2.0, 3.0)));
        let uniforms = MeshUniforms::from_asset(&asset);

        assert_eq!(uniforms.base_color, [0.2, 0.4, 0.6, 1.0]);
        assert_eq!(uniforms.model_matrix[0][0], 2.0);
        assert_eq!(uniforms.model_matrix[3], [1.0, 2.0, 3.0, 1.0]);
    }
}
