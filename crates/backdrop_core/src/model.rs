//! Loaded model data and the model loading capability
//!
//! A [`Model`] is CPU-side triangle data ready to be uploaded by a renderer.
//! Models are produced by a [`ModelLoader`]; [`ObjLoader`] reads Wavefront
//! OBJ files (with optional MTL materials) through `tobj`.

use std::path::Path;

use backdrop_math::Vec3;

use crate::asset_error::AssetError;

/// Base color used when a model has no material
pub const DEFAULT_BASE_COLOR: [f32; 4] = [0.8, 0.8, 0.85, 1.0];

/// A single model vertex
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ModelVertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
}

/// Triangle mesh loaded from an asset file
#[derive(Clone, Debug)]
pub struct Model {
    /// Name of the model (file stem or first mesh name)
    pub name: String,
    /// Vertex data
    pub vertices: Vec<ModelVertex>,
    /// Triangle list indices into `vertices`
    pub indices: Vec<u32>,
    /// RGBA base color
    pub base_color: [f32; 4],
}

impl Model {
    /// Create a model from raw parts
    pub fn new(
        name: impl Into<String>,
        vertices: Vec<ModelVertex>,
        indices: Vec<u32>,
        base_color: [f32; 4],
    ) -> Self {
        Self {
            name: name.into(),
            vertices,
            indices,
            base_color,
        }
    }

    /// Number of triangles
    #[inline]
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Number of vertices
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }
}

/// Capability to turn an asset file into a [`Model`]
///
/// Loaders run on background threads, so they must be `Send + Sync`.
pub trait ModelLoader: Send + Sync + 'static {
    /// Load a model from the given file path.
    ///
    /// # Errors
    ///
    /// Returns an [`AssetError`] if the file cannot be read or parsed.
    fn load(&self, path: &Path) -> Result<Model, AssetError>;
}

/// Wavefront OBJ loader backed by `tobj`
#[derive(Clone, Debug)]
pub struct ObjLoader {
    /// Color used when the file has no usable material
    default_color: [f32; 4],
}

impl Default for ObjLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl ObjLoader {
    /// Create a loader with the default base color
    pub fn new() -> Self {
        Self {
            default_color: DEFAULT_BASE_COLOR,
        }
    }

    /// Set the color used for models without a material
    pub fn with_default_color(mut self, color: [f32; 4]) -> Self {
        self.default_color = color;
        self
    }
}

impl ModelLoader for ObjLoader {
    fn load(&self, path: &Path) -> Result<Model, AssetError> {
        if !path.exists() {
            return Err(AssetError::NotFound(path.display().to_string()));
        }

        let (meshes, materials) = tobj::load_obj(path, &tobj::GPU_LOAD_OPTIONS)?;

        // A broken or missing MTL file is not fatal; fall back to the default color
        let materials = materials.unwrap_or_else(|e| {
            log::debug!("No materials for {}: {}", path.display(), e);
            Vec::new()
        });

        let mut vertices = Vec::new();
        let mut indices = Vec::new();
        let mut base_color = None;

        for mesh in meshes.iter().map(|m| &m.mesh) {
            let offset = vertices.len() as u32;
            let positions: Vec<[f32; 3]> = mesh
                .positions
                .chunks_exact(3)
                .map(|p| [p[0], p[1], p[2]])
                .collect();

            let normals = if mesh.normals.len() == mesh.positions.len() {
                mesh.normals
                    .chunks_exact(3)
                    .map(|n| [n[0], n[1], n[2]])
                    .collect()
            } else {
                compute_vertex_normals(&positions, &mesh.indices)
            };

            vertices.extend(
                positions
                    .iter()
                    .zip(normals.iter())
                    .map(|(&position, &normal)| ModelVertex { position, normal }),
            );
            indices.extend(mesh.indices.iter().map(|i| i + offset));

            if base_color.is_none() {
                base_color = mesh
                    .material_id
                    .and_then(|id| materials.get(id))
                    .and_then(|m| m.diffuse)
                    .map(|[r, g, b]| [r, g, b, 1.0]);
            }
        }

        if indices.len() < 3 {
            return Err(AssetError::Empty(path.display().to_string()));
        }

        let name = path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .or_else(|| meshes.first().map(|m| m.name.clone()))
            .unwrap_or_default();

        Ok(Model::new(
            name,
            vertices,
            indices,
            base_color.unwrap_or(self.default_color),
        ))
    }
}

/// Compute smooth per-vertex normals by accumulating area-weighted face normals
pub fn compute_vertex_normals(positions: &[[f32; 3]], indices: &[u32]) -> Vec<[f32; 3]> {
    let mut accum = vec![Vec3::ZERO; positions.len()];

    for tri in indices.chunks_exact(3) {
        let [a, b, c] = [tri[0] as usize, tri[1] as usize, tri[2] as usize];
        if a >= positions.len() || b >= positions.len() || c >= positions.len() {
            continue;
        }
        let pa = Vec3::from_array(positions[a]);
        let pb = Vec3::from_array(positions[b]);
        let pc = Vec3::from_array(positions[c]);
        let face = (pb - pa).cross(pc - pa);
        accum[a] += face;
        accum[b] += face;
        accum[c] += face;
    }

    accum
        .into_iter()
        .map(|n| {
            let n = n.normalized();
            if n == Vec3::ZERO { Vec3::Y.to_array() } else { n.to_array() }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const TRIANGLE_OBJ: &str = "\
o tri
v 0.0 0.0 0.0
v 1.0 0.0 0.0
v 0.0 1.0 0.0
f 1 2 3
";

    fn write_temp(dir: &tempfile::TempDir, name: &str, contents: &str) -> std::path::PathBuf {
        let path = dir.path().join(name);
        let mut file = std::fs::File::create(&path).unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        path
    }

    #[test]
    fn test_compute_normals_flat_triangle() {
        let positions = [[0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0]];
        let normals = compute_vertex_normals(&positions, &[0, 1, 2]);
        for n in normals {
            assert!((n[2] - 1.0).abs() < 0.0001, "expected +Z normal, got {:?}", n);
        }
    }

    #[test]
    fn test_compute_normals_unreferenced_vertex() {
        let positions = [[0.0; 3], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [5.0, 5.0, 5.0]];
        let normals = compute_vertex_normals(&positions, &[0, 1, 2]);
        assert_eq!(normals[3], [0.0, 1.0, 0.0]);
    }

    #[test]
    fn test_obj_loader_reads_triangle() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_temp(&dir, "tri.obj", TRIANGLE_OBJ);

        let model = ObjLoader::new().load(&path).unwrap();
        assert_eq!(model.name, "tri");
        assert_eq!(model.vertex_count(), 3);
        assert_eq!(model.triangle_count(), 1);
        assert_eq!(model.base_color, DEFAULT_BASE_COLOR);
    }

    #[test]
    fn test_obj_loader_custom_default_color() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_temp(&dir, "tri.obj", TRIANGLE_OBJ);

        let color = [0.0, 1.0, 1.0, 1.0];
        let model = ObjLoader::new().with_default_color(color).load(&path).unwrap();
        assert_eq!(model.base_color, color);
    }

    #[test]
    fn test_obj_loader_uses_material_diffuse() {
        let dir = tempfile::tempdir().unwrap();
        write_temp(&dir, "tint.mtl", "newmtl tint\nKd 1.0 0.0 1.0\n");
        let path = write_temp(
            &dir,
            "tinted.obj",
            &format!("mtllib tint.mtl\nusemtl tint\n{}", TRIANGLE_OBJ),
        );

        let model = ObjLoader::new().load(&path).unwrap();
        assert_eq!(model.base_color, [1.0, 0.0, 1.0, 1.0]);
    }

    #[test]
    fn test_obj_loader_missing_file() {
        let result = ObjLoader::new().load(Path::new("/nonexistent/model.obj"));
        assert!(matches!(result, Err(AssetError::NotFound(_))));
    }

    #[test]
    fn test_obj_loader_unreadable_path_is_io() {
        let dir = tempfile::tempdir().unwrap();
        let result = ObjLoader::new().load(dir.path());
        assert!(matches!(result, Err(AssetError::Io(_))), "got {:?}", result.err());
    }

    #[test]
    fn test_obj_loader_no_faces_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_temp(&dir, "points.obj", "v 0 0 0\nv 1 0 0\n");

        let result = ObjLoader::new().load(&path);
        assert!(matches!(result, Err(AssetError::Empty(_))));
    }
}
