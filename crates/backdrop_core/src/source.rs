//! Asset sources and the asset manifest
//!
//! The manifest is a RON file listing which models to load and at what scale:
//!
//! ```ron
//! AssetManifest(
//!     assets: [
//!         (path: "models/octahedron.obj", scale: 1.5),
//!         (path: "models/cube.obj", scale: 1.0),
//!     ],
//! )
//! ```

use serde::{Serialize, Deserialize};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// A model file to load and the uniform scale to apply to it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssetSource {
    /// Path to the model file
    pub path: PathBuf,
    /// Uniform scale factor
    #[serde(default = "default_scale")]
    pub scale: f32,
}

fn default_scale() -> f32 {
    1.0
}

impl AssetSource {
    /// Create a new asset source
    pub fn new(path: impl Into<PathBuf>, scale: f32) -> Self {
        Self {
            path: path.into(),
            scale,
        }
    }
}

/// Ordered list of asset sources
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AssetManifest {
    /// Asset sources in load order
    #[serde(default)]
    pub assets: Vec<AssetSource>,
}

impl AssetManifest {
    /// Create a manifest from a list of sources
    pub fn new(assets: Vec<AssetSource>) -> Self {
        Self { assets }
    }

    /// Load a manifest from a RON file
    ///
    /// Relative asset paths are resolved against the manifest's directory.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ManifestError> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path)?;
        let mut manifest: AssetManifest = ron::from_str(&contents)?;

        if let Some(base) = path.parent() {
            manifest.resolve_relative_to(base);
        }
        Ok(manifest)
    }

    /// Save the manifest to a RON file
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), ManifestError> {
        let pretty = ron::ser::PrettyConfig::new()
            .struct_names(true)
            .enumerate_arrays(false);
        let contents = ron::ser::to_string_pretty(self, pretty)?;
        fs::write(path, contents)?;
        Ok(())
    }

    /// Make every relative source path relative to `base`
    pub fn resolve_relative_to(&mut self, base: &Path) {
        for source in &mut self.assets {
            if source.path.is_relative() {
                source.path = base.join(&source.path);
            }
        }
    }

    /// Number of sources
    pub fn len(&self) -> usize {
        self.assets.len()
    }

    /// Whether the manifest lists no sources
    pub fn is_empty(&self) -> bool {
        self.assets.is_empty()
    }
}

/// Error loading or saving a manifest
#[derive(Debug)]
pub enum ManifestError {
    /// IO error (file not found, permission denied, etc.)
    Io(io::Error),
    /// Parse error (invalid RON syntax)
    Parse(ron::error::SpannedError),
    /// Serialization error
    Serialize(ron::Error),
}

impl From<io::Error> for ManifestError {
    fn from(e: io::Error) -> Self {
        ManifestError::Io(e)
    }
}

impl From<ron::error::SpannedError> for ManifestError {
    fn from(e: ron::error::SpannedError) -> Self {
        ManifestError::Parse(e)
    }
}

impl From<ron::Error> for ManifestError {
    fn from(e: ron::Error) -> Self {
        ManifestError::Serialize(e)
    }
}

impl std::fmt::Display for ManifestError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ManifestError::Io(e) => write!(f, "IO error: {}", e),
            ManifestError::Parse(e) => write!(f, "Parse error: {}", e),
            ManifestError::Serialize(e) => write!(f, "Serialization error: {}", e),
        }
    }
}

impl std::error::Error for ManifestError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_manifest() {
        let ron = r#"
            AssetManifest(
                assets: [
                    (path: "models/a.obj", scale: 2.0),
                    (path: "models/b.obj"),
                ],
            )
        "#;
        let manifest: AssetManifest = ron::from_str(ron).unwrap();
        assert_eq!(manifest.len(), 2);
        assert_eq!(manifest.assets[0].scale, 2.0);
        // Scale defaults to 1.0 when omitted
        assert_eq!(manifest.assets[1].scale, 1.0);
    }

    #[test]
    fn test_load_resolves_relative_paths() {
        let dir = tempfile::tempdir().unwrap();
        let manifest_path = dir.path().join("manifest.ron");
        std::fs::write(
            &manifest_path,
            r#"AssetManifest(assets: [(path: "models/a.obj", scale: 1.0), (path: "/abs/b.obj", scale: 1.0)])"#,
        )
        .unwrap();

        let manifest = AssetManifest::load(&manifest_path).unwrap();
        assert_eq!(manifest.assets[0].path, dir.path().join("models/a.obj"));
        assert_eq!(manifest.assets[1].path, PathBuf::from("/abs/b.obj"));
    }

    #[test]
    fn test_save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let manifest_path = dir.path().join("out.ron");
        let manifest = AssetManifest::new(vec![AssetSource::new("/models/ring.obj", 0.5)]);

        manifest.save(&manifest_path).unwrap();
        let loaded = AssetManifest::load(&manifest_path).unwrap();
        assert_eq!(loaded, manifest);
    }

    #[test]
    fn test_load_missing_file() {
        let result = AssetManifest::load("/nonexistent/manifest.ron");
        assert!(matches!(result, Err(ManifestError::Io(_))));
    }

    #[test]
    fn test_load_invalid_ron() {
        let dir = tempfile::tempdir().unwrap();
        let manifest_path = dir.path().join("bad.ron");
        std::fs::write(&manifest_path, "AssetManifest(assets: [").unwrap();

        let result = AssetManifest::load(&manifest_path);
        assert!(matches!(result, Err(ManifestError::Parse(_))));
    }
}
