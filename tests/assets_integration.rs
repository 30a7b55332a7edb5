//! Integration tests for the shipped asset manifest and models

use backdrop::config::AppConfig;
use backdrop_core::{AssetManifest, ModelLoader, ObjLoader};

#[test]
fn test_shipped_manifest_loads() {
    let config = AppConfig::default();
    let manifest = AssetManifest::load(&config.assets.manifest).unwrap();

    assert!(!manifest.is_empty());
    for source in &manifest.assets {
        assert!(source.path.exists(), "{} is missing", source.path.display());
        assert!(source.scale > 0.0);
    }
}

#[test]
fn test_shipped_models_parse() {
    let config = AppConfig::default();
    let manifest = AssetManifest::load(&config.assets.manifest).unwrap();
    let loader = ObjLoader::new().with_default_color(config.assets.default_color);

    for source in &manifest.assets {
        let model = loader.load(&source.path).unwrap();
        assert!(model.triangle_count() >= 4, "{} has too few faces", model.name);
        assert_eq!(model.vertices.len(), model.vertex_count());
        for v in &model.vertices {
            let n = v.normal;
            let len = (n[0] * n[0] + n[1] * n[1] + n[2] * n[2]).sqrt();
            assert!((len - 1.0).abs() < 1e-3, "{} has a non-unit normal", model.name);
        }
    }
}

#[test]
fn test_material_color_is_used() {
    let loader = ObjLoader::new();
    let model = loader.load("assets/models/octahedron.obj".as_ref()).unwrap();
    assert_eq!(&model.base_color[..3], &[0.2, 0.7, 0.75]);
}
