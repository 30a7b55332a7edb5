//! Scene container
//!
//! The Scene owns the camera, the lighting and every live asset. Assets live
//! in a slot map so renderers can key their GPU resources by [`AssetKey`].

use std::sync::Arc;

use backdrop_math::{mat4, Mat4, Vec3};
use slotmap::{new_key_type, SlotMap};

use crate::camera::PerspectiveCamera;
use crate::drift::{DriftBody, DriftBounds};
use crate::model::Model;

new_key_type! {
    /// Key to an asset in the scene
    ///
    /// Generational, so a key to a removed asset never aliases a newer one.
    pub struct AssetKey;
}

/// Ambient light
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AmbientLight {
    pub color: [f32; 3],
    pub intensity: f32,
}

/// Directional light shining from `position` towards the origin
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DirectionalLight {
    pub color: [f32; 3],
    pub intensity: f32,
    pub position: Vec3,
}

impl DirectionalLight {
    /// Unit vector pointing from the surface towards the light
    pub fn direction(&self) -> Vec3 {
        self.position.normalized()
    }
}

/// Scene lighting
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Lighting {
    pub ambient: AmbientLight,
    pub directional: DirectionalLight,
}

impl Default for Lighting {
    fn default() -> Self {
        Self {
            ambient: AmbientLight {
                color: [1.0, 1.0, 1.0],
                intensity: 0.6,
            },
            directional: DirectionalLight {
                color: [1.0, 1.0, 1.0],
                intensity: 1.0,
                position: Vec3::new(5.0, 10.0, 7.5),
            },
        }
    }
}

/// A loaded model placed in the scene
#[derive(Clone, Debug)]
pub struct Asset {
    /// Model data shared with the renderer upload
    pub model: Arc<Model>,
    /// Uniform scale
    pub scale: f32,
    /// Placement and motion
    pub body: DriftBody,
}

impl Asset {
    /// Create an asset from a model, scale and initial motion
    pub fn new(model: Arc<Model>, scale: f32, body: DriftBody) -> Self {
        Self { model, scale, body }
    }

    /// Object-to-world matrix for the current frame
    pub fn model_matrix(&self) -> Mat4 {
        mat4::model_matrix(self.body.position, self.body.rotation, self.scale)
    }
}

/// Camera, lighting and live assets
pub struct Scene {
    pub camera: PerspectiveCamera,
    pub lighting: Lighting,
    /// Reflection thresholds applied on every update
    pub bounds: DriftBounds,
    assets: SlotMap<AssetKey, Asset>,
}

impl Scene {
    /// Create an empty scene
    pub fn new(camera: PerspectiveCamera, lighting: Lighting, bounds: DriftBounds) -> Self {
        Self {
            camera,
            lighting,
            bounds,
            assets: SlotMap::with_key(),
        }
    }

    /// Add an asset and return its key
    pub fn add_asset(&mut self, asset: Asset) -> AssetKey {
        self.assets.insert(asset)
    }

    /// Remove an asset and return it
    pub fn remove_asset(&mut self, key: AssetKey) -> Option<Asset> {
        self.assets.remove(key)
    }

    /// Get an asset by key
    pub fn asset(&self, key: AssetKey) -> Option<&Asset> {
        self.assets.get(key)
    }

    /// Number of live assets
    #[inline]
    pub fn asset_count(&self) -> usize {
        self.assets.len()
    }

    /// Whether the scene has no live assets
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.assets.is_empty()
    }

    /// Iterate over keys and assets
    pub fn iter(&self) -> impl Iterator<Item = (AssetKey, &Asset)> {
        self.assets.iter()
    }

    /// Advance every asset by one frame of drift
    pub fn update(&mut self) {
        let bounds = self.bounds;
        for (_key, asset) in &mut self.assets {
            asset.body.step(&bounds);
        }
    }

    /// Remove every asset, returning their keys
    pub fn clear(&mut self) -> Vec<AssetKey> {
        let keys: Vec<AssetKey> = self.assets.keys().collect();
        self.assets.clear();
        keys
    }
}

impl Default for Scene {
    fn default() -> Self {
        Self::new(PerspectiveCamera::default(), Lighting::default(), DriftBounds::default())
    }
}
