//! Core types for the backdrop animator
//!
//! This crate holds everything that does not touch the GPU:
//!
//! - [`Animator`] - Drives loading, per-frame drift, resize and teardown
//! - [`SceneRenderer`] - Trait a rendering backend implements
//! - [`Scene`] - Camera, lighting and live [`Asset`]s keyed by [`AssetKey`]
//! - [`DriftBody`] / [`DriftBounds`] - Bounded drift motion
//! - [`AssetManifest`] / [`AssetSource`] - Which models to load, from RON
//! - [`ModelLoader`] / [`ObjLoader`] - Model loading capability
//! - [`AssetLoader`] - Background loading over worker threads

mod asset_error;
mod asset_loader;
mod animator;
mod camera;
mod drift;
mod model;
mod renderer;
mod scene;
mod source;

pub use asset_error::AssetError;
pub use asset_loader::{AssetLoader, LoadResult};
pub use animator::{Animator, AnimatorSettings, FrameStatus};
pub use camera::PerspectiveCamera;
pub use drift::{DriftBody, DriftBounds, Reflections, ScatterSettings};
pub use model::{compute_vertex_normals, Model, ModelLoader, ModelVertex, ObjLoader, DEFAULT_BASE_COLOR};
pub use renderer::{MountPoint, SceneRenderer, SurfaceSize};
pub use scene::{AmbientLight, Asset, AssetKey, DirectionalLight, Lighting, Scene};
pub use source::{AssetManifest, AssetSource, ManifestError};

// Re-export math types for convenience
pub use backdrop_math::{Axis, Vec3};
