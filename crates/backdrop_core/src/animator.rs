//! Decorative scene animator
//!
//! Owns the scene and a renderer, applies finished asset loads, advances the
//! drift once per frame and draws. The host drives it:
//!
//! - [`Animator::mount`] when the view appears
//! - [`Animator::frame`] once per display refresh, requesting another refresh
//!   while it returns [`FrameStatus::Continue`]
//! - [`Animator::resize`] when the viewport changes
//! - [`Animator::teardown`] (or drop) when the view goes away
//!
//! Everything runs on the host's thread except model parsing, which happens
//! on loader threads and comes back as messages.

use std::sync::Arc;

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::asset_loader::AssetLoader;
use crate::camera::PerspectiveCamera;
use crate::drift::{DriftBody, DriftBounds, ScatterSettings};
use crate::model::{Model, ModelLoader};
use crate::renderer::{MountPoint, SceneRenderer, SurfaceSize};
use crate::scene::{Asset, AssetKey, Lighting, Scene};
use crate::source::AssetSource;

/// Everything needed to build an animator except the renderer
#[derive(Clone, Debug)]
pub struct AnimatorSettings {
    /// Camera template; its aspect is replaced by the mount point's
    pub camera: PerspectiveCamera,
    pub lighting: Lighting,
    pub bounds: DriftBounds,
    pub scatter: ScatterSettings,
    /// Fixed RNG seed for a reproducible layout
    pub seed: Option<u64>,
    /// Assets to load, in order
    pub sources: Vec<AssetSource>,
}

impl Default for AnimatorSettings {
    fn default() -> Self {
        Self {
            camera: PerspectiveCamera::default(),
            lighting: Lighting::default(),
            bounds: DriftBounds::default(),
            scatter: ScatterSettings::default(),
            seed: None,
            sources: Vec::new(),
        }
    }
}

/// Whether the host should schedule another frame
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FrameStatus {
    Continue,
    Stopped,
}

/// Animated scene of drifting models
pub struct Animator<R: SceneRenderer> {
    scene: Scene,
    renderer: R,
    /// `None` once torn down; dropping it discards late loads
    loader: Option<AssetLoader>,
    /// Placement for each source, drawn at mount in manifest order and taken
    /// when that source's load lands
    placements: Vec<Option<DriftBody>>,
    size: SurfaceSize,
    frames: u64,
    torn_down: bool,
}

impl<R: SceneRenderer> Animator<R> {
    /// Attach to a mount point and start loading assets
    ///
    /// Returns `None` without creating anything when there is no mount point,
    /// when it has zero area, or when the renderer cannot be created.
    pub fn mount<F>(
        mount: Option<MountPoint>,
        settings: AnimatorSettings,
        model_loader: Arc<dyn ModelLoader>,
        create_renderer: F,
    ) -> Option<Self>
    where
        F: FnOnce(MountPoint) -> Result<R, R::Error>,
    {
        let Some(mount) = mount else {
            log::info!("No mount point, backdrop disabled");
            return None;
        };
        if mount.size.is_empty() {
            log::info!(
                "Mount point is {}x{}, backdrop disabled",
                mount.size.width,
                mount.size.height
            );
            return None;
        }

        let renderer = match create_renderer(mount) {
            Ok(renderer) => renderer,
            Err(e) => {
                log::warn!("Failed to create renderer: {}. Backdrop disabled.", e);
                return None;
            }
        };

        let mut camera = settings.camera;
        camera.set_viewport(mount.size.width, mount.size.height);
        let scene = Scene::new(camera, settings.lighting, settings.bounds);

        let mut rng = match settings.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };

        let scatter = if settings.scatter.is_valid() {
            settings.scatter
        } else {
            log::warn!(
                "Unusable scatter settings {:?}, falling back to defaults where needed",
                settings.scatter
            );
            settings.scatter.sanitized()
        };

        // Drawn up front so the layout does not depend on load completion order
        let placements = settings
            .sources
            .iter()
            .map(|_| Some(scatter.scatter(&mut rng)))
            .collect();

        let mut loader = AssetLoader::new(model_loader);
        let source_count = settings.sources.len();
        for (index, source) in settings.sources.into_iter().enumerate() {
            loader.load_async(index, source);
        }

        log::info!(
            "Backdrop mounted at {}x{}, loading {} assets",
            mount.size.width,
            mount.size.height,
            source_count
        );

        Some(Self {
            scene,
            renderer,
            loader: Some(loader),
            placements,
            size: mount.size,
            frames: 0,
            torn_down: false,
        })
    }

    /// Run one frame: apply finished loads, advance the drift, render
    pub fn frame(&mut self) -> FrameStatus {
        if self.torn_down {
            return FrameStatus::Stopped;
        }

        self.apply_finished_loads();
        self.scene.update();

        if let Err(e) = self.renderer.render(&self.scene) {
            log::warn!("Frame {} failed to render: {}", self.frames, e);
        }

        self.frames += 1;
        FrameStatus::Continue
    }

    /// Follow a viewport size change
    pub fn resize(&mut self, width: u32, height: u32) {
        if self.torn_down {
            return;
        }
        let size = SurfaceSize::new(width, height);
        if size.is_empty() {
            log::debug!("Ignoring resize to {}x{}", width, height);
            return;
        }

        self.scene.camera.set_viewport(width, height);
        self.renderer.resize(size);
        self.size = size;
    }

    /// Stop the loop and release every resource
    ///
    /// Loads still in flight are abandoned and never added. Safe to call more
    /// than once; also runs on drop.
    pub fn teardown(&mut self) {
        if self.torn_down {
            return;
        }
        self.torn_down = true;

        let abandoned = self.loader.take().map(|l| l.in_flight()).unwrap_or(0);

        let keys = self.scene.clear();
        for key in &keys {
            self.renderer.release(*key);
        }
        self.renderer.dispose();

        log::info!(
            "Backdrop torn down after {} frames: released {} assets, abandoned {} loads",
            self.frames,
            keys.len(),
            abandoned
        );
    }

    /// Place a model in the scene with explicit motion
    ///
    /// Returns `None` if the animator is torn down or the renderer rejects
    /// the model.
    pub fn add_asset(&mut self, model: Model, scale: f32, body: DriftBody) -> Option<AssetKey> {
        if self.torn_down {
            return None;
        }

        let model = Arc::new(model);
        let key = self.scene.add_asset(Asset::new(Arc::clone(&model), scale, body));

        if let Err(e) = self.renderer.upload(key, &model) {
            log::warn!("Failed to upload asset '{}': {}", model.name, e);
            self.scene.remove_asset(key);
            return None;
        }
        Some(key)
    }

    /// Remove one asset and release its renderer resources
    ///
    /// Returns `false` if the key is not live.
    pub fn remove_asset(&mut self, key: AssetKey) -> bool {
        if self.scene.remove_asset(key).is_none() {
            return false;
        }
        self.renderer.release(key);
        true
    }

    /// Replace the reflection thresholds
    pub fn set_bounds(&mut self, bounds: DriftBounds) {
        self.scene.bounds = bounds;
    }

    fn apply_finished_loads(&mut self) {
        let finished = match self.loader.as_mut() {
            Some(loader) => loader.poll_all(),
            None => return,
        };

        for done in finished {
            match done.result {
                Ok(model) => {
                    let Some(body) = self.placements.get_mut(done.index).and_then(Option::take)
                    else {
                        log::warn!("Dropping load {} with no placement", done.index);
                        continue;
                    };
                    let name = model.name.clone();
                    if let Some(key) = self.add_asset(model, done.source.scale, body) {
                        log::info!(
                            "Asset '{}' ({}) added as {:?}",
                            name,
                            done.source.path.display(),
                            key
                        );
                    }
                }
                Err(e) => {
                    log::warn!(
                        "Skipping asset {} ({}): {}",
                        done.index,
                        done.source.path.display(),
                        e
                    );
                }
            }
        }
    }

    /// The scene being animated
    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    /// The renderer
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    /// Current surface size
    pub fn size(&self) -> SurfaceSize {
        self.size
    }

    /// Frames run so far
    pub fn frame_count(&self) -> u64 {
        self.frames
    }

    /// Loads requested but not yet applied
    pub fn pending_loads(&self) -> usize {
        self.loader.as_ref().map(|l| l.in_flight()).unwrap_or(0)
    }

    /// Whether the animator still runs frames
    pub fn is_running(&self) -> bool {
        !self.torn_down
    }
}

impl<R: SceneRenderer> Drop for Animator<R> {
    fn drop(&mut self) {
        self.teardown();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::asset_error::AssetError;
    use std::fmt;
    use std::path::Path;

    #[derive(Debug)]
    struct NullError;

    impl fmt::Display for NullError {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "null renderer error")
        }
    }

    impl std::error::Error for NullError {}

    #[derive(Default)]
    struct NullRenderer {
        renders: usize,
        live: usize,
        disposed: bool,
    }

    impl SceneRenderer for NullRenderer {
        type Error = NullError;

        fn upload(&mut self, _key: AssetKey, _model: &Model) -> Result<(), NullError> {
            self.live += 1;
            Ok(())
        }

        fn resize(&mut self, _size: SurfaceSize) {}

        fn render(&mut self, _scene: &Scene) -> Result<(), NullError> {
            self.renders += 1;
            Ok(())
        }

        fn release(&mut self, _key: AssetKey) {
            self.live -= 1;
        }

        fn dispose(&mut self) {
            self.disposed = true;
        }
    }

    struct NoLoader;

    impl ModelLoader for NoLoader {
        fn load(&self, path: &Path) -> Result<Model, AssetError> {
            Err(AssetError::NotFound(path.display().to_string()))
        }
    }

    fn mount_null(settings: AnimatorSettings) -> Animator<NullRenderer> {
        Animator::mount(
            Some(MountPoint::new(800, 600)),
            settings,
            Arc::new(NoLoader),
            |_| Ok(NullRenderer::default()),
        )
        .expect("mount should succeed")
    }

    #[test]
    fn test_mount_sets_camera_aspect() {
        let animator = mount_null(AnimatorSettings::default());
        assert!((animator.scene().camera.aspect - 800.0 / 600.0).abs() < 1e-6);
        assert_eq!(animator.size(), SurfaceSize::new(800, 600));
    }

    #[test]
    fn test_zero_area_mount_is_noop() {
        let mut created = false;
        let animator: Option<Animator<NullRenderer>> = Animator::mount(
            Some(MountPoint::new(0, 600)),
            AnimatorSettings::default(),
            Arc::new(NoLoader),
            |_| {
                created = true;
                Ok(NullRenderer::default())
            },
        );
        assert!(animator.is_none());
        assert!(!created);
    }

    #[test]
    fn test_renderer_factory_error_is_noop() {
        let animator: Option<Animator<NullRenderer>> = Animator::mount(
            Some(MountPoint::new(640, 480)),
            AnimatorSettings::default(),
            Arc::new(NoLoader),
            |_| Err(NullError),
        );
        assert!(animator.is_none());
    }

    #[test]
    fn test_frame_after_teardown_stops() {
        let mut animator = mount_null(AnimatorSettings::default());
        assert_eq!(animator.frame(), FrameStatus::Continue);

        animator.teardown();
        assert_eq!(animator.frame(), FrameStatus::Stopped);
        assert_eq!(animator.renderer().renders, 1);
        assert!(animator.renderer().disposed);
        assert!(!animator.is_running());
    }

    #[test]
    fn test_add_asset_after_teardown_rejected() {
        let mut animator = mount_null(AnimatorSettings::default());
        animator.teardown();

        let model = Model::new("late", Vec::new(), Vec::new(), [1.0; 4]);
        assert!(animator.add_asset(model, 1.0, DriftBody::default()).is_none());
        assert_eq!(animator.renderer().live, 0);
    }

    #[test]
    fn test_teardown_releases_added_assets() {
        let mut animator = mount_null(AnimatorSettings::default());
        for _ in 0..3 {
            let model = Model::new("m", Vec::new(), Vec::new(), [1.0; 4]);
            animator.add_asset(model, 1.0, DriftBody::default());
        }
        assert_eq!(animator.renderer().live, 3);

        animator.teardown();
        assert_eq!(animator.renderer().live, 0);
        assert!(animator.scene().is_empty());
    }
}
