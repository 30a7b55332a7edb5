//! Application configuration
//!
//! Configuration is loaded from multiple sources with the following priority (lowest to highest):
//! 1. `config/default.toml` (version controlled)
//! 2. `config/user.toml` (gitignored, user overrides)
//! 3. Environment variables (`BACKDROP_SECTION__KEY`)

use backdrop_core::{
    AmbientLight, AnimatorSettings, AssetSource, DirectionalLight, DriftBounds, Lighting,
    PerspectiveCamera, ScatterSettings, Vec3, DEFAULT_BASE_COLOR,
};
use backdrop_render::RendererSettings;
use figment::{Figment, providers::{Format, Toml, Env}};
use serde::{Serialize, Deserialize};
use std::path::{Path, PathBuf};

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Window configuration
    #[serde(default)]
    pub window: WindowConfig,
    /// Camera configuration
    #[serde(default)]
    pub camera: CameraConfig,
    /// Lighting configuration
    #[serde(default)]
    pub lighting: LightingConfig,
    /// Drift motion configuration
    #[serde(default)]
    pub drift: DriftConfig,
    /// Asset configuration
    #[serde(default)]
    pub assets: AssetsConfig,
    /// Rendering configuration
    #[serde(default)]
    pub rendering: RenderingConfig,
    /// Debug configuration
    #[serde(default)]
    pub debug: DebugConfig,
}

impl AppConfig {
    /// Load configuration from default locations
    ///
    /// Priority (lowest to highest):
    /// 1. `config/default.toml`
    /// 2. `config/user.toml`
    /// 3. Environment variables (`BACKDROP_*`)
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from("config")
    }

    /// Load configuration from a specific config directory
    pub fn load_from<P: AsRef<Path>>(config_dir: P) -> Result<Self, ConfigError> {
        let config_dir = config_dir.as_ref();
        let default_path = config_dir.join("default.toml");
        let user_path = config_dir.join("user.toml");

        let mut figment = Figment::new();

        if default_path.exists() {
            figment = figment.merge(Toml::file(&default_path));
        }

        // Load user config (optional)
        if user_path.exists() {
            figment = figment.merge(Toml::file(&user_path));
        }

        // Environment variables override everything
        // BACKDROP_WINDOW__TITLE=Test -> window.title = "Test"
        figment = figment.merge(Env::prefixed("BACKDROP_").split("__"));

        figment.extract().map_err(ConfigError::from)
    }

    /// Animator settings for the given asset sources
    pub fn animator_settings(&self, sources: Vec<AssetSource>) -> AnimatorSettings {
        AnimatorSettings {
            camera: self.camera.to_camera(),
            lighting: self.lighting.to_lighting(),
            bounds: DriftBounds::from_array(self.drift.bounds),
            scatter: ScatterSettings {
                spawn_extent: self.drift.spawn_extent,
                max_linear_speed: self.drift.max_linear_speed,
                max_angular_speed: self.drift.max_angular_speed,
            },
            seed: self.drift.seed,
            sources,
        }
    }

    /// Renderer settings
    pub fn renderer_settings(&self) -> RendererSettings {
        RendererSettings {
            vsync: self.window.vsync,
            clear_color: self.rendering.background_color,
        }
    }
}

/// Window configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    /// Window title
    pub title: String,
    /// Window width in pixels
    pub width: u32,
    /// Window height in pixels
    pub height: u32,
    /// Start in fullscreen mode
    pub fullscreen: bool,
    /// Enable VSync
    pub vsync: bool,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "Backdrop".to_string(),
            width: 1280,
            height: 720,
            fullscreen: false,
            vsync: true,
        }
    }
}

/// Camera configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraConfig {
    /// Vertical field of view in degrees
    pub fov: f32,
    /// Near clipping plane
    pub near: f32,
    /// Far clipping plane
    pub far: f32,
    /// Distance from the origin along +Z
    pub distance: f32,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            fov: 75.0,
            near: 0.1,
            far: 1000.0,
            distance: 30.0,
        }
    }
}

impl CameraConfig {
    /// Camera with a placeholder aspect; mounting sets the real one
    pub fn to_camera(&self) -> PerspectiveCamera {
        PerspectiveCamera::new(self.fov, 1.0, self.near, self.far, self.distance)
    }
}

/// Lighting configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LightingConfig {
    /// Ambient light color [r, g, b]
    pub ambient_color: [f32; 3],
    pub ambient_intensity: f32,
    /// Directional light color [r, g, b]
    pub directional_color: [f32; 3],
    pub directional_intensity: f32,
    /// The directional light shines from here towards the origin
    pub directional_position: [f32; 3],
}

impl Default for LightingConfig {
    fn default() -> Self {
        Self {
            ambient_color: [1.0, 1.0, 1.0],
            ambient_intensity: 0.6,
            directional_color: [1.0, 1.0, 1.0],
            directional_intensity: 1.0,
            directional_position: [5.0, 10.0, 7.5],
        }
    }
}

impl LightingConfig {
    pub fn to_lighting(&self) -> Lighting {
        Lighting {
            ambient: AmbientLight {
                color: self.ambient_color,
                intensity: self.ambient_intensity,
            },
            directional: DirectionalLight {
                color: self.directional_color,
                intensity: self.directional_intensity,
                position: Vec3::from_array(self.directional_position),
            },
        }
    }
}

/// Drift motion configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DriftConfig {
    /// Half-size of the cube new assets are placed in
    pub spawn_extent: f32,
    /// Largest per-axis speed, units per frame
    pub max_linear_speed: f32,
    /// Largest per-axis spin, radians per frame
    pub max_angular_speed: f32,
    /// Reflection thresholds [x, y, z]; zero or negative leaves an axis unbounded
    pub bounds: [f32; 3],
    /// Fixed seed for a reproducible layout
    pub seed: Option<u64>,
}

impl Default for DriftConfig {
    fn default() -> Self {
        Self {
            spawn_extent: 12.5,
            max_linear_speed: 0.005,
            max_angular_speed: 0.005,
            bounds: [20.0, 15.0, 15.0],
            seed: None,
        }
    }
}

/// Asset configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AssetsConfig {
    /// RON manifest listing the models to load
    pub manifest: PathBuf,
    /// Base color for models without a material [r, g, b, a]
    pub default_color: [f32; 4],
}

impl Default for AssetsConfig {
    fn default() -> Self {
        Self {
            manifest: PathBuf::from("assets/manifest.ron"),
            default_color: DEFAULT_BASE_COLOR,
        }
    }
}

/// Rendering configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderingConfig {
    /// Background color [r, g, b, a]
    pub background_color: [f32; 4],
}

impl Default for RenderingConfig {
    fn default() -> Self {
        Self {
            background_color: [0.02, 0.02, 0.05, 1.0],
        }
    }
}

/// Debug configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DebugConfig {
    /// Log level (error, warn, info, debug, trace)
    pub log_level: String,
    /// Seconds between frame statistics log lines
    pub stats_interval_secs: f32,
}

impl Default for DebugConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            stats_interval_secs: 5.0,
        }
    }
}

/// Configuration error
#[derive(Debug)]
pub struct ConfigError {
    message: String,
}

impl From<figment::Error> for ConfigError {
    fn from(e: figment::Error) -> Self {
        ConfigError {
            message: e.to_string(),
        }
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Configuration error: {}", self.message)
    }
}

impl std::error::Error for ConfigError {}
