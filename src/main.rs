//! Backdrop - decorative 3D scene of drifting models
//!
//! Opens a window, loads the models listed in the asset manifest and lets
//! them drift and spin inside a bounded box until the window closes.

use std::sync::Arc;
use winit::{
    application::ApplicationHandler,
    event::{ElementState, WindowEvent},
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    keyboard::{KeyCode, PhysicalKey},
    window::WindowId,
};

use backdrop::config::AppConfig;
use backdrop::systems::{FrameClock, WindowSystem};
use backdrop_core::{Animator, AssetManifest, AssetSource, FrameStatus, ModelLoader, ObjLoader};
use backdrop_render::WgpuRenderer;

/// Main application state
struct App {
    /// Application configuration
    config: AppConfig,
    /// Models to load once the window exists
    sources: Vec<AssetSource>,
    model_loader: Arc<dyn ModelLoader>,
    window: Option<WindowSystem>,
    /// `None` before mount, after teardown, or when mounting was refused
    animator: Option<Animator<WgpuRenderer>>,
    clock: FrameClock,
}

impl App {
    fn new(config: AppConfig) -> Self {
        let sources = match AssetManifest::load(&config.assets.manifest) {
            Ok(manifest) => {
                log::info!(
                    "Asset manifest '{}' lists {} models",
                    config.assets.manifest.display(),
                    manifest.len()
                );
                manifest.assets
            }
            Err(e) => {
                log::warn!(
                    "Failed to load asset manifest '{}': {}. Starting with an empty scene.",
                    config.assets.manifest.display(),
                    e
                );
                Vec::new()
            }
        };

        let model_loader: Arc<dyn ModelLoader> =
            Arc::new(ObjLoader::new().with_default_color(config.assets.default_color));
        let clock = FrameClock::new(config.debug.stats_interval_secs);

        Self {
            config,
            sources,
            model_loader,
            window: None,
            animator: None,
            clock,
        }
    }

    /// Tear the animator down and leave the event loop
    fn shutdown(&mut self, event_loop: &ActiveEventLoop) {
        if let Some(mut animator) = self.animator.take() {
            animator.teardown();
        }
        event_loop.exit();
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let window = match WindowSystem::create(event_loop, &self.config.window) {
            Ok(window) => window,
            Err(e) => {
                log::error!("{}", e);
                event_loop.exit();
                return;
            }
        };

        let settings = self
            .config
            .animator_settings(std::mem::take(&mut self.sources));
        let renderer_settings = self.config.renderer_settings();
        let surface_window = Arc::clone(window.window());

        self.animator = Animator::mount(
            Some(window.mount_point()),
            settings,
            Arc::clone(&self.model_loader),
            |_mount| WgpuRenderer::new(surface_window, renderer_settings),
        );

        window.request_redraw();
        self.window = Some(window);
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::CloseRequested => {
                self.shutdown(event_loop);
            }

            WindowEvent::Resized(physical_size) => {
                if let Some(animator) = &mut self.animator {
                    animator.resize(physical_size.width, physical_size.height);
                }
            }

            WindowEvent::KeyboardInput { event, .. } => {
                if event.state != ElementState::Pressed {
                    return;
                }
                match event.physical_key {
                    PhysicalKey::Code(KeyCode::Escape) => self.shutdown(event_loop),
                    PhysicalKey::Code(KeyCode::KeyF) => {
                        if let Some(window) = &self.window {
                            window.toggle_fullscreen();
                        }
                    }
                    _ => {}
                }
            }

            WindowEvent::RedrawRequested => {
                let Some(animator) = &mut self.animator else {
                    return;
                };

                // Only schedule the next frame while the animator keeps running
                if animator.frame() == FrameStatus::Continue {
                    self.clock.tick_and_log(animator.scene().asset_count());
                    if let Some(window) = &self.window {
                        window.request_redraw();
                    }
                }
            }

            _ => {}
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let (config, config_error) = match AppConfig::load() {
        Ok(config) => (config, None),
        Err(e) => (AppConfig::default(), Some(e)),
    };

    // RUST_LOG still wins over the configured level
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(config.debug.log_level.as_str()),
    )
    .init();
    if let Some(e) = config_error {
        log::warn!("Failed to load config: {}. Using defaults.", e);
    }
    log::info!("Starting Backdrop");

    let event_loop = EventLoop::new()?;
    event_loop.set_control_flow(ControlFlow::Wait);

    let mut app = App::new(config);
    event_loop.run_app(&mut app)?;
    Ok(())
}
