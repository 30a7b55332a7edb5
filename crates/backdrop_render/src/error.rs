//! Render error types

/// Errors from GPU setup and frame rendering
#[derive(Debug)]
pub enum RenderError {
    /// Could not create a surface for the window
    CreateSurface(String),
    /// No adapter can present to the surface
    NoAdapter,
    /// The adapter refused to create a device
    RequestDevice(String),
    /// The surface supports no texture format
    UnsupportedSurface,
    /// Surface was lost or outdated (window resized, minimized, etc.)
    SurfaceLost,
    /// GPU out of memory
    OutOfMemory,
    /// The renderer was used after dispose
    Disposed,
    /// Other surface error
    Other(String),
}

impl std::fmt::Display for RenderError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RenderError::CreateSurface(msg) => write!(f, "Failed to create surface: {}", msg),
            RenderError::NoAdapter => write!(f, "No suitable GPU adapter found"),
            RenderError::RequestDevice(msg) => write!(f, "Failed to create device: {}", msg),
            RenderError::UnsupportedSurface => write!(f, "Surface has no supported format"),
            RenderError::SurfaceLost => write!(f, "Surface lost"),
            RenderError::OutOfMemory => write!(f, "Out of memory"),
            RenderError::Disposed => write!(f, "Renderer already disposed"),
            RenderError::Other(msg) => write!(f, "Render error: {}", msg),
        }
    }
}

impl std::error::Error for RenderError {}

impl From<wgpu::CreateSurfaceError> for RenderError {
    fn from(e: wgpu::CreateSurfaceError) -> Self {
        RenderError::CreateSurface(e.to_string())
    }
}

impl From<wgpu::RequestDeviceError> for RenderError {
    fn from(e: wgpu::RequestDeviceError) -> Self {
        RenderError::RequestDevice(e.to_string())
    }
}
