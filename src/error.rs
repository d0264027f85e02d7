//! Error types for scene configuration and surface management.

use thiserror::Error;

/// Invalid scene configuration (rejected before any state changes)
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("Max depth must be > 0 ft, got {0}")]
    NonPositiveMaxDepth(f32),

    #[error("Viewport height must be > 0 px, got {0}")]
    NonPositiveHeight(f32),

    /// Height leaves no water column between the top and bottom margins
    #[error("Viewport height {height}px too short for margins ({top}px top, {bottom}px bottom)")]
    ViewportTooShort { height: f32, top: f32, bottom: f32 },

    #[error("Viewport width must be > 0 px")]
    ZeroWidth,

    #[error("Thermocline strength must be in [0, 1], got {0}")]
    StrengthOutOfRange(f32),

    #[error("Terrain step must be > 0 px, got {0}")]
    NonPositiveStep(f32),

    #[error("Structure probability must be in [0, 1], got {0}")]
    ProbabilityOutOfRange(f32),

    #[error("{name} must be >= 0, got {value}")]
    Negative { name: &'static str, value: f32 },

    #[error("{name} must be finite, got {value}")]
    NotFinite { name: &'static str, value: f32 },

    #[error("{name} must be > 0, got {value}")]
    NotPositive { name: &'static str, value: f32 },
}

/// Errors surfaced to the owning scene
#[derive(Error, Debug)]
pub enum RenderError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Offscreen surface could not be allocated. Fatal at initialization.
    #[error("Failed to allocate {width}x{height} surface: {reason}")]
    SurfaceAllocation {
        width: u32,
        height: u32,
        reason: String,
    },
}

impl RenderError {
    pub fn surface_allocation(width: u32, height: u32, reason: impl Into<String>) -> Self {
        Self::SurfaceAllocation {
            width,
            height,
            reason: reason.into(),
        }
    }
}

/// Window presentation setup failures
#[derive(Error, Debug)]
pub enum PresentError {
    #[error("Failed to create surface: {0}")]
    CreateSurface(#[from] wgpu::CreateSurfaceError),

    #[error("Failed to find suitable GPU adapter")]
    NoAdapter,

    #[error("Failed to request device: {0}")]
    RequestDevice(#[from] wgpu::RequestDeviceError),
}
