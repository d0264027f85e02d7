//! Parameter definitions with physical units and documented semantics.
//!
//! All tuned constants live here with:
//! - Units (feet, pixels, radians, seconds)
//! - Documented ranges and meanings
//! - `validate()` where a bad value would produce a degenerate scene

mod depth;
mod render;
mod scene;
mod terrain;

// Re-export all types
pub use depth::DepthScale;
pub use render::{RecordingConfig, RenderConfig};
pub use scene::{FrostParams, Palette, SceneParams, ThermoclineLayer, WaveParams};
pub use terrain::TerrainParams;

use crate::error::ConfigError;

/// Finite and `>= 0`
pub(crate) fn check_non_negative(name: &'static str, value: f32) -> Result<(), ConfigError> {
    if !value.is_finite() {
        return Err(ConfigError::NotFinite { name, value });
    }
    if value < 0.0 {
        return Err(ConfigError::Negative { name, value });
    }
    Ok(())
}

/// Finite and `> 0`
pub(crate) fn check_positive(name: &'static str, value: f32) -> Result<(), ConfigError> {
    check_non_negative(name, value)?;
    if value == 0.0 {
        return Err(ConfigError::NotPositive { name, value });
    }
    Ok(())
}
