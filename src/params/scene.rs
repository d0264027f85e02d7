//! Scene look: colors, wave animation, thermocline layers.

use crate::draw::{rgb, rgba, Color};
use crate::error::ConfigError;

use super::{DepthScale, TerrainParams};

/// A temperature boundary drawn as a wavy horizontal line
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ThermoclineLayer {
    /// Depth of the layer (feet)
    pub depth_ft: f32,

    /// Line intensity (0..=1), scales alpha, width and wave amplitude
    pub strength: f32,
}

impl ThermoclineLayer {
    pub fn new(depth_ft: f32, strength: f32) -> Result<Self, ConfigError> {
        let layer = Self { depth_ft, strength };
        layer.validate()?;
        Ok(layer)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(0.0..=1.0).contains(&self.strength) {
            return Err(ConfigError::StrengthOutOfRange(self.strength));
        }
        Ok(())
    }
}

/// Scene colors (sRGB, straight alpha)
#[derive(Debug, Clone)]
pub struct Palette {
    /// Gradient color at the top of the viewport
    pub surface_color: Color,

    /// Gradient color at the bottom of the viewport
    pub deep_color: Color,

    /// Height of one gradient band (pixels)
    pub band_height_px: f32,

    pub ice_color: Color,
    pub frost_color: Color,
    pub ground_color: Color,
    pub contour_color: Color,
    pub structure_color: Color,
    pub marker_color: Color,
    pub thermocline_color: Color,
    pub surface_line_color: Color,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            surface_color: rgb(0x2a7fb8),
            deep_color: rgb(0x06192e),
            band_height_px: 10.0,
            ice_color: rgb(0xcfe4ef),
            frost_color: rgba(0xffffff, 0.55),
            ground_color: rgb(0x2b2118),
            contour_color: rgb(0x6b5238),
            structure_color: rgb(0x413b31),
            marker_color: rgba(0xffffff, 0.6),
            thermocline_color: rgb(0x9fd8ff),
            surface_line_color: rgb(0xeaf6ff),
        }
    }
}

/// Wave animation for the dynamic layer.
///
/// Spatial frequencies are radians per pixel, speeds radians per second.
#[derive(Debug, Clone)]
pub struct WaveParams {
    /// Horizontal distance between polyline points (pixels)
    pub sample_step_px: f32,

    // === Thermoclines ===
    pub thermocline_spatial_freq: f32,
    pub thermocline_speed: f32,
    /// Peak vertical displacement at strength 1.0 (pixels)
    pub thermocline_amplitude_px: f32,
    /// Alpha at strength 1.0
    pub thermocline_max_alpha: f32,
    /// Line width at strength 0.0; strength adds up to 1px more
    pub thermocline_base_width_px: f32,
    /// Layers weaker than this are not drawn
    pub min_visible_strength: f32,

    // === Ice / surface line ===
    pub ice_line_width_px: f32,
    /// Gap between the two fixed strokes (pixels)
    pub ice_double_gap_px: f32,
    pub ice_texture_spatial_freq: f32,
    pub ice_texture_speed: f32,
    pub ice_texture_amplitude_px: f32,
    /// Distance of the texture line below the surface row (pixels)
    pub ice_texture_offset_px: f32,
    pub ice_texture_width_px: f32,
    pub ice_texture_alpha: f32,
}

impl Default for WaveParams {
    fn default() -> Self {
        Self {
            sample_step_px: 8.0,

            thermocline_spatial_freq: 0.02,
            thermocline_speed: 1.2,
            thermocline_amplitude_px: 4.0,
            thermocline_max_alpha: 0.6,
            thermocline_base_width_px: 1.0,
            min_visible_strength: 0.05,

            ice_line_width_px: 2.0,
            ice_double_gap_px: 4.0,
            ice_texture_spatial_freq: 0.08,
            ice_texture_speed: 2.0,
            ice_texture_amplitude_px: 1.5,
            ice_texture_offset_px: 8.0,
            ice_texture_width_px: 1.0,
            ice_texture_alpha: 0.35,
        }
    }
}

/// Frost speckles on the ice sheet above the water line
#[derive(Debug, Clone)]
pub struct FrostParams {
    /// OpenSimplex seed
    pub seed: u32,

    /// Noise frequency (cycles per pixel)
    pub frequency: f64,

    /// Speckle drawn where noise exceeds this (-1..=1)
    pub threshold: f32,

    /// Speckle grid cell size (pixels)
    pub cell_px: f32,
}

impl Default for FrostParams {
    fn default() -> Self {
        Self {
            seed: 7,
            frequency: 0.09,
            threshold: 0.35,
            cell_px: 4.0,
        }
    }
}

/// Everything needed to build a water column scene
#[derive(Debug, Clone)]
pub struct SceneParams {
    pub depth: DepthScale,
    pub terrain: TerrainParams,
    pub palette: Palette,
    pub waves: WaveParams,
    pub frost: FrostParams,
    /// Fixed for the lifetime of the scene
    pub thermoclines: Vec<ThermoclineLayer>,
}

impl Default for SceneParams {
    fn default() -> Self {
        Self {
            depth: DepthScale::default(),
            terrain: TerrainParams::default(),
            palette: Palette::default(),
            waves: WaveParams::default(),
            frost: FrostParams::default(),
            thermoclines: vec![
                ThermoclineLayer {
                    depth_ft: 18.0,
                    strength: 0.7,
                },
                ThermoclineLayer {
                    depth_ft: 34.0,
                    strength: 0.45,
                },
                ThermoclineLayer {
                    depth_ft: 58.0,
                    strength: 0.25,
                },
            ],
        }
    }
}

impl SceneParams {
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.depth.validate()?;
        self.terrain.validate()?;
        if !(self.waves.sample_step_px > 0.0) {
            return Err(ConfigError::NonPositiveStep(self.waves.sample_step_px));
        }
        if !(self.palette.band_height_px > 0.0) {
            return Err(ConfigError::NonPositiveStep(self.palette.band_height_px));
        }
        if !(self.frost.cell_px > 0.0) {
            return Err(ConfigError::NonPositiveStep(self.frost.cell_px));
        }
        self.thermoclines.iter().try_for_each(|layer| layer.validate())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_scene_is_valid() {
        assert!(SceneParams::default().validate().is_ok());
    }

    #[test]
    fn test_thermocline_strength_range() {
        assert!(ThermoclineLayer::new(20.0, 0.0).is_ok());
        assert!(ThermoclineLayer::new(20.0, 1.0).is_ok());
        assert_eq!(
            ThermoclineLayer::new(20.0, 1.5),
            Err(ConfigError::StrengthOutOfRange(1.5))
        );
        assert!(ThermoclineLayer::new(20.0, -0.1).is_err());
    }

    #[test]
    fn test_scene_rejects_bad_thermocline() {
        let mut params = SceneParams::default();
        params.thermoclines.push(ThermoclineLayer {
            depth_ft: 40.0,
            strength: 2.0,
        });
        assert_eq!(
            params.validate(),
            Err(ConfigError::StrengthOutOfRange(2.0))
        );
    }
}
