//! Lakebed terrain generation parameters.

use super::check_non_negative;
use crate::error::ConfigError;

/// Bounded random-walk lakebed parameters
#[derive(Debug, Clone)]
pub struct TerrainParams {
    /// Horizontal spacing between contour samples (pixels)
    pub step_px: f32,

    /// Extra width generated past the right edge of the viewport (pixels)
    pub overscan_px: f32,

    /// Cumulative walk offset is clamped to ±this around the floor row (pixels)
    pub jitter_band_px: f32,

    /// Largest per-step change of the walk offset (pixels)
    pub max_step_delta_px: f32,

    /// Chance that a sample carries a structure marker (0..=1)
    pub structure_probability: f64,

    /// Structure block width (pixels)
    pub structure_width_px: f32,

    /// Structure block height above the contour (pixels)
    pub structure_height_px: f32,

    /// RNG seed for the walk and structure placement
    pub seed: u64,
}

impl Default for TerrainParams {
    fn default() -> Self {
        Self {
            step_px: 20.0,
            overscan_px: 200.0,
            jitter_band_px: 10.0,
            max_step_delta_px: 1.0,
            structure_probability: 0.1,
            structure_width_px: 12.0,
            structure_height_px: 6.0,
            seed: 42,
        }
    }
}

impl TerrainParams {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.step_px > 0.0) || !self.step_px.is_finite() {
            return Err(ConfigError::NonPositiveStep(self.step_px));
        }
        if !(0.0..=1.0).contains(&self.structure_probability) {
            return Err(ConfigError::ProbabilityOutOfRange(
                self.structure_probability as f32,
            ));
        }
        check_non_negative("overscan_px", self.overscan_px)?;
        check_non_negative("jitter_band_px", self.jitter_band_px)?;
        check_non_negative("max_step_delta_px", self.max_step_delta_px)?;
        check_non_negative("structure_width_px", self.structure_width_px)?;
        check_non_negative("structure_height_px", self.structure_height_px)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_terrain_is_valid() {
        assert!(TerrainParams::default().validate().is_ok());
    }

    #[test]
    fn test_rejects_bad_step() {
        for step_px in [0.0, -5.0, f32::NAN, f32::INFINITY] {
            let params = TerrainParams {
                step_px,
                ..TerrainParams::default()
            };
            assert!(
                matches!(params.validate(), Err(ConfigError::NonPositiveStep(_))),
                "step {} accepted",
                step_px
            );
        }
    }

    #[test]
    fn test_rejects_probability_outside_unit_range() {
        for structure_probability in [1.5, -0.1, f64::NAN] {
            let params = TerrainParams {
                structure_probability,
                ..TerrainParams::default()
            };
            assert!(matches!(
                params.validate(),
                Err(ConfigError::ProbabilityOutOfRange(_))
            ));
        }
    }

    #[test]
    fn test_rejects_negative_and_non_finite_extents() {
        let params = TerrainParams {
            jitter_band_px: -1.0,
            ..TerrainParams::default()
        };
        assert_eq!(
            params.validate(),
            Err(ConfigError::Negative {
                name: "jitter_band_px",
                value: -1.0
            })
        );

        let params = TerrainParams {
            max_step_delta_px: f32::INFINITY,
            ..TerrainParams::default()
        };
        assert!(matches!(
            params.validate(),
            Err(ConfigError::NotFinite {
                name: "max_step_delta_px",
                ..
            })
        ));

        let params = TerrainParams {
            overscan_px: f32::INFINITY,
            ..TerrainParams::default()
        };
        assert!(matches!(
            params.validate(),
            Err(ConfigError::NotFinite {
                name: "overscan_px",
                ..
            })
        ));

        let params = TerrainParams {
            structure_height_px: f32::NAN,
            ..TerrainParams::default()
        };
        assert!(matches!(
            params.validate(),
            Err(ConfigError::NotFinite { .. })
        ));
    }
}
