//! Depth scale configuration (feet ↔ pixels).

use super::{check_non_negative, check_positive};
use crate::error::ConfigError;

/// Vertical depth scale and depth-marker spacing
#[derive(Debug, Clone)]
pub struct DepthScale {
    /// Deepest depth shown on screen (feet), mapped to the water floor row
    pub max_depth_ft: f32,

    /// Pixels between the top of the viewport and the ice/water line
    pub top_margin_px: f32,

    /// Pixels between the water floor row and the bottom of the viewport
    pub bottom_margin_px: f32,

    /// Preferred spacing between depth markers (feet)
    pub marker_interval_ft: f32,

    /// Minimum on-screen gap between markers (pixels).
    /// The interval doubles until markers are at least this far apart.
    pub min_marker_spacing_px: f32,
}

impl Default for DepthScale {
    fn default() -> Self {
        Self {
            max_depth_ft: 100.0,
            top_margin_px: 40.0,
            bottom_margin_px: 40.0,
            marker_interval_ft: 10.0,
            min_marker_spacing_px: 24.0,
        }
    }
}

impl DepthScale {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.max_depth_ft > 0.0) || !self.max_depth_ft.is_finite() {
            return Err(ConfigError::NonPositiveMaxDepth(self.max_depth_ft));
        }
        check_non_negative("top_margin_px", self.top_margin_px)?;
        check_non_negative("bottom_margin_px", self.bottom_margin_px)?;
        // Bounds the marker count
        check_positive("min_marker_spacing_px", self.min_marker_spacing_px)?;
        check_positive("marker_interval_ft", self.marker_interval_ft)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_scale_is_valid() {
        assert!(DepthScale::default().validate().is_ok());
    }

    #[test]
    fn test_rejects_non_positive_max_depth() {
        let mut scale = DepthScale::default();
        scale.max_depth_ft = 0.0;
        assert_eq!(
            scale.validate(),
            Err(ConfigError::NonPositiveMaxDepth(0.0))
        );

        scale.max_depth_ft = f32::NAN;
        assert!(scale.validate().is_err());
    }

    #[test]
    fn test_rejects_infinite_values() {
        let mut scale = DepthScale::default();
        scale.max_depth_ft = f32::INFINITY;
        assert_eq!(
            scale.validate(),
            Err(ConfigError::NonPositiveMaxDepth(f32::INFINITY))
        );

        let mut scale = DepthScale::default();
        scale.bottom_margin_px = f32::INFINITY;
        assert!(matches!(
            scale.validate(),
            Err(ConfigError::NotFinite {
                name: "bottom_margin_px",
                ..
            })
        ));
    }

    #[test]
    fn test_rejects_zero_marker_spacing() {
        let mut scale = DepthScale::default();
        scale.min_marker_spacing_px = 0.0;
        assert_eq!(
            scale.validate(),
            Err(ConfigError::NotPositive {
                name: "min_marker_spacing_px",
                value: 0.0
            })
        );
    }
}
