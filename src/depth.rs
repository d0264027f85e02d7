//! Depth ↔ screen-row mapping shared by the renderer and its collaborators.
//!
//! A single linear map from feet below the ice to pixel rows. Fish placement,
//! depth markers and the HUD readout all go through the same instance so that
//! everything lines up with the rendered lakebed.

use crate::error::ConfigError;
use crate::params::DepthScale;

/// Linear mapping between depth (feet) and a vertical pixel coordinate
#[derive(Debug, Clone, PartialEq)]
pub struct DepthConverter {
    surface_y: f32,
    water_floor_y: f32,
    max_depth: f32,
    top_margin: f32,
    bottom_margin: f32,
}

impl DepthConverter {
    /// Create a converter with the default 40px margins
    pub fn new(viewport_height: f32, max_depth_ft: f32) -> Result<Self, ConfigError> {
        let scale = DepthScale::default();
        Self::with_margins(
            viewport_height,
            max_depth_ft,
            scale.top_margin_px,
            scale.bottom_margin_px,
        )
    }

    /// Create a converter from a depth scale configuration
    pub fn from_scale(viewport_height: f32, scale: &DepthScale) -> Result<Self, ConfigError> {
        Self::with_margins(
            viewport_height,
            scale.max_depth_ft,
            scale.top_margin_px,
            scale.bottom_margin_px,
        )
    }

    /// Create a converter with explicit margins (pixels)
    pub fn with_margins(
        viewport_height: f32,
        max_depth_ft: f32,
        top_margin: f32,
        bottom_margin: f32,
    ) -> Result<Self, ConfigError> {
        let (surface_y, water_floor_y) =
            Self::extents(viewport_height, max_depth_ft, top_margin, bottom_margin)?;
        Ok(Self {
            surface_y,
            water_floor_y,
            max_depth: max_depth_ft,
            top_margin,
            bottom_margin,
        })
    }

    fn extents(
        height: f32,
        max_depth: f32,
        top: f32,
        bottom: f32,
    ) -> Result<(f32, f32), ConfigError> {
        if !(max_depth > 0.0) || !max_depth.is_finite() {
            return Err(ConfigError::NonPositiveMaxDepth(max_depth));
        }
        if !(height > 0.0) {
            return Err(ConfigError::NonPositiveHeight(height));
        }
        let surface_y = top;
        let water_floor_y = height - bottom;
        if !(surface_y < water_floor_y) {
            return Err(ConfigError::ViewportTooShort {
                height,
                top,
                bottom,
            });
        }
        Ok((surface_y, water_floor_y))
    }

    /// Pixel row for a depth in feet.
    ///
    /// Not clamped: depths above the surface or past `max_depth` extrapolate
    /// along the same line, which off-screen wave math relies on.
    pub fn depth_to_y(&self, depth_ft: f32) -> f32 {
        self.surface_y + (self.water_floor_y - self.surface_y) * (depth_ft / self.max_depth)
    }

    /// Depth in feet for a pixel row (inverse of `depth_to_y`, also unclamped)
    pub fn y_to_depth(&self, y: f32) -> f32 {
        (y - self.surface_y) / (self.water_floor_y - self.surface_y) * self.max_depth
    }

    /// Recompute extents for a new viewport height and max depth.
    ///
    /// Margins are the ones given at construction. On error the converter is
    /// left untouched. Positions computed before a successful resize are stale.
    pub fn resize(&mut self, new_height: f32, max_depth_ft: f32) -> Result<(), ConfigError> {
        let (surface_y, water_floor_y) =
            Self::extents(new_height, max_depth_ft, self.top_margin, self.bottom_margin)?;
        self.surface_y = surface_y;
        self.water_floor_y = water_floor_y;
        self.max_depth = max_depth_ft;
        Ok(())
    }

    /// Pixel row of the ice/water line (0 ft)
    pub fn surface_y(&self) -> f32 {
        self.surface_y
    }

    /// Pixel row of `max_depth`
    pub fn water_floor_y(&self) -> f32 {
        self.water_floor_y
    }

    pub fn max_depth(&self) -> f32 {
        self.max_depth
    }

    pub fn pixels_per_foot(&self) -> f32 {
        (self.water_floor_y - self.surface_y) / self.max_depth
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_mapping() {
        // 600px viewport with 40px margins: surface at 40, floor at 560
        let converter = DepthConverter::new(600.0, 100.0).unwrap();
        assert_eq!(converter.surface_y(), 40.0);
        assert_eq!(converter.water_floor_y(), 560.0);
        assert_eq!(converter.depth_to_y(50.0), 300.0);
    }

    #[test]
    fn test_endpoints_exact() {
        for (height, max_depth) in [(600.0, 100.0), (733.0, 47.5), (1080.0, 250.0)] {
            let converter = DepthConverter::new(height, max_depth).unwrap();
            assert_eq!(converter.depth_to_y(0.0), converter.surface_y());
            assert_eq!(converter.depth_to_y(max_depth), converter.water_floor_y());
        }
    }

    #[test]
    fn test_monotonic_over_domain() {
        let converter = DepthConverter::new(720.0, 80.0).unwrap();
        let mut last = converter.depth_to_y(0.0);
        for i in 1..=800 {
            let y = converter.depth_to_y(i as f32 * 0.1);
            assert!(y >= last, "depth_to_y decreased at {} ft", i as f32 * 0.1);
            last = y;
        }
    }

    #[test]
    fn test_out_of_range_not_clamped() {
        let converter = DepthConverter::new(600.0, 100.0).unwrap();
        assert!(converter.depth_to_y(-5.0) < converter.surface_y());
        assert!(converter.depth_to_y(110.0) > converter.water_floor_y());
        assert!((converter.depth_to_y(-5.0) - 14.0).abs() < 1e-4);
    }

    #[test]
    fn test_y_to_depth_inverts_depth_to_y() {
        let converter = DepthConverter::new(900.0, 60.0).unwrap();
        for depth in [0.0, 7.5, 30.0, 59.9, 60.0, 75.0] {
            let back = converter.y_to_depth(converter.depth_to_y(depth));
            assert!((back - depth).abs() < 1e-3, "{} -> {}", depth, back);
        }
    }

    #[test]
    fn test_resize_idempotent() {
        let mut converter = DepthConverter::new(600.0, 100.0).unwrap();
        converter.resize(900.0, 120.0).unwrap();
        let first = converter.clone();
        converter.resize(900.0, 120.0).unwrap();
        assert_eq!(converter, first);
        assert_eq!(converter.water_floor_y(), 860.0);
        assert_eq!(converter.max_depth(), 120.0);
    }

    #[test]
    fn test_resize_keeps_construction_margins() {
        let mut converter = DepthConverter::with_margins(600.0, 100.0, 60.0, 20.0).unwrap();
        converter.resize(400.0, 100.0).unwrap();
        assert_eq!(converter.surface_y(), 60.0);
        assert_eq!(converter.water_floor_y(), 380.0);
    }

    #[test]
    fn test_rejects_bad_configuration() {
        assert_eq!(
            DepthConverter::new(600.0, 0.0),
            Err(ConfigError::NonPositiveMaxDepth(0.0))
        );
        assert_eq!(
            DepthConverter::new(600.0, -10.0),
            Err(ConfigError::NonPositiveMaxDepth(-10.0))
        );
        assert_eq!(
            DepthConverter::new(0.0, 100.0),
            Err(ConfigError::NonPositiveHeight(0.0))
        );
        assert!(matches!(
            DepthConverter::new(80.0, 100.0),
            Err(ConfigError::ViewportTooShort { .. })
        ));
    }

    #[test]
    fn test_failed_resize_is_noop() {
        let mut converter = DepthConverter::new(600.0, 100.0).unwrap();
        let before = converter.clone();
        assert!(converter.resize(-1.0, 100.0).is_err());
        assert!(converter.resize(600.0, 0.0).is_err());
        assert!(converter.resize(600.0, f32::INFINITY).is_err());
        assert_eq!(converter, before);
    }
}
