//! Depth-labelled tick marks along the left edge.

use crate::depth::DepthConverter;
use crate::params::DepthScale;

/// A tick mark at a fixed depth
#[derive(Debug, Clone, PartialEq)]
pub struct DepthMarker {
    pub depth_ft: f32,
    /// Pixel row at the time the marker was built
    pub y: f32,
    pub label: String,
}

/// Build markers for the current mapping.
///
/// Starts at the configured interval and doubles it until neighbours are at
/// least `min_marker_spacing_px` apart, so shorter viewports get fewer marks.
/// The surface itself (0 ft) is not marked, and marks are never closer than
/// one pixel row.
pub fn build_markers(converter: &DepthConverter, scale: &DepthScale) -> Vec<DepthMarker> {
    let ppf = converter.pixels_per_foot();
    let min_spacing = scale.min_marker_spacing_px.max(1.0);
    let mut interval = scale.marker_interval_ft;
    while interval * ppf < min_spacing && interval < converter.max_depth() {
        interval *= 2.0;
    }

    let max_depth = converter.max_depth();
    (1..)
        .map(|k| k as f32 * interval)
        .take_while(|depth| *depth <= max_depth + 1e-3)
        .map(|depth_ft| DepthMarker {
            depth_ft,
            y: converter.depth_to_y(depth_ft),
            label: format_depth(depth_ft),
        })
        .collect()
}

fn format_depth(depth_ft: f32) -> String {
    if (depth_ft - depth_ft.round()).abs() < 1e-3 {
        format!("{:.0} ft", depth_ft)
    } else {
        format!("{:.1} ft", depth_ft)
    }
}
