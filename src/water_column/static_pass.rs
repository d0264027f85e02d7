//! Static layer content: built once per resize epoch and cached.

use glam::Vec2;

use crate::depth::DepthConverter;
use crate::draw::{with_alpha, DrawCommand};
use crate::noise::FrostNoise;
use crate::params::{FrostParams, Palette, TerrainParams};
use crate::terrain::TerrainProfile;

use super::markers::DepthMarker;

/// Length of a depth marker tick (pixels)
const TICK_LENGTH_PX: f32 = 10.0;

/// Marker label font size (pixels)
const LABEL_SIZE_PX: f32 = 12.0;

/// Everything the static pass reads, borrowed from the renderer
pub struct StaticScene<'a> {
    pub width: f32,
    pub height: f32,
    pub converter: &'a DepthConverter,
    pub profile: &'a TerrainProfile,
    pub markers: &'a [DepthMarker],
    pub palette: &'a Palette,
    pub terrain: &'a TerrainParams,
    pub frost: &'a FrostParams,
    pub frost_noise: &'a FrostNoise,
}

impl StaticScene<'_> {
    /// All static draw commands, back to front
    pub fn commands(&self) -> Vec<DrawCommand> {
        let mut commands = Vec::new();
        self.gradient(&mut commands);
        self.ice_sheet(&mut commands);
        self.lakebed(&mut commands);
        self.depth_markers(&mut commands);
        commands
    }

    /// Surface-to-deep color bands over the full viewport height
    fn gradient(&self, out: &mut Vec<DrawCommand>) {
        let band = self.palette.band_height_px;
        let count = (self.height / band).ceil() as usize;
        for i in 0..count {
            let top = i as f32 * band;
            let t = ((top + band * 0.5) / self.height).clamp(0.0, 1.0);
            out.push(DrawCommand::FillRect {
                min: Vec2::new(0.0, top),
                size: Vec2::new(self.width, band.min(self.height - top)),
                color: self.palette.surface_color.lerp(self.palette.deep_color, t),
            });
        }
    }

    /// Ice above the water line with thresholded noise frost
    fn ice_sheet(&self, out: &mut Vec<DrawCommand>) {
        let surface_y = self.converter.surface_y();
        if surface_y <= 0.0 {
            return;
        }
        out.push(DrawCommand::FillRect {
            min: Vec2::ZERO,
            size: Vec2::new(self.width, surface_y),
            color: self.palette.ice_color,
        });

        let cell = self.frost.cell_px;
        let span = 1.0 - self.frost.threshold;
        let cols = (self.width / cell).ceil() as usize;
        let rows = (surface_y / cell).ceil() as usize;
        for row in 0..rows {
            for col in 0..cols {
                let (x, y) = (col as f32 * cell, row as f32 * cell);
                let n = self.frost_noise.sample_2d(
                    x as f64 * self.frost.frequency,
                    y as f64 * self.frost.frequency,
                );
                if n <= self.frost.threshold {
                    continue;
                }
                let strength = if span > 0.0 {
                    ((n - self.frost.threshold) / span).min(1.0)
                } else {
                    1.0
                };
                out.push(DrawCommand::FillRect {
                    min: Vec2::new(x, y),
                    size: Vec2::new(cell, cell.min(surface_y - y)),
                    color: with_alpha(
                        self.palette.frost_color,
                        self.palette.frost_color.w * strength,
                    ),
                });
            }
        }
    }

    /// Ground fill below the contour, the contour line, then structure blocks
    fn lakebed(&self, out: &mut Vec<DrawCommand>) {
        let samples = self.profile.samples();
        let (Some(first), Some(last)) = (samples.first(), samples.last()) else {
            return;
        };

        let contour: Vec<Vec2> = samples.iter().map(|s| Vec2::new(s.x, s.y)).collect();

        let mut ground = contour.clone();
        ground.push(Vec2::new(last.x, self.height));
        ground.push(Vec2::new(first.x, self.height));
        out.push(DrawCommand::FillPolygon {
            points: ground,
            color: self.palette.ground_color,
        });

        out.push(DrawCommand::StrokePath {
            points: contour,
            width: 2.0,
            color: self.palette.contour_color,
        });

        let (w, h) = (self.terrain.structure_width_px, self.terrain.structure_height_px);
        for structure in self.profile.structures() {
            out.push(DrawCommand::FillRect {
                min: Vec2::new(structure.x - w * 0.5, structure.y - h),
                size: Vec2::new(w, h),
                color: self.palette.structure_color,
            });
        }
    }

    fn depth_markers(&self, out: &mut Vec<DrawCommand>) {
        for marker in self.markers {
            out.push(DrawCommand::StrokePath {
                points: vec![
                    Vec2::new(0.0, marker.y),
                    Vec2::new(TICK_LENGTH_PX, marker.y),
                ],
                width: 1.0,
                color: self.palette.marker_color,
            });
            out.push(DrawCommand::Text {
                position: Vec2::new(TICK_LENGTH_PX + 4.0, marker.y - LABEL_SIZE_PX * 0.5),
                text: marker.label.clone(),
                size_px: LABEL_SIZE_PX,
                color: self.palette.marker_color,
            });
        }
    }
}
