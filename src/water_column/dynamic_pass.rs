//! Per-frame animated content: thermocline waves and the ice line.
//!
//! Every wave is `sin(x * spatial_freq + time * speed)`, so the only state a
//! frame needs is the clock.

use glam::Vec2;

use crate::depth::DepthConverter;
use crate::draw::{with_alpha, DrawCommand};
use crate::params::{Palette, ThermoclineLayer, WaveParams};

#[derive(Debug, Clone, Copy)]
enum IceStroke {
    Upper,
    Lower,
    Texture,
}

const ICE_STROKES: [IceStroke; 3] = [IceStroke::Upper, IceStroke::Lower, IceStroke::Texture];

/// One tick of the dynamic layer, borrowed from the renderer
#[derive(Debug, Clone, Copy)]
pub struct DynamicFrame<'a> {
    converter: &'a DepthConverter,
    thermoclines: &'a [ThermoclineLayer],
    palette: &'a Palette,
    waves: &'a WaveParams,
    width: f32,
    time_s: f32,
}

impl<'a> DynamicFrame<'a> {
    pub(crate) fn new(
        converter: &'a DepthConverter,
        thermoclines: &'a [ThermoclineLayer],
        palette: &'a Palette,
        waves: &'a WaveParams,
        width: f32,
        time_s: f32,
    ) -> Self {
        Self {
            converter,
            thermoclines,
            palette,
            waves,
            width,
            time_s,
        }
    }

    pub fn time_s(&self) -> f32 {
        self.time_s
    }

    /// Draw commands for this tick.
    ///
    /// Lazy and finite; calling it again starts over with identical output.
    pub fn commands(&self) -> impl Iterator<Item = DrawCommand> + 'a {
        let frame = *self;
        let thermoclines = frame
            .thermoclines
            .iter()
            .filter_map(move |layer| frame.thermocline(layer));
        let ice = ICE_STROKES
            .into_iter()
            .map(move |stroke| frame.ice_stroke(stroke));
        thermoclines.chain(ice)
    }

    /// Animated row of a thermocline at horizontal position `x`
    pub fn thermocline_y(&self, layer: &ThermoclineLayer, x: f32) -> f32 {
        let w = self.waves;
        let amplitude = w.thermocline_amplitude_px * layer.strength;
        self.converter.depth_to_y(layer.depth_ft)
            + (x * w.thermocline_spatial_freq + self.time_s * w.thermocline_speed).sin() * amplitude
    }

    fn thermocline(&self, layer: &ThermoclineLayer) -> Option<DrawCommand> {
        let w = self.waves;
        if layer.strength < w.min_visible_strength {
            return None;
        }
        Some(DrawCommand::StrokePath {
            points: wave_points(self.width, w.sample_step_px, |x| self.thermocline_y(layer, x)),
            width: w.thermocline_base_width_px + layer.strength,
            color: with_alpha(
                self.palette.thermocline_color,
                w.thermocline_max_alpha * layer.strength,
            ),
        })
    }

    fn ice_stroke(&self, stroke: IceStroke) -> DrawCommand {
        let w = self.waves;
        let surface_y = self.converter.surface_y();
        let color = self.palette.surface_line_color;
        match stroke {
            IceStroke::Upper => {
                DrawCommand::hline(surface_y, self.width, w.ice_line_width_px, color)
            }
            IceStroke::Lower => DrawCommand::hline(
                surface_y + w.ice_double_gap_px,
                self.width,
                w.ice_line_width_px,
                color,
            ),
            IceStroke::Texture => {
                let base = surface_y + w.ice_texture_offset_px;
                let phase = self.time_s * w.ice_texture_speed;
                DrawCommand::StrokePath {
                    points: wave_points(self.width, w.sample_step_px, |x| {
                        base + (x * w.ice_texture_spatial_freq + phase).sin()
                            * w.ice_texture_amplitude_px
                    }),
                    width: w.ice_texture_width_px,
                    color: with_alpha(color, w.ice_texture_alpha),
                }
            }
        }
    }
}

/// Polyline from x=0 to x=width (inclusive) every `step` pixels
fn wave_points(width: f32, step: f32, y_at: impl Fn(f32) -> f32) -> Vec<Vec2> {
    let count = (width / step).ceil() as usize;
    (0..=count)
        .map(|i| {
            let x = (i as f32 * step).min(width);
            Vec2::new(x, y_at(x))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::SceneParams;

    fn points(command: &DrawCommand) -> &[Vec2] {
        match command {
            DrawCommand::StrokePath { points, .. } => points,
            other => panic!("expected a stroke, got {:?}", other),
        }
    }

    #[test]
    fn test_wave_points_cover_width() {
        let pts = wave_points(100.0, 8.0, |_| 5.0);
        assert_eq!(pts.len(), 14);
        assert_eq!(pts[0].x, 0.0);
        assert_eq!(pts[13].x, 100.0);
        assert!(pts.iter().all(|p| p.y == 5.0));
    }

    #[test]
    fn test_thermocline_anchored_to_depth_at_phase_zero() {
        let params = SceneParams::default();
        let converter = DepthConverter::new(600.0, 100.0).unwrap();
        let frame = DynamicFrame::new(
            &converter,
            &params.thermoclines,
            &params.palette,
            &params.waves,
            800.0,
            0.0,
        );

        let commands: Vec<_> = frame.commands().collect();
        // three thermoclines, then the double stroke and texture line
        assert_eq!(commands.len(), 6);
        for (command, layer) in commands.iter().zip(&params.thermoclines) {
            let first = points(command)[0];
            assert_eq!(first.x, 0.0);
            assert_eq!(first.y, converter.depth_to_y(layer.depth_ft));
        }
    }

    #[test]
    fn test_wave_amplitude_scales_with_strength() {
        let params = SceneParams::default();
        let converter = DepthConverter::new(600.0, 100.0).unwrap();
        let strong = ThermoclineLayer::new(30.0, 1.0).unwrap();
        let weak = ThermoclineLayer::new(30.0, 0.25).unwrap();
        let layers = [strong, weak];
        let frame = DynamicFrame::new(
            &converter,
            &layers,
            &params.palette,
            &params.waves,
            800.0,
            3.7,
        );

        let base = converter.depth_to_y(30.0);
        let spread = |layer: &ThermoclineLayer| {
            (0..800)
                .map(|x| (frame.thermocline_y(layer, x as f32) - base).abs())
                .fold(0.0_f32, f32::max)
        };
        let amp = params.waves.thermocline_amplitude_px;
        assert!(spread(&strong) <= amp + 1e-4);
        assert!(spread(&strong) > amp * 0.9);
        assert!(spread(&weak) <= amp * 0.25 + 1e-4);
    }

    #[test]
    fn test_faint_thermocline_hidden() {
        let params = SceneParams::default();
        let converter = DepthConverter::new(600.0, 100.0).unwrap();
        let layers = [ThermoclineLayer::new(30.0, 0.01).unwrap()];
        let frame = DynamicFrame::new(
            &converter,
            &layers,
            &params.palette,
            &params.waves,
            800.0,
            1.0,
        );
        // only the three ice-line strokes remain
        assert_eq!(frame.commands().count(), 3);
    }

    #[test]
    fn test_commands_restartable_and_time_driven() {
        let params = SceneParams::default();
        let converter = DepthConverter::new(600.0, 100.0).unwrap();
        let frame_at = |t| {
            DynamicFrame::new(
                &converter,
                &params.thermoclines,
                &params.palette,
                &params.waves,
                640.0,
                t,
            )
        };

        let frame = frame_at(2.0);
        let first: Vec<_> = frame.commands().collect();
        let second: Vec<_> = frame.commands().collect();
        assert_eq!(first, second);

        let later: Vec<_> = frame_at(2.5).commands().collect();
        assert_ne!(first, later);
    }

    #[test]
    fn test_ice_double_stroke_fixed() {
        let params = SceneParams::default();
        let converter = DepthConverter::new(600.0, 100.0).unwrap();
        let frame = DynamicFrame::new(&converter, &[], &params.palette, &params.waves, 800.0, 9.0);
        let commands: Vec<_> = frame.commands().collect();

        assert_eq!(
            commands[0],
            DrawCommand::hline(40.0, 800.0, 2.0, params.palette.surface_line_color)
        );
        assert_eq!(points(&commands[1])[0].y, 44.0);

        let texture = points(&commands[2]);
        let base = 40.0 + params.waves.ice_texture_offset_px;
        assert!(texture
            .iter()
            .all(|p| (p.y - base).abs() <= params.waves.ice_texture_amplitude_px + 1e-4));
    }
}
