//! Procedural lakebed contour.
//!
//! The contour is a bounded random walk around the water floor row: each
//! sample nudges a running offset by at most `max_step_delta_px` and the
//! cumulative offset is clamped to `±jitter_band_px`. Structure markers
//! (rock piles, weed beds) are placed independently and never touch the walk.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::error::ConfigError;
use crate::params::TerrainParams;

/// What sits on the lakebed at a sample
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SampleKind {
    Normal,
    Structure,
}

/// One contour sample (pixels)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TerrainSample {
    pub x: f32,
    pub y: f32,
    pub kind: SampleKind,
}

/// Lakebed contour for one viewport size.
///
/// Replaced wholesale on regeneration; there is no way to patch it.
#[derive(Debug, Clone)]
pub struct TerrainProfile {
    samples: Vec<TerrainSample>,
    baseline_y: f32,
    step: f32,
}

impl TerrainProfile {
    pub fn samples(&self) -> &[TerrainSample] {
        &self.samples
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Floor row the walk wanders around
    pub fn baseline_y(&self) -> f32 {
        self.baseline_y
    }

    /// Horizontal spacing between samples (pixels)
    pub fn step(&self) -> f32 {
        self.step
    }

    /// Right-most x covered by the samples
    pub fn extent(&self) -> f32 {
        self.samples.len() as f32 * self.step
    }

    pub fn structures(&self) -> impl Iterator<Item = &TerrainSample> {
        self.samples
            .iter()
            .filter(|sample| sample.kind == SampleKind::Structure)
    }

    /// Contour row at any x, linearly interpolated between samples.
    ///
    /// Outside the sampled range the nearest end sample is used.
    pub fn floor_y_at(&self, x: f32) -> f32 {
        let (Some(first), Some(last)) = (self.samples.first(), self.samples.last()) else {
            return self.baseline_y;
        };
        if x <= first.x {
            return first.y;
        }
        if x >= last.x {
            return last.y;
        }

        let i = ((x - first.x) / self.step) as usize;
        let a = self.samples[i];
        let b = self.samples[(i + 1).min(self.samples.len() - 1)];
        let t = ((x - a.x) / self.step).clamp(0.0, 1.0);
        a.y + (b.y - a.y) * t
    }
}

/// Seeded generator for lakebed profiles.
///
/// Every call to `generate` draws new detail from the same stream, so a given
/// seed and sequence of viewport sizes always reproduces the same lakebeds.
pub struct TerrainGenerator {
    params: TerrainParams,
    rng: ChaCha8Rng,
}

impl TerrainGenerator {
    /// Rejects parameters the walk cannot sample from
    pub fn new(params: TerrainParams) -> Result<Self, ConfigError> {
        params.validate()?;
        let rng = ChaCha8Rng::seed_from_u64(params.seed);
        Ok(Self { params, rng })
    }

    pub fn params(&self) -> &TerrainParams {
        &self.params
    }

    /// Number of samples covering `[0, viewport_width + overscan)`
    pub fn sample_count(&self, viewport_width: f32) -> usize {
        let span = (viewport_width + self.params.overscan_px).max(0.0);
        (span / self.params.step_px).ceil() as usize
    }

    /// Generate a fresh contour around `baseline_y`
    pub fn generate(&mut self, viewport_width: f32, baseline_y: f32) -> TerrainProfile {
        let p = &self.params;
        let count = self.sample_count(viewport_width);
        let mut samples = Vec::with_capacity(count);

        // The walk accumulates across the whole profile and is never reset
        let mut offset = 0.0_f32;
        for i in 0..count {
            if p.max_step_delta_px > 0.0 {
                let delta = self
                    .rng
                    .gen_range(-p.max_step_delta_px..=p.max_step_delta_px);
                offset = (offset + delta).clamp(-p.jitter_band_px, p.jitter_band_px);
            }

            let kind = if self.rng.gen_bool(p.structure_probability) {
                SampleKind::Structure
            } else {
                SampleKind::Normal
            };

            samples.push(TerrainSample {
                x: i as f32 * p.step_px,
                y: baseline_y + offset,
                kind,
            });
        }

        TerrainProfile {
            samples,
            baseline_y,
            step: p.step_px,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn generator(seed: u64) -> TerrainGenerator {
        TerrainGenerator::new(TerrainParams {
            seed,
            ..TerrainParams::default()
        })
        .unwrap()
    }

    #[test]
    fn test_reference_sample_count() {
        // 800px + 200px overscan at a 20px step
        let mut terrain = generator(1);
        let profile = terrain.generate(800.0, 560.0);
        assert_eq!(profile.len(), 50);
        assert_eq!(profile.samples()[0].x, 0.0);
        assert_eq!(profile.samples()[49].x, 980.0);
        assert_eq!(profile.extent(), 1000.0);
    }

    #[test]
    fn test_samples_sorted_and_contiguous() {
        let mut terrain = generator(2);
        let profile = terrain.generate(1333.0, 400.0);
        assert_eq!(profile.len(), 77); // ceil(1533 / 20)
        for pair in profile.samples().windows(2) {
            assert_eq!(pair[1].x - pair[0].x, 20.0);
        }
    }

    #[test]
    fn test_walk_stays_in_band_with_bounded_steps() {
        let params = TerrainParams::default();
        for seed in 0..20 {
            let mut terrain = generator(seed);
            let profile = terrain.generate(1920.0, 700.0);

            for sample in profile.samples() {
                let offset = sample.y - 700.0;
                assert!(
                    offset.abs() <= params.jitter_band_px + 1e-3,
                    "seed {}: offset {} outside band",
                    seed,
                    offset
                );
            }
            // First sample moves at most one step from the baseline
            assert!((profile.samples()[0].y - 700.0).abs() <= params.max_step_delta_px + 1e-3);
            for pair in profile.samples().windows(2) {
                let jump = (pair[1].y - pair[0].y).abs();
                assert!(
                    jump <= params.max_step_delta_px + 1e-3,
                    "seed {}: jump {} between x={} and x={}",
                    seed,
                    jump,
                    pair[0].x,
                    pair[1].x
                );
            }
        }
    }

    #[test]
    fn test_structure_frequency() {
        let mut terrain = generator(1234);
        // 19800 + 200 overscan at 20px = 1000 samples
        let profile = terrain.generate(19_800.0, 500.0);
        assert_eq!(profile.len(), 1000);

        let structures = profile.structures().count();
        let ratio = structures as f64 / profile.len() as f64;
        assert!(
            (0.07..=0.13).contains(&ratio),
            "structure ratio {} too far from 0.10",
            ratio
        );
    }

    #[test]
    fn test_same_seed_reproduces_profile() {
        let a = generator(99).generate(640.0, 300.0);
        let b = generator(99).generate(640.0, 300.0);
        assert_eq!(a.samples(), b.samples());

        let c = generator(100).generate(640.0, 300.0);
        assert_ne!(a.samples(), c.samples());
    }

    #[test]
    fn test_regeneration_replaces_profile() {
        let mut terrain = generator(5);
        let narrow = terrain.generate(400.0, 300.0);
        let wide = terrain.generate(1200.0, 500.0);
        assert_eq!(narrow.len(), 30);
        assert_eq!(wide.len(), 70);
        assert_eq!(wide.baseline_y(), 500.0);
        assert!(wide.samples().iter().all(|s| (s.y - 500.0).abs() <= 10.0));
    }

    #[test]
    fn test_floor_y_at_interpolates() {
        let mut terrain = generator(8);
        let profile = terrain.generate(800.0, 560.0);
        let s = profile.samples();

        assert_eq!(profile.floor_y_at(s[3].x), s[3].y);
        let mid = profile.floor_y_at(s[3].x + 10.0);
        assert!((mid - (s[3].y + s[4].y) / 2.0).abs() < 1e-4);

        assert_eq!(profile.floor_y_at(-50.0), s[0].y);
        assert_eq!(profile.floor_y_at(5000.0), s[s.len() - 1].y);
    }

    #[test]
    fn test_flat_walk_when_delta_zero() {
        let mut terrain = TerrainGenerator::new(TerrainParams {
            max_step_delta_px: 0.0,
            ..TerrainParams::default()
        })
        .unwrap();
        let profile = terrain.generate(800.0, 560.0);
        assert!(profile.samples().iter().all(|s| s.y == 560.0));
    }

    #[test]
    fn test_new_rejects_invalid_params() {
        let result = TerrainGenerator::new(TerrainParams {
            structure_probability: 1.5,
            ..TerrainParams::default()
        });
        assert!(matches!(
            result,
            Err(ConfigError::ProbabilityOutOfRange(_))
        ));

        let result = TerrainGenerator::new(TerrainParams {
            step_px: 0.0,
            ..TerrainParams::default()
        });
        assert!(matches!(result, Err(ConfigError::NonPositiveStep(_))));

        let result = TerrainGenerator::new(TerrainParams {
            max_step_delta_px: f32::INFINITY,
            ..TerrainParams::default()
        });
        assert!(matches!(result, Err(ConfigError::NotFinite { .. })));
    }
}
