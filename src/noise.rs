//! Frost texture noise for the ice sheet.
//!
//! OpenSimplex gives smooth, blotchy patches which read as frost when
//! thresholded on a coarse grid.

use noise::{NoiseFn, OpenSimplex};

/// Seeded 2D noise field for frost speckles
pub struct FrostNoise {
    simplex: OpenSimplex,
}

impl FrostNoise {
    /// Create new noise field with seed
    pub fn new(seed: u32) -> Self {
        Self {
            simplex: OpenSimplex::new(seed),
        }
    }

    /// Sample 2D simplex noise at position
    ///
    /// Returns value in range [-1, 1]
    pub fn sample_2d(&self, x: f64, y: f64) -> f32 {
        self.simplex.get([x, y]) as f32
    }
}
