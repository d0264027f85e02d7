//! Two-tier water column renderer.
//!
//! The static layer (gradient, ice sheet, lakebed, depth markers) is drawn once
//! per resize epoch into a cached surface. The dynamic layer (thermocline
//! waves, ice line) is cleared and redrawn on every tick. A resize updates the
//! converter first, then regenerates everything baked from it, so the two
//! layers always agree on where the floor is.

mod dynamic_pass;
mod markers;
mod static_pass;

// Re-export public types
pub use dynamic_pass::DynamicFrame;
pub use markers::{build_markers, DepthMarker};

use log::{debug, warn};

use crate::depth::DepthConverter;
use crate::draw::{Color, Surface};
use crate::error::{ConfigError, RenderError};
use crate::noise::FrostNoise;
use crate::params::{SceneParams, ThermoclineLayer};
use crate::raster::RasterSurface;
use crate::terrain::{TerrainGenerator, TerrainProfile};

use static_pass::StaticScene;

/// Owns the depth mapping, the generated lakebed and both render layers.
///
/// Collaborators read placements through `converter()`; only `resize` and
/// `set_max_depth` change the mapping.
pub struct WaterColumnRenderer<S: Surface = RasterSurface> {
    params: SceneParams,
    width: u32,
    height: u32,
    converter: DepthConverter,
    terrain: TerrainGenerator,
    profile: TerrainProfile,
    markers: Vec<DepthMarker>,
    frost_noise: FrostNoise,
    static_layer: S,
    dynamic_layer: S,
    static_builds: u64,
}

impl<S: Surface> WaterColumnRenderer<S> {
    /// Build the scene for an initial viewport.
    ///
    /// Configuration errors and surface allocation failures are fatal here.
    pub fn new(params: SceneParams, width: u32, height: u32) -> Result<Self, RenderError> {
        params.validate()?;
        if width == 0 {
            return Err(ConfigError::ZeroWidth.into());
        }

        let converter = DepthConverter::from_scale(height as f32, &params.depth)?;
        let static_layer = S::allocate(width, height)?;
        let dynamic_layer = S::allocate(width, height)?;

        let mut terrain = TerrainGenerator::new(params.terrain.clone())?;
        let profile = terrain.generate(width as f32, converter.water_floor_y());
        let markers = build_markers(&converter, &params.depth);
        let frost_noise = FrostNoise::new(params.frost.seed);

        let mut renderer = Self {
            params,
            width,
            height,
            converter,
            terrain,
            profile,
            markers,
            frost_noise,
            static_layer,
            dynamic_layer,
            static_builds: 0,
        };
        renderer.rebuild_static_layer();
        Ok(renderer)
    }

    /// Handle a viewport resize.
    ///
    /// Invalid extents leave every piece of state untouched, log a warning and
    /// return the error.
    pub fn resize(&mut self, width: u32, height: u32) -> Result<(), RenderError> {
        let max_depth = self.converter.max_depth();
        self.reconfigure(width, height, max_depth)
    }

    /// Change the deepest depth shown (e.g. switching lakes) for the current viewport
    pub fn set_max_depth(&mut self, max_depth_ft: f32) -> Result<(), RenderError> {
        self.reconfigure(self.width, self.height, max_depth_ft)
    }

    fn reconfigure(&mut self, width: u32, height: u32, max_depth: f32) -> Result<(), RenderError> {
        self.try_reconfigure(width, height, max_depth)
            .inspect_err(|e| warn!("Ignoring resize to {}x{}: {}", width, height, e))
    }

    fn try_reconfigure(
        &mut self,
        width: u32,
        height: u32,
        max_depth: f32,
    ) -> Result<(), RenderError> {
        // Everything fallible happens before the first mutation
        if width == 0 {
            return Err(ConfigError::ZeroWidth.into());
        }
        let mut converter = self.converter.clone();
        converter.resize(height as f32, max_depth)?;
        let layers = if (width, height) != (self.width, self.height) {
            Some((S::allocate(width, height)?, S::allocate(width, height)?))
        } else {
            None
        };

        // 1. Viewport extents (and matching surfaces)
        self.width = width;
        self.height = height;
        if let Some((static_layer, dynamic_layer)) = layers {
            self.static_layer = static_layer;
            self.dynamic_layer = dynamic_layer;
        }

        // 2. Depth mapping
        self.converter = converter;

        // 3. Lakebed, replaced wholesale
        self.profile = self
            .terrain
            .generate(width as f32, self.converter.water_floor_y());

        // 4. Markers are recreated, not moved: their count depends on extents
        self.markers = build_markers(&self.converter, &self.params.depth);

        // 5. Cache
        self.rebuild_static_layer();
        Ok(())
    }

    fn rebuild_static_layer(&mut self) {
        let commands = StaticScene {
            width: self.width as f32,
            height: self.height as f32,
            converter: &self.converter,
            profile: &self.profile,
            markers: &self.markers,
            palette: &self.params.palette,
            terrain: &self.params.terrain,
            frost: &self.params.frost,
            frost_noise: &self.frost_noise,
        }
        .commands();

        self.static_layer.clear(self.params.palette.deep_color);
        self.static_layer.draw_all(commands);
        self.static_builds += 1;

        debug!(
            "Static layer rebuilt ({}x{}, {} terrain samples, {} markers, build #{})",
            self.width,
            self.height,
            self.profile.len(),
            self.markers.len(),
            self.static_builds
        );
    }

    /// Animated content for time `time_s` (seconds since scene start)
    pub fn dynamic_frame(&self, time_s: f32) -> DynamicFrame<'_> {
        DynamicFrame::new(
            &self.converter,
            &self.params.thermoclines,
            &self.params.palette,
            &self.params.waves,
            self.width as f32,
            time_s,
        )
    }

    /// Clear and redraw the dynamic layer. The static layer is not touched.
    pub fn tick(&mut self, time_s: f32) {
        let frame = DynamicFrame::new(
            &self.converter,
            &self.params.thermoclines,
            &self.params.palette,
            &self.params.waves,
            self.width as f32,
            time_s,
        );
        self.dynamic_layer.clear(Color::ZERO);
        for command in frame.commands() {
            self.dynamic_layer.draw(&command);
        }
    }

    /// Composite static then dynamic layers into `target`
    pub fn compose_into(&self, target: &mut S) {
        target.blit(&self.static_layer);
        target.blit(&self.dynamic_layer);
    }

    pub fn converter(&self) -> &DepthConverter {
        &self.converter
    }

    pub fn profile(&self) -> &TerrainProfile {
        &self.profile
    }

    pub fn markers(&self) -> &[DepthMarker] {
        &self.markers
    }

    pub fn thermoclines(&self) -> &[ThermoclineLayer] {
        &self.params.thermoclines
    }

    pub fn params(&self) -> &SceneParams {
        &self.params
    }

    pub fn viewport(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    pub fn static_layer(&self) -> &S {
        &self.static_layer
    }

    pub fn dynamic_layer(&self) -> &S {
        &self.dynamic_layer
    }

    /// Number of static layer builds since construction (1 + successful resizes)
    pub fn static_builds(&self) -> u64 {
        self.static_builds
    }
}
