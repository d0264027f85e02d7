//! Command-line argument parsing.

use clap::Parser;

use crate::params::{RecordingConfig, RenderConfig, SceneParams};

/// Command line arguments
#[derive(Parser, Debug)]
#[command(name = "Lakeline")]
#[command(about = "Under-ice water column renderer", long_about = None)]
pub struct Args {
    /// Window / frame width (pixels)
    #[arg(long, value_name = "PIXELS", default_value = "800")]
    pub width: u32,

    /// Window / frame height (pixels)
    #[arg(long, value_name = "PIXELS", default_value = "600")]
    pub height: u32,

    /// Deepest depth shown (feet)
    #[arg(long, value_name = "FEET", default_value = "100")]
    pub max_depth: f32,

    /// Terrain seed
    #[arg(long, default_value = "42")]
    pub seed: u64,

    /// Render headless PNG frames instead of opening a window (duration in seconds)
    #[arg(long, value_name = "SECONDS")]
    pub record: Option<f32>,

    /// Recording frame rate
    #[arg(long, default_value = "30")]
    pub fps: u32,

    /// Recording output directory
    #[arg(long, value_name = "DIR", default_value = "recording")]
    pub output: String,
}

impl Args {
    /// Scene parameters with command-line overrides applied
    pub fn scene_params(&self) -> SceneParams {
        let mut params = SceneParams::default();
        params.depth.max_depth_ft = self.max_depth;
        params.terrain.seed = self.seed;
        params
    }

    pub fn render_config(&self) -> RenderConfig {
        RenderConfig {
            window_width: self.width,
            window_height: self.height,
            ..RenderConfig::default()
        }
    }

    /// Recording configuration if recording mode is enabled
    pub fn recording_config(&self) -> Option<RecordingConfig> {
        self.record.map(|duration| RecordingConfig {
            fps: self.fps,
            output_dir: self.output.clone(),
            ..RecordingConfig::new(duration)
        })
    }
}
