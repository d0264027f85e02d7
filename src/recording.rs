//! Headless recording: render the scene on a fixed clock and save PNG frames.

use log::info;

use crate::draw::Surface;
use crate::params::{RecordingConfig, SceneParams};
use crate::raster::RasterSurface;
use crate::water_column::WaterColumnRenderer;

/// Render `config.total_frames()` frames to `config.frames_dir()`
pub fn record(
    params: SceneParams,
    width: u32,
    height: u32,
    config: &RecordingConfig,
) -> Result<(), Box<dyn std::error::Error>> {
    std::fs::create_dir_all(config.frames_dir())?;

    let mut renderer: WaterColumnRenderer = WaterColumnRenderer::new(params, width, height)?;
    let total = config.total_frames();
    info!(
        "Recording {} frames at {} fps to {}",
        total,
        config.fps,
        config.frames_dir()
    );

    for frame_num in 0..total {
        renderer.tick(config.frame_time(frame_num));

        let mut frame = RasterSurface::allocate(width, height)?;
        renderer.compose_into(&mut frame);
        frame.save_png(&config.frame_path(frame_num))?;

        if frame_num % config.fps.max(1) as usize == 0 {
            info!("Frame {}/{}", frame_num, total);
        }
    }

    info!("Recording complete");
    Ok(())
}
