//! Lakeline - under-ice water column for an ice-fishing game
//!
//! The lakebed and depth scale are drawn once per viewport; thermoclines
//! and the ice edge animate on top every frame.

use std::sync::Arc;
use std::time::Instant;

use clap::Parser;
use log::{error, info, warn};
use winit::{
    application::ApplicationHandler,
    event::*,
    event_loop::EventLoop,
    keyboard::{KeyCode, PhysicalKey},
    window::{Window, WindowId},
};

use lakeline::cli::Args;
use lakeline::draw::Surface;
use lakeline::params::{RenderConfig, SceneParams};
use lakeline::raster::RasterSurface;
use lakeline::recording;
use lakeline::rendering::RenderSystem;
use lakeline::water_column::WaterColumnRenderer;

/// Main application state
struct App {
    // Window and presentation
    window: Option<Arc<Window>>,
    render_system: Option<RenderSystem>,

    // Scene
    scene_params: SceneParams,
    scene: Option<WaterColumnRenderer>,
    frame: Option<RasterSurface>,

    // Configuration
    render_config: RenderConfig,

    // Time tracking
    start_time: Instant,
}

impl App {
    fn new(scene_params: SceneParams, render_config: RenderConfig) -> Self {
        Self {
            window: None,
            render_system: None,
            scene_params,
            scene: None,
            frame: None,
            render_config,
            start_time: Instant::now(),
        }
    }
}

impl ApplicationHandler for App {
    fn about_to_wait(&mut self, _event_loop: &winit::event_loop::ActiveEventLoop) {
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }

    fn resumed(&mut self, event_loop: &winit::event_loop::ActiveEventLoop) {
        if self.window.is_some() {
            return; // Already initialized
        }

        let window_attributes = Window::default_attributes()
            .with_title(self.render_config.title.clone())
            .with_inner_size(winit::dpi::PhysicalSize::new(
                self.render_config.window_width,
                self.render_config.window_height,
            ));

        let window = match event_loop.create_window(window_attributes) {
            Ok(window) => Arc::new(window),
            Err(e) => {
                error!("Failed to create window: {}", e);
                event_loop.exit();
                return;
            }
        };

        let render_system = match pollster::block_on(RenderSystem::new(Arc::clone(&window))) {
            Ok(render_system) => render_system,
            Err(e) => {
                error!("Failed to initialize rendering: {}", e);
                event_loop.exit();
                return;
            }
        };

        // The window manager may not honor the requested size
        let size = window.inner_size();
        let scene = WaterColumnRenderer::<RasterSurface>::new(
            self.scene_params.clone(),
            size.width,
            size.height,
        )
        .and_then(|scene| Ok((scene, RasterSurface::allocate(size.width, size.height)?)));
        let (scene, frame) = match scene {
            Ok(pair) => pair,
            Err(e) => {
                error!("Failed to build water column: {}", e);
                event_loop.exit();
                return;
            }
        };

        info!("Lakeline is running ({}x{})", size.width, size.height);
        info!("Press ESC to quit");

        self.window = Some(window);
        self.render_system = Some(render_system);
        self.scene = Some(scene);
        self.frame = Some(frame);
    }

    fn window_event(
        &mut self,
        event_loop: &winit::event_loop::ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested => event_loop.exit(),
            WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        state: ElementState::Pressed,
                        physical_key: PhysicalKey::Code(KeyCode::Escape),
                        ..
                    },
                ..
            } => event_loop.exit(),
            WindowEvent::Resized(size) => {
                self.handle_resize(size.width, size.height);
            }
            WindowEvent::CursorMoved { position, .. } => {
                self.show_depth_readout(position.x as f32, position.y as f32);
            }
            WindowEvent::RedrawRequested => {
                self.render_frame();
            }
            _ => {}
        }
    }
}

impl App {
    /// Resize the scene first, then the presenter and frame buffer to match
    fn handle_resize(&mut self, width: u32, height: u32) {
        // Minimized
        if width == 0 || height == 0 {
            return;
        }
        let Some(scene) = self.scene.as_mut() else {
            return;
        };
        if scene.resize(width, height).is_err() {
            // Renderer already logged and kept its previous state
            return;
        }

        match RasterSurface::allocate(width, height) {
            Ok(frame) => self.frame = Some(frame),
            Err(e) => {
                warn!("Keeping previous frame buffer: {}", e);
                return;
            }
        }
        if let Some(render_system) = self.render_system.as_mut() {
            render_system.resize(width, height);
        }
    }

    /// Show the depth under the cursor in the window title
    fn show_depth_readout(&self, x: f32, y: f32) {
        let (Some(window), Some(scene)) = (&self.window, &self.scene) else {
            return;
        };
        let converter = scene.converter();
        let readout = if y < converter.surface_y() {
            "ice".to_string()
        } else if y > scene.profile().floor_y_at(x) {
            "lakebed".to_string()
        } else {
            format!("{:.1} ft", converter.y_to_depth(y))
        };
        window.set_title(&format!("{} [{}]", self.render_config.title, readout));
    }

    /// Render a single frame
    fn render_frame(&mut self) {
        let (Some(render_system), Some(scene), Some(frame)) =
            (&self.render_system, &mut self.scene, &mut self.frame)
        else {
            return;
        };

        let time_s = self.start_time.elapsed().as_secs_f32();
        scene.tick(time_s);

        frame.clear(glam::Vec4::ZERO);
        scene.compose_into(frame);
        render_system.upload_frame(frame);

        match render_system.render() {
            Ok(()) => {}
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                render_system.reconfigure();
            }
            Err(e) => error!("Render error: {:?}", e),
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let args = Args::parse();
    let scene_params = args.scene_params();
    let render_config = args.render_config();

    if let Some(recording_config) = args.recording_config() {
        return recording::record(
            scene_params,
            render_config.window_width,
            render_config.window_height,
            &recording_config,
        );
    }

    let event_loop = EventLoop::new()?;
    let mut app = App::new(scene_params, render_config);
    event_loop.run_app(&mut app)?;

    Ok(())
}
