//! Backend-neutral drawing primitives.
//!
//! The scene never talks to a graphics API directly. Both render passes emit
//! `DrawCommand`s and any `Surface` implementation can consume them: the CPU
//! raster surface, the wgpu presenter (through the raster surface), or a test
//! recorder.

use glam::{Vec2, Vec4};

use crate::error::RenderError;

/// sRGB color with straight alpha, components in 0..=1
pub type Color = Vec4;

/// Largest surface edge we agree to allocate (pixels)
pub const MAX_SURFACE_DIMENSION: u32 = 8192;

/// Opaque color from a 0xRRGGBB literal
pub fn rgb(hex: u32) -> Color {
    rgba(hex, 1.0)
}

/// Color from a 0xRRGGBB literal with explicit alpha
pub fn rgba(hex: u32, alpha: f32) -> Color {
    let r = ((hex >> 16) & 0xff) as f32 / 255.0;
    let g = ((hex >> 8) & 0xff) as f32 / 255.0;
    let b = (hex & 0xff) as f32 / 255.0;
    Vec4::new(r, g, b, alpha)
}

/// Same color, different alpha
pub fn with_alpha(color: Color, alpha: f32) -> Color {
    Vec4::new(color.x, color.y, color.z, alpha)
}

/// A single drawing instruction in pixel coordinates (y grows downward)
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    /// Axis-aligned filled rectangle
    FillRect { min: Vec2, size: Vec2, color: Color },

    /// Open polyline stroked with a constant width
    StrokePath {
        points: Vec<Vec2>,
        width: f32,
        color: Color,
    },

    /// Closed polygon filled with the even-odd rule
    FillPolygon { points: Vec<Vec2>, color: Color },

    /// Text label anchored at its top-left corner
    Text {
        position: Vec2,
        text: String,
        size_px: f32,
        color: Color,
    },
}

impl DrawCommand {
    /// Horizontal line from x=0 to x=width
    pub fn hline(y: f32, width: f32, stroke: f32, color: Color) -> Self {
        Self::StrokePath {
            points: vec![Vec2::new(0.0, y), Vec2::new(width, y)],
            width: stroke,
            color,
        }
    }
}

/// A drawing target the water column can render into.
///
/// Layers are allocated by the renderer itself so that a resize can swap in
/// correctly sized surfaces before touching any other state.
pub trait Surface: Sized {
    /// Allocate a surface. Failure is fatal for the owning scene.
    fn allocate(width: u32, height: u32) -> Result<Self, RenderError>;

    fn size(&self) -> (u32, u32);

    /// Overwrite every pixel (no blending)
    fn clear(&mut self, color: Color);

    fn draw(&mut self, command: &DrawCommand);

    /// Composite `source` over this surface, top-left aligned
    fn blit(&mut self, source: &Self);

    fn draw_all<I>(&mut self, commands: I)
    where
        I: IntoIterator<Item = DrawCommand>,
    {
        for command in commands {
            self.draw(&command);
        }
    }
}

/// Reject surface sizes no backend can hold
pub fn check_dimensions(width: u32, height: u32) -> Result<(), RenderError> {
    if width == 0 || height == 0 {
        return Err(RenderError::surface_allocation(
            width,
            height,
            "zero-sized surface",
        ));
    }
    if width > MAX_SURFACE_DIMENSION || height > MAX_SURFACE_DIMENSION {
        return Err(RenderError::surface_allocation(
            width,
            height,
            format!("edge exceeds {}px", MAX_SURFACE_DIMENSION),
        ));
    }
    Ok(())
}
