//! CPU software surface backed by an `image::RgbaImage`.
//!
//! Straight-alpha sRGB pixels, source-over blending. Strokes are
//! anti-aliased by distance to the segment; rects and polygons are sampled
//! at pixel centers. Text is drawn with the built-in bitmap font.

use glam::Vec2;
use image::{Rgba, RgbaImage};

use crate::draw::{check_dimensions, Color, DrawCommand, Surface};
use crate::error::RenderError;
use crate::font;

/// Software render target
#[derive(Debug, Clone)]
pub struct RasterSurface {
    image: RgbaImage,
}

impl RasterSurface {
    pub fn image(&self) -> &RgbaImage {
        &self.image
    }

    /// Raw RGBA8 bytes, row-major, for texture upload
    pub fn as_bytes(&self) -> &[u8] {
        self.image.as_raw()
    }

    /// Color at a pixel (panics when out of bounds)
    pub fn pixel(&self, x: u32, y: u32) -> Color {
        to_color(*self.image.get_pixel(x, y))
    }

    pub fn save_png(&self, path: &str) -> Result<(), image::ImageError> {
        self.image.save(path)
    }

    fn blend(&mut self, x: i64, y: i64, color: Color, coverage: f32) {
        if x < 0 || y < 0 || x >= self.image.width() as i64 || y >= self.image.height() as i64 {
            return;
        }
        let src_a = color.w * coverage.clamp(0.0, 1.0);
        if src_a <= 0.0 {
            return;
        }

        let pixel = self.image.get_pixel_mut(x as u32, y as u32);
        let dst = to_color(*pixel);
        let out_a = src_a + dst.w * (1.0 - src_a);
        let rgb = if out_a > 0.0 {
            (color.truncate() * src_a + dst.truncate() * dst.w * (1.0 - src_a)) / out_a
        } else {
            color.truncate()
        };
        *pixel = to_rgba(rgb.extend(out_a));
    }

    fn fill_rect(&mut self, min: Vec2, size: Vec2, color: Color) {
        let (w, h) = (self.image.width() as f32, self.image.height() as f32);
        let x0 = min.x.round().max(0.0) as i64;
        let y0 = min.y.round().max(0.0) as i64;
        let x1 = (min.x + size.x).round().min(w) as i64;
        let y1 = (min.y + size.y).round().min(h) as i64;
        for y in y0..y1 {
            for x in x0..x1 {
                self.blend(x, y, color, 1.0);
            }
        }
    }

    fn stroke_path(&mut self, points: &[Vec2], width: f32, color: Color) {
        if points.len() < 2 {
            return;
        }
        let half = (width * 0.5).max(0.5);
        let pad = half + 1.0;

        let (lo, hi) = points
            .iter()
            .fold((points[0], points[0]), |(lo, hi), p| (lo.min(*p), hi.max(*p)));
        let x0 = (lo.x - pad).floor().max(0.0) as i64;
        let y0 = (lo.y - pad).floor().max(0.0) as i64;
        let x1 = ((hi.x + pad).ceil() as i64).min(self.image.width() as i64);
        let y1 = ((hi.y + pad).ceil() as i64).min(self.image.height() as i64);
        if x0 >= x1 || y0 >= y1 {
            return;
        }

        // Max coverage per pixel so overlapping joints don't double-blend
        let cols = (x1 - x0) as usize;
        let mut coverage = vec![0.0_f32; cols * (y1 - y0) as usize];
        for segment in points.windows(2) {
            let (a, b) = (segment[0], segment[1]);
            let sx0 = ((a.x.min(b.x) - pad).floor() as i64).max(x0);
            let sx1 = ((a.x.max(b.x) + pad).ceil() as i64).min(x1);
            let sy0 = ((a.y.min(b.y) - pad).floor() as i64).max(y0);
            let sy1 = ((a.y.max(b.y) + pad).ceil() as i64).min(y1);
            for y in sy0..sy1 {
                for x in sx0..sx1 {
                    let center = Vec2::new(x as f32 + 0.5, y as f32 + 0.5);
                    let c = (half + 0.5 - distance_to_segment(center, a, b)).clamp(0.0, 1.0);
                    let idx = (y - y0) as usize * cols + (x - x0) as usize;
                    coverage[idx] = coverage[idx].max(c);
                }
            }
        }

        for (idx, c) in coverage.into_iter().enumerate() {
            if c > 0.0 {
                let x = x0 + (idx % cols) as i64;
                let y = y0 + (idx / cols) as i64;
                self.blend(x, y, color, c);
            }
        }
    }

    fn draw_text(&mut self, position: Vec2, text: &str, size_px: f32, color: Color) {
        let cell = font::cell_size(size_px);
        if text.chars().any(|c| font::glyph(c).is_none()) {
            log::trace!("no glyphs for some of {:?}, leaving gaps", text);
        }
        for min in font::lit_cells(text, position, cell) {
            self.fill_rect(min, Vec2::splat(cell), color);
        }
    }

    fn fill_polygon(&mut self, points: &[Vec2], color: Color) {
        if points.len() < 3 {
            return;
        }
        let (lo, hi) = points
            .iter()
            .fold((points[0], points[0]), |(lo, hi), p| (lo.min(*p), hi.max(*p)));
        let y0 = lo.y.floor().max(0.0) as i64;
        let y1 = (hi.y.ceil() as i64).min(self.image.height() as i64);

        let mut crossings = Vec::new();
        for y in y0..y1 {
            let sy = y as f32 + 0.5;
            crossings.clear();
            for i in 0..points.len() {
                let a = points[i];
                let b = points[(i + 1) % points.len()];
                if (a.y <= sy) != (b.y <= sy) {
                    crossings.push(a.x + (sy - a.y) / (b.y - a.y) * (b.x - a.x));
                }
            }
            crossings.sort_by(|l, r| l.total_cmp(r));

            for span in crossings.chunks_exact(2) {
                // Pixel centers inside [span0, span1)
                let start = (span[0] - 0.5).ceil().max(0.0) as i64;
                let end = ((span[1] - 0.5).ceil() as i64).min(self.image.width() as i64);
                for x in start..end {
                    self.blend(x, y, color, 1.0);
                }
            }
        }
    }
}

impl Surface for RasterSurface {
    fn allocate(width: u32, height: u32) -> Result<Self, RenderError> {
        check_dimensions(width, height)?;
        Ok(Self {
            image: RgbaImage::new(width, height),
        })
    }

    fn size(&self) -> (u32, u32) {
        self.image.dimensions()
    }

    fn clear(&mut self, color: Color) {
        let fill = to_rgba(color);
        for pixel in self.image.pixels_mut() {
            *pixel = fill;
        }
    }

    fn draw(&mut self, command: &DrawCommand) {
        match command {
            DrawCommand::FillRect { min, size, color } => self.fill_rect(*min, *size, *color),
            DrawCommand::StrokePath {
                points,
                width,
                color,
            } => self.stroke_path(points, *width, *color),
            DrawCommand::FillPolygon { points, color } => self.fill_polygon(points, *color),
            DrawCommand::Text {
                position,
                text,
                size_px,
                color,
            } => self.draw_text(*position, text, *size_px, *color),
        }
    }

    fn blit(&mut self, source: &Self) {
        let w = self.image.width().min(source.image.width());
        let h = self.image.height().min(source.image.height());
        for y in 0..h {
            for x in 0..w {
                let src = *source.image.get_pixel(x, y);
                match src.0[3] {
                    0 => {}
                    255 => self.image.put_pixel(x, y, src),
                    _ => self.blend(x as i64, y as i64, to_color(src), 1.0),
                }
            }
        }
    }
}

fn distance_to_segment(p: Vec2, a: Vec2, b: Vec2) -> f32 {
    let ab = b - a;
    let len_sq = ab.length_squared();
    if len_sq == 0.0 {
        return p.distance(a);
    }
    let t = ((p - a).dot(ab) / len_sq).clamp(0.0, 1.0);
    p.distance(a + ab * t)
}

fn to_color(pixel: Rgba<u8>) -> Color {
    let [r, g, b, a] = pixel.0;
    Color::new(r as f32, g as f32, b as f32, a as f32) / 255.0
}

fn to_rgba(color: Color) -> Rgba<u8> {
    let c = (color.clamp(Color::ZERO, Color::ONE) * 255.0).round();
    Rgba([c.x as u8, c.y as u8, c.z as u8, c.w as u8])
}
