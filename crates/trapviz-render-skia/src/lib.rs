// File: crates/trapviz-render-skia/src/lib.rs
// Summary: CPU raster drawing surface backed by Skia; PNG and RGBA8 output.

use std::path::Path;

use anyhow::{anyhow, bail, Result};
use skia_safe as skia;
use tracing::debug;
use trapviz_core::{Arrow, Color, DevicePoint, DeviceRect, DrawingSurface, TextStyle};

pub mod text;

pub use text::TextShaper;

/// Arrowhead length along the line, in pixels.
pub const ARROW_LENGTH: f32 = 8.0;
/// Half of the arrowhead base, in pixels.
pub const ARROW_HALF_WIDTH: f32 = 3.0;

pub const STROKE_WIDTH: f32 = 1.0;

pub fn to_skia_color(c: Color) -> skia::Color {
    skia::Color::from_argb(c.a, c.r, c.g, c.b)
}

fn fill_paint(c: Color) -> skia::Paint {
    let mut paint = skia::Paint::default();
    paint.set_anti_alias(true);
    paint.set_style(skia::paint::Style::Fill);
    paint.set_color(to_skia_color(c));
    paint
}

fn stroke_paint(c: Color) -> skia::Paint {
    let mut paint = skia::Paint::default();
    paint.set_anti_alias(true);
    paint.set_style(skia::paint::Style::Stroke);
    paint.set_stroke_width(STROKE_WIDTH);
    paint.set_color(to_skia_color(c));
    paint
}

fn rect(b: DeviceRect) -> skia::Rect {
    skia::Rect::from_ltrb(b.left, b.top, b.right, b.bottom)
}

fn path_through(points: &[DevicePoint], close: bool) -> Option<skia::Path> {
    let (first, rest) = points.split_first()?;
    let mut path = skia::Path::new();
    path.move_to((first.x, first.y));
    for p in rest {
        path.line_to((p.x, p.y));
    }
    if close {
        path.close();
    }
    Some(path)
}

/// Triangle with its tip on `tip`, pointing away from `from`.
fn arrowhead(from: DevicePoint, tip: DevicePoint) -> Option<skia::Path> {
    let (dx, dy) = (tip.x - from.x, tip.y - from.y);
    let len = (dx * dx + dy * dy).sqrt();
    if len <= f32::EPSILON {
        return None;
    }
    let (ux, uy) = (dx / len, dy / len);
    let base = DevicePoint::new(tip.x - ux * ARROW_LENGTH, tip.y - uy * ARROW_LENGTH);
    let left = DevicePoint::new(base.x - uy * ARROW_HALF_WIDTH, base.y + ux * ARROW_HALF_WIDTH);
    let right = DevicePoint::new(base.x + uy * ARROW_HALF_WIDTH, base.y - ux * ARROW_HALF_WIDTH);
    path_through(&[tip, left, right], true)
}

/// A fixed-size raster target. Every draw call paints immediately;
/// `clear` resets to the background color.
pub struct SkiaSurface {
    surface: skia::Surface,
    width: u32,
    height: u32,
    background: Color,
    shaper: TextShaper,
}

impl SkiaSurface {
    pub fn new(width: u32, height: u32, background: Color) -> Result<Self> {
        if width == 0 || height == 0 {
            bail!("surface size must be positive, got {width}x{height}");
        }
        let w = i32::try_from(width)?;
        let h = i32::try_from(height)?;
        let surface = skia::surfaces::raster_n32_premul((w, h))
            .ok_or_else(|| anyhow!("failed to create {width}x{height} raster surface"))?;
        let mut out = Self { surface, width, height, background, shaper: TextShaper::new() };
        out.clear();
        debug!(width, height, background = %background, "skia surface created");
        Ok(out)
    }

    pub fn width(&self) -> u32 { self.width }
    pub fn height(&self) -> u32 { self.height }
    pub fn background(&self) -> Color { self.background }

    pub fn set_background(&mut self, background: Color) {
        self.background = background;
    }

    fn canvas(&mut self) -> &skia::Canvas {
        self.surface.canvas()
    }

    pub fn encode_png(&mut self) -> Result<Vec<u8>> {
        let image = self.surface.image_snapshot();
        #[allow(deprecated)]
        let data = image
            .encode_to_data(skia::EncodedImageFormat::PNG)
            .ok_or_else(|| anyhow!("encode PNG failed"))?;
        Ok(data.as_bytes().to_vec())
    }

    /// Encode to PNG and write it, creating parent directories as needed.
    pub fn write_png(&mut self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let bytes = self.encode_png()?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, &bytes)?;
        debug!(path = %path.display(), bytes = bytes.len(), "png written");
        Ok(())
    }

    /// Unpremultiplied RGBA8 pixels, rows top to bottom, stride `width * 4`.
    pub fn to_rgba8(&mut self) -> Result<Vec<u8>> {
        let info = skia::ImageInfo::new(
            (self.width as i32, self.height as i32),
            skia::ColorType::RGBA8888,
            skia::AlphaType::Unpremul,
            None,
        );
        let stride = self.width as usize * 4;
        let mut pixels = vec![0u8; stride * self.height as usize];
        if !self.surface.read_pixels(&info, &mut pixels, stride, (0, 0)) {
            bail!("read_pixels failed");
        }
        Ok(pixels)
    }

    fn fill_and_outline(&mut self, shape: impl Fn(&skia::Canvas, &skia::Paint), fill: Option<Color>, outline: Option<Color>) {
        let canvas = self.canvas();
        if let Some(c) = fill {
            shape(canvas, &fill_paint(c));
        }
        if let Some(c) = outline {
            shape(canvas, &stroke_paint(c));
        }
    }
}

impl DrawingSurface for SkiaSurface {
    fn clear(&mut self) {
        let bg = to_skia_color(self.background);
        self.canvas().clear(bg);
    }

    fn draw_line(&mut self, p0: DevicePoint, p1: DevicePoint, color: Color, arrow: Arrow) {
        let canvas = self.canvas();
        canvas.draw_line((p0.x, p0.y), (p1.x, p1.y), &stroke_paint(color));
        let head = fill_paint(color);
        if arrow.at_start() {
            if let Some(tri) = arrowhead(p1, p0) {
                canvas.draw_path(&tri, &head);
            }
        }
        if arrow.at_end() {
            if let Some(tri) = arrowhead(p0, p1) {
                canvas.draw_path(&tri, &head);
            }
        }
    }

    fn draw_polyline(&mut self, points: &[DevicePoint], color: Color) {
        if points.len() < 2 {
            return;
        }
        if let Some(path) = path_through(points, false) {
            self.canvas().draw_path(&path, &stroke_paint(color));
        }
    }

    fn draw_polygon(&mut self, points: &[DevicePoint], fill: Option<Color>, outline: Option<Color>) {
        let Some(path) = path_through(points, true) else { return };
        self.fill_and_outline(|c, p| { c.draw_path(&path, p); }, fill, outline);
    }

    fn draw_oval(&mut self, bbox: DeviceRect, fill: Option<Color>, outline: Option<Color>) {
        let r = rect(bbox);
        self.fill_and_outline(|c, p| { c.draw_oval(r, p); }, fill, outline);
    }

    fn draw_rectangle(&mut self, bbox: DeviceRect, fill: Option<Color>, outline: Option<Color>) {
        let r = rect(bbox);
        self.fill_and_outline(|c, p| { c.draw_rect(r, p); }, fill, outline);
    }

    fn draw_text(&mut self, pos: DevicePoint, text: &str, style: &TextStyle) {
        if text.is_empty() {
            return;
        }
        let canvas = self.surface.canvas();
        self.shaper.draw(canvas, pos, text, style);
    }
}
