// File: crates/trapviz-core/src/surface.rs
// Summary: Renderer-agnostic drawing surface trait (device coordinates) and a recording implementation.

use crate::geometry::{DevicePoint, DeviceRect};
use crate::types::{Arrow, Color, TextStyle};

/// Sink for primitives already mapped to device coordinates.
///
/// Backends decide how to rasterize; `None` for a fill or outline means
/// "don't paint that part".
pub trait DrawingSurface {
    fn clear(&mut self);
    fn draw_line(&mut self, p0: DevicePoint, p1: DevicePoint, color: Color, arrow: Arrow);
    fn draw_polyline(&mut self, points: &[DevicePoint], color: Color);
    fn draw_polygon(&mut self, points: &[DevicePoint], fill: Option<Color>, outline: Option<Color>);
    fn draw_oval(&mut self, bbox: DeviceRect, fill: Option<Color>, outline: Option<Color>);
    fn draw_rectangle(&mut self, bbox: DeviceRect, fill: Option<Color>, outline: Option<Color>);
    fn draw_text(&mut self, pos: DevicePoint, text: &str, style: &TextStyle);
}

/// One recorded draw call.
#[derive(Clone, Debug, PartialEq)]
pub enum Primitive {
    Line { p0: DevicePoint, p1: DevicePoint, color: Color, arrow: Arrow },
    Polyline { points: Vec<DevicePoint>, color: Color },
    Polygon { points: Vec<DevicePoint>, fill: Option<Color>, outline: Option<Color> },
    Oval { bbox: DeviceRect, fill: Option<Color>, outline: Option<Color> },
    Rectangle { bbox: DeviceRect, fill: Option<Color>, outline: Option<Color> },
    Text { pos: DevicePoint, text: String, style: TextStyle },
}

/// Keeps every primitive in call order; `clear` drops them, like a canvas delete-all.
#[derive(Clone, Debug, Default)]
pub struct RecordingSurface {
    pub primitives: Vec<Primitive>,
}

impl RecordingSurface {
    pub fn new() -> Self { Self::default() }

    pub fn lines(&self) -> impl Iterator<Item = &Primitive> {
        self.primitives.iter().filter(|p| matches!(p, Primitive::Line { .. }))
    }

    pub fn polygons(&self) -> impl Iterator<Item = &Primitive> {
        self.primitives.iter().filter(|p| matches!(p, Primitive::Polygon { .. }))
    }

    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.primitives.iter().filter_map(|p| match p {
            Primitive::Text { text, .. } => Some(text.as_str()),
            _ => None,
        })
    }
}

impl DrawingSurface for RecordingSurface {
    fn clear(&mut self) {
        self.primitives.clear();
    }

    fn draw_line(&mut self, p0: DevicePoint, p1: DevicePoint, color: Color, arrow: Arrow) {
        self.primitives.push(Primitive::Line { p0, p1, color, arrow });
    }

    fn draw_polyline(&mut self, points: &[DevicePoint], color: Color) {
        self.primitives.push(Primitive::Polyline { points: points.to_vec(), color });
    }

    fn draw_polygon(&mut self, points: &[DevicePoint], fill: Option<Color>, outline: Option<Color>) {
        self.primitives.push(Primitive::Polygon { points: points.to_vec(), fill, outline });
    }

    fn draw_oval(&mut self, bbox: DeviceRect, fill: Option<Color>, outline: Option<Color>) {
        self.primitives.push(Primitive::Oval { bbox, fill, outline });
    }

    fn draw_rectangle(&mut self, bbox: DeviceRect, fill: Option<Color>, outline: Option<Color>) {
        self.primitives.push(Primitive::Rectangle { bbox, fill, outline });
    }

    fn draw_text(&mut self, pos: DevicePoint, text: &str, style: &TextStyle) {
        self.primitives.push(Primitive::Text { pos, text: text.to_string(), style: style.clone() });
    }
}
