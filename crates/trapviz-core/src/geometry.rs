// File: crates/trapviz-core/src/geometry.rs
// Summary: Lightweight point/rect types for world math and pixel math.

use serde::{Deserialize, Serialize};

/// A point in world (problem-domain) coordinates.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const ORIGIN: Point = Point::new(0.0, 0.0);

    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self { x, y }
    }
}

impl From<[f64; 2]> for Point {
    fn from([x, y]: [f64; 2]) -> Self {
        Self { x, y }
    }
}

/// A point in device (pixel) coordinates.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct DevicePoint {
    pub x: f32,
    pub y: f32,
}

impl DevicePoint {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

impl From<DevicePoint> for (f32, f32) {
    fn from(p: DevicePoint) -> Self {
        (p.x, p.y)
    }
}

/// Axis-aligned device rectangle. `from_corners` normalizes so that
/// `left <= right` and `top <= bottom`, whatever the y flip did.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DeviceRect {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
}

impl DeviceRect {
    pub const fn from_ltrb(left: f32, top: f32, right: f32, bottom: f32) -> Self {
        Self { left, top, right, bottom }
    }

    pub fn from_corners(a: DevicePoint, b: DevicePoint) -> Self {
        Self {
            left: a.x.min(b.x),
            top: a.y.min(b.y),
            right: a.x.max(b.x),
            bottom: a.y.max(b.y),
        }
    }

    pub fn from_center(c: DevicePoint, radius: f32) -> Self {
        Self::from_ltrb(c.x - radius, c.y - radius, c.x + radius, c.y + radius)
    }

    pub fn width(&self) -> f32 { self.right - self.left }
    pub fn height(&self) -> f32 { self.bottom - self.top }
}
