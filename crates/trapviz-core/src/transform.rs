// File: crates/trapviz-core/src/transform.rs
// Summary: World-to-device affine transform derived from a viewport config and a device size.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{Error, Result};
use crate::geometry::{DevicePoint, Point};

/// Which world box is shown and how it sits on the device.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ViewportConfig {
    pub world_min: Point,
    pub world_max: Point,
    /// Margin in pixels kept free on every side of the device.
    pub device_margin: f64,
    /// Map increasing world y to decreasing device y (math axes on a pixel surface).
    pub y_flipped: bool,
}

impl ViewportConfig {
    pub fn new(world_min: impl Into<Point>, world_max: impl Into<Point>) -> Self {
        Self {
            world_min: world_min.into(),
            world_max: world_max.into(),
            device_margin: 0.0,
            y_flipped: true,
        }
    }

    pub fn with_margin(mut self, margin: f64) -> Self {
        self.device_margin = margin;
        self
    }

    pub fn with_y_flipped(mut self, flipped: bool) -> Self {
        self.y_flipped = flipped;
        self
    }

    /// Pure form of the mapping for a device of `width` x `height` pixels.
    pub fn configure(&self, width: u32, height: u32) -> Result<AffineTransform> {
        AffineTransform::configure(self, width, height)
    }
}

impl Default for ViewportConfig {
    fn default() -> Self {
        Self::new((-1.0, -1.0), (7.0, 7.0))
    }
}

/// Immutable scale/offset pair. Build a new one whenever the viewport or the
/// device size changes; never patch an existing one.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AffineTransform {
    config: ViewportConfig,
    device_width: u32,
    device_height: u32,
    dxmin: f64,
    dymin: f64,
    dxmax: f64,
    dymax: f64,
    xscale: f64,
    yscale: f64,
    xpix: f64,
    ypix: f64,
}

impl AffineTransform {
    pub fn configure(config: &ViewportConfig, device_width: u32, device_height: u32) -> Result<Self> {
        let ViewportConfig { world_min, world_max, device_margin: margin, y_flipped } = *config;

        if !margin.is_finite() || margin < 0.0 {
            return Err(Error::degenerate(format!("margin must be finite and non-negative, got {margin}")));
        }
        let finite = [world_min.x, world_min.y, world_max.x, world_max.y].iter().all(|v| v.is_finite());
        if !finite {
            return Err(Error::degenerate("world bounds must be finite"));
        }
        if world_max.x <= world_min.x || world_max.y <= world_min.y {
            return Err(Error::degenerate(format!(
                "world box ({}, {})..({}, {}) has a zero or reversed extent",
                world_min.x, world_min.y, world_max.x, world_max.y
            )));
        }

        let dxmin = margin;
        let mut dymin = margin;
        let dxmax = device_width as f64 - margin - 1.0;
        let mut dymax = device_height as f64 - margin - 1.0;
        if dxmax - dxmin <= 0.0 || dymax - dymin <= 0.0 {
            return Err(Error::degenerate(format!(
                "device {device_width}x{device_height} leaves no drawable area inside margin {margin}"
            )));
        }
        if y_flipped {
            std::mem::swap(&mut dymin, &mut dymax);
        }

        let xscale = (dxmax - dxmin) / (world_max.x - world_min.x);
        let yscale = (dymax - dymin) / (world_max.y - world_min.y);
        debug!(xscale, yscale, device_width, device_height, "configured world-to-device transform");

        Ok(Self {
            config: *config,
            device_width,
            device_height,
            dxmin,
            dymin,
            dxmax,
            dymax,
            xscale,
            yscale,
            xpix: 1.0 / xscale,
            ypix: 1.0 / yscale,
        })
    }

    #[inline]
    pub fn to_device(&self, wx: f64, wy: f64) -> DevicePoint {
        let dx = (wx - self.config.world_min.x) * self.xscale + self.dxmin;
        let dy = (wy - self.config.world_min.y) * self.yscale + self.dymin;
        DevicePoint::new(dx as f32, dy as f32)
    }

    #[inline]
    pub fn point_to_device(&self, p: Point) -> DevicePoint {
        self.to_device(p.x, p.y)
    }

    /// Inverse mapping, e.g. for turning a cursor position into world coordinates.
    #[inline]
    pub fn to_world(&self, dx: f32, dy: f32) -> Point {
        Point::new(
            (dx as f64 - self.dxmin) / self.xscale + self.config.world_min.x,
            (dy as f64 - self.dymin) / self.yscale + self.config.world_min.y,
        )
    }

    pub fn config(&self) -> &ViewportConfig { &self.config }
    pub fn world_min(&self) -> Point { self.config.world_min }
    pub fn world_max(&self) -> Point { self.config.world_max }
    pub fn device_size(&self) -> (u32, u32) { (self.device_width, self.device_height) }
    pub fn xscale(&self) -> f64 { self.xscale }
    pub fn yscale(&self) -> f64 { self.yscale }
    /// World-x width of one device pixel; a natural plotting step.
    pub fn xpix(&self) -> f64 { self.xpix }
    /// World-y height of one device pixel (negative when y is flipped).
    pub fn ypix(&self) -> f64 { self.ypix }

    /// Device bounds as (xmin, ymin, xmax, ymax), with y already flipped when configured so.
    pub fn device_bounds(&self) -> (f64, f64, f64, f64) {
        (self.dxmin, self.dymin, self.dxmax, self.dymax)
    }
}
