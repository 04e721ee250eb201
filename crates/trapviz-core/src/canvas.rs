// File: crates/trapviz-core/src/canvas.rs
// Summary: World-coordinate drawing on top of a device surface; every call maps its vertices
// through the current affine transform and forwards exactly one primitive (axes and plots aside).

use crate::axis::{format_tick, tick_positions, AxesStyle, AxisTicks};
use crate::error::{Error, Result};
use crate::geometry::{DevicePoint, DeviceRect, Point};
use crate::surface::DrawingSurface;
use crate::transform::{AffineTransform, ViewportConfig};
use crate::types::{Anchor, Arrow, Color, TextStyle};

/// Upper bound on samples in one function plot.
pub const MAX_PLOT_SAMPLES: usize = 1_000_000;

pub struct WorldCanvas<'s, S: DrawingSurface + ?Sized> {
    surface: &'s mut S,
    transform: AffineTransform,
}

impl<'s, S: DrawingSurface + ?Sized> WorldCanvas<'s, S> {
    pub fn new(surface: &'s mut S, transform: AffineTransform) -> Self {
        Self { surface, transform }
    }

    /// Configure a transform for `width` x `height` and wrap `surface` with it.
    pub fn with_viewport(surface: &'s mut S, config: &ViewportConfig, width: u32, height: u32) -> Result<Self> {
        Ok(Self::new(surface, config.configure(width, height)?))
    }

    /// Swap in a transform for the new device size; the old one is left untouched on error.
    pub fn resize(&mut self, width: u32, height: u32) -> Result<()> {
        self.transform = self.transform.config().configure(width, height)?;
        Ok(())
    }

    pub fn transform(&self) -> &AffineTransform { &self.transform }
    pub fn surface(&self) -> &S { &*self.surface }
    pub fn surface_mut(&mut self) -> &mut S { &mut *self.surface }

    fn map(&self, points: &[Point]) -> Vec<DevicePoint> {
        points.iter().map(|&p| self.transform.point_to_device(p)).collect()
    }

    pub fn clear(&mut self) {
        self.surface.clear();
    }

    pub fn draw_line(&mut self, p0: Point, p1: Point, color: Color, arrow: Arrow) {
        let d0 = self.transform.point_to_device(p0);
        let d1 = self.transform.point_to_device(p1);
        self.surface.draw_line(d0, d1, color, arrow);
    }

    pub fn draw_polyline(&mut self, points: &[Point], color: Color) {
        let d = self.map(points);
        self.surface.draw_polyline(&d, color);
    }

    pub fn draw_polygon(&mut self, points: &[Point], fill: Option<Color>, outline: Option<Color>) {
        let d = self.map(points);
        self.surface.draw_polygon(&d, fill, outline);
    }

    /// Oval inscribed in the world box spanned by `p0` and `p1`.
    pub fn draw_oval(&mut self, p0: Point, p1: Point, fill: Option<Color>, outline: Option<Color>) {
        let bbox = self.device_box(p0, p1);
        self.surface.draw_oval(bbox, fill, outline);
    }

    pub fn draw_rectangle(&mut self, p0: Point, p1: Point, fill: Option<Color>, outline: Option<Color>) {
        let bbox = self.device_box(p0, p1);
        self.surface.draw_rectangle(bbox, fill, outline);
    }

    /// Circle centered on a world point with a radius in pixels, so it keeps its size under zoom.
    pub fn draw_circle(&mut self, center: Point, device_radius: f32, fill: Option<Color>, outline: Option<Color>) {
        let c = self.transform.point_to_device(center);
        self.surface.draw_oval(DeviceRect::from_center(c, device_radius), fill, outline);
    }

    pub fn draw_text(&mut self, pos: Point, text: &str, style: &TextStyle) {
        let d = self.transform.point_to_device(pos);
        self.surface.draw_text(d, text, style);
    }

    fn device_box(&self, p0: Point, p1: Point) -> DeviceRect {
        DeviceRect::from_corners(self.transform.point_to_device(p0), self.transform.point_to_device(p1))
    }

    /// Tick positions `draw_axes` would use for `style` in the current world box.
    pub fn axis_ticks(&self, style: &AxesStyle) -> Result<AxisTicks> {
        let wmin = self.transform.world_min();
        let wmax = self.transform.world_max();
        Ok(AxisTicks {
            x: tick_positions(wmin.x, wmax.x, style.xtic_spacing)?,
            y: tick_positions(wmin.y, wmax.y, style.ytic_spacing)?,
        })
    }

    /// Axis lines through the origin across the whole world box, plus ticks
    /// (and optional labels) at multiples of the spacings.
    pub fn draw_axes(&mut self, style: &AxesStyle) -> Result<AxisTicks> {
        let wmin = self.transform.world_min();
        let wmax = self.transform.world_max();
        // validate both axes before drawing anything
        let ticks = self.axis_ticks(style)?;

        self.draw_line(Point::new(wmin.x, 0.0), Point::new(wmax.x, 0.0), style.color, Arrow::Both);
        self.draw_line(Point::new(0.0, wmin.y), Point::new(0.0, wmax.y), style.color, Arrow::Both);

        let below = TextStyle::new(style.color).with_anchor(Anchor::North);
        for &x in &ticks.x {
            let top = Point::new(x, style.tic_height);
            let bottom = Point::new(x, -style.tic_height);
            self.draw_line(top, bottom, style.color, Arrow::None);
            if style.label_ticks {
                self.draw_text(bottom, &format_tick(x), &below);
            }
        }

        let left = TextStyle::new(style.color).with_anchor(Anchor::East);
        for &y in &ticks.y {
            let right = Point::new(style.tic_width, y);
            let left_end = Point::new(-style.tic_width, y);
            self.draw_line(right, left_end, style.color, Arrow::None);
            if style.label_ticks {
                self.draw_text(left_end, &format_tick(y), &left);
            }
        }
        Ok(ticks)
    }

    /// Plot `f` as one polyline sampled every `step` from `xmin` until the
    /// sample would pass `xmax`. Returns the number of samples.
    pub fn draw_function<F>(&mut self, f: F, color: Color, xmin: f64, xmax: f64, step: f64) -> Result<usize>
    where
        F: Fn(f64) -> f64,
    {
        check_plot(xmin, xmax, step)?;

        let mut points = Vec::new();
        let mut i = 0usize;
        loop {
            let x = xmin + i as f64 * step;
            if x > xmax {
                break;
            }
            points.push(Point::new(x, f(x)));
            i += 1;
        }
        self.draw_polyline(&points, color);
        Ok(points.len())
    }
}

/// Reject a plot `draw_function` would refuse, without touching any surface.
pub fn check_plot(xmin: f64, xmax: f64, step: f64) -> Result<()> {
    if !step.is_finite() || step <= 0.0 {
        return Err(Error::invalid_parameter("step", format!("must be positive, got {step}")));
    }
    if !xmin.is_finite() || !xmax.is_finite() {
        return Err(Error::InvalidRange { xmin, xmax });
    }
    let samples = ((xmax - xmin) / step).floor() + 1.0;
    if samples > MAX_PLOT_SAMPLES as f64 {
        return Err(Error::invalid_parameter(
            "step",
            format!("{step} needs more than {MAX_PLOT_SAMPLES} samples on [{xmin}, {xmax}]"),
        ));
    }
    Ok(())
}
