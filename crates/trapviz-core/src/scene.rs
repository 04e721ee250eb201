// File: crates/trapviz-core/src/scene.rs
// Summary: Full trapezoid-rule picture: accepted slices as filled trapezoids, axes, and the curve.

use tracing::debug;

use crate::axis::{AxesStyle, AxisTicks};
use crate::canvas::{check_plot, WorldCanvas};
use crate::error::Result;
use crate::function::Integrand;
use crate::integrate::{collect_slices, IntegrationOptions, IntegrationResult, Slice};
use crate::surface::DrawingSurface;
use crate::theme::Theme;

pub struct Scene<'a> {
    pub integrand: &'a dyn Integrand,
    pub xmin: f64,
    pub xmax: f64,
    pub options: IntegrationOptions,
    pub theme: Theme,
    pub axes: AxesStyle,
}

/// What ended up on the surface.
#[derive(Clone, Debug)]
pub struct SceneSummary {
    pub result: IntegrationResult,
    pub slices: Vec<Slice>,
    pub ticks: AxisTicks,
    pub plot_samples: usize,
}

impl<'a> Scene<'a> {
    pub fn new(integrand: &'a dyn Integrand, xmin: f64, xmax: f64, options: IntegrationOptions) -> Self {
        let theme = Theme::classic();
        let axes = AxesStyle { color: theme.axes, ..AxesStyle::default() };
        Self { integrand, xmin, xmax, options, theme, axes }
    }

    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    pub fn with_axes(mut self, axes: AxesStyle) -> Self {
        self.axes = axes;
        self
    }

    /// Clear the surface and redraw everything. Slices, ticks and the plot
    /// step are all checked before the clear, so any failure leaves the
    /// previous picture in place.
    pub fn draw<S: DrawingSurface + ?Sized>(&self, canvas: &mut WorldCanvas<'_, S>) -> Result<SceneSummary> {
        let f = |x: f64| self.integrand.eval(x);
        let slices = collect_slices(f, self.xmin, self.xmax, &self.options)?;
        let result = IntegrationResult::from_slices(&slices);

        let t = *canvas.transform();
        let (plot_min, plot_max, step) = (t.world_min().x, t.world_max().x, t.xpix());
        canvas.axis_ticks(&self.axes)?;
        check_plot(plot_min, plot_max, step)?;

        canvas.clear();
        for s in &slices {
            canvas.draw_polygon(&s.vertices(), Some(self.theme.trapezoid_fill), Some(self.theme.trapezoid_outline));
        }
        let ticks = canvas.draw_axes(&self.axes)?;
        let plot_samples = canvas.draw_function(f, self.theme.function, plot_min, plot_max, step)?;

        debug!(slices = slices.len(), plot_samples, integrand = self.integrand.name(), "scene drawn");
        Ok(SceneSummary { result, slices, ticks, plot_samples })
    }
}
