// File: crates/demo/src/main.rs
// Summary: Command-line harness; integrates a built-in function, prints the report, renders the scene to PNG
// and optionally exports the accepted slices as CSV.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};
use trapviz_core::{
    AppConfig, Builtin, Integrand, IntegrationReport, IntegrationResult, Scene, Slice, WorldCanvas,
};
use trapviz_render_skia::SkiaSurface;

/// Adaptive trapezoid integration with a rendered picture of the accepted slices
#[derive(Parser, Debug)]
#[command(name = "trapviz")]
#[command(version = env!("CARGO_PKG_VERSION"))]
struct Cli {
    /// TOML file with [integration], [viewport] and [style] tables
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Lower bound of integration
    #[arg(long, allow_hyphen_values = true)]
    xmin: Option<f64>,

    /// Upper bound of integration
    #[arg(long, allow_hyphen_values = true)]
    xmax: Option<f64>,

    /// Number of base intervals
    #[arg(short = 'n', long)]
    intervals: Option<usize>,

    /// Relative error tolerance per slice, e.g. 0.01 for 1%
    #[arg(short = 'e', long)]
    max_error: Option<f64>,

    /// Integrand: sine-ramp, parabola or cubic-wave
    #[arg(short, long)]
    function: Option<Builtin>,

    /// Canvas width in pixels
    #[arg(long)]
    width: Option<u32>,

    /// Canvas height in pixels
    #[arg(long)]
    height: Option<u32>,

    /// Output PNG path
    #[arg(short, long, default_value = "target/out/trapviz.png")]
    out: PathBuf,

    /// Also write the accepted slices to this CSV file
    #[arg(long, value_name = "CSV")]
    slices_csv: Option<PathBuf>,

    /// Print the report only
    #[arg(long)]
    no_render: bool,
}

impl Cli {
    fn apply(&self, cfg: &mut AppConfig) {
        let i = &mut cfg.integration;
        if let Some(v) = self.xmin { i.xmin = v; }
        if let Some(v) = self.xmax { i.xmax = v; }
        if let Some(v) = self.intervals { i.intervals = v; }
        if let Some(v) = self.max_error { i.max_error = v; }
        if let Some(v) = self.function { i.function = v; }
        if let Some(v) = self.width { cfg.viewport.width = v; }
        if let Some(v) = self.height { cfg.viewport.height = v; }
    }
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    let mut cfg = match &cli.config {
        Some(path) => AppConfig::load(path).with_context(|| format!("failed to load config '{}'", path.display()))?,
        None => AppConfig::default(),
    };
    cli.apply(&mut cfg);
    cfg.validate().context("invalid settings")?;

    let integrand = cfg.integration.function;
    let (xmin, xmax) = (cfg.integration.xmin, cfg.integration.xmax);
    tracing::info!(function = integrand.name(), expression = integrand.expression(), xmin, xmax, "integrating");

    let slices = if cli.no_render {
        trapviz_core::collect_slices(|x| integrand.eval(x), xmin, xmax, &cfg.options())?
    } else {
        render(&cfg, &integrand, &cli.out)?
    };

    let result = IntegrationResult::from_slices(&slices);
    println!("{}", integrand.expression());
    println!("{}", IntegrationReport::for_integrand(&result, &integrand, xmin, xmax));

    if let Some(path) = &cli.slices_csv {
        write_slices(path, &slices).with_context(|| format!("failed to write slices to '{}'", path.display()))?;
        println!("Wrote {}", path.display());
    }
    Ok(())
}

/// Draw the scene onto a fresh raster surface and write it to `out`.
fn render(cfg: &AppConfig, integrand: &Builtin, out: &Path) -> Result<Vec<Slice>> {
    let theme = cfg.theme()?;
    let (w, h) = (cfg.viewport.width, cfg.viewport.height);
    let mut surface = SkiaSurface::new(w, h, theme.background)?;

    let summary = {
        let mut canvas = WorldCanvas::with_viewport(&mut surface, &cfg.viewport_config(), w, h)?;
        Scene::new(integrand, cfg.integration.xmin, cfg.integration.xmax, cfg.options())
            .with_theme(theme)
            .with_axes(cfg.axes_style(&theme))
            .draw(&mut canvas)?
    };
    tracing::debug!(plot_samples = summary.plot_samples, ticks = summary.ticks.x.len() + summary.ticks.y.len(), "scene ready");

    surface.write_png(out).with_context(|| format!("failed to write '{}'", out.display()))?;
    println!("Wrote {}", out.display());
    Ok(summary.slices)
}

fn write_slices(path: &Path, slices: &[Slice]) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }
    let mut wtr = csv::Writer::from_path(path)?;
    for s in slices {
        wtr.serialize(s)?;
    }
    wtr.flush()?;
    Ok(())
}
