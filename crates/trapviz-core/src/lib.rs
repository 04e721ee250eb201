// File: crates/trapviz-core/src/lib.rs
// Summary: Core library entry point; adaptive trapezoid integration plus world-to-device drawing.

pub mod axis;
pub mod canvas;
pub mod config;
pub mod error;
pub mod function;
pub mod geometry;
pub mod integrate;
pub mod report;
pub mod scene;
pub mod surface;
pub mod theme;
pub mod transform;
pub mod types;

pub use axis::{AxesStyle, AxisTicks};
pub use canvas::WorldCanvas;
pub use config::{AppConfig, ConfigError};
pub use error::{Error, Result};
pub use function::{Builtin, Integrand};
pub use geometry::{DevicePoint, DeviceRect, Point};
pub use integrate::{
    collect_slices, integrate, integrate_with, IntegrationOptions, IntegrationResult, Slice, Slices,
    ZeroAreaPolicy,
};
pub use report::IntegrationReport;
pub use scene::{Scene, SceneSummary};
pub use surface::{DrawingSurface, Primitive, RecordingSurface};
pub use theme::Theme;
pub use transform::{AffineTransform, ViewportConfig};
pub use types::{Anchor, Arrow, Color, Font, TextStyle};
