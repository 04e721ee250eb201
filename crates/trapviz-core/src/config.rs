// File: crates/trapviz-core/src/config.rs
// Summary: TOML configuration for a run; every key is optional and defaults to the classic setup
// (integrate 1 + x + sin(2x) on [0, 5], 5 intervals, 1% per slice, 280x280 view of [-1, 7]^2).

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::axis::AxesStyle;
use crate::function::Builtin;
use crate::integrate::{IntegrationOptions, ZeroAreaPolicy, DEFAULT_MAX_DEPTH};
use crate::theme::{self, Theme};
use crate::transform::ViewportConfig;
use crate::types::{Color, HEIGHT, WIDTH};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Io { path: PathBuf, source: std::io::Error },
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),
    #[error("unknown theme `{0}`")]
    UnknownTheme(String),
    #[error(transparent)]
    Invalid(#[from] crate::error::Error),
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub integration: IntegrationSection,
    pub viewport: ViewportSection,
    pub style: StyleSection,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct IntegrationSection {
    pub function: Builtin,
    pub xmin: f64,
    pub xmax: f64,
    pub intervals: usize,
    /// Per-slice relative tolerance as a fraction.
    pub max_error: f64,
    pub max_depth: u32,
    pub zero_area: ZeroAreaPolicy,
}

impl Default for IntegrationSection {
    fn default() -> Self {
        Self {
            function: Builtin::SineRamp,
            xmin: 0.0,
            xmax: 5.0,
            intervals: 5,
            max_error: 0.01,
            max_depth: DEFAULT_MAX_DEPTH,
            zero_area: ZeroAreaPolicy::Fail,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewportSection {
    pub width: u32,
    pub height: u32,
    pub world_min: [f64; 2],
    pub world_max: [f64; 2],
    pub margin: f64,
    pub y_flipped: bool,
}

impl Default for ViewportSection {
    fn default() -> Self {
        Self {
            width: WIDTH,
            height: HEIGHT,
            world_min: [-1.0, -1.0],
            world_max: [7.0, 7.0],
            margin: 0.0,
            y_flipped: true,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StyleSection {
    pub theme: String,
    pub xtic_spacing: f64,
    pub ytic_spacing: f64,
    pub tic_height: f64,
    pub tic_width: f64,
    pub label_ticks: bool,
    /// Overrides the theme's axis color when set.
    pub axes_color: Option<Color>,
}

impl Default for StyleSection {
    fn default() -> Self {
        let axes = AxesStyle::default();
        Self {
            theme: Theme::classic().name.to_string(),
            xtic_spacing: axes.xtic_spacing,
            ytic_spacing: axes.ytic_spacing,
            tic_height: axes.tic_height,
            tic_width: axes.tic_width,
            label_ticks: axes.label_ticks,
            axes_color: None,
        }
    }
}

impl AppConfig {
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(s)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .map_err(|source| ConfigError::Io { path: path.to_path_buf(), source })?;
        Self::from_toml_str(&text)
    }

    pub fn to_toml_string(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }

    pub fn options(&self) -> IntegrationOptions {
        let i = &self.integration;
        IntegrationOptions::new(i.intervals, i.max_error)
            .with_max_depth(i.max_depth)
            .with_zero_area(i.zero_area)
    }

    pub fn viewport_config(&self) -> ViewportConfig {
        let v = &self.viewport;
        ViewportConfig::new(v.world_min, v.world_max)
            .with_margin(v.margin)
            .with_y_flipped(v.y_flipped)
    }

    pub fn theme(&self) -> Result<Theme, ConfigError> {
        theme::find(&self.style.theme).ok_or_else(|| ConfigError::UnknownTheme(self.style.theme.clone()))
    }

    pub fn axes_style(&self, theme: &Theme) -> AxesStyle {
        let s = &self.style;
        AxesStyle {
            xtic_spacing: s.xtic_spacing,
            ytic_spacing: s.ytic_spacing,
            tic_height: s.tic_height,
            tic_width: s.tic_width,
            label_ticks: s.label_ticks,
            color: s.axes_color.unwrap_or(theme.axes),
        }
    }

    /// Check everything a run needs before any work starts.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.options().validate(self.integration.xmin, self.integration.xmax)?;
        self.viewport_config().configure(self.viewport.width, self.viewport.height)?;
        self.theme()?;
        Ok(())
    }
}
