// File: crates/trapviz-core/src/axis.rs
// Summary: Axis styling and tick layout helpers.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::types::Color;

/// Ticks closer to zero than this are dropped so they don't sit on the origin.
pub const ORIGIN_TOLERANCE: f64 = 0.01;

/// Upper bound on ticks per axis; a tiny spacing on a wide range is a config mistake.
pub const MAX_TICKS: usize = 10_000;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AxesStyle {
    pub xtic_spacing: f64,
    pub ytic_spacing: f64,
    /// Half-length of x ticks, in world y units.
    pub tic_height: f64,
    /// Half-length of y ticks, in world x units.
    pub tic_width: f64,
    pub label_ticks: bool,
    pub color: Color,
}

impl Default for AxesStyle {
    fn default() -> Self {
        Self {
            xtic_spacing: 1.0,
            ytic_spacing: 1.0,
            tic_height: 0.1,
            tic_width: 0.1,
            label_ticks: true,
            color: Color::RED,
        }
    }
}

/// Tick positions actually drawn, per axis.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AxisTicks {
    pub x: Vec<f64>,
    pub y: Vec<f64>,
}

/// Multiples of `spacing` in the half-open range `[min, max)`, minus the one at the origin.
pub fn tick_positions(min: f64, max: f64, spacing: f64) -> Result<Vec<f64>> {
    if !spacing.is_finite() || spacing <= 0.0 {
        return Err(Error::invalid_parameter("tic_spacing", format!("must be positive, got {spacing}")));
    }
    let span = (max - min) / spacing;
    if !span.is_finite() || span > MAX_TICKS as f64 {
        return Err(Error::invalid_parameter(
            "tic_spacing",
            format!("{spacing} yields more than {MAX_TICKS} ticks on [{min}, {max})"),
        ));
    }
    let mut out = Vec::new();
    let mut k = (min / spacing).ceil() as i64;
    loop {
        // index-based so the positions don't drift with repeated addition
        let v = k as f64 * spacing;
        if v >= max {
            break;
        }
        if v.abs() > ORIGIN_TOLERANCE {
            out.push(v);
        }
        k += 1;
    }
    Ok(out)
}

/// Short label for a tick value: `1`, `-0.5`, `2.25`.
pub fn format_tick(v: f64) -> String {
    let rounded = (v * 1e9).round() / 1e9;
    // avoid "-0"
    if rounded == 0.0 { "0".to_string() } else { format!("{rounded}") }
}
