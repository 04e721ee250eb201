// File: crates/trapviz-core/src/error.rs
// Summary: Error taxonomy shared by the integrator, the transform and the world canvas.

use thiserror::Error;

/// Result alias used throughout the core crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Every failure the core can report. Inputs are validated before any
/// function evaluation, so an `Err` never comes with a partial result.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum Error {
    #[error("invalid range: xmin ({xmin}) must be finite and less than xmax ({xmax})")]
    InvalidRange { xmin: f64, xmax: f64 },

    #[error("invalid parameter `{name}`: {reason}")]
    InvalidParameter { name: &'static str, reason: String },

    #[error("single-trapezoid area is zero on [{x1}, {x2}]; relative error is undefined")]
    DivisionByZero { x1: f64, x2: f64 },

    #[error("refinement exceeded max depth {max_depth} on [{x1}, {x2}]")]
    MaxDepthExceeded { max_depth: u32, x1: f64, x2: f64 },

    #[error("degenerate viewport: {reason}")]
    DegenerateViewport { reason: String },
}

impl Error {
    pub(crate) fn invalid_parameter(name: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidParameter { name, reason: reason.into() }
    }

    pub(crate) fn degenerate(reason: impl Into<String>) -> Self {
        Self::DegenerateViewport { reason: reason.into() }
    }
}
