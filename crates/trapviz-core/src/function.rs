// File: crates/trapviz-core/src/function.rs
// Summary: Built-in closed-form integrands with exact antiderivatives for validating estimates.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// A function fixed at build time, together with its antiderivative.
pub trait Integrand {
    fn name(&self) -> &'static str;
    /// Human-readable formula, e.g. `y = 1 + x + sin(2x)`.
    fn expression(&self) -> &'static str;
    fn eval(&self, x: f64) -> f64;
    fn antiderivative(&self, x: f64) -> f64;

    /// `F(b) - F(a)`.
    fn true_area(&self, a: f64, b: f64) -> f64 {
        self.antiderivative(b) - self.antiderivative(a)
    }
}

/// Catalog of integrands the harness can be pointed at.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Builtin {
    /// `1 + x + sin(2x)`
    #[default]
    SineRamp,
    /// `x^2`
    Parabola,
    /// `x^3/8 - x + 2`
    CubicWave,
}

impl Builtin {
    pub const ALL: [Builtin; 3] = [Builtin::SineRamp, Builtin::Parabola, Builtin::CubicWave];
}

impl Integrand for Builtin {
    fn name(&self) -> &'static str {
        match self {
            Builtin::SineRamp => "sine-ramp",
            Builtin::Parabola => "parabola",
            Builtin::CubicWave => "cubic-wave",
        }
    }

    fn expression(&self) -> &'static str {
        match self {
            Builtin::SineRamp => "y = 1 + x + sin(2 * x)",
            Builtin::Parabola => "y = x^2",
            Builtin::CubicWave => "y = x^3 / 8 - x + 2",
        }
    }

    fn eval(&self, x: f64) -> f64 {
        match self {
            Builtin::SineRamp => 1.0 + x + (2.0 * x).sin(),
            Builtin::Parabola => x * x,
            Builtin::CubicWave => x * x * x / 8.0 - x + 2.0,
        }
    }

    fn antiderivative(&self, x: f64) -> f64 {
        match self {
            Builtin::SineRamp => x + x * x / 2.0 - (2.0 * x).cos() / 2.0,
            Builtin::Parabola => x * x * x / 3.0,
            Builtin::CubicWave => x.powi(4) / 32.0 - x * x / 2.0 + 2.0 * x,
        }
    }
}

impl FromStr for Builtin {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Builtin::ALL
            .into_iter()
            .find(|b| b.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| {
                let known = Builtin::ALL.map(|b| b.name()).join(", ");
                Error::invalid_parameter("function", format!("unknown function `{s}` (known: {known})"))
            })
    }
}

impl fmt::Display for Builtin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
