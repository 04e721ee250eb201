// File: crates/trapviz-core/src/report.rs
// Summary: Caller-facing outcome of one integration (estimate vs. exact area) and its text form.

use std::fmt;

use serde::Serialize;

use crate::function::Integrand;
use crate::integrate::IntegrationResult;

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct IntegrationReport {
    pub estimated_area: f64,
    pub true_area: f64,
    /// `100 * (estimated - true) / true`; `None` when the true area is zero.
    pub percent_error: Option<f64>,
    pub accepted_slice_count: usize,
}

impl IntegrationReport {
    pub fn new(result: &IntegrationResult, true_area: f64) -> Self {
        let percent_error = (true_area != 0.0)
            .then(|| 100.0 * (result.estimated_area - true_area) / true_area);
        Self {
            estimated_area: result.estimated_area,
            true_area,
            percent_error,
            accepted_slice_count: result.accepted_slice_count,
        }
    }

    pub fn for_integrand(result: &IntegrationResult, integrand: &dyn Integrand, xmin: f64, xmax: f64) -> Self {
        Self::new(result, integrand.true_area(xmin, xmax))
    }
}

impl fmt::Display for IntegrationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Est. Area:  {}", format_general(self.estimated_area, 12))?;
        writeln!(f, "True Area:  {}", format_general(self.true_area, 12))?;
        match self.percent_error {
            Some(p) => writeln!(f, "% Err:      {} %", format_general(p, 4))?,
            None => writeln!(f, "% Err:      n/a")?,
        }
        write!(f, "Intervals:  {}", self.accepted_slice_count)
    }
}

/// `precision` significant digits with thousands separators; switches to
/// exponent form for very small or very large magnitudes. Fixed-point output
/// always keeps one digit after the point (`18.0`, `1,234.5`).
pub fn format_general(v: f64, precision: usize) -> String {
    if !v.is_finite() {
        return v.to_string();
    }
    if v == 0.0 {
        return "0.0".to_string();
    }
    let precision = precision.max(1);
    // let the formatter do the rounding so 9.99..95 reports exponent 1, not 0
    let sci = format!("{:.*e}", precision - 1, v);
    let (mantissa, exp) = match sci.split_once('e') {
        Some((m, e)) => (m, e.parse::<i32>().unwrap_or(0)),
        None => (sci.as_str(), 0),
    };

    if exp < -4 || exp >= precision as i32 {
        let sign = if exp < 0 { '-' } else { '+' };
        return format!("{}e{}{:02}", trim_fraction(mantissa, false), sign, exp.abs());
    }

    let decimals = (precision as i32 - 1 - exp).max(0) as usize;
    let fixed = format!("{:.*}", decimals, v);
    group_thousands(&trim_fraction(&fixed, true))
}

fn trim_fraction(s: &str, keep_one: bool) -> String {
    if !s.contains('.') {
        return if keep_one { format!("{s}.0") } else { s.to_string() };
    }
    let t = s.trim_end_matches('0');
    match t.strip_suffix('.') {
        Some(int) if keep_one => format!("{int}.0"),
        Some(int) => int.to_string(),
        None => t.to_string(),
    }
}

fn group_thousands(s: &str) -> String {
    let (sign, rest) = match s.strip_prefix('-') {
        Some(r) => ("-", r),
        None => ("", s),
    };
    let (int, frac) = match rest.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (rest, None),
    };
    let mut grouped = String::with_capacity(int.len() + int.len() / 3);
    for (i, ch) in int.chars().enumerate() {
        if i > 0 && (int.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    match frac {
        Some(f) => format!("{sign}{grouped}.{f}"),
        None => format!("{sign}{grouped}"),
    }
}
