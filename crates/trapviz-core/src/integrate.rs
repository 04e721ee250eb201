// File: crates/trapviz-core/src/integrate.rs
// Summary: Adaptive trapezoid integration; slices are refined until the midpoint split agrees
// with the single trapezoid to within a relative tolerance.

use serde::{Deserialize, Serialize};
use tracing::{debug, trace, warn};

use crate::error::{Error, Result};
use crate::geometry::Point;

/// Default limit on how many times a base slice may be halved.
pub const DEFAULT_MAX_DEPTH: u32 = 50;

/// Below this magnitude `AbsoluteFallback` treats the coarse area as zero.
pub const ZERO_AREA_EPSILON: f64 = 1e-12;

/// What to do when the single-trapezoid area of a sub-interval is zero and
/// the relative error cannot be formed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ZeroAreaPolicy {
    /// Fail with `Error::DivisionByZero`.
    #[default]
    Fail,
    /// Near zero, compare `|both - large|` against `max_error` as an absolute bound.
    AbsoluteFallback,
}

/// Knobs for one integration request.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct IntegrationOptions {
    /// Number of equal-width base slices.
    pub intervals: usize,
    /// Per-slice relative tolerance as a fraction (0.01 = 1%).
    pub max_error: f64,
    pub max_depth: u32,
    pub zero_area: ZeroAreaPolicy,
}

impl IntegrationOptions {
    pub fn new(intervals: usize, max_error: f64) -> Self {
        Self { intervals, max_error, max_depth: DEFAULT_MAX_DEPTH, zero_area: ZeroAreaPolicy::Fail }
    }

    pub fn with_max_depth(mut self, max_depth: u32) -> Self {
        self.max_depth = max_depth;
        self
    }

    pub fn with_zero_area(mut self, policy: ZeroAreaPolicy) -> Self {
        self.zero_area = policy;
        self
    }

    /// Reject ranges and parameters the refinement loop cannot work with.
    pub fn validate(&self, xmin: f64, xmax: f64) -> Result<()> {
        if !xmin.is_finite() || !xmax.is_finite() || xmin >= xmax {
            return Err(Error::InvalidRange { xmin, xmax });
        }
        if self.intervals == 0 {
            return Err(Error::invalid_parameter("intervals", "must be at least 1"));
        }
        if !self.max_error.is_finite() || self.max_error <= 0.0 {
            return Err(Error::invalid_parameter(
                "max_error",
                format!("must be a positive fraction, got {}", self.max_error),
            ));
        }
        if self.max_depth == 0 {
            return Err(Error::invalid_parameter("max_depth", "must be at least 1"));
        }
        Ok(())
    }
}

/// An accepted sub-interval and the trapezoid drawn for it.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Slice {
    pub x1: f64,
    pub x2: f64,
    pub y1: f64,
    pub y2: f64,
    /// Area contributed by this slice (the two-trapezoid estimate).
    pub area: f64,
    /// How many halvings separate this slice from its base slice.
    pub depth: u32,
}

impl Slice {
    pub fn width(&self) -> f64 { self.x2 - self.x1 }

    /// Trapezoid corners `(x1,0), (x1,y1), (x2,y2), (x2,0)`.
    pub fn vertices(&self) -> [Point; 4] {
        [
            Point::new(self.x1, 0.0),
            Point::new(self.x1, self.y1),
            Point::new(self.x2, self.y2),
            Point::new(self.x2, 0.0),
        ]
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize)]
pub struct IntegrationResult {
    pub estimated_area: f64,
    pub accepted_slice_count: usize,
    pub max_depth_reached: u32,
}

impl IntegrationResult {
    pub fn from_slices<'a>(slices: impl IntoIterator<Item = &'a Slice>) -> Self {
        let mut out = Self::default();
        for s in slices {
            out.push(s);
        }
        out
    }

    fn push(&mut self, slice: &Slice) {
        self.estimated_area += slice.area;
        self.accepted_slice_count += 1;
        self.max_depth_reached = self.max_depth_reached.max(slice.depth);
    }
}

enum Step {
    Accept(Slice),
    Split(f64),
}

/// Lazy, left-to-right sequence of accepted slices.
///
/// Refinement uses an explicit work stack instead of recursion, so the call
/// stack stays flat however deep `max_depth` allows refinement to go. After
/// the first `Err` the iterator is exhausted.
pub struct Slices<F> {
    f: F,
    xmin: f64,
    xmax: f64,
    dx: f64,
    opts: IntegrationOptions,
    next_base: usize,
    stack: Vec<(f64, f64, u32)>,
    done: bool,
}

impl<F: Fn(f64) -> f64> Slices<F> {
    pub fn new(f: F, xmin: f64, xmax: f64, opts: &IntegrationOptions) -> Result<Self> {
        opts.validate(xmin, xmax)?;
        Ok(Self {
            f,
            xmin,
            xmax,
            dx: (xmax - xmin) / opts.intervals as f64,
            opts: *opts,
            next_base: 0,
            stack: Vec::new(),
            done: false,
        })
    }

    fn base_slice(&self, i: usize) -> (f64, f64) {
        let x1 = self.xmin + i as f64 * self.dx;
        let x2 = if i + 1 == self.opts.intervals {
            self.xmax
        } else {
            self.xmin + (i + 1) as f64 * self.dx
        };
        (x1, x2)
    }

    fn refine(&self, x1: f64, x2: f64, depth: u32) -> Result<Step> {
        let f = &self.f;
        let y1 = f(x1);
        let y2 = f(x2);
        let xm = (x1 + x2) / 2.0;
        let ym = f(xm);

        let large = (x2 - x1) * (y1 + y2) / 2.0;
        let first = (xm - x1) * (y1 + ym) / 2.0;
        let second = (x2 - xm) * (y2 + ym) / 2.0;
        let both = first + second;

        let accept = match self.opts.zero_area {
            ZeroAreaPolicy::AbsoluteFallback if large.abs() <= ZERO_AREA_EPSILON => {
                (both - large).abs() < self.opts.max_error
            }
            _ if large == 0.0 => return Err(Error::DivisionByZero { x1, x2 }),
            _ => ((both - large) / large).abs() < self.opts.max_error,
        };

        if accept {
            return Ok(Step::Accept(Slice { x1, x2, y1, y2, area: both, depth }));
        }
        if depth >= self.opts.max_depth {
            return Err(Error::MaxDepthExceeded { max_depth: self.opts.max_depth, x1, x2 });
        }
        Ok(Step::Split(xm))
    }
}

impl<F: Fn(f64) -> f64> Iterator for Slices<F> {
    type Item = Result<Slice>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        loop {
            let (x1, x2, depth) = match self.stack.pop() {
                Some(work) => work,
                None if self.next_base < self.opts.intervals => {
                    let (x1, x2) = self.base_slice(self.next_base);
                    self.next_base += 1;
                    (x1, x2, 0)
                }
                None => {
                    self.done = true;
                    return None;
                }
            };
            match self.refine(x1, x2, depth) {
                Ok(Step::Accept(slice)) => {
                    trace!(x1 = slice.x1, x2 = slice.x2, area = slice.area, depth, "accepted slice");
                    return Some(Ok(slice));
                }
                Ok(Step::Split(xm)) => {
                    // right half first so the left half is refined next
                    self.stack.push((xm, x2, depth + 1));
                    self.stack.push((x1, xm, depth + 1));
                }
                Err(e) => {
                    self.done = true;
                    return Some(Err(e));
                }
            }
        }
    }
}

/// Convenience wrapper returning only the estimated area.
pub fn integrate<F>(f: F, xmin: f64, xmax: f64, intervals: usize, max_error: f64) -> Result<f64>
where
    F: Fn(f64) -> f64,
{
    integrate_with(f, xmin, xmax, &IntegrationOptions::new(intervals, max_error)).map(|r| r.estimated_area)
}

/// Integrate `f` over `[xmin, xmax]`, reducing the slice stream to area and count.
pub fn integrate_with<F>(f: F, xmin: f64, xmax: f64, opts: &IntegrationOptions) -> Result<IntegrationResult>
where
    F: Fn(f64) -> f64,
{
    debug!(xmin, xmax, intervals = opts.intervals, max_error = opts.max_error, "integrating");
    let mut result = IntegrationResult::default();
    for slice in Slices::new(f, xmin, xmax, opts)? {
        match slice {
            Ok(s) => result.push(&s),
            Err(e) => {
                warn!(error = %e, "integration failed");
                return Err(e);
            }
        }
    }
    debug!(area = result.estimated_area, slices = result.accepted_slice_count, "integration done");
    Ok(result)
}

/// Same refinement as `integrate_with`, but keeps every accepted slice for drawing.
pub fn collect_slices<F>(f: F, xmin: f64, xmax: f64, opts: &IntegrationOptions) -> Result<Vec<Slice>>
where
    F: Fn(f64) -> f64,
{
    let slices = Slices::new(f, xmin, xmax, opts)?.collect::<Result<Vec<_>>>();
    if let Err(e) = &slices {
        warn!(error = %e, "slice collection failed");
    }
    slices
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_slices_tile_the_range_exactly() {
        let s = Slices::new(|x| x, 0.1, 0.7, &IntegrationOptions::new(3, 0.5)).unwrap();
        assert_eq!(s.base_slice(0).0, 0.1);
        assert_eq!(s.base_slice(0).1, s.base_slice(1).0);
        assert_eq!(s.base_slice(2).1, 0.7);
    }

    #[test]
    fn iterator_is_fused_after_error() {
        let mut it = Slices::new(|x| x, -1.0, 1.0, &IntegrationOptions::new(1, 0.1)).unwrap();
        assert!(matches!(it.next(), Some(Err(Error::DivisionByZero { .. }))));
        assert!(it.next().is_none());
        assert!(it.next().is_none());
    }
}
