//! Node coordinates along a single axis
use crate::connectivity::MAX_NODES;
use crate::types::{Advisory, Axis, Error, Result};
use log::warn;

/// The closed interval covered by the mesh along one axis
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisRange {
    axis: Axis,
    min: f64,
    max: f64,
}

impl AxisRange {
    /// Create a range from two bounds
    ///
    /// If `a > b` the bounds are swapped and an advisory is returned alongside the range. Equal
    /// bounds are accepted but also produce an advisory.
    pub fn new(axis: Axis, a: f64, b: f64) -> Result<(Self, Option<Advisory>)> {
        if !a.is_finite() || !b.is_finite() {
            return Err(Error::NonFiniteBound { axis });
        }
        let (min, max, advisory) = if a > b {
            let advisory = Advisory::SwappedRange {
                axis,
                min: b,
                max: a,
            };
            warn!("{advisory}");
            (b, a, Some(advisory))
        } else if a == b {
            let advisory = Advisory::DegenerateRange { axis, value: a };
            warn!("{advisory}");
            (a, b, Some(advisory))
        } else {
            (a, b, None)
        };
        Ok((Self { axis, min, max }, advisory))
    }

    /// The axis
    pub fn axis(&self) -> Axis {
        self.axis
    }

    /// The lower bound
    pub fn min(&self) -> f64 {
        self.min
    }

    /// The upper bound
    pub fn max(&self) -> f64 {
        self.max
    }

    /// Node coordinates for `n` elements along this range
    pub fn nodes(&self, n: usize) -> Result<Vec<f64>> {
        if n == 0 {
            return Err(Error::InvalidElementCount {
                axis: self.axis,
                value: 0,
            });
        }
        if n >= MAX_NODES {
            return Err(Error::AxisTooLarge {
                axis: self.axis,
                value: n,
            });
        }
        Ok(linspace(self.min, self.max, n))
    }
}

/// Node coordinates for `n` evenly sized elements between `min` and `max`
///
/// Returns `n + 1` values. The first value is exactly `min` and the last is exactly `max`. Bounds
/// given as (max, min) are reversed with a warning. Errors are reported against the x-axis; use
/// [`AxisRange`] to label another axis.
pub fn build_axis(min: f64, max: f64, n: usize) -> Result<Vec<f64>> {
    let (range, _) = AxisRange::new(Axis::X, min, max)?;
    range.nodes(n)
}

fn linspace(min: f64, max: f64, n: usize) -> Vec<f64> {
    let step = (max - min) / n as f64;
    let mut values = (0..n).map(|i| min + i as f64 * step).collect::<Vec<_>>();
    values.push(max);
    values
}
