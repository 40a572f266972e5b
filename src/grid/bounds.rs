//! Bounding box of the mesh
use super::axis::AxisRange;
use crate::types::{Advisory, Axis, Error, Result};

/// Axis-aligned region covered by the mesh
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    ranges: [AxisRange; 3],
}

impl BoundingBox {
    /// Create a bounding box from (xmin, xmax, ymin, ymax, zmin, zmax)
    ///
    /// Any axis given as (max, min) is reversed and reported in the returned advisories.
    pub fn from_ranges(values: &[f64]) -> Result<(Self, Vec<Advisory>)> {
        if values.len() != 6 {
            return Err(Error::WrongBoundCount {
                expected: 6,
                found: values.len(),
            });
        }
        let mut advisories = vec![];
        let mut ranges = vec![];
        for (axis, pair) in Axis::ALL.into_iter().zip(values.chunks_exact(2)) {
            let (range, advisory) = AxisRange::new(axis, pair[0], pair[1])?;
            advisories.extend(advisory);
            ranges.push(range);
        }
        Ok((
            Self {
                ranges: [ranges[0], ranges[1], ranges[2]],
            },
            advisories,
        ))
    }

    /// Create the bounding box spanned by two opposite corners
    ///
    /// The corners may be any two opposite vertices of the box.
    pub fn from_corners(p: [f64; 3], q: [f64; 3]) -> Result<(Self, Vec<Advisory>)> {
        let mut values = [0.0; 6];
        for (i, pair) in values.chunks_exact_mut(2).enumerate() {
            // f64::min ignores NaN, so check before reducing
            if !p[i].is_finite() || !q[i].is_finite() {
                return Err(Error::NonFiniteBound { axis: Axis::ALL[i] });
            }
            pair[0] = p[i].min(q[i]);
            pair[1] = p[i].max(q[i]);
        }
        Self::from_ranges(&values)
    }

    /// The range along an axis
    pub fn range(&self, axis: Axis) -> &AxisRange {
        match axis {
            Axis::X => &self.ranges[0],
            Axis::Y => &self.ranges[1],
            Axis::Z => &self.ranges[2],
        }
    }

    /// The corner with the smallest coordinates
    pub fn lower(&self) -> [f64; 3] {
        self.ranges.map(|r| r.min())
    }

    /// The corner with the largest coordinates
    pub fn upper(&self) -> [f64; 3] {
        self.ranges.map(|r| r.max())
    }
}
