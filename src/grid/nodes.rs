//! Node grid
use super::bounds::BoundingBox;
use crate::connectivity::ElementCounts;
use crate::types::{Axis, Result};
use itertools::iproduct;

/// A node of the mesh
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Node {
    /// The 1-based node ID
    pub id: usize,
    /// The x-coordinate
    pub x: f64,
    /// The y-coordinate
    pub y: f64,
    /// The z-coordinate
    pub z: f64,
}

/// The node coordinates of a rectilinear grid
///
/// Only the coordinates along each axis are stored; nodes are generated on demand.
#[derive(Debug, Clone, PartialEq)]
pub struct NodeGrid {
    xs: Vec<f64>,
    ys: Vec<f64>,
    zs: Vec<f64>,
}

impl NodeGrid {
    /// Create the node grid for a bounding box split into the given number of elements
    pub fn new(bounds: &BoundingBox, counts: &ElementCounts) -> Result<Self> {
        Ok(Self {
            xs: bounds.range(Axis::X).nodes(counts.along(Axis::X))?,
            ys: bounds.range(Axis::Y).nodes(counts.along(Axis::Y))?,
            zs: bounds.range(Axis::Z).nodes(counts.along(Axis::Z))?,
        })
    }

    /// The node coordinates along an axis
    pub fn coordinates(&self, axis: Axis) -> &[f64] {
        match axis {
            Axis::X => &self.xs,
            Axis::Y => &self.ys,
            Axis::Z => &self.zs,
        }
    }

    /// Total number of nodes
    pub fn number_of_nodes(&self) -> usize {
        self.xs.len() * self.ys.len() * self.zs.len()
    }

    /// Iterate through every node, in node ID order
    pub fn nodes(&self) -> impl Iterator<Item = Node> + '_ {
        iproduct!(&self.zs, &self.ys, &self.xs)
            .enumerate()
            .map(|(index, (z, y, x))| Node {
                id: index + 1,
                x: *x,
                y: *y,
                z: *z,
            })
    }

    /// Does the grid have nodes on the line x = 0, y = 0?
    pub fn origin_covered(&self) -> bool {
        origin_covered(&self.xs, &self.ys)
    }
}

/// Check that nodes lie on the line x = 0, y = 0
///
/// The check passes if 0 is one of the x-coordinates or one of the y-coordinates. Values are
/// compared exactly.
pub fn origin_covered(xs: &[f64], ys: &[f64]) -> bool {
    xs.contains(&0.0) || ys.contains(&0.0)
}
