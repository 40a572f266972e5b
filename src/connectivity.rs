//! Element connectivity
//!
//! Node and element IDs are fully determined by position in the regular grid, so connectivity is
//! computed from integer indices alone and never touches coordinates.
//!
//! Nodes are numbered from 1 with x varying fastest, then y, then z. The node at grid position
//! (i, j, k) has ID `k * (nx + 1) * (ny + 1) + j * (nx + 1) + i + 1`. Elements are numbered from 1
//! in the same order over element positions.
use crate::types::{Axis, Error, PartId, Result};
use itertools::iproduct;

/// The largest number of nodes a mesh may have
///
/// Node coordinates along each axis are stored, so no axis may have more nodes than fit in one
/// allocation of `f64`s.
pub const MAX_NODES: usize = isize::MAX as usize / std::mem::size_of::<f64>();

/// Number of elements along each axis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ElementCounts {
    nx: usize,
    ny: usize,
    nz: usize,
}

impl ElementCounts {
    /// Create element counts
    ///
    /// Every count must be at least 1, and the mesh may have at most [`MAX_NODES`] nodes.
    pub fn new(nx: usize, ny: usize, nz: usize) -> Result<Self> {
        for (axis, n) in Axis::ALL.into_iter().zip([nx, ny, nz]) {
            if n == 0 {
                return Err(Error::InvalidElementCount { axis, value: 0 });
            }
        }
        let nodes = [nx, ny, nz]
            .into_iter()
            .try_fold(1usize, |total, n| n.checked_add(1)?.checked_mul(total))
            .filter(|&total| total <= MAX_NODES);
        if nodes.is_none() {
            return Err(Error::MeshTooLarge { nx, ny, nz });
        }
        Ok(Self { nx, ny, nz })
    }

    /// Create element counts from user input
    ///
    /// The input must have exactly three entries, each at least 1.
    pub fn from_signed(counts: &[i64]) -> Result<Self> {
        if counts.len() != 3 {
            return Err(Error::WrongCountLength {
                found: counts.len(),
            });
        }
        let mut out = [0; 3];
        for ((axis, &value), n) in Axis::ALL.into_iter().zip(counts).zip(out.iter_mut()) {
            *n = usize::try_from(value)
                .ok()
                .filter(|&n| n > 0)
                .ok_or(Error::InvalidElementCount { axis, value })?;
        }
        Self::new(out[0], out[1], out[2])
    }

    /// The number of elements along an axis
    pub fn along(&self, axis: Axis) -> usize {
        match axis {
            Axis::X => self.nx,
            Axis::Y => self.ny,
            Axis::Z => self.nz,
        }
    }

    /// The counts as (nx, ny, nz)
    pub fn as_array(&self) -> [usize; 3] {
        [self.nx, self.ny, self.nz]
    }

    /// Number of nodes in one row of constant y and z
    pub fn row_size(&self) -> usize {
        self.nx + 1
    }

    /// Number of nodes in one plane of constant z
    pub fn plane_size(&self) -> usize {
        (self.nx + 1) * (self.ny + 1)
    }

    /// Total number of nodes
    pub fn number_of_nodes(&self) -> usize {
        self.plane_size() * (self.nz + 1)
    }

    /// Total number of elements
    pub fn number_of_elements(&self) -> usize {
        self.nx * self.ny * self.nz
    }

    /// The 1-based ID of the node at grid position (i, j, k)
    ///
    /// The position must lie on the grid: `i <= nx`, `j <= ny` and `k <= nz`. This is only
    /// checked in debug builds; other positions give the ID of a different node.
    pub fn node_id(&self, i: usize, j: usize, k: usize) -> usize {
        debug_assert!(i <= self.nx && j <= self.ny && k <= self.nz);
        k * self.plane_size() + j * self.row_size() + i + 1
    }

    /// The 1-based ID of the element at element position (ex, ey, ez)
    ///
    /// The position must satisfy `ex < nx`, `ey < ny` and `ez < nz`. This is only checked in
    /// debug builds; other positions give the ID of a different element.
    pub fn element_id(&self, ex: usize, ey: usize, ez: usize) -> usize {
        debug_assert!(ex < self.nx && ey < self.ny && ez < self.nz);
        (ez * self.ny + ey) * self.nx + ex + 1
    }

    /// The node IDs of the hexahedron at element position (ex, ey, ez)
    ///
    /// The bottom face (constant z) is listed first, then the top face in matching order, so
    /// that the faces have outward normals by the right-hand rule:
    ///
    /// ```text
    ///   n8 ---- n7         n4 ---- n3
    ///   |        |  (top)  |        |  (bottom)
    ///   n5 ---- n6         n1 ---- n2
    /// ```
    pub fn hexahedron(&self, ex: usize, ey: usize, ez: usize) -> [usize; 8] {
        let row = self.row_size();
        let plane = self.plane_size();
        let n1 = self.node_id(ex, ey, ez);
        let n2 = n1 + 1;
        let n4 = n1 + row;
        let n3 = n4 + 1;
        let n5 = n1 + plane;
        let n6 = n5 + 1;
        let n7 = n6 + row;
        let n8 = n7 - 1;
        [n1, n2, n3, n4, n5, n6, n7, n8]
    }

    /// Iterate through every element, in element ID order
    pub fn elements<'a>(&self, part_id: &'a PartId) -> impl Iterator<Item = Element<'a>> {
        let counts = *self;
        iproduct!(0..self.nz, 0..self.ny, 0..self.nx)
            .enumerate()
            .map(move |(index, (ez, ey, ex))| Element {
                id: index + 1,
                part_id,
                nodes: counts.hexahedron(ex, ey, ez),
            })
    }
}

/// A hexahedral element
#[derive(Debug, Clone, PartialEq)]
pub struct Element<'a> {
    /// The 1-based element ID
    pub id: usize,
    /// The part the element belongs to
    pub part_id: &'a PartId,
    /// The 1-based IDs of the eight corner nodes
    pub nodes: [usize; 8],
}
