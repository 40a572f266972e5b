//! Structured hexahedral mesh
use crate::config::MeshConfig;
use crate::connectivity::{Element, ElementCounts};
use crate::grid::{BoundingBox, Node, NodeGrid};
use crate::types::{Advisory, Axis, PartId, Result};
use log::{debug, warn};

/// A rectilinear mesh of hexahedral elements
///
/// Nodes and elements are produced lazily; only the node coordinates along each axis are
/// stored. Calling [`StructuredMesh::nodes`] or [`StructuredMesh::elements`] again restarts
/// the sequence from the beginning.
#[derive(Debug, Clone)]
pub struct StructuredMesh {
    grid: NodeGrid,
    counts: ElementCounts,
    part_id: PartId,
    diagnostics: Vec<Advisory>,
}

impl StructuredMesh {
    /// Create a mesh of a bounding box
    pub fn new(bounds: &BoundingBox, counts: ElementCounts, part_id: PartId) -> Result<Self> {
        let grid = NodeGrid::new(bounds, &counts)?;
        debug!(
            "Creating {}x{}x{} mesh with {} nodes and {} elements",
            counts.along(Axis::X),
            counts.along(Axis::Y),
            counts.along(Axis::Z),
            counts.number_of_nodes(),
            counts.number_of_elements()
        );
        let mut diagnostics = vec![];
        if !grid.origin_covered() {
            warn!("{}", Advisory::OriginNotCovered);
            diagnostics.push(Advisory::OriginNotCovered);
        }
        Ok(Self {
            grid,
            counts,
            part_id,
            diagnostics,
        })
    }

    /// Create a mesh from a configuration
    ///
    /// Advisories raised while validating the configuration are kept in
    /// [`StructuredMesh::diagnostics`].
    pub fn from_config(config: &MeshConfig) -> Result<Self> {
        let (bounds, counts, mut diagnostics) = config.validate()?;
        let mut mesh = Self::new(&bounds, counts, config.part_id.clone())?;
        diagnostics.append(&mut mesh.diagnostics);
        mesh.diagnostics = diagnostics;
        Ok(mesh)
    }

    /// The node grid
    pub fn grid(&self) -> &NodeGrid {
        &self.grid
    }

    /// The number of elements along each axis
    pub fn counts(&self) -> &ElementCounts {
        &self.counts
    }

    /// The part ID assigned to every element
    pub fn part_id(&self) -> &PartId {
        &self.part_id
    }

    /// Total number of nodes
    pub fn number_of_nodes(&self) -> usize {
        self.counts.number_of_nodes()
    }

    /// Total number of elements
    pub fn number_of_elements(&self) -> usize {
        self.counts.number_of_elements()
    }

    /// Iterate through the nodes in ID order
    pub fn nodes(&self) -> impl Iterator<Item = Node> + '_ {
        self.grid.nodes()
    }

    /// Iterate through the elements in ID order
    pub fn elements(&self) -> impl Iterator<Item = Element<'_>> + '_ {
        self.counts.elements(&self.part_id)
    }

    /// Does the mesh have nodes on the line x = 0, y = 0?
    pub fn origin_covered(&self) -> bool {
        self.grid.origin_covered()
    }

    /// Advisories noticed while creating the mesh
    pub fn diagnostics(&self) -> &[Advisory] {
        &self.diagnostics
    }
}
