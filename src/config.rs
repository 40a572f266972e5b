//! Mesh configuration
use crate::connectivity::ElementCounts;
use crate::grid::BoundingBox;
use crate::types::{Advisory, PartId, Result};

/// Default node output file
pub const DEFAULT_NODE_FILE: &str = "nodes.dyn";

/// Default element output file
pub const DEFAULT_ELEMENT_FILE: &str = "elems.dyn";

/// Default bounds (xmin, xmax, ymin, ymax, zmin, zmax)
///
/// One quarter of a symmetric model, with z increasing towards the transducer face at z = 0.
pub const DEFAULT_BOUNDS: [f64; 6] = [-1.0, 0.0, -1.0, 1.0, -4.0, 0.0];

/// Default number of elements along each axis
pub const DEFAULT_COUNTS: [i64; 3] = [20, 20, 20];

/// How the region covered by the mesh is given
#[derive(Debug, Clone, PartialEq)]
pub enum Bounds {
    /// (xmin, xmax, ymin, ymax, zmin, zmax)
    Ranges(Vec<f64>),
    /// Two opposite corners of the box
    Corners([f64; 3], [f64; 3]),
}

impl Default for Bounds {
    fn default() -> Self {
        Bounds::Ranges(DEFAULT_BOUNDS.to_vec())
    }
}

/// Unvalidated mesh parameters, as supplied by a user
#[derive(Debug, Clone, PartialEq)]
pub struct MeshConfig {
    /// Region covered by the mesh
    pub bounds: Bounds,
    /// Number of elements along each axis
    pub counts: Vec<i64>,
    /// Part ID assigned to every element
    pub part_id: PartId,
}

impl Default for MeshConfig {
    fn default() -> Self {
        Self {
            bounds: Bounds::default(),
            counts: DEFAULT_COUNTS.to_vec(),
            part_id: PartId::default(),
        }
    }
}

impl MeshConfig {
    /// Check the configuration
    ///
    /// Returns an error for anything that would prevent a mesh being generated, and a list of
    /// advisories for anything that has been corrected.
    pub fn validate(&self) -> Result<(BoundingBox, ElementCounts, Vec<Advisory>)> {
        let (bounds, advisories) = match &self.bounds {
            Bounds::Ranges(values) => BoundingBox::from_ranges(values)?,
            Bounds::Corners(p, q) => BoundingBox::from_corners(*p, *q)?,
        };
        let counts = ElementCounts::from_signed(&self.counts)?;
        Ok((bounds, counts, advisories))
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::types::{Axis, Error};

    #[test]
    fn test_default_is_valid() {
        let (bounds, counts, advisories) = MeshConfig::default().validate().unwrap();
        assert!(advisories.is_empty());
        assert_eq!(counts.as_array(), [20, 20, 20]);
        assert_eq!(bounds.lower(), [-1.0, -1.0, -4.0]);
        assert_eq!(bounds.upper(), [0.0, 1.0, 0.0]);
    }

    #[test]
    fn test_invalid() {
        let config = MeshConfig {
            bounds: Bounds::Ranges(vec![0.0, 1.0]),
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(Error::WrongBoundCount { found: 2, .. })
        ));

        let config = MeshConfig {
            counts: vec![10, 0, 10],
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(Error::InvalidElementCount {
                axis: Axis::Y,
                value: 0
            })
        ));
    }

    #[test]
    fn test_corners() {
        let config = MeshConfig {
            bounds: Bounds::Corners([0.0, 1.0, 0.0], [-1.0, -1.0, -4.0]),
            ..Default::default()
        };
        let (bounds, _, advisories) = config.validate().unwrap();
        assert!(advisories.is_empty());
        let (expected, _, _) = MeshConfig::default().validate().unwrap();
        assert_eq!(bounds, expected);
    }
}
