//! fem-mesh
//!
//! Structured hexahedral meshes for explicit finite element solvers.
//!
//! A mesh is described by a bounding box, the number of elements along each axis, and a part ID.
//! Nodes are numbered from 1 with x varying fastest, then y, then z; elements are numbered in the
//! same order, and their connectivity is computed from these numbers alone.
//!
//! ```
//! use fem_mesh::connectivity::ElementCounts;
//! use fem_mesh::grid::BoundingBox;
//! use fem_mesh::mesh::StructuredMesh;
//! use fem_mesh::types::PartId;
//!
//! let (bounds, _) = BoundingBox::from_ranges(&[0.0, 1.0, 0.0, 1.0, 0.0, 1.0]).unwrap();
//! let counts = ElementCounts::new(1, 1, 1).unwrap();
//! let mesh = StructuredMesh::new(&bounds, counts, PartId::default()).unwrap();
//!
//! assert_eq!(mesh.nodes().count(), 8);
//! let element = mesh.elements().next().unwrap();
//! assert_eq!(element.nodes, [1, 2, 4, 3, 5, 6, 8, 7]);
//! ```
#![cfg_attr(feature = "strict", deny(warnings))]
#![warn(missing_docs)]

pub mod config;
pub mod connectivity;
pub mod grid;
pub mod io;
pub mod mesh;
pub mod types;
