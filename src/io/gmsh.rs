//! Gmsh output
use super::GmshIO;
use crate::mesh::StructuredMesh;
use crate::types::Result;
use std::io::Write;

/// Gmsh element type of a first order hexahedron
const GMSH_HEXAHEDRON: usize = 5;

impl GmshIO for StructuredMesh {
    // The hexahedron node order used for DYNA output is also Gmsh's, so no permutation is
    // needed
    fn write_gmsh<W: Write>(&self, writer: &mut W) -> Result<()> {
        let node_count = self.number_of_nodes();
        let cell_count = self.number_of_elements();

        writeln!(writer, "$MeshFormat")?;
        writeln!(writer, "4.1 0 8")?;
        writeln!(writer, "$EndMeshFormat")?;
        writeln!(writer, "$Nodes")?;
        writeln!(writer, "1 {node_count} 1 {node_count}")?;
        writeln!(writer, "3 1 0 {node_count}")?;
        for node in self.nodes() {
            writeln!(writer, "{}", node.id)?;
        }
        for node in self.nodes() {
            writeln!(writer, "{} {} {}", node.x, node.y, node.z)?;
        }
        writeln!(writer, "$EndNodes")?;
        writeln!(writer, "$Elements")?;
        writeln!(writer, "1 {cell_count} 1 {cell_count}")?;
        writeln!(writer, "3 1 {GMSH_HEXAHEDRON} {cell_count}")?;
        for element in self.elements() {
            write!(writer, "{}", element.id)?;
            for n in element.nodes {
                write!(writer, " {n}")?;
            }
            writeln!(writer)?;
        }
        writeln!(writer, "$EndElements")?;
        Ok(())
    }
}
