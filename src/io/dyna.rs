//! LS-DYNA keyword output
use super::{DynaIO, ELEMENT_KEYWORD, END_KEYWORD, NODE_KEYWORD};
use crate::mesh::StructuredMesh;
use crate::types::Result;
use std::io::Write;

fn write_header<W: Write>(writer: &mut W, header: &str, keyword: &str) -> Result<()> {
    if !header.is_empty() {
        writeln!(writer, "{header}")?;
    }
    writeln!(writer, "{keyword}")?;
    Ok(())
}

impl DynaIO for StructuredMesh {
    fn node_count(&self) -> usize {
        self.number_of_nodes()
    }

    fn element_count(&self) -> usize {
        self.number_of_elements()
    }

    fn write_nodes<W: Write>(&self, writer: &mut W, header: &str) -> Result<usize> {
        write_header(writer, header, NODE_KEYWORD)?;
        let mut count = 0;
        for node in self.nodes() {
            writeln!(
                writer,
                "{},{:.6},{:.6},{:.6}",
                node.id, node.x, node.y, node.z
            )?;
            count += 1;
        }
        writeln!(writer, "{END_KEYWORD}")?;
        Ok(count)
    }

    fn write_elements<W: Write>(&self, writer: &mut W, header: &str) -> Result<usize> {
        write_header(writer, header, ELEMENT_KEYWORD)?;
        let mut count = 0;
        for element in self.elements() {
            write!(writer, "{},{}", element.id, element.part_id)?;
            for n in element.nodes {
                write!(writer, ",{n}")?;
            }
            writeln!(writer)?;
            count += 1;
        }
        writeln!(writer, "{END_KEYWORD}")?;
        Ok(count)
    }
}
