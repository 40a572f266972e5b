//! Mesh input/output
mod dyna;
mod gmsh;

use crate::types::Result;
use log::info;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Keyword that starts the node section of a DYNA input deck
pub const NODE_KEYWORD: &str = "*NODE";
/// Keyword that starts the solid element section of a DYNA input deck
pub const ELEMENT_KEYWORD: &str = "*ELEMENT_SOLID";
/// Keyword that ends a DYNA input deck
pub const END_KEYWORD: &str = "*END";

/// Create the comment block written at the top of DYNA files
///
/// Every line of `description` is written as a separate comment line.
pub fn header_comment(program: &str, description: &str) -> String {
    let mut header = format!("$ Generated using {program}:\n");
    for line in description.lines() {
        header.push_str(&format!("$ {line}\n"));
    }
    header.push('$');
    header
}

pub trait DynaIO {
    //! Mesh output as LS-DYNA keyword input

    /// The number of nodes in the node section
    fn node_count(&self) -> usize;

    /// The number of elements in the solid element section
    fn element_count(&self) -> usize;

    /// Write the node section, returning the number of nodes written
    fn write_nodes<W: Write>(&self, writer: &mut W, header: &str) -> Result<usize>;

    /// Write the solid element section, returning the number of elements written
    fn write_elements<W: Write>(&self, writer: &mut W, header: &str) -> Result<usize>;

    /// Export the nodes to a file
    fn export_nodes<P: AsRef<Path>>(&self, path: P, header: &str) -> Result<usize> {
        let path = path.as_ref();
        let mut writer = BufWriter::new(File::create(path)?);
        let count = self.write_nodes(&mut writer, header)?;
        writer.flush()?;
        info!(
            "{}/{} nodes written to {}",
            count,
            self.node_count(),
            path.display()
        );
        Ok(count)
    }

    /// Export the elements to a file
    fn export_elements<P: AsRef<Path>>(&self, path: P, header: &str) -> Result<usize> {
        let path = path.as_ref();
        let mut writer = BufWriter::new(File::create(path)?);
        let count = self.write_elements(&mut writer, header)?;
        writer.flush()?;
        info!(
            "{}/{} elements written to {}",
            count,
            self.element_count(),
            path.display()
        );
        Ok(count)
    }
}

pub trait GmshIO {
    //! Mesh output for Gmsh

    /// Write the mesh in Gmsh format
    fn write_gmsh<W: Write>(&self, writer: &mut W) -> Result<()>;

    /// Generate the Gmsh string for a mesh
    fn to_gmsh_string(&self) -> Result<String> {
        let mut buffer = vec![];
        self.write_gmsh(&mut buffer)?;
        Ok(String::from_utf8_lossy(&buffer).into_owned())
    }

    /// Export as Gmsh
    fn export_as_gmsh<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let mut writer = BufWriter::new(File::create(path)?);
        self.write_gmsh(&mut writer)?;
        writer.flush()?;
        Ok(())
    }
}
