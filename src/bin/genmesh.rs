//! Generate a rectilinear hexahedral mesh as LS-DYNA node and element input files
//!
//! Usage:
//!   genmesh --xyz -1 0 -1 1 -4 0 --numElem 20 20 20 --partid 1
//!   genmesh --corners 0 0 0 1 1 -2 --numElem 10 10 20 --gmsh mesh.msh
//!
//! Set `RUST_LOG` to change the log level (default: info).
use clap::Parser;
use fem_mesh::config::{
    Bounds, MeshConfig, DEFAULT_BOUNDS, DEFAULT_COUNTS, DEFAULT_ELEMENT_FILE, DEFAULT_NODE_FILE,
};
use fem_mesh::io::{header_comment, DynaIO, GmshIO};
use fem_mesh::mesh::StructuredMesh;
use fem_mesh::types::{PartId, Result};
use log::{error, info};
use std::path::PathBuf;
use std::process::ExitCode;

/// Generate a rectilinear 3D mesh as specified on the command line
#[derive(Parser, Debug)]
#[command(name = "genmesh")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Generate rectilinear 3D mesh as specified on the command line", long_about = None)]
struct Args {
    /// Node definition input file
    #[arg(long, default_value = DEFAULT_NODE_FILE)]
    nodefile: PathBuf,

    /// Element definition input file
    #[arg(long, default_value = DEFAULT_ELEMENT_FILE)]
    elefile: PathBuf,

    /// Part ID to assign to the new structure
    #[arg(long, default_value = "1")]
    partid: PartId,

    /// x, y, z ranges (xmin, xmax, ymin, ymax, zmin, zmax)
    #[arg(long, num_args = 1.., allow_negative_numbers = true, default_values_t = DEFAULT_BOUNDS)]
    xyz: Vec<f64>,

    /// Two opposite corners of the mesh (x1, y1, z1, x2, y2, z2), instead of --xyz
    #[arg(long, num_args = 6, allow_negative_numbers = true, conflicts_with = "xyz")]
    corners: Option<Vec<f64>>,

    /// Number of elements in each dimension (x, y, z)
    #[arg(long = "numElem", visible_alias = "num-elem", num_args = 1.., allow_negative_numbers = true, default_values_t = DEFAULT_COUNTS)]
    num_elem: Vec<i64>,

    /// Also export the mesh in Gmsh format
    #[arg(long)]
    gmsh: Option<PathBuf>,
}

impl Args {
    fn mesh_config(&self) -> MeshConfig {
        let bounds = match &self.corners {
            Some(c) => Bounds::Corners([c[0], c[1], c[2]], [c[3], c[4], c[5]]),
            None => Bounds::Ranges(self.xyz.clone()),
        };
        MeshConfig {
            bounds,
            counts: self.num_elem.clone(),
            part_id: self.partid.clone(),
        }
    }

    /// The options in command-line form, for the output file header
    fn describe(&self) -> String {
        let join = |values: &[f64]| {
            values
                .iter()
                .map(|v| v.to_string())
                .collect::<Vec<_>>()
                .join(" ")
        };
        let mut s = format!(
            "--nodefile {} --elefile {} --partid {}",
            self.nodefile.display(),
            self.elefile.display(),
            self.partid
        );
        match &self.corners {
            Some(c) => s.push_str(&format!(" --corners {}", join(c.as_slice()))),
            None => s.push_str(&format!(" --xyz {}", join(self.xyz.as_slice()))),
        }
        s.push_str(" --numElem");
        for n in &self.num_elem {
            s.push_str(&format!(" {n}"));
        }
        if let Some(path) = &self.gmsh {
            s.push_str(&format!(" --gmsh {}", path.display()));
        }
        s
    }
}

fn run(args: &Args) -> Result<()> {
    let mesh = StructuredMesh::from_config(&args.mesh_config())?;

    let program = std::env::args().next().unwrap_or_else(|| String::from("genmesh"));
    let header = header_comment(&program, &args.describe());

    mesh.export_nodes(&args.nodefile, &header)?;
    mesh.export_elements(&args.elefile, &header)?;

    if let Some(path) = &args.gmsh {
        mesh.export_as_gmsh(path)?;
        info!("Gmsh mesh written to {}", path.display());
    }
    Ok(())
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            if e.is_configuration() {
                error!("Invalid mesh configuration: {e}");
            } else {
                error!("Failed to write mesh: {e}");
            }
            ExitCode::FAILURE
        }
    }
}
