//! Types specific to fem-mesh
use std::fmt;
use std::str::FromStr;

/// A coordinate axis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    /// The x-axis
    X,
    /// The y-axis
    Y,
    /// The z-axis
    Z,
}

impl Axis {
    /// All three axes, in (x, y, z) order
    pub const ALL: [Axis; 3] = [Axis::X, Axis::Y, Axis::Z];
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Axis::X => "x",
            Axis::Y => "y",
            Axis::Z => "z",
        };
        f.write_str(name)
    }
}

/// Errors raised while configuring or writing a mesh
///
/// Every variant other than [`Error::Io`] is a configuration error: it is raised before any
/// output has been produced.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// The bounding box was not given as (xmin, xmax, ymin, ymax, zmin, zmax)
    #[error("wrong number of position range limits: expected {expected}, found {found}")]
    WrongBoundCount {
        /// Number of values required
        expected: usize,
        /// Number of values supplied
        found: usize,
    },
    /// The element counts were not given as (nx, ny, nz)
    #[error("wrong number of element counts: expected 3, found {found}")]
    WrongCountLength {
        /// Number of values supplied
        found: usize,
    },
    /// An axis was given zero or a negative number of elements
    #[error("number of elements along {axis} must be at least 1, found {value}")]
    InvalidElementCount {
        /// The offending axis
        axis: Axis,
        /// The value supplied
        value: i64,
    },
    /// The mesh has more nodes than can be addressed
    #[error("mesh of {nx}x{ny}x{nz} elements has too many nodes")]
    MeshTooLarge {
        /// Number of elements along x
        nx: usize,
        /// Number of elements along y
        ny: usize,
        /// Number of elements along z
        nz: usize,
    },
    /// An axis has more nodes than can be stored
    #[error("{value} elements along {axis} is too many")]
    AxisTooLarge {
        /// The offending axis
        axis: Axis,
        /// The value supplied
        value: usize,
    },
    /// A bound was NaN or infinite
    #[error("position range limit along {axis} is not finite")]
    NonFiniteBound {
        /// The offending axis
        axis: Axis,
    },
    /// A part ID could not be parsed
    #[error("invalid part ID: {0:?}")]
    InvalidPartId(String),
    /// Writing output failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Is this a configuration error (as opposed to a failure while writing output)?
    pub fn is_configuration(&self) -> bool {
        !matches!(self, Error::Io(_))
    }
}

/// Result type
pub type Result<T> = std::result::Result<T, Error>;

/// A non-fatal condition noticed while setting up a mesh
///
/// Advisories never stop generation. They are logged when detected and kept so that the
/// caller can inspect them.
#[derive(Debug, Clone, PartialEq)]
pub enum Advisory {
    /// The bounds of an axis were given as (max, min) and have been reversed
    SwappedRange {
        /// The axis
        axis: Axis,
        /// The lower bound after reversal
        min: f64,
        /// The upper bound after reversal
        max: f64,
    },
    /// The bounds of an axis are equal, so every node shares that coordinate
    DegenerateRange {
        /// The axis
        axis: Axis,
        /// The common coordinate
        value: f64,
    },
    /// Neither the x nor the y node coordinates include 0
    OriginNotCovered,
}

impl fmt::Display for Advisory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Advisory::SwappedRange { axis, min, max } => write!(
                f,
                "{axis} range values were swapped in order (max -> min) and reversed to [{min}, {max}]"
            ),
            Advisory::DegenerateRange { axis, value } => write!(
                f,
                "{axis} range is degenerate: every node has {axis} = {value}"
            ),
            Advisory::OriginNotCovered => write!(
                f,
                "mesh does not contain nodes at (x, y) = (0, 0); this could lead to poor representation of an ARF focus"
            ),
        }
    }
}

/// Part (material) tag attached to every element
///
/// The tag is opaque to mesh generation: it is copied verbatim into the element output.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PartId {
    /// A numeric part ID
    Number(i64),
    /// A named part
    Name(String),
}

impl Default for PartId {
    fn default() -> Self {
        PartId::Number(1)
    }
}

impl From<i64> for PartId {
    fn from(id: i64) -> Self {
        PartId::Number(id)
    }
}

impl FromStr for PartId {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        if s.is_empty() || s.contains(',') {
            return Err(Error::InvalidPartId(s.to_string()));
        }
        Ok(match s.parse::<i64>() {
            Ok(n) => PartId::Number(n),
            Err(_) => PartId::Name(s.to_string()),
        })
    }
}

impl fmt::Display for PartId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PartId::Number(n) => write!(f, "{n}"),
            PartId::Name(s) => f.write_str(s),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_part_id_parse() {
        assert_eq!("1".parse::<PartId>().unwrap(), PartId::Number(1));
        assert_eq!(" 42 ".parse::<PartId>().unwrap(), PartId::Number(42));
        assert_eq!(
            "tissue".parse::<PartId>().unwrap(),
            PartId::Name(String::from("tissue"))
        );
        assert!("".parse::<PartId>().is_err());
        assert!("a,b".parse::<PartId>().is_err());
    }

    #[test]
    fn test_part_id_display() {
        assert_eq!(PartId::default().to_string(), "1");
        assert_eq!(PartId::Name(String::from("gel")).to_string(), "gel");
    }

    #[test]
    fn test_error_kinds() {
        let e = Error::InvalidElementCount {
            axis: Axis::Y,
            value: 0,
        };
        assert!(e.is_configuration());
        assert_eq!(
            e.to_string(),
            "number of elements along y must be at least 1, found 0"
        );
        let e = Error::MeshTooLarge {
            nx: usize::MAX,
            ny: 1,
            nz: 1,
        };
        assert!(e.is_configuration());
        let e = Error::from(std::io::Error::other("disk full"));
        assert!(!e.is_configuration());
    }
}
