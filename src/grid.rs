//! Node grid creation
mod axis;
mod bounds;
mod nodes;

pub use axis::{build_axis, AxisRange};
pub use bounds::BoundingBox;
pub use nodes::{origin_covered, Node, NodeGrid};
