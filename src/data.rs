mod graph;
mod line_segment;
pub(crate) mod point;
mod vertex;

pub use graph::*;
pub use line_segment::*;
pub use point::Point;
pub use vertex::*;
