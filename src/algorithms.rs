pub mod builder;
pub mod crossing;
pub mod nearest_neighbor;
pub mod placement;

#[doc(inline)]
pub use builder::{random_graph, ConnectionReport, GraphBuilder};

#[doc(inline)]
pub use crossing::{edges_cross, first_crossing};

#[doc(inline)]
pub use nearest_neighbor::{closest_neighbor, closest_neighbors};

#[doc(inline)]
pub use placement::random_points;
