use crate::data::{Edge, EndPoint, LineSegmentView, Vertex, VertexId};
use crate::{Coordinate, Intersects};

/// Segment of `edge`, open at `shared` when that vertex is one of its ends.
fn segment<T: Ord>(
  vertices: &[Vertex<T>],
  edge: Edge,
  shared: Option<VertexId>,
) -> LineSegmentView<'_, T> {
  let end = |v: VertexId| EndPoint::new(&vertices[v.0].position, shared != Some(v));
  LineSegmentView::new(end(edge.min), end(edge.max))
}

/// Check whether two edges cross.
///
/// Edges that share a vertex only touch at that vertex and do not cross, unless
/// they also overlap beyond it. Vertices that merely sit at the same position
/// are distinct, so an edge passing through another vertex's position does
/// cross any edge ending there.
///
/// ```rust
/// # use mapgraph::algorithms::edges_cross;
/// # use mapgraph::data::{Edge, Point, Vertex, VertexId};
/// let vertices: Vec<Vertex<i64>> = [(0, 0), (2, 2), (0, 2), (2, 0)]
///   .iter()
///   .map(|&(x, y)| Vertex::new(Point::new([x, y])))
///   .collect();
/// let diagonal = Edge::new(VertexId(0), VertexId(1));
/// let other = Edge::new(VertexId(2), VertexId(3));
/// let side = Edge::new(VertexId(0), VertexId(2));
/// assert!(edges_cross(&vertices, diagonal, other));
/// assert!(!edges_cross(&vertices, diagonal, side));
/// ```
pub fn edges_cross<T>(vertices: &[Vertex<T>], a: Edge, b: Edge) -> bool
where
  T: Coordinate,
{
  if a == b {
    return false;
  }
  let shared = a.shared_endpoint(&b);
  segment(vertices, a, shared)
    .intersect(segment(vertices, b, shared))
    .is_some()
}

/// Find an existing edge that the segment from `v1` to `v2` would cross.
///
/// Every edge `(v3, v4)` with `v3` not an end point of the candidate is
/// examined, once from each of its ends. Edges that end in `v1` or `v2` are
/// therefore still checked from their far end.
///
/// # Time complexity
/// $O(n + m)$ for `n` vertices and `m` edges.
pub fn first_crossing<T>(vertices: &[Vertex<T>], v1: VertexId, v2: VertexId) -> Option<Edge>
where
  T: Coordinate,
{
  let candidate = Edge::new(v1, v2);
  vertices
    .iter()
    .enumerate()
    .map(|(idx, vertex)| (VertexId(idx), vertex))
    .filter(|&(v3, _)| v3 != v1 && v3 != v2)
    .flat_map(|(v3, vertex)| vertex.neighbors.iter().map(move |&v4| Edge::new(v3, v4)))
    .find(|&existing| edges_cross(vertices, candidate, existing))
}
