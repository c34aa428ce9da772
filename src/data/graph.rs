use std::collections::BTreeSet;
use std::ops::Index;

use super::{Color, Edge, EndPoint, LineSegmentView, Point, Vertex, VertexId};
use crate::algorithms::{edges_cross, GraphBuilder};
use crate::{Coordinate, Error};

/// Vertices scattered in the plane and the non-crossing edges between them.
///
/// The vertex sequence keeps generation order. After construction only the
/// vertex colors can change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Graph<T> {
  pub(crate) vertices: Vec<Vertex<T>>,
}

impl<T> Default for Graph<T> {
  fn default() -> Self {
    Graph {
      vertices: Vec::new(),
    }
  }
}

impl<T> Graph<T> {
  /// Connect a fixed layout of points.
  ///
  /// Runs the nearest-neighbor scan and the connection pass over `points`,
  /// which keep their order. Deterministic.
  ///
  /// ```rust
  /// # use mapgraph::data::{Graph, Point, VertexId};
  /// let graph = Graph::from_points(vec![Point::new([0, 0]), Point::new([3, 4])]);
  /// assert!(graph.neighbors(VertexId(0)).contains(&VertexId(1)));
  /// assert!(graph[VertexId(1)].is_connected_to_closest_neighbor());
  /// ```
  pub fn from_points(points: Vec<Point<T>>) -> Graph<T>
  where
    T: Coordinate,
  {
    let mut builder = GraphBuilder::new(points);
    builder.populate_closest_neighbors();
    builder.connect_closest_neighbors();
    builder.build()
  }

  pub fn vertices(&self) -> &[Vertex<T>] {
    &self.vertices
  }

  pub fn vertex(&self, id: VertexId) -> Option<&Vertex<T>> {
    self.vertices.get(id.0)
  }

  pub fn vertex_ids(&self) -> impl Iterator<Item = VertexId> {
    (0..self.vertices.len()).map(VertexId)
  }

  pub fn len(&self) -> usize {
    self.vertices.len()
  }

  pub fn is_empty(&self) -> bool {
    self.vertices.is_empty()
  }

  /// # Panics
  ///
  /// Panics if `id` is not a vertex of this graph.
  pub fn position(&self, id: VertexId) -> &Point<T> {
    &self[id].position
  }

  /// # Panics
  ///
  /// Panics if `id` is not a vertex of this graph.
  pub fn neighbors(&self, id: VertexId) -> &BTreeSet<VertexId> {
    &self[id].neighbors
  }

  /// # Panics
  ///
  /// Panics if `id` is not a vertex of this graph.
  pub fn color(&self, id: VertexId) -> Color {
    self[id].color
  }

  /// # Panics
  ///
  /// Panics if `id` is not a vertex of this graph.
  pub fn closest_neighbor(&self, id: VertexId) -> Option<VertexId> {
    self[id].closest_neighbor
  }

  /// Store `color` on a vertex. Any value is accepted.
  pub fn set_color(&mut self, id: VertexId, color: Color) -> Result<(), Error> {
    let vertex = self.vertices.get_mut(id.0).ok_or(Error::UnknownVertex)?;
    vertex.color = color;
    Ok(())
  }

  /// Reset every vertex to [`UNCOLORED`](super::UNCOLORED).
  pub fn clear_colors(&mut self) {
    for vertex in self.vertices.iter_mut() {
      vertex.color = super::UNCOLORED;
    }
  }

  /// Every edge once, ordered by `(min, max)`.
  pub fn edges(&self) -> impl Iterator<Item = Edge> + '_ {
    self.vertex_ids().flat_map(move |id| {
      self[id]
        .neighbors
        .range(id..)
        .map(move |&other| Edge::new(id, other))
    })
  }

  pub fn edge_count(&self) -> usize {
    self.vertices.iter().map(Vertex::degree).sum::<usize>() / 2
  }

  /// The straight line segment drawn for `edge`.
  pub fn segment(&self, edge: Edge) -> LineSegmentView<'_, T>
  where
    T: Ord,
  {
    LineSegmentView::new(
      EndPoint::Inclusive(self.position(edge.min)),
      EndPoint::Inclusive(self.position(edge.max)),
    )
  }

  /// Check that no vertex is its own neighbor, that the neighbor relation is
  /// symmetric, and that no two edges cross.
  ///
  /// # Time complexity
  /// $O(m^2)$ for `m` edges.
  pub fn validate(&self) -> Result<(), Error>
  where
    T: Coordinate,
  {
    for id in self.vertex_ids() {
      let vertex = &self[id];
      if let Some(closest) = vertex.closest_neighbor {
        self.vertex(closest).ok_or(Error::UnknownVertex)?;
      }
      for &other in vertex.neighbors.iter() {
        if other == id {
          return Err(Error::SelfLoop);
        }
        let other = self.vertex(other).ok_or(Error::UnknownVertex)?;
        if !other.neighbors.contains(&id) {
          return Err(Error::AsymmetricNeighbors);
        }
      }
    }
    let edges: Vec<Edge> = self.edges().collect();
    for (nth, &a) in edges.iter().enumerate() {
      if edges[nth + 1..]
        .iter()
        .any(|&b| edges_cross(&self.vertices, a, b))
      {
        return Err(Error::CrossingEdges);
      }
    }
    Ok(())
  }
}

impl<T> Index<VertexId> for Graph<T> {
  type Output = Vertex<T>;
  fn index(&self, id: VertexId) -> &Vertex<T> {
    &self.vertices[id.0]
  }
}
