use std::collections::BTreeSet;

use super::Point;

/// Color value assigned by a colorer. The graph never interprets it.
pub type Color = i32;

/// Color of a vertex that has not been colored yet.
pub const UNCOLORED: Color = -1;

/// Position of a vertex in its graph's vertex sequence.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct VertexId(pub usize);

impl std::fmt::Debug for VertexId {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> Result<(), std::fmt::Error> {
    write!(f, "VertexId({})", self.0)
  }
}

impl From<usize> for VertexId {
  fn from(idx: usize) -> VertexId {
    VertexId(idx)
  }
}

/// Undirected edge between two vertices, stored with `min < max`.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Edge {
  pub min: VertexId,
  pub max: VertexId,
  _private: (),
}

impl Edge {
  pub fn new(a: VertexId, b: VertexId) -> Edge {
    Edge {
      min: std::cmp::min(a, b),
      max: std::cmp::max(a, b),
      _private: (),
    }
  }

  pub fn contains(&self, vertex: VertexId) -> bool {
    self.min == vertex || self.max == vertex
  }

  /// The end point shared with `other`, if any.
  pub fn shared_endpoint(&self, other: &Edge) -> Option<VertexId> {
    if other.contains(self.min) {
      Some(self.min)
    } else if other.contains(self.max) {
      Some(self.max)
    } else {
      None
    }
  }
}

impl std::fmt::Debug for Edge {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("Edge")
      .field("min", &self.min)
      .field("max", &self.max)
      .finish()
  }
}

/// A point of the map together with the bookkeeping the graph builder and the
/// colorer need.
///
/// `closest_neighbor` and `neighbors` refer to other vertices of the same
/// [`Graph`](super::Graph) by [`VertexId`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vertex<T> {
  pub(crate) position: Point<T>,
  pub(crate) color: Color,
  pub(crate) closest_neighbor: Option<VertexId>,
  pub(crate) connected_to_closest_neighbor: bool,
  pub(crate) neighbors: BTreeSet<VertexId>,
}

impl<T> Vertex<T> {
  pub fn new(position: Point<T>) -> Vertex<T> {
    Vertex {
      position,
      color: UNCOLORED,
      closest_neighbor: None,
      connected_to_closest_neighbor: false,
      neighbors: BTreeSet::new(),
    }
  }

  pub fn position(&self) -> &Point<T> {
    &self.position
  }

  pub fn color(&self) -> Color {
    self.color
  }

  pub fn is_colored(&self) -> bool {
    self.color != UNCOLORED
  }

  pub fn closest_neighbor(&self) -> Option<VertexId> {
    self.closest_neighbor
  }

  pub fn is_connected_to_closest_neighbor(&self) -> bool {
    self.connected_to_closest_neighbor
  }

  pub fn neighbors(&self) -> &BTreeSet<VertexId> {
    &self.neighbors
  }

  pub fn degree(&self) -> usize {
    self.neighbors.len()
  }

  pub fn is_neighbor(&self, other: VertexId) -> bool {
    self.neighbors.contains(&other)
  }
}
