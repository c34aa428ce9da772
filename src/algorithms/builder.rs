use claims::debug_assert_ok;
use log::{debug, trace};
use rand::Rng;
use std::convert::TryFrom;

use super::{closest_neighbors, first_crossing, random_points};
use crate::data::{Graph, Point, Vertex, VertexId};
use crate::{Coordinate, Error};

/// Outcome of one connection pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ConnectionReport {
  /// Calls to [`GraphBuilder::connect`].
  pub attempted: usize,
  /// Attempts that added an edge.
  pub connected: usize,
  /// Attempts refused because the edge would cross an existing one.
  pub rejected: usize,
  /// Vertices whose closest neighbor had already connected to them.
  pub already_connected: usize,
}

/// In-progress graph. Owns the vertices while edges are being added and hands
/// them over to a [`Graph`] once done.
#[derive(Debug, Clone)]
pub struct GraphBuilder<T> {
  vertices: Vec<Vertex<T>>,
}

impl<T> GraphBuilder<T>
where
  T: Coordinate,
{
  /// Start from unconnected vertices at `points`, in order.
  pub fn new(points: Vec<Point<T>>) -> GraphBuilder<T> {
    GraphBuilder {
      vertices: points.into_iter().map(Vertex::new).collect(),
    }
  }

  pub fn vertices(&self) -> &[Vertex<T>] {
    &self.vertices
  }

  /// Record the closest neighbor of every vertex.
  ///
  /// # Time complexity
  /// $O(n^2)$
  pub fn populate_closest_neighbors(&mut self) {
    let points: Vec<Point<T>> = self.vertices.iter().map(|v| v.position).collect();
    for (vertex, closest) in self.vertices.iter_mut().zip(closest_neighbors(&points)) {
      vertex.closest_neighbor = closest;
    }
    debug!("closest neighbors found for {} vertices", self.vertices.len());
  }

  /// Try to add the edge `v1`-`v2`.
  ///
  /// The edge is added to both neighbor sets unless it crosses an edge that is
  /// already in place, in which case nothing changes. Each end point whose
  /// closest neighbor is the other end is flagged as connected to it. A vertex
  /// is never connected to itself.
  ///
  /// # Time complexity
  /// $O(n + m)$ for `n` vertices and `m` edges.
  pub fn connect(&mut self, v1: VertexId, v2: VertexId) -> bool {
    if v1 == v2 {
      return false;
    }
    if let Some(blocker) = first_crossing(&self.vertices, v1, v2) {
      trace!("{:?}-{:?} rejected, crosses {:?}", v1, v2, blocker);
      return false;
    }
    self.vertices[v1.0].neighbors.insert(v2);
    self.vertices[v2.0].neighbors.insert(v1);
    if self.vertices[v1.0].closest_neighbor == Some(v2) {
      self.vertices[v1.0].connected_to_closest_neighbor = true;
    }
    if self.vertices[v2.0].closest_neighbor == Some(v1) {
      self.vertices[v2.0].connected_to_closest_neighbor = true;
    }
    true
  }

  /// Connect every vertex to its closest neighbor, in vertex order.
  ///
  /// Each vertex gets exactly one attempt. A vertex whose closest neighbor
  /// already connected to it earlier in the pass is only flagged. Failed
  /// attempts are not retried.
  ///
  /// # Time complexity
  /// $O(n (n + m))$
  pub fn connect_closest_neighbors(&mut self) -> ConnectionReport {
    let mut report = ConnectionReport::default();
    for idx in 0..self.vertices.len() {
      let v = VertexId(idx);
      let closest = match self.vertices[idx].closest_neighbor {
        Some(closest) => closest,
        None => continue,
      };
      if self.vertices[idx].neighbors.contains(&closest) {
        self.vertices[idx].connected_to_closest_neighbor = true;
        report.already_connected += 1;
        continue;
      }
      report.attempted += 1;
      if self.connect(v, closest) {
        report.connected += 1;
      } else {
        report.rejected += 1;
      }
    }
    debug!(
      "connection pass: {} attempted, {} connected, {} rejected, {} already connected",
      report.attempted, report.connected, report.rejected, report.already_connected
    );
    report
  }

  pub fn build(self) -> Graph<T> {
    let graph = Graph {
      vertices: self.vertices,
    };
    debug_assert_ok!(graph.validate());
    graph
  }
}

/// Scatter `n` points over `[0, n) x [0, n)` and connect each to its closest
/// neighbor unless that crosses an earlier edge.
///
/// Fails with [`Error::InvalidArgument`] if `n` is negative.
///
/// ```rust
/// # use mapgraph::algorithms::random_graph;
/// # use mapgraph::Error;
/// use rand::SeedableRng;
/// let mut rng = rand::rngs::SmallRng::seed_from_u64(0);
/// let graph = random_graph(2, &mut rng)?;
/// assert_eq!(graph.edge_count(), 1);
/// assert!(random_graph(-1, &mut rng).is_err());
/// # Ok::<(), Error>(())
/// ```
pub fn random_graph<R>(n: i64, rng: &mut R) -> Result<Graph<i64>, Error>
where
  R: Rng + ?Sized,
{
  let count = usize::try_from(n).map_err(|_| Error::InvalidArgument)?;
  debug!("building random graph with {} vertices", count);
  let mut builder = GraphBuilder::new(random_points(count, rng)?);
  builder.populate_closest_neighbors();
  builder.connect_closest_neighbors();
  Ok(builder.build())
}
