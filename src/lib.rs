#![doc(test(no_crate_inject))]
//! Random non-crossing graphs over scattered points.
//!
//! Points are scattered over the square `[0, n) x [0, n)`, every point learns
//! its nearest neighbour, and a single ordered pass connects each point to that
//! neighbour with a straight edge unless the edge would cross one that is
//! already in place. The resulting [`Graph`](data::Graph) is meant as an input
//! instance for map colouring: the points are regions and the edges connect
//! neighbouring regions.
//!
//! ```rust
//! # use mapgraph::algorithms::random_graph;
//! # use mapgraph::Error;
//! use rand::SeedableRng;
//! let mut rng = rand::rngs::SmallRng::seed_from_u64(7);
//! let graph = random_graph(20, &mut rng)?;
//! assert_eq!(graph.len(), 20);
//! assert!(graph.validate().is_ok());
//! # Ok::<(), Error>(())
//! ```
use num_traits::{PrimInt, Signed};
use std::cmp::Ordering;
use std::ops::BitXor;

pub mod algorithms;
pub mod data;
mod intersection;
mod orientation;

pub use orientation::Orientation;

pub use intersection::Intersects;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
  /// The requested vertex count is negative or does not fit the coordinate type.
  InvalidArgument,
  /// A vertex lists itself as a neighbour.
  SelfLoop,
  /// `a` lists `b` as a neighbour but `b` does not list `a`.
  AsymmetricNeighbors,
  /// Two edges of the graph cross each other.
  CrossingEdges,
  /// A vertex refers to a vertex that is not part of the graph.
  UnknownVertex,
}

impl std::fmt::Display for Error {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> Result<(), std::fmt::Error> {
    match self {
      Error::InvalidArgument => write!(f, "Invalid argument"),
      Error::SelfLoop => write!(f, "Vertex is its own neighbor"),
      Error::AsymmetricNeighbors => write!(f, "Neighbor sets are not symmetric"),
      Error::CrossingEdges => write!(f, "Crossing edges"),
      Error::UnknownVertex => write!(f, "Reference to an unknown vertex"),
    }
  }
}

impl std::error::Error for Error {}

/// Scalar type usable as a vertex coordinate.
///
/// Distance and orientation tests are exact: they widen to the next integer
/// size and never overflow, whatever the inputs.
pub trait Coordinate: std::fmt::Debug + PrimInt + Signed {
  /// Compare the distance from `p` to `q` with the distance from `p` to `r`.
  fn cmp_dist(p: &[Self; 2], q: &[Self; 2], r: &[Self; 2]) -> Ordering;
  /// Sign of the turn `p -> q -> r`. `Greater` is counter-clockwise.
  fn cmp_slope(p: &[Self; 2], q: &[Self; 2], r: &[Self; 2]) -> Ordering;
}

macro_rules! fixed_precision {
  ( $ty:ty, $uty:ty, $ulong: ty ) => {
    impl Coordinate for $ty {
      fn cmp_dist(p: &[Self; 2], q: &[Self; 2], r: &[Self; 2]) -> Ordering {
        fn diff(a: $ty, b: $ty) -> $ulong {
          if b > a {
            b.wrapping_sub(a) as $uty as $ulong
          } else {
            a.wrapping_sub(b) as $uty as $ulong
          }
        }
        let pq_x = diff(p[0], q[0]);
        let pq_y = diff(p[1], q[1]);
        let (pq_dist_squared, pq_overflow) = (pq_x * pq_x).overflowing_add(pq_y * pq_y);
        let pr_x = diff(p[0], r[0]);
        let pr_y = diff(p[1], r[1]);
        let (pr_dist_squared, pr_overflow) = (pr_x * pr_x).overflowing_add(pr_y * pr_y);
        match (pq_overflow, pr_overflow) {
          (true, false) => Ordering::Greater,
          (false, true) => Ordering::Less,
          _ => pq_dist_squared.cmp(&pr_dist_squared),
        }
      }

      fn cmp_slope(p: &[Self; 2], q: &[Self; 2], r: &[Self; 2]) -> Ordering {
        // diff(a,b) = (c, sign) where a = if sign { b-c } else { b+c }
        fn diff(a: $ty, b: $ty) -> ($ulong, bool) {
          if b > a {
            (b.wrapping_sub(a) as $uty as $ulong, true)
          } else {
            (a.wrapping_sub(b) as $uty as $ulong, false)
          }
        }
        let (ux, ux_neg) = diff(q[0], p[0]);
        let (vy, vy_neg) = diff(r[1], p[1]);
        let ux_vy_neg = ux_neg.bitxor(vy_neg) && ux != 0 && vy != 0;
        let (uy, uy_neg) = diff(q[1], p[1]);
        let (vx, vx_neg) = diff(r[0], p[0]);
        let uy_vx_neg = uy_neg.bitxor(vx_neg) && uy != 0 && vx != 0;
        match (ux_vy_neg, uy_vx_neg) {
          (true, false) => Ordering::Less,
          (false, true) => Ordering::Greater,
          (true, true) => (uy * vx).cmp(&(ux * vy)),
          (false, false) => (ux * vy).cmp(&(uy * vx)),
        }
      }
    }
  };
}

fixed_precision!(i8, u8, u16);
fixed_precision!(i16, u16, u32);
fixed_precision!(i32, u32, u64);
fixed_precision!(i64, u64, u128);
fixed_precision!(isize, usize, u128);

#[cfg(test)]
pub mod testing;
