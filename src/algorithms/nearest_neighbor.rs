use crate::data::{Point, VertexId};
use crate::Coordinate;

/// Closest other point to the point at `idx`.
///
/// Points are scanned in order and the first point at the minimum distance is
/// returned. Exact, even when the squared distances overflow `T`.
///
/// # Time complexity
/// $O(n)$
pub fn closest_neighbor<T>(points: &[Point<T>], idx: usize) -> Option<VertexId>
where
  T: Coordinate,
{
  let origin = points.get(idx)?;
  points
    .iter()
    .enumerate()
    .filter(|&(other, _)| other != idx)
    // min_by keeps the first of several equal minimums.
    .min_by(|(_, p), (_, q)| origin.cmp_distance_to(p, q))
    .map(|(other, _)| VertexId(other))
}

/// Closest neighbor of every point, by brute force.
///
/// The relation is not symmetric: `a` may be closest to `b` while `b` is
/// closest to some third point.
///
/// ```rust
/// # use mapgraph::algorithms::closest_neighbors;
/// # use mapgraph::data::{Point, VertexId};
/// let points = vec![Point::new([0, 0]), Point::new([2, 0]), Point::new([5, 0])];
/// assert_eq!(
///   closest_neighbors(&points),
///   vec![Some(VertexId(1)), Some(VertexId(0)), Some(VertexId(1))]
/// );
/// ```
///
/// # Time complexity
/// $O(n^2)$
pub fn closest_neighbors<T>(points: &[Point<T>]) -> Vec<Option<VertexId>>
where
  T: Coordinate,
{
  (0..points.len())
    .map(|idx| closest_neighbor(points, idx))
    .collect()
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::testing::*;

  use claims::{assert_none, assert_some_eq};
  use proptest::prelude::*;
  use std::cmp::Ordering;

  fn points(pts: &[(i64, i64)]) -> Vec<Point<i64>> {
    pts.iter().map(|&pt| Point::from(pt)).collect()
  }

  #[test]
  fn empty() {
    assert!(closest_neighbors::<i64>(&[]).is_empty());
  }

  #[test]
  fn single_point() {
    assert_eq!(closest_neighbors(&points(&[(3, 3)])), vec![None]);
  }

  #[test]
  fn out_of_range() {
    assert_none!(closest_neighbor(&points(&[(0, 0), (1, 1)]), 2));
  }

  #[test]
  fn pair_is_mutual() {
    let pts = points(&[(0, 0), (7, 1)]);
    assert_eq!(closest_neighbors(&pts), vec![Some(VertexId(1)), Some(VertexId(0))]);
  }

  #[test]
  fn tie_goes_to_first_in_scan_order() {
    let pts = points(&[(0, 0), (10, 0), (0, 10), (10, 10)]);
    assert_eq!(
      closest_neighbors(&pts),
      vec![
        Some(VertexId(1)),
        Some(VertexId(0)),
        Some(VertexId(0)),
        Some(VertexId(1))
      ]
    );
  }

  #[test]
  fn tie_with_later_point() {
    // Both 0 and 2 are at distance 1 from 1; 0 comes first.
    let pts = points(&[(0, 0), (1, 0), (2, 0)]);
    assert_some_eq!(closest_neighbor(&pts, 1), VertexId(0));
  }

  #[test]
  fn asymmetric() {
    let pts = points(&[(0, 0), (2, 0), (5, 0)]);
    let closest = closest_neighbors(&pts);
    assert_eq!(closest[2], Some(VertexId(1)));
    assert_eq!(closest[1], Some(VertexId(0)));
  }

  #[test]
  fn duplicate_positions() {
    let pts = points(&[(4, 4), (0, 0), (4, 4)]);
    assert_eq!(
      closest_neighbors(&pts),
      vec![Some(VertexId(2)), Some(VertexId(0)), Some(VertexId(0))]
    );
  }

  #[test]
  fn extreme_coordinates() {
    let pts = points(&[(i64::MIN, i64::MIN), (i64::MAX, i64::MAX), (0, 0)]);
    assert_eq!(closest_neighbors(&pts)[0], Some(VertexId(2)));
    assert_eq!(closest_neighbors(&pts)[1], Some(VertexId(2)));
  }

  proptest! {
    #[test]
    fn closest_is_minimal(pts in layout_8(1..20)) {
      let closest = closest_neighbors(&pts);
      for (idx, neighbor) in closest.iter().enumerate() {
        if pts.len() < 2 {
          prop_assert_eq!(*neighbor, None);
          continue;
        }
        let neighbor = neighbor.expect("two or more points");
        prop_assert_ne!(neighbor.0, idx);
        for (other, pt) in pts.iter().enumerate() {
          if other == idx {
            continue;
          }
          let order = pts[idx].cmp_distance_to(&pts[neighbor.0], pt);
          prop_assert_ne!(order, Ordering::Greater);
          if other < neighbor.0 {
            prop_assert_eq!(order, Ordering::Less);
          }
        }
      }
    }

    #[test]
    fn deterministic(pts in layout_8(0..20)) {
      prop_assert_eq!(closest_neighbors(&pts), closest_neighbors(&pts));
    }
  }
}
