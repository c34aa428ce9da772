// Strategies for:
//  * points
//  * vertex layouts
//  * seeded random graphs
use crate::algorithms::random_graph;
use crate::data::{Graph, Point};

use core::ops::Range;
use proptest::collection::vec;
use proptest::prelude::*;
use rand::SeedableRng;

///////////////////////////////////////////////////////////////////////////////
// Points

pub fn any_8() -> impl Strategy<Value = Point<i8>> {
  any::<[i8; 2]>().prop_map(Point::new)
}

pub fn any_64() -> impl Strategy<Value = Point<i64>> {
  any::<[i64; 2]>().prop_map(Point::new)
}

///////////////////////////////////////////////////////////////////////////////
// Layouts

/// Points with coordinates in `coords`. Duplicates are likely for small ranges.
pub fn layout(size: Range<usize>, coords: Range<i64>) -> impl Strategy<Value = Vec<Point<i64>>> {
  vec((coords.clone(), coords).prop_map(Point::from), size)
}

/// Points with `i8` coordinates, widened to `i64`.
pub fn layout_8(size: Range<usize>) -> impl Strategy<Value = Vec<Point<i64>>> {
  vec(
    any::<(i8, i8)>().prop_map(|(x, y)| Point::new([i64::from(x), i64::from(y)])),
    size,
  )
}

///////////////////////////////////////////////////////////////////////////////
// Graphs

/// Graphs built by [`random_graph`] from a random seed.
pub fn seeded_graph(size: Range<i64>) -> impl Strategy<Value = Graph<i64>> {
  (size, any::<u64>()).prop_filter_map("valid vertex count", |(n, seed)| {
    let rng = &mut rand::rngs::SmallRng::seed_from_u64(seed);
    random_graph(n, rng).ok()
  })
}
