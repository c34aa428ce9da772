use std::cmp::Ordering;
use std::ops::Deref;
use std::ops::Index;

use crate::{Coordinate, Orientation};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct Point<T> {
  pub array: [T; 2],
}

impl<T> Point<T> {
  pub const fn new(array: [T; 2]) -> Point<T> {
    Point { array }
  }

  pub fn x_coord(&self) -> &T {
    &self.array[0]
  }

  pub fn y_coord(&self) -> &T {
    &self.array[1]
  }

  /// Compare the Euclidean distance from `self` to `p` with the distance from
  /// `self` to `q`. Exact for every input.
  ///
  /// ```rust
  /// # use mapgraph::data::Point;
  /// # use std::cmp::Ordering;
  /// let origin = Point::new([0, 0]);
  /// assert_eq!(origin.cmp_distance_to(&Point::new([3, 4]), &Point::new([0, 5])), Ordering::Equal);
  /// assert_eq!(origin.cmp_distance_to(&Point::new([1, 1]), &Point::new([0, 2])), Ordering::Less);
  /// ```
  pub fn cmp_distance_to(&self, p: &Point<T>, q: &Point<T>) -> Ordering
  where
    T: Coordinate,
  {
    T::cmp_dist(&self.array, &p.array, &q.array)
  }

  pub fn orientation(&self, q: &Point<T>, r: &Point<T>) -> Orientation
  where
    T: Coordinate,
  {
    Orientation::new(&self.array, &q.array, &r.array)
  }

  /// Docs for [`Orientation::new`].
  pub fn orient(p: &Point<T>, q: &Point<T>, r: &Point<T>) -> Orientation
  where
    T: Coordinate,
  {
    Orientation::new(&p.array, &q.array, &r.array)
  }

  /// Euclidean distance as a float. Only meant for display; use
  /// [`Point::cmp_distance_to`] for comparisons.
  pub fn euclidean_distance(&self, other: &Point<T>) -> f64
  where
    T: Coordinate,
  {
    let coord = |t: &T| t.to_f64().unwrap_or(f64::NAN);
    let dx = coord(&self.array[0]) - coord(&other.array[0]);
    let dy = coord(&self.array[1]) - coord(&other.array[1]);
    dx.hypot(dy)
  }
}

impl<T> Index<usize> for Point<T> {
  type Output = T;
  fn index(&self, key: usize) -> &T {
    self.array.index(key)
  }
}

impl<T> Deref for Point<T> {
  type Target = [T; 2];
  fn deref(&self) -> &[T; 2] {
    &self.array
  }
}

impl<T> From<(T, T)> for Point<T> {
  fn from(point: (T, T)) -> Point<T> {
    Point {
      array: [point.0, point.1],
    }
  }
}

impl<T> From<[T; 2]> for Point<T> {
  fn from(array: [T; 2]) -> Point<T> {
    Point { array }
  }
}
