use rand::Rng;
use std::convert::TryFrom;

use crate::data::Point;
use crate::Error;

/// $O(n)$ Scatter `n` points over the integer grid `[0, n) x [0, n)`.
///
/// Both coordinates are drawn independently and uniformly, `x` first. Points
/// may coincide.
///
/// ```rust
/// # use mapgraph::algorithms::random_points;
/// # use mapgraph::Error;
/// let points = random_points(10, &mut rand::thread_rng())?;
/// assert_eq!(points.len(), 10);
/// assert!(points.iter().all(|pt| (0..10).contains(pt.x_coord())));
/// # Ok::<(), Error>(())
/// ```
pub fn random_points<R>(n: usize, rng: &mut R) -> Result<Vec<Point<i64>>, Error>
where
  R: Rng + ?Sized,
{
  let bound = i64::try_from(n).map_err(|_| Error::InvalidArgument)?;
  Ok(
    (0..n)
      .map(|_| {
        let x = rng.gen_range(0..bound);
        let y = rng.gen_range(0..bound);
        Point::new([x, y])
      })
      .collect(),
  )
}
