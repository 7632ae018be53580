use rand::distributions::uniform::SampleUniform;
use rand::distributions::{Distribution, Uniform};
use rand::Rng;
use std::cmp::Ordering;
use std::ops::{Index, Range};

use crate::data::Point;
use crate::{Error, HullScalar};

/// An immutable set of at least three points, sorted by x with ties broken
/// by y.
///
/// Hull construction identifies vertices by index into the set; the
/// ordering is established once, at construction, and never changes
/// afterwards, so indices stay stable for the lifetime of a computation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PointSet<T> {
  points: Vec<Point<T>>,
}

impl<T> PointSet<T>
where
  T: HullScalar,
{
  /// Sort `points` by x (ties by y) and take ownership of the result.
  ///
  /// # Errors
  ///
  /// `Error::InsufficientPoints` if fewer than three points are given.
  pub fn new(mut points: Vec<Point<T>>) -> Result<PointSet<T>, Error> {
    if points.len() < 3 {
      return Err(Error::InsufficientPoints);
    }
    points.sort_unstable_by(|a, b| a.cmp_xy(b));
    Ok(PointSet { points })
  }

  /// Take ownership of an already sorted sequence without re-sorting it.
  ///
  /// Failing fast on an unsorted sequence surfaces bugs in the caller
  /// instead of masking them with a silent re-sort.
  ///
  /// # Errors
  ///
  /// `Error::InsufficientPoints` if fewer than three points are given.
  /// `Error::UnsortedPoints` if the sequence is not sorted by x, then y.
  pub fn new_sorted(points: Vec<Point<T>>) -> Result<PointSet<T>, Error> {
    if points.len() < 3 {
      return Err(Error::InsufficientPoints);
    }
    let sorted = points
      .windows(2)
      .all(|pair| pair[0].cmp_xy(&pair[1]) != Ordering::Greater);
    if !sorted {
      return Err(Error::UnsortedPoints);
    }
    Ok(PointSet { points })
  }

  /// Sample `n` points whose coordinates are drawn independently and
  /// uniformly from `domain` on both axes.
  ///
  /// The randomness source is injected so callers control determinism. A
  /// margin inside the unit square, such as `0.05..0.95`, keeps points away
  /// from the edges of a render target.
  ///
  /// # Errors
  ///
  /// `Error::InsufficientPoints` if `n < 3`.
  ///
  /// # Examples
  ///
  /// ```rust
  /// # use monohull::data::PointSet;
  /// use rand::SeedableRng;
  /// let rng = &mut rand::rngs::SmallRng::seed_from_u64(31);
  /// let points = PointSet::random(100, 0.05..0.95, rng)?;
  /// assert_eq!(points.len(), 100);
  /// # Ok::<(), monohull::Error>(())
  /// ```
  pub fn random<R>(n: usize, domain: Range<T>, rng: &mut R) -> Result<PointSet<T>, Error>
  where
    T: SampleUniform + Copy,
    R: Rng + ?Sized,
  {
    if n < 3 {
      return Err(Error::InsufficientPoints);
    }
    let coord = Uniform::from(domain);
    let points = (0..n)
      .map(|_| Point::new([coord.sample(rng), coord.sample(rng)]))
      .collect();
    PointSet::new(points)
  }
}

impl<T> PointSet<T> {
  pub fn len(&self) -> usize {
    self.points.len()
  }

  pub fn is_empty(&self) -> bool {
    self.points.is_empty()
  }

  pub fn points(&self) -> &[Point<T>] {
    &self.points
  }

  pub fn point(&self, idx: usize) -> &Point<T> {
    &self.points[idx]
  }

  pub fn iter(&self) -> std::slice::Iter<'_, Point<T>> {
    self.points.iter()
  }
}

impl<T> Index<usize> for PointSet<T> {
  type Output = Point<T>;
  fn index(&self, key: usize) -> &Point<T> {
    self.points.index(key)
  }
}
