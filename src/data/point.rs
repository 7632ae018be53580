use array_init::{array_init, try_array_init};
use num_traits::*;
use ordered_float::{FloatIsNan, NotNan};
use rand::distributions::{Distribution, Standard};
use rand::Rng;
use std::cmp::Ordering;
use std::convert::TryFrom;
use std::ops::Index;

use crate::orientation::Orientation;
use crate::{HullScalar, TotalOrd};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Point<T> {
  pub array: [T; 2],
}

// Random sampling.
impl<T> Distribution<Point<T>> for Standard
where
  Standard: Distribution<T>,
{
  fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Point<T> {
    Point {
      array: array_init(|_| rng.gen()),
    }
  }
}

impl<T> Point<T> {
  pub const fn new(array: [T; 2]) -> Point<T> {
    Point { array }
  }

  /// # Panics
  ///
  /// Panics if any of the inputs are NaN.
  pub fn new_nn(array: [T; 2]) -> Point<NotNan<T>>
  where
    T: FloatCore,
  {
    Point::new(array_init(|i| NotNan::new(array[i]).unwrap()))
  }

  pub fn x_coord(&self) -> &T {
    &self.array[0]
  }

  pub fn y_coord(&self) -> &T {
    &self.array[1]
  }

  pub fn cast<U, F>(&self, f: F) -> Point<U>
  where
    T: Clone,
    F: Fn(T) -> U,
  {
    Point {
      array: array_init(|i| f(self.array[i].clone())),
    }
  }

  /// Determine the direction you have to turn if you walk from `self`
  /// to `q` to `r`.
  pub fn orientation(&self, q: &Point<T>, r: &Point<T>) -> Orientation
  where
    T: HullScalar,
  {
    Orientation::new(self, q, r)
  }

  /// Lexicographic comparison by x, then y. Total even for floats.
  pub fn cmp_xy(&self, other: &Point<T>) -> Ordering
  where
    T: TotalOrd,
  {
    (self.x_coord(), self.y_coord()).total_cmp(&(other.x_coord(), other.y_coord()))
  }
}

impl<T> Index<usize> for Point<T> {
  type Output = T;
  fn index(&self, key: usize) -> &T {
    self.array.index(key)
  }
}

impl<T> From<(T, T)> for Point<T> {
  fn from(point: (T, T)) -> Point<T> {
    Point {
      array: [point.0, point.1],
    }
  }
}

impl TryFrom<Point<f64>> for Point<NotNan<f64>> {
  type Error = FloatIsNan;
  fn try_from(point: Point<f64>) -> Result<Point<NotNan<f64>>, FloatIsNan> {
    Ok(Point {
      array: try_array_init(|i| NotNan::try_from(point.array[i]))?,
    })
  }
}
