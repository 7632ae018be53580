use std::cmp::Ordering;

use crate::data::Point;
use crate::HullScalar;
use num_traits::Zero;

#[derive(PartialEq, Eq, PartialOrd, Ord, Debug, Copy, Clone)]
pub enum Orientation {
  CounterClockWise,
  ClockWise,
  CoLinear,
}

/// Signed turn determinant of the walk `p1` -> `p2` -> `p3`, computed as
/// `(p3.y - p2.y)*(p2.x - p1.x) - (p2.y - p1.y)*(p3.x - p2.x)`.
///
/// Negative means the walk turns clockwise (a right turn), zero means the
/// three points are colinear, positive means counter-clockwise (a left
/// turn). The formula is division-free, so duplicate x-coordinates and
/// duplicate points go through the same three-way comparison as any other
/// input.
///
/// The sign test is exact for the values given; no epsilon is applied.
/// Floating-point inputs whose true orientation lies within rounding error
/// of zero may therefore be classified either way. Use [`turn_delta_exact`]
/// to evaluate float coordinates without rounding, or an arbitrary
/// precision scalar such as `BigRational` throughout.
pub fn turn_delta<T>(p1: &Point<T>, p2: &Point<T>, p3: &Point<T>) -> T
where
  T: HullScalar,
{
  let [x1, y1] = p1.array.clone();
  let [x2, y2] = p2.array.clone();
  let [x3, y3] = p3.array.clone();
  (y3 - y2.clone()) * (x2.clone() - x1) - (y2 - y1) * (x3 - x2)
}

/// Evaluate [`turn_delta`] exactly by lifting float coordinates into
/// rationals.
///
/// # Panics
///
/// Panics if any coordinate is NaN or infinite.
pub fn turn_delta_exact<T>(p1: &Point<T>, p2: &Point<T>, p3: &Point<T>) -> num::BigRational
where
  T: num::traits::float::FloatCore,
{
  let lift = |pt: &Point<T>| pt.cast(|c| float_to_rational(c));
  turn_delta(&lift(p1), &lift(p2), &lift(p3))
}

fn float_to_rational(f: impl num::traits::float::FloatCore) -> num::BigRational {
  num::BigRational::from_float(f).expect("cannot convert NaN or infinite to exact precision number")
}

impl Orientation {
  /// Determine the direction you have to turn if you walk from `p1`
  /// to `p2` to `p3`.
  ///
  /// Classifies the sign of [`turn_delta`]; the comparison against zero is
  /// exact.
  ///
  /// # Examples
  ///
  /// ```rust
  /// # use monohull::data::Point;
  /// # use monohull::Orientation;
  /// let p1 = Point::new([0, 0]);
  /// let p2 = Point::new([0, 1]); // One unit above p1.
  /// // (0,0) -> (0,1) -> (0,2) == Orientation::CoLinear
  /// assert!(Orientation::new(&p1, &p2, &Point::new([0, 2])).is_colinear());
  /// // (0,0) -> (0,1) -> (-1,2) == Orientation::CounterClockWise
  /// assert!(Orientation::new(&p1, &p2, &Point::new([-1, 2])).is_ccw());
  /// // (0,0) -> (0,1) -> (1,2) == Orientation::ClockWise
  /// assert!(Orientation::new(&p1, &p2, &Point::new([1, 2])).is_cw());
  /// ```
  pub fn new<T>(p1: &Point<T>, p2: &Point<T>, p3: &Point<T>) -> Orientation
  where
    T: HullScalar,
  {
    match turn_delta(p1, p2, p3).partial_cmp(&T::zero()) {
      Some(Ordering::Less) => Orientation::ClockWise,
      Some(Ordering::Greater) => Orientation::CounterClockWise,
      _ => Orientation::CoLinear,
    }
  }

  pub fn is_colinear(self) -> bool {
    matches!(self, Orientation::CoLinear)
  }

  pub fn is_ccw(self) -> bool {
    matches!(self, Orientation::CounterClockWise)
  }

  pub fn is_cw(self) -> bool {
    matches!(self, Orientation::ClockWise)
  }

  #[must_use]
  pub fn reverse(self) -> Orientation {
    match self {
      Orientation::CounterClockWise => Orientation::ClockWise,
      Orientation::ClockWise => Orientation::CounterClockWise,
      Orientation::CoLinear => Orientation::CoLinear,
    }
  }
}

#[cfg(test)]
#[cfg(not(tarpaulin_include))]
mod tests {
  use super::*;

  use crate::testing::lattice_point;
  use geometry_predicates::predicates::orient2d;
  use num_rational::BigRational;
  use proptest::prelude::*;
  use test_strategy::proptest;

  fn raw(pt: &Point<f64>) -> [f64; 2] {
    [*pt.x_coord(), *pt.y_coord()]
  }

  #[test]
  fn vertical_then_rightward_is_cw() {
    assert_eq!(
      Orientation::new(&Point::new([0i64, 0]), &Point::new([0, 1]), &Point::new([2, 2])),
      Orientation::ClockWise
    );
  }

  #[test]
  fn duplicate_points_are_colinear() {
    let p = Point::new([0.3, 0.7]);
    let q = Point::new([0.9, 0.1]);
    assert!(Orientation::new(&p, &p, &q).is_colinear());
    assert!(Orientation::new(&p, &q, &p).is_colinear());
    assert!(Orientation::new(&p, &q, &q).is_colinear());
  }

  #[test]
  fn negative_zero_delta_is_colinear() {
    // This colinear walk evaluates to a determinant of -0.0, which must not
    // be classified as a right turn.
    let p1 = Point::new([1.0, 0.0]);
    let p2 = Point::new([0.0, 0.0]);
    let p3 = Point::new([2.0, 0.0]);
    assert_eq!(turn_delta(&p1, &p2, &p3).to_bits(), (-0.0f64).to_bits());
    assert!(Orientation::new(&p1, &p2, &p3).is_colinear());
  }

  #[proptest]
  fn sign_matches_exact_evaluation(
    #[strategy(lattice_point())] p1: Point<f64>,
    #[strategy(lattice_point())] p2: Point<f64>,
    #[strategy(lattice_point())] p3: Point<f64>,
  ) {
    // Lattice coordinates keep every product exactly representable, so the
    // inexact and the exact evaluation must agree on the sign.
    let delta = turn_delta(&p1, &p2, &p3);
    let exact = turn_delta_exact(&p1, &p2, &p3);
    prop_assert_eq!(
      delta.partial_cmp(&0.0),
      exact.partial_cmp(&BigRational::from_integer(0.into()))
    );
  }

  #[proptest]
  fn zero_iff_colinear(
    #[strategy(lattice_point())] p1: Point<f64>,
    #[strategy(lattice_point())] p2: Point<f64>,
    #[strategy(lattice_point())] p3: Point<f64>,
  ) {
    let delta = turn_delta(&p1, &p2, &p3);
    let oracle = orient2d(raw(&p1), raw(&p2), raw(&p3));
    prop_assert_eq!(delta.partial_cmp(&0.0), oracle.partial_cmp(&0.0));
  }

  #[proptest]
  fn reversal_flips_orientation(
    #[strategy(lattice_point())] p1: Point<f64>,
    #[strategy(lattice_point())] p2: Point<f64>,
    #[strategy(lattice_point())] p3: Point<f64>,
  ) {
    prop_assert_eq!(
      Orientation::new(&p1, &p2, &p3),
      Orientation::new(&p3, &p2, &p1).reverse()
    );
  }
}
