// #![deny(warnings)]
#![deny(clippy::cast_lossless)]
use num_traits::*;
use std::cmp::Ordering;

pub mod algorithms;
pub mod data;
mod orientation;
pub mod step;

pub use orientation::{turn_delta, turn_delta_exact, Orientation};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
  /// A point set needs at least three points.
  InsufficientPoints,
  /// A sequence claimed to be sorted by x (ties by y) is not.
  UnsortedPoints,
  /// Three consecutive hull vertices are oriented clockwise.
  ConvexViolation,
}

impl std::fmt::Display for Error {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> Result<(), std::fmt::Error> {
    match self {
      Error::InsufficientPoints => write!(f, "Insufficient points"),
      Error::UnsortedPoints => write!(f, "Points are not sorted by x, then y"),
      Error::ConvexViolation => write!(f, "Convex violation"),
    }
  }
}

pub trait TotalOrd {
  fn total_cmp(&self, other: &Self) -> Ordering;
}

impl<A: TotalOrd> TotalOrd for &A {
  fn total_cmp(&self, other: &Self) -> Ordering {
    (*self).total_cmp(*other)
  }
}

impl<A: TotalOrd, B: TotalOrd> TotalOrd for (A, B) {
  fn total_cmp(&self, other: &Self) -> Ordering {
    self
      .0
      .total_cmp(&other.0)
      .then_with(|| self.1.total_cmp(&other.1))
  }
}

/// Scalar types the hull machinery computes with.
///
/// `PartialOrd` carries the sign test of the orientation determinant (the
/// `< 0` comparison is exact, IEEE semantics for floats); `TotalOrd` carries
/// the x-then-y sort of point sets, total even in the presence of NaN.
pub trait HullScalar:
  std::fmt::Debug + NumOps<Self, Self> + Zero + TotalOrd + PartialOrd + Clone
{
}

macro_rules! fixed_precision {
  ( $( $ty:ty ),* ) => {
    $(
      impl TotalOrd for $ty {
        fn total_cmp(&self, other: &Self) -> Ordering {
          self.cmp(other)
        }
      }

      impl HullScalar for $ty {}
    )*
  };
}

macro_rules! floating_precision {
  ( $( $ty:ty ),* ) => {
    $(
      impl TotalOrd for $ty {
        fn total_cmp(&self, other: &Self) -> Ordering {
          <$ty>::total_cmp(self, other)
        }
      }

      impl HullScalar for $ty {}
    )*
  };
}

macro_rules! wrapped_floating_precision {
  ( $( $ty:ty ),* ) => {
    $(
      impl TotalOrd for $ty {
        fn total_cmp(&self, other: &Self) -> Ordering {
          self.cmp(other)
        }
      }

      impl HullScalar for $ty {}
    )*
  };
}

macro_rules! arbitrary_precision {
  ( $( $ty:ty ),* ) => {
    $(
      impl TotalOrd for $ty {
        fn total_cmp(&self, other: &Self) -> Ordering {
          self.cmp(other)
        }
      }

      impl HullScalar for $ty {}
    )*
  };
}

fixed_precision!(i8, i16, i32, i64, i128, isize);
floating_precision!(f32, f64);
wrapped_floating_precision!(
  ordered_float::OrderedFloat<f32>,
  ordered_float::OrderedFloat<f64>,
  ordered_float::NotNan<f32>,
  ordered_float::NotNan<f64>
);
arbitrary_precision!(num_bigint::BigInt, num_rational::BigRational);

#[cfg(test)]
pub mod testing;
