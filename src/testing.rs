// Strategies for generating point sets:
//  * uniform floating-point sets, the visualization domain
//  * lattice sets whose turn determinants are exact in f64
//  * fully colinear sets, the degenerate boundary case
use crate::data::{Point, PointSet};

use core::ops::Range;
use proptest::collection::vec;
use proptest::prelude::*;
use rand::rngs::SmallRng;
use rand::SeedableRng;

/// A point with integer coordinates in a range small enough that every
/// product in the turn determinant stays exactly representable in f64.
pub fn lattice_point() -> impl Strategy<Value = Point<f64>> {
  (-1000i32..1000, -1000i32..1000)
    .prop_map(|(x, y)| Point::new([f64::from(x), f64::from(y)]))
}

/// Uniform random point sets drawn through [`PointSet::random`] with a
/// seeded generator, so failures shrink to a reproducible (size, seed)
/// pair.
pub fn point_set_f64(size: Range<usize>) -> impl Strategy<Value = PointSet<f64>> {
  (size, any::<u64>()).prop_map(|(n, seed)| {
    let rng = &mut SmallRng::seed_from_u64(seed);
    PointSet::random(n.max(3), 0.05..0.95, rng).unwrap()
  })
}

/// Point sets on the lattice; duplicates and colinear runs are likely and
/// welcome.
pub fn point_set_lattice(size: Range<usize>) -> impl Strategy<Value = PointSet<f64>> {
  vec(lattice_point(), size.start.max(3)..size.end)
    .prop_map(|pts| PointSet::new(pts).unwrap())
}

/// Point sets that lie on a single line, exactly.
pub fn point_set_colinear(size: Range<usize>) -> impl Strategy<Value = PointSet<f64>> {
  vec(-1000i32..1000, size.start.max(3)..size.end).prop_map(|params| {
    let pts = params
      .into_iter()
      .map(|t| Point::new([f64::from(t), f64::from(t) * 0.5]))
      .collect();
    PointSet::new(pts).unwrap()
  })
}
