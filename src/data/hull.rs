use claims::debug_assert_ok;

use crate::data::{Point, PointSet};
use crate::{Error, HullScalar};

/// The vertices of a convex hull in boundary order, stored as indices into
/// the point set the hull was built from.
///
/// Each hull vertex is listed exactly once; the closing edge from the last
/// vertex back to the first is implicit. When every input point lies on a
/// single line the "hull" degenerates to the sorted chain walked out and
/// back, which still satisfies [`Hull::validate`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hull {
  indices: Vec<usize>,
}

impl Hull {
  pub(crate) fn new_unchecked<T>(indices: Vec<usize>, points: &PointSet<T>) -> Hull
  where
    T: HullScalar,
  {
    let hull = Hull { indices };
    debug_assert_ok!(hull.validate(points));
    hull
  }

  pub fn indices(&self) -> &[usize] {
    &self.indices
  }

  pub fn len(&self) -> usize {
    self.indices.len()
  }

  pub fn is_empty(&self) -> bool {
    self.indices.is_empty()
  }

  pub fn into_indices(self) -> Vec<usize> {
    self.indices
  }

  /// Iterate over the hull vertices in boundary order.
  pub fn vertices<'a, T>(&'a self, points: &'a PointSet<T>) -> impl Iterator<Item = &'a Point<T>> {
    self.indices.iter().map(move |&idx| points.point(idx))
  }

  /// Walk the closed boundary and check that no consecutive vertex triple
  /// turns clockwise. Colinear triples are accepted.
  ///
  /// # Errors
  ///
  /// `Error::ConvexViolation` when some triple turns clockwise.
  pub fn validate<T>(&self, points: &PointSet<T>) -> Result<(), Error>
  where
    T: HullScalar,
  {
    let n = self.indices.len();
    for i in 0..n {
      let p1 = points.point(self.indices[i]);
      let p2 = points.point(self.indices[(i + 1) % n]);
      let p3 = points.point(self.indices[(i + 2) % n]);
      if p1.orientation(p2, p3).is_cw() {
        return Err(Error::ConvexViolation);
      }
    }
    Ok(())
  }
}

#[cfg(test)]
#[cfg(not(tarpaulin_include))]
mod tests {
  use super::*;

  fn square() -> PointSet<i64> {
    PointSet::new_sorted(vec![
      Point::new([0, 0]),
      Point::new([0, 2]),
      Point::new([2, 0]),
      Point::new([2, 2]),
    ])
    .unwrap()
  }

  #[test]
  fn counter_clockwise_boundary_is_valid() {
    let points = square();
    let hull = Hull {
      indices: vec![0, 2, 3, 1],
    };
    assert_eq!(hull.validate(&points), Ok(()));
  }

  #[test]
  fn clockwise_boundary_is_rejected() {
    let points = square();
    let hull = Hull {
      indices: vec![0, 1, 3, 2],
    };
    assert_eq!(hull.validate(&points), Err(Error::ConvexViolation));
  }

  #[test]
  fn flat_chain_out_and_back_is_valid() {
    let points = PointSet::new_sorted(vec![
      Point::new([0, 0]),
      Point::new([1, 1]),
      Point::new([2, 2]),
      Point::new([3, 3]),
    ])
    .unwrap();
    let hull = Hull {
      indices: vec![0, 1, 2, 3, 2, 1],
    };
    assert_eq!(hull.validate(&points), Ok(()));
  }

  #[test]
  fn vertices_follow_the_index_order() {
    let points = square();
    let hull = Hull {
      indices: vec![0, 2, 3, 1],
    };
    let xs: Vec<i64> = hull.vertices(&points).map(|pt| *pt.x_coord()).collect();
    assert_eq!(xs, vec![0, 2, 2, 0]);
    assert_eq!(hull.into_indices(), vec![0, 2, 3, 1]);
  }
}
