use crate::data::{Hull, PointSet};
use crate::step::{HullStep, StepKind, StepObserver};
use crate::HullScalar;

// https://en.wikipedia.org/wiki/Convex_hull_algorithms#Andrew's_monotone_chain_algorithm

// Properties:
//    No panics.
//    The hull sequence is a convex chain after every push and pop.
//    Each scanned point is appended exactly once per pass; pops only ever
//    retract the tail of the chain.

/// $O(n)$ Convex hull of a sorted point set.
///
/// [Monotone chain][wiki] (Andrew's) algorithm: the lower chain is built by
/// scanning the points left to right, the upper chain by scanning back
/// right to left, retracting clockwise turns from the chain tail as each
/// point is taken in. Sorting is paid once, at [`PointSet`] construction,
/// which is what makes the scans linear.
///
/// # Properties
///
/// * The result walks the hull boundary counter-clockwise, starting at the
///   lowest-x point, listing each hull vertex exactly once.
/// * Points that lie on a hull edge between two corners are kept: only a
///   strict clockwise turn retracts a vertex. A fully colinear input
///   therefore yields the degenerate out-and-back chain of length 2n−2.
/// * Deterministic: the same point set always produces the same index
///   sequence.
///
/// # Examples
///
/// ```rust
/// # use monohull::algorithms::convex_hull;
/// # use monohull::data::{Point, PointSet};
/// let points = PointSet::new_sorted(vec![
///   Point::new([0.0, 0.0]),
///   Point::new([0.5, 0.8]),
///   Point::new([1.0, 0.0]),
/// ])?;
/// let hull = convex_hull(&points);
/// assert_eq!(hull.indices(), &[0, 2, 1]);
/// # Ok::<(), monohull::Error>(())
/// ```
///
/// [wiki]: https://en.wikipedia.org/wiki/Convex_hull_algorithms#Andrew's_monotone_chain_algorithm
pub fn convex_hull<T>(points: &PointSet<T>) -> Hull
where
  T: HullScalar,
{
  convex_hull_with(points, &mut Quiet)
}

/// Same as [`convex_hull`], notifying `observer` after every push and pop
/// of the hull sequence.
///
/// The observer runs synchronously on the builder's thread; see
/// [`crate::step`] for observers that record the history or publish
/// snapshots across threads.
pub fn convex_hull_with<T, O>(points: &PointSet<T>, observer: &mut O) -> Hull
where
  T: HullScalar,
  O: StepObserver<T>,
{
  ChainScan {
    points,
    hull: Vec::new(),
    observer,
  }
  .run()
}

/// True when walking `chain` through `points` never turns clockwise at any
/// consecutive triple.
///
/// The chain is treated as open; for the closed test around a finished
/// boundary see [`Hull::validate`].
pub fn is_convex_chain<T>(points: &PointSet<T>, chain: &[usize]) -> bool
where
  T: HullScalar,
{
  chain.windows(3).all(|w| {
    let p1 = points.point(w[0]);
    let p2 = points.point(w[1]);
    !p1.orientation(p2, points.point(w[2])).is_cw()
  })
}

struct Quiet;

impl<T> StepObserver<T> for Quiet {
  fn on_step(&mut self, _step: HullStep<'_, T>) {}
}

struct ChainScan<'a, T, O> {
  points: &'a PointSet<T>,
  hull: Vec<usize>,
  observer: &'a mut O,
}

impl<'a, T, O> ChainScan<'a, T, O>
where
  T: HullScalar,
  O: StepObserver<T>,
{
  fn run(mut self) -> Hull {
    let n = self.points.len();

    // Lower chain, scanning left to right.
    self.push(0);
    self.push(1);
    let mut l = 1;
    for k in 2..n {
      l = self.settle(k, l, 1);
    }

    // Upper chain, scanning right to left. The floor guards the finished
    // lower chain from retraction.
    self.push(n - 2);
    let floor = self.hull.len() - 1;
    l = floor;
    for k in (0..n - 2).rev() {
      l = self.settle(k, l, floor);
    }

    // The k = 0 step closed the boundary by appending the start index a
    // second time; its retraction loop is also what justified (or removed)
    // the last upper-chain candidate. Drop the duplicate.
    debug_assert_eq!(self.hull.last().copied(), Some(0));
    self.pop();

    Hull::new_unchecked(self.hull, self.points)
  }

  // Retract clockwise turns from the chain tail, then append `k`. Returns
  // the position of the last settled vertex. `floor` is the position below
  // which retraction must not descend.
  fn settle(&mut self, k: usize, mut l: usize, floor: usize) -> usize {
    while l >= floor && self.right_turn(l, k) {
      self.pop();
      l -= 1;
    }
    self.push(k);
    l + 1
  }

  fn right_turn(&self, l: usize, k: usize) -> bool {
    let p1 = self.points.point(self.hull[l - 1]);
    let p2 = self.points.point(self.hull[l]);
    p1.orientation(p2, self.points.point(k)).is_cw()
  }

  fn push(&mut self, idx: usize) {
    self.hull.push(idx);
    self.emit(StepKind::Push(idx));
  }

  fn pop(&mut self) {
    if let Some(idx) = self.hull.pop() {
      self.emit(StepKind::Pop(idx));
    }
  }

  fn emit(&mut self, kind: StepKind) {
    self.observer.on_step(HullStep {
      kind,
      points: self.points,
      hull: &self.hull,
    });
  }
}
