// Observation of hull construction, one stack mutation at a time. The
// builder calls the observer synchronously; rendering, pacing and recording
// all live on the observer side of this seam.

use std::sync::{Arc, Mutex, MutexGuard};

use crate::data::PointSet;

/// A single mutation of the hull sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepKind {
  /// The point at this index was appended to the hull sequence.
  Push(usize),
  /// The point at this index was retracted from the end of the hull
  /// sequence.
  Pop(usize),
}

/// Read-only view of the builder state, handed to observers after every
/// mutation of the hull sequence.
///
/// The borrowed `hull` buffer is reused by the builder as soon as the
/// observer returns; observers that keep a snapshot must copy it.
#[derive(Debug, Clone, Copy)]
pub struct HullStep<'a, T> {
  pub kind: StepKind,
  pub points: &'a PointSet<T>,
  pub hull: &'a [usize],
}

/// Observer invoked synchronously by the hull builder after each push or
/// pop.
pub trait StepObserver<T> {
  fn on_step(&mut self, step: HullStep<'_, T>);
}

/// Adapt a closure into a [`StepObserver`].
pub fn from_fn<F>(f: F) -> FromFn<F> {
  FromFn(f)
}

pub struct FromFn<F>(F);

impl<T, F> StepObserver<T> for FromFn<F>
where
  F: FnMut(HullStep<'_, T>),
{
  fn on_step(&mut self, step: HullStep<'_, T>) {
    (self.0)(step)
  }
}

/// Records a copy of the hull sequence after every mutation.
#[derive(Debug, Default)]
pub struct StepRecorder {
  steps: Vec<Vec<usize>>,
}

impl StepRecorder {
  pub fn new() -> StepRecorder {
    StepRecorder::default()
  }

  /// Every intermediate hull sequence, oldest first. The last entry equals
  /// the finished hull.
  pub fn steps(&self) -> &[Vec<usize>] {
    &self.steps
  }
}

impl<T> StepObserver<T> for StepRecorder {
  fn on_step(&mut self, step: HullStep<'_, T>) {
    self.steps.push(step.hull.to_vec());
  }
}

/// Shares the most recent hull snapshot across threads.
///
/// The builder side publishes a fresh copy after every mutation; any clone
/// of the cell reads the latest published copy. Readers see
/// stale-but-consistent data: a snapshot is replaced wholesale under the
/// lock, so a torn sequence is never observable, and the builder is never
/// blocked beyond the copy itself.
#[derive(Debug, Clone, Default)]
pub struct SnapshotCell {
  latest: Arc<Mutex<Vec<usize>>>,
}

impl SnapshotCell {
  pub fn new() -> SnapshotCell {
    SnapshotCell::default()
  }

  /// Copy of the most recently published hull sequence. Empty until the
  /// builder publishes its first step.
  pub fn latest(&self) -> Vec<usize> {
    self.lock().clone()
  }

  fn lock(&self) -> MutexGuard<'_, Vec<usize>> {
    // The buffer is only ever replaced wholesale, so even a lock poisoned
    // by a panicking publisher still holds a consistent snapshot.
    match self.latest.lock() {
      Ok(guard) => guard,
      Err(poisoned) => poisoned.into_inner(),
    }
  }
}

impl<T> StepObserver<T> for SnapshotCell {
  fn on_step(&mut self, step: HullStep<'_, T>) {
    let mut latest = self.lock();
    latest.clear();
    latest.extend_from_slice(step.hull);
  }
}
