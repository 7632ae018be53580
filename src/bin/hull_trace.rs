// Text rendition of the hull animation: generate a random point set, print
// every mutation of the hull sequence, then the finished hull. A renderer
// would consume the same step stream and draw instead of print.

use monohull::algorithms::convex_hull_with;
use monohull::data::PointSet;
use monohull::step::{from_fn, StepKind};
use monohull::Error;

const POINT_COUNT: usize = 100;

fn main() -> Result<(), Error> {
  let count = std::env::args()
    .nth(1)
    .and_then(|arg| arg.parse().ok())
    .unwrap_or(POINT_COUNT);
  let rng = &mut rand::thread_rng();
  let points = PointSet::random(count, 0.05..0.95, rng)?;

  println!("- Points -");
  for pt in points.iter() {
    println!("{} {}", pt.x_coord(), pt.y_coord());
  }

  println!("- Steps -");
  let hull = convex_hull_with(
    &points,
    &mut from_fn(|step| {
      match step.kind {
        StepKind::Push(idx) => print!("push {:>4}  ", idx),
        StepKind::Pop(idx) => print!("pop  {:>4}  ", idx),
      }
      println!("{:?}", step.hull);
    }),
  );

  println!("- Convex Hull -");
  for pt in hull.vertices(&points) {
    println!("{} {}", pt.x_coord(), pt.y_coord());
  }
  Ok(())
}
