pub mod convex_hull;

#[doc(inline)]
pub use convex_hull::monotone_chain::{convex_hull, convex_hull_with, is_convex_chain};
