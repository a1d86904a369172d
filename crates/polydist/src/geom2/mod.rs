//! 2D primitives for the nearest-vertex search.
//!
//! Purpose
//! - `Line` is the implicit line `a·x + b·y = c` with a nonzero normal `(a, b)`.
//! - `Polygon` is a non-empty cyclic vertex sequence (convex by contract).
//! - `distance` is the perpendicular point-to-line distance; `brute_force_*`
//!   scan every vertex and serve as the oracle for the jump search.
//!
//! Validation happens once, at construction. Everything downstream of a
//! constructed `Line`/`Polygon` is total.

mod error;
pub mod rand;
mod types;
mod util;

pub use error::GeomError;
pub use types::{Line, Nearest, Point, Polygon};
pub use util::{brute_force_min_distance, brute_force_nearest, distance};
