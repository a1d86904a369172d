//! Nearest-vertex jump search.
//!
//! Purpose
//! - Find the polygon vertex closest to a line in O(log n) distance
//!   evaluations instead of scanning all `n` vertices.
//!
//! Model
//! - Convexity makes the vertex distances unimodal around the boundary when
//!   the line does not cross the polygon. Starting at vertex 0 with
//!   `step = ceil(n/2)`, compare both neighbours and jump `step` vertices
//!   towards the closer one (ties jump right), halving `step` until it is 0.
//! - The coarse jumps can stop a few vertices short of the minimum, so the
//!   result is the best vertex of the window `index-3 ..= index+1`
//!   (`Refine::Window`). That window is a heuristic: on some convex inputs
//!   it misses the true minimum. `Refine::Descend` continues downhill from the
//!   window and is exact whenever unimodality holds.
//!
//! Tracing is opt-in: `find_nearest_vertex_traced` records every visit for
//! plotting collaborators; the other entry points record nothing.

mod jump;
mod types;

pub use crate::geom2::Nearest;
pub use types::{Phase, Refine, SearchCfg, SearchTrace, Visit};

use crate::geom2::{GeomError, Line, Polygon};

/// Minimum vertex-to-line distance with the default configuration.
///
/// Pre: `poly` convex, vertices in consistent order, `line` not crossing it.
pub fn find_minimum_distance(poly: &Polygon, line: &Line) -> f64 {
    find_nearest_vertex(poly, line).distance
}

/// Vertex located by the jump search with the default configuration.
pub fn find_nearest_vertex(poly: &Polygon, line: &Line) -> Nearest {
    find_nearest_vertex_with_cfg(poly, line, SearchCfg::default())
}

pub fn find_nearest_vertex_with_cfg(poly: &Polygon, line: &Line, cfg: SearchCfg) -> Nearest {
    jump::JumpRunner::new(poly, line, cfg, None).run()
}

/// Same search, also returning every visited vertex in order.
pub fn find_nearest_vertex_traced(
    poly: &Polygon,
    line: &Line,
    cfg: SearchCfg,
) -> (Nearest, SearchTrace) {
    let mut trace = SearchTrace::default();
    let best = jump::JumpRunner::new(poly, line, cfg, Some(&mut trace)).run();
    (best, trace)
}

/// Validate raw coordinates, then search.
///
/// The line is checked first, so `(0, 0, c)` reports `InvalidLine` even when
/// the vertex list is empty too.
pub fn min_distance_xy(xy: &[[f64; 2]], coeffs: [f64; 3]) -> Result<f64, GeomError> {
    let line = Line::from_coeffs(coeffs)?;
    let poly = Polygon::from_xy(xy)?;
    Ok(find_minimum_distance(&poly, &line))
}

#[cfg(test)]
mod tests;
