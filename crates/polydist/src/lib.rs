//! Nearest vertex of a convex polygon to a non-intersecting line.
//!
//! The crate is split in two:
//! - `geom2`: points, lines, polygons, the perpendicular distance and a
//!   brute-force oracle; `geom2::rand` draws reproducible convex fixtures.
//! - `search`: the logarithmic jump search (`find_minimum_distance`) with an
//!   optional diagnostic trace.
//!
//! Contract
//! - Polygons are assumed convex with vertices in consistent angular order, and
//!   the line is assumed not to cross the polygon. Neither is verified; under
//!   these assumptions the vertex distances are unimodal around the boundary,
//!   which is what the search exploits.

pub mod geom2;
pub mod search;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use geom2::{
    brute_force_min_distance, brute_force_nearest, distance, GeomError, Line, Point, Polygon,
};
pub use nalgebra::Vector2 as Vec2;
pub use search::{
    find_minimum_distance, find_nearest_vertex, find_nearest_vertex_traced,
    find_nearest_vertex_with_cfg, min_distance_xy, Nearest, Phase, Refine, SearchCfg,
    SearchTrace, Visit,
};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::geom2::rand::{
        draw_convex_polygon, line_clear_of, Orientation, RadialCfg, ReplayToken, VertexCount,
    };
    pub use crate::geom2::{
        brute_force_min_distance, brute_force_nearest, distance, GeomError, Line, Point, Polygon,
    };
    pub use crate::search::{
        find_minimum_distance, find_nearest_vertex, find_nearest_vertex_traced,
        find_nearest_vertex_with_cfg, min_distance_xy, Nearest, Phase, Refine, SearchCfg,
        SearchTrace, Visit,
    };
    pub use nalgebra::Vector2 as Vec2;
}
