//! Print the jump-search path on random convex polygons next to the exact answer.
//!
//! Usage:
//!   cargo run -p polydist --example trace_walk -- 24
//!
//! For each sample prints n, the visited indices per phase, and whether the
//! fixed window found the brute-force minimum.

use polydist::geom2::rand::{
    draw_convex_polygon, line_clear_of, RadialCfg, ReplayToken, VertexCount,
};
use polydist::{brute_force_nearest, find_nearest_vertex_traced, Phase, SearchCfg};

fn main() {
    let n: usize = std::env::args()
        .nth(1)
        .and_then(|s| s.parse().ok())
        .unwrap_or(16);
    let cfg = RadialCfg {
        vertex_count: VertexCount::Fixed(n),
        radial_jitter: 0.2,
        ..RadialCfg::default()
    };
    for index in 0..8 {
        let poly = match draw_convex_polygon(cfg, ReplayToken { seed: 2025, index }) {
            Ok(p) => p,
            Err(e) => {
                eprintln!("draw {index}: {e}");
                continue;
            }
        };
        let line = match line_clear_of(&poly, index as f64 * 0.9, 1.0) {
            Ok(l) => l,
            Err(e) => {
                eprintln!("line {index}: {e}");
                continue;
            }
        };
        let (best, trace) = find_nearest_vertex_traced(&poly, &line, SearchCfg::default());
        let oracle = brute_force_nearest(&poly, &line);
        println!(
            "n={:>3} jumps={:?} window={:?} best={} ({:.4}) exact={} ({:.4}){}",
            poly.len(),
            trace.indices(Phase::Jump),
            trace.indices(Phase::Window),
            best.index,
            best.distance,
            oracle.index,
            oracle.distance,
            if best.distance > oracle.distance { "  MISS" } else { "" }
        );
    }
}
